//! Response byte collection during a transfer.

use curl::easy::{Handler, ReadError, WriteError};

/// Owns the header and body accumulators for one transfer.
///
/// The engine invokes these callbacks synchronously, in arrival order, on
/// the thread running the transfer. Chunk boundaries are arbitrary and need
/// not align with header lines, so the collector only appends. `read`
/// always reports zero bytes produced: outgoing bodies are attached whole
/// before the transfer, never streamed from here.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    headers: Vec<u8>,
    body: Vec<u8>,
}

impl Collector {
    /// Drain both accumulators into result snapshots, mapping an empty
    /// buffer to `None`.
    pub(crate) fn take(&mut self) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
        let headers = std::mem::take(&mut self.headers);
        let body = std::mem::take(&mut self.body);
        (
            (!headers.is_empty()).then_some(headers),
            (!body.is_empty()).then_some(body),
        )
    }
}

impl Handler for Collector {
    fn header(&mut self, data: &[u8]) -> bool {
        self.headers.extend_from_slice(data);
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        self.body.extend_from_slice(data);
        Ok(data.len())
    }

    fn read(&mut self, _data: &mut [u8]) -> Result<usize, ReadError> {
        Ok(0)
    }
}
