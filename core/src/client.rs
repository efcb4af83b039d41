//! Client façade over the single-use executor.

use crate::error::TransportError;
use crate::executor::RequestExecutor;
use crate::http::{ExecutionResult, RequestDescriptor};

/// Well-known control socket of the local container daemon.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/docker.sock";

/// Issues HTTP requests to a daemon listening on a unix domain socket.
///
/// Holds only the socket path. Every call constructs a fresh single-use
/// executor, so the client itself carries no handle state and may be kept
/// around and shared freely; there is no connection reuse across calls.
#[derive(Debug, Clone)]
pub struct DaemonClient {
    socket_path: String,
}

impl DaemonClient {
    pub fn new(socket_path: impl Into<String>) -> Self {
        DaemonClient {
            socket_path: socket_path.into(),
        }
    }

    pub fn socket_path(&self) -> &str {
        &self.socket_path
    }

    /// Perform `request` against the daemon and block for the full
    /// exchange.
    pub fn respond(&self, request: &RequestDescriptor) -> Result<ExecutionResult, TransportError> {
        RequestExecutor::new(Some(&self.socket_path))?.perform(request)
    }
}

impl Default for DaemonClient {
    fn default() -> Self {
        DaemonClient::new(DEFAULT_SOCKET_PATH)
    }
}
