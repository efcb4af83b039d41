//! Single-use request executor over the native transport engine.
//!
//! # Design
//! One `RequestExecutor` owns one engine handle (`curl::easy::Easy2`) for
//! exactly one request. Construction binds the response collector to the
//! handle for its whole lifetime and applies the per-handle options (unix
//! socket path, signal handling off). `perform` maps a descriptor onto
//! per-request options, runs the blocking transfer, and finalizes the
//! result. The handle and any materialized header lists are released by
//! `Drop` on every exit path, whether or not `perform` ever ran.
//!
//! An instance is single-use: after `perform` returns, successfully or
//! not, every further call fails with `AlreadyPerformed`.

use curl::easy::{Easy2, List};

use crate::collector::Collector;
use crate::error::TransportError;
use crate::headers::{HeaderCategory, HeaderPlan};
use crate::http::{ExecutionResult, Method, RequestDescriptor};

/// Executes one HTTP request over a unix domain socket.
///
/// Blocking and synchronous: `perform` occupies the calling thread for the
/// full exchange and drives the response callbacks on that same thread.
/// One instance must stay on one thread at a time; separate instances are
/// independent and may run concurrently.
#[derive(Debug)]
pub struct RequestExecutor {
    handle: Easy2<Collector>,
    headers: HeaderPlan,
    performed: bool,
}

impl RequestExecutor {
    /// Allocate an engine handle bound to `unix_socket_path`.
    ///
    /// The path must be non-empty and free of interior NUL bytes so the
    /// engine can receive it as a C string; otherwise this fails with
    /// `InvalidSocketPath` before any handle is allocated. With no path,
    /// the executor talks plain TCP to whatever host the URL names.
    ///
    /// Signal-based internal timeouts are disabled on the handle, which is
    /// required for safe use outside a single-threaded signal-handling
    /// context.
    pub fn new(unix_socket_path: Option<&str>) -> Result<Self, TransportError> {
        if let Some(path) = unix_socket_path {
            if path.is_empty() || path.contains('\0') {
                return Err(TransportError::InvalidSocketPath);
            }
        }

        // Easy2 registers the collector's header/write/read callbacks for
        // the handle's entire lifetime.
        let mut handle = Easy2::new(Collector::default());

        handle
            .signal(false)
            .map_err(|e| TransportError::Init(e.description().to_string()))?;

        if let Some(path) = unix_socket_path {
            handle
                .unix_socket(path)
                .map_err(|e| TransportError::Init(e.description().to_string()))?;
        }

        Ok(RequestExecutor {
            handle,
            headers: HeaderPlan::default(),
            performed: false,
        })
    }

    /// Perform `request` and block until the exchange completes.
    ///
    /// Configures method, URL, headers, and body on the engine, flushes the
    /// planned header lists, runs the transfer, and packages the status
    /// code with the accumulated response bytes. Fails with
    /// `AlreadyPerformed` if this instance was already used; no engine
    /// state is touched in that case.
    pub fn perform(
        &mut self,
        request: &RequestDescriptor,
    ) -> Result<ExecutionResult, TransportError> {
        if self.performed {
            return Err(TransportError::AlreadyPerformed);
        }
        // Terminal from here on: a failed attempt must not be retried on
        // the same handle.
        self.performed = true;

        if request.url.is_empty() {
            return Err(TransportError::BadUrl);
        }

        let engine = |e: curl::Error| TransportError::Engine(e.description().to_string());

        match &request.method {
            Method::Get => self.handle.get(true).map_err(engine)?,
            Method::Post => self.handle.post(true).map_err(engine)?,
            Method::Head => self.handle.nobody(true).map_err(engine)?,
            Method::Other(verb) => self.handle.custom_request(verb).map_err(engine)?,
        }

        self.handle.url(&request.url).map_err(engine)?;

        // An empty mapping must set no header-list option at all; an
        // explicitly empty list would mean something else to the engine.
        for (key, value) in &request.headers {
            self.headers
                .append(HeaderCategory::Request, format!("{key}: {value}"));
        }

        for (category, lines) in self.headers.categories() {
            let mut list = List::new();
            for line in lines {
                list.append(line).map_err(engine)?;
            }
            match category {
                HeaderCategory::Request => self.handle.http_headers(list).map_err(engine)?,
            }
        }

        if let Some(body) = &request.body {
            self.handle
                .post_field_size(body.len() as u64)
                .map_err(engine)?;
            // The engine copies the bytes; the descriptor is not required
            // to outlive the transfer.
            self.handle.post_fields_copy(body).map_err(engine)?;
        }

        self.handle.perform().map_err(engine)?;

        let status_code = self.handle.response_code().map_err(engine)?;
        let (headers, body) = self.handle.get_mut().take();

        Ok(ExecutionResult {
            status_code,
            headers,
            body,
        })
    }
}
