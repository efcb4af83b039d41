//! Error types for the transport executor.
//!
//! # Design
//! Construction-time failures (`Init`, `InvalidSocketPath`) are separated
//! from per-request failures so callers can tell a misconfigured client
//! apart from a failed exchange. `Engine` carries the engine's own
//! diagnostic text verbatim; this crate never rewrites it. Nothing here is
//! retried internally, and retry policy belongs entirely to the caller.

use std::fmt;

/// Errors returned by [`RequestExecutor`](crate::RequestExecutor) and
/// [`DaemonClient`](crate::DaemonClient).
#[derive(Debug)]
pub enum TransportError {
    /// The engine refused handle setup during construction.
    Init(String),

    /// The configured unix socket path is empty or contains an interior
    /// NUL byte, so it cannot be passed to the engine as a C string.
    InvalidSocketPath,

    /// The executor already performed its single request. Both a completed
    /// and a failed attempt are terminal for an instance.
    AlreadyPerformed,

    /// The descriptor's URL is missing or empty.
    BadUrl,

    /// The transport failed during or after execution. The message is the
    /// engine's human-readable description of the failure.
    Engine(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Init(msg) => {
                write!(f, "engine handle initialization failed: {msg}")
            }
            TransportError::InvalidSocketPath => {
                write!(f, "unix socket path is not representable as a C string")
            }
            TransportError::AlreadyPerformed => {
                write!(f, "executor instance already performed its request")
            }
            TransportError::BadUrl => write!(f, "request URL is missing or empty"),
            TransportError::Engine(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}
