//! Blocking HTTP client for daemons reachable over a unix domain socket.
//!
//! # Overview
//! A local daemon exposing an HTTP control API on a filesystem socket is
//! driven by issuing one request at a time through the native transport
//! engine, libcurl. The caller describes the request as plain data and
//! receives the status code plus the raw response header and body bytes,
//! synchronously.
//!
//! # Design
//! - [`RequestExecutor`] is the core: one engine handle, one request,
//!   released by `Drop` on every path. Response bytes stream in through
//!   an owned collector; outgoing bodies are attached whole.
//! - [`DaemonClient`] is a thin façade that stores a socket path and
//!   builds a fresh executor per call; there is no pooling, TLS, or
//!   retry logic anywhere in this crate.
//! - [`RequestDescriptor`] and [`ExecutionResult`] use owned `String` /
//!   `Vec` fields so requests can be built and inspected without
//!   transport types leaking into callers.

pub mod client;
mod collector;
pub mod error;
pub mod executor;
pub mod headers;
pub mod http;

pub use client::{DaemonClient, DEFAULT_SOCKET_PATH};
pub use error::TransportError;
pub use executor::RequestExecutor;
pub use http::{ExecutionResult, Method, RequestDescriptor};
