//! Plain-data request and response types for the executor.
//!
//! # Design
//! These types describe one HTTP exchange as owned data. The caller builds
//! a `RequestDescriptor`, hands it to the executor, and receives an
//! `ExecutionResult` with the raw response bytes. Keeping the model free of
//! transport types lets callers construct and inspect requests without
//! touching the engine.
//!
//! All fields use owned types (`String`, `Vec`) so descriptors can be built
//! once and moved freely; the executor only borrows them.

/// HTTP method for a request.
///
/// `parse` classifies the verb case-insensitively; anything outside the
/// methods the engine has a dedicated mode for becomes `Other`, which
/// carries the caller's spelling unchanged onto the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Head,
    /// Any other verb, sent as a literal custom request string.
    Other(String),
}

impl Method {
    /// Classify a method string. `"get"`, `"Get"`, and `"GET"` all map to
    /// `Method::Get`; unrecognized verbs keep their original spelling.
    pub fn parse(verb: &str) -> Method {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "HEAD" => Method::Head,
            _ => Method::Other(verb.to_string()),
        }
    }
}

/// A request with no explicit method is a GET.
impl Default for Method {
    fn default() -> Self {
        Method::Get
    }
}

/// One HTTP request described as plain data.
///
/// `headers` keeps keys exactly as given (the executor serializes each pair
/// as `"Key: Value"`); pair order carries no meaning. `body`, when present,
/// is attached whole; the executor never streams it.
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// The immutable outcome of one performed request.
///
/// `headers` and `body` are `None` when the engine delivered no bytes for
/// them, never `Some` of an empty buffer. Header bytes arrive exactly as
/// the engine streamed them, status line included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status_code: u32,
    pub headers: Option<Vec<u8>>,
    pub body: Option<Vec<u8>>,
}
