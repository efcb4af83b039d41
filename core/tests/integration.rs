//! End-to-end tests against the mock daemon over a unix domain socket.
//!
//! # Design
//! Each test boots its own daemon instance on a fresh socket path, then
//! drives the executor (or the client façade) through a real blocking
//! exchange. The daemon's `/echo` endpoint reports what it observed about
//! the incoming request, which is how wire-level properties (declared
//! content length, literal verbs, forwarded headers) are asserted.

use std::path::PathBuf;
use std::time::Duration;

use uds_http_core::{DaemonClient, Method, RequestDescriptor, RequestExecutor, TransportError};
use uuid::Uuid;

/// Boot the mock daemon on a unique socket path and wait for the listener.
fn start_daemon() -> PathBuf {
    let path = std::env::temp_dir().join(format!("mock-daemon-{}.sock", Uuid::new_v4()));
    let socket = path.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::UnixListener::bind(&socket).unwrap();
            mock_daemon::run(listener).await
        })
        .unwrap();
    });

    // The socket file appears once the listener is bound; a connection made
    // before the accept loop starts just queues in the backlog.
    for _ in 0..200 {
        if path.exists() {
            return path;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("mock daemon did not come up on {}", path.display());
}

fn executor_for(socket: &std::path::Path) -> RequestExecutor {
    RequestExecutor::new(Some(socket.to_str().unwrap())).unwrap()
}

fn get(url: &str) -> RequestDescriptor {
    RequestDescriptor {
        url: url.to_string(),
        ..RequestDescriptor::default()
    }
}

#[test]
fn get_returns_status_headers_and_body() {
    let socket = start_daemon();

    let result = executor_for(&socket)
        .perform(&get("http://localhost/version"))
        .unwrap();

    assert_eq!(result.status_code, 200);

    // Header bytes arrive raw, status line first.
    let headers = result.headers.expect("headers should be present");
    assert!(headers.starts_with(b"HTTP/1.1 200"));

    let body = result.body.expect("body should be present");
    let version: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(version["name"], "mock-daemon");
}

#[test]
fn missing_endpoint_propagates_server_status() {
    let socket = start_daemon();

    let result = executor_for(&socket)
        .perform(&get("http://localhost/no-such-endpoint"))
        .unwrap();

    assert_eq!(result.status_code, 404);
}

#[test]
fn post_declares_content_length_and_forwards_headers() {
    let socket = start_daemon();

    let request = RequestDescriptor {
        method: Method::Post,
        url: "http://localhost/echo".to_string(),
        headers: vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("X-Request-Id".to_string(), "req-42".to_string()),
        ],
        body: Some(b"hello".to_vec()),
    };
    let result = executor_for(&socket).perform(&request).unwrap();
    assert_eq!(result.status_code, 200);

    let report: mock_daemon::EchoReport =
        serde_json::from_slice(&result.body.unwrap()).unwrap();
    assert_eq!(report.method, "POST");
    assert_eq!(report.content_length, Some(5));
    assert_eq!(report.content_type.as_deref(), Some("text/plain"));
    assert_eq!(report.body, "hello");

    // The server's parser lowercases header names; values pass through
    // verbatim.
    let request_id = report
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("X-Request-Id"))
        .map(|(_, value)| value.as_str());
    assert_eq!(request_id, Some("req-42"));
}

#[test]
fn custom_verb_reaches_server_literally() {
    let socket = start_daemon();

    let request = RequestDescriptor {
        method: Method::parse("PATCH"),
        url: "http://localhost/echo".to_string(),
        ..RequestDescriptor::default()
    };
    let result = executor_for(&socket).perform(&request).unwrap();

    let report: mock_daemon::EchoReport =
        serde_json::from_slice(&result.body.unwrap()).unwrap();
    assert_eq!(report.method, "PATCH");
}

#[test]
fn head_yields_absent_body() {
    let socket = start_daemon();

    let request = RequestDescriptor {
        method: Method::Head,
        url: "http://localhost/version".to_string(),
        ..RequestDescriptor::default()
    };
    let result = executor_for(&socket).perform(&request).unwrap();

    assert_eq!(result.status_code, 200);
    assert!(result.headers.is_some());
    assert!(result.body.is_none(), "HEAD must not produce body bytes");
}

#[test]
fn bodiless_request_carries_zero_body_bytes() {
    let socket = start_daemon();

    let result = executor_for(&socket)
        .perform(&get("http://localhost/echo"))
        .unwrap();

    let report: mock_daemon::EchoReport =
        serde_json::from_slice(&result.body.unwrap()).unwrap();
    assert_eq!(report.body_len, 0);
    assert_eq!(report.content_length, None);
}

#[test]
fn executor_is_single_use_after_success() {
    let socket = start_daemon();

    let mut executor = executor_for(&socket);
    executor.perform(&get("http://localhost/version")).unwrap();

    let err = executor
        .perform(&get("http://localhost/version"))
        .unwrap_err();
    assert!(matches!(err, TransportError::AlreadyPerformed));
}

#[test]
fn container_lifecycle_via_client() {
    let socket = start_daemon();
    let client = DaemonClient::new(socket.to_str().unwrap());

    // Create.
    let create = RequestDescriptor {
        method: Method::Post,
        url: "http://localhost/containers".to_string(),
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body: Some(
            serde_json::json!({"name": "web", "image": "nginx:latest"})
                .to_string()
                .into_bytes(),
        ),
    };
    let result = client.respond(&create).unwrap();
    assert_eq!(result.status_code, 201);
    let created: mock_daemon::Container =
        serde_json::from_slice(&result.body.unwrap()).unwrap();
    assert_eq!(created.name, "web");
    assert!(!created.running);

    // Start. POST with no attached body ends the upload immediately via
    // the zero-producing read callback.
    let start = RequestDescriptor {
        method: Method::Post,
        url: format!("http://localhost/containers/{}/start", created.id),
        ..RequestDescriptor::default()
    };
    assert_eq!(client.respond(&start).unwrap().status_code, 204);
    assert_eq!(client.respond(&start).unwrap().status_code, 304);

    // Fetch shows the state change.
    let fetch = get(&format!("http://localhost/containers/{}", created.id));
    let result = client.respond(&fetch).unwrap();
    assert_eq!(result.status_code, 200);
    let fetched: mock_daemon::Container =
        serde_json::from_slice(&result.body.unwrap()).unwrap();
    assert!(fetched.running);

    // Delete goes through the custom-verb path.
    let delete = RequestDescriptor {
        method: Method::parse("DELETE"),
        url: format!("http://localhost/containers/{}", created.id),
        ..RequestDescriptor::default()
    };
    assert_eq!(client.respond(&delete).unwrap().status_code, 204);

    // Gone.
    assert_eq!(client.respond(&fetch).unwrap().status_code, 404);
}
