//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Start a programmable mock search backend on an ephemeral port.
///
/// The handler receives the request target (path plus query string) and
/// returns the status code and body to answer with. Returns the bound
/// address.
pub async fn start_mock_backend<F, Fut>(handler: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);
                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        // Drain headers up to the blank line.
                        loop {
                            let mut header = String::new();
                            match reader.read_line(&mut header).await {
                                Ok(_) if header.trim().is_empty() => break,
                                Ok(_) => {}
                                Err(_) => return,
                            }
                        }

                        let target = request_line
                            .split_whitespace()
                            .nth(1)
                            .unwrap_or("/")
                            .to_string();
                        let (status, body) = handler(target).await;
                        let reason = match status {
                            200 => "OK",
                            404 => "Not Found",
                            429 => "Too Many Requests",
                            500 => "Internal Server Error",
                            503 => "Service Unavailable",
                            _ => "OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason,
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// A search payload with one trace holding one span on the given service.
#[allow(dead_code)]
pub fn single_span_payload(
    trace_id: &str,
    service: &str,
    operation: &str,
    tags: &[(&str, &str)],
) -> String {
    let tag_objects: Vec<serde_json::Value> = tags
        .iter()
        .map(|(key, value)| serde_json::json!({"key": key, "value": value, "type": "string"}))
        .collect();

    serde_json::json!({
        "data": [{
            "traceID": trace_id,
            "processes": {
                "p1": {"serviceName": service, "tags": []}
            },
            "spans": [{
                "traceID": trace_id,
                "spanID": format!("{}-s1", trace_id),
                "operationName": operation,
                "processID": "p1",
                "startTime": 1_744_563_600_000_000u64,
                "duration": 1500,
                "tags": tag_objects
            }]
        }]
    })
    .to_string()
}

/// Query pairs of a request target, decoded.
#[allow(dead_code)]
pub fn query_pairs_of(target: &str) -> Vec<(String, String)> {
    let url = url::Url::parse(&format!("http://mock{}", target)).unwrap();
    url.query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// First value for a query key, if present.
#[allow(dead_code)]
pub fn query_value(target: &str, key: &str) -> Option<String> {
    query_pairs_of(target)
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}
