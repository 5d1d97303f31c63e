//! Tests for the per-connection handler over in-memory streams

use std::time::{Duration, Instant};

use hello_goodbye::http::connection::Connection;
use hello_goodbye::http::parser::MAX_LINE_LEN;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const EXPECTED: &[u8] =
    b"HTTP/1.1 200 OK\nContent-Type: text/plain; charset=utf-8\n\nHello and goodbye from the server\n";

async fn exchange(request: &[u8], work_delay: Duration) -> (anyhow::Result<()>, Vec<u8>) {
    let (server, mut client) = tokio::io::duplex(1024);
    let handler = tokio::spawn(Connection::new(server, work_delay).run());

    client.write_all(request).await.unwrap();

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();

    (handler.await.unwrap(), received)
}

#[tokio::test]
async fn test_connection_answers_request() {
    let (result, received) = exchange(b"GET /x HTTP/1.1\r\nFoo: bar\r\n\r\n", Duration::ZERO).await;

    assert!(result.is_ok());
    assert_eq!(received, EXPECTED);
}

#[tokio::test]
async fn test_connection_response_ignores_request_details() {
    let (_, first) = exchange(b"GET /a HTTP/1.1\r\nFoo: one\r\n\r\n", Duration::ZERO).await;
    let (_, second) = exchange(b"DELETE /b/c HTTP/1.0\r\nBar: two\r\n\r\n", Duration::ZERO).await;

    assert_eq!(first, EXPECTED);
    assert_eq!(second, EXPECTED);
}

#[tokio::test]
async fn test_connection_answers_malformed_request() {
    let (result, received) = exchange(b"nonsense\r\n\r\n", Duration::ZERO).await;

    assert!(result.is_ok());
    assert_eq!(received, EXPECTED);
}

#[tokio::test]
async fn test_connection_answers_when_client_sends_nothing() {
    let (server, mut client) = tokio::io::duplex(1024);
    let handler = tokio::spawn(Connection::new(server, Duration::ZERO).run());

    client.shutdown().await.unwrap();

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();

    assert!(handler.await.unwrap().is_ok());
    assert_eq!(received, EXPECTED);
}

#[tokio::test]
async fn test_connection_answers_client_flooding_one_line() {
    let (server, client) = tokio::io::duplex(1024);
    let handler = tokio::spawn(Connection::new(server, Duration::ZERO).run());
    let (mut rx, mut tx) = tokio::io::split(client);

    // The handler stops reading once the line is too long, so this write may
    // never finish; it is left running
    tokio::spawn(async move {
        let flood = vec![b'x'; MAX_LINE_LEN * 4];
        let _ = tx.write_all(&flood).await;
    });

    let mut received = Vec::new();
    rx.read_to_end(&mut received).await.unwrap();

    assert!(handler.await.unwrap().is_ok());
    assert_eq!(received, EXPECTED);
}

#[tokio::test]
async fn test_connection_waits_for_work_delay() {
    let delay = Duration::from_millis(100);
    let started = Instant::now();

    let (result, received) = exchange(b"GET / HTTP/1.1\r\n\r\n", delay).await;

    assert!(result.is_ok());
    assert_eq!(received, EXPECTED);
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn test_connection_error_when_peer_disappears() {
    let (server, client) = tokio::io::duplex(1024);
    drop(client);

    let result = Connection::new(server, Duration::ZERO).run().await;

    assert!(result.is_err());
}
