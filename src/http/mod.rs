//! Request parsing and the per-connection handler.
//!
//! The wire format is line oriented: a request line with exactly three
//! whitespace separated tokens, then `Name: Value` header lines up to a blank
//! line. Bodies are never read. Every request gets the same plain-text reply.
//!
//! # Architecture
//!
//! - **`connection`**: the handler that owns one client stream end to end
//! - **`parser`**: reads a request line and headers from a buffered stream
//! - **`request`**: the parsed request
//! - **`response`**: the fixed greeting response
//! - **`writer`**: serializes a response and writes it to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse request line and headers
//!        └──────┬──────┘
//!               │ Request parsed (possibly empty)
//!               ▼
//!        ┌──────────────────┐
//!        │    Working       │ ← Placeholder delay
//!        └──────┬───────────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send the greeting
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Shut down write side, drop stream
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hello_goodbye::http::connection::Connection;
//! use std::time::Duration;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8124").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, Duration::from_millis(200));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
