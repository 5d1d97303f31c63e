//! hello-goodbye - concurrent greeting server
//!
//! Accepts connections, parses a line-oriented request from each one on its
//! own task, and answers every request with the same plain-text response.

pub mod config;
pub mod http;
pub mod server;
