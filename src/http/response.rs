use bytes::Bytes;

/// Body sent to every client.
pub const GOODBYE_BODY: &str = "Hello and goodbye from the server\n";

/// Content type of [`GOODBYE_BODY`].
pub const GOODBYE_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A complete response ready to be serialized.
///
/// Headers are kept in insertion order so the wire bytes are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code
    pub status: u16,
    /// Reason phrase written after the status code
    pub reason: &'static str,
    /// Header name/value pairs, written in order
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// The fixed `200 OK` plain-text greeting.
    ///
    /// Identical for every request; nothing about the parsed request
    /// influences it.
    pub fn goodbye() -> Self {
        Self {
            status: 200,
            reason: "OK",
            headers: vec![("Content-Type".to_string(), GOODBYE_CONTENT_TYPE.to_string())],
            body: Bytes::from_static(GOODBYE_BODY.as_bytes()),
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
