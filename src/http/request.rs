use std::collections::HashMap;
use std::fmt;

/// A request read off a connection.
///
/// The request line fields are either both present or both absent: a
/// connection that sent nothing, or whose first line did not have exactly
/// three tokens, yields an empty request rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequest {
    method: Option<String>,
    path: Option<String>,
    /// Request headers as received, names matched byte-for-byte
    pub headers: HashMap<String, String>,
}

impl ParsedRequest {
    /// Creates an empty request (no request line, no headers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request with a parsed request line and no headers yet.
    pub fn with_request_line(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            path: Some(path.into()),
            headers: HashMap::new(),
        }
    }

    /// The request method (e.g. "GET"), if a request line was parsed.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// The request target (e.g. "/index.html"), if a request line was parsed.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Retrieves a header value by its exact name.
    ///
    /// No case folding is applied: `Host` and `host` are different headers.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key)
            .map(|v| v.as_str())
    }

    /// Returns `true` when no request line was parsed.
    pub fn is_empty(&self) -> bool {
        self.method.is_none()
    }
}

impl fmt::Display for ParsedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.method().unwrap_or("-"))?;
        writeln!(f, "Path:   {}", self.path().unwrap_or("-"))?;
        write!(f, "Headers:")?;
        for (name, value) in &self.headers {
            write!(f, "\n\t{} : {}", name, value)?;
        }
        Ok(())
    }
}
