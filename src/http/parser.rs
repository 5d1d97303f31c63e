use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::ParsedRequest;

/// Reads one request (request line plus headers) from `reader`.
///
/// Malformed input is not an error: parsing stops at the first line that
/// does not fit and whatever was collected so far is returned. Only I/O
/// failures of the underlying reader are reported.
///
/// The request body, if any, is left unread.
pub async fn parse_request<R>(reader: &mut R) -> std::io::Result<ParsedRequest>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LineReader::new(reader);

    let request_line = match lines.next_line().await? {
        Some(Line::Text(line)) => line,
        Some(Line::TooLong) => return Ok(ParsedRequest::new()),
        // No data sent
        None => return Ok(ParsedRequest::new()),
    };

    let parts: Vec<&str> = request_line
        .trim_matches(|c: char| c <= ' ')
        .split(is_separator_space)
        .filter(|p| !p.is_empty())
        .collect();
    let [method, path, _version] = parts.as_slice() else {
        return Ok(ParsedRequest::new());
    };

    let mut request = ParsedRequest::with_request_line(*method, *path);

    while let Some(Line::Text(line)) = lines.next_line().await? {
        if line.is_empty() {
            break;
        }

        let Some((name, value)) = split_header(&line) else {
            break;
        };

        request.headers.insert(name.to_string(), value.to_string());
    }

    Ok(request)
}

/// Longest line accepted, terminator excluded. Anything longer counts as
/// malformed and ends parsing.
pub const MAX_LINE_LEN: usize = 8 * 1024;

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Text(String),
    TooLong,
}

/// Splits a buffered stream into lines ended by `\n`, `\r` or `\r\n`.
///
/// A final line lacking a terminator still counts. Bytes that are not UTF-8
/// are replaced rather than rejected.
struct LineReader<'a, R> {
    reader: &'a mut R,
    // A `\r` ended the last line and its possible `\n` was not buffered yet
    skip_lf: bool,
}

impl<'a, R> LineReader<'a, R>
where
    R: AsyncBufRead + Unpin,
{
    fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    /// Returns `None` at end of stream.
    async fn next_line(&mut self) -> std::io::Result<Option<Line>> {
        let mut buf = Vec::with_capacity(128);
        let mut read_any = false;

        loop {
            let available = self.reader.fill_buf().await?;
            if available.is_empty() {
                break;
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(idx) => {
                    buf.extend_from_slice(&available[..idx]);

                    let mut used = idx + 1;
                    if available[idx] == b'\r' {
                        match available.get(idx + 1) {
                            Some(b'\n') => used += 1,
                            Some(_) => {}
                            None => self.skip_lf = true,
                        }
                    }

                    self.reader.consume(used);
                    break;
                }
                None => {
                    let n = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(n);

                    if buf.len() > MAX_LINE_LEN {
                        return Ok(Some(Line::TooLong));
                    }
                }
            }
        }

        if !read_any {
            return Ok(None);
        }
        if buf.len() > MAX_LINE_LEN {
            return Ok(Some(Line::TooLong));
        }

        Ok(Some(Line::Text(String::from_utf8_lossy(&buf).into_owned())))
    }
}

/// Splits a header line on every `:` (plus the whitespace after it) and
/// accepts it only if exactly a name and a value remain.
///
/// Trailing empty pieces are dropped, so `Name:` has no value and is
/// rejected, as is `Host: example.com:80`.
fn split_header(line: &str) -> Option<(&str, &str)> {
    let mut parts = Vec::with_capacity(2);
    let mut rest = line;

    while let Some(idx) = rest.find(':') {
        parts.push(&rest[..idx]);
        rest = rest[idx + 1..].trim_start_matches(is_separator_space);
    }
    parts.push(rest);

    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [name, value] => Some((name, value)),
        _ => None,
    }
}

fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
