use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::parser::parse_request;
use crate::http::request::ParsedRequest;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Serves exactly one request on an exclusively owned stream.
///
/// `run` consumes the connection, so the stream is dropped (and the socket
/// closed) however the handler exits.
pub struct Connection<S> {
    stream: BufReader<S>,
    work_delay: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Working(ParsedRequest),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, work_delay: Duration) -> Self {
        Self {
            stream: BufReader::new(stream),
            work_delay,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let request = parse_request(&mut self.stream)
                        .await
                        .context("failed to read request")?;

                    tracing::debug!("received request\n{}", request);
                    self.state = ConnectionState::Working(request);
                }

                ConnectionState::Working(req) => {
                    // Stand-in for real work; the response never depends on it
                    tokio::time::sleep(self.work_delay).await;

                    let response = Self::handle_request(req);
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;

                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    self.stream
                        .shutdown()
                        .await
                        .context("failed to shut down connection")?;
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_request(_req: &ParsedRequest) -> Response {
        Response::goodbye()
    }
}
