use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::parser::{ParseError, read_request};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Handles one connection end to end: read a request head, answer it (or
/// drop it), close.
///
/// Generic over the stream so the same handler runs on a `TcpStream`, an
/// in-memory duplex stream in tests, or any other duplex byte stream; the
/// surrounding execution policy (task per connection, serial loop) lives in
/// the listener.
pub struct Connection<S> {
    stream: BufReader<S>,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through exactly one request/response exchange.
    ///
    /// Parse failures are consumed here: the request is dropped and the
    /// connection closed without writing anything. `Err` is returned only
    /// for I/O failures while writing the response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match read_request(&mut self.stream).await {
                        Ok(req) => {
                            tracing::info!(
                                "method={}, path={}, version={}",
                                req.method,
                                req.path,
                                req.version
                            );
                            self.state = ConnectionState::Processing(req);
                        }

                        Err(ParseError::ConnectionClosed) => {
                            tracing::debug!("connection closed before request");
                            self.state = ConnectionState::Closed;
                        }

                        Err(ParseError::EmptyRequest) => {
                            tracing::debug!("empty request");
                            self.state = ConnectionState::Closed;
                        }

                        Err(ParseError::MalformedRequestLine(line)) => {
                            // Dropped without a 400; the line is only logged.
                            tracing::warn!("malformed request line: {:?}", line);
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let writer = match req.method.as_str() {
                        "GET" => ResponseWriter::new(&Response::for_path(&req.path)),

                        method => {
                            tracing::info!("unsupported method {}", method);
                            ResponseWriter::status_only(StatusCode::NotImplemented)
                        }
                    };

                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // One exchange per connection: flush and close
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
