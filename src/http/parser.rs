use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::Request;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The stream ended (or failed) before the blank-line terminator
    ConnectionClosed,
    /// Terminator seen with no request line in front of it
    EmptyRequest,
    /// The request line did not split into exactly three tokens
    MalformedRequestLine(String),
}

/// Reads one HTTP/1.0 request head from `reader`.
///
/// Lines are consumed one at a time until the empty-line terminator. The
/// first line must split into `METHOD PATH VERSION` on single spaces; the
/// tokens are returned verbatim, with no decoding or validation. Header
/// lines are read and discarded. Both CRLF and bare-LF line endings are
/// accepted.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines: Vec<String> = Vec::new();

    loop {
        let mut line = String::new();
        let n = match reader.read_line(&mut line).await {
            Ok(n) => n,
            Err(e) => {
                // Read failures (resets, non-UTF-8 header bytes) end the
                // exchange the same way an early close does.
                tracing::debug!("read failed before headers terminator: {}", e);
                return Err(ParseError::ConnectionClosed);
            }
        };

        if n == 0 {
            // Peer closed before sending the blank line
            return Err(ParseError::ConnectionClosed);
        }

        trim_line_ending(&mut line);

        if line.is_empty() {
            break;
        }

        lines.push(line);
    }

    let request_line = match lines.first() {
        Some(line) => line,
        None => return Err(ParseError::EmptyRequest),
    };

    tracing::debug!("request head read, {} header line(s)", lines.len() - 1);

    parse_request_line(request_line)
}

/// Splits a request line on single spaces into `METHOD PATH VERSION`.
///
/// The token count must be exactly three; a doubled space produces an empty
/// token and fails the split.
fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() != 3 {
        return Err(ParseError::MalformedRequestLine(line.to_string()));
    }

    Ok(Request {
        method: tokens[0].to_string(),
        path: tokens[1].to_string(),
        version: tokens[2].to_string(),
    })
}

fn trim_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parse_simple_get() {
        let mut input: &[u8] = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";

        let parsed = read_request(&mut input).await.unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.version, "HTTP/1.0");
    }
}
