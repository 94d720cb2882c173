use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Rewrites every line ending (CRLF or bare LF) as CRLF.
///
/// Idempotent: already-normalized text passes through unchanged.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

fn serialize_response(resp: &Response) -> Bytes {
    let mut message = String::new();

    // Status line
    message.push_str(&format!(
        "{} {} {}\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    ));

    // Headers, in insertion order
    for (name, value) in &resp.headers {
        message.push_str(name);
        message.push_str(": ");
        message.push_str(value);
        message.push('\n');
    }

    // Header/body separator
    message.push('\n');

    // Body
    message.push_str(&resp.body);

    // The whole message goes through normalization, so templates may be
    // authored with either line ending.
    Bytes::from(normalize_line_endings(&message))
}

/// Holds one serialized response and tracks how much of it has been sent.
pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// A buffer holding just `HTTP/1.0 <code> <reason>` and its CRLF: no
    /// headers, no separator line, no body. Used for the 501 answer.
    pub fn status_only(status: StatusCode) -> Self {
        let line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            status.as_u16(),
            status.reason_phrase()
        );

        Self {
            buffer: Bytes::from(line),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
