/// Represents a parsed HTTP/1.0 request line.
///
/// The three tokens are carried verbatim as they appeared on the wire; the
/// method is not validated here (dispatch rejects unsupported verbs with a
/// 501). Header lines are read off the connection but not retained, and
/// request bodies are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token (e.g., "GET")
    pub method: String,
    /// The request path (e.g., "/index.html")
    pub path: String,
    /// HTTP version token (typically "HTTP/1.0")
    pub version: String,
}
