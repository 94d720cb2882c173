/// HTTP status codes this server emits.
///
/// - `Ok` (200): Request for "/" answered with the index page
/// - `NotFound` (404): Any other requested path
/// - `NotImplemented` (501): Any method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// Headers keep their insertion order, which is the order they are written
/// on the wire. The body is text; page templates are authored with bare LF
/// separators and the writer normalizes every line ending to CRLF before
/// transmission.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as name/value pairs, in insertion order
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: String,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .body("<html></html>")
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: String,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Appends a header, preserving insertion order.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

// Page templates use bare \n separators; the writer rewrites them as CRLF
// on the way out.
const INDEX_PAGE: &str = "<!DOCTYPE html>\n\
<html>\n\
<head><title>Sample</title></head>\n\
<body>This server is implemented with Rust!</body>\n\
</html>\n";

impl Response {
    /// Generates the response for a GET request: the index page for `/`,
    /// a 404 page for any other path. Path matching is exact string
    /// equality; there is no routing beyond these two cases.
    pub fn for_path(path: &str) -> Self {
        if path == "/" {
            Self::index()
        } else {
            Self::not_found(path)
        }
    }

    /// The fixed index page served for `/`.
    pub fn index() -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .body(INDEX_PAGE)
            .build()
    }

    /// A 404 page naming the requested path.
    ///
    /// The path is interpolated into the page body unescaped, so HTML
    /// metacharacters in the request reach the client verbatim.
    pub fn not_found(path: &str) -> Self {
        let body = format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head><title>404 Not Found</title></head>\n\
             <body>{path} is not found</body>\n\
             </html>\n"
        );

        ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/html")
            .body(body)
            .build()
    }
}
