use minihttpd::http::response::{Response, ResponseBuilder, StatusCode};
use minihttpd::http::writer::{ResponseWriter, normalize_line_endings};

async fn serialize(mut writer: ResponseWriter) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();
    out
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_index_page() {
    let response = Response::for_path("/");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers,
        vec![("Content-Type".to_string(), "text/html".to_string())]
    );
    assert!(response.body.starts_with("<!DOCTYPE html>"));
    assert!(
        response
            .body
            .contains("This server is implemented with Rust!")
    );
}

#[test]
fn test_not_found_page_echoes_path() {
    let response = Response::for_path("/missing");

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.contains("/missing is not found"));
}

#[test]
fn test_not_found_path_is_not_escaped() {
    let response = Response::for_path("/<script>alert(1)</script>");

    // Deliberate: the requested path reaches the page verbatim
    assert!(response.body.contains("/<script>alert(1)</script>"));
}

#[test]
fn test_only_exact_root_matches_index() {
    assert_eq!(Response::for_path("/index.html").status, StatusCode::NotFound);
    assert_eq!(Response::for_path("//").status, StatusCode::NotFound);
    assert_eq!(Response::for_path("").status, StatusCode::NotFound);
}

#[test]
fn test_response_builder_preserves_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .header("X-First", "1")
        .header("X-Second", "2")
        .body("body")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Content-Type", "X-First", "X-Second"]);
}

#[test]
fn test_normalize_line_endings_mixed_input() {
    assert_eq!(normalize_line_endings("a\r\nb\nc"), "a\r\nb\r\nc");
    assert_eq!(normalize_line_endings("one\ntwo\n"), "one\r\ntwo\r\n");
}

#[test]
fn test_normalize_line_endings_idempotent() {
    let once = normalize_line_endings("a\nb\r\nc\n");
    assert_eq!(normalize_line_endings(&once), once);
}

#[tokio::test]
async fn test_serialized_response_has_no_bare_lf() {
    let bytes = serialize(ResponseWriter::new(&Response::for_path("/"))).await;

    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            assert!(i > 0 && bytes[i - 1] == b'\r', "bare LF at offset {}", i);
        }
    }
}

#[tokio::test]
async fn test_serialized_index_response_wire_format() {
    let bytes = serialize(ResponseWriter::new(&Response::for_path("/"))).await;
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n"));
    assert!(text.ends_with("</html>\r\n"));
}

#[tokio::test]
async fn test_status_only_writer_is_a_single_line() {
    let bytes = serialize(ResponseWriter::status_only(StatusCode::NotImplemented)).await;

    assert_eq!(bytes, b"HTTP/1.0 501 Not Implemented\r\n");
}
