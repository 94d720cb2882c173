//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.0 server: one request per
//! connection, `GET` only, fixed HTML responses.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Reads and parses the request line and headers from the client
//! - **`request`**: Parsed request-line representation
//! - **`response`**: HTTP response representation with builder pattern and page generation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read header lines up to the blank terminator
//!        └──────┬──────┘
//!               │ Request parsed
//!               │ (early close or malformed line → Closed, nothing written)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch on the method, generate response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─► Closed (HTTP/1.0: one exchange, no keep-alive)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use minihttpd::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8000").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
