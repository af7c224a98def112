//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to serve one GET per connection.
//!
//! # Architecture
//!
//! - **`connection`**: drives one client stream through the state machine below
//! - **`parser`**: pulls the request line out of the received bytes
//! - **`request`**: the parsed request line
//! - **`response`**: the response kinds, with a builder
//! - **`writer`**: serializes a response and writes it to the client
//! - **`mime`**: the two content types served
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read, at most 1024 bytes
//!        └──────┬──────┘
//!               │ Bytes received (possibly none)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← parse → method → classify → load
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down write half
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wwwd::files::DocumentRoot;
//! use wwwd::http::connection::Connection;
//! use wwwd::site::Site;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let site = Arc::new(Site::new(DocumentRoot::default()));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = site.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, site);
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
pub mod mime;
