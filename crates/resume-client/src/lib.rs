//! Resume Parser Client Library
//!
//! Provides an HTTP client for uploading resume files (PDF or DOCX) to a
//! resume parsing service and retrieving the extracted data as JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use resume_client::ParserClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ParserClient::new("http://127.0.0.1:8000/api/v1")?;
//!
//!     // Upload a resume from disk; the server responds with extracted JSON
//!     let parsed = client.upload_path("resume.pdf").await?;
//!     println!("{}", serde_json::to_string_pretty(&parsed)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Driving a UI
//!
//! The controller layer separates the network call from its
//! presentation. [`run_upload`] pushes the in-flight status, the parsed
//! result, and error text through a [`Presenter`], so any frontend (a
//! terminal, a GUI, a test recorder) can render one upload attempt:
//!
//! ```rust,ignore
//! let mut ui = MyPresenter::new();
//! run_upload(&client, Some(Path::new("resume.pdf")), &mut ui).await?;
//! ```
//!
//! # Testing
//!
//! The `testing` module provides utilities for integration testing
//! against a mock parse server:
//!
//! ```rust,ignore
//! use resume_client::testing::TestServer;
//!
//! let server = TestServer::start(mock_parser_router()).await?;
//! let parsed = server.client.upload_file("resume.pdf", bytes).await?;
//! ```

mod client;
mod controller;
mod error;
pub mod testing;

pub use client::ParserClient;
pub use controller::{run_upload, Presenter};
pub use error::{Result, UploadError};
