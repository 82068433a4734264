//! # Publitio Client
//!
//! An async Rust client library for the Publitio media hosting REST API.
//!
//! ## Features
//!
//! - File upload from memory, disk, or a remote URL
//! - File version, folder, player, adtag and watermark management
//! - On-the-fly media transformation URLs and retrieval
//! - Per-request signing with a fresh nonce and timestamp
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use publitio_api_client::{Params, PublitioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PublitioClient::new("api_key", "api_secret");
//!     let files = client.list_files(Params::new().set("limit", 10)).await?;
//!     println!("{files:#}");
//!     Ok(())
//! }
//! ```
//!
//! Every endpoint method returns the server's decoded JSON verbatim. An
//! API-level error arriving as well-formed JSON (for example a 404 with an
//! error payload) is returned like any success value; inspect the fields to
//! tell them apart.

pub mod auth;
pub mod error;
pub mod rest;
pub mod transform;
pub mod types;

// Re-export commonly used types at crate root
pub use error::PublitioError;
pub use rest::{PublitioClient, PublitioClientBuilder};
pub use transform::TransformOptions;
pub use types::{Params, UploadSource};

/// Result type alias using PublitioError
pub type Result<T> = std::result::Result<T, PublitioError>;
