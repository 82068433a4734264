//! Publitio REST API client.
//!
//! The signing-and-dispatch core lives in [`client`]; the endpoint methods
//! are spread over one module per API resource and all delegate to it.

mod client;
pub mod endpoints;
mod files;
mod folders;
mod players;
mod watermarks;

pub use client::{PublitioClient, PublitioClientBuilder, status_code_is_known};
pub use endpoints::{API_URL, MEDIA_URL};
