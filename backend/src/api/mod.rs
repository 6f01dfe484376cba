//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the ingestion host.

pub mod server;
pub mod types;
pub mod csrf;
pub mod history;

pub use server::{router, start_server, AppState};
pub use types::*;
pub use csrf::{CsrfTokens, CSRF_HEADER};
pub use history::UploadHistory;
