//! # Ingestion host
//!
//! Serves the data-ingestion upload page and receives the files it posts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  GET /ingestion   ┌─────────────┐
//! │   Browser   │◀──────────────────│  Page +     │  index.html with a fresh
//! │ (Leptos app)│                   │  CSRF token │  token in the `_csrf` input
//! │             │  POST upload      ├─────────────┤
//! │             │──────────────────▶│  Receipt    │  token checked, file
//! │             │  {success,...}    │  history    │  acknowledged, listed
//! └─────────────┘◀──────────────────└─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment and CLI configuration
//! - [`api`] - HTTP server, CSRF tokens, receipts

pub mod error;
pub mod config;
pub mod api;

pub use error::{ConfigError, ServerError, ServerResult};
pub use config::ServerConfig;
pub use api::{router, start_server, AppState};
pub use api::types::{ApiResponseBody, UploadKind, UploadReceipt};
