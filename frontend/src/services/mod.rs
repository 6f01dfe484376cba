//! Browser and host services.
//!
//! # Services
//!
//! - [`upload`] - Form upload and receipt history over HTTP
//! - [`file_reader`] - Data URL decoding for image thumbnails
//! - [`bootstrap`] - Bootstrap tooltip/toast integration
//!
//! # JavaScript Bindings
//!
//! `bootstrap` calls into `src/js/bootstrap.js`.

pub mod upload;
pub mod file_reader;
pub mod bootstrap;

pub use upload::*;
pub use file_reader::*;
pub use bootstrap::*;
