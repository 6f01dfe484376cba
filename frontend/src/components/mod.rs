//! UI Components for the ingestion upload page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPage`] - Upload form wired to the [`crate::UploadController`]
//! - [`FileTypeSelector`] / [`ExampleSection`] - `fileType` radios and example panels
//! - [`FilePreview`] - Preview block of the selected file
//! - [`ToastContainer`] - Toast notifications
//! - [`UploadHistory`] - Recent upload receipts

mod header;
mod footer;
mod file_type;
mod preview;
mod toast;
mod upload;
mod history;

pub use header::*;
pub use footer::*;
pub use file_type::*;
pub use preview::*;
pub use toast::*;
pub use upload::*;
pub use history::*;
