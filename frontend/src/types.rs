//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - File kind and selected file
//! - **Toast Types** - Transient notifications
//! - **API Types** - Host response structures
//! - **Error Types** - Frontend error handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{PATIENTS_UPLOAD_PATH, RECORDS_UPLOAD_PATH};

// =============================================================================
// Upload Types
// =============================================================================

/// Kind of data file being uploaded.
///
/// Chosen with the `fileType` radio group. Decides which example panel
/// is visible and which endpoint receives the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadKind {
    /// Patient demographics file
    #[default]
    Patients,
    /// Medical records file
    MedicalRecords,
}

impl UploadKind {
    /// Parse a `fileType` radio value.
    ///
    /// Only `"patients"` selects [`UploadKind::Patients`]; every other
    /// value selects [`UploadKind::MedicalRecords`].
    pub fn from_radio_value(value: &str) -> Self {
        if value == "patients" {
            UploadKind::Patients
        } else {
            UploadKind::MedicalRecords
        }
    }

    /// Value carried by the matching radio input.
    pub fn radio_value(&self) -> &'static str {
        match self {
            UploadKind::Patients => "patients",
            UploadKind::MedicalRecords => "records",
        }
    }

    /// Endpoint path for this kind of upload.
    pub fn action_path(&self) -> &'static str {
        match self {
            UploadKind::Patients => PATIENTS_UPLOAD_PATH,
            UploadKind::MedicalRecords => RECORDS_UPLOAD_PATH,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            UploadKind::Patients => "Patient Data",
            UploadKind::MedicalRecords => "Medical Records",
        }
    }
}

/// A file picked in the file input.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// Original file name
    pub name: String,
    /// MIME type reported by the browser (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
    /// Data URL thumbnail, filled in once an image finished decoding
    pub data_url: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            data_url: None,
        }
    }

    /// Whether a thumbnail should be decoded for this file.
    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    /// Size formatted with [`format_file_size`].
    pub fn size_label(&self) -> String {
        format_file_size(self.size)
    }
}

/// Matches the `image.*` pattern: any MIME type mentioning `image`.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.contains("image")
}

/// Format a byte count with base-1024 units.
///
/// Rounded to two decimals with trailing zeros dropped, so `1536`
/// renders as `1.5 KB`. Zero is always `0 Bytes`. Sizes past the
/// gigabyte range stay expressed in GB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Green notice
    Success,
    /// Red notice
    Danger,
}

impl ToastLevel {
    /// Bootstrap background class.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-success",
            ToastLevel::Danger => "bg-danger",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastNotice {
    /// Millisecond timestamp of creation, unique within a page
    pub id: i64,
    /// Severity
    pub level: ToastLevel,
    /// Text shown in the toast body
    pub message: String,
}

impl ToastNotice {
    /// Element id of the rendered toast.
    pub fn dom_id(&self) -> String {
        format!("toast-{}", self.id)
    }
}

// =============================================================================
// API Types
// =============================================================================

/// JSON body answered by the upload endpoints.
///
/// Only `success` and `message` drive the page; the rest is carried
/// along for logging.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Acknowledgement of a received upload, listed in the history panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    /// Upload identifier
    pub id: String,
    /// Which endpoint received the file
    pub kind: UploadKind,
    /// Original file name
    pub file_name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// When the host received the file
    pub received_at: DateTime<Utc>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Request could not be built or sent.
    Network(String),
    /// Response body was not the expected JSON.
    Response(String),
    /// File could not be read in the browser.
    FileRead(String),
    /// Expected page element missing or unusable.
    Document(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Response(msg) => write!(f, "Response error: {}", msg),
            AppError::FileRead(msg) => write!(f, "File read error: {}", msg),
            AppError::Document(msg) => write!(f, "Document error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_size_units() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(5_500_000), "5.25 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_size_beyond_gigabytes_stays_in_gb() {
        assert_eq!(format_file_size(1024 * 1_073_741_824), "1024 GB");
    }

    #[test]
    fn test_size_buckets_match_magnitude() {
        let units = ["Bytes", "KB", "MB", "GB"];
        let mut b: u64 = 1;
        while b < 1u64 << 42 {
            for candidate in [b, b + b / 3, b.saturating_mul(3) / 2] {
                let label = format_file_size(candidate);
                assert_ne!(label, "0 Bytes");

                let (number, unit) = label.split_once(' ').unwrap();
                let index = units.iter().position(|u| *u == unit).unwrap();
                let expected = ((63 - candidate.leading_zeros()) / 10).min(3) as usize;
                assert!(index == expected, "{} -> {}", candidate, label);

                let decimals = number.split_once('.').map(|(_, d)| d.len()).unwrap_or(0);
                assert!(decimals <= 2, "{} has too many decimals", label);
            }
            b *= 7;
        }
    }

    #[test]
    fn test_radio_values() {
        assert_eq!(UploadKind::from_radio_value("patients"), UploadKind::Patients);
        assert_eq!(UploadKind::from_radio_value("records"), UploadKind::MedicalRecords);
        assert_eq!(UploadKind::from_radio_value(""), UploadKind::MedicalRecords);
        assert_eq!(UploadKind::default(), UploadKind::Patients);
        assert_eq!(
            UploadKind::from_radio_value(UploadKind::MedicalRecords.radio_value()),
            UploadKind::MedicalRecords
        );
    }

    #[test]
    fn test_image_pattern() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("text/csv"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "success": true,
            "message": "File received",
            "data": {"id": "abc"},
            "timestamp": "2024-05-01T10:00:00Z"
        }"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("File received"));

        let minimal: UploadResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!minimal.success);
        assert!(minimal.message.is_none());
    }

    #[test]
    fn test_receipt_deserialization() {
        let json = r#"{
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "kind": "medical-records",
            "fileName": "records.csv",
            "sizeBytes": 2048,
            "receivedAt": "2024-05-01T10:00:00Z"
        }"#;
        let receipt: UploadReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.kind, UploadKind::MedicalRecords);
        assert_eq!(receipt.file_name, "records.csv");
        assert_eq!(receipt.size_bytes, 2048);
    }
}
