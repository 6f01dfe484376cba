//! REST API types shared with the upload page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope of every upload endpoint answer.
///
/// The page only looks at `success` and `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseBody<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponseBody<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }
}

/// Which endpoint a file was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadKind {
    Patients,
    MedicalRecords,
}

impl UploadKind {
    pub fn label(&self) -> &'static str {
        match self {
            UploadKind::Patients => "patients",
            UploadKind::MedicalRecords => "medical-records",
        }
    }
}

/// Acknowledgement of a received file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub id: Uuid,
    pub kind: UploadKind,
    pub file_name: String,
    pub size_bytes: u64,
    pub received_at: DateTime<Utc>,
}

impl UploadReceipt {
    pub fn new(kind: UploadKind, file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            file_name: file_name.into(),
            size_bytes,
            received_at: Utc::now(),
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP",
            service: "data-ingestion",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let receipt = UploadReceipt::new(UploadKind::MedicalRecords, "records.csv", 12);
        let body = serde_json::to_value(ApiResponseBody::success(receipt, "File received")).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "File received");
        assert_eq!(body["data"]["kind"], "medical-records");
        assert_eq!(body["data"]["fileName"], "records.csv");
        assert_eq!(body["data"]["sizeBytes"], 12);
        assert!(body["data"]["receivedAt"].is_string());
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_failure_envelope() {
        let body = serde_json::to_value(ApiResponseBody::<()>::failure("No file provided")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No file provided");
        assert_eq!(body["data"], json!(null));
    }
}
