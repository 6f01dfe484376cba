//! HTTP services for the ingestion host.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::config::{API_BASE_URL, CSRF_HEADER, UPLOADS_PATH};
use crate::controller::UploadTransport;
use crate::types::{AppError, AppResult, UploadKind, UploadReceipt, UploadResponse};

/// Full URL of the endpoint receiving `kind` uploads.
pub fn upload_url(kind: UploadKind) -> String {
    format!("{}{}", API_BASE_URL, kind.action_path())
}

/// Upload transport backed by `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl UploadTransport for HttpTransport {
    type Payload = FormData;

    async fn post(
        &self,
        action: &str,
        csrf_token: Option<&str>,
        payload: FormData,
    ) -> AppResult<UploadResponse> {
        let mut builder = Request::post(action);
        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        let request = builder
            .body(payload)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        // Error statuses still carry a JSON body with the message to show.
        log::debug!("Upload answered with status {}", response.status());

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AppError::Response(format!("Failed to parse response: {}", e)))
    }
}

/// Fetch the most recent upload receipts, newest first.
pub async fn fetch_upload_history() -> AppResult<Vec<UploadReceipt>> {
    let url = format!("{}{}", API_BASE_URL, UPLOADS_PATH);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Response(format!(
            "Server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<Vec<UploadReceipt>>()
        .await
        .map_err(|e| AppError::Response(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_urls() {
        assert_eq!(
            upload_url(UploadKind::Patients),
            "/api/ingestion/patients/upload"
        );
        assert_eq!(
            upload_url(UploadKind::MedicalRecords),
            "/api/ingestion/medical-records/upload"
        );
    }

    #[test]
    fn test_host_error_body_parses_as_rejection() {
        // Body the host sends with a 403 when the CSRF token is wrong.
        let json = r#"{
            "success": false,
            "message": "Invalid or missing CSRF token",
            "data": null,
            "timestamp": "2024-05-01T10:00:00Z"
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("Invalid or missing CSRF token")
        );
        assert!(response.data.is_none());
    }
}
