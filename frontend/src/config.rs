//! Application configuration.
//!
//! Centralized configuration for the ingestion upload page.
//! The page is served by the ingestion host, so API paths are
//! same-origin by default.

/// Base URL prepended to every API path.
///
/// Empty means "same origin as the page".
pub const API_BASE_URL: &str = "";

/// Endpoint for patient data files.
pub const PATIENTS_UPLOAD_PATH: &str = "/api/ingestion/patients/upload";

/// Endpoint for medical record data files.
pub const RECORDS_UPLOAD_PATH: &str = "/api/ingestion/medical-records/upload";

/// Endpoint listing recent upload receipts.
pub const UPLOADS_PATH: &str = "/api/ingestion/uploads";

/// Header carrying the CSRF token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Selector of the hidden input holding the CSRF token.
pub const CSRF_INPUT_SELECTOR: &str = "input[name=\"_csrf\"]";

/// Selector of elements that get a Bootstrap tooltip on page load.
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";

/// Toast shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully!";

/// Toast shown when the server rejects an upload without a message.
pub const UPLOAD_FAILURE_FALLBACK: &str = "An error occurred during upload.";

/// Toast shown when the request never produced a usable response.
pub const UPLOAD_TRANSPORT_FAILURE: &str = "Failed to upload file. Please try again.";

/// Submit button label while a submission is in flight.
pub const SUBMIT_LOADING_LABEL: &str = "Processing...";

/// Submit button label when idle.
pub const SUBMIT_IDLE_LABEL: &str = "Upload File";

/// How long a toast stays visible before hiding itself (in milliseconds).
pub const TOAST_DELAY_MS: u32 = 5_000;

/// Maximum receipts shown in the history panel.
pub const MAX_HISTORY_ENTRIES: usize = 20;
