//! HTTP Server for the ingestion upload page.
//!
//! Serves the page with a fresh CSRF token, acknowledges uploads and lists
//! recent receipts. File contents are not parsed here.
//!
//! # API Endpoints
//!
//! | Method | Path                                     | Description                      |
//! |--------|------------------------------------------|----------------------------------|
//! | GET    | `/`, `/ingestion`, `/ingestion/history`  | Upload page with CSRF token      |
//! | GET    | `/api/ingestion/health`                  | Health check                     |
//! | POST   | `/api/ingestion/patients/upload`         | Upload a patient data file       |
//! | POST   | `/api/ingestion/medical-records/upload`  | Upload a medical records file    |
//! | GET    | `/api/ingestion/uploads`                 | Recent upload receipts           |
//! | GET    | anything else                            | Static assets                    |

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{header, HeaderMap, HeaderName, Method},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::csrf::{render_page, CsrfTokens, CSRF_HEADER};
use super::history::UploadHistory;
use super::types::{ApiResponseBody, HealthResponse, UploadKind, UploadReceipt};
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub tokens: Arc<CsrfTokens>,
    pub history: Arc<UploadHistory>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            tokens: Arc::new(CsrfTokens::new(config.csrf_capacity)),
            history: Arc::new(UploadHistory::new(config.history_limit)),
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(CSRF_HEADER),
        ])
        .expose_headers([header::CONTENT_TYPE]);

    let assets = ServeDir::new(&state.config.static_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(upload_page))
        .route("/ingestion", get(upload_page))
        .route("/ingestion/history", get(upload_page))
        .route("/api/ingestion/health", get(health))
        .route("/api/ingestion/patients/upload", post(upload_patients))
        .route("/api/ingestion/medical-records/upload", post(upload_medical_records))
        .route("/api/ingestion/uploads", get(list_uploads))
        .fallback_service(assets)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let port = config.port;
    let static_dir = config.static_dir.clone();
    let app = router(AppState::new(config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Ingestion host running on http://localhost:{}", port);
    tracing::info!("   GET  /ingestion                             - Upload page");
    tracing::info!("   POST /api/ingestion/patients/upload        - Patient data file");
    tracing::info!("   POST /api/ingestion/medical-records/upload - Medical records file");
    tracing::info!("   GET  /api/ingestion/uploads                - Recent receipts");
    tracing::info!("📁 Serving assets from {}", static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Upload page with a freshly issued CSRF token
async fn upload_page(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let path = state.config.static_dir.join("index.html");
    let template = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ServerError::PageUnavailable(format!("{}: {}", path.display(), e)))?;

    let token = state.tokens.issue();
    tracing::debug!(issued = state.tokens.len(), "CSRF token issued");
    Ok(Html(render_page(&template, &token)))
}

async fn upload_patients(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<ApiResponseBody<UploadReceipt>>> {
    receive_upload(&state, UploadKind::Patients, &headers, multipart).await
}

async fn upload_medical_records(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<ApiResponseBody<UploadReceipt>>> {
    receive_upload(&state, UploadKind::MedicalRecords, &headers, multipart).await
}

/// Recent upload receipts, newest first
async fn list_uploads(State(state): State<AppState>) -> Json<Vec<UploadReceipt>> {
    Json(state.history.recent())
}

async fn receive_upload(
    state: &AppState,
    kind: UploadKind,
    headers: &HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<ApiResponseBody<UploadReceipt>>> {
    let token = headers.get(CSRF_HEADER).and_then(|v| v.to_str().ok());
    if !token.is_some_and(|t| state.tokens.verify(t)) {
        return Err(ServerError::Csrf);
    }

    let mut multipart = multipart.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let mut file: Option<(String, u64)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("").to_string();
        let bytes = field.bytes().await?;
        // Browsers send an unnamed empty part when nothing was picked.
        if !file_name.is_empty() {
            file = Some((file_name, bytes.len() as u64));
        }
    }

    let (file_name, size_bytes) = file.ok_or(ServerError::MissingFile)?;
    let receipt = UploadReceipt::new(kind, file_name, size_bytes);

    tracing::info!(
        id = %receipt.id,
        kind = receipt.kind.label(),
        file = %receipt.file_name,
        bytes = receipt.size_bytes,
        "📄 Upload received"
    );
    state.history.record(receipt.clone());

    Ok(Json(ApiResponseBody::success(receipt, "File received")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "XINGESTIONBOUNDARY";

    fn test_app() -> (Router, AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            r#"<body><input type="hidden" name="_csrf" value="{{csrf_token}}"></body>"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            history_limit: 10,
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        (router(state.clone()), state, dir)
    }

    fn multipart_body(file: Option<(&str, &str)>) -> String {
        let mut body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"fileType\"\r\n\r\npatients\r\n",
            b = BOUNDARY
        );
        if let Some((name, content)) = file {
            body.push_str(&format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\nContent-Type: text/csv\r\n\r\n{content}\r\n",
                b = BOUNDARY,
            ));
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        body
    }

    fn upload_request(path: &str, token: Option<&str>, body: String) -> Request<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            );
        if let Some(token) = token {
            builder = builder.header("X-CSRF-TOKEN", token);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_page_embeds_issued_token() {
        let (app, state, _dir) = test_app();

        let response = app
            .oneshot(Request::get("/ingestion").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!page.contains("{{csrf_token}}"));

        let token = page
            .split("value=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert!(state.tokens.verify(token));
    }

    #[tokio::test]
    async fn test_static_assets_served() {
        let (app, _state, _dir) = test_app();

        let response = app
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_without_token_is_forbidden() {
        let (app, state, _dir) = test_app();

        let response = app
            .oneshot(upload_request(
                "/api/ingestion/patients/upload",
                None,
                multipart_body(Some(("patients.csv", "a,b\n1,2"))),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid or missing CSRF token");
        assert!(state.history.recent().is_empty());
    }

    #[tokio::test]
    async fn test_upload_with_unknown_token_is_forbidden() {
        let (app, _state, _dir) = test_app();

        let response = app
            .oneshot(upload_request(
                "/api/ingestion/patients/upload",
                Some("not-issued"),
                multipart_body(Some(("patients.csv", "a,b\n1,2"))),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected() {
        let (app, state, _dir) = test_app();
        let token = state.tokens.issue();

        let response = app
            .oneshot(upload_request(
                "/api/ingestion/patients/upload",
                Some(&token),
                multipart_body(None),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No file provided");
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            max_upload_bytes: 1024,
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        let app = router(state.clone());
        let token = state.tokens.issue();

        let content = "1,LAB\n".repeat(1024);
        let response = app
            .oneshot(upload_request(
                "/api/ingestion/medical-records/upload",
                Some(&token),
                multipart_body(Some(("records.csv", &content))),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert!(state.history.recent().is_empty());
    }

    #[tokio::test]
    async fn test_upload_is_acknowledged_and_listed() {
        let (app, state, _dir) = test_app();
        let token = state.tokens.issue();

        let response = app
            .clone()
            .oneshot(upload_request(
                "/api/ingestion/medical-records/upload",
                Some(&token),
                multipart_body(Some(("records.csv", "patientId,recordType\n1,LAB"))),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "File received");
        assert_eq!(body["data"]["kind"], "medical-records");
        assert_eq!(body["data"]["fileName"], "records.csv");
        assert_eq!(body["data"]["sizeBytes"], 26);

        // Token stays valid for later uploads from the same page.
        let response = app
            .clone()
            .oneshot(upload_request(
                "/api/ingestion/patients/upload",
                Some(&token),
                multipart_body(Some(("patients.csv", "x"))),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/api/ingestion/uploads").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let list = json_body(response).await;
        assert_eq!(list[0]["fileName"], "patients.csv");
        assert_eq!(list[1]["fileName"], "records.csv");
    }

    #[tokio::test]
    async fn test_non_multipart_body_is_bad_request() {
        let (app, state, _dir) = test_app();
        let token = state.tokens.issue();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/ingestion/patients/upload")
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-CSRF-TOKEN", token)
            .body(Body::from("{}"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["success"], false);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _state, _dir) = test_app();

        let response = app
            .oneshot(Request::get("/api/ingestion/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["status"], "UP");
        assert_eq!(body["service"], "data-ingestion");
    }
}
