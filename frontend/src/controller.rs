//! Upload page controller.
//!
//! Binds user actions to state transitions and the single upload request.
//! It never touches the browser directly: the page is reached through a
//! [`DocumentAdapter`] and the network through an [`UploadTransport`].
//!
//! # Submission state machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──success──▶ Idle (form reset, refresh hook)
//!                      │
//!                      └──failure──▶ Idle (form untouched)
//! ```

use std::rc::Rc;

use crate::config::{UPLOAD_FAILURE_FALLBACK, UPLOAD_SUCCESS_MESSAGE, UPLOAD_TRANSPORT_FAILURE};
use crate::state::UploadPageState;
use crate::types::{AppError, AppResult, SelectedFile, ToastLevel, UploadKind, UploadResponse};

/// Callback run after every successful upload.
pub type RefreshHook = Rc<dyn Fn()>;

/// Access to the page the controller drives.
pub trait DocumentAdapter {
    /// Value of the hidden `_csrf` input, if the page carries one.
    fn csrf_token(&self) -> Option<String>;

    /// Apply a change to the UI state.
    fn update_state(&self, f: impl FnOnce(&mut UploadPageState));

    /// Clear the file input's value.
    fn clear_file_input(&self);

    /// Native reset of the upload form.
    fn reset_form(&self);
}

/// Sends the multipart form to the host.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    /// Packaged form fields.
    type Payload;

    /// POST `payload` to `action` with the CSRF header when a token is known.
    async fn post(
        &self,
        action: &str,
        csrf_token: Option<&str>,
        payload: Self::Payload,
    ) -> AppResult<UploadResponse>;
}

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Host answered `success: true`.
    Uploaded,
    /// Host answered `success: false`; carries the toast text.
    Rejected(String),
    /// No usable answer.
    Failed(AppError),
    /// Another submission was still in flight.
    Ignored,
}

/// Drives the upload page.
#[derive(Clone)]
pub struct UploadController<D, T> {
    document: D,
    transport: T,
    refresh: Option<RefreshHook>,
}

impl<D: DocumentAdapter, T: UploadTransport> UploadController<D, T> {
    pub fn new(document: D, transport: T) -> Self {
        Self {
            document,
            transport,
            refresh: None,
        }
    }

    /// Install the hook run after each successful upload.
    pub fn with_refresh_hook(mut self, hook: RefreshHook) -> Self {
        self.refresh = Some(hook);
        self
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// `change` on the `fileType` radio group.
    pub fn change_kind(&self, radio_value: &str) {
        let kind = UploadKind::from_radio_value(radio_value);
        self.document.update_state(|state| state.select_kind(kind));
    }

    /// `change` on the file input with a file picked.
    ///
    /// Returns the selection generation when the caller should decode a
    /// thumbnail for it.
    pub fn select_file(&self, file: SelectedFile) -> Option<u64> {
        let wants_thumbnail = file.is_image();
        log::debug!("Selected {} ({}, {})", file.name, file.mime_type, file.size_label());

        let mut generation = 0;
        self.document
            .update_state(|state| generation = state.select_file(file));
        wants_thumbnail.then_some(generation)
    }

    /// A thumbnail finished decoding.
    pub fn attach_thumbnail(&self, generation: u64, data_url: String) {
        self.document.update_state(|state| {
            if !state.attach_thumbnail(generation, data_url) {
                log::debug!("Dropped thumbnail for a replaced selection");
            }
        });
    }

    /// Close button of the preview block.
    pub fn remove_file(&self) {
        self.document.clear_file_input();
        self.document.update_state(UploadPageState::remove_file);
    }

    pub fn show_toast(&self, level: ToastLevel, message: impl Into<String>) -> i64 {
        let message = message.into();
        let mut id = 0;
        self.document
            .update_state(|state| id = state.toasts.push(level, message));
        id
    }

    /// The toast finished its hide animation.
    pub fn toast_hidden(&self, id: i64) {
        self.document.update_state(|state| {
            state.toasts.remove(id);
        });
    }

    /// Submit the upload form.
    ///
    /// One request per call, no retry. Every outcome returns the page to
    /// `Idle` and leaves exactly one new toast, except [`SubmitOutcome::Ignored`]
    /// which changes nothing.
    pub async fn submit(&self, action: &str, payload: T::Payload) -> SubmitOutcome {
        let mut started = false;
        self.document
            .update_state(|state| started = state.begin_submission());
        if !started {
            log::warn!("Upload already in progress, ignoring submit");
            return SubmitOutcome::Ignored;
        }

        let token = self.document.csrf_token();
        if token.is_none() {
            log::warn!("No CSRF token on the page, sending upload without it");
        }

        log::info!("📤 Uploading to {}", action);
        let outcome = match self.transport.post(action, token.as_deref(), payload).await {
            Ok(response) if response.success => SubmitOutcome::Uploaded,
            Ok(response) => SubmitOutcome::Rejected(
                response
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| UPLOAD_FAILURE_FALLBACK.to_string()),
            ),
            Err(e) => {
                log::error!("Error: {}", e);
                SubmitOutcome::Failed(e)
            }
        };

        self.document.update_state(|state| {
            state.finish_submission();
            match &outcome {
                SubmitOutcome::Uploaded => {
                    state.toasts.push(ToastLevel::Success, UPLOAD_SUCCESS_MESSAGE);
                    state.reset_after_upload();
                }
                SubmitOutcome::Rejected(message) => {
                    state.toasts.push(ToastLevel::Danger, message.clone());
                }
                SubmitOutcome::Failed(_) => {
                    state.toasts.push(ToastLevel::Danger, UPLOAD_TRANSPORT_FAILURE);
                }
                SubmitOutcome::Ignored => {}
            }
        });

        if outcome == SubmitOutcome::Uploaded {
            log::info!("✅ Upload accepted");
            self.document.reset_form();
            if let Some(refresh) = &self.refresh {
                refresh();
            }
        }

        outcome
    }
}
