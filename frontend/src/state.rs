//! Explicit UI state of the upload page.
//!
//! Every handler reads and writes this object instead of poking the
//! document directly. The Leptos components render from it, and tests
//! drive it without a browser.

use chrono::Utc;

use crate::types::{SelectedFile, ToastLevel, ToastNotice, UploadKind};

/// Phase of the form submission state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Waiting for the user. Submit control enabled.
    #[default]
    Idle,
    /// A request is in flight. Submit control disabled.
    Submitting,
}

/// Toasts currently in the document, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    notices: Vec<ToastNotice>,
    last_id: i64,
}

impl ToastStack {
    /// Add a toast stamped with the current time.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> i64 {
        self.push_at(Utc::now().timestamp_millis(), level, message)
    }

    /// Add a toast stamped with `now_ms`.
    ///
    /// Ids are strictly increasing: a toast created in the same
    /// millisecond as the previous one gets the next free id.
    pub fn push_at(&mut self, now_ms: i64, level: ToastLevel, message: impl Into<String>) -> i64 {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.notices.push(ToastNotice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Drop a toast once its hide animation finished.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[ToastNotice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Complete state of the upload page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadPageState {
    /// Selected `fileType` radio
    pub kind: UploadKind,
    /// File currently shown in the preview block
    pub selected: Option<SelectedFile>,
    /// Whether the `filePreview` container is shown
    pub preview_visible: bool,
    /// Submission state machine
    pub phase: SubmissionPhase,
    /// Visible notifications
    pub toasts: ToastStack,
    /// Bumped on every selection change; stale thumbnails compare against it
    selection: u64,
}

impl UploadPageState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Example panels
    // -------------------------------------------------------------------------

    pub fn select_kind(&mut self, kind: UploadKind) {
        self.kind = kind;
    }

    pub fn patient_example_visible(&self) -> bool {
        self.kind == UploadKind::Patients
    }

    pub fn record_example_visible(&self) -> bool {
        !self.patient_example_visible()
    }

    // -------------------------------------------------------------------------
    // File preview
    // -------------------------------------------------------------------------

    /// Replace the previewed file and show the preview container.
    ///
    /// Returns the selection generation a later thumbnail must present.
    pub fn select_file(&mut self, file: SelectedFile) -> u64 {
        self.selection += 1;
        self.selected = Some(file);
        self.preview_visible = true;
        self.selection
    }

    /// Swap the decoded thumbnail in, unless the file changed meanwhile.
    pub fn attach_thumbnail(&mut self, generation: u64, data_url: String) -> bool {
        if generation != self.selection {
            return false;
        }
        match self.selected.as_mut() {
            Some(file) => {
                file.data_url = Some(data_url);
                true
            }
            None => false,
        }
    }

    /// Close affordance of the preview block.
    pub fn remove_file(&mut self) {
        self.selection += 1;
        self.selected = None;
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Idle → Submitting. Returns `false` if a submission is already in flight.
    pub fn begin_submission(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    pub fn finish_submission(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }

    /// Mirror of a native form reset after a successful upload.
    pub fn reset_after_upload(&mut self) {
        self.kind = UploadKind::default();
        self.remove_file();
        self.preview_visible = false;
    }
}
