//! Data Ingestion - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload page for patient and medical record files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /ingestion                                                  │
//! │  ├── UploadPage (form, preview, examples, toasts)           │
//! │  └── UploadHistory (refreshed after each upload)            │
//! │  /ingestion/history                                          │
//! │  └── UploadHistory                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, ToastNotice, UploadResponse, etc.)
//! - [`state`] - Explicit UI state of the upload page
//! - [`controller`] - Event handling and submission state machine
//! - [`document`] - Browser-backed document adapter
//! - [`components`] - UI components
//! - [`services`] - Host communication, file decoding, Bootstrap bridge

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod controller;
pub mod document;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    UploadKind, SelectedFile, format_file_size, is_image_mime,
    // Toasts
    ToastLevel, ToastNotice,
    // API
    UploadResponse, UploadReceipt,
    // Errors
    AppError, AppResult,
};

// State and controller
pub use state::{SubmissionPhase, ToastStack, UploadPageState};
pub use controller::{DocumentAdapter, RefreshHook, SubmitOutcome, UploadController, UploadTransport};
pub use document::WebDocument;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
///
/// Called by the binary that trunk builds.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🏥 Data Ingestion - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Data Ingestion"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=UploadRoute/>
                    <Route path="/ingestion" view=UploadRoute/>
                    <Route path="/ingestion/history" view=HistoryRoute/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn UploadRoute() -> impl IntoView {
    // Bumped after each successful upload so the receipt table re-fetches.
    let (history_version, set_history_version) = create_signal(0u32);
    let on_uploaded: RefreshHook = Rc::new(move || set_history_version.update(|v| *v += 1));

    view! {
        <UploadPage on_uploaded=on_uploaded/>
        <UploadHistory refresh=history_version/>
    }
}

#[component]
fn HistoryRoute() -> impl IntoView {
    view! { <UploadHistory refresh=Signal::derive(|| 0u32)/> }
}
