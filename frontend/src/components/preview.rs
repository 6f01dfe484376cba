//! Preview block of the selected file.

use leptos::*;

use crate::{SelectedFile, UploadPageState};

/// The `filePreview` container.
///
/// Holds at most one preview block, rendered from the current selection.
#[component]
pub fn FilePreview(
    state: RwSignal<UploadPageState>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let container_class = move || {
        if state.with(|s| s.preview_visible) {
            "file-preview mt-3"
        } else {
            "file-preview mt-3 d-none"
        }
    };

    view! {
        <div id="filePreview" class=container_class>
            {move || {
                state
                    .with(|s| s.selected.clone())
                    .map(|file| view! { <PreviewBlock file=file on_remove=on_remove/> })
            }}
        </div>
    }
}

#[component]
fn PreviewBlock(file: SelectedFile, on_remove: Callback<()>) -> impl IntoView {
    let details = format!("{} • {}", file.mime_type, file.size_label());

    let thumbnail = match file.data_url {
        Some(url) => view! {
            <img
                src=url
                class="img-thumbnail me-3"
                style="width: 60px; height: 60px; object-fit: cover;"
            />
        }
        .into_view(),
        None => view! { <i class="fas fa-file-alt fa-2x text-primary me-3"></i> }.into_view(),
    };

    view! {
        <div class="d-flex align-items-center">
            {thumbnail}
            <div>
                <h6 class="mb-1">{file.name}</h6>
                <small class="text-muted">{details}</small>
            </div>
            <button
                type="button"
                class="btn-close ms-auto"
                aria-label="Remove file"
                on:click=move |_| on_remove.call(())
            ></button>
        </div>
    }
}
