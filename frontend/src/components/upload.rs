//! Upload form: file type, file picker with preview, async submission.
//!
//! Builds the [`UploadController`] for the live page and routes every DOM
//! event of the form through it.

use std::rc::Rc;

use leptos::*;
use web_sys::{Event, FormData, HtmlInputElement, SubmitEvent};

use crate::config::{SUBMIT_IDLE_LABEL, SUBMIT_LOADING_LABEL, TOOLTIP_SELECTOR};
use crate::services::{init_tooltips, read_as_data_url, upload_url, HttpTransport};
use crate::{
    ExampleSection, FilePreview, FileTypeSelector, SelectedFile, ToastContainer, ToastHiddenHook,
    RefreshHook, UploadController, UploadPageState, WebDocument,
};

type PageController = UploadController<WebDocument, HttpTransport>;

#[component]
pub fn UploadPage(
    /// Run after each successful upload (e.g. to refresh a receipt table)
    #[prop(optional)]
    on_uploaded: Option<RefreshHook>,
) -> impl IntoView {
    let state = create_rw_signal(UploadPageState::new());
    let form_ref = create_node_ref::<html::Form>();
    let input_ref = create_node_ref::<html::Input>();

    let mut controller = UploadController::new(
        WebDocument::new(state, form_ref, input_ref),
        HttpTransport,
    );
    if let Some(hook) = on_uploaded {
        controller = controller.with_refresh_hook(hook);
    }
    let controller: Rc<PageController> = Rc::new(controller);

    request_animation_frame(|| {
        init_tooltips(TOOLTIP_SELECTOR);
    });

    let kind = Signal::derive(move || state.with(|s| s.kind));
    let submitting = move || state.with(|s| s.is_submitting());
    let toasts = Signal::derive(move || state.with(|s| s.toasts.notices().to_vec()));

    let on_kind_change = {
        let controller = controller.clone();
        Callback::new(move |value: String| controller.change_kind(&value))
    };

    let on_remove = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.remove_file())
    };

    let on_toast_hidden: ToastHiddenHook = {
        let controller = controller.clone();
        Rc::new(move |id: i64| controller.toast_hidden(id))
    };

    let on_file_change = {
        let controller = controller.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let selected = SelectedFile::new(file.name(), file.type_(), file.size() as u64);
            if let Some(generation) = controller.select_file(selected) {
                let controller = controller.clone();
                spawn_local(async move {
                    match read_as_data_url(&file).await {
                        Ok(data_url) => controller.attach_thumbnail(generation, data_url),
                        Err(e) => log::warn!("Thumbnail unavailable: {}", e),
                    }
                });
            }
        }
    };

    let on_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let Some(form) = form_ref.get_untracked() else {
                return;
            };
            let payload = match FormData::new_with_form(&form) {
                Ok(payload) => payload,
                Err(e) => {
                    log::error!("Failed to package form: {:?}", e);
                    return;
                }
            };
            let action = form.action();

            let controller = controller.clone();
            spawn_local(async move {
                controller.submit(&action, payload).await;
            });
        }
    };

    view! {
        <div class="row g-4">
            <div class="col-lg-7">
                <div class="card shadow-sm">
                    <div class="card-body">
                        <h5 class="card-title mb-3">"Upload Data File"</h5>
                        <form
                            id="uploadForm"
                            method="post"
                            enctype="multipart/form-data"
                            action=move || upload_url(kind.get())
                            node_ref=form_ref
                            on:submit=on_submit
                        >
                            <FileTypeSelector kind=kind on_change=on_kind_change/>

                            <div class="mb-3">
                                <label for="fileInput" class="form-label">"Data file"</label>
                                <input
                                    type="file"
                                    class="form-control"
                                    id="fileInput"
                                    name="file"
                                    required=true
                                    node_ref=input_ref
                                    on:change=on_file_change
                                />
                            </div>

                            <FilePreview state=state on_remove=on_remove/>

                            <button
                                type="submit"
                                class="btn btn-primary mt-3"
                                prop:disabled=submitting
                            >
                                {move || {
                                    if submitting() {
                                        view! {
                                            <span
                                                class="spinner-border spinner-border-sm me-2"
                                                role="status"
                                                aria-hidden="true"
                                            ></span>
                                            {SUBMIT_LOADING_LABEL}
                                        }
                                        .into_view()
                                    } else {
                                        SUBMIT_IDLE_LABEL.into_view()
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
            <div class="col-lg-5">
                <ExampleSection kind=kind/>
            </div>
        </div>

        <ToastContainer toasts=toasts on_hidden=on_toast_hidden/>
    }
}
