//! Toast notifications.

use std::rc::Rc;

use leptos::*;

use crate::config::TOAST_DELAY_MS;
use crate::services::{hide_toast, show_toast, HideOnce};
use crate::ToastNotice;

/// Called with the toast id once it is fully hidden.
///
/// A plain closure rather than a `Callback`: the fallback timer may run it
/// after the toast's reactive owner is gone.
pub type ToastHiddenHook = Rc<dyn Fn(i64)>;

/// The `toastContainer` holding every live toast.
#[component]
pub fn ToastContainer(
    toasts: Signal<Vec<ToastNotice>>,
    /// Called with the toast id once it is fully hidden
    on_hidden: ToastHiddenHook,
) -> impl IntoView {
    view! {
        <div id="toastContainer" class="toast-container position-fixed bottom-0 end-0 p-3">
            <For
                each=move || toasts.get()
                key=|notice| notice.id
                children=move |notice| {
                    let on_hidden = on_hidden.clone();
                    view! { <Toast notice=notice on_hidden=on_hidden/> }
                }
            />
        </div>
    }
}

#[component]
fn Toast(notice: ToastNotice, on_hidden: ToastHiddenHook) -> impl IntoView {
    let id = notice.id;
    let node = create_node_ref::<html::Div>();
    let hidden = HideOnce::new(move || on_hidden(id));

    let on_shown = hidden.clone();
    node.on_load(move |element| {
        request_animation_frame(move || show_toast(&element, TOAST_DELAY_MS, on_shown));
    });

    let close = move |_| {
        let handled = node
            .get_untracked()
            .map(|element| hide_toast(&element))
            .unwrap_or(false);
        if !handled {
            hidden.fire();
        }
    };

    view! {
        <div
            id=notice.dom_id()
            class=format!("toast align-items-center text-white {} border-0", notice.level.css_class())
            role="alert"
            aria-live="assertive"
            aria-atomic="true"
            node_ref=node
        >
            <div class="d-flex">
                <div class="toast-body">{notice.message}</div>
                <button
                    type="button"
                    class="btn-close btn-close-white me-2 m-auto"
                    aria-label="Close"
                    on:click=close
                ></button>
            </div>
        </div>
    }
}
