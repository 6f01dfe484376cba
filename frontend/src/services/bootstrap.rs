//! Bootstrap tooltip and toast bindings.
//!
//! The Bootstrap bundle is loaded by `index.html`; this module only calls
//! into it through `src/js/bootstrap.js`. When the bundle is missing the
//! toasts fall back to a plain timer so they still go away.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Attach a tooltip to every element matching `selector`.
///
/// Returns how many elements got one.
pub fn init_tooltips(selector: &str) -> u32 {
    let count = init_tooltips_js(selector);
    if count == 0 {
        log::debug!("No tooltips attached for {}", selector);
    } else {
        log::debug!("💬 {} tooltips attached", count);
    }
    count
}

/// Hide notification for one toast, run at most once.
///
/// The close button may report a toast that a timer reports again later.
/// Only the first report goes through. Holds no reactive handle, so it can
/// fire after the toast was unmounted.
#[derive(Clone)]
pub struct HideOnce(Rc<Cell<Option<Box<dyn FnOnce()>>>>);

impl HideOnce {
    pub fn new(on_hidden: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(Cell::new(Some(Box::new(on_hidden)))))
    }

    /// Run the notification if nobody did yet. Returns whether it ran.
    pub fn fire(&self) -> bool {
        match self.0.take() {
            Some(on_hidden) => {
                on_hidden();
                true
            }
            None => false,
        }
    }
}

/// Show a toast element and fire `hidden` once it has fully hidden.
pub fn show_toast(element: &Element, delay_ms: u32, hidden: HideOnce) {
    let on_event = hidden.clone();
    let closure = Closure::once_into_js(move || {
        on_event.fire();
    });
    if show_toast_js(element, delay_ms, &closure) {
        return;
    }

    log::warn!("Bootstrap not loaded, toast hides on a timer");
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if !hidden.fire() {
            log::debug!("Toast already dismissed before its timer");
        }
    });
}

/// Start hiding a toast early (close button).
///
/// Returns `false` when Bootstrap is not there to animate it, in which
/// case the caller removes the toast itself.
pub fn hide_toast(element: &Element) -> bool {
    hide_toast_js(element)
}

#[wasm_bindgen(module = "/src/js/bootstrap.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initTooltips")]
    fn init_tooltips_js(selector: &str) -> u32;

    #[wasm_bindgen(js_name = "showToast")]
    fn show_toast_js(element: &Element, delay_ms: u32, on_hidden: &JsValue) -> bool;

    #[wasm_bindgen(js_name = "hideToast")]
    fn hide_toast_js(element: &Element) -> bool;
}
