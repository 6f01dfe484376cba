//! Browser-backed [`DocumentAdapter`].

use leptos::html::{Form, Input};
use leptos::{NodeRef, RwSignal, SignalUpdate};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::config::CSRF_INPUT_SELECTOR;
use crate::controller::DocumentAdapter;
use crate::state::UploadPageState;

/// The live page: UI state in a signal, form and file input by node ref.
#[derive(Clone, Copy)]
pub struct WebDocument {
    state: RwSignal<UploadPageState>,
    form: NodeRef<Form>,
    file_input: NodeRef<Input>,
}

impl WebDocument {
    pub fn new(
        state: RwSignal<UploadPageState>,
        form: NodeRef<Form>,
        file_input: NodeRef<Input>,
    ) -> Self {
        Self {
            state,
            form,
            file_input,
        }
    }
}

impl DocumentAdapter for WebDocument {
    fn csrf_token(&self) -> Option<String> {
        let element = gloo_utils::document()
            .query_selector(CSRF_INPUT_SELECTOR)
            .ok()
            .flatten()?;
        let input = element.dyn_into::<HtmlInputElement>().ok()?;
        let value = input.value();
        (!value.is_empty()).then_some(value)
    }

    fn update_state(&self, f: impl FnOnce(&mut UploadPageState)) {
        self.state.update(f);
    }

    fn clear_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.form.get_untracked() {
            form.reset();
        }
    }
}
