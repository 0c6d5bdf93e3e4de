//! Code Assistant - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CodeAssistantVm {
    /// Current file selection, replaced wholesale on every picker change.
    pub selected_files: RwSignal<Vec<web_sys::File>, LocalStorage>,
    pub question: RwSignal<String>,
    /// Display text of the last ask outcome: answer, error detail, or fallback.
    pub answer: RwSignal<String>,
    pub is_uploading: RwSignal<bool>,
    pub is_asking: RwSignal<bool>,
}

impl CodeAssistantVm {
    pub fn new() -> Self {
        Self {
            // web_sys::File is not Send, so the selection lives in local storage
            selected_files: RwSignal::new_local(Vec::new()),
            question: RwSignal::new(String::new()),
            answer: RwSignal::new(String::new()),
            is_uploading: RwSignal::new(false),
            is_asking: RwSignal::new(false),
        }
    }
}
