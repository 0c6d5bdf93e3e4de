use crate::code_assistant::CodeAssistant;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CodeAssistant />
    }
}
