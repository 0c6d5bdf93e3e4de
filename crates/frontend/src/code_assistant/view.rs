//! Code Assistant - View Component

use super::model::{ask_question, upload_documents};
use super::view_model::CodeAssistantVm;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CodeAssistant() -> impl IntoView {
    let vm = CodeAssistantVm::new();

    // The picker replaces the whole selection, including with an empty list
    // when the dialog is dismissed without files.
    let handle_file_select = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            let mut files = Vec::new();
            if let Some(list) = input.files() {
                for index in 0..list.length() {
                    if let Some(file) = list.get(index) {
                        files.push(file);
                    }
                }
            }
            vm.selected_files.set(files);
        }
    };

    let handle_upload = move |_| {
        vm.is_uploading.set(true);
        let files = vm.selected_files.get();
        wasm_bindgen_futures::spawn_local(async move {
            match upload_documents(&files).await {
                Ok(ack) => log::info!("{}", ack.message),
                Err(e) => {
                    log::error!("File upload error: {}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Error uploading files");
                    }
                }
            }
            vm.is_uploading.set(false);
        });
    };

    // Shared by the Ask button and Enter in the question input. Both arms of
    // the result are display text and only ever touch `answer`.
    let handle_ask = Callback::new(move |_: ()| {
        vm.is_asking.set(true);
        let question = vm.question.get();
        wasm_bindgen_futures::spawn_local(async move {
            match ask_question(&question).await {
                Ok(answer) => vm.answer.set(answer),
                Err(display) => {
                    log::error!("Question processing error: {}", display);
                    vm.answer.set(display);
                }
            }
            vm.is_asking.set(false);
        });
    });

    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 16px;">
            <h1 style="font-size: 22px; font-weight: bold;">"ICD-10 Code Chat Assistant"</h1>

            // File upload section
            <Flex align=FlexAlign::Center style="gap: 8px;">
                <input type="file" multiple=true on:change=handle_file_select />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_uploading
                    on_click=handle_upload
                >
                    {move || {
                        if vm.is_uploading.get() {
                            "Uploading..."
                        } else {
                            "Upload and Process PDFs"
                        }
                    }}
                </Button>
                <Show when=move || vm.is_uploading.get()>
                    <Spinner />
                </Show>
            </Flex>

            {move || {
                let files = vm.selected_files.get();
                (!files.is_empty()).then(|| {
                    view! {
                        <div style="font-size: 13px; color: var(--colorNeutralForeground3);">
                            {files
                                .iter()
                                .map(|f| format!("{} ({:.2} KB)", f.name(), f.size() / 1024.0))
                                .collect::<Vec<_>>()
                                .join(", ")}
                        </div>
                    }
                })
            }}

            // Question section
            <Flex align=FlexAlign::Center style="gap: 8px;">
                <div style="flex: 1;">
                    <Input
                        value=vm.question
                        placeholder="Ask a question"
                        disabled=vm.is_asking
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                handle_ask.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_asking
                    on_click=move |_| handle_ask.run(())
                >
                    {move || if vm.is_asking.get() { "Asking..." } else { "Ask" }}
                </Button>
                <Show when=move || vm.is_asking.get()>
                    <Spinner />
                </Show>
            </Flex>

            // Answer section
            <div>
                <h2 style="font-size: 16px; font-weight: bold; margin-bottom: 8px;">"Answer:"</h2>
                <div style="white-space: pre-wrap;">{move || vm.answer.get()}</div>
            </div>
        </div>
    }
}
