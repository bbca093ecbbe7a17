#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod clipboard;
mod components;
mod hooks;
mod utils;

use components::ClipboardButton;

/// How long the host page shows copy feedback
const COPIED_FEEDBACK_MS: u32 = 2000;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting clipboard-button demo");

    dioxus::launch(App);
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

/// Host page: owns the text, shows/hides the button and reacts to its
/// notifications. Feedback is the host's job, the button itself shows none.
#[component]
fn App() -> Element {
    let mut text = use_signal(|| "Hello from the clipboard".to_string());
    let mut show_button = use_signal(|| true);
    let mut status = use_signal(|| CopyStatus::Idle);
    let mut copies = use_signal(|| 0u32);
    let mut failures = use_signal(|| 0u32);

    let mut show_feedback = move |next: CopyStatus| {
        status.set(next);
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
            if *status.peek() == next {
                status.set(CopyStatus::Idle);
            }
        });
    };

    let status_text = match *status.read() {
        CopyStatus::Idle => "",
        CopyStatus::Copied => "Copied!",
        CopyStatus::Failed => "Copy failed",
    };

    rsx! {
        div {
            class: "max-w-xl mx-auto p-6 space-y-4",

            h1 { class: "text-2xl font-bold", "clipboard-button" }

            input {
                r#type: "text",
                class: "w-full p-2 border border-border rounded-lg",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }

            div {
                class: "flex items-center gap-3",

                if *show_button.read() {
                    ClipboardButton {
                        text: text.read().clone(),
                        class: "px-4 py-2 rounded-lg bg-blue-500 text-white",
                        oncopy: move |_| {
                            *copies.write() += 1;
                            log::info!("Text copied to clipboard");
                            show_feedback(CopyStatus::Copied);
                        },
                        oncopyfailed: move |_| {
                            *failures.write() += 1;
                            log::warn!("Clipboard copy failed");
                            show_feedback(CopyStatus::Failed);
                        },
                    }
                }

                button {
                    r#type: "button",
                    class: "px-3 py-2 border border-border rounded-lg",
                    onclick: move |_| {
                        let next = !*show_button.read();
                        show_button.set(next);
                    },
                    if *show_button.read() { "Remove button" } else { "Insert button" }
                }

                span { class: "text-sm text-muted-foreground", "{status_text}" }
            }

            p {
                class: "text-xs text-muted-foreground",
                "copy: {copies} · copyFailed: {failures}"
            }
        }
    }
}
