//! Clipboard Button Component
//!
//! Embeddable `clipboard-button` element: renders its `text` as inner
//! content and copies it to the system clipboard when clicked.

use dioxus::prelude::*;

use crate::clipboard::TAG_NAME;
use crate::hooks::use_clipboard_button;

/// Clipboard button
///
/// `text` is rendered as markup without escaping; only pass trusted content.
/// `oncopy` fires after a successful copy, `oncopyfailed` when the clipboard
/// write fails. Neither fires once the button has been removed.
#[component]
pub fn ClipboardButton(
    text: String,
    oncopy: Option<EventHandler<()>>,
    oncopyfailed: Option<EventHandler<()>>,
    #[props(default)] class: String,
) -> Element {
    let button = use_clipboard_button(text, oncopy, oncopyfailed);
    let body = button.body();

    let on_mount = button.clone();
    let on_click = button.clone();

    rsx! {
        button {
            r#type: "button",
            class: "{TAG_NAME} {class}",
            "data-element": TAG_NAME,
            onmounted: move |_| on_mount.mount(),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                on_click.trigger();
            },
            dangerous_inner_html: "{body}",
        }
    }
}
