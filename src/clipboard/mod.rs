//! Clipboard button core
//!
//! Element state, the adapter interface it drives, the notifications it
//! emits, and the browser adapter used by the Dioxus component.

pub mod adapter;
pub mod element;
pub mod errors;
pub mod events;
pub mod web;

pub use element::{ClipboardButtonElement, TAG_NAME};
pub use errors::ClipboardError;
pub use events::Notification;
pub use web::WebClipboard;
