pub mod use_clipboard_button;

pub use use_clipboard_button::use_clipboard_button;
