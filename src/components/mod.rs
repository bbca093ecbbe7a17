// UI Components

pub mod clipboard_button;

pub use clipboard_button::ClipboardButton;
