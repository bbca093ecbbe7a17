//! Clipboard error types
//!
//! Every variant collapses to the same outcome at the element boundary
//! (a `copyFailed` notification); the variants only keep the cause around
//! for logging.

use std::fmt;
use wasm_bindgen::JsValue;

/// Why a clipboard write did not happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No global `window` (not running in a browser)
    NoWindow,
    /// Window has no document attached
    NoDocument,
    /// `navigator.clipboard.writeText` rejected
    Rejected(String),
    /// Legacy `execCommand("copy")` reported false
    CommandFailed,
    /// DOM manipulation for the legacy fallback failed
    Dom(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NoWindow => write!(f, "No window"),
            ClipboardError::NoDocument => write!(f, "No document"),
            ClipboardError::Rejected(msg) => write!(f, "Clipboard write rejected: {}", msg),
            ClipboardError::CommandFailed => write!(f, "Copy command was not executed"),
            ClipboardError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ClipboardError::Rejected(msg)
    }
}

impl ClipboardError {
    /// Wrap a failed DOM call from the legacy copy path
    pub fn dom(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ClipboardError::Dom(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ClipboardError::NoWindow.to_string(), "No window");
        assert_eq!(ClipboardError::NoDocument.to_string(), "No document");
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".to_string()).to_string(),
            "Clipboard write rejected: NotAllowedError"
        );
        assert_eq!(
            ClipboardError::CommandFailed.to_string(),
            "Copy command was not executed"
        );
        assert_eq!(
            ClipboardError::Dom("append failed".to_string()).to_string(),
            "DOM error: append failed"
        );
    }
}
