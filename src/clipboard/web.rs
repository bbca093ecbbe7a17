//! Browser clipboard adapter
//!
//! Copies through `utils::clipboard::copy_to_clipboard` on a task spawned in
//! the current Dioxus scope, then reports the outcome to the registered
//! handlers.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::adapter::{
    dispatch_outcome, ClipboardAdapter, CopyOutcome, CopyTarget, OutcomeHandler, OutcomeHandlers,
};
use crate::utils::clipboard::copy_to_clipboard;

pub struct WebClipboard {
    target: CopyTarget,
    handlers: Rc<RefCell<OutcomeHandlers>>,
}

impl ClipboardAdapter for WebClipboard {
    fn bind(target: CopyTarget) -> Self {
        Self {
            target,
            handlers: Rc::new(RefCell::new(OutcomeHandlers::new())),
        }
    }

    fn on_success(&mut self, handler: OutcomeHandler) {
        self.handlers.borrow_mut().register(CopyOutcome::Success, handler);
    }

    fn on_failure(&mut self, handler: OutcomeHandler) {
        self.handlers.borrow_mut().register(CopyOutcome::Failure, handler);
    }

    fn copy(&self) {
        if self.handlers.borrow().is_destroyed() {
            log::warn!("Copy requested on a destroyed clipboard adapter");
            return;
        }

        let text = self.target.text();
        let handlers = Rc::clone(&self.handlers);
        spawn(async move {
            let outcome = match copy_to_clipboard(&text).await {
                Ok(()) => {
                    log::debug!("Copied {} chars to clipboard", text.chars().count());
                    CopyOutcome::Success
                }
                Err(e) => {
                    log::warn!("Failed to copy to clipboard: {}", e);
                    CopyOutcome::Failure
                }
            };
            dispatch_outcome(&handlers, outcome);
        });
    }

    fn destroy(&mut self) {
        self.handlers.borrow_mut().clear();
    }
}
