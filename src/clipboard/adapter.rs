//! Clipboard adapter interface
//!
//! The adapter is the collaborator that performs the actual clipboard write.
//! It is created bound to a copy target, receives success/failure handlers,
//! copies on demand and is destroyed when its owner unmounts.

use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked when a copy finishes
pub type OutcomeHandler = Rc<dyn Fn()>;

/// Result of a single copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Success,
    Failure,
}

/// Source of the text an adapter copies
///
/// Shares the owning element's text cell, so a copy always sees the value
/// current at trigger time rather than the value at bind time.
#[derive(Clone)]
pub struct CopyTarget {
    text: Rc<RefCell<String>>,
}

impl CopyTarget {
    pub fn new(text: Rc<RefCell<String>>) -> Self {
        Self { text }
    }

    /// Snapshot of the target's current content
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

/// Collaborator that writes a target's content to the system clipboard
///
/// Each call to `copy` reports exactly one outcome, through the handlers
/// registered for that outcome. Once `destroy` has run no handler fires,
/// including for copies that were already in flight.
pub trait ClipboardAdapter {
    /// Create an adapter bound to `target`
    fn bind(target: CopyTarget) -> Self
    where
        Self: Sized;

    fn on_success(&mut self, handler: OutcomeHandler);

    fn on_failure(&mut self, handler: OutcomeHandler);

    /// Copy the target's current content
    fn copy(&self);

    /// Release handlers and any resources held for the target
    fn destroy(&mut self);
}

/// Handler table shared between an adapter and its pending copies
#[derive(Default)]
pub struct OutcomeHandlers {
    success: Vec<OutcomeHandler>,
    failure: Vec<OutcomeHandler>,
    destroyed: bool,
}

impl OutcomeHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, outcome: CopyOutcome, handler: OutcomeHandler) {
        if self.destroyed {
            log::debug!("Ignoring {:?} handler registered after destroy", outcome);
            return;
        }
        match outcome {
            CopyOutcome::Success => self.success.push(handler),
            CopyOutcome::Failure => self.failure.push(handler),
        }
    }

    /// Drop every handler; later registrations and dispatches are ignored
    pub fn clear(&mut self) {
        self.success.clear();
        self.failure.clear();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn handlers_for(&self, outcome: CopyOutcome) -> Vec<OutcomeHandler> {
        match outcome {
            CopyOutcome::Success => self.success.clone(),
            CopyOutcome::Failure => self.failure.clone(),
        }
    }
}

/// Run the handlers registered for `outcome`, returning how many ran
///
/// The table borrow is released before any handler runs, so a handler may
/// destroy the adapter it was called from.
pub fn dispatch_outcome(handlers: &Rc<RefCell<OutcomeHandlers>>, outcome: CopyOutcome) -> usize {
    let to_run = handlers.borrow().handlers_for(outcome);
    for handler in &to_run {
        handler();
    }
    to_run.len()
}
