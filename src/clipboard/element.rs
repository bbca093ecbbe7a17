//! Clipboard button element
//!
//! Framework-free core of the `clipboard-button` element: the `text`
//! property, the Unmounted/Mounted lifecycle and exclusive ownership of the
//! clipboard adapter. The Dioxus component drives it from its mount, drop
//! and click hooks.

// Host-facing API; the bundled demo page only exercises part of it
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::adapter::{ClipboardAdapter, CopyOutcome, CopyTarget};
use super::events::{self, EventListeners, ListenerId, Notification};

/// Tag name the element is registered under
pub const TAG_NAME: &str = "clipboard-button";

/// Forwards adapter outcomes to host listeners for one mount
///
/// Adapter handlers only hold a `Weak` to this; unmount drops the strong
/// reference so outcomes arriving afterwards go nowhere.
struct Dispatcher {
    listeners: Rc<RefCell<EventListeners>>,
}

impl Dispatcher {
    fn forward(&self, outcome: CopyOutcome) {
        events::emit(&self.listeners, Notification::from_outcome(outcome));
    }
}

fn forwarder(dispatcher: Weak<Dispatcher>, outcome: CopyOutcome) -> Rc<dyn Fn()> {
    Rc::new(move || match dispatcher.upgrade() {
        Some(dispatcher) => dispatcher.forward(outcome),
        None => log::debug!("Dropping {:?} outcome for unmounted {}", outcome, TAG_NAME),
    })
}

pub struct ClipboardButtonElement<A: ClipboardAdapter> {
    text: Rc<RefCell<String>>,
    body: String,
    render_count: u64,
    adapter: Option<A>,
    dispatcher: Option<Rc<Dispatcher>>,
    listeners: Rc<RefCell<EventListeners>>,
}

impl<A: ClipboardAdapter> ClipboardButtonElement<A> {
    pub fn new() -> Self {
        Self {
            text: Rc::new(RefCell::new(String::new())),
            body: String::new(),
            render_count: 0,
            adapter: None,
            dispatcher: None,
            listeners: Rc::new(RefCell::new(EventListeners::new())),
        }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Store `value` and render it verbatim as the element body
    ///
    /// Unchanged values are rendered again as well. The body is markup:
    /// callers are responsible for what they put in it.
    pub fn set_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.body.clone_from(&value);
        *self.text.borrow_mut() = value;
        self.render_count += 1;
    }

    /// Current rendered inner content
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Number of times the body has been rendered through `set_text`
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn is_mounted(&self) -> bool {
        self.adapter.is_some()
    }

    /// Bind a fresh adapter to this element
    ///
    /// Mounting an already mounted element keeps the existing adapter.
    pub fn mount(&mut self) {
        if self.adapter.is_some() {
            log::debug!("{} already mounted, keeping existing adapter", TAG_NAME);
            return;
        }

        let dispatcher = Rc::new(Dispatcher {
            listeners: Rc::clone(&self.listeners),
        });

        let mut adapter = A::bind(CopyTarget::new(Rc::clone(&self.text)));
        adapter.on_success(forwarder(Rc::downgrade(&dispatcher), CopyOutcome::Success));
        adapter.on_failure(forwarder(Rc::downgrade(&dispatcher), CopyOutcome::Failure));

        self.dispatcher = Some(dispatcher);
        self.adapter = Some(adapter);
        log::debug!("{} mounted", TAG_NAME);
    }

    /// Destroy and release the adapter, if any
    pub fn unmount(&mut self) {
        // Dispatcher goes first so nothing destroy() triggers can reach listeners
        self.dispatcher = None;
        if let Some(mut adapter) = self.adapter.take() {
            adapter.destroy();
            log::debug!("{} unmounted", TAG_NAME);
        }
    }

    /// User interaction: copy the current text
    ///
    /// Returns false when unmounted, in which case nothing is copied.
    pub fn trigger(&self) -> bool {
        match &self.adapter {
            Some(adapter) => {
                adapter.copy();
                true
            }
            None => {
                log::debug!("Ignoring copy on unmounted {}", TAG_NAME);
                false
            }
        }
    }

    pub fn add_event_listener<F>(&self, kind: Notification, listener: F) -> ListenerId
    where
        F: Fn(Notification) + 'static,
    {
        self.listeners.borrow_mut().add(kind, Rc::new(listener))
    }

    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id)
    }
}

impl<A: ClipboardAdapter> Default for ClipboardButtonElement<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ClipboardAdapter> Drop for ClipboardButtonElement<A> {
    fn drop(&mut self) {
        self.unmount();
    }
}
