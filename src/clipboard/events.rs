//! Notifications emitted by a clipboard button
//!
//! Hosts subscribe per notification kind and get back a `ListenerId` they can
//! use to unsubscribe. Notifications carry no payload.

use std::cell::RefCell;
use std::rc::Rc;

use super::adapter::CopyOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Text reached the clipboard
    Copy,
    /// Clipboard write failed
    CopyFailed,
}

impl Notification {
    /// Event name seen by host code
    pub fn event_name(&self) -> &'static str {
        match self {
            Notification::Copy => "copy",
            Notification::CopyFailed => "copyFailed",
        }
    }

    pub fn from_outcome(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Success => Notification::Copy,
            CopyOutcome::Failure => Notification::CopyFailed,
        }
    }
}

/// Handle returned by `EventListeners::add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Rc<dyn Fn(Notification)>;

/// Host subscriptions, keyed by notification kind
#[derive(Default)]
pub struct EventListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Notification, Listener)>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: Notification, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, kind, listener));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn listeners_for(&self, kind: Notification) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|(_, entry_kind, _)| *entry_kind == kind)
            .map(|(_, _, listener)| listener.clone())
            .collect()
    }
}

/// Deliver `notification` to its subscribers, returning how many were called
///
/// Listeners run after the registry borrow is released so they can
/// subscribe or unsubscribe from inside the callback.
pub fn emit(listeners: &Rc<RefCell<EventListeners>>, notification: Notification) -> usize {
    let to_call = listeners.borrow().listeners_for(notification);
    log::debug!(
        "Emitting '{}' to {} listener(s)",
        notification.event_name(),
        to_call.len()
    );
    for listener in &to_call {
        listener(notification);
    }
    to_call.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Notification::Copy.event_name(), "copy");
        assert_eq!(Notification::CopyFailed.event_name(), "copyFailed");
        assert_eq!(Notification::from_outcome(CopyOutcome::Success), Notification::Copy);
        assert_eq!(Notification::from_outcome(CopyOutcome::Failure), Notification::CopyFailed);
    }

    #[test]
    fn test_emit_filters_by_kind() {
        let listeners = Rc::new(RefCell::new(EventListeners::new()));
        let seen: Rc<RefCell<Vec<Notification>>> = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        listeners.borrow_mut().add(
            Notification::Copy,
            Rc::new(move |n: Notification| seen_clone.borrow_mut().push(n)),
        );

        assert_eq!(emit(&listeners, Notification::CopyFailed), 0);
        assert!(seen.borrow().is_empty());

        assert_eq!(emit(&listeners, Notification::Copy), 1);
        assert_eq!(*seen.borrow(), vec![Notification::Copy]);
    }

    #[test]
    fn test_remove_listener() {
        let listeners = Rc::new(RefCell::new(EventListeners::new()));
        let id = listeners
            .borrow_mut()
            .add(Notification::Copy, Rc::new(|_: Notification| panic!("removed listener called")));

        assert!(listeners.borrow_mut().remove(id));
        assert!(!listeners.borrow_mut().remove(id));
        assert_eq!(emit(&listeners, Notification::Copy), 0);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let listeners = Rc::new(RefCell::new(EventListeners::new()));
        let registry = listeners.clone();
        let own_id: Rc<RefCell<Option<ListenerId>>> = Rc::new(RefCell::new(None));
        let own_id_clone = own_id.clone();

        let id = listeners.borrow_mut().add(
            Notification::Copy,
            Rc::new(move |_: Notification| {
                if let Some(id) = own_id_clone.borrow_mut().take() {
                    registry.borrow_mut().remove(id);
                }
            }),
        );
        *own_id.borrow_mut() = Some(id);

        assert_eq!(emit(&listeners, Notification::Copy), 1);
        assert_eq!(emit(&listeners, Notification::Copy), 0);
    }
}
