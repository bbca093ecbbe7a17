use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::clipboard::{ClipboardButtonElement, Notification, WebClipboard};

type SharedElement = Rc<RefCell<ClipboardButtonElement<WebClipboard>>>;

/// Latest host callbacks; rewritten on every render so listeners registered
/// once always reach the current props
#[derive(Clone, Default)]
struct HostHandlers {
    oncopy: Option<EventHandler<()>>,
    oncopyfailed: Option<EventHandler<()>>,
}

impl HostHandlers {
    fn for_notification(&self, notification: Notification) -> Option<EventHandler<()>> {
        match notification {
            Notification::Copy => self.oncopy.clone(),
            Notification::CopyFailed => self.oncopyfailed.clone(),
        }
    }
}

/// Handle to a clipboard button element owned by the calling component
#[derive(Clone)]
pub struct UseClipboardButton {
    element: SharedElement,
}

impl UseClipboardButton {
    /// Inner content to render, exactly as last set
    pub fn body(&self) -> String {
        self.element.borrow().body().to_string()
    }

    /// Call once the element is in the live document
    pub fn mount(&self) {
        self.element.borrow_mut().mount();
    }

    /// Copy the current text; ignored until mounted
    pub fn trigger(&self) {
        self.element.borrow().trigger();
    }
}

/// Clipboard button lifecycle hook
///
/// Creates the element once per component instance, re-applies `text` on
/// every render and unmounts the element (releasing its adapter) when the
/// component is dropped. `copy` and `copyFailed` notifications are forwarded
/// to `oncopy` / `oncopyfailed`.
///
/// # Example
/// ```
/// let button = use_clipboard_button(text, Some(oncopy), None);
///
/// // In your rsx:
/// button {
///     onmounted: move |_| button.mount(),
///     onclick: move |_| button.trigger(),
///     dangerous_inner_html: "{button.body()}",
/// }
/// ```
pub fn use_clipboard_button(
    text: String,
    oncopy: Option<EventHandler<()>>,
    oncopyfailed: Option<EventHandler<()>>,
) -> UseClipboardButton {
    let handlers = use_hook(|| Rc::new(RefCell::new(HostHandlers::default())));
    *handlers.borrow_mut() = HostHandlers { oncopy, oncopyfailed };

    let element: SharedElement = use_hook(|| {
        let element = ClipboardButtonElement::<WebClipboard>::new();
        for kind in [Notification::Copy, Notification::CopyFailed] {
            let handlers = handlers.clone();
            element.add_event_listener(kind, move |notification| {
                let handler = handlers.borrow().for_notification(notification);
                if let Some(handler) = handler {
                    handler.call(());
                }
            });
        }
        Rc::new(RefCell::new(element))
    });

    element.borrow_mut().set_text(text);

    let element_for_drop = element.clone();
    use_drop(move || {
        element_for_drop.borrow_mut().unmount();
    });

    UseClipboardButton { element }
}
