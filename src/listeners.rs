use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Event, EventTarget};

/// Global event listeners owned by one mounted component. Dropping the value
/// unregisters every listener it holds.
#[derive(Default)]
pub(crate) struct Subscription {
    listeners: Vec<EventListener>,
}

impl Subscription {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn listen<F>(mut self, target: Option<EventTarget>, event: &'static str, handler: F) -> Self
    where
        F: FnMut(&Event) + 'static,
    {
        let Some(target) = target else {
            gloo::console::warn!("no event target for", event);
            return self;
        };
        self.listeners.push(EventListener::new_with_options(
            &target,
            event,
            EventListenerOptions::default(),
            handler,
        ));
        self
    }

    pub(crate) fn window<F>(self, event: &'static str, handler: F) -> Self
    where
        F: FnMut(&Event) + 'static,
    {
        let target = web_sys::window().map(EventTarget::from);
        self.listen(target, event, handler)
    }

    pub(crate) fn document<F>(self, event: &'static str, handler: F) -> Self
    where
        F: FnMut(&Event) + 'static,
    {
        let target = web_sys::window()
            .and_then(|window| window.document())
            .map(EventTarget::from);
        self.listen(target, event, handler)
    }
}

/// Holds at most one pending animation frame callback.
#[derive(Default)]
pub(crate) struct FrameSlot {
    handle: RefCell<Option<AnimationFrame>>,
}

impl FrameSlot {
    pub(crate) fn request<F>(self: &Rc<Self>, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if self.handle.borrow().is_some() {
            return;
        }
        let slot = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            slot.handle.borrow_mut().take();
            callback();
        });
        *self.handle.borrow_mut() = Some(handle);
    }

    pub(crate) fn cancel(&self) {
        self.handle.borrow_mut().take();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dropping_a_subscription_unregisters_its_listeners() {
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let subscription = Subscription::new().document("portfolio-test", move |_| {
            counter.set(counter.get() + 1);
        });
        let document = gloo::utils::document();
        let event = Event::new("portfolio-test").unwrap();
        document.dispatch_event(&event).unwrap();
        assert_eq!(hits.get(), 1);
        drop(subscription);
        document.dispatch_event(&event).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
