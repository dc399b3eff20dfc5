//! Scoped touch-event registration.
//!
//! [`EventSource`] wraps the host element's event target; [`EventSource::listen`]
//! attaches a handler and hands back a [`ListenerHandle`] that keeps the
//! listener alive for exactly as long as it is held. Dropping the handle
//! deregisters the listener, which is how the per-gesture move listener gets
//! released when a touch sequence ends.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, EventTarget, TouchEvent};

#[derive(Clone)]
pub struct EventSource {
    target: EventTarget,
}

impl EventSource {
    pub fn new(target: &EventTarget) -> Self {
        Self {
            target: target.clone(),
        }
    }

    /// Attaches `handler` for `event`. Listeners are registered non-passive
    /// so handlers may cancel the browser's default touch scrolling.
    pub fn listen<F>(&self, event: &'static str, handler: F) -> ListenerHandle
    where
        F: FnMut(TouchEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(TouchEvent)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = self
            .target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            );
        ListenerHandle {
            target: self.target.clone(),
            event,
            closure,
        }
    }
}

/// Owns one registered listener; dropping it deregisters.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(TouchEvent)>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
