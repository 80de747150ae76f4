use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

/// RAII registration of a window event listener.
///
/// The JS listener is detached when the handle is dropped, so the Rust
/// callback can never be invoked after it has been freed.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl WindowListener {
    /// Detach now instead of at the end of the owner's scope
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

/// Listen for `event` on `window` until the returned handle is dropped
pub fn listen_window<E>(
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowListener
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
    }

    WindowListener { event_name, callback, capture: options.capture }
}
