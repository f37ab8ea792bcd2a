//! Browser interop helpers
//!
//! JS listeners hold a Rust `Closure`, which must outlive the listener.
//! Instead of `Closure::forget()` (leaks, listener stays attached forever)
//! the closure is kept in a struct whose `Drop` removes the listener, so its
//! lifetime follows Rust ownership. Store one in a
//! `Signal<Option<DocumentKeyListener>>` and set it to `None` to detach.

use wasm_bindgen_x::prelude::*;

/// `keydown` listener on the document that fires for a single key.
pub struct DocumentKeyListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentKeyListener {
    /// Call `on_key` whenever `key` (a `KeyboardEvent.key` value such as
    /// `"Escape"`) is pressed. Detached on drop.
    pub fn new(
        document: web_sys_x::Document,
        key: &'static str,
        mut on_key: impl FnMut() + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |event: JsValue| {
            let pressed = js_sys_x::Reflect::get(&event, &"key".into())
                .ok()
                .and_then(|k| k.as_string());
            if pressed.as_deref() == Some(key) {
                on_key();
            }
        }));

        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok();

        Self { document, callback }
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}
