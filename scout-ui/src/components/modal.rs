//! Modal built on the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape handling
//! and `::backdrop` styling for free. The dialog manages its own `display`;
//! layout lives in the inner fixed container.
//!
//! `cancel` only fires from user actions (Escape), never from `close()`.
//! `showModal()` throws when the dialog is already open, so the `open`
//! attribute is checked first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method on `element` if it exists.
fn call_method(element: &web_sys_x::Element, name: &str) {
    let Ok(method) = js_sys_x::Reflect::get(element, &name.into()) else {
        return;
    };
    if let Some(func) = method.dyn_ref::<js_sys_x::Function>() {
        let _ = func.call0(element);
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("scout-modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        let currently_open = element.has_attribute("open");
        match (open, currently_open) {
            (true, false) => call_method(&element, "showModal"),
            (false, true) => call_method(&element, "close"),
            _ => {}
        }
    });

    let dialog_class = class.unwrap_or_default();

    // No display classes on the dialog itself: they would override the
    // native display:none while closed.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 backdrop:backdrop-blur-sm {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "w-full max-w-2xl",
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
