//! Transient warning toast

use crate::components::icons::{AlertTriangleIcon, XIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// A dismissible warning in the bottom corner
#[component]
pub fn ToastView(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed bottom-6 right-4 bg-amber-600 text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            role: "alert",
            div { class: "flex items-center justify-between gap-4",
                AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
                span { class: "flex-1", "{message}" }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
