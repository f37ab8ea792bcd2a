//! Full-screen barcode scanner overlay
//!
//! Pure view. The web app mounts the camera preview into the element with
//! [`SCANNER_VIEWPORT_ID`] while the overlay is open.

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::{AlertTriangleIcon, LockIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::stores::{ScannerState, ScannerStateStoreExt};
use dioxus::prelude::*;

/// DOM id of the element the decoder renders its video into
pub const SCANNER_VIEWPORT_ID: &str = "scanner-viewport";

#[component]
pub fn ScannerOverlayView(
    state: ReadStore<ScannerState>,
    on_close: EventHandler<()>,
    on_use_fallback: EventHandler<()>,
) -> Element {
    let phase = state.scanner().read().phase().clone();
    if !phase.is_open() {
        return rsx! {};
    }
    let insecure_origin = *state.insecure_origin().read();
    let status = phase.status_message();
    let error = phase.error().cloned();

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black flex flex-col",
            role: "dialog",
            aria_modal: "true",
            aria_label: "Barcode scanner",
            ChromelessButton {
                class: Some("absolute top-4 right-4 z-20 p-2 bg-gray-900/80 rounded-full text-white hover:bg-gray-800".to_string()),
                aria_label: Some("Close scanner".to_string()),
                onclick: move |_| on_close.call(()),
                XIcon { class: "w-6 h-6" }
            }

            div { class: "relative flex-1 overflow-hidden",
                div {
                    id: SCANNER_VIEWPORT_ID,
                    class: "absolute inset-0 [&>video]:w-full [&>video]:h-full [&>video]:object-cover [&>canvas]:hidden",
                }

                if let Some(error) = error {
                    div { class: "absolute inset-0 z-10 flex items-center justify-center p-6 bg-black/80",
                        div { class: "bg-gray-900 border border-red-800 rounded-xl p-6 max-w-sm w-full space-y-4",
                            div { class: "flex items-center gap-2 text-red-400 font-bold",
                                AlertTriangleIcon { class: "w-5 h-5" }
                                "Camera error"
                            }
                            p { class: "text-gray-300 text-sm", "{error}" }
                            div { class: "flex gap-3",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    size: ButtonSize::Medium,
                                    class: Some("flex-1".to_string()),
                                    onclick: move |_| on_close.call(()),
                                    "Close"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    size: ButtonSize::Medium,
                                    class: Some("flex-1".to_string()),
                                    onclick: move |_| on_use_fallback.call(()),
                                    "Use test data"
                                }
                            }
                        }
                    }
                } else {
                    if let Some(status) = status {
                        div { class: "absolute inset-0 z-10 flex items-center justify-center",
                            LoadingSpinner { message: status.to_string() }
                        }
                    }
                    if insecure_origin {
                        div { class: "absolute top-4 left-4 right-16 z-10 bg-amber-900/80 border border-amber-700 text-amber-100 rounded-lg p-3 text-sm flex gap-2",
                            LockIcon { class: "w-4 h-4 flex-shrink-0 mt-0.5" }
                            div {
                                span { class: "font-bold", "Warning" }
                                p { "Camera may not work because the connection is not secure (no HTTPS)." }
                            }
                        }
                    }
                    div { class: "absolute inset-0 pointer-events-none flex items-center justify-center",
                        div { class: "w-72 h-40 border-2 border-blue-400/80 rounded-lg shadow-[0_0_0_9999px_rgba(0,0,0,0.45)]" }
                    }
                    p { class: "absolute bottom-6 inset-x-0 text-center text-white text-sm",
                        "Hold the barcode steady in view"
                    }
                }
            }

            div { class: "bg-gray-900 border-t border-gray-800 p-4 text-center text-sm text-gray-400",
                "Having trouble scanning? "
                ChromelessButton {
                    class: Some("text-blue-400 hover:underline".to_string()),
                    onclick: move |_| on_use_fallback.call(()),
                    "Use test data"
                }
            }
        }
    }
}
