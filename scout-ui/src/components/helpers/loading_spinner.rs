//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Spinner with an optional caption
#[component]
pub fn LoadingSpinner(
    #[props(default)] message: Option<String>,
    #[props(default = "w-8 h-8 animate-spin")] icon_class: &'static str,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-2 text-white",
            LoaderIcon { class: icon_class }
            if let Some(message) = message {
                span { class: "font-medium", "{message}" }
            }
        }
    }
}
