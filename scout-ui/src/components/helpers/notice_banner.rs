//! Notice slot above the result grid

use crate::components::icons::InfoIcon;
use dioxus::prelude::*;
use scout_core::notice::Notice;

/// Red for failures, neutral for "no results"
#[component]
pub fn NoticeBanner(notice: Notice) -> Element {
    let class = if notice.is_error() {
        "bg-red-900/30 border-red-800 text-red-200"
    } else {
        "bg-gray-900 border-gray-700 text-gray-300"
    };

    rsx! {
        div {
            class: "p-4 border rounded-lg text-sm flex items-center gap-2 {class}",
            role: "status",
            InfoIcon { class: "w-4 h-4 flex-shrink-0" }
            "{notice}"
        }
    }
}
