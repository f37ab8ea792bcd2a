//! Previous / next pager

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use scout_common::Pager;

/// Renders nothing for a single page.
#[component]
pub fn PaginationControls(current: u32, total: u32, on_page_change: EventHandler<u32>) -> Element {
    let pager = Pager::new(current, total);
    if !pager.is_visible() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "flex justify-center items-center gap-4 mt-8 py-4 border-t border-gray-800",
            aria_label: "Pagination",
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Medium,
                disabled: !pager.has_previous(),
                onclick: move |_| {
                    if let Some(page) = pager.previous() {
                        on_page_change.call(page);
                    }
                },
                ChevronLeftIcon {}
                "Previous"
            }
            span { class: "text-sm text-gray-400",
                "Page "
                span { class: "text-white font-bold", "{current}" }
                " of {total}"
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Medium,
                disabled: !pager.has_next(),
                onclick: move |_| {
                    if let Some(page) = pager.next() {
                        on_page_change.call(page);
                    }
                },
                "Next"
                ChevronRightIcon {}
            }
        }
    }
}
