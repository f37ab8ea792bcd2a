//! Search tab - pure view with callbacks

use crate::components::helpers::{LoadingSpinner, NoticeBanner};
use crate::components::icons::{BarcodeIcon, CameraIcon, SearchIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, ChromelessButton, PaginationControls, ReleaseCard, Segment,
    SegmentedControl, TextInput, TextInputSize,
};
use crate::display_types::{results_heading, search_placeholder};
use crate::stores::{SearchState, SearchStateStoreExt};
use dioxus::prelude::*;
use scout_common::SearchMode;
use scout_core::discogs::SearchResult;
use scout_core::notice::Notice;

#[component]
pub fn SearchView(
    state: ReadStore<SearchState>,
    notice: Option<Notice>,
    on_query_input: EventHandler<String>,
    on_mode_select: EventHandler<SearchMode>,
    on_submit: EventHandler<()>,
    on_open_scanner: EventHandler<()>,
    on_result_click: EventHandler<SearchResult>,
    on_page_change: EventHandler<u32>,
) -> Element {
    let query = state.query().read().clone();
    let mode = *state.mode().read();
    let session = state.session();
    let loading = session.read().is_loading();
    let results = session.read().results().to_vec();
    let pagination = session.read().pagination();
    let heading = results_heading(session.read().query());

    let segments = vec![
        Segment::new(SearchMode::Text.label(), SearchMode::Text.value()),
        Segment::new(SearchMode::Barcode.label(), SearchMode::Barcode.value()),
    ];

    rsx! {
        div { class: "space-y-6",
            form {
                class: "flex flex-col sm:flex-row gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { class: "relative flex-1",
                    div { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 pointer-events-none",
                        {
                            match mode {
                                SearchMode::Text => rsx! { SearchIcon { class: "w-5 h-5" } },
                                SearchMode::Barcode => rsx! { BarcodeIcon { class: "w-5 h-5" } },
                            }
                        }
                    }
                    TextInput {
                        value: query,
                        on_input: move |v| on_query_input.call(v),
                        size: TextInputSize::Large,
                        placeholder: search_placeholder(mode),
                    }
                    ChromelessButton {
                        class: Some("absolute right-2 top-1/2 -translate-y-1/2 p-1.5 text-gray-400 hover:text-blue-400 hover:bg-gray-800 rounded-md transition-colors".to_string()),
                        title: Some("Open camera scanner".to_string()),
                        aria_label: Some("Open camera scanner".to_string()),
                        onclick: move |_| on_open_scanner.call(()),
                        CameraIcon { class: "w-5 h-5" }
                    }
                }
                SegmentedControl {
                    segments,
                    selected: mode.value(),
                    on_select: move |value: &'static str| on_mode_select.call(SearchMode::from_value(value)),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Large,
                    r#type: "submit",
                    disabled: loading,
                    onclick: move |_| {},
                    if loading {
                        LoadingSpinner { icon_class: "w-5 h-5 animate-spin" }
                    } else {
                        "Search"
                    }
                }
            }

            if let Some(notice) = notice {
                NoticeBanner { notice }
            }

            div {
                div { class: "flex justify-between items-end mb-4",
                    h2 { class: "text-2xl font-bold", "{heading}" }
                    if !loading && pagination.items > 0 {
                        span { class: "text-sm text-gray-500", "{pagination.items} items found" }
                    }
                }

                if loading && results.is_empty() {
                    div { class: "py-16 flex justify-center",
                        LoadingSpinner { message: "Searching...".to_string() }
                    }
                } else {
                    div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4",
                        for result in results {
                            ReleaseCard {
                                key: "{result.id}",
                                result: result.clone(),
                                on_click: move |r| on_result_click.call(r),
                            }
                        }
                    }
                    PaginationControls {
                        current: pagination.page,
                        total: pagination.pages,
                        on_page_change: move |p| on_page_change.call(p),
                    }
                }
            }
        }
    }
}
