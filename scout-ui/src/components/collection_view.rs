//! Collection tab - pure view with callbacks

use crate::components::helpers::CoverImage;
use crate::components::icons::{MusicIcon, TrashIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton, PaginationControls};
use crate::display_types::label_or_default;
use dioxus::prelude::*;
use scout_common::Collection;
use scout_core::discogs::CollectionItem;

#[component]
pub fn CollectionView(
    collection: ReadStore<Collection<CollectionItem>>,
    on_remove: EventHandler<u64>,
    on_page_change: EventHandler<usize>,
    on_go_to_search: EventHandler<()>,
) -> Element {
    let (total, page, pages, items) = {
        let collection = collection.read();
        (
            collection.len(),
            collection.current_page(),
            collection.total_pages(),
            collection.page_items().to_vec(),
        )
    };

    if total == 0 {
        return rsx! {
            div { class: "text-center py-20 bg-gray-900/50 rounded-2xl border border-gray-800 border-dashed",
                MusicIcon { class: "w-16 h-16 mx-auto text-gray-700 mb-4" }
                p { class: "text-gray-400 text-lg", "Your collection is still empty." }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Medium,
                    class: Some("mt-4 text-blue-400".to_string()),
                    onclick: move |_| on_go_to_search.call(()),
                    "Go to search"
                }
            }
        };
    }

    rsx! {
        div { class: "space-y-6",
            div { class: "flex justify-between items-center",
                h2 { class: "text-2xl font-bold", "My albums" }
                span { class: "text-gray-400", "{total} total" }
            }
            div { class: "bg-gray-900 border border-gray-800 rounded-xl overflow-hidden divide-y divide-gray-800",
                for item in items {
                    CollectionRow {
                        key: "{item.id()}",
                        item: item.clone(),
                        on_remove: move |id| on_remove.call(id),
                    }
                }
            }
            PaginationControls {
                current: page as u32,
                total: pages as u32,
                on_page_change: move |p: u32| on_page_change.call(p as usize),
            }
        }
    }
}

#[component]
fn CollectionRow(item: CollectionItem, on_remove: EventHandler<u64>) -> Element {
    let id = item.id();
    let title = item.title().to_string();
    let year = item.year().unwrap_or_default().to_string();
    let label = label_or_default(item.label_line()).to_string();
    let thumb = item.thumbnail().map(str::to_string);

    rsx! {
        div { class: "p-4 flex items-center gap-4 hover:bg-gray-800/50 transition-colors group",
            div { class: "w-16 h-16 flex-shrink-0 rounded overflow-hidden",
                CoverImage {
                    src: thumb,
                    alt: title.clone(),
                    class: "w-16 h-16 object-cover",
                    icon_class: "w-6 h-6",
                }
            }
            div { class: "flex-1 min-w-0",
                h4 { class: "font-medium text-white truncate", "{title}" }
                div { class: "text-sm text-gray-400 flex gap-2",
                    span { "{year}" }
                    span { "\u{2022}" }
                    span { class: "truncate", "{label}" }
                }
            }
            ChromelessButton {
                class: Some("p-2 text-gray-500 hover:text-red-400 hover:bg-red-900/20 rounded-lg transition-colors opacity-0 group-hover:opacity-100 focus:opacity-100".to_string()),
                title: Some("Remove".to_string()),
                aria_label: Some("Remove".to_string()),
                onclick: move |_| on_remove.call(id),
                TrashIcon { class: "w-5 h-5" }
            }
        }
    }
}
