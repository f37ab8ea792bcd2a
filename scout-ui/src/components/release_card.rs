//! Result grid card - pure view with callbacks

use crate::components::helpers::CoverImage;
use dioxus::prelude::*;
use scout_core::discogs::SearchResult;

/// One search result. Clicking it asks for the release detail.
#[component]
pub fn ReleaseCard(result: SearchResult, on_click: EventHandler<SearchResult>) -> Element {
    let thumb = result.thumbnail().map(str::to_string);
    let year = result.year.clone().unwrap_or_else(|| "N/A".to_string());
    let label = result.first_label().unwrap_or_default().to_string();
    let title = result.title.clone();

    rsx! {
        div {
            class: "group bg-gray-900 border border-gray-800 rounded-xl overflow-hidden hover:border-blue-500/50 hover:shadow-lg hover:shadow-blue-900/20 transition-all cursor-pointer flex flex-col",
            "data-testid": "release-card",
            onclick: move |_| on_click.call(result.clone()),
            div { class: "aspect-square bg-gray-800 relative overflow-hidden",
                CoverImage {
                    src: thumb,
                    alt: title.clone(),
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-500",
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity flex items-end p-3",
                    span { class: "text-xs font-bold text-white bg-blue-600 px-2 py-1 rounded",
                        "Details"
                    }
                }
            }
            div { class: "p-4 flex-1 flex flex-col",
                h3 {
                    class: "font-medium text-gray-200 line-clamp-2 mb-1 group-hover:text-blue-400 transition-colors",
                    title: "{title}",
                    "{title}"
                }
                div { class: "mt-auto text-xs text-gray-500 flex justify-between items-center",
                    span { "{year}" }
                    span { class: "truncate max-w-[50%]", "{label}" }
                }
            }
        }
    }
}
