//! Release detail modal
//!
//! Open whenever the detail session holds a release. A failed fetch keeps
//! the previous selection, so the modal never shows a half-loaded release.

use crate::components::helpers::{CoverImage, LoadingSpinner};
use crate::components::icons::{PlusIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton, Modal};
use dioxus::prelude::*;
use scout_core::discogs::ReleaseDetail;
use scout_core::session::DetailSession;

#[component]
pub fn ReleaseDetailModal(
    state: ReadStore<DetailSession>,
    on_close: EventHandler<()>,
    on_add: EventHandler<ReleaseDetail>,
) -> Element {
    let is_open_memo = use_memo(move || state.read().selected().is_some());
    let is_open: ReadSignal<bool> = is_open_memo.into();

    let release = state.read().selected().cloned();
    let loading = state.read().is_loading();
    let fetching_first = loading && release.is_none();

    rsx! {
        if fetching_first {
            div { class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60 backdrop-blur-sm",
                LoadingSpinner { message: "Loading details...".to_string() }
            }
        }
        Modal { is_open, on_close,
            if let Some(release) = release {
                ReleaseDetailBody { release, loading, on_close, on_add }
            }
        }
    }
}

#[component]
fn ReleaseDetailBody(
    release: ReleaseDetail,
    loading: bool,
    on_close: EventHandler<()>,
    on_add: EventHandler<ReleaseDetail>,
) -> Element {
    let cover = release.cover_url().or_else(|| release.thumbnail()).map(str::to_string);
    let artist = release.artist_names().unwrap_or_else(|| "Unknown".to_string());
    let year = release.display_year().unwrap_or("Unknown").to_string();
    let title = release.title.clone();
    let notes = release.notes.clone().filter(|n| !n.trim().is_empty());
    let genres = release.genres.clone();
    let tracklist = release.tracklist.clone();

    rsx! {
        div { class: "bg-gray-900 border border-gray-700 rounded-2xl w-full max-h-[90vh] overflow-y-auto shadow-2xl relative",
            div { class: "sticky top-0 bg-gray-900/95 backdrop-blur border-b border-gray-800 p-4 flex justify-between items-center z-10",
                h2 { class: "text-xl font-bold truncate pr-4", "{title}" }
                div { class: "flex items-center gap-2",
                    if loading {
                        LoadingSpinner { icon_class: "w-4 h-4 animate-spin" }
                    }
                    ChromelessButton {
                        class: Some("p-2 hover:bg-gray-800 rounded-full transition-colors".to_string()),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }
            }
            div { class: "p-6 grid md:grid-cols-2 gap-8",
                div { class: "space-y-4",
                    div { class: "aspect-square rounded-lg overflow-hidden bg-gray-800 shadow-lg",
                        CoverImage {
                            src: cover,
                            alt: title.clone(),
                            class: "w-full h-full object-cover",
                            icon_class: "w-16 h-16",
                        }
                    }
                }
                div { class: "space-y-6",
                    div {
                        h3 { class: "text-gray-400 text-sm uppercase tracking-wider mb-1", "Artist" }
                        p { class: "text-lg", "{artist}" }
                    }
                    div {
                        h3 { class: "text-gray-400 text-sm uppercase tracking-wider mb-1", "Year" }
                        p { class: "text-lg", "{year}" }
                    }
                    if !genres.is_empty() {
                        div {
                            h3 { class: "text-gray-400 text-sm uppercase tracking-wider mb-1", "Genres" }
                            div { class: "flex flex-wrap gap-2 mt-1",
                                for genre in genres.iter() {
                                    span { class: "px-2 py-1 bg-gray-800 rounded text-sm text-gray-300 border border-gray-700",
                                        "{genre}"
                                    }
                                }
                            }
                        }
                    }
                    if !tracklist.is_empty() {
                        div {
                            h3 { class: "text-gray-400 text-sm uppercase tracking-wider mb-1", "Tracklist" }
                            ol { class: "text-sm divide-y divide-gray-800",
                                for track in tracklist.iter() {
                                    li { class: "flex gap-3 py-1.5",
                                        span { class: "w-8 text-gray-500 font-mono", "{track.position}" }
                                        span { class: "flex-1 text-gray-200", "{track.title}" }
                                        span { class: "text-gray-500 font-mono", "{track.duration}" }
                                    }
                                }
                            }
                        }
                    }
                    if let Some(notes) = notes {
                        div {
                            h3 { class: "text-gray-400 text-sm uppercase tracking-wider mb-1", "Notes" }
                            p { class: "text-sm text-gray-400 whitespace-pre-line", "{notes}" }
                        }
                    }
                    div { class: "pt-6 border-t border-gray-800",
                        Button {
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Large,
                            class: Some("w-full".to_string()),
                            onclick: move |_| on_add.call(release.clone()),
                            PlusIcon { class: "w-5 h-5" }
                            "Add to collection"
                        }
                    }
                }
            }
        }
    }
}
