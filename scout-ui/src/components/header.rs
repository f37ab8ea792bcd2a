//! App header: title, credentials and tabs

use crate::components::icons::DiscIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton, TextInput, TextInputSize};
use crate::stores::{ActiveTab, CredentialsState};
use dioxus::prelude::*;

#[component]
pub fn HeaderView(
    credentials: ReadStore<CredentialsState>,
    active_tab: ActiveTab,
    collection_count: usize,
    on_token_input: EventHandler<String>,
    on_enable_demo: EventHandler<()>,
    on_reset: EventHandler<()>,
    on_tab_select: EventHandler<ActiveTab>,
) -> Element {
    let (active, demo_mode) = {
        let credentials = credentials.read();
        (credentials.is_active(), credentials.demo_mode)
    };
    let token = credentials.read().token.clone();

    rsx! {
        header { class: "bg-gray-900 border-b border-gray-800 sticky top-0 z-30 shadow-lg",
            div { class: "max-w-7xl mx-auto px-4 py-4",
                div { class: "flex flex-col md:flex-row md:items-center justify-between gap-4",
                    div { class: "flex items-center gap-2",
                        DiscIcon { class: "w-8 h-8 text-blue-500" }
                        h1 { class: "text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent",
                            "Vinyl Scout"
                        }
                    }
                    if active {
                        div { class: "flex items-center gap-3 text-sm",
                            span {
                                class: if demo_mode { "px-2 py-1 rounded bg-amber-900/40 text-amber-300 border border-amber-800" } else { "px-2 py-1 rounded bg-green-900/40 text-green-300 border border-green-800" },
                                if demo_mode { "Demo mode" } else { "API connected" }
                            }
                            ChromelessButton {
                                class: Some("text-gray-400 hover:text-white underline".to_string()),
                                onclick: move |_| on_reset.call(()),
                                "Reset"
                            }
                        }
                    } else {
                        div { class: "flex items-center gap-2 w-full md:w-auto",
                            TextInput {
                                value: token,
                                on_input: move |v| on_token_input.call(v),
                                size: TextInputSize::Small,
                                placeholder: "Paste Discogs API token...",
                                monospace: true,
                                class: Some("md:w-72".to_string()),
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                size: ButtonSize::Medium,
                                onclick: move |_| on_enable_demo.call(()),
                                "Demo"
                            }
                        }
                    }
                }
                nav { class: "flex gap-6 mt-6 border-b border-gray-800 -mb-4", role: "tablist",
                    TabButton {
                        selected: active_tab == ActiveTab::Search,
                        onclick: move |_| on_tab_select.call(ActiveTab::Search),
                        "Search"
                    }
                    TabButton {
                        selected: active_tab == ActiveTab::Collection,
                        onclick: move |_| on_tab_select.call(ActiveTab::Collection),
                        "My collection"
                        span { class: "bg-gray-800 text-xs px-2 py-0.5 rounded-full", "{collection_count}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(selected: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let state_class = if selected {
        "border-blue-500 text-blue-400"
    } else {
        "border-transparent text-gray-400 hover:text-gray-200"
    };

    rsx! {
        ChromelessButton {
            class: Some(format!("pb-4 px-2 font-medium border-b-2 flex items-center gap-2 transition-colors {state_class}")),
            onclick,
            {children}
        }
    }
}
