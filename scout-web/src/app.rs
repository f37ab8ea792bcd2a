//! Root component and page layout

use crate::app_service::{use_app, AppService};
use crate::scanner::ScannerKeyBindings;
use crate::{MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use scout_common::is_insecure_origin;
use scout_core::config::ScoutConfig;
use scout_core::discogs::CollectionItem;
use scout_core::notice::Notice;
use scout_ui::stores::{ActiveTab, AppStateStoreExt, UiStateStoreExt};
use scout_ui::{
    CollectionView, HeaderView, ReleaseDetailModal, ScannerOverlayView, SearchView, ToastView,
};
use tracing::{debug, error};

fn load_config() -> ScoutConfig {
    match ScoutConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid build configuration, using defaults: {}", e);
            ScoutConfig::default()
        }
    }
}

fn page_is_insecure() -> bool {
    let Some(location) = web_sys_x::window().map(|w| w.location()) else {
        return false;
    };
    let protocol = location.protocol().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    is_insecure_origin(&protocol, &hostname)
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    // Owns the Store; created once for the lifetime of the page
    let app_service = use_hook(|| AppService::new(load_config(), page_is_insecure()));

    use_context_provider(|| app_service.clone());

    // Home listing whenever a credential becomes active or changes
    let credentials = app_service.state.credentials();
    let home = app_service.clone();
    use_effect(move || {
        let active = credentials.read().is_active();
        if active {
            home.load_home();
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-950 text-gray-100 font-sans", MainContent {} }
        ScannerKeyBindings {}
    }
}

#[component]
fn MainContent() -> Element {
    let app = use_app();
    let state = app.state;
    let active_tab = *state.ui().active_tab().read();
    let notice = state.ui().notice().read().clone();
    let toast = state.ui().toast().read().clone();
    let collection_count = state.collection().read().len();

    let header_app = app.clone();
    let demo_app = app.clone();
    let reset_app = app.clone();
    let tab_app = app.clone();

    rsx! {
        HeaderView {
            credentials: state.credentials(),
            active_tab,
            collection_count,
            on_token_input: move |token| header_app.set_token(token),
            on_enable_demo: move |_| demo_app.enable_demo(),
            on_reset: move |_| reset_app.reset_credentials(),
            on_tab_select: move |tab| tab_app.select_tab(tab),
        }
        main { class: "max-w-7xl mx-auto px-4 py-8",
            {
                match active_tab {
                    ActiveTab::Search => rsx! {
                        SearchTab { notice }
                    },
                    ActiveTab::Collection => rsx! {
                        CollectionTab {}
                    },
                }
            }
        }
        DetailModal {}
        ScannerOverlay {}
        if let Some(toast) = toast {
            ToastView {
                key: "{toast.id}",
                message: toast.message,
                on_dismiss: move |_| app.dismiss_toast(),
            }
        }
    }
}

#[component]
fn SearchTab(notice: Option<Notice>) -> Element {
    let app = use_app();
    let query_app = app.clone();
    let mode_app = app.clone();
    let submit_app = app.clone();
    let scanner_app = app.clone();
    let detail_app = app.clone();
    let page_app = app.clone();

    rsx! {
        SearchView {
            state: app.state.search(),
            notice,
            on_query_input: move |query| query_app.set_query(query),
            on_mode_select: move |mode| mode_app.set_mode(mode),
            on_submit: move |_| submit_app.submit_search(),
            on_open_scanner: move |_| scanner_app.open_scanner(),
            on_result_click: move |result| detail_app.fetch_details(result),
            on_page_change: move |page| page_app.change_page(page),
        }
    }
}

#[component]
fn CollectionTab() -> Element {
    let app = use_app();
    let remove_app = app.clone();
    let page_app = app.clone();
    let tab_app = app.clone();

    rsx! {
        CollectionView {
            collection: app.state.collection(),
            on_remove: move |id| remove_app.remove_from_collection(id),
            on_page_change: move |page| page_app.set_collection_page(page),
            on_go_to_search: move |_| tab_app.select_tab(ActiveTab::Search),
        }
    }
}

#[component]
fn DetailModal() -> Element {
    let app = use_app();
    let close_app = app.clone();
    let add_app = app.clone();

    rsx! {
        ReleaseDetailModal {
            state: app.state.detail(),
            on_close: move |_| close_app.close_details(),
            on_add: move |release| add_app.add_to_collection(CollectionItem::from(release)),
        }
    }
}

#[component]
fn ScannerOverlay() -> Element {
    let app = use_app();
    let close_app = app.clone();
    let fallback_app = app.clone();

    rsx! {
        ScannerOverlayView {
            state: app.state.scanner(),
            on_close: move |_| close_app.close_scanner(),
            on_use_fallback: move |_| fallback_app.use_fallback_barcode(),
        }
    }
}
