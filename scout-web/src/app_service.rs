//! AppService - owns the reactive state and runs every user action
//!
//! Views never call the catalog or the browser directly. They read
//! `app.state` through lenses and call the action methods here, which
//! update the Store and spawn the async work.

use crate::decoder::DecoderSession;
use crate::scanner;
use dioxus::prelude::*;
use scout_common::{Collection, ScanEffect, ScanSession, ScannerEvent, SearchMode};
use scout_core::catalog::Catalog;
use scout_core::config::ScoutConfig;
use scout_core::discogs::{CollectionItem, SearchResult};
use scout_core::search::{SearchOrigin, SearchRequest};
use scout_core::util::sleep_ms;
use scout_ui::stores::{
    ActiveTab, AddFollowUp, AppState, AppStateStoreExt, CredentialsState,
    CredentialsStateStoreExt, ScannerStateStoreExt, SearchStateStoreExt, UiStateStoreExt,
};
use tracing::{debug, info};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

const TOAST_DURATION_MS: u64 = 3000;

/// Created inside the component tree because `Store<AppState>` is not
/// `Send`. Access via `use_app()`.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state
    pub state: Store<AppState>,
    pub config: ScoutConfig,
    /// Running barcode decoder. Dropping it releases the camera.
    decoder: Signal<Option<DecoderSession>>,
}

impl AppService {
    pub fn new(config: ScoutConfig, insecure_origin: bool) -> Self {
        let mut initial = AppState::default();
        initial.credentials = CredentialsState {
            token: config.initial_token.clone(),
            demo_mode: config.start_in_demo,
        };
        initial.collection = Collection::with_page_size(config.collection_page_size);
        initial.scanner.insecure_origin = insecure_origin;

        Self {
            state: Store::new(initial),
            config,
            decoder: Signal::new(None),
        }
    }

    fn catalog(&self) -> Option<Catalog> {
        let credentials = self.state.credentials().read().clone();
        Catalog::from_credentials(&credentials.token, credentials.demo_mode, &self.config)
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn set_query(&self, query: String) {
        self.state.search().query().set(query);
    }

    pub fn set_mode(&self, mode: SearchMode) {
        self.state.search().mode().set(mode);
    }

    /// Search for the text in the search box, from page 1
    pub fn submit_search(&self) {
        let (query, mode) = {
            let search = self.state.search();
            let query = search.query().read().clone();
            let mode = *search.mode().read();
            (query, mode)
        };
        self.run_search(&query, mode, 1, SearchOrigin::User);
    }

    /// Initial load when a credential becomes active: the text already in
    /// the search box, or the home listing when it is empty.
    pub fn load_home(&self) {
        // peek: the credentials effect must not rerun on every keystroke
        let query = self.state.search().query().peek().clone();
        self.run_search(&query, SearchMode::Text, 1, SearchOrigin::Initial);
    }

    /// Re-run the current query at `page`. Out-of-range pages are ignored.
    pub fn change_page(&self, page: u32) {
        let request = self.state.search().session().read().page_request(page);
        let Some(request) = request else {
            debug!("Ignoring page change to {}", page);
            return;
        };
        self.execute_search(request);
        scroll_to_top();
    }

    pub fn run_search(&self, query: &str, mode: SearchMode, page: u32, origin: SearchOrigin) {
        let Some(request) = SearchRequest::plan(query, mode, page, origin) else {
            debug!("Empty query, nothing to search");
            return;
        };
        self.execute_search(request.with_per_page(self.config.results_per_page));
    }

    fn execute_search(&self, request: SearchRequest) {
        let Some(catalog) = self.catalog() else {
            debug!("No token and demo mode off, search skipped");
            return;
        };

        let mut session = self.state.search().session();
        let mut ui = self.state.ui();
        let ticket = session.with_mut(|s| s.begin(request.clone()));
        ui.with_mut(|u| u.search_started());
        info!(
            "Searching {:?} page {} ({})",
            request.query(),
            request.page,
            if catalog.is_demo() { "demo" } else { "discogs" }
        );

        spawn(async move {
            let outcome = catalog.search(&request).await;
            let completion = session.with_mut(|s| s.finish(ticket, outcome));
            ui.with_mut(|u| u.search_finished(completion));
        });
    }

    // =========================================================================
    // Release detail
    // =========================================================================

    /// Fetch the full release behind a result card and open the modal
    pub fn fetch_details(&self, result: SearchResult) {
        let Some(catalog) = self.catalog() else {
            return;
        };

        let mut detail = self.state.detail();
        let mut ui = self.state.ui();
        let ticket = detail.with_mut(|d| d.begin());
        debug!("Fetching release {}", result.id);

        spawn(async move {
            let outcome = catalog
                .release(result.id, result.resource_url.as_deref())
                .await;
            let completion = detail.with_mut(|d| d.finish(ticket, outcome));
            ui.with_mut(|u| u.detail_finished(completion));
        });
    }

    pub fn close_details(&self) {
        self.state.detail().with_mut(|d| {
            d.close();
        });
    }

    // =========================================================================
    // Collection
    // =========================================================================

    pub fn add_to_collection(&self, item: CollectionItem) {
        let id = item.id();
        let outcome = self.state.collection().with_mut(|c| c.add(item));
        match self.state.ui().with_mut(|u| u.collection_add(outcome)) {
            AddFollowUp::CloseDetails => {
                info!("Added release {} to the collection", id);
                self.close_details();
            }
            AddFollowUp::HideToastLater(toast) => {
                debug!("Release {} already in the collection", id);
                self.hide_toast_later(toast);
            }
        }
    }

    pub fn remove_from_collection(&self, id: u64) {
        if self.state.collection().with_mut(|c| c.remove(id)) {
            info!("Removed release {} from the collection", id);
        }
    }

    pub fn set_collection_page(&self, page: usize) {
        if !self.state.collection().with_mut(|c| c.set_page(page)) {
            debug!("Ignoring collection page {}", page);
        }
    }

    // =========================================================================
    // Credentials and navigation
    // =========================================================================

    pub fn set_token(&self, token: String) {
        self.state.credentials().token().set(token);
    }

    pub fn enable_demo(&self) {
        info!("Demo mode enabled");
        self.state.credentials().demo_mode().set(true);
    }

    /// Forget the token and leave demo mode. A search in flight is dropped.
    pub fn reset_credentials(&self) {
        info!("Credentials reset");
        self.state.credentials().set(CredentialsState::default());
        self.state.search().session().with_mut(|s| s.cancel());
    }

    pub fn select_tab(&self, tab: ActiveTab) {
        self.state.ui().active_tab().set(tab);
    }

    // =========================================================================
    // Toast
    // =========================================================================

    fn hide_toast_later(&self, id: u64) {
        let mut ui = self.state.ui();
        spawn(async move {
            sleep_ms(TOAST_DURATION_MS).await;
            ui.with_mut(|u| u.hide_toast(id));
        });
    }

    pub fn dismiss_toast(&self) {
        self.state.ui().toast().set(None);
    }

    // =========================================================================
    // Barcode scanner
    // =========================================================================

    /// Open the overlay and start the permission / decoder flow
    pub fn open_scanner(&self) {
        let Some(session) = self.state.scanner().scanner().with_mut(|s| s.open()) else {
            return;
        };
        info!("Opening barcode scanner");
        let app = self.clone();
        spawn(async move {
            scanner::run_session(app, session).await;
        });
    }

    pub fn close_scanner(&self) {
        let effect = self.state.scanner().scanner().with_mut(|s| s.close());
        if effect.stop_decoder {
            self.stop_decoder();
        }
    }

    /// Close the overlay and search for the configured test barcode
    pub fn use_fallback_barcode(&self) {
        let effect = self.state.scanner().scanner().with_mut(|s| s.use_fallback());
        if effect.stop_decoder {
            self.stop_decoder();
        }
        if effect.search.is_some() {
            let code = self.config.fallback_barcode.clone();
            info!("Using test barcode {}", code);
            self.search_barcode(code);
        }
    }

    /// Feed a decoded code into the scanner. Returns whether the session is
    /// still scanning afterwards.
    pub fn accept_barcode(&self, session: ScanSession, code: String) -> bool {
        let effect = self
            .state
            .scanner()
            .scanner()
            .with_mut(|s| s.apply(session, ScannerEvent::CodeDetected(code.clone())));
        if effect.stop_decoder {
            self.stop_decoder();
        }
        match effect.search {
            Some(code) => {
                info!("Barcode detected: {}", code);
                self.search_barcode(code);
                false
            }
            None => {
                debug!("Ignoring short code {:?}", code);
                self.state.scanner().scanner().read().session() == Some(session)
            }
        }
    }

    /// Report a flow step for `session`. Only the open session's decoder
    /// is ever stopped here; a decoder started for a stale session is left
    /// to the caller through `late_decoder`.
    pub(crate) fn scanner_event(&self, session: ScanSession, event: ScannerEvent) -> ScanEffect {
        let effect = self
            .state
            .scanner()
            .scanner()
            .with_mut(|s| s.apply(session, event));
        if effect.stop_decoder {
            self.stop_decoder();
        }
        effect
    }

    pub(crate) fn is_current_session(&self, session: ScanSession) -> bool {
        self.state.scanner().scanner().read().session() == Some(session)
    }

    pub(crate) fn keep_decoder(&self, decoder: DecoderSession) {
        let mut slot = self.decoder;
        slot.set(Some(decoder));
    }

    fn stop_decoder(&self) {
        let mut slot = self.decoder;
        slot.set(None);
    }

    fn search_barcode(&self, code: String) {
        self.state.search().with_mut(|s| s.use_barcode(&code));
        self.run_search(&code, SearchMode::Barcode, 1, SearchOrigin::User);
    }
}

/// Smooth-scroll the page back to the top, as after a page change.
fn scroll_to_top() {
    let Some(window) = web_sys_x::window() else {
        return;
    };
    let options = js_sys_x::Object::new();
    let _ = js_sys_x::Reflect::set(&options, &"top".into(), &JsValue::from_f64(0.0));
    let _ = js_sys_x::Reflect::set(&options, &"behavior".into(), &"smooth".into());
    if let Ok(scroll) = js_sys_x::Reflect::get(&window, &"scrollTo".into()) {
        if let Some(func) = scroll.dyn_ref::<js_sys_x::Function>() {
            let _ = func.call1(&window, &options);
        }
    }
}

pub fn use_app() -> AppService {
    use_context::<AppService>()
}
