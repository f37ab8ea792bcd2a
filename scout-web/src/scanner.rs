//! Barcode scanner flow: permission check, decoder load, decode loop
//!
//! Every step reports back with the session token it was started for, so a
//! step that finishes after the overlay closed changes nothing.

use crate::app_service::{use_app, AppService};
use crate::camera;
use crate::decoder::{self, DecoderSession};
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use scout_common::{LateDecoder, ScanSession, ScannerEvent};
use scout_ui::stores::{AppStateStoreExt, ScannerStateStoreExt};
use scout_ui::wasm_utils::DocumentKeyListener;
use scout_ui::SCANNER_VIEWPORT_ID;
use tracing::debug;

/// Drive one opened overlay until it closes.
pub async fn run_session(app: AppService, session: ScanSession) {
    let permission = match camera::check_permission().await {
        Ok(()) => ScannerEvent::PermissionGranted,
        Err(e) => ScannerEvent::PermissionFailed(e),
    };
    app.scanner_event(session, permission);
    let failed = app.state.scanner().scanner().read().phase().error().is_some();
    if failed || !app.is_current_session(session) {
        return;
    }

    if let Err(e) = decoder::ensure_loaded(&app.config.decoder_script_url).await {
        app.scanner_event(session, ScannerEvent::DecoderFailed(e));
        return;
    }
    if !app.is_current_session(session) {
        debug!("Scanner closed while the decoder loaded");
        return;
    }

    let (codes_tx, mut codes_rx) = mpsc::unbounded();
    let decoder = match DecoderSession::start(SCANNER_VIEWPORT_ID, codes_tx).await {
        Ok(decoder) => decoder,
        Err(e) => {
            app.scanner_event(session, ScannerEvent::DecoderFailed(e));
            return;
        }
    };
    match app.scanner_event(session, ScannerEvent::DecoderStarted).late_decoder {
        Some(LateDecoder::Stop) => {
            debug!("Scanner closed during decoder init, stopping it");
            drop(decoder);
            return;
        }
        Some(LateDecoder::Detach) => {
            debug!("Scanner reopened during decoder init, detaching old listener");
            decoder.detach();
            return;
        }
        None => {}
    }
    app.keep_decoder(decoder);

    // Ends when the decoder is dropped, which drops the sender.
    while let Some(code) = codes_rx.next().await {
        if !app.accept_barcode(session, code) {
            break;
        }
    }
}

/// Closes the scanner overlay on Escape while it is open.
#[component]
pub fn ScannerKeyBindings() -> Element {
    let app = use_app();
    let scanner = app.state.scanner().scanner();
    let is_open = use_memo(move || scanner.read().is_open());
    let mut listener = use_signal(|| None::<DocumentKeyListener>);

    use_effect(move || {
        if !is_open() {
            listener.set(None);
            return;
        }
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };
        let app = app.clone();
        listener.set(Some(DocumentKeyListener::new(document, "Escape", move || {
            app.close_scanner()
        })));
    });

    rsx! {}
}
