//! QuaggaJS barcode decoder bindings
//!
//! The library is injected on first use. A [`DecoderSession`] owns the
//! `onDetected` callback; dropping it detaches the callback and stops the
//! decoder, which releases the camera.

use crate::camera::{error_message, error_name};
use futures::channel::mpsc::UnboundedSender;
use scout_common::ScannerError;
use tracing::{debug, info, warn};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

const QUAGGA_GLOBAL: &str = "Quagga";

fn window() -> Result<web_sys_x::Window, JsValue> {
    web_sys_x::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn quagga() -> Option<JsValue> {
    let window = web_sys_x::window()?;
    let quagga = js_sys_x::Reflect::get(&window, &QUAGGA_GLOBAL.into()).ok()?;
    (!quagga.is_undefined() && !quagga.is_null()).then_some(quagga)
}

fn method(target: &JsValue, name: &str) -> Result<js_sys_x::Function, JsValue> {
    js_sys_x::Reflect::get(target, &name.into())?
        .dyn_into::<js_sys_x::Function>()
        .map_err(|_| JsValue::from_str(&format!("{} is not a function", name)))
}

async fn inject_script(url: &str) -> Result<(), JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;

    let script = document
        .create_element("script")?
        .dyn_into::<web_sys_x::HtmlScriptElement>()?;
    script.set_src(url);
    script.set_async(true);

    let loaded = js_sys_x::Promise::new(&mut |resolve, reject| {
        let _ = js_sys_x::Reflect::set(&script, &"onload".into(), &resolve);
        let _ = js_sys_x::Reflect::set(&script, &"onerror".into(), &reject);
    });
    head.append_child(&script)?;
    wasm_bindgen_futures_x::JsFuture::from(loaded).await?;
    Ok(())
}

/// Make sure `window.Quagga` exists, loading it from `url` if needed.
pub async fn ensure_loaded(url: &str) -> Result<(), ScannerError> {
    if quagga().is_some() {
        return Ok(());
    }
    info!("Loading barcode decoder from {}", url);
    if let Err(e) = inject_script(url).await {
        warn!("Decoder script failed to load: {:?}", e);
        return Err(ScannerError::ScannerUnavailable);
    }
    if quagga().is_none() {
        warn!("Decoder script loaded but {} is missing", QUAGGA_GLOBAL);
        return Err(ScannerError::ScannerUnavailable);
    }
    Ok(())
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys_x::Reflect::set(target, &key.into(), value).map(|_| ())
}

fn decoder_config(target: &web_sys_x::Element) -> Result<js_sys_x::Object, JsValue> {
    let constraints = js_sys_x::Object::new();
    set(&constraints, "facingMode", &"environment".into())?;

    let input_stream = js_sys_x::Object::new();
    set(&input_stream, "name", &"Live".into())?;
    set(&input_stream, "type", &"LiveStream".into())?;
    set(&input_stream, "target", target)?;
    set(&input_stream, "constraints", &constraints)?;

    let locator = js_sys_x::Object::new();
    set(&locator, "patchSize", &"medium".into())?;
    set(&locator, "halfSample", &JsValue::TRUE)?;

    let readers = js_sys_x::Array::of2(&"ean_reader".into(), &"upc_reader".into());
    let decoder = js_sys_x::Object::new();
    set(&decoder, "readers", &readers)?;

    let config = js_sys_x::Object::new();
    set(&config, "inputStream", &input_stream)?;
    set(&config, "locator", &locator)?;
    set(&config, "numOfWorkers", &JsValue::from_f64(2.0))?;
    set(&config, "decoder", &decoder)?;
    set(&config, "locate", &JsValue::TRUE)?;
    Ok(config)
}

/// `Quagga.init(config, callback)` as a future.
async fn init(quagga: &JsValue, config: &js_sys_x::Object) -> Result<(), JsValue> {
    let init = method(quagga, "init")?;
    let mut call_error = None;
    let done = js_sys_x::Promise::new(&mut |resolve, reject| {
        let callback = Closure::once_into_js(move |err: JsValue| {
            if err.is_undefined() || err.is_null() {
                let _ = resolve.call0(&JsValue::NULL);
            } else {
                let _ = reject.call1(&JsValue::NULL, &err);
            }
        });
        if let Err(e) = init.call2(quagga, config, &callback) {
            call_error = Some(e);
        }
    });
    if let Some(e) = call_error {
        return Err(e);
    }
    wasm_bindgen_futures_x::JsFuture::from(done).await?;
    Ok(())
}

fn detected_code(data: &JsValue) -> Option<String> {
    let result = js_sys_x::Reflect::get(data, &"codeResult".into()).ok()?;
    js_sys_x::Reflect::get(&result, &"code".into())
        .ok()?
        .as_string()
}

/// A running decoder. Detected codes go to the channel it was started with.
pub struct DecoderSession {
    quagga: JsValue,
    on_detected: Closure<dyn FnMut(JsValue)>,
    /// `Quagga.stop()` is global; a session that another one superseded
    /// must not call it.
    stop_on_drop: bool,
}

impl DecoderSession {
    /// Start decoding the camera stream into the element with `target_id`.
    pub async fn start(
        target_id: &str,
        codes: UnboundedSender<String>,
    ) -> Result<Self, ScannerError> {
        let quagga = quagga().ok_or(ScannerError::ScannerUnavailable)?;
        let target = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(target_id))
            .ok_or_else(|| {
                ScannerError::from_decoder_init(None, Some("scanner viewport is missing"))
            })?;

        let config = decoder_config(&target).map_err(|e| {
            ScannerError::from_decoder_init(error_name(&e).as_deref(), error_message(&e).as_deref())
        })?;

        init(&quagga, &config).await.map_err(|e| {
            let name = error_name(&e);
            let message = error_message(&e).or_else(|| e.as_string());
            warn!("Decoder init failed: {:?} {:?}", name, message);
            ScannerError::from_decoder_init(name.as_deref(), message.as_deref())
        })?;

        let on_detected: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |data: JsValue| {
            if let Some(code) = detected_code(&data) {
                let _ = codes.unbounded_send(code);
            }
        }));

        let started = method(&quagga, "onDetected")
            .and_then(|f| f.call1(&quagga, on_detected.as_ref()))
            .and_then(|_| method(&quagga, "start"))
            .and_then(|f| f.call0(&quagga));
        let session = Self {
            quagga,
            on_detected,
            stop_on_drop: true,
        };
        if let Err(e) = started {
            // Dropping the session stops whatever did start.
            return Err(ScannerError::from_decoder_init(
                error_name(&e).as_deref(),
                error_message(&e).as_deref(),
            ));
        }

        debug!("Decoder started");
        Ok(session)
    }

    /// Remove this session's detection listener but keep the decoder
    /// running for whichever session owns it now.
    pub fn detach(mut self) {
        self.stop_on_drop = false;
    }
}

impl Drop for DecoderSession {
    fn drop(&mut self) {
        if let Ok(off) = method(&self.quagga, "offDetected") {
            let _ = off.call1(&self.quagga, self.on_detected.as_ref());
        }
        if !self.stop_on_drop {
            debug!("Decoder listener detached");
            return;
        }
        if let Ok(stop) = method(&self.quagga, "stop") {
            let _ = stop.call0(&self.quagga);
        }
        debug!("Decoder stopped");
    }
}
