//! Camera permission check
//!
//! Opens the rear camera once to surface a specific permission error before
//! the decoder starts, then stops every track of the trial stream so the
//! decoder can claim the device.

use scout_common::ScannerError;
use tracing::{debug, warn};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// `name` of a DOM exception, if it has one.
pub(crate) fn error_name(error: &JsValue) -> Option<String> {
    js_sys_x::Reflect::get(error, &"name".into())
        .ok()
        .and_then(|n| n.as_string())
}

pub(crate) fn error_message(error: &JsValue) -> Option<String> {
    js_sys_x::Reflect::get(error, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
}

fn media_devices() -> Option<web_sys_x::MediaDevices> {
    let navigator = web_sys_x::window()?.navigator();
    let devices = js_sys_x::Reflect::get(&navigator, &"mediaDevices".into()).ok()?;
    if devices.is_undefined() || devices.is_null() {
        return None;
    }
    Some(devices.unchecked_into())
}

fn rear_camera_constraints() -> Result<web_sys_x::MediaStreamConstraints, JsValue> {
    let video = js_sys_x::Object::new();
    js_sys_x::Reflect::set(&video, &"facingMode".into(), &"environment".into())?;
    let constraints = js_sys_x::Object::new();
    js_sys_x::Reflect::set(&constraints, &"video".into(), &video)?;
    Ok(constraints.unchecked_into())
}

async fn open_trial_stream(
    devices: &web_sys_x::MediaDevices,
) -> Result<web_sys_x::MediaStream, JsValue> {
    let constraints = rear_camera_constraints()?;
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream = wasm_bindgen_futures_x::JsFuture::from(promise).await?;
    stream.dyn_into::<web_sys_x::MediaStream>()
}

/// Ask for camera access and release the camera right away.
pub async fn check_permission() -> Result<(), ScannerError> {
    let Some(devices) = media_devices() else {
        warn!("navigator.mediaDevices is not available");
        return Err(ScannerError::CameraUnsupported);
    };

    let stream = open_trial_stream(&devices).await.map_err(|e| {
        let name = error_name(&e).unwrap_or_default();
        warn!("Camera permission check failed: {}", name);
        ScannerError::from_permission_check(&name)
    })?;

    for track in stream.get_tracks().iter() {
        track.unchecked_into::<web_sys_x::MediaStreamTrack>().stop();
    }
    debug!("Camera permission granted, trial stream released");
    Ok(())
}
