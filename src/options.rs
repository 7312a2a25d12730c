//! JS options object → [`MagnetOptions`].
//!
//! Keys that are missing, `undefined` or `null` are left unspecified, so an
//! explicit `{ distance: undefined }` never hides a `data-distance` value.

use std::rc::Rc;

use magnet_core::{max_offset_from_js, DistanceMetric, Hook, MagnetOptions, MagneticSample};
use wasm_bindgen::{JsCast, JsValue};

use crate::constants::*;

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn number(obj: &JsValue, key: &str) -> Option<f32> {
    get(obj, key)?.as_f64().map(|v| v as f32)
}

fn bound(obj: &JsValue, key: &str) -> Option<f32> {
    get(obj, key)?.as_f64().and_then(max_offset_from_js)
}

pub fn sample_to_js(sample: &MagneticSample) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in [
        (SAMPLE_DELTA_X, sample.delta_x),
        (SAMPLE_DELTA_Y, sample.delta_y),
        (SAMPLE_DISTANCE, sample.distance),
    ] {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_f64(value as f64));
    }
    obj.into()
}

fn hook(obj: &JsValue, key: &'static str) -> Option<Hook> {
    let f: js_sys::Function = get(obj, key)?.dyn_into().ok()?;
    Some(Rc::new(move |sample: &MagneticSample| {
        if let Err(e) = f.call1(&JsValue::NULL, &sample_to_js(sample)) {
            log::error!("[magnet] {} threw: {:?}", key, e);
        }
    }))
}

pub fn options_from_js(value: &JsValue) -> MagnetOptions {
    let mut opts = MagnetOptions::new();
    if !value.is_object() {
        return opts;
    }
    opts.active_class = get(value, OPT_ACTIVE_CLASS).and_then(|v| v.as_string());
    opts.attraction = number(value, OPT_ATTRACTION);
    opts.trigger_distance = number(value, OPT_DISTANCE);
    opts.smoothing = number(value, OPT_FRACTION).or_else(|| number(value, OPT_SPEED));
    opts.disable_on_touch = get(value, OPT_DISABLE_ON_TOUCH).and_then(|v| v.as_bool());
    opts.max_offset_x = bound(value, OPT_MAX_OFFSET_X);
    opts.max_offset_y = bound(value, OPT_MAX_OFFSET_Y);
    opts.metric = get(value, OPT_METRIC)
        .and_then(|v| v.as_string())
        .and_then(|name| DistanceMetric::from_name(&name));
    opts.hooks.on_enter = hook(value, OPT_ON_ENTER);
    opts.hooks.on_exit = hook(value, OPT_ON_EXIT);
    opts.hooks.on_update = hook(value, OPT_ON_UPDATE);
    opts
}
