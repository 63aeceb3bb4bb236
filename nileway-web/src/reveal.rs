//! One-time initialization of the scroll-reveal animation library (AOS).
//!
//! The library arrives via a plain script tag and is treated as opaque: if
//! the global is missing the feature is skipped and the page renders without
//! entrance animations.

/// Entrance animation length.
pub const REVEAL_DURATION_MS: u32 = 800;

/// Elements animate once this many pixels before entering the viewport.
pub const REVEAL_OFFSET_PX: u32 = 50;

#[cfg(target_arch = "wasm32")]
pub fn init_scroll_reveal() {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let global = js_sys::global();
    let Ok(aos) = Reflect::get(&global, &JsValue::from_str("AOS")) else {
        return;
    };
    if aos.is_undefined() || aos.is_null() {
        return;
    }
    let Ok(init) = Reflect::get(&aos, &JsValue::from_str("init")) else {
        return;
    };
    let Some(init) = init.dyn_ref::<Function>() else {
        return;
    };

    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from(REVEAL_DURATION_MS),
    );
    let _ = Reflect::set(&options, &JsValue::from_str("once"), &JsValue::TRUE);
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("offset"),
        &JsValue::from(REVEAL_OFFSET_PX),
    );

    if let Err(err) = init.call1(&aos, &options) {
        log::warn!(
            "scroll-reveal init failed: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_scroll_reveal() {}
