#![cfg(target_arch = "wasm32")]
//! Browser bindings for the magnetic hover effect.
//!
//! ```js
//! import init, { Magnetizer } from "magnet-web";
//! await init();
//! const magnets = Magnetizer.init();             // every [data-magnetic]
//! const button = magnets.bind(el, { distance: 80, onEnter: (s) => {} });
//! button.destroy();
//! ```
use std::cell::RefCell;
use std::rc::Rc;

use magnet_core as mc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod options;

use dom::{DomTarget, WebHost};

thread_local! {
    // One registry per page: every JS scope binds through it.
    static REGISTRY: mc::SharedRegistry<DomTarget> = Rc::new(RefCell::new(mc::Registry::default()));
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("magnet-web loaded");
    Ok(())
}

/// Binding scope. All scopes on a page share one registry, so an element is
/// never bound twice no matter which scope binds it.
#[wasm_bindgen]
pub struct Magnetizer {
    inner: mc::Magnetizer<WebHost>,
    auto_bound: RefCell<Vec<mc::MagneticButton<WebHost>>>,
}

#[wasm_bindgen]
impl Magnetizer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Magnetizer, JsValue> {
        let host = WebHost::new().map_err(to_js)?;
        Ok(Self::with_host(host))
    }

    /// Scope discovery to `document` instead of the global one.
    #[wasm_bindgen(js_name = forDocument)]
    pub fn for_document(document: web::Document) -> Result<Magnetizer, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        Ok(Self::with_host(WebHost::from_parts(window, document)))
    }

    /// Create a scope and bind every `[data-magnetic]` element in it. Call
    /// once at startup. The resulting handles are kept by the scope; see
    /// `destroyAll`.
    pub fn init(options: JsValue) -> Result<Magnetizer, JsValue> {
        let m = Self::new()?;
        let bound = m.inner.bind_all(&options::options_from_js(&options));
        m.auto_bound.borrow_mut().extend(bound);
        Ok(m)
    }

    pub fn bind(&self, element: web::HtmlElement, options: JsValue) -> Option<MagneticButton> {
        self.inner
            .bind(DomTarget(element), &options::options_from_js(&options))
            .map(|inner| MagneticButton { inner })
    }

    #[wasm_bindgen(js_name = bindAll)]
    pub fn bind_all(&self, options: JsValue) -> js_sys::Array {
        self.inner
            .bind_all(&options::options_from_js(&options))
            .into_iter()
            .map(|inner| JsValue::from(MagneticButton { inner }))
            .collect()
    }

    #[wasm_bindgen(js_name = isBound)]
    pub fn is_bound(&self, element: web::HtmlElement) -> bool {
        self.inner.is_bound(&DomTarget(element))
    }

    #[wasm_bindgen(js_name = boundCount)]
    pub fn bound_count(&self) -> usize {
        self.inner.bound_count()
    }

    /// Destroy the handles created by `init`.
    #[wasm_bindgen(js_name = destroyAll)]
    pub fn destroy_all(&self) {
        for mut button in self.auto_bound.borrow_mut().drain(..) {
            button.destroy();
        }
    }
}

impl Magnetizer {
    fn with_host(host: WebHost) -> Self {
        Self {
            inner: mc::Magnetizer::with_registry(host, REGISTRY.with(Rc::clone)),
            auto_bound: RefCell::new(Vec::new()),
        }
    }
}

/// One bound element.
#[wasm_bindgen]
pub struct MagneticButton {
    inner: mc::MagneticButton<WebHost>,
}

#[wasm_bindgen]
impl MagneticButton {
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }

    #[wasm_bindgen(js_name = getMagnetizedArea)]
    pub fn magnetized_area(&self) -> MagnetizedArea {
        let a = self.inner.magnetized_area();
        MagnetizedArea {
            width: a.width,
            height: a.height,
        }
    }

    #[wasm_bindgen(js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.inner.is_bound()
    }

    #[wasm_bindgen(js_name = isEngaged)]
    pub fn is_engaged(&self) -> bool {
        self.inner.is_engaged()
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct MagnetizedArea {
    pub width: f32,
    pub height: f32,
}
