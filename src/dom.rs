use glam::Vec2;
use magnet_core::constants::TOUCH_PRIMARY_QUERY;
use magnet_core::{Host, MagnetTarget, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::TRANSFORM_PROPERTY;
use crate::css;
use crate::events::PointerListener;

/// A bound DOM element. Equality is JS identity.
#[derive(Clone, Debug, PartialEq)]
pub struct DomTarget(pub web::HtmlElement);

impl MagnetTarget for DomTarget {
    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn add_class(&self, class: &str) {
        _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }

    fn set_translation(&self, offset: Vec2) {
        _ = self
            .0
            .style()
            .set_property(TRANSFORM_PROPERTY, &css::translate(offset.x, offset.y));
    }

    fn clear_translation(&self) {
        _ = self.0.style().remove_property(TRANSFORM_PROPERTY);
    }
}

pub struct WebHost {
    window: web::Window,
    document: web::Document,
}

impl WebHost {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        Ok(Self::from_parts(window, document))
    }

    /// Scope discovery to an explicit document.
    pub fn from_parts(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl Host for WebHost {
    type Target = DomTarget;
    type Listener = PointerListener;

    fn is_touch_primary(&self) -> bool {
        match self.window.match_media(TOUCH_PRIMARY_QUERY) {
            Ok(Some(mql)) => mql.matches(),
            _ => false,
        }
    }

    fn discover(&self, marker: &str) -> Vec<DomTarget> {
        let list = match self
            .document
            .query_selector_all(&css::attribute_selector(marker))
        {
            Ok(list) => list,
            Err(e) => {
                log::warn!("[magnet] discovery failed: {:?}", e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
            .map(DomTarget)
            .collect()
    }

    fn listen(&self, handler: Box<dyn FnMut(Vec2)>) -> PointerListener {
        PointerListener::attach(&self.window, handler)
    }

    fn unlisten(&self, listener: PointerListener) {
        listener.detach();
    }
}
