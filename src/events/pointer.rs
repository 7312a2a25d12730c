use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::POINTER_EVENT;

/// Window-level pointer-move subscription.
///
/// The closure stays owned here (never `forget`) so `detach` can remove the
/// exact function that was registered.
pub struct PointerListener {
    window: web::Window,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListener {
    pub fn attach(window: &web::Window, mut handler: Box<dyn FnMut(Vec2)>) -> Self {
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            handler(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            window.add_event_listener_with_callback(POINTER_EVENT, closure.as_ref().unchecked_ref())
        {
            log::warn!("[magnet] could not subscribe to {}: {:?}", POINTER_EVENT, e);
        }

        Self {
            window: window.clone(),
            closure,
        }
    }

    pub fn detach(self) {
        _ = self.window.remove_event_listener_with_callback(
            POINTER_EVENT,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
