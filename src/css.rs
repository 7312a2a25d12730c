// Pure CSS helpers (no web-sys), shared with host-side tests.

/// `translate(Xpx, Ypx)` for the element's inline transform.
#[inline]
pub fn translate(x: f32, y: f32) -> String {
    format!("translate({}px, {}px)", x, y)
}

/// Attribute selector matching every element that carries `attr`.
#[inline]
pub fn attribute_selector(attr: &str) -> String {
    format!("[{}]", attr)
}
