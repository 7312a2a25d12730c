//! Layout rectangles and the proximity metrics used for the in-range test.

use glam::Vec2;

/// Axis-aligned layout box in viewport pixels, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// How far the pointer is from an element, for the trigger-distance test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Straight-line distance from the pointer to the element center.
    /// The trigger zone is a circle around the center.
    Center,
    /// Distance from the pointer to the nearest edge of the box, zero when
    /// the pointer is over the element. The trigger zone follows the
    /// element's silhouette.
    #[default]
    Edge,
}

impl DistanceMetric {
    pub fn proximity(self, rect: &Rect, pointer: Vec2) -> f32 {
        match self {
            DistanceMetric::Center => pointer.distance(rect.center()),
            DistanceMetric::Edge => edge_distance(rect, pointer),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "center" | "Center" => Some(DistanceMetric::Center),
            "edge" | "Edge" => Some(DistanceMetric::Edge),
            _ => None,
        }
    }
}

#[inline]
pub fn edge_distance(rect: &Rect, pointer: Vec2) -> f32 {
    let dx = (rect.left - pointer.x).max(pointer.x - rect.right()).max(0.0);
    let dy = (rect.top - pointer.y).max(pointer.y - rect.bottom()).max(0.0);
    (dx * dx + dy * dy).sqrt()
}
