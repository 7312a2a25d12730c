use glam::Vec2;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Visual offset that chases a target one pointer move at a time.
///
/// The value persists between moves, which is what gives the effect its
/// inertia on the way in and its damped return on the way out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedPosition {
    current: Vec2,
}

impl SmoothedPosition {
    #[inline]
    pub fn get(&self) -> Vec2 {
        self.current
    }

    pub fn approach(&mut self, target: Vec2, t: f32) -> Vec2 {
        self.current = Vec2::new(
            lerp(self.current.x, target.x, t),
            lerp(self.current.y, target.y, t),
        );
        self.current
    }

    /// Bound each axis to `[-max, max]`; `None` leaves that axis free.
    pub fn clamp(&mut self, max_x: Option<f32>, max_y: Option<f32>) -> Vec2 {
        if let Some(mx) = max_x {
            self.current.x = self.current.x.clamp(-mx, mx);
        }
        if let Some(my) = max_y {
            self.current.y = self.current.y.clamp(-my, my);
        }
        self.current
    }

    pub fn reset(&mut self) {
        self.current = Vec2::ZERO;
    }
}
