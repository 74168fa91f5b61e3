//! Bodies moving through the simulated region.

/// What a body represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRole {
    /// The central star, always stored at position 0 and never pruned.
    Star,
    /// A comet spawned at an edge of the region.
    Comet,
}

/// A body with a position, a constant velocity and a diameter.
///
/// The position is owned by the body itself; the sequence holding it only
/// decides where it sits in traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity per tick.
    pub velocity_x: f64,
    /// Vertical velocity per tick.
    pub velocity_y: f64,
    /// Diameter in pixels.
    pub size: u32,
    /// Star or comet.
    pub role: BodyRole,
}

impl Body {
    /// Moves the body by one tick of its velocity.
    #[inline]
    pub const fn advance(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Returns `true` once the body has drifted more than its own diameter
    /// past any edge of a `width` x `height` region.
    #[must_use]
    pub fn is_outside(&self, width: u32, height: u32) -> bool {
        let margin = f64::from(self.size);
        self.x < -margin
            || self.x > f64::from(width) + margin
            || self.y < -margin
            || self.y > f64::from(height) + margin
    }
}
