/// A point body moving along the horizontal motion axis.
///
/// `position` is in pixels, `velocity` in meters per second (signed,
/// positive = rightward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub position: f32,
    pub velocity: f32,
}

impl Body {
    pub fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advance by `dt_sec` at constant velocity, then reflect off the axis
    /// bounds `[0, extent]`. Returns true when the velocity was flipped.
    ///
    /// The position is not clamped; a body past a bound walks back inside on
    /// the following ticks.
    pub fn step(&mut self, dt_sec: f32, pixels_per_meter: f32, extent: f32) -> bool {
        self.position += self.velocity * dt_sec * pixels_per_meter;
        if self.position <= 0.0 || self.position >= extent {
            self.velocity = -self.velocity;
            return true;
        }
        false
    }
}
