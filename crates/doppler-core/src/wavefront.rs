//! Expanding, fading circular wavefronts emitted by the source.
//!
//! The system only owns the spawn/advance/cull primitives; the spawn cadence
//! lives in [`crate::Simulation`]. Wavefronts are independent of each other,
//! so the collection carries no ordering and expiry is a `retain` filter.

use glam::Vec2;

use crate::constants::{
    WAVE_EXPANSION_BOOST_PX, WAVE_INITIAL_OPACITY, WAVE_SOUND_SPEED_MULTIPLIER,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wavefront {
    pub origin: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Wavefront {
    fn is_expired(&self, max_radius: f32) -> bool {
        self.opacity <= 0.0 || self.radius >= max_radius
    }
}

/// Render-ready view of a wavefront. `opacity` is clamped to `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavefrontSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct WavefrontSystem {
    waves: Vec<Wavefront>,
    speed_of_sound: f32,
    pixels_per_meter: f32,
    fade_rate: f32,
    max_radius: f32,
}

impl WavefrontSystem {
    pub fn new(speed_of_sound: f32, pixels_per_meter: f32, fade_rate: f32, max_radius: f32) -> Self {
        Self {
            waves: Vec::new(),
            speed_of_sound,
            pixels_per_meter,
            fade_rate,
            max_radius,
        }
    }

    pub fn spawn(&mut self, origin_x: f32, origin_y: f32) {
        log::trace!("wavefront spawned at ({origin_x:.1}, {origin_y:.1})");
        self.waves.push(Wavefront {
            origin: Vec2::new(origin_x, origin_y),
            radius: 0.0,
            opacity: WAVE_INITIAL_OPACITY,
        });
    }

    /// Pixels per second all live wavefronts grow by.
    ///
    /// A visual heuristic: at least `c * 1.5`, boosted when the source itself
    /// moves fast enough that its ring would otherwise lag behind it.
    pub fn expansion_rate(&self, source_velocity: f32) -> f32 {
        let boosted = source_velocity.abs() * self.pixels_per_meter + WAVE_EXPANSION_BOOST_PX;
        boosted.max(self.speed_of_sound * WAVE_SOUND_SPEED_MULTIPLIER)
    }

    pub fn advance(&mut self, dt_sec: f32, source_velocity: f32) {
        let growth = self.expansion_rate(source_velocity) * dt_sec;
        let fade = self.fade_rate * dt_sec;
        for wave in &mut self.waves {
            wave.radius += growth;
            wave.opacity -= fade;
        }
    }

    pub fn cull(&mut self) {
        let max_radius = self.max_radius;
        self.waves.retain(|w| !w.is_expired(max_radius));
    }

    pub fn advance_and_cull(&mut self, dt_sec: f32, source_velocity: f32) {
        self.advance(dt_sec, source_velocity);
        self.cull();
    }

    pub fn snapshot(&self) -> Vec<WavefrontSnapshot> {
        self.waves
            .iter()
            .map(|w| WavefrontSnapshot {
                x: w.origin.x,
                y: w.origin.y,
                radius: w.radius,
                opacity: w.opacity.clamp(0.0, WAVE_INITIAL_OPACITY),
            })
            .collect()
    }

    pub fn waves(&self) -> &[Wavefront] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn clear(&mut self) {
        self.waves.clear();
    }
}
