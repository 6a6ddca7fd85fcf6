//! Front-end agnostic model of the control panel: two velocity sliders, the
//! four command buttons and the status labels shown next to them.

use crate::constants::{VELOCITY_MAX, VELOCITY_MIN};
use crate::sim::RunState;

/// Horizontal slider holding a value clamped into `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
}

impl Slider {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn set(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(self.min, self.max);
    }

    pub fn nudge(&mut self, delta: f32) {
        self.set(self.value + delta);
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(0.0, VELOCITY_MIN, VELOCITY_MAX)
    }
}

/// Slider state for the source and observer velocities (m/s).
///
/// Moving a slider does not touch the simulation; the values are only read
/// when [`Command::Start`] or [`Command::UpdateVelocities`] is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityControls {
    pub source: Slider,
    pub observer: Slider,
}

impl VelocityControls {
    pub fn values(&self) -> (f32, f32) {
        (self.source.value(), self.observer.value())
    }

    pub fn source_label(&self) -> String {
        format!("Source velocity [m/s]: {:.1}", self.source.value())
    }

    pub fn observer_label(&self) -> String {
        format!("Observer velocity [m/s]: {:.1}", self.observer.value())
    }
}

/// The four control-panel buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    UpdateVelocities,
    TogglePause,
}

pub fn frequency_label(frequency_hz: f32) -> String {
    format!("Observed frequency: {frequency_hz:.1} Hz")
}

/// Caption of the pause button for the given run state.
pub fn pause_button_label(state: RunState) -> &'static str {
    match state {
        RunState::Paused => "Resume simulation",
        RunState::Running | RunState::Stopped => "Pause simulation",
    }
}
