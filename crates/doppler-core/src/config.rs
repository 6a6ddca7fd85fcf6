//! Construction-time configuration for the simulation.
//!
//! Both structs default to the values in [`crate::constants`] and are fixed
//! for the lifetime of a [`crate::Simulation`]; only the velocity sliders are
//! adjustable at runtime.

use crate::constants::*;
use crate::error::ConfigError;
use crate::trace::ChartRect;

/// Physics and lifecycle parameters shared by every component.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConstants {
    pub emitted_frequency_hz: f32,
    pub speed_of_sound: f32,
    pub pixels_per_meter: f32,
    pub wave_interval_sec: f32,
    pub wave_fade_rate: f32,
    pub wave_max_radius: f32,
    pub trace_capacity: usize,
    pub chart_half_span_hz: f32,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        Self {
            emitted_frequency_hz: EMITTED_FREQUENCY_HZ,
            speed_of_sound: SPEED_OF_SOUND,
            pixels_per_meter: PIXELS_PER_METER,
            wave_interval_sec: WAVE_INTERVAL_SEC,
            wave_fade_rate: WAVE_FADE_RATE,
            wave_max_radius: WAVE_MAX_RADIUS,
            trace_capacity: TRACE_CAPACITY,
            chart_half_span_hz: CHART_HALF_SPAN_HZ,
        }
    }
}

impl SimulationConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("emitted frequency", self.emitted_frequency_hz)?;
        positive("speed of sound", self.speed_of_sound)?;
        positive("pixels per meter", self.pixels_per_meter)?;
        positive("wave interval", self.wave_interval_sec)?;
        positive("wave fade rate", self.wave_fade_rate)?;
        positive("wave max radius", self.wave_max_radius)?;
        positive("chart half span", self.chart_half_span_hz)?;
        if self.trace_capacity == 0 {
            return Err(ConfigError::EmptyTrace);
        }
        Ok(())
    }

    /// Frequency window shown on the chart: `f_emit +/- half span`.
    pub fn chart_window(&self) -> (f32, f32) {
        (
            self.emitted_frequency_hz - self.chart_half_span_hz,
            self.emitted_frequency_hz + self.chart_half_span_hz,
        )
    }
}

/// Screen geometry: motion axis, body row, start positions and chart placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub body_row_y: f32,
    pub source_start_x: f32,
    pub observer_start_x: f32,
    pub chart: ChartRect,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            body_row_y: body_row_y(),
            source_start_x: SOURCE_START_X,
            observer_start_x: OBSERVER_START_X,
            chart: ChartRect::from_array(CHART_RECT),
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("layout width", self.width)?;
        positive("layout height", self.height)?;
        let rect = &self.chart;
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Err(ConfigError::DegenerateChart {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
