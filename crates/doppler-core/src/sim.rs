//! The simulation state owned by the host loop.
//!
//! Tick order is fixed: kinematics, observed frequency, trace push, wavefront
//! spawn, then wavefront advance and cull. Reordering changes the numbers the
//! chart shows.

use glam::Vec2;

use crate::body::Body;
use crate::config::{Layout, SimulationConstants};
use crate::controls::{Command, VelocityControls};
use crate::doppler::observed_frequency;
use crate::error::ConfigError;
use crate::trace::{ChartGrid, ChartRect, FrequencyTrace};
use crate::wavefront::{WavefrontSnapshot, WavefrontSystem};

/// `Paused` is only reachable from `Running`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

#[derive(Clone, Debug)]
pub struct Simulation {
    constants: SimulationConstants,
    layout: Layout,
    source: Body,
    observer: Body,
    wavefronts: WavefrontSystem,
    trace: FrequencyTrace,
    state: RunState,
    wave_timer: f32,
    observed_hz: f32,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::build(SimulationConstants::default(), Layout::default())
    }
}

impl Simulation {
    pub fn new(constants: SimulationConstants, layout: Layout) -> Result<Self, ConfigError> {
        if let Err(e) = constants.validate().and_then(|_| layout.validate()) {
            log::warn!("rejecting simulation config: {e}");
            return Err(e);
        }
        Ok(Self::build(constants, layout))
    }

    fn build(constants: SimulationConstants, layout: Layout) -> Self {
        let wavefronts = WavefrontSystem::new(
            constants.speed_of_sound,
            constants.pixels_per_meter,
            constants.wave_fade_rate,
            constants.wave_max_radius,
        );
        let trace = FrequencyTrace::new(constants.trace_capacity);
        let mut sim = Self {
            source: Body::at_rest(layout.source_start_x),
            observer: Body::at_rest(layout.observer_start_x),
            wavefronts,
            trace,
            state: RunState::Stopped,
            wave_timer: 0.0,
            observed_hz: constants.emitted_frequency_hz,
            constants,
            layout,
        };
        sim.refresh_frequency();
        sim
    }

    /// Advance the simulation by `dt_sec` seconds.
    ///
    /// Motion, trace sampling and spawning only happen while running, but the
    /// spawn timer keeps accumulating and existing wavefronts keep expanding
    /// and fading in every state.
    pub fn tick(&mut self, dt_sec: f32) {
        self.wave_timer += dt_sec;
        let running = self.state.is_running();

        if running {
            let scale = self.constants.pixels_per_meter;
            let extent = self.layout.width;
            self.source.step(dt_sec, scale, extent);
            self.observer.step(dt_sec, scale, extent);
        }

        self.refresh_frequency();

        if running {
            self.trace.push(self.observed_hz);
            if self.wave_timer >= self.constants.wave_interval_sec {
                self.wavefronts
                    .spawn(self.source.position, self.layout.body_row_y);
                self.wave_timer = 0.0;
            }
        }

        self.wavefronts
            .advance_and_cull(dt_sec, self.source.velocity);
    }

    fn refresh_frequency(&mut self) {
        self.observed_hz = observed_frequency(
            self.constants.emitted_frequency_hz,
            self.constants.speed_of_sound,
            self.source.position,
            self.source.velocity,
            self.observer.position,
            self.observer.velocity,
        );
    }

    // ---- commands ----

    pub fn start(&mut self, v_source: f32, v_observer: f32) {
        self.source.velocity = v_source;
        self.observer.velocity = v_observer;
        self.state = RunState::Running;
        self.refresh_frequency();
        log::info!("simulation started (source {v_source:.1} m/s, observer {v_observer:.1} m/s)");
    }

    pub fn reset(&mut self) {
        self.source = Body::at_rest(self.layout.source_start_x);
        self.observer = Body::at_rest(self.layout.observer_start_x);
        self.state = RunState::Stopped;
        self.wavefronts.clear();
        self.trace.clear();
        self.wave_timer = 0.0;
        self.refresh_frequency();
        log::info!("simulation reset");
    }

    /// Change velocities without touching positions, trace or wavefronts.
    pub fn update_velocities(&mut self, v_source: f32, v_observer: f32) {
        self.source.velocity = v_source;
        self.observer.velocity = v_observer;
        self.refresh_frequency();
        log::debug!("velocities updated (source {v_source:.1} m/s, observer {v_observer:.1} m/s)");
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Stopped => {
                log::debug!("pause ignored while stopped");
                return;
            }
        };
        log::info!("simulation {:?}", self.state);
    }

    /// Dispatch a control-panel command, reading velocities from the sliders.
    pub fn apply(&mut self, command: Command, controls: &VelocityControls) {
        let (v_source, v_observer) = controls.values();
        match command {
            Command::Start => self.start(v_source, v_observer),
            Command::Reset => self.reset(),
            Command::UpdateVelocities => self.update_velocities(v_source, v_observer),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    // ---- queries ----

    pub fn current_observed_frequency(&self) -> f32 {
        self.observed_hz
    }

    pub fn wavefront_snapshot(&self) -> Vec<WavefrontSnapshot> {
        self.wavefronts.snapshot()
    }

    /// Trace polyline projected into `rect` over the configured chart window.
    pub fn trace_points(&self, rect: ChartRect) -> Vec<Vec2> {
        let (freq_min, freq_max) = self.constants.chart_window();
        self.trace
            .to_chart_points(rect, freq_min, freq_max, self.trace.capacity())
    }

    pub fn chart_points(&self) -> Vec<Vec2> {
        self.trace_points(self.layout.chart)
    }

    pub fn chart_grid(&self) -> ChartGrid {
        let (freq_min, freq_max) = self.constants.chart_window();
        ChartGrid::build(self.layout.chart, freq_min, freq_max, self.trace.capacity())
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn source(&self) -> Body {
        self.source
    }

    pub fn observer(&self) -> Body {
        self.observer
    }

    pub fn trace(&self) -> &FrequencyTrace {
        &self.trace
    }

    pub fn wavefronts(&self) -> &WavefrontSystem {
        &self.wavefronts
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
