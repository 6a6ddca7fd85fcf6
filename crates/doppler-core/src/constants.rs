// Shared physics/visual tuning constants used by the core and the native frontend.

// Physics
pub const EMITTED_FREQUENCY_HZ: f32 = 432.0;
pub const SPEED_OF_SOUND: f32 = 340.0; // m/s
pub const PIXELS_PER_METER: f32 = 35.0; // scales world velocities to screen motion
pub const DENOMINATOR_EPSILON: f32 = 0.01; // substituted when c - v_s_away hits exactly zero

// Wavefronts
pub const WAVE_INTERVAL_SEC: f32 = 0.3; // spawn cadence while running
pub const WAVE_FADE_RATE: f32 = 150.0; // opacity lost per second
pub const WAVE_MAX_RADIUS: f32 = 1200.0; // pixels
pub const WAVE_INITIAL_OPACITY: f32 = 255.0;
pub const WAVE_EXPANSION_BOOST_PX: f32 = 30.0; // added to |v_source| * scale
pub const WAVE_SOUND_SPEED_MULTIPLIER: f32 = 1.5; // floor = c * multiplier

// Frequency trace / chart
pub const TRACE_CAPACITY: usize = 500;
pub const CHART_HALF_SPAN_HZ: f32 = 40.0; // chart shows f_emit +/- this
pub const CHART_GRID_STEP_HZ: f32 = 5.0;
pub const CHART_GRID_STEP_SAMPLES: usize = 100;

// Velocity sliders (m/s)
pub const VELOCITY_MIN: f32 = -15.0;
pub const VELOCITY_MAX: f32 = 15.0;

// Screen layout (pixels)
pub const SCREEN_WIDTH: f32 = 1600.0;
pub const SCREEN_HEIGHT: f32 = 900.0;
pub const BODY_ROW_OFFSET: f32 = 100.0; // below the vertical centre
pub const SOURCE_START_X: f32 = 200.0;
pub const OBSERVER_START_X: f32 = 1300.0;
pub const BODY_RADIUS: f32 = 20.0;
pub const CHART_RECT: [f32; 4] = [1050.0, 30.0, 500.0, 300.0]; // x, y, w, h

// Default palette (rgba, 0..1)
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const SOURCE_COLOR: [f32; 4] = [1.0, 0.196, 0.196, 1.0]; // red-ish
pub const OBSERVER_COLOR: [f32; 4] = [0.196, 0.392, 1.0, 1.0]; // blue-ish
pub const WAVE_COLOR_RGB: [f32; 3] = [0.392, 0.392, 1.0];
pub const GRID_COLOR: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
pub const TRACE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn body_row_y() -> f32 {
    SCREEN_HEIGHT / 2.0 + BODY_ROW_OFFSET
}
