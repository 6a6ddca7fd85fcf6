//! Rolling observed-frequency history and the chart math that maps it to
//! screen space.

use std::collections::VecDeque;

use glam::Vec2;

use crate::constants::{CHART_GRID_STEP_HZ, CHART_GRID_STEP_SAMPLES};

/// Axis-aligned chart rectangle in screen pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ChartRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_array(r: [f32; 4]) -> Self {
        Self::new(r[0], r[1], r[2], r[3])
    }

    /// Screen y of a frequency value. Values outside the window land outside
    /// the rectangle; nothing is clipped.
    #[inline]
    pub fn freq_to_y(&self, value: f32, freq_min: f32, freq_max: f32) -> f32 {
        self.y + self.height - (value - freq_min) * self.height / (freq_max - freq_min)
    }

    #[inline]
    pub fn index_to_x(&self, index: usize, max_samples: usize) -> f32 {
        self.x + index as f32 * (self.width / max_samples as f32)
    }
}

/// Fixed-capacity FIFO of observed frequencies in arrival order.
#[derive(Clone, Debug)]
pub struct FrequencyTrace {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl FrequencyTrace {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, sample: f32) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Map samples to a connectable polyline. Returns nothing for fewer than
    /// two samples.
    pub fn to_chart_points(
        &self,
        rect: ChartRect,
        freq_min: f32,
        freq_max: f32,
        max_samples: usize,
    ) -> Vec<Vec2> {
        if self.samples.len() < 2 {
            return Vec::new();
        }
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Vec2::new(
                    rect.index_to_x(i, max_samples),
                    rect.freq_to_y(v, freq_min, freq_max),
                )
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// A labelled grid line: `value` is Hz for horizontal lines and a sample
/// index for vertical ones. `from`/`to` are the screen endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub value: f32,
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartGrid {
    pub horizontal: Vec<GridLine>,
    pub vertical: Vec<GridLine>,
}

impl ChartGrid {
    /// Horizontal lines every 5 Hz across `[freq_min, freq_max]`, vertical
    /// lines every 100 samples across `[0, max_samples]`, both inclusive.
    pub fn build(rect: ChartRect, freq_min: f32, freq_max: f32, max_samples: usize) -> Self {
        let steps = ((freq_max - freq_min) / CHART_GRID_STEP_HZ).floor().max(0.0) as usize;
        let horizontal = (0..=steps)
            .map(|k| {
                let f = freq_min + k as f32 * CHART_GRID_STEP_HZ;
                let y = rect.freq_to_y(f, freq_min, freq_max);
                GridLine {
                    value: f,
                    from: Vec2::new(rect.x, y),
                    to: Vec2::new(rect.x + rect.width, y),
                }
            })
            .collect();
        let vertical = (0..=max_samples)
            .step_by(CHART_GRID_STEP_SAMPLES)
            .map(|i| {
                let x = rect.index_to_x(i, max_samples);
                GridLine {
                    value: i as f32,
                    from: Vec2::new(x, rect.y),
                    to: Vec2::new(x, rect.y + rect.height),
                }
            })
            .collect();
        Self {
            horizontal,
            vertical,
        }
    }
}
