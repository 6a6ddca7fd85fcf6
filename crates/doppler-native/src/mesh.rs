//! CPU-side tessellation of the simulation into flat-colored triangles.
//!
//! Everything is emitted in layout pixels; the shader maps pixels to clip
//! space using the layout size, so the scene scales with the window.

use doppler_core::{
    Simulation, BODY_RADIUS, GRID_COLOR, OBSERVER_COLOR, SOURCE_COLOR, TRACE_COLOR,
    WAVE_COLOR_RGB, WAVE_INITIAL_OPACITY,
};
use glam::Vec2;

const RING_SEGMENTS: usize = 96;
const DISC_SEGMENTS: usize = 32;
const WAVE_LINE_WIDTH: f32 = 2.0;
const GRID_LINE_WIDTH: f32 = 1.0;
const TRACE_LINE_WIDTH: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[derive(Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn tri(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                pos: p.to_array(),
                color,
            });
        }
    }

    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
        self.tri(a, b, c, color);
        self.tri(a, c, d, color);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        let n = dir.perp() * (width * 0.5);
        self.quad(from + n, to + n, to - n, from - n, color);
    }

    pub fn polyline(&mut self, points: &[Vec2], width: f32, color: [f32; 4]) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], width, color);
        }
    }

    pub fn rect_outline(&mut self, min: Vec2, max: Vec2, width: f32, color: [f32; 4]) {
        let tl = min;
        let tr = Vec2::new(max.x, min.y);
        let br = max;
        let bl = Vec2::new(min.x, max.y);
        self.polyline(&[tl, tr, br, bl, tl], width, color);
    }

    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: [f32; 4]) {
        let outer = radius;
        let inner = (radius - width).max(0.0);
        let step = std::f32::consts::TAU / RING_SEGMENTS as f32;
        for i in 0..RING_SEGMENTS {
            let d0 = Vec2::from_angle(i as f32 * step);
            let d1 = Vec2::from_angle((i + 1) as f32 * step);
            self.quad(
                center + d0 * inner,
                center + d0 * outer,
                center + d1 * outer,
                center + d1 * inner,
                color,
            );
        }
    }

    pub fn disc(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let step = std::f32::consts::TAU / DISC_SEGMENTS as f32;
        for i in 0..DISC_SEGMENTS {
            let d0 = Vec2::from_angle(i as f32 * step);
            let d1 = Vec2::from_angle((i + 1) as f32 * step);
            self.tri(center, center + d0 * radius, center + d1 * radius, color);
        }
    }
}

/// Rebuild `mesh` from the current simulation state, back to front:
/// wavefronts, bodies, chart grid and frame, trace.
pub fn build_scene(sim: &Simulation, mesh: &mut Mesh) {
    mesh.clear();

    for w in sim.wavefront_snapshot() {
        let alpha = (w.opacity / WAVE_INITIAL_OPACITY).clamp(0.0, 1.0);
        let [r, g, b] = WAVE_COLOR_RGB;
        mesh.ring(Vec2::new(w.x, w.y), w.radius, WAVE_LINE_WIDTH, [r, g, b, alpha]);
    }

    let row_y = sim.layout().body_row_y;
    mesh.disc(Vec2::new(sim.source().position, row_y), BODY_RADIUS, SOURCE_COLOR);
    mesh.disc(Vec2::new(sim.observer().position, row_y), BODY_RADIUS, OBSERVER_COLOR);

    let grid = sim.chart_grid();
    for line in grid.horizontal.iter().chain(grid.vertical.iter()) {
        mesh.line(line.from, line.to, GRID_LINE_WIDTH, GRID_COLOR);
    }
    let rect = sim.layout().chart;
    mesh.rect_outline(
        Vec2::new(rect.x, rect.y),
        Vec2::new(rect.x + rect.width, rect.y + rect.height),
        GRID_LINE_WIDTH,
        GRID_COLOR,
    );

    mesh.polyline(&sim.chart_points(), TRACE_LINE_WIDTH, TRACE_COLOR);
}
