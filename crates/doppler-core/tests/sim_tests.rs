// Host-side tests for the simulation tick contract and control commands.

use doppler_core::*;

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

fn run(sim: &mut Simulation, ticks: usize, dt: f32) {
    for _ in 0..ticks {
        sim.tick(dt);
    }
}

#[test]
fn new_simulation_is_stopped_at_rest() {
    let sim = Simulation::default();
    assert_eq!(sim.run_state(), RunState::Stopped);
    assert_eq!(sim.source(), Body::at_rest(SOURCE_START_X));
    assert_eq!(sim.observer(), Body::at_rest(OBSERVER_START_X));
    assert!(approx(sim.current_observed_frequency(), EMITTED_FREQUENCY_HZ, 1e-4));
    assert!(sim.trace().is_empty());
    assert!(sim.wavefronts().is_empty());
}

#[test]
fn stopped_ticks_do_not_move_sample_or_spawn() {
    let mut sim = Simulation::default();
    run(&mut sim, 10, 0.1);
    assert_eq!(sim.source().position, SOURCE_START_X);
    assert_eq!(sim.observer().position, OBSERVER_START_X);
    assert!(sim.trace().is_empty());
    assert!(sim.wavefronts().is_empty());
}

#[test]
fn running_tick_moves_bodies_then_samples_frequency() {
    let mut sim = Simulation::default();
    sim.start(10.0, -5.0);
    sim.tick(0.1);
    assert!(approx(sim.source().position, 235.0, 1e-3));
    assert!(approx(sim.observer().position, 1282.5, 1e-3));
    // Observer right of source: 432 * (340 + 5) / (340 - 10)
    let expected = 432.0 * 345.0 / 330.0;
    assert!(approx(sim.current_observed_frequency(), expected, 0.01));
    assert_eq!(sim.trace().len(), 1);
    assert_eq!(sim.trace().latest(), Some(sim.current_observed_frequency()));
}

#[test]
fn frequency_uses_post_motion_positions() {
    // The source starts just left of the observer and crosses it this tick.
    let layout = Layout {
        source_start_x: 1290.0,
        ..Layout::default()
    };
    let mut sim = Simulation::new(SimulationConstants::default(), layout).unwrap();
    sim.start(15.0, 0.0);
    sim.tick(0.1);
    assert!(sim.source().position > sim.observer().position);
    // Observer now left of a receding source: 432 * 340 / (340 + 15)
    let latest = sim.trace().latest().unwrap();
    assert!(approx(latest, 432.0 * 340.0 / 355.0, 0.01), "got {latest}");
}

#[test]
fn wavefronts_spawn_on_interval_at_source_position() {
    let mut sim = Simulation::default();
    sim.start(10.0, 0.0);
    sim.tick(0.2);
    assert!(sim.wavefronts().is_empty(), "0.2 s is below the interval");
    sim.tick(0.2);
    assert_eq!(sim.wavefronts().len(), 1);
    let snap = sim.wavefront_snapshot();
    assert!(approx(snap[0].x, sim.source().position, 1e-3));
    assert_eq!(snap[0].y, sim.layout().body_row_y);
    // Spawned then advanced within the same tick.
    assert!(approx(snap[0].radius, 510.0 * 0.2, 1e-3));

    sim.tick(0.2);
    assert_eq!(sim.wavefronts().len(), 1, "timer was reset on spawn");
    sim.tick(0.2);
    assert_eq!(sim.wavefronts().len(), 2);
}

#[test]
fn spawn_timer_accumulates_while_stopped() {
    let mut sim = Simulation::default();
    sim.tick(0.5);
    sim.start(0.0, 0.0);
    sim.tick(0.01);
    assert_eq!(sim.wavefronts().len(), 1);
}

#[test]
fn pause_freezes_motion_but_wavefronts_keep_expanding() {
    let mut sim = Simulation::default();
    sim.start(5.0, 5.0);
    run(&mut sim, 2, 0.2);
    assert_eq!(sim.wavefronts().len(), 1);

    sim.toggle_pause();
    assert_eq!(sim.run_state(), RunState::Paused);
    let source = sim.source();
    let observer = sim.observer();
    let samples = sim.trace().len();
    let radius = sim.wavefront_snapshot()[0].radius;

    run(&mut sim, 3, 0.1);
    assert_eq!(sim.source(), source);
    assert_eq!(sim.observer(), observer);
    assert_eq!(sim.trace().len(), samples);
    assert_eq!(sim.wavefronts().len(), 1, "no spawns while paused");
    assert!(sim.wavefront_snapshot()[0].radius > radius);

    sim.toggle_pause();
    assert_eq!(sim.run_state(), RunState::Running);
    sim.tick(0.1);
    assert!(sim.source().position > source.position);
}

#[test]
fn pause_is_ignored_while_stopped() {
    let mut sim = Simulation::default();
    sim.toggle_pause();
    assert_eq!(sim.run_state(), RunState::Stopped);
}

#[test]
fn start_resumes_a_paused_simulation() {
    let mut sim = Simulation::default();
    sim.start(1.0, 1.0);
    sim.toggle_pause();
    sim.start(2.0, -2.0);
    assert_eq!(sim.run_state(), RunState::Running);
    assert_eq!(sim.source().velocity, 2.0);
    assert_eq!(sim.observer().velocity, -2.0);
}

#[test]
fn reset_restores_initial_state() {
    let mut sim = Simulation::default();
    sim.start(12.0, -7.0);
    run(&mut sim, 30, 1.0 / 60.0);
    assert!(!sim.trace().is_empty());
    assert!(!sim.wavefronts().is_empty());

    sim.reset();
    assert_eq!(sim.run_state(), RunState::Stopped);
    assert_eq!(sim.source(), Body::at_rest(SOURCE_START_X));
    assert_eq!(sim.observer(), Body::at_rest(OBSERVER_START_X));
    assert!(sim.trace().is_empty());
    assert!(sim.wavefronts().is_empty());
    assert!(sim.chart_points().is_empty());
    assert!(approx(sim.current_observed_frequency(), EMITTED_FREQUENCY_HZ, 1e-4));

    // The spawn timer was cleared too.
    sim.start(0.0, 0.0);
    sim.tick(0.2);
    assert!(sim.wavefronts().is_empty());
}

#[test]
fn update_velocities_keeps_position_trace_and_state() {
    let mut sim = Simulation::default();
    sim.start(4.0, 0.0);
    run(&mut sim, 5, 0.1);
    let source = sim.source().position;
    let samples = sim.trace().len();
    let waves = sim.wavefronts().len();

    sim.update_velocities(-8.0, 3.0);
    assert_eq!(sim.source().position, source);
    assert_eq!(sim.source().velocity, -8.0);
    assert_eq!(sim.observer().velocity, 3.0);
    assert_eq!(sim.trace().len(), samples);
    assert_eq!(sim.wavefronts().len(), waves);
    assert_eq!(sim.run_state(), RunState::Running);
}

#[test]
fn update_velocities_with_current_values_is_a_no_op() {
    let mut a = Simulation::default();
    let mut b = Simulation::default();
    a.start(6.0, -3.0);
    b.start(6.0, -3.0);
    for i in 0..40 {
        if i % 7 == 0 {
            b.update_velocities(b.source().velocity, b.observer().velocity);
        }
        a.tick(1.0 / 30.0);
        b.tick(1.0 / 30.0);
    }
    assert_eq!(a.source(), b.source());
    assert_eq!(a.observer(), b.observer());
    assert_eq!(a.trace().iter().collect::<Vec<_>>(), b.trace().iter().collect::<Vec<_>>());
    assert_eq!(a.wavefront_snapshot(), b.wavefront_snapshot());
}

#[test]
fn bodies_reflect_at_screen_bounds() {
    let layout = Layout {
        width: 300.0,
        source_start_x: 290.0,
        observer_start_x: 10.0,
        ..Layout::default()
    };
    let mut sim = Simulation::new(SimulationConstants::default(), layout).unwrap();
    sim.start(10.0, -10.0);
    sim.tick(0.1);
    assert_eq!(sim.source().velocity, -10.0);
    assert_eq!(sim.observer().velocity, 10.0);
    run(&mut sim, 2, 0.1);
    assert!(sim.source().position < 300.0);
    assert!(sim.observer().position > 0.0);
}

#[test]
fn apply_reads_slider_values() {
    let mut sim = Simulation::default();
    let mut controls = VelocityControls::default();
    controls.source.set(7.5);
    controls.observer.set(-20.0); // clamped to -15

    sim.apply(Command::Start, &controls);
    assert_eq!(sim.run_state(), RunState::Running);
    assert_eq!(sim.source().velocity, 7.5);
    assert_eq!(sim.observer().velocity, -15.0);

    controls.source.nudge(1.0);
    sim.apply(Command::UpdateVelocities, &controls);
    assert_eq!(sim.source().velocity, 8.5);

    sim.apply(Command::TogglePause, &controls);
    assert_eq!(sim.run_state(), RunState::Paused);

    sim.apply(Command::Reset, &controls);
    assert_eq!(sim.run_state(), RunState::Stopped);
    assert_eq!(sim.source().velocity, 0.0);
}

#[test]
fn chart_points_need_two_running_ticks() {
    let mut sim = Simulation::default();
    sim.start(3.0, 0.0);
    sim.tick(0.05);
    assert!(sim.chart_points().is_empty());
    sim.tick(0.05);
    let pts = sim.chart_points();
    assert_eq!(pts.len(), 2);
    assert!(approx(pts[0].x, sim.layout().chart.x, 1e-3));
}

#[test]
fn chart_grid_uses_emitted_frequency_window() {
    let sim = Simulation::default();
    let grid = sim.chart_grid();
    assert_eq!(grid.horizontal.first().map(|l| l.value), Some(392.0));
    assert_eq!(grid.horizontal.last().map(|l| l.value), Some(472.0));
}
