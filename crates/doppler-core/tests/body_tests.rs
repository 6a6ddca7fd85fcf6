// Host-side tests for constant-velocity kinematics with boundary reflection.

use doppler_core::*;

#[test]
fn step_moves_by_velocity_times_scale() {
    let mut b = Body {
        position: 100.0,
        velocity: 2.0,
    };
    let flipped = b.step(0.5, 35.0, 1600.0);
    assert!(!flipped);
    assert!((b.position - 135.0).abs() < 1e-4);
    assert_eq!(b.velocity, 2.0);
}

#[test]
fn step_reflects_past_right_bound() {
    let mut b = Body {
        position: 1599.0,
        velocity: 10.0,
    };
    assert!(b.step(0.1, 35.0, 1600.0));
    assert_eq!(b.velocity, -10.0);
    // Not clamped.
    assert!(b.position > 1600.0);
}

#[test]
fn step_reflects_past_left_bound() {
    let mut b = Body {
        position: 5.0,
        velocity: -10.0,
    };
    assert!(b.step(0.1, 35.0, 1600.0));
    assert_eq!(b.velocity, 10.0);
}

#[test]
fn body_resting_on_bound_flips_zero_velocity_harmlessly() {
    let mut b = Body::at_rest(0.0);
    assert!(b.step(0.1, 35.0, 1600.0));
    assert_eq!(b.position, 0.0);
    assert_eq!(b.velocity, 0.0);
}

#[test]
fn reflected_body_walks_back_inside() {
    let mut b = Body {
        position: 1590.0,
        velocity: 15.0,
    };
    for _ in 0..120 {
        b.step(1.0 / 60.0, 35.0, 1600.0);
    }
    assert!(b.position < 1600.0);
    assert!(b.velocity < 0.0);
}
