// Host-side tests for the observed-frequency formula.

use doppler_core::*;

const F: f32 = 432.0;
const C: f32 = 340.0;

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn observer_right_of_approaching_source() {
    // 432 * 340 / (340 - 10)
    let f = observed_frequency(F, C, 0.0, 10.0, 100.0, 0.0);
    assert!(approx(f, 445.0909, 0.01), "got {f}");
}

#[test]
fn observer_left_of_source_uses_mirrored_signs() {
    // Source moving left toward the observer, observer moving right toward it:
    // 432 * (340 + 5) / (340 - 10)
    let f = observed_frequency(F, C, 100.0, -10.0, 0.0, 5.0);
    assert!(approx(f, 451.6364, 0.01), "got {f}");
}

#[test]
fn receding_source_lowers_frequency() {
    let f = observed_frequency(F, C, 0.0, -10.0, 100.0, 0.0);
    assert!(approx(f, 432.0 * 340.0 / 350.0, 0.01), "got {f}");
    assert!(f < F);
}

#[test]
fn observer_moving_away_lowers_frequency() {
    // Observer right of the source moving further right.
    let f = observed_frequency(F, C, 0.0, 0.0, 100.0, 10.0);
    assert!(approx(f, 432.0 * 330.0 / 340.0, 0.01), "got {f}");
}

#[test]
fn coincident_positions_use_right_hand_branch() {
    let f = observed_frequency(F, C, 50.0, 10.0, 50.0, 0.0);
    assert!(approx(f, 445.0909, 0.01), "got {f}");
}

#[test]
fn bodies_at_rest_hear_emitted_frequency() {
    for (xs, xo) in [(0.0, 100.0), (100.0, 0.0), (42.0, 42.0)] {
        let f = observed_frequency(F, C, xs, 0.0, xo, 0.0);
        assert!(approx(f, F, 1e-4), "xs={xs} xo={xo} got {f}");
    }
}

#[test]
fn zero_denominator_is_replaced_by_epsilon() {
    // Observer left of source; v_s_away = -v_source = 340 = c.
    let f = observed_frequency(F, C, 100.0, -340.0, 0.0, 0.0);
    let expected = F * C / DENOMINATOR_EPSILON;
    assert!(f.is_finite());
    assert!(((f - expected) / expected).abs() < 1e-4, "got {f}");
}

#[test]
fn zero_denominator_guard_includes_observer_term() {
    let f = observed_frequency(F, C, 100.0, -340.0, 0.0, 5.0);
    let expected = F * (C + 5.0) / DENOMINATOR_EPSILON;
    assert!(((f - expected) / expected).abs() < 1e-4, "got {f}");
}

#[test]
fn mirroring_the_scene_preserves_frequency() {
    // Property: flipping every position and velocity sign is the same scene.
    for vs in [-15.0_f32, -7.5, 0.0, 3.0, 15.0] {
        for vo in [-15.0_f32, -2.0, 0.0, 9.0, 15.0] {
            let a = observed_frequency(F, C, 200.0, vs, 1300.0, vo);
            let b = observed_frequency(F, C, -200.0, -vs, -1300.0, -vo);
            assert!(approx(a, b, 1e-3), "vs={vs} vo={vo}: {a} vs {b}");
        }
    }
}

#[test]
fn approaching_is_monotonic_in_source_speed() {
    let mut prev = observed_frequency(F, C, 0.0, -15.0, 100.0, 0.0);
    for step in 1..=30 {
        let vs = -15.0 + step as f32;
        let f = observed_frequency(F, C, 0.0, vs, 100.0, 0.0);
        assert!(f > prev, "frequency not increasing at v_source {vs}");
        prev = f;
    }
}
