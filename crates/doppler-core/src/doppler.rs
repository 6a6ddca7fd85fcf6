use crate::constants::DENOMINATOR_EPSILON;

/// Observed frequency at the observer for 1-D motion along the x axis.
///
/// Velocities are signed (positive = rightward). Which sign counts as
/// "toward" depends on which side of the source the observer is on; an
/// observer exactly at the source uses the right-hand convention.
///
/// When `c - v_s_away` is exactly zero the denominator is replaced by
/// [`DENOMINATOR_EPSILON`], so the result is very large but finite.
pub fn observed_frequency(
    f_emit: f32,
    speed_of_sound: f32,
    x_source: f32,
    v_source: f32,
    x_observer: f32,
    v_observer: f32,
) -> f32 {
    let (vo_toward, vs_away) = if x_observer < x_source {
        (v_observer, -v_source)
    } else {
        (-v_observer, v_source)
    };

    let numerator = speed_of_sound + vo_toward;
    let mut denominator = speed_of_sound - vs_away;
    if denominator == 0.0 {
        denominator = DENOMINATOR_EPSILON;
    }
    f_emit * numerator / denominator
}
