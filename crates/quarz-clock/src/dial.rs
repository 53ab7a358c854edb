//! Dial geometry.
//!
//! Pure functions from a time sample to drawable geometry. Angles are in
//! radians, measured clockwise from 12 o'clock; positions are logical pixels
//! with the usual top-left origin (+Y down).

use std::f32::consts::PI;

use quarz_engine::coords::Vec2;

use crate::sample::TimeSample;

// ── hand angles ───────────────────────────────────────────────────────────

/// Hour-hand angle. Sweeps continuously: minutes contribute π/360 each and
/// seconds π/21600, so the hand never jumps at a minute or hour boundary.
pub fn hour_angle(t: TimeSample) -> f32 {
    (t.hour % 12) as f32 * (PI / 6.0)
        + t.minute as f32 * (PI / 360.0)
        + t.second as f32 * (PI / 21600.0)
}

/// Minute-hand angle, with a per-second contribution of π/1800.
pub fn minute_angle(t: TimeSample) -> f32 {
    t.minute as f32 * (PI / 30.0) + t.second as f32 * (PI / 1800.0)
}

/// Second-hand angle. Steps in whole-second increments of π/30.
pub fn second_angle(t: TimeSample) -> f32 {
    t.second as f32 * (PI / 30.0)
}

// ── geometry ──────────────────────────────────────────────────────────────

/// Point at distance `length` from `center` along a clock angle.
#[inline]
pub fn radial_point(center: Vec2, angle: f32, length: f32) -> Vec2 {
    center + Vec2::from_clock_angle(angle) * length
}

/// Tapered hand quadrilateral.
///
/// Two vertices straddle the pivot perpendicular to the hand axis at
/// `base_width`, two straddle the tip at `tip_width`. Vertices are in
/// perimeter order (base-left, base-right, tip-right, tip-left), which is a
/// simple convex quad for any non-negative widths; `tip_width == 0` gives a
/// triangular point.
pub fn hand_polygon(
    center: Vec2,
    angle: f32,
    length: f32,
    base_width: f32,
    tip_width: f32,
) -> [Vec2; 4] {
    let dir = Vec2::from_clock_angle(angle);
    let side = dir.perp();
    let tip = center + dir * length;

    [
        center - side * (base_width * 0.5),
        center + side * (base_width * 0.5),
        tip + side * (tip_width * 0.5),
        tip - side * (tip_width * 0.5),
    ]
}

/// Center point for numeral `index` (1..=12), on the circle of radius
/// `radius - inset`. Index 12 sits straight up, 3 to the right.
pub fn numeral_position(index: u32, center: Vec2, radius: f32, inset: f32) -> Vec2 {
    debug_assert!((1..=12).contains(&index), "numeral index {index}");
    let angle = index as f32 * (PI / 6.0);
    radial_point(center, angle, radius - inset)
}

/// 24-hour digital readout, always 8 characters.
pub fn format_digital_time(t: TimeSample) -> String {
    format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)
}

// ── dial fitting ──────────────────────────────────────────────────────────

/// Dial placement within a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dial {
    pub center: Vec2,
    pub radius: f32,
}

impl Dial {
    /// Centers the dial in the viewport, radius half the smaller dimension
    /// minus `margin`. Recomputed on every resize.
    pub fn fit(viewport_w: f32, viewport_h: f32, margin: f32) -> Self {
        Self {
            center: Vec2::new(viewport_w * 0.5, viewport_h * 0.5),
            radius: (viewport_w.min(viewport_h) * 0.5 - margin).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use quarz_engine::coords::Vec2;

    use super::*;
    use crate::sample::TimeSample;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn close_v(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ── angle formulas ────────────────────────────────────────────────────

    #[test]
    fn second_hand_steps_by_six_degrees() {
        assert!(close(second_angle(TimeSample::new(0, 0, 0)), 0.0));
        assert!(close(second_angle(TimeSample::new(0, 0, 15)), PI / 2.0));
        assert!(close(second_angle(TimeSample::new(0, 0, 30)), PI));
        assert!(close(second_angle(TimeSample::new(0, 0, 45)), 1.5 * PI));
    }

    #[test]
    fn minute_hand_includes_second_contribution() {
        // 15 minutes exactly is a quarter turn.
        assert!(close(minute_angle(TimeSample::new(0, 15, 0)), PI / 2.0));
        // 30 extra seconds add half a minute step.
        assert!(close(
            minute_angle(TimeSample::new(0, 15, 30)),
            PI / 2.0 + PI / 60.0
        ));
    }

    #[test]
    fn minute_hand_is_monotonic_across_a_whole_minute() {
        let mut prev = minute_angle(TimeSample::new(0, 15, 0));
        for s in 1..60 {
            let next = minute_angle(TimeSample::new(0, 15, s));
            assert!(next > prev, "regressed at second {s}");
            prev = next;
        }
    }

    #[test]
    fn hands_stay_under_a_full_turn_and_wrap_forward() {
        use std::f32::consts::TAU;

        // Final positions before the wrap sit just below a full turn.
        assert!(second_angle(TimeSample::new(0, 0, 59)) < TAU);
        assert!(minute_angle(TimeSample::new(0, 59, 59)) < TAU);

        // Rolling 59 -> 0 restarts near 12 by stepping forward modulo a
        // turn, never by sweeping backward.
        let s_before = second_angle(TimeSample::new(0, 0, 59));
        let s_after = second_angle(TimeSample::new(0, 1, 0));
        assert!(close((s_after - s_before).rem_euclid(TAU), PI / 30.0));

        let m_before = minute_angle(TimeSample::new(0, 59, 59));
        let m_after = minute_angle(TimeSample::new(1, 0, 0));
        assert!(close((m_after - m_before).rem_euclid(TAU), PI / 1800.0));
    }

    #[test]
    fn hour_hand_uses_twelve_hour_dial() {
        assert!(close(hour_angle(TimeSample::new(3, 0, 0)), PI / 2.0));
        // 15:00 lands at the same place as 03:00.
        assert!(close(hour_angle(TimeSample::new(15, 0, 0)), PI / 2.0));
    }

    #[test]
    fn hour_hand_sweeps_continuously_through_the_hour() {
        // Strictly increasing through a whole hour, including the boundary.
        let before = hour_angle(TimeSample::new(1, 59, 59));
        let at = hour_angle(TimeSample::new(2, 0, 0));
        assert!(before < at, "{before} !< {at}");
        assert!(close(at, PI / 3.0));

        let mut prev = hour_angle(TimeSample::new(4, 0, 0));
        for m in 1..60 {
            let next = hour_angle(TimeSample::new(4, m, 0));
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn end_to_end_angles_at_14_30_45() {
        let t = TimeSample::new(14, 30, 45);
        // 2h -> 60°, 30m -> +15°, 45s -> +0.375° = 75.375°.
        assert!(close(hour_angle(t), 75.375_f32.to_radians()));
        // 30m -> 180°, 45s -> +4.5° = 184.5°.
        assert!(close(minute_angle(t), 184.5_f32.to_radians()));
        assert!(close(second_angle(t), 270.0_f32.to_radians()));
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn hand_polygon_has_expected_shape() {
        let center = Vec2::new(400.0, 400.0);
        let verts = hand_polygon(center, 0.0, 100.0, 16.0, 4.0);

        // Pointing straight up: base straddles the pivot horizontally.
        assert!(close_v(verts[0], Vec2::new(392.0, 400.0)));
        assert!(close_v(verts[1], Vec2::new(408.0, 400.0)));
        assert!(close_v(verts[2], Vec2::new(402.0, 300.0)));
        assert!(close_v(verts[3], Vec2::new(398.0, 300.0)));

        // Tip midpoint sits exactly `length` from the pivot.
        let tip_mid = (verts[2] + verts[3]) * 0.5;
        assert!(close((tip_mid - center).length(), 100.0));
    }

    #[test]
    fn hand_polygon_with_zero_tip_width_collapses_the_tip() {
        let verts = hand_polygon(Vec2::new(0.0, 0.0), PI / 2.0, 50.0, 8.0, 0.0);
        assert!(close_v(verts[2], verts[3]));
        assert!(close_v(verts[2], Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn hand_polygon_vertices_are_symmetric_about_the_axis() {
        let center = Vec2::new(10.0, 20.0);
        let angle = 1.234;
        let verts = hand_polygon(center, angle, 80.0, 12.0, 2.0);

        let dir = Vec2::from_clock_angle(angle);
        // Base pair and tip pair project to the same axial distance.
        let axial = |v: Vec2| (v.x - center.x) * dir.x + (v.y - center.y) * dir.y;
        assert!(close(axial(verts[0]), axial(verts[1])));
        assert!(close(axial(verts[2]), axial(verts[3])));
        assert!(close(axial(verts[2]), 80.0));
    }

    // ── numerals & readout ────────────────────────────────────────────────

    #[test]
    fn numeral_positions_on_the_reference_dial() {
        let center = Vec2::new(400.0, 400.0);
        assert!(close_v(
            numeral_position(12, center, 250.0, 25.0),
            Vec2::new(400.0, 175.0)
        ));
        assert!(close_v(
            numeral_position(6, center, 250.0, 25.0),
            Vec2::new(400.0, 625.0)
        ));
        assert!(close_v(
            numeral_position(3, center, 250.0, 25.0),
            Vec2::new(625.0, 400.0)
        ));
    }

    #[test]
    fn digital_readout_is_zero_padded_24h() {
        assert_eq!(format_digital_time(TimeSample::new(0, 0, 0)), "00:00:00");
        assert_eq!(format_digital_time(TimeSample::new(14, 30, 45)), "14:30:45");
        assert_eq!(format_digital_time(TimeSample::new(23, 59, 59)), "23:59:59");
        assert_eq!(format_digital_time(TimeSample::new(9, 5, 7)).len(), 8);
    }

    // ── fitting ───────────────────────────────────────────────────────────

    #[test]
    fn fit_centers_and_sizes_by_smaller_dimension() {
        let d = Dial::fit(800.0, 800.0, 150.0);
        assert!(close_v(d.center, Vec2::new(400.0, 400.0)));
        assert!(close(d.radius, 250.0));

        let wide = Dial::fit(1200.0, 600.0, 50.0);
        assert!(close_v(wide.center, Vec2::new(600.0, 300.0)));
        assert!(close(wide.radius, 250.0));
    }

    #[test]
    fn fit_never_goes_negative() {
        let tiny = Dial::fit(40.0, 40.0, 100.0);
        assert!(tiny.radius >= 0.0);
    }
}
