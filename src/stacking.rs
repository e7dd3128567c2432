//! Stacking detector (component C7): verdict for candidates that carry the
//! `Stack` band but either failed pairing or are being independently
//! evaluated for a stacking annotation alongside a pair.

use crate::constants::{STACK_LATERAL_MAX, STACK_PERP_MAX, STACK_PERP_MIN};
use crate::frame::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackFace {
    /// `i`'s "top" face (positive normal direction) touches `j`.
    Top,
    /// `i`'s "bottom" face (negative normal direction) touches `j`.
    Bottom,
}

#[derive(Debug, Clone, Copy)]
pub struct StackVerdict {
    pub face_i: StackFace,
    pub perpendicular_offset: f64,
    pub lateral_offset: f64,
}

/// Re-checks the full stacking geometry (perpendicular band plus lateral
/// containment) for a candidate that already passed the cheap `Stack` band
/// in C4, and reports which face of `i` faces `j`.
///
/// SPEC_FULL §4.6: a stack is reported independently of any pair verdict
/// for the same `(i, j)` — the two are not mutually exclusive outcomes.
pub fn detect_stack(frame_i: &Frame, frame_j: &Frame) -> Option<StackVerdict> {
    let delta = frame_j.origin - frame_i.origin;
    let perp = delta.dot(frame_i.normal);
    let perpendicular_offset = perp.abs();

    if !(STACK_PERP_MIN..=STACK_PERP_MAX).contains(&perpendicular_offset) {
        return None;
    }

    let lateral_offset = (delta - frame_i.normal * perp).norm();
    if lateral_offset > STACK_LATERAL_MAX {
        return None;
    }

    let face_i = if perp >= 0.0 { StackFace::Top } else { StackFace::Bottom };

    Some(StackVerdict { face_i, perpendicular_offset, lateral_offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    fn frame(origin: Vec3, normal: Vec3) -> Frame {
        Frame { origin, normal: normal.normalized(), long_axis: Vec3::new(1.0, 0.0, 0.0) }
    }

    #[test]
    fn stacked_pair_within_band_is_detected_on_top_face() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(0.5, 0.5, 3.4), Vec3::new(0.0, 0.0, 1.0));
        let verdict = detect_stack(&a, &b).expect("should stack");
        assert_eq!(verdict.face_i, StackFace::Top);
        assert!((verdict.perpendicular_offset - 3.4).abs() < 1e-9);
    }

    #[test]
    fn below_the_plane_is_bottom_face() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(0.0, 0.0, -3.4), Vec3::new(0.0, 0.0, 1.0));
        let verdict = detect_stack(&a, &b).expect("should stack");
        assert_eq!(verdict.face_i, StackFace::Bottom);
    }

    #[test]
    fn too_close_is_not_a_stack() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(detect_stack(&a, &b).is_none());
    }

    #[test]
    fn too_far_laterally_is_not_a_stack() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(8.0, 0.0, 3.4), Vec3::new(0.0, 0.0, 1.0));
        assert!(detect_stack(&a, &b).is_none());
    }
}
