//! Candidate filter (component C4): a cheap O(N^2) prune on origin-origin
//! distance and plane geometry, run before the expensive hydrogen-bond
//! enumeration.

use crate::constants::{
    D_CAND2, PAIR_NORMAL_ANGLE_MAX_DEG, PAIR_PERP_MAX, STACK_LATERAL_MAX,
    STACK_NORMAL_ANGLE_MAX_DEG, STACK_PERP_MAX,
};
use crate::frame::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateBand {
    /// Close to in-plane: worth testing for hydrogen bonds.
    Pair,
    /// Near-parallel and offset: worth testing for stacking.
    Stack,
}

/// Evaluates the cheap geometric predicates for one `(i, j)` candidate and
/// returns every band it survives into (possibly both, possibly neither).
/// This filter never produces a final verdict (SPEC_FULL §4.3).
pub fn candidate_bands(frame_i: &Frame, frame_j: &Frame) -> Vec<CandidateBand> {
    let delta = frame_j.origin - frame_i.origin;
    let d2 = delta.dot(delta);
    if d2 > D_CAND2 {
        return Vec::new();
    }

    let cos_theta_n = frame_i.normal.dot(frame_j.normal).abs().min(1.0);
    let theta_n_deg = cos_theta_n.acos().to_degrees();

    let mut bands = Vec::new();

    if theta_n_deg <= PAIR_NORMAL_ANGLE_MAX_DEG {
        let perp_i = delta.dot(frame_i.normal).abs();
        if perp_i <= PAIR_PERP_MAX {
            bands.push(CandidateBand::Pair);
        }
    }

    if theta_n_deg <= STACK_NORMAL_ANGLE_MAX_DEG {
        let perp_i = delta.dot(frame_i.normal).abs();
        let lateral = (delta - frame_i.normal * delta.dot(frame_i.normal)).norm();
        if perp_i <= STACK_PERP_MAX && lateral <= STACK_LATERAL_MAX {
            bands.push(CandidateBand::Stack);
        }
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    fn frame(origin: Vec3, normal: Vec3) -> Frame {
        Frame { origin, normal: normal.normalized(), long_axis: Vec3::new(1.0, 0.0, 0.0) }
    }

    #[test]
    fn too_far_apart_yields_no_bands() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(100.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(candidate_bands(&a, &b).is_empty());
    }

    #[test]
    fn coplanar_close_pair_gets_pair_band() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let bands = candidate_bands(&a, &b);
        assert!(bands.contains(&CandidateBand::Pair));
    }

    #[test]
    fn stacked_offset_gets_stack_band() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(1.0, 0.5, 3.4), Vec3::new(0.0, 0.0, 1.0));
        let bands = candidate_bands(&a, &b);
        assert!(bands.contains(&CandidateBand::Stack));
    }

    #[test]
    fn perpendicular_planes_get_neither_band() {
        let a = frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = frame(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(candidate_bands(&a, &b).is_empty());
    }
}
