//! Base reference frames (component C3): per-residue origin + orthonormal
//! axes obtained by fitting the residue's ring atoms to a standard
//! template (`crate::templates::ring_template`).

use crate::geometry::{fit_rotation, Vec3};
use crate::structure::Structure;
use crate::templates::{long_axis_local, normal_local, ring_template};

#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub origin: Vec3,
    pub normal: Vec3,
    pub long_axis: Vec3,
}

/// Builds a frame for residue `residue_index`, whose folded base letter is
/// `fold`. Returns `None` when fewer than 3 template ring atoms are present
/// (frame-invalid, per the data-model invariant in SPEC_FULL §4.2) — the
/// caller falls back to the stacking-only centroid frame in that case.
pub fn build_frame(structure: &Structure, residue_index: usize, fold: char) -> Option<Frame> {
    let template = ring_template(fold);
    let observed: Vec<(&str, Vec3)> = structure
        .atoms_of(residue_index)
        .iter()
        .map(|a| (a.name.as_str(), a.pos))
        .collect();

    let fit = fit_rotation(template, &observed)?;
    Some(Frame {
        origin: fit.origin,
        normal: fit.rotation.rotate(normal_local()).normalized(),
        long_axis: fit.rotation.rotate(long_axis_local()).normalized(),
    })
}

/// Fallback frame for a residue whose ring couldn't be fit: centroid
/// origin, normal derived from the best-effort plane through whatever
/// atoms are present. Used only to keep stacking detection possible per
/// SPEC_FULL §4.2 ("stacks still attempted via origin/normal from an atom
/// centroid fallback").
pub fn centroid_frame(structure: &Structure, residue_index: usize) -> Option<Frame> {
    let atoms = structure.atoms_of(residue_index);
    if atoms.len() < 3 {
        return None;
    }
    let n = atoms.len() as f64;
    let centroid = atoms.iter().fold(Vec3::ZERO, |acc, a| acc + a.pos) / n;

    let a = atoms[0].pos - centroid;
    let b = atoms[atoms.len() / 2].pos - centroid;
    let normal = a.cross(b).normalized();
    if normal.norm() < 0.5 {
        return None;
    }
    Some(Frame {
        origin: centroid,
        normal,
        long_axis: a.normalized(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ResidueId;
    use crate::structure::Atom;
    use crate::templates::ring_template;

    fn structure_from_template(fold: char) -> Structure {
        let mut s = Structure::new();
        let atoms: Vec<Atom> = ring_template(fold)
            .iter()
            .map(|(name, pos)| Atom::new(*name, &name[..1], *pos))
            .collect();
        s.push_residue(ResidueId::new("A", 1, None, 1), "X", atoms);
        s
    }

    #[test]
    fn frame_on_unmoved_template_has_origin_at_zero() {
        let s = structure_from_template('G');
        let frame = build_frame(&s, 0, 'G').expect("frame should fit");
        assert!(frame.origin.distance(Vec3::ZERO) < 1e-6);
        assert!((frame.normal.dot(Vec3::new(0.0, 0.0, 1.0)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn frame_translates_with_the_structure() {
        let mut s = structure_from_template('C');
        let shift = Vec3::new(3.0, 4.0, 5.0);
        for atom in s.atoms.iter_mut() {
            atom.pos = atom.pos + shift;
        }
        let frame = build_frame(&s, 0, 'C').expect("frame should fit");
        assert!(frame.origin.distance(shift) < 1e-6);
    }

    #[test]
    fn frame_fails_with_too_few_ring_atoms() {
        let mut s = Structure::new();
        s.push_residue(
            ResidueId::new("A", 1, None, 1),
            "X",
            vec![Atom::new("N1", "N", Vec3::ZERO), Atom::new("C2", "C", Vec3::new(1.0, 0.0, 0.0))],
        );
        assert!(build_frame(&s, 0, 'G').is_none());
    }
}
