//! Static reference tables: ring geometry templates (for frame fitting,
//! C3), edge-atom membership tables and Watson-Crick templates (for
//! classification, C6), and the Saenger lookup.
//!
//! Follows the docking engine's `lazy_static! { ... }` pattern for its
//! `ATOMNUMBER`/`ATOMRES` lookup tables in `dfire.rs`: read-only process
//! state built once, never mutated (SPEC_FULL §5).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::geometry::Vec3;

/// Idealised planar ring geometry for one canonical base, expressed in a
/// local frame: origin at the ring centroid, `z` the frame normal, `x`
/// anti-parallel to the long axis (see [`long_axis_local`]).
pub fn ring_template(fold: char) -> &'static [(&'static str, Vec3)] {
    match fold {
        'A' | 'G' | 'I' => PURINE_RING,
        _ => PYRIMIDINE_RING,
    }
}

/// Local-frame long axis, before rotation by the fit.
pub fn long_axis_local() -> Vec3 {
    Vec3::new(-1.0, 0.0, 0.0)
}

/// Local-frame normal, before rotation by the fit.
pub fn normal_local() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}

// Regular-hexagon placement of the six-membered ring shared by purines and
// pyrimidines (bond length ~1.39 Angstrom, the average aromatic C-C/C-N
// distance), numbered N1..C6 around the ring. Purines fuse a five-membered
// imidazole ring (N7, C8, N9) onto the C4-C5 edge.
const PYRIMIDINE_RING: &[(&str, Vec3)] = &[
    ("N1", Vec3 { x: 1.3900, y: 0.0000, z: 0.0 }),
    ("C2", Vec3 { x: 0.6950, y: 1.2042, z: 0.0 }),
    ("N3", Vec3 { x: -0.6950, y: 1.2042, z: 0.0 }),
    ("C4", Vec3 { x: -1.3900, y: 0.0000, z: 0.0 }),
    ("C5", Vec3 { x: -0.6950, y: -1.2042, z: 0.0 }),
    ("C6", Vec3 { x: 0.6950, y: -1.2042, z: 0.0 }),
];

const PURINE_RING: &[(&str, Vec3)] = &[
    ("N1", Vec3 { x: 1.3900, y: 0.0000, z: 0.0 }),
    ("C2", Vec3 { x: 0.6950, y: 1.2042, z: 0.0 }),
    ("N3", Vec3 { x: -0.6950, y: 1.2042, z: 0.0 }),
    ("C4", Vec3 { x: -1.3900, y: 0.0000, z: 0.0 }),
    ("C5", Vec3 { x: -0.6950, y: -1.2042, z: 0.0 }),
    ("C6", Vec3 { x: 0.6950, y: -1.2042, z: 0.0 }),
    ("N7", Vec3 { x: -1.2780, y: -2.4975, z: 0.0 }),
    ("C8", Vec3 { x: -2.6780, y: -2.2475, z: 0.0 }),
    ("N9", Vec3 { x: -2.7780, y: -0.8044, z: 0.0 }),
];

/// Watson-Crick, Hoogsteen, and Sugar edge atom membership, used by the
/// pair classifier to tally which edge a set of hydrogen bonds engages.
/// Folded (uppercase) letters only; callers fold `BaseLetter` before
/// lookup.
pub struct EdgeAtoms {
    pub watson_crick: &'static [&'static str],
    pub hoogsteen: &'static [&'static str],
    pub sugar: &'static [&'static str],
}

pub fn edge_atoms(fold: char) -> EdgeAtoms {
    if matches!(fold, 'A' | 'G' | 'I') {
        EdgeAtoms {
            watson_crick: &["N1", "C2", "N6", "O6", "N2"],
            hoogsteen: &["N6", "N7", "C8", "O6"],
            sugar: &["N3", "O2'", "C2'"],
        }
    } else {
        EdgeAtoms {
            watson_crick: &["N3", "O2", "N4", "O4"],
            hoogsteen: &["O4", "C5", "C6"],
            sugar: &["O2", "O2'"],
        }
    }
}

/// One donor/acceptor pair expected in a full canonical Watson-Crick match
/// for an unordered base pair, keyed by the folded letters sorted so
/// lookups don't need to try both orderings.
pub struct WcTemplate {
    pub bonds: &'static [(&'static str, &'static str)],
}

lazy_static! {
    static ref WC_TEMPLATES: HashMap<(char, char), WcTemplate> = {
        let mut m = HashMap::new();
        m.insert(('C', 'G'), WcTemplate { bonds: &[("O6", "N4"), ("N1", "N3"), ("N2", "O2")] });
        m.insert(('A', 'T'), WcTemplate { bonds: &[("N6", "O4"), ("N1", "N3")] });
        m.insert(('A', 'U'), WcTemplate { bonds: &[("N6", "O4"), ("N1", "N3")] });
        m
    };

    /// Saenger roman-numeral lookup, keyed by (sorted folded letters,
    /// orientation). Left intentionally sparse: SPEC_FULL §9 calls out the
    /// exact extension to wobble and near-canonical patterns as an open
    /// question to resolve from a golden set, not to invent; see
    /// DESIGN.md.
    static ref SAENGER: HashMap<(char, char, &'static str), &'static str> = {
        let mut m = HashMap::new();
        m.insert(('C', 'G', "cis"), "XIX");
        m.insert(('A', 'T', "cis"), "XX");
        m.insert(('A', 'U', "cis"), "XX");
        m
    };
}

/// Looks up the expected WC bond set for an unordered pair of folded
/// letters, trying both orderings.
pub fn wc_template(a: char, b: char) -> Option<&'static WcTemplate> {
    WC_TEMPLATES.get(&(a, b)).or_else(|| WC_TEMPLATES.get(&(b, a)))
}

/// Looks up the Saenger roman numeral for a full canonical WC match.
/// Returns `"n/a"` when the pair is geometrically canonical WC but has no
/// cataloged Saenger entry (e.g. the G-U wobble, deliberately excluded
/// pending a golden-set decision).
pub fn saenger_lookup(a: char, b: char, orientation: &str) -> &'static str {
    SAENGER
        .get(&(a, b, orientation))
        .or_else(|| SAENGER.get(&(b, a, orientation)))
        .copied()
        .unwrap_or("n/a")
}

/// Donor/acceptor atom tables per folded base letter, used by the
/// hydrogen-bond enumerator. Each entry is `(atom, is_donor, is_acceptor,
/// heavy_neighbour)`; `heavy_neighbour` is the atom used to form the
/// donor-neighbour-acceptor pseudo-angle when the atom is a donor.
pub struct HbAtom {
    pub name: &'static str,
    pub donor: bool,
    pub acceptor: bool,
    pub neighbour: &'static str,
}

pub fn hb_atoms(fold: char) -> &'static [HbAtom] {
    match fold {
        'A' | 'I' => &[
            HbAtom { name: "N6", donor: true, acceptor: false, neighbour: "C6" },
            HbAtom { name: "N1", donor: false, acceptor: true, neighbour: "C2" },
            HbAtom { name: "N7", donor: false, acceptor: true, neighbour: "C8" },
            HbAtom { name: "N3", donor: false, acceptor: true, neighbour: "C2" },
        ],
        'G' => &[
            HbAtom { name: "N1", donor: true, acceptor: false, neighbour: "C2" },
            HbAtom { name: "N2", donor: true, acceptor: false, neighbour: "C2" },
            HbAtom { name: "O6", donor: false, acceptor: true, neighbour: "C6" },
            HbAtom { name: "N7", donor: false, acceptor: true, neighbour: "C8" },
            HbAtom { name: "N3", donor: false, acceptor: true, neighbour: "C2" },
        ],
        'C' => &[
            HbAtom { name: "N4", donor: true, acceptor: false, neighbour: "C4" },
            HbAtom { name: "N3", donor: false, acceptor: true, neighbour: "C2" },
            HbAtom { name: "O2", donor: false, acceptor: true, neighbour: "C2" },
        ],
        _ => &[
            // U / T
            HbAtom { name: "N3", donor: true, acceptor: false, neighbour: "C2" },
            HbAtom { name: "O2", donor: false, acceptor: true, neighbour: "C2" },
            HbAtom { name: "O4", donor: false, acceptor: true, neighbour: "C4" },
        ],
    }
}
