// Centralised geometric and chemical thresholds, following the same
// single-source-of-truth pattern the docking engine used for its own
// tunables (translation/rotation step, interface cutoff, ...).

// Candidate-filter cutoff on origin-to-origin distance (Angstrom).
pub const D_CAND: f64 = 15.0;
pub const D_CAND2: f64 = D_CAND * D_CAND;

// Maximum inter-normal angle (degrees) for a candidate to survive as a
// potential hydrogen-bonded pair.
pub const PAIR_NORMAL_ANGLE_MAX_DEG: f64 = 65.0;

// Maximum perpendicular (out-of-plane) offset of the origin vector onto
// either frame's plane for a candidate to survive as a potential pair.
pub const PAIR_PERP_MAX: f64 = 2.5;

// Maximum inter-normal angle (degrees) for a candidate to survive as a
// potential stack.
pub const STACK_NORMAL_ANGLE_MAX_DEG: f64 = 30.0;

// Heavy-atom donor-acceptor distance cutoff for a hydrogen bond (Angstrom).
pub const D_HB: f64 = 3.4;

// Minimum donor-donor_neighbour-acceptor pseudo-angle (degrees).
pub const A_HB_MIN: f64 = 90.0;

// Stacking perpendicular (inter-plane) separation band (Angstrom).
pub const STACK_PERP_MIN: f64 = 2.8;
pub const STACK_PERP_MAX: f64 = 4.2;

// Stacking lateral (in-plane) offset limit (Angstrom).
pub const STACK_LATERAL_MAX: f64 = 5.0;

// Glycosidic torsion bound defining the `syn` range: chi in (-90, 90).
pub const SYN_MIN_DEG: f64 = -90.0;
pub const SYN_MAX_DEG: f64 = 90.0;

// Default model number (1-based) picked when `options.nmr_model` is absent.
pub const DEFAULT_MODEL: i32 = 1;
