//! Pair classifier (component C6): edge assignment, cis/trans
//! orientation, Watson-Crick sub-classification with Saenger lookup, and
//! the syn/anti determination.

use crate::frame::Frame;
use crate::hbond::{glycosidic_chi, HydrogenBond};
use crate::ids::ResidueIndex;
use crate::structure::Structure;
use crate::templates::{edge_atoms, saenger_lookup, wc_template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    WatsonCrick,
    Hoogsteen,
    Sugar,
    WcPlus,
    WcMinus,
    Unresolved,
}

impl Edge {
    pub fn code(self) -> char {
        match self {
            Edge::WatsonCrick => 'W',
            Edge::Hoogsteen => 'H',
            Edge::Sugar => 'S',
            Edge::WcPlus => '+',
            Edge::WcMinus => '-',
            Edge::Unresolved => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Cis,
    Tran,
}

impl Orientation {
    pub fn lw_str(self) -> &'static str {
        match self {
            Orientation::Cis => "cis",
            Orientation::Tran => "tran",
        }
    }

    /// Short form used in `pair_type_counts` keys (C10).
    pub fn short(self) -> &'static str {
        match self {
            Orientation::Cis => "cis",
            Orientation::Tran => "tra",
        }
    }
}

pub struct PairVerdict {
    pub edge_i: Edge,
    pub edge_j: Edge,
    pub orientation: Orientation,
    pub saenger: Option<&'static str>,
    pub syn_i: bool,
    pub syn_j: bool,
    pub bond_count: usize,
    /// `true` when both edges resolved to something other than
    /// `Unresolved`; `false` signals the AmbiguousPair path (C7 §4.5 /
    /// §7), which the caller turns into `kind = Unknown`.
    pub is_classifiable: bool,
}

/// Runs C6 over a candidate's hydrogen-bond set. Assumes the caller has
/// already established that `bonds` is non-empty (pairs with zero bonds
/// are C7's responsibility, not C6's).
pub fn classify_pair(
    structure: &Structure,
    i: ResidueIndex,
    fold_i: char,
    is_purine_i: bool,
    frame_i: &Frame,
    j: ResidueIndex,
    fold_j: char,
    is_purine_j: bool,
    frame_j: &Frame,
    bonds: &[HydrogenBond],
    wc_match_count: usize,
) -> PairVerdict {
    let edge_i = dominant_edge(bonds, i, fold_i);
    let edge_j = dominant_edge(bonds, j, fold_j);

    let orientation = if frame_i.normal.dot(frame_j.normal) > 0.0 {
        Orientation::Cis
    } else {
        Orientation::Tran
    };

    let (edge_i, edge_j, saenger) = if edge_i == Edge::WatsonCrick && edge_j == Edge::WatsonCrick {
        watson_crick_subclass(fold_i, fold_j, orientation, wc_match_count)
    } else {
        (edge_i, edge_j, None)
    };

    let syn_i = is_syn(structure, i.0, is_purine_i);
    let syn_j = is_syn(structure, j.0, is_purine_j);

    let is_classifiable = !(edge_i == Edge::Unresolved && edge_j == Edge::Unresolved);

    PairVerdict {
        edge_i,
        edge_j,
        orientation,
        saenger,
        syn_i,
        syn_j,
        bond_count: bonds.len(),
        is_classifiable,
    }
}

fn dominant_edge(bonds: &[HydrogenBond], residue: ResidueIndex, fold: char) -> Edge {
    let atoms = edge_atoms(fold);
    let mut wc = 0usize;
    let mut hoogsteen = 0usize;
    let mut sugar = 0usize;

    for bond in bonds {
        let atom_name: &str = if bond.donor_residue == residue {
            &bond.donor_atom
        } else if bond.acceptor_residue == residue {
            &bond.acceptor_atom
        } else {
            continue;
        };

        if atoms.watson_crick.contains(&atom_name) {
            wc += 1;
        }
        if atoms.hoogsteen.contains(&atom_name) {
            hoogsteen += 1;
        }
        if atoms.sugar.contains(&atom_name) {
            sugar += 1;
        }
    }

    // Tie-break order W > H > S (SPEC_FULL §4.5 step 1).
    if wc == 0 && hoogsteen == 0 && sugar == 0 {
        Edge::Unresolved
    } else if wc >= hoogsteen && wc >= sugar {
        Edge::WatsonCrick
    } else if hoogsteen >= sugar {
        Edge::Hoogsteen
    } else {
        Edge::Sugar
    }
}

fn watson_crick_subclass(
    fold_i: char,
    fold_j: char,
    orientation: Orientation,
    wc_match_count: usize,
) -> (Edge, Edge, Option<&'static str>) {
    let expected = wc_template(fold_i, fold_j).map(|t| t.bonds.len()).unwrap_or(0);

    if expected > 0 && wc_match_count == expected {
        let edge = match orientation {
            Orientation::Cis => Edge::WcPlus,
            Orientation::Tran => Edge::WcMinus,
        };
        let saenger = saenger_lookup(fold_i.to_ascii_uppercase(), fold_j.to_ascii_uppercase(), orientation.lw_str());
        (edge, edge, Some(saenger))
    } else {
        (Edge::WatsonCrick, Edge::WatsonCrick, Some("n/a"))
    }
}

fn is_syn(structure: &Structure, residue_index: usize, is_purine: bool) -> bool {
    match glycosidic_chi(structure, residue_index, is_purine) {
        Some(chi) => chi > crate::constants::SYN_MIN_DEG && chi < crate::constants::SYN_MAX_DEG,
        None => false,
    }
}
