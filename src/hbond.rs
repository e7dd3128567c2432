//! Hydrogen-bond enumerator (component C5).

use crate::constants::{A_HB_MIN, D_HB};
use crate::geometry::dihedral_deg;
use crate::geometry::Vec3;
use crate::ids::ResidueIndex;
use crate::structure::Structure;
use crate::templates::{hb_atoms, wc_template};

#[derive(Debug, Clone)]
pub struct HydrogenBond {
    pub donor_atom: String,
    pub acceptor_atom: String,
    pub donor_residue: ResidueIndex,
    pub acceptor_residue: ResidueIndex,
    pub distance: f64,
}

pub struct HbResult {
    pub bonds: Vec<HydrogenBond>,
    pub wc_match_count: usize,
}

/// Enumerates every donor/acceptor combination between residues `i` and
/// `j` (folded letters `fold_i`/`fold_j`), keeping the ones that pass the
/// distance and pseudo-angle gates. Also reports how many of the reported
/// bonds line up with the canonical Watson-Crick template for this base
/// pair, feeding the classifier's full/partial-match decision (C6).
pub fn enumerate_hydrogen_bonds(
    structure: &Structure,
    i: usize,
    fold_i: char,
    j: usize,
    fold_j: char,
) -> HbResult {
    let mut bonds = Vec::new();

    for &(from, to, from_fold, to_fold) in &[(i, j, fold_i, fold_j), (j, i, fold_j, fold_i)] {
        for donor in hb_atoms(from_fold).iter().filter(|a| a.donor) {
            let Some(donor_atom) = structure.find_atom(from, donor.name) else { continue };
            let Some(neighbour_atom) = structure.find_atom(from, donor.neighbour) else { continue };

            for acceptor in hb_atoms(to_fold).iter().filter(|a| a.acceptor) {
                let Some(acceptor_atom) = structure.find_atom(to, acceptor.name) else { continue };

                let distance = donor_atom.pos.distance(acceptor_atom.pos);
                if distance > D_HB {
                    continue;
                }

                let pseudo_angle = pseudo_angle_deg(neighbour_atom.pos, donor_atom.pos, acceptor_atom.pos);
                if pseudo_angle < A_HB_MIN {
                    continue;
                }

                bonds.push(HydrogenBond {
                    donor_atom: donor.name.to_string(),
                    acceptor_atom: acceptor.name.to_string(),
                    donor_residue: ResidueIndex(from),
                    acceptor_residue: ResidueIndex(to),
                    distance,
                });
            }
        }
    }

    // Within a candidate, (i,j) order is canonical; de-duplicate bonds that
    // were found from both donor-acceptor scan directions (shouldn't happen
    // given donor/acceptor roles are exclusive per atom, but an atom can in
    // principle appear in both residues' tables if they share a letter).
    bonds.sort_by(|a, b| (a.donor_residue.0, &a.donor_atom, &a.acceptor_atom).cmp(&(b.donor_residue.0, &b.donor_atom, &b.acceptor_atom)));
    bonds.dedup_by(|a, b| a.donor_residue == b.donor_residue && a.donor_atom == b.donor_atom && a.acceptor_atom == b.acceptor_atom);

    let wc_match_count = wc_template(fold_i, fold_j)
        .map(|tpl| count_wc_matches(&bonds, tpl.bonds))
        .unwrap_or(0);

    HbResult { bonds, wc_match_count }
}

fn count_wc_matches(bonds: &[HydrogenBond], expected: &[(&str, &str)]) -> usize {
    expected
        .iter()
        .filter(|(a, b)| {
            bonds.iter().any(|bond| {
                (bond.donor_atom == *a && bond.acceptor_atom == *b)
                    || (bond.donor_atom == *b && bond.acceptor_atom == *a)
            })
        })
        .count()
}

/// `donor-neighbour`, `donor`, `acceptor` pseudo-angle; reuses the same
/// three-point angle calculation that backs the dihedral torsion
/// (`crate::geometry::dihedral_deg` generalises to a genuine dihedral, so
/// here we compute the angle directly rather than forcing a fourth point).
fn pseudo_angle_deg(neighbour: Vec3, donor: Vec3, acceptor: Vec3) -> f64 {
    let v1 = (neighbour - donor).normalized();
    let v2 = (acceptor - donor).normalized();
    v1.dot(v2).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Glycosidic torsion `chi` for syn/anti determination (C6 step 4):
/// `O4'-C1'-N9/N1-C4/C2`.
pub fn glycosidic_chi(structure: &Structure, residue_index: usize, is_purine: bool) -> Option<f64> {
    let o4p = structure.find_atom(residue_index, "O4'")?;
    let c1p = structure.find_atom(residue_index, "C1'")?;
    let (base_n, base_c) = if is_purine { ("N9", "C4") } else { ("N1", "C2") };
    let n = structure.find_atom(residue_index, base_n)?;
    let c = structure.find_atom(residue_index, base_c)?;
    Some(dihedral_deg(o4p.pos, c1p.pos, n.pos, c.pos))
}
