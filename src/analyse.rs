//! Top-level orchestration: wires C2-C10 together over one `Structure`,
//! from base-letter assignment through statistics (SPEC_FULL §2 data
//! flow, §5 concurrency model).

use crate::base_letter::BaseLetter;
use crate::candidate::{candidate_bands, CandidateBand};
use crate::classify::classify_pair;
use crate::diagnostics::Diagnostic;
use crate::error::AnalysisError;
use crate::frame::{build_frame, centroid_frame, Frame};
use crate::hbond::enumerate_hydrogen_bonds;
use crate::ids::BaseIndex;
use crate::multiplet;
use crate::options::Options;
use crate::record::{Core, PairKind};
use crate::reduce::{self, RawOutcome};
use crate::stacking::detect_stack;
use crate::stats;
use crate::structure::Structure;

struct Context {
    residue_index: usize,
    base_index: BaseIndex,
    letter: BaseLetter,
    frame: Frame,
    can_pair: bool,
}

/// Runs the full analysis. `diagnostics` collects non-fatal conditions
/// (SPEC_FULL §7); passing an empty `Vec` and discarding it is fine for
/// callers that don't care.
pub fn analyse(
    structure: &Structure,
    options: &Options,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Core, AnalysisError> {
    let classifications = structure.classify_residues();
    let mut contexts = Vec::new();
    let mut next_ordinal = 1u32;

    for (residue_index, classification) in classifications.into_iter().enumerate() {
        let residue = &structure.residues[residue_index];

        if !classification.recognised {
            diagnostics.push(Diagnostic::SkippedResidue {
                residue: residue.id.clone(),
                reason: "not recognised as a base".to_string(),
            });
            continue;
        }

        if let Some(chain_filter) = &options.chain_filter {
            if !chain_filter.contains(&residue.id.chain_id) {
                continue;
            }
        }

        let fold = classification.letter.fold();
        let frame = build_frame(structure, residue_index, fold);
        let can_pair = frame.is_some();
        let frame = frame.or_else(|| centroid_frame(structure, residue_index));

        let Some(frame) = frame else {
            diagnostics.push(Diagnostic::SkippedResidue {
                residue: residue.id.clone(),
                reason: "frame could not be fit".to_string(),
            });
            continue;
        };

        let base_index = BaseIndex::new(next_ordinal);
        next_ordinal += 1;

        contexts.push(Context {
            residue_index,
            base_index,
            letter: classification.letter,
            frame,
            can_pair,
        });
    }

    let total_bases = contexts.len();
    if total_bases == 0 {
        log::warn!("structure has zero recognised residues reaching the core; returning an empty result");
    }
    let mut raw: Vec<RawOutcome> = Vec::new();

    for a in 0..contexts.len() {
        for b in (a + 1)..contexts.len() {
            let (ctx_i, ctx_j) = (&contexts[a], &contexts[b]);
            let bands = candidate_bands(&ctx_i.frame, &ctx_j.frame);
            if bands.is_empty() {
                continue;
            }

            if bands.contains(&CandidateBand::Pair) && ctx_i.can_pair && ctx_j.can_pair {
                if let Some(outcome) = try_pair(structure, ctx_i, ctx_j, diagnostics) {
                    raw.push(outcome);
                }
            }

            if bands.contains(&CandidateBand::Stack) {
                if detect_stack(&ctx_i.frame, &ctx_j.frame).is_some() {
                    raw.push(stack_outcome(structure, ctx_i, ctx_j));
                }
            }
        }
    }

    let records = reduce::finalize(raw);
    for record in &records {
        if record.i >= record.j {
            return Err(AnalysisError::InvariantViolation(format!(
                "pair ({}, {}) violates i < j",
                record.i, record.j
            )));
        }
        if record.kind == PairKind::Pair && record.lw.as_deref().unwrap_or("").is_empty() {
            return Err(AnalysisError::InvariantViolation(format!(
                "pair ({}, {}) has kind=Pair with no lw code",
                record.i, record.j
            )));
        }
    }

    let multiplets = multiplet::synthesize(&records);
    let aggregated = stats::aggregate(&records, total_bases);

    Ok(Core {
        base_pairs: records,
        multiplets,
        stats: aggregated,
    })
}

fn try_pair(
    structure: &Structure,
    ctx_i: &Context,
    ctx_j: &Context,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RawOutcome> {
    let fold_i = ctx_i.letter.fold();
    let fold_j = ctx_j.letter.fold();

    let hb = enumerate_hydrogen_bonds(structure, ctx_i.residue_index, fold_i, ctx_j.residue_index, fold_j);
    if hb.bonds.is_empty() {
        return None;
    }

    let verdict = classify_pair(
        structure,
        crate::ids::ResidueIndex(ctx_i.residue_index),
        fold_i,
        ctx_i.letter.is_purine(),
        &ctx_i.frame,
        crate::ids::ResidueIndex(ctx_j.residue_index),
        fold_j,
        ctx_j.letter.is_purine(),
        &ctx_j.frame,
        &hb.bonds,
        hb.wc_match_count,
    );

    let residue_i = structure.residues[ctx_i.residue_index].id.clone();
    let residue_j = structure.residues[ctx_j.residue_index].id.clone();

    if !verdict.is_classifiable {
        diagnostics.push(Diagnostic::AmbiguousPair { i: residue_i.clone(), j: residue_j.clone() });
        return Some(RawOutcome {
            i: ctx_i.base_index,
            j: ctx_j.base_index,
            residue_i,
            residue_j,
            base_i: ctx_i.letter,
            base_j: ctx_j.letter,
            kind: PairKind::Unknown,
            lw: None,
            orientation: None,
            syn_i: verdict.syn_i,
            syn_j: verdict.syn_j,
            saenger: None,
            note: Some(format!("unresolved edge, {} hydrogen bond(s)", verdict.bond_count)),
            bond_count: verdict.bond_count,
        });
    }

    let lw = format!("{}/{}", verdict.edge_i.code(), verdict.edge_j.code());

    Some(RawOutcome {
        i: ctx_i.base_index,
        j: ctx_j.base_index,
        residue_i,
        residue_j,
        base_i: ctx_i.letter,
        base_j: ctx_j.letter,
        kind: PairKind::Pair,
        lw: Some(lw),
        orientation: Some(verdict.orientation.lw_str()),
        syn_i: verdict.syn_i,
        syn_j: verdict.syn_j,
        saenger: verdict.saenger,
        note: None,
        bond_count: verdict.bond_count,
    })
}

fn stack_outcome(structure: &Structure, ctx_i: &Context, ctx_j: &Context) -> RawOutcome {
    RawOutcome {
        i: ctx_i.base_index,
        j: ctx_j.base_index,
        residue_i: structure.residues[ctx_i.residue_index].id.clone(),
        residue_j: structure.residues[ctx_j.residue_index].id.clone(),
        base_i: ctx_i.letter,
        base_j: ctx_j.letter,
        kind: PairKind::Stacked,
        lw: None,
        orientation: None,
        syn_i: false,
        syn_j: false,
        saenger: None,
        note: None,
        bond_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;
    use crate::ids::ResidueId;
    use crate::structure::Atom;
    use crate::templates::ring_template;

    fn ring_atoms(fold: char, origin: Vec3) -> Vec<Atom> {
        ring_template(fold)
            .iter()
            .map(|(name, pos)| Atom::new(*name, &name[..1], *pos + origin))
            .collect()
    }

    #[test]
    fn empty_structure_yields_no_pairs_and_no_error() {
        let structure = Structure::new();
        let mut diagnostics = Vec::new();
        let core = analyse(&structure, &Options::default(), &mut diagnostics).unwrap();
        assert!(core.base_pairs.is_empty());
        assert!(core.multiplets.is_empty());
        assert_eq!(core.stats.total_pairs, 0);
        assert_eq!(core.stats.total_bases, 0);
    }

    #[test]
    fn chain_filter_projects_to_the_selected_chain() {
        let mut s = Structure::new();
        s.push_residue(ResidueId::new("A", 1, None, 1), "G", ring_atoms('G', Vec3::ZERO));
        s.push_residue(ResidueId::new("B", 1, None, 1), "C", ring_atoms('C', Vec3::new(50.0, 0.0, 0.0)));

        let mut options = Options::default();
        options.chain_filter = Some(["A".to_string()].into_iter().collect());

        let mut diagnostics = Vec::new();
        let core = analyse(&s, &options, &mut diagnostics).unwrap();
        assert_eq!(core.stats.total_bases, 1);
    }
}
