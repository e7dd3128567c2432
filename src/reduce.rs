//! Pair-set reducer (component C8): deduplicates raw per-candidate
//! outcomes into the final `PairRecord` set, runs the best-pair pass, and
//! sorts.

use std::collections::{HashMap, HashSet};

use crate::ids::{BaseIndex, ResidueId};
use crate::record::{PairKind, PairRecord};
use crate::base_letter::BaseLetter;

/// One candidate's raw verdict before deduplication. A candidate can
/// legitimately carry both a hydrogen-bond-derived outcome and a stacking
/// outcome (SPEC_FULL §4.3 allows a pair to survive into both bands); the
/// reducer keeps only one per `(i,j)`.
pub struct RawOutcome {
    pub i: BaseIndex,
    pub j: BaseIndex,
    pub residue_i: ResidueId,
    pub residue_j: ResidueId,
    pub base_i: BaseLetter,
    pub base_j: BaseLetter,
    pub kind: PairKind,
    pub lw: Option<String>,
    pub orientation: Option<&'static str>,
    pub syn_i: bool,
    pub syn_j: bool,
    pub saenger: Option<&'static str>,
    pub note: Option<String>,
    pub bond_count: usize,
}

/// Runs the full reduction: dedup, best-pair pass, sort.
pub fn finalize(raw: Vec<RawOutcome>) -> Vec<PairRecord> {
    let deduped = dedup_by_key(raw);
    let (mut pairs, others): (Vec<RawOutcome>, Vec<RawOutcome>) =
        deduped.into_iter().partition(|r| r.kind == PairKind::Pair);

    mark_tertiary(&mut pairs);

    let mut all: Vec<RawOutcome> = pairs;
    all.extend(others);
    all.sort_by_key(|r| (r.i, r.j));

    all.into_iter()
        .map(|r| PairRecord {
            i: r.i,
            j: r.j,
            residue_i: r.residue_i,
            residue_j: r.residue_j,
            base_i: r.base_i,
            base_j: r.base_j,
            kind: r.kind,
            lw: r.lw,
            orientation: r.orientation,
            syn_i: r.syn_i,
            syn_j: r.syn_j,
            saenger: r.saenger,
            note: r.note,
        })
        .collect()
}

/// Hydrogen-bond-derived outcomes (`Pair`, `Unknown`) win over `Stacked`
/// for the same `(i,j)` (SPEC_FULL §4.7 "Deduplication").
fn dedup_by_key(raw: Vec<RawOutcome>) -> Vec<RawOutcome> {
    let mut best: HashMap<(BaseIndex, BaseIndex), RawOutcome> = HashMap::new();
    for outcome in raw {
        let key = (outcome.i, outcome.j);
        match best.get(&key) {
            None => {
                best.insert(key, outcome);
            }
            Some(existing) if existing.kind == PairKind::Stacked && outcome.kind != PairKind::Stacked => {
                best.insert(key, outcome);
            }
            _ => {}
        }
    }
    best.into_values().collect()
}

/// Greedy best-pair assignment: sort candidates by descending bond count
/// then ascending sequence separation, and let each residue claim its
/// first (best) partner. Later pairs touching an already-claimed residue
/// are marked tertiary (`!`) rather than dropped (SPEC_FULL §4.7).
fn mark_tertiary(pairs: &mut [RawOutcome]) {
    let mut order: Vec<usize> = (0..pairs.len()).collect();
    order.sort_by_key(|&idx| {
        let r = &pairs[idx];
        (std::cmp::Reverse(r.bond_count), r.j.get().abs_diff(r.i.get()))
    });

    let mut claimed: HashSet<BaseIndex> = HashSet::new();
    for idx in order {
        let (i, j) = (pairs[idx].i, pairs[idx].j);
        if claimed.contains(&i) || claimed.contains(&j) {
            pairs[idx].note = Some(merge_tertiary(pairs[idx].note.take()));
        } else {
            claimed.insert(i);
            claimed.insert(j);
        }
    }
}

fn merge_tertiary(existing: Option<String>) -> String {
    match existing {
        Some(note) if !note.is_empty() => format!("!{note}"),
        _ => "!".to_string(),
    }
}
