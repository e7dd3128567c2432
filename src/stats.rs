//! Statistics aggregation (component C10).

use std::collections::BTreeMap;

use crate::record::{PairKind, PairRecord, Stats};

pub fn aggregate(records: &[PairRecord], total_bases: usize) -> Stats {
    let pairs: Vec<&PairRecord> = records.iter().filter(|r| r.kind == PairKind::Pair).collect();

    let mut pair_type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in &pairs {
        let key = pair_type_key(record);
        *pair_type_counts.entry(key).or_insert(0) += 1;
    }

    Stats {
        total_pairs: pairs.len(),
        total_bases,
        pair_type_counts,
    }
}

fn pair_type_key(record: &PairRecord) -> String {
    let lw = record.lw.as_deref().unwrap_or("?/?");
    let (edge_i, edge_j) = lw.split_once('/').unwrap_or(("?", "?"));
    let orient = match record.orientation {
        Some("cis") => "cis",
        Some(_) => "tra",
        None => "n/a",
    };
    format!("{edge_i}{edge_j}-{orient}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_letter::BaseLetter;
    use crate::ids::{BaseIndex, ResidueId};

    fn pair(i: u32, j: u32, lw: &str, orientation: &'static str) -> PairRecord {
        PairRecord {
            i: BaseIndex::new(i),
            j: BaseIndex::new(j),
            residue_i: ResidueId::new("A", i as i32, None, 1),
            residue_j: ResidueId::new("A", j as i32, None, 1),
            base_i: BaseLetter::Canonical('G'),
            base_j: BaseLetter::Canonical('C'),
            kind: PairKind::Pair,
            lw: Some(lw.to_string()),
            orientation: Some(orientation),
            syn_i: false,
            syn_j: false,
            saenger: Some("XIX"),
            note: None,
        }
    }

    #[test]
    fn counts_partition_pairs_exactly() {
        let records = vec![pair(1, 2, "+/+", "cis"), pair(3, 4, "+/+", "cis"), pair(5, 6, "W/W", "tran")];
        let stats = aggregate(&records, 6);
        assert_eq!(stats.total_pairs, 3);
        assert_eq!(stats.total_bases, 6);
        assert_eq!(stats.pair_type_counts.get("++-cis"), Some(&2));
        assert_eq!(stats.pair_type_counts.get("WW-tra"), Some(&1));
        let sum: usize = stats.pair_type_counts.values().sum();
        assert_eq!(sum, stats.total_pairs);
    }

    #[test]
    fn stacked_records_excluded_from_totals() {
        let mut stacked = pair(1, 2, "+/+", "cis");
        stacked.kind = PairKind::Stacked;
        stacked.lw = None;
        stacked.orientation = None;
        let records = vec![stacked];
        let stats = aggregate(&records, 2);
        assert_eq!(stats.total_pairs, 0);
        assert!(stats.pair_type_counts.is_empty());
    }
}
