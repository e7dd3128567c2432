//! Output entities (§3): the finalized, serde-serializable shapes that
//! survive past the reducer (C8) into the emitter (C11).

use serde::Serialize;

use crate::base_letter::BaseLetter;
use crate::ids::{BaseIndex, ResidueId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairKind {
    Pair,
    Stacked,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairRecord {
    pub i: BaseIndex,
    pub j: BaseIndex,
    pub residue_i: ResidueId,
    pub residue_j: ResidueId,
    pub base_i: BaseLetter,
    pub base_j: BaseLetter,
    pub kind: PairKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    pub syn_i: bool,
    pub syn_j: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saenger: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Multiplet {
    pub indices: Vec<BaseIndex>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_pairs: usize,
    pub total_bases: usize,
    pub pair_type_counts: std::collections::BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Core {
    pub base_pairs: Vec<PairRecord>,
    pub multiplets: Vec<Multiplet>,
    pub stats: Stats,
}

#[derive(Debug, Clone, Serialize)]
pub struct Source {
    pub path: String,
    pub format: &'static str,
    pub id_scheme: &'static str,
    pub model: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    pub schema_version: u32,
    pub source: Source,
    pub options: crate::options::Options,
    pub core: Core,
}
