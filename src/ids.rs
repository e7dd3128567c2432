//! Identity newtypes used across the crate: residue identity, base ordinals,
//! and the non-owning indices that let other components reference a
//! [`crate::structure::Structure`] without borrowing it.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

/// Non-owning reference to a residue within a [`crate::structure::Structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueIndex(pub usize);

/// 1-based ordinal of a residue within the subset recognised as a base.
///
/// Residues rejected during base-letter assignment never receive a
/// `BaseIndex` and cannot appear in pair records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseIndex(NonZeroU32);

impl BaseIndex {
    /// Builds a `BaseIndex` from a 1-based ordinal. Panics on zero, which
    /// would violate the "1-based" invariant from the data model.
    pub fn new(ordinal: u32) -> Self {
        BaseIndex(NonZeroU32::new(ordinal).expect("BaseIndex ordinal must be >= 1"))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for BaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.get())
    }
}

/// Identity of a residue: `(chain_id, resseq, icode, model)`.
///
/// Unique within a structure. `chain_id` is a full string rather than a
/// single character so the legacy one-character truncation can remain a
/// pre-processing step (see [`crate::adapter`]) rather than a property of
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ResidueId {
    pub chain_id: String,
    pub resseq: i32,
    pub icode: Option<char>,
    pub model: i32,
}

impl ResidueId {
    pub fn new(chain_id: impl Into<String>, resseq: i32, icode: Option<char>, model: i32) -> Self {
        ResidueId {
            chain_id: chain_id.into(),
            resseq,
            icode,
            model,
        }
    }

    /// `<resseq>_<icode>` form used in the legacy text record, e.g. `34_` or `34_A`.
    pub fn resseq_icode(&self) -> String {
        match self.icode {
            Some(c) => format!("{}_{}", self.resseq, c),
            None => format!("{}_", self.resseq),
        }
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.icode {
            Some(c) => write!(f, "{}:{}{}", self.chain_id, self.resseq, c),
            None => write!(f, "{}:{}", self.chain_id, self.resseq),
        }
    }
}
