//! Non-fatal condition sink (SPEC_FULL §4.13, §7). Threaded through the
//! call chain as `&mut Vec<Diagnostic>` rather than kept as global or
//! thread-local state, so the core stays safe to run concurrently over
//! distinct structures (SPEC_FULL §5).

use crate::ids::ResidueId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A residue was not recognised as a base, or its frame could not be
    /// fit; it receives no `BaseIndex` and is silently absent downstream.
    SkippedResidue { residue: ResidueId, reason: String },
    /// A candidate satisfied pair geometry but produced no classifiable
    /// edge; recorded as `kind = Unknown` in the output as well.
    AmbiguousPair { i: ResidueId, j: ResidueId },
}

pub type DiagnosticSink<'a> = &'a mut Vec<Diagnostic>;
