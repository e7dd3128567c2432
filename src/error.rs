//! Error taxonomy (component C14): typed errors for the structure adapter
//! and the analysis core. `SkippedResidue` and `AmbiguousPair` are not
//! represented here — they are non-fatal and flow through the
//! [`crate::diagnostics::Diagnostic`] sink instead (SPEC_FULL §7).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BasepairError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse structure file {path}: {reason}")]
    StructureParse { path: PathBuf, reason: String },

    #[error("unrecognised structure format for {path} (expected .pdb or .cif)")]
    UnknownFormat { path: PathBuf },

    #[error("model {requested} not present in {path} ({available} model(s) found)")]
    NoSuchModel {
        path: PathBuf,
        requested: i32,
        available: usize,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
