//! RNA/DNA base-pair detection: geometric candidate filtering, hydrogen
//! bond enumeration, Leontis-Westhof edge/orientation classification,
//! stacking detection, and multiplet synthesis over a flattened
//! macromolecular structure.

#[macro_use]
extern crate lazy_static;

pub mod adapter;
pub mod analyse;
pub mod base_letter;
pub mod candidate;
pub mod classify;
pub mod constants;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod hbond;
pub mod ids;
pub mod multiplet;
pub mod options;
pub mod record;
pub mod reduce;
pub mod stacking;
pub mod stats;
pub mod structure;
pub mod templates;

pub use analyse::analyse;
pub use error::{AnalysisError, BasepairError};
pub use options::Options;
pub use record::{AnalysisOutput, Core};
pub use structure::Structure;
