//! Structure adapter (component C12): wraps `pdbtbx::open` and flattens a
//! parsed PDB/mmCIF file into the `Structure` type from §3, the only shape
//! the core ever sees.

use std::path::{Path, PathBuf};

use crate::error::BasepairError;
use crate::geometry::Vec3;
use crate::ids::ResidueId;
use crate::options::{CifIdScheme, Options};
use crate::record::Source;
use crate::structure::{self, Atom, Structure};

pub struct Loaded {
    pub structure: Structure,
    pub source: Source,
}

/// Loads `path` (PDB or mmCIF, sniffed by `pdbtbx` from content/extension)
/// and flattens the selected model into a `Structure`.
pub fn load(path: &Path, options: &Options) -> Result<Loaded, BasepairError> {
    let (pdb, _warnings) = pdbtbx::open(path.to_string_lossy().as_ref(), pdbtbx::StrictnessLevel::Medium)
        .map_err(|errors| BasepairError::StructureParse {
            path: path.to_path_buf(),
            reason: errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "),
        })?;

    let requested_model = options.nmr_model.unwrap_or(crate::constants::DEFAULT_MODEL);
    let model_count = pdb.model_count();
    let model = pdb
        .models()
        .find(|m| m.serial_number() as i32 == requested_model)
        .ok_or_else(|| BasepairError::NoSuchModel {
            path: path.to_path_buf(),
            requested: requested_model,
            available: model_count,
        })?;

    let mut out = Structure::new();

    for chain in model.chains() {
        let chain_id = chain.id().to_string();
        for residue in chain.residues() {
            let Some(conformer) = best_conformer(&residue) else { continue };

            let resname = conformer.name().to_string();
            let resseq = residue.serial_number();
            let icode = residue.insertion_code().and_then(|s| s.chars().next());

            let atoms: Vec<Atom> = conformer
                .atoms()
                .map(|atom| {
                    let (x, y, z) = atom.pos();
                    Atom {
                        name: atom.name().trim().to_string(),
                        element: atom.element().map(|e| e.to_string()).unwrap_or_default(),
                        pos: Vec3::new(x, y, z),
                        altloc: conformer.alternative_location().and_then(|s| s.chars().next()),
                        occupancy: atom.occupancy(),
                        bfactor: atom.b_factor(),
                    }
                })
                .collect();

            let id = ResidueId::new(chain_id.clone(), resseq as i32, icode, requested_model);
            out.push_residue(id, resname, atoms);
        }
    }

    if options.chain_id_truncate {
        structure::truncate_chain_ids(&mut out);
    }

    let id_scheme = match options.cif_ids {
        CifIdScheme::Auth => "auth",
        CifIdScheme::Label => "label",
    };
    let format = sniff_format(path);

    Ok(Loaded {
        structure: out,
        source: Source {
            path: path.to_string_lossy().into_owned(),
            format,
            id_scheme,
            model: requested_model,
        },
    })
}

/// Highest-occupancy conformer for a residue, ties broken by the order
/// `pdbtbx` reports them in (first-encountered), per SPEC_FULL §4.11.
fn best_conformer(residue: &pdbtbx::Residue) -> Option<pdbtbx::Conformer> {
    let mut best: Option<(pdbtbx::Conformer, f64)> = None;
    for conformer in residue.conformers().cloned() {
        let occupancy = conformer.atoms().next().map(|a| a.occupancy()).unwrap_or(0.0);
        match &best {
            Some((_, current_occupancy)) if occupancy <= *current_occupancy => {}
            _ => best = Some((conformer, occupancy)),
        }
    }
    best.map(|(conformer, _)| conformer)
}

fn sniff_format(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
        Some(ext) if ext == "cif" || ext == "mmcif" => "cif",
        Some(ext) if ext == "pdb" || ext == "ent" => "pdb",
        _ => "pdb",
    }
}

pub fn to_basepair_error(path: &PathBuf, io_error: std::io::Error) -> BasepairError {
    BasepairError::Io { path: path.clone(), source: io_error }
}
