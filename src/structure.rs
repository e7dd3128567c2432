//! The flat, index-based structure model the core operates on (component
//! of §3's data model). Grounded in the docking engine's own pattern of
//! walking `chain -> residue -> atom` once into a flat `Vec`, carried
//! forward per SPEC_FULL §9 ("flat atom arrays with index ranges").

use std::collections::HashSet;
use std::ops::Range;

use crate::base_letter::classify_residue;
use crate::geometry::Vec3;
use crate::ids::ResidueId;

#[derive(Debug, Clone)]
pub struct Atom {
    pub name: String,
    pub element: String,
    pub pos: Vec3,
    pub altloc: Option<char>,
    pub occupancy: f64,
    pub bfactor: f64,
}

impl Atom {
    pub fn new(name: impl Into<String>, element: impl Into<String>, pos: Vec3) -> Self {
        Atom {
            name: name.into(),
            element: element.into(),
            pos,
            altloc: None,
            occupancy: 1.0,
            bfactor: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Residue {
    pub id: ResidueId,
    pub resname: String,
    pub atom_range: Range<usize>,
}

/// An owned, flattened macromolecular structure: one contiguous atom table
/// plus non-owning `[start, end)` ranges into it per residue. This is the
/// only shape components C1-C11 ever see; the `pdbtbx`-backed adapter
/// (`crate::adapter`) is responsible for building one of these from a PDB
/// or mmCIF file.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    pub residues: Vec<Residue>,
}

impl Structure {
    pub fn new() -> Self {
        Structure::default()
    }

    /// Appends a residue and its atoms, returning the residue's index.
    pub fn push_residue(&mut self, id: ResidueId, resname: impl Into<String>, atoms: Vec<Atom>) -> usize {
        let start = self.atoms.len();
        self.atoms.extend(atoms);
        let end = self.atoms.len();
        self.residues.push(Residue {
            id,
            resname: resname.into(),
            atom_range: start..end,
        });
        self.residues.len() - 1
    }

    pub fn atoms_of(&self, residue_index: usize) -> &[Atom] {
        match self.residues.get(residue_index) {
            Some(residue) => &self.atoms[residue.atom_range.clone()],
            None => &[],
        }
    }

    pub fn atom_names_of(&self, residue_index: usize) -> HashSet<&str> {
        self.atoms_of(residue_index).iter().map(|a| a.name.as_str()).collect()
    }

    pub fn find_atom(&self, residue_index: usize, name: &str) -> Option<&Atom> {
        self.atoms_of(residue_index).iter().find(|a| a.name == name)
    }

    /// Runs C2 base-letter assignment for every residue, returning the
    /// classification in residue order (including rejected residues, which
    /// the caller filters out before numbering `BaseIndex`).
    pub fn classify_residues(&self) -> Vec<crate::base_letter::Classification> {
        self.residues
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let names = self.atom_names_of(i);
                classify_residue(&r.resname, &names)
            })
            .collect()
    }
}

/// Restricts a structure's chain IDs to one character, matching the legacy
/// behaviour (SPEC_FULL §6.3 `chain_id_truncate`). A pure pre-processing
/// step on `ResidueId`, applied by the adapter before numbering, never an
/// invariant of `Structure` itself.
pub fn truncate_chain_ids(structure: &mut Structure) {
    for residue in &mut structure.residues {
        if let Some(first) = residue.id.chain_id.chars().next() {
            residue.id.chain_id = first.to_string();
        }
    }
}
