//! Residue model & base-letter assignment (component C2).
//!
//! Maps a residue's `resname` and atom-name set to a [`BaseLetter`], or
//! rejects the residue from pairing entirely. Grounded in the residue/atom
//! membership tables the docking engine keeps in `dna.rs` and `dfire.rs`
//! (`atoms_in_residues`, `r3_to_numerical`): a `match` on a fixed,
//! hand-curated set of three-letter codes, with a `lazy_static` table for
//! the larger modified-residue vocabulary.

use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use serde::Serialize;

/// A single nucleobase letter, carrying whether it was assigned by direct
/// `resname` match (`Canonical`) or by heuristic (`Modified`). The case
/// distinction in the textual/JSON record is derived from this variant, not
/// stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseLetter {
    Canonical(char),
    Modified(char),
}

impl BaseLetter {
    pub fn is_modified(&self) -> bool {
        matches!(self, BaseLetter::Modified(_))
    }

    /// The letter as it appears in output: uppercase for `Canonical`,
    /// lowercase for `Modified`.
    pub fn display_char(&self) -> char {
        match self {
            BaseLetter::Canonical(c) => c.to_ascii_uppercase(),
            BaseLetter::Modified(c) => c.to_ascii_lowercase(),
        }
    }

    /// Case-folded canonical letter, used to key geometry/H-bond template
    /// lookups that don't care whether the residue was modified.
    pub fn fold(&self) -> char {
        match self {
            BaseLetter::Canonical(c) | BaseLetter::Modified(c) => c.to_ascii_uppercase(),
        }
    }

    pub fn is_purine(&self) -> bool {
        matches!(self.fold(), 'A' | 'G' | 'I')
    }
}

impl fmt::Display for BaseLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

impl Serialize for BaseLetter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.display_char())
    }
}

const PURINE_RING: &[&str] = &["N1", "C2", "N3", "C4", "C5", "C6", "N7", "C8", "N9"];
const PYRIMIDINE_RING: &[&str] = &["N1", "C2", "N3", "C4", "C5", "C6"];

/// Atom-presence template for a lowercase (modified/unusual) letter:
/// atoms that must be present, and atoms whose presence rules the template
/// out (used to separate e.g. uracil from thymine, which share a ring).
struct AtomTemplate {
    letter: char,
    required: &'static [&'static str],
    forbidden: &'static [&'static str],
}

// Fixed priority order, part of the cross-implementation contract (SPEC_FULL §4.1).
const ATOM_TEMPLATES: &[AtomTemplate] = &[
    AtomTemplate { letter: 'a', required: &["N1", "C2", "N3", "C4", "C5", "C6", "N7", "C8", "N9", "N6"], forbidden: &[] },
    AtomTemplate { letter: 'g', required: &["N1", "C2", "N3", "C4", "C5", "C6", "N7", "C8", "N9", "O6", "N2"], forbidden: &[] },
    AtomTemplate { letter: 'c', required: &["N1", "C2", "N3", "C4", "C5", "C6", "N4", "O2"], forbidden: &[] },
    AtomTemplate { letter: 'u', required: &["N1", "C2", "N3", "C4", "C5", "C6", "O2", "O4"], forbidden: &["N4", "C7"] },
    AtomTemplate { letter: 't', required: &["N1", "C2", "N3", "C4", "C5", "C6", "O2", "O4", "C7"], forbidden: &["N4"] },
    AtomTemplate { letter: 'p', required: &["N1", "C2", "N3", "C4", "C5", "C6", "O2", "O4"], forbidden: &["N4", "C7"] },
    AtomTemplate { letter: 'i', required: &["N1", "C2", "N3", "C4", "C5", "C6", "N7", "C8", "N9", "O6"], forbidden: &["N6", "N2"] },
];

lazy_static! {
    /// Three-letter codes that map directly onto a canonical letter,
    /// spanning the RNA and DNA naming conventions seen across PDB/mmCIF
    /// depositions.
    static ref CANONICAL_RESNAMES: std::collections::HashMap<&'static str, char> = {
        let mut m = std::collections::HashMap::new();
        for (name, letter) in [
            ("A", 'A'), ("G", 'G'), ("C", 'C'), ("U", 'U'), ("T", 'T'), ("I", 'I'),
            ("DA", 'A'), ("DG", 'G'), ("DC", 'C'), ("DT", 'T'), ("DI", 'I'),
            ("RA", 'A'), ("RG", 'G'), ("RC", 'C'), ("RU", 'U'),
        ] {
            m.insert(name, letter);
        }
        m
    };

    /// Known modified/unusual residue names mapped straight to their
    /// lowercase parent letter. This is a deliberate shortcut around the
    /// atom-presence templates for names the community already treats as
    /// unambiguous (see DESIGN.md, Open Question: modified-residue table
    /// vs. atom heuristic).
    static ref MODIFIED_RESNAMES: std::collections::HashMap<&'static str, char> = {
        let mut m = std::collections::HashMap::new();
        for (name, letter) in [
            ("PSU", 'u'), ("H2U", 'u'), ("4SU", 'u'), ("OMU", 'u'), ("5MU", 't'),
            ("OMC", 'c'), ("5MC", 'c'), ("CBR", 'c'),
            ("OMG", 'g'), ("1MG", 'g'), ("2MG", 'g'), ("M2G", 'g'), ("7MG", 'g'), ("YG", 'g'),
            ("1MA", 'a'), ("MIA", 'a'), ("MA6", 'a'), ("6MA", 'a'),
            ("MTU", 't'),
        ] {
            m.insert(name, letter);
        }
        m
    };
}

/// Result of classifying one residue.
pub struct Classification {
    pub letter: BaseLetter,
    /// `false` means the residue is not a base and must receive no
    /// `BaseIndex` (rejected entirely, including the `'n'` case).
    pub recognised: bool,
}

/// Runs C2 on a single residue's `resname` and atom-name set.
pub fn classify_residue(resname: &str, atom_names: &HashSet<&str>) -> Classification {
    let resname = resname.trim().to_ascii_uppercase();

    if let Some(&letter) = CANONICAL_RESNAMES.get(resname.as_str()) {
        return Classification { letter: BaseLetter::Canonical(letter), recognised: true };
    }

    if let Some(&letter) = MODIFIED_RESNAMES.get(resname.as_str()) {
        return Classification { letter: BaseLetter::Modified(letter), recognised: true };
    }

    let has_ring = has_all(atom_names, PURINE_RING) || has_all(atom_names, PYRIMIDINE_RING);

    for template in ATOM_TEMPLATES {
        if has_all(atom_names, template.required)
            && template.forbidden.iter().all(|f| !atom_names.contains(f))
        {
            return Classification { letter: BaseLetter::Modified(template.letter), recognised: true };
        }
    }

    if has_ring {
        return Classification { letter: BaseLetter::Modified('n'), recognised: false };
    }

    Classification { letter: BaseLetter::Modified('n'), recognised: false }
}

fn has_all(atom_names: &HashSet<&str>, required: &[&str]) -> bool {
    required.iter().all(|name| atom_names.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&'static str]) -> HashSet<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn canonical_resname_wins_uppercase() {
        let c = classify_residue("A", &names(&["N1", "C2"]));
        assert_eq!(c.letter, BaseLetter::Canonical('A'));
        assert!(!c.letter.is_modified());
    }

    #[test]
    fn dna_prefixed_resname_maps_to_canonical() {
        let c = classify_residue("DG", &names(&[]));
        assert_eq!(c.letter, BaseLetter::Canonical('G'));
    }

    #[test]
    fn known_modified_resname_is_lowercase() {
        let c = classify_residue("PSU", &names(&[]));
        assert_eq!(c.letter, BaseLetter::Modified('u'));
        assert!(c.letter.is_modified());
        assert!(c.recognised);
    }

    #[test]
    fn unrecognised_resname_with_uracil_signature_is_lowercase_u() {
        let atoms = names(&["N1", "C2", "N3", "C4", "C5", "C6", "O2", "O4"]);
        let c = classify_residue("XXU", &atoms);
        assert_eq!(c.letter, BaseLetter::Modified('u'));
    }

    #[test]
    fn thymine_signature_is_not_confused_with_uracil() {
        let atoms = names(&["N1", "C2", "N3", "C4", "C5", "C6", "O2", "O4", "C7"]);
        let c = classify_residue("XXT", &atoms);
        assert_eq!(c.letter, BaseLetter::Modified('t'));
    }

    #[test]
    fn cytosine_signature_beats_uracil_in_priority_order() {
        let atoms = names(&["N1", "C2", "N3", "C4", "C5", "C6", "N4", "O2"]);
        let c = classify_residue("XXC", &atoms);
        assert_eq!(c.letter, BaseLetter::Modified('c'));
    }

    #[test]
    fn ring_only_with_no_template_match_is_rejected() {
        let atoms = names(&["N1", "C2", "N3", "C4", "C5", "C6"]);
        // Remove O2/O4/N4/C7 -> bare pyrimidine ring matches no template.
        let c = classify_residue("ZZZ", &atoms);
        assert_eq!(c.letter, BaseLetter::Modified('n'));
        assert!(!c.recognised);
    }

    #[test]
    fn amino_acid_residue_is_rejected() {
        let atoms = names(&["N", "CA", "C", "O", "CB"]);
        let c = classify_residue("ALA", &atoms);
        assert!(!c.recognised);
    }
}
