use basepair_core::analyse;
use basepair_core::geometry::Vec3;
use basepair_core::ids::ResidueId;
use basepair_core::options::Options;
use basepair_core::record::PairKind;
use basepair_core::structure::{Atom, Structure};
use basepair_core::templates::ring_template;

fn ring_atoms(fold: char, origin: Vec3) -> Vec<Atom> {
    ring_template(fold).iter().map(|(name, pos)| Atom::new(*name, &name[..1], *pos + origin)).collect()
}

#[test]
fn empty_structure_produces_an_empty_result() {
    let structure = Structure::new();
    let mut diagnostics = Vec::new();
    let core = analyse(&structure, &Options::default(), &mut diagnostics).unwrap();

    assert!(core.base_pairs.is_empty());
    assert!(core.multiplets.is_empty());
    assert_eq!(core.stats.total_pairs, 0);
    assert_eq!(core.stats.total_bases, 0);
}

#[test]
fn modified_base_residue_is_recognised_and_lowercase() {
    let mut s = Structure::new();
    // Pseudouridine signature: recognised by resname table (C2 step 2),
    // not by ring geometry, so it needs no frame to be classified.
    s.push_residue(
        ResidueId::new("A", 1, None, 1),
        "PSU",
        vec![Atom::new("N1", "N", Vec3::ZERO)],
    );

    let mut diagnostics = Vec::new();
    let core = analyse(&s, &Options::default(), &mut diagnostics).unwrap();

    // The residue lacks a fittable ring (only one atom), so it is skipped
    // from pairing (SkippedResidue, frame-invalid) but base-letter
    // assignment itself still ran during C2; confirm it's absent here and
    // re-run classification directly to check the case semantics.
    assert_eq!(core.stats.total_bases, 0);

    let classifications = s.classify_residues();
    assert_eq!(classifications[0].letter.to_string(), "u");
    assert!(classifications[0].letter.is_modified());
}

#[test]
fn chain_filter_is_a_projection_onto_the_selected_chain() {
    let mut s = Structure::new();
    s.push_residue(ResidueId::new("A", 1, None, 1), "G", ring_atoms('G', Vec3::ZERO));
    s.push_residue(ResidueId::new("B", 1, None, 1), "C", ring_atoms('C', Vec3::new(50.0, 0.0, 0.0)));
    s.push_residue(ResidueId::new("A", 2, None, 1), "C", ring_atoms('C', Vec3::new(100.0, 0.0, 0.0)));

    let mut diagnostics = Vec::new();
    let unfiltered = analyse(&s, &Options::default(), &mut diagnostics).unwrap();

    let mut options = Options::default();
    options.chain_filter = Some(["A".to_string()].into_iter().collect());
    let filtered = analyse(&s, &options, &mut diagnostics).unwrap();

    assert_eq!(filtered.stats.total_bases, 2);
    assert!(filtered.stats.total_bases <= unfiltered.stats.total_bases);
    for record in &filtered.base_pairs {
        assert_eq!(record.residue_i.chain_id, "A");
        assert_eq!(record.residue_j.chain_id, "A");
    }
}

#[test]
fn canonical_gc_watson_crick_dimer_is_classified_exactly() {
    // Both rings stay unrotated (identity fit, cis orientation by
    // construction) and only G is translated. O6/N2 (G) and N4/O2 (C) are
    // placed by hand so the three canonical bonds (G:N1-C:N3, G:N2-C:O2,
    // C:N4-G:O6) each land within D_HB/A_HB_MIN, and no other donor/acceptor
    // combination in range sneaks in an extra bond.
    let mut s = Structure::new();

    let mut g_atoms = ring_atoms('G', Vec3::ZERO);
    g_atoms.push(Atom::new("N2", "N", Vec3::new(1.365, 2.3646, 0.0)));
    g_atoms.push(Atom::new("O6", "O", Vec3::new(0.295, -1.2042, 0.0)));
    s.push_residue(ResidueId::new("A", 1, None, 1), "G", g_atoms);

    let c_origin = Vec3::new(4.985, -1.2042, 0.0);
    let mut c_atoms = ring_atoms('C', c_origin);
    c_atoms.push(Atom::new("N4", "N", Vec3::new(2.295, -1.2042, 0.0)));
    c_atoms.push(Atom::new("O2", "O", Vec3::new(2.765, 4.7894, 0.0)));
    s.push_residue(ResidueId::new("B", 1, None, 1), "C", c_atoms);

    let mut diagnostics = Vec::new();
    let core = analyse(&s, &Options::default(), &mut diagnostics).unwrap();

    assert_eq!(core.stats.total_bases, 2);
    assert_eq!(core.stats.total_pairs, 1);
    assert_eq!(core.base_pairs.len(), 1);

    let record = &core.base_pairs[0];
    assert_eq!(record.lw.as_deref(), Some("+/+"));
    assert_eq!(record.orientation, Some("cis"));
    assert_eq!(record.saenger, Some("XIX"));
}

#[test]
fn three_mutually_paired_residues_form_one_multiplet() {
    use basepair_core::classify::{Edge, Orientation};
    use basepair_core::ids::BaseIndex;
    use basepair_core::reduce::{finalize, RawOutcome};
    use basepair_core::base_letter::BaseLetter;

    let raw = vec![
        RawOutcome {
            i: BaseIndex::new(1),
            j: BaseIndex::new(2),
            residue_i: ResidueId::new("A", 1, None, 1),
            residue_j: ResidueId::new("A", 2, None, 1),
            base_i: BaseLetter::Canonical('G'),
            base_j: BaseLetter::Canonical('C'),
            kind: PairKind::Pair,
            lw: Some(format!("{}/{}", Edge::WcPlus.code(), Edge::WcPlus.code())),
            orientation: Some(Orientation::Cis.lw_str()),
            syn_i: false,
            syn_j: false,
            saenger: Some("XIX"),
            note: None,
            bond_count: 3,
        },
        RawOutcome {
            i: BaseIndex::new(2),
            j: BaseIndex::new(3),
            residue_i: ResidueId::new("A", 2, None, 1),
            residue_j: ResidueId::new("A", 3, None, 1),
            base_i: BaseLetter::Canonical('C'),
            base_j: BaseLetter::Canonical('G'),
            kind: PairKind::Pair,
            lw: Some("W/W".to_string()),
            orientation: Some(Orientation::Cis.lw_str()),
            syn_i: false,
            syn_j: false,
            saenger: Some("n/a"),
            note: None,
            bond_count: 1,
        },
        RawOutcome {
            i: BaseIndex::new(1),
            j: BaseIndex::new(3),
            residue_i: ResidueId::new("A", 1, None, 1),
            residue_j: ResidueId::new("A", 3, None, 1),
            base_i: BaseLetter::Canonical('G'),
            base_j: BaseLetter::Canonical('G'),
            kind: PairKind::Pair,
            lw: Some("H/H".to_string()),
            orientation: Some(Orientation::Tran.lw_str()),
            syn_i: false,
            syn_j: false,
            saenger: Some("n/a"),
            note: None,
            bond_count: 1,
        },
    ];

    let records = finalize(raw);
    let multiplets = basepair_core::multiplet::synthesize(&records);

    assert_eq!(multiplets.len(), 1);
    assert_eq!(multiplets[0].indices.len(), 3);
    for index in &multiplets[0].indices {
        let count = records.iter().filter(|r| r.i == *index || r.j == *index).count();
        assert!(count >= 2);
    }
}
