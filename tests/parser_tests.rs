#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use gedxml::test_utils::*;

fn child_names(node: &Node) -> Vec<&str> {
    node.children().iter().map(Node::name).collect()
}

#[test]
fn test_level_nesting() {
    let root = parse(["0 A", "1 B", "2 C", "1 D", "0 E"]);

    assert_eq!(root.name(), ROOT_NAME);
    assert_eq!(root.depth(), 0);
    assert_eq!(child_names(&root), ["A", "E"]);

    let a = &root.children()[0];
    assert_eq!(a.depth(), 1);
    assert_eq!(child_names(a), ["B", "D"]);
    assert_eq!(child_names(&a.children()[0]), ["C"]);
    assert_eq!(a.children()[0].children()[0].depth(), 3);
    assert_depth_invariant(&root);
}

#[test]
fn test_level_skip_tolerance() {
    let root = parse(["0 A", "3 B"]);

    assert_eq!(root.node_count(), 3);
    let a = &root.children()[0];
    assert_eq!(a.depth(), 1);
    assert_eq!(child_names(a), ["B"]);
    // no intermediate elements are synthesized
    assert!(a.children()[0].children().is_empty());
    assert_depth_invariant(&root);
}

#[test]
fn test_identifier_inversion() {
    let root = parse(["0 @I1@ INDI"]);
    let indi = &root.children()[0];

    assert_eq!(indi.name(), "INDI");
    assert_eq!(indi.attributes(), [Attribute::new("id", "@I1@")]);
    assert!(indi.value().is_empty());
}

#[test]
fn test_pointer_values_are_not_identifiers() {
    // only the token position is inspected
    let root = parse(["1 FAMS @F1@"]);
    let fams = &root.children()[0];

    assert_eq!(fams.name(), "FAMS");
    assert_eq!(fams.value(), "@F1@");
    assert!(fams.attributes().is_empty());
}

#[test]
fn test_blank_lines_are_skipped() {
    assert_eq!(parse(["", "0 HEAD", ""]), parse(["0 HEAD"]));
}

#[test]
fn test_noise_lines_are_skipped() {
    let noisy = parse(["garbage", "0 HEAD", "HEAD 0", "1", "1 SOUR x"]);
    let clean = parse(["0 HEAD", "1 SOUR x"]);
    assert_eq!(noisy, clean);
}

#[test]
fn test_end_to_end_tree() {
    let root = parse(SAMPLE_LINES);

    assert_eq!(
        outline(&root),
        [
            (0, "gedcom".to_string()),
            (1, "HEAD".to_string()),
            (2, "SOUR".to_string()),
            (1, "INDI".to_string()),
            (2, "NAME".to_string()),
        ]
    );

    let head = &root.children()[0];
    assert_eq!(head.children()[0].value(), "Aconex");

    let indi = &root.children()[1];
    assert_eq!(indi.attributes(), [Attribute::new("id", "@I1@")]);
    assert_eq!(indi.children()[0].value(), "John /Doe/");
}

#[test]
fn test_messy_file_matches_clean_equivalent() -> Result<()> {
    let data = TestData::load()?;
    let messy = parse_gedcom(&data.messy_ged);
    assert_eq!(messy, parse(SAMPLE_LINES));
    Ok(())
}

#[test]
fn test_family_fixture_structure() -> Result<()> {
    let data = TestData::load()?;
    let root = parse_gedcom(&data.family_ged);

    assert_eq!(child_names(&root), ["HEAD", "INDI", "INDI", "FAM", "TRLR"]);
    assert_eq!(root.node_count(), 24);
    assert_eq!(root.max_depth(), 3);
    assert_depth_invariant(&root);
    Ok(())
}

#[test]
fn test_builder_can_be_driven_by_records() {
    let mut builder = TreeBuilder::new();
    for record in [
        Record::new(0, "@F1@", "FAM"),
        Record::new(1, "HUSB", "@I1@"),
        Record::new(1, "WIFE", "@I2@"),
    ] {
        builder.push(record);
    }
    let root = builder.finish();

    let fam = &root.children()[0];
    assert_eq!(fam.name(), "FAM");
    assert_eq!(child_names(fam), ["HUSB", "WIFE"]);
}

#[test]
fn test_node_from_record() {
    match parse_line("0 @S1@ SOUR").map(|r| r.classify()) {
        Some(Entry::Identifier { id, name }) => {
            assert_eq!(id, "@S1@");
            assert_eq!(name, "SOUR");
        }
        other => panic!("expected identifier entry, got {:?}", other),
    }

    let node = node_from_record(Record::new(2, "DATE", "1 JAN 1900"));
    assert_eq!(node.name(), "DATE");
    assert_eq!(node.value(), "1 JAN 1900");
}
