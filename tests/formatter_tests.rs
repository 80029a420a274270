#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use gedxml::test_utils::*;

#[test]
fn test_end_to_end_serialization() {
    let root = parse(SAMPLE_LINES);
    let expected = "<gedcom>\n\
                    \t<HEAD>\n\
                    \t\t<SOUR>Aconex</SOUR>\n\
                    \t</HEAD>\n\
                    \t<INDI \"id=@I1@\">\n\
                    \t\t<NAME>John /Doe/</NAME>\n\
                    \t</INDI>\n\
                    </gedcom>";
    assert_eq!(serialize(&root), expected);
}

#[test]
fn test_family_fixture_output() -> Result<()> {
    let data = TestData::load()?;
    let root = parse_gedcom(&data.family_ged);
    assert_eq!(serialize(&root), data.family_xml.trim_end());
    Ok(())
}

#[test]
fn test_leaf_vs_branch_value() {
    let leaf = parse(["0 NAME John"]);
    assert_eq!(
        serialize(&leaf.children()[0]),
        "\t<NAME>John</NAME>",
        "leaf keeps its depth indentation and inline value"
    );

    let branch = parse(["0 NAME John", "1 GIVN John"]);
    assert_eq!(
        serialize(&branch.children()[0]),
        "\t<NAME value=\"John\">\n\t\t<GIVN>John</GIVN>\n\t</NAME>"
    );
}

#[test]
fn test_attribute_order() {
    let node = Node::new("X").with_attribute("a", "1").with_attribute("b", "2");
    let xml = serialize(&node);
    let a = xml.find("a=1").unwrap();
    let b = xml.find("b=2").unwrap();
    assert!(a < b);
}

#[test]
fn test_no_escaping_by_default() {
    let root = parse(["0 NOTE <b>&\"x\""]);
    assert_eq!(
        serialize(&root),
        "<gedcom>\n\t<NOTE><b>&\"x\"</NOTE>\n</gedcom>"
    );
}

#[test]
fn test_custom_format_config() {
    let root = parse(["0 @I1@ INDI", "1 NOTE a&b"]);
    let config = FormatConfig {
        indent: "  ".to_string(),
        attribute_style: AttributeStyle::Quoted,
        escape: true,
    };
    assert_eq!(
        format_xml_with_config(&root, &config),
        "<gedcom>\n  <INDI id=\"@I1@\">\n    <NOTE>a&amp;b</NOTE>\n  </INDI>\n</gedcom>"
    );
}

#[test]
fn test_display_matches_serialize() {
    let root = parse(SAMPLE_LINES);
    assert_eq!(root.to_string(), serialize(&root));
}

#[test]
fn test_serialization_does_not_mutate() {
    let root = parse(SAMPLE_LINES);
    let before = root.clone();
    let first = serialize(&root);
    let second = serialize(&root);
    assert_eq!(first, second);
    assert_eq!(root, before);
}

#[test]
fn test_deeply_nested_chain() {
    const LEVELS: usize = 100_000;
    let lines: Vec<String> = (0..LEVELS).map(|level| format!("{} T", level)).collect();

    let root = parse(&lines);
    assert_eq!(root.max_depth(), LEVELS);

    let flat = FormatConfig {
        indent: String::new(),
        ..FormatConfig::default()
    };
    let mut expected = String::from("<gedcom>\n");
    expected.push_str(&"<T>\n".repeat(LEVELS - 1));
    expected.push_str("<T></T>\n");
    expected.push_str(&"</T>\n".repeat(LEVELS - 1));
    expected.push_str("</gedcom>");
    assert_eq!(format_xml_with_config(&root, &flat), expected);

    drop(root);
}

#[test]
fn test_deep_chain_default_indentation() {
    const LEVELS: usize = 4_000;
    let lines: Vec<String> = (0..LEVELS).map(|level| format!("{} T", level)).collect();

    let xml = serialize(&parse(&lines));
    let deepest = format!("\n{}<T></T>\n", "\t".repeat(LEVELS));
    assert!(xml.contains(&deepest));
    assert!(xml.ends_with("\n\t</T>\n</gedcom>"));
}
