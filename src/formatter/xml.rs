use super::{CommonFormatter, FormatConfig, Formatter};
use crate::parser::Node;

/// Name of the attribute a branch node's own value moves into
pub const VALUE_ATTRIBUTE: &str = "value";

/// Renders a tree as tab-indented XML.
///
/// Leaves keep their value inline: `<NAME>John</NAME>`. A node with children
/// opens on its own line, lists each child on its own line, and closes at its
/// own indentation; a non-empty value moves into a `value` attribute.
pub struct XmlFormatter;

impl CommonFormatter for XmlFormatter {}

impl Formatter for XmlFormatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String {
        Self::format_node(node, config)
    }
}

impl XmlFormatter {
    /// Walks the tree with an explicit stack of open branches, writing into a
    /// single buffer. Each frame is a branch plus the index of its next child.
    fn format_node(root: &Node, config: &FormatConfig) -> String {
        let mut out = String::new();
        let mut open: Vec<(&Node, usize)> = Vec::new();

        if Self::write_element(&mut out, root, config) {
            open.push((root, 0));
        }

        while let Some(frame) = open.last_mut() {
            let node = frame.0;
            match node.children().get(frame.1) {
                Some(child) => {
                    frame.1 += 1;
                    out.push('\n');
                    if Self::write_element(&mut out, child, config) {
                        open.push((child, 0));
                    }
                }
                None => {
                    out.push('\n');
                    out.push_str(&Self::create_indentation(node.depth(), config));
                    Self::write_close_tag(&mut out, node);
                    open.pop();
                }
            }
        }

        out
    }

    /// Writes a leaf in full, or just the opening line of a branch.
    /// Returns true if the element was left open.
    fn write_element(out: &mut String, node: &Node, config: &FormatConfig) -> bool {
        out.push_str(&Self::create_indentation(node.depth(), config));
        Self::write_open_tag(out, node, config);
        if node.has_children() {
            return true;
        }
        out.push_str(&Self::format_text(node.value(), config));
        Self::write_close_tag(out, node);
        false
    }

    fn write_open_tag(out: &mut String, node: &Node, config: &FormatConfig) {
        out.push('<');
        out.push_str(node.name());
        for attribute in node.attributes() {
            out.push(' ');
            out.push_str(&Self::format_attribute(attribute, config));
        }
        if node.has_children() && !node.value().is_empty() {
            out.push(' ');
            out.push_str(VALUE_ATTRIBUTE);
            out.push_str("=\"");
            out.push_str(&Self::format_text(node.value(), config));
            out.push('"');
        }
        out.push('>');
    }

    fn write_close_tag(out: &mut String, node: &Node) {
        out.push_str("</");
        out.push_str(node.name());
        out.push('>');
    }
}
