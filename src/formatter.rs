mod xml;

pub use self::xml::XmlFormatter;
use crate::{
    enums::AttributeStyle,
    parser::{Attribute, Node},
};

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Emitted once per level of depth
    pub indent: String,
    /// How regular attributes are written
    pub attribute_style: AttributeStyle,
    /// Whether to replace XML special characters with entities
    pub escape: bool,
}

/// Default configuration reproduces the classic tab-indented output
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            attribute_style: AttributeStyle::Literal,
            escape: false,
        }
    }
}

/// Trait for formatting a tree as a string
pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String;
}

/// Shared pieces of element rendering
pub trait CommonFormatter {
    /// Creates the indentation string for a node at `depth`
    fn create_indentation(depth: usize, config: &FormatConfig) -> String {
        config.indent.repeat(depth)
    }

    /// Renders one attribute, without the leading space
    fn format_attribute(attribute: &Attribute, config: &FormatConfig) -> String {
        let value = Self::format_text(&attribute.value, config);
        match config.attribute_style {
            AttributeStyle::Literal => format!("\"{}={}\"", attribute.name, value),
            AttributeStyle::Quoted => format!("{}=\"{}\"", attribute.name, value),
        }
    }

    /// Text content or attribute value, escaped only if configured
    fn format_text(text: &str, config: &FormatConfig) -> String {
        if config.escape {
            helpers::escape(text)
        } else {
            text.to_string()
        }
    }
}

/// Helper functions for formatting
pub mod helpers {
    pub fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }
}
