//! gedxml: a GEDCOM to XML converter
//!
//! This crate provides functionality to:
//! - Recognize GEDCOM data lines (level, tag or `@id@`, free text)
//! - Rebuild the nesting implied by levels into a tree of elements
//! - Render that tree as tab-indented XML
//! - Convert files end to end, with optional resource limits
//!
//! # Examples
//! ```
//! let root = gedxml::parse(["0 HEAD", "1 SOUR Aconex"]);
//! assert_eq!(
//!     gedxml::serialize(&root),
//!     "<gedcom>\n\t<HEAD>\n\t\t<SOUR>Aconex</SOUR>\n\t</HEAD>\n</gedcom>"
//! );
//! ```

use tracing::{debug, info, instrument};

pub mod converter;
pub mod enums;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use converter::{ConvertOptions, Converter};
pub use enums::AttributeStyle;
pub use error::{ErrorKind, GedcomError, Result};
pub use formatter::{FormatConfig, Formatter, XmlFormatter};
pub use parser::{Attribute, Node, ParserConfig, Record, TreeBuilder};

/// Builds the tree for `lines`; lines that are not GEDCOM data lines are skipped
pub fn parse<I, S>(lines: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parser::parse_lines(lines)
}

/// Renders `node` and its subtree as XML
pub fn serialize(node: &Node) -> String {
    utils::format_xml(node)
}

/// Builds the tree for the GEDCOM file at `path`, without parser limits
#[instrument]
pub fn parse_file(path: &str) -> Result<Node> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully, building tree");
    let root = utils::parse_gedcom_with_config(&content, &ParserConfig::unbounded())?;

    debug!("Parsing completed with {} nodes", root.node_count());
    Ok(root)
}

/// Converts the GEDCOM file at `input` into XML at `output` with default options
pub fn convert_file(input: &str, output: &str) -> Result<()> {
    Converter::convert_file(input, output, &ConvertOptions::default())
}
