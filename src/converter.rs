use tracing::{debug, info, instrument};

use crate::{
    error::Result,
    formatter::FormatConfig,
    parser::{Node, ParserConfig},
    utils::{format_xml_with_config, parse_gedcom_with_config, read_file, write_file},
};

/// Options for one GEDCOM to XML conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub parser: ParserConfig,
    pub format: FormatConfig,
}

/// No parser limits unless asked for; any well-formed input converts
impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            parser: ParserConfig::unbounded(),
            format: FormatConfig::default(),
        }
    }
}

/// High-level “Converter” utility struct tying the line parser, the tree
/// builder and the XML formatter together.
pub struct Converter;

impl Converter {
    /// Converts GEDCOM text to XML text
    pub fn convert_str(content: &str, options: &ConvertOptions) -> Result<String> {
        let root = parse_gedcom_with_config(content, &options.parser)?;
        debug!(
            "Built tree of {} nodes, max depth {}",
            root.node_count(),
            root.max_depth()
        );
        Ok(format_xml_with_config(&root, &options.format))
    }

    /// Reads and builds the tree for the GEDCOM file at `input`
    #[instrument(skip(config))]
    pub fn read_tree(input: &str, config: &ParserConfig) -> Result<Node> {
        let content = read_file(input)?;
        info!("Read {} bytes from {}", content.len(), input);

        let root = parse_gedcom_with_config(&content, config)?;
        debug!(
            "Built tree of {} nodes, max depth {}",
            root.node_count(),
            root.max_depth()
        );
        Ok(root)
    }

    /// Serializes `root` and writes the XML to `output`
    #[instrument(skip(root, config))]
    pub fn write_tree(root: &Node, output: &str, config: &FormatConfig) -> Result<()> {
        let xml = format_xml_with_config(root, config);
        write_file(output, &xml)?;
        info!("Wrote {} bytes to {}", xml.len(), output);
        Ok(())
    }

    /// Reads `input`, converts it and writes the XML to `output`
    pub fn convert_file(input: &str, output: &str, options: &ConvertOptions) -> Result<()> {
        let root = Self::read_tree(input, &options.parser)?;
        Self::write_tree(&root, output, &options.format)
    }
}
