use std::{
    fs::{self, File},
    io::{BufWriter, Write},
};

use crate::{
    error::{GedcomError, Result},
    formatter::{FormatConfig, Formatter, XmlFormatter},
    parser::{parse_lines, parse_lines_with_config, Node, ParserConfig},
};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GedcomError::read(path, e))
}

/// Writes `content` through a buffered handle, surfacing flush failures
pub fn write_file(path: &str, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| GedcomError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|e| GedcomError::write(path, e))?;
    writer.flush().map_err(|e| GedcomError::write(path, e))
}

pub fn parse_gedcom(content: &str) -> Node {
    parse_lines(content.lines())
}

pub fn parse_gedcom_with_config(content: &str, config: &ParserConfig) -> Result<Node> {
    parse_lines_with_config(content.lines(), config)
}

pub fn format_xml(node: &Node) -> String {
    XmlFormatter.format(node, &FormatConfig::default())
}

pub fn format_xml_with_config(node: &Node, config: &FormatConfig) -> String {
    XmlFormatter.format(node, config)
}
