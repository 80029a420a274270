mod comparison;
mod data;
mod helpers;

pub use comparison::{assert_depth_invariant, outline};
pub use data::{read_test_file, TestData, SAMPLE_LINES};
pub use helpers::tmp_file_path;

// Re-export common test types/traits
pub use crate::{
    converter::{ConvertOptions, Converter},
    convert_file,
    enums::AttributeStyle,
    error::{ArgumentError, ErrorKind, GedcomError, IOError, Result, SecurityError},
    formatter::{FormatConfig, Formatter, XmlFormatter},
    parse, parse_file,
    parser::{
        builder::{node_from_record, ID_ATTRIBUTE, ROOT_NAME},
        config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_SIZE},
        line::{is_identifier, parse_line, Entry, Record},
        node::{Attribute, Node},
        parse_lines, parse_lines_with_config, TreeBuilder,
    },
    serialize,
    utils::{
        format_xml, format_xml_with_config, parse_gedcom, parse_gedcom_with_config, read_file,
        write_file,
    },
};
