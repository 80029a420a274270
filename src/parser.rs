pub mod builder;
pub mod config;
pub mod line;
pub mod node;

pub use builder::{parse_lines, parse_lines_with_config, TreeBuilder};
pub use config::ParserConfig;
pub use line::{parse_line, Entry, Record};
pub use node::{Attribute, Node};
