//! Level-stack tree construction
//!
//! Records arrive in file order. The builder keeps the chain of open nodes
//! from the root down to the most recent record; each new record first closes
//! every open node at or below its target depth, then opens itself beneath
//! whatever remains on top.

use tracing::{debug, warn};

use crate::error::{GedcomError, Result};
use crate::parser::config::{ParserConfig, ParsingContext};
use crate::parser::line::{parse_line, Entry, Record};
use crate::parser::node::Node;

/// Name of the synthetic element wrapping the whole record forest
pub const ROOT_NAME: &str = "gedcom";

/// Name of the attribute carrying a cross-reference id
pub const ID_ATTRIBUTE: &str = "id";

/// Incremental builder over a stream of records.
///
/// `stack[0]` is always the root. A node stays on the stack while later
/// records may still nest under it and is handed to its parent when closed,
/// so children end up in the order their records were seen.
#[derive(Debug)]
pub struct TreeBuilder {
    stack: Vec<Node>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Node::new(ROOT_NAME)],
        }
    }

    /// Depth of the most recently opened node
    pub fn current_depth(&self) -> usize {
        self.stack.last().map_or(0, Node::depth)
    }

    /// Adds one record to the tree and returns the depth it was given
    pub fn push(&mut self, record: Record<'_>) -> usize {
        // level 0 lines sit directly under the synthetic root
        let target = record.level.saturating_add(1);

        while self.stack.len() > 1 && self.current_depth() >= target {
            self.close_top();
        }

        let depth = self.current_depth() + 1;
        if target > depth {
            warn!(
                "Level {} follows depth {}, attaching {:?} at depth {}",
                record.level,
                depth - 1,
                record.token,
                depth
            );
        }

        let mut node = node_from_record(record);
        node.set_depth(depth);
        debug!("Opened <{}> at depth {}", node.name(), depth);
        self.stack.push(node);
        depth
    }

    /// Closes every open node and returns the root
    pub fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack.pop().unwrap_or_else(|| Node::new(ROOT_NAME))
    }

    fn close_top(&mut self) {
        let Some(node) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some(parent) => parent.add_child(node),
            None => self.stack.push(node),
        }
    }
}

/// Builds the element for one record, honouring the identifier inversion
pub fn node_from_record(record: Record<'_>) -> Node {
    match record.classify() {
        Entry::Identifier { id, name } => {
            if name.is_empty() {
                warn!("Identifier {} has no element name", id);
            }
            Node::new(name).with_attribute(ID_ATTRIBUTE, id)
        }
        Entry::Tag { name, value } => Node::new(name).with_value(value),
    }
}

/// Builds the tree for a sequence of raw lines, skipping non-data lines
pub fn parse_lines<I, S>(lines: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    for line in lines {
        if let Some(record) = parse_line(line.as_ref()) {
            builder.push(record);
        }
    }
    builder.finish()
}

/// Like [`parse_lines`], but enforces the limits in `config`
pub fn parse_lines_with_config<I, S>(lines: I, config: &ParserConfig) -> Result<Node>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    let mut context = ParsingContext::new();

    for line in lines {
        let line = line.as_ref();
        context
            .add_line(line, config)
            .map_err(|e| at_line(e, context.lines()))?;

        if let Some(record) = parse_line(line) {
            let depth = builder.push(record);
            config
                .validate_depth(depth)
                .map_err(|e| at_line(e, context.lines()))?;
        }
    }

    debug!(
        "Consumed {} lines ({} bytes)",
        context.lines(),
        context.current_size()
    );
    Ok(builder.finish())
}

fn at_line(err: GedcomError, line: usize) -> GedcomError {
    let context = match err.context() {
        Some(ctx) => format!("line {}: {}", line, ctx),
        None => format!("line {}", line),
    };
    err.with_context(context)
}
