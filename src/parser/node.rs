use std::fmt;

use crate::formatter::{FormatConfig, Formatter, XmlFormatter};

/// A single `name=value` pair on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One XML element of the converted tree.
///
/// Each node owns its children outright. A node's depth is fixed when it is
/// attached and is always one more than its parent's; a detached node sits at
/// depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    value: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
    depth: usize,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            depth: 0,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Appends an attribute; duplicate names are kept
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Attaches `child` as the last child, re-basing its whole subtree so
    /// that depths stay relative to this node.
    pub fn add_child(&mut self, mut child: Self) {
        child.set_depth(self.depth + 1);
        self.children.push(child);
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        let mut pending = vec![(self, depth)];
        while let Some((node, depth)) = pending.pop() {
            // subtrees already at the right depth are left alone
            if node.depth == depth {
                continue;
            }
            node.depth = depth;
            pending.extend(node.children.iter_mut().map(|child| (child, depth + 1)));
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Depth of the deepest node in this subtree
    pub fn max_depth(&self) -> usize {
        let mut deepest = self.depth;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            deepest = deepest.max(node.depth);
            pending.extend(node.children.iter());
        }
        deepest
    }

    /// Pre-order walk of this subtree
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

// Children are unlinked into a worklist so dropping a deep chain never recurses
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&XmlFormatter.format(self, &FormatConfig::default()))
    }
}
