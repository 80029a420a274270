use crate::Node;

/// Flattens a tree into `(depth, name)` pairs in document order
pub fn outline(node: &Node) -> Vec<(usize, String)> {
    node.descendants()
        .into_iter()
        .map(|n| (n.depth(), n.name().to_string()))
        .collect()
}

/// Asserts that every child sits exactly one level below its parent
///
/// # Panics
///
/// Panics if any child's depth is not its parent's depth plus one
pub fn assert_depth_invariant(root: &Node) {
    for node in root.descendants() {
        for child in node.children() {
            assert_eq!(
                child.depth(),
                node.depth() + 1,
                "<{}> at depth {} under <{}> at depth {}",
                child.name(),
                child.depth(),
                node.name(),
                node.depth()
            );
        }
    }
}
