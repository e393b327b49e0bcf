use super::Tree;
use crate::libs::phylo::node::NodeId;
use std::collections::BTreeMap;

/// IDs of all tips (nodes with no child edges), in arena order.
pub fn tips(tree: &Tree) -> Vec<NodeId> {
    tree.nodes
        .iter()
        .filter(|n| n.is_tip())
        .map(|n| n.id)
        .collect()
}

/// Names of all named tips, in arena order.
pub fn tip_names(tree: &Tree) -> Vec<String> {
    tree.nodes
        .iter()
        .filter(|n| n.is_tip())
        .filter_map(|n| n.name.clone())
        .collect()
}

/// Map of tip name to NodeId. With duplicate names the first one in arena
/// order wins, matching name resolution in queries; duplicates are a caller
/// error anyway.
pub fn tip_name_ids(tree: &Tree) -> BTreeMap<String, NodeId> {
    let mut map = BTreeMap::new();
    for node in &tree.nodes {
        if node.is_tip() {
            if let Some(name) = &node.name {
                map.entry(name.clone()).or_insert(node.id);
            }
        }
    }
    map
}

/// Check if every internal node has exactly two children.
pub fn is_binary(tree: &Tree) -> bool {
    tree.nodes
        .iter()
        .all(|n| n.is_tip() || n.child_edges.len() == 2)
}

/// Count internal nodes (non-tips).
pub fn internal_count(tree: &Tree) -> usize {
    tree.nodes.iter().filter(|n| !n.is_tip()).count()
}

/// Count named internal nodes.
pub fn internal_label_count(tree: &Tree) -> usize {
    tree.nodes
        .iter()
        .filter(|n| !n.is_tip() && n.name.is_some())
        .count()
}

/// Whether any edge carries a branch length.
pub fn has_lengths(tree: &Tree) -> bool {
    tree.edges.iter().any(|e| e.length.is_some())
}
