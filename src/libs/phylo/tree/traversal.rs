use super::Tree;
use crate::libs::phylo::error::TreeError;
use crate::libs::phylo::node::{Edge, Node, NodeId};

/// Visit every node in post-order (children strictly before their parent).
///
/// The visitor receives the node, its parent (None for the root) and the
/// connecting edge (None for the root). Returning `false` stops the walk
/// immediately; this early exit is not an error. Each invocation re-walks
/// the full tree, nothing persists between calls. The walk uses an explicit
/// stack, so tree depth is bounded by memory, not by the call stack.
pub fn walk_postorder<F>(tree: &Tree, mut visitor: F) -> Result<(), TreeError>
where
    F: FnMut(&Node, Option<&Node>, Option<&Edge>) -> bool,
{
    let root = tree.root.ok_or(TreeError::NotRooted)?;

    // Two-phase stack: first pass expands children, second pass visits
    let mut stack = vec![(root, false)];
    while let Some((id, expanded)) = stack.pop() {
        if !expanded {
            stack.push((id, true));
            for &edge_id in tree.nodes[id].child_edges.iter().rev() {
                stack.push((tree.edges[edge_id].child, false));
            }
            continue;
        }

        let node = &tree.nodes[id];
        let edge = node.parent_edge.map(|e| &tree.edges[e]);
        let parent = edge.map(|e| &tree.nodes[e.parent]);
        if !visitor(node, parent, edge) {
            return Ok(());
        }
    }

    Ok(())
}

/// Visit every node in pre-order (parent before its children).
/// Same visitor contract as [`walk_postorder`].
pub fn walk_preorder<F>(tree: &Tree, mut visitor: F) -> Result<(), TreeError>
where
    F: FnMut(&Node, Option<&Node>, Option<&Edge>) -> bool,
{
    let root = tree.root.ok_or(TreeError::NotRooted)?;

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = &tree.nodes[id];
        let edge = node.parent_edge.map(|e| &tree.edges[e]);
        let parent = edge.map(|e| &tree.nodes[e.parent]);
        if !visitor(node, parent, edge) {
            return Ok(());
        }

        for &edge_id in tree.nodes[id].child_edges.iter().rev() {
            stack.push(tree.edges[edge_id].child);
        }
    }

    Ok(())
}

/// Node IDs in post-order (children before parent).
pub fn postorder(tree: &Tree, start_node: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    let mut stack = vec![(start_node, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            result.push(id);
            continue;
        }
        if let Some(node) = tree.get_node(id) {
            stack.push((id, true));
            for &edge_id in node.child_edges.iter().rev() {
                stack.push((tree.edges[edge_id].child, false));
            }
        }
    }

    result
}

/// Node IDs in pre-order (parent before children).
pub fn preorder(tree: &Tree, start_node: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    let mut stack = vec![start_node];

    while let Some(id) = stack.pop() {
        if let Some(node) = tree.get_node(id) {
            result.push(id);
            // Push children in reverse order so they are processed in order
            for &edge_id in node.child_edges.iter().rev() {
                stack.push(tree.edges[edge_id].child);
            }
        }
    }

    result
}
