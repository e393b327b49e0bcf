use super::Tree;
use crate::libs::phylo::error::TreeError;
use crate::libs::phylo::node::{Edge, EdgeId, NodeId};

/// Create an edge from `parent_id` to `child_id`.
/// Updates the parent's `child_edges` list and the child's `parent_edge`.
pub fn link(tree: &mut Tree, parent_id: NodeId, child_id: NodeId) -> Result<EdgeId, TreeError> {
    if parent_id == child_id {
        return Err(TreeError::LogicError(
            "cannot link a node to itself".to_string(),
        ));
    }
    if tree.get_node(parent_id).is_none() {
        return Err(TreeError::LogicError(format!(
            "parent node {} not found",
            parent_id
        )));
    }
    if tree.get_node(child_id).is_none() {
        return Err(TreeError::LogicError(format!(
            "child node {} not found",
            child_id
        )));
    }

    // A second incoming edge would make the graph a DAG, not a tree
    if let Some(edge_id) = tree.nodes[child_id].parent_edge {
        return Err(TreeError::LogicError(format!(
            "node {} already has parent {}",
            child_id, tree.edges[edge_id].parent
        )));
    }

    let edge_id = tree.edges.len();
    tree.edges.push(Edge::new(edge_id, parent_id, child_id));
    tree.nodes[child_id].parent_edge = Some(edge_id);
    tree.nodes[parent_id].child_edges.push(edge_id);

    Ok(edge_id)
}

/// Root (or re-root) the tree at the specified node.
///
/// Edges along the path from the current orientation top to `new_root_id` are
/// reversed in place. Lengths and support values stay attached to their
/// edges, so no payload shuffling is needed. Node count never changes.
pub fn root_at(tree: &mut Tree, new_root_id: NodeId) -> Result<(), TreeError> {
    if tree.get_node(new_root_id).is_none() {
        return Err(TreeError::LogicError(format!(
            "node {} not found",
            new_root_id
        )));
    }

    // Edges to reverse, nearest-to-new-root first
    let mut edges_up = Vec::new();
    let mut current = new_root_id;
    while let Some(edge_id) = tree.nodes[current].parent_edge {
        edges_up.push(edge_id);
        current = tree.edges[edge_id].parent;
    }

    for edge_id in edges_up {
        let (old_parent, old_child) = {
            let edge = &tree.edges[edge_id];
            (edge.parent, edge.child)
        };

        // Flip the edge direction
        tree.edges[edge_id].parent = old_child;
        tree.edges[edge_id].child = old_parent;

        // Re-wire node adjacency
        tree.nodes[old_parent].child_edges.retain(|&e| e != edge_id);
        tree.nodes[old_child].child_edges.push(edge_id);
        tree.nodes[old_parent].parent_edge = Some(edge_id);
    }

    tree.nodes[new_root_id].parent_edge = None;
    tree.root = Some(new_root_id);

    Ok(())
}
