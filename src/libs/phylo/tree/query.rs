use super::Tree;
use crate::libs::phylo::error::TreeError;
use crate::libs::phylo::node::NodeId;
use std::collections::{BTreeMap, BTreeSet};

/// Path from the root to `id`, inclusive.
pub fn path_from_root(tree: &Tree, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
    let root = tree.root.ok_or(TreeError::NotRooted)?;

    if tree.get_node(id).is_none() {
        return Err(TreeError::LogicError(format!("node {} not found", id)));
    }

    let mut path = Vec::new();
    let mut current = id;

    loop {
        path.push(current);
        match tree.nodes[current].parent_edge {
            Some(edge_id) => current = tree.edges[edge_id].parent,
            None => break,
        }
    }

    path.reverse();
    if path[0] != root {
        return Err(TreeError::LogicError(format!(
            "node {} is detached from the root",
            id
        )));
    }

    Ok(path)
}

/// Number of edges between the root and `id`.
pub fn depth_of(tree: &Tree, id: NodeId) -> Result<usize, TreeError> {
    Ok(path_from_root(tree, id)?.len() - 1)
}

/// Most recent common ancestor of two nodes.
///
/// Root paths in a tree are totally ordered by depth, so the deepest shared
/// prefix element is the unique answer.
pub fn common_ancestor(tree: &Tree, a: NodeId, b: NodeId) -> Result<NodeId, TreeError> {
    let path_a = path_from_root(tree, a)?;
    let path_b = path_from_root(tree, b)?;

    let mut lca = None;
    for (u, v) in path_a.iter().zip(path_b.iter()) {
        if u == v {
            lca = Some(*u);
        } else {
            break;
        }
    }

    lca.ok_or_else(|| TreeError::LogicError("nodes share no common ancestor".to_string()))
}

/// Resolve a tip name to its node. Internal node labels do not count.
/// Duplicate tip names are a caller error; the first match wins.
pub fn tip_by_name(tree: &Tree, name: &str) -> Result<NodeId, TreeError> {
    tree.nodes
        .iter()
        .find(|n| n.is_tip() && n.name.as_deref() == Some(name))
        .map(|n| n.id)
        .ok_or_else(|| TreeError::UnknownTipName(name.to_string()))
}

/// Result of an LCA query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lca {
    /// The most recent common ancestor of all requested tips
    pub node: NodeId,
    /// Depth from the root of each requested tip (diagnostic)
    pub depths: BTreeMap<String, usize>,
}

/// Most recent common ancestor of a set of named tips.
///
/// Duplicate names collapse. A single tip is its own LCA; the full tip set
/// resolves to the root. If any requested name has no matching tip the call
/// fails with [`TreeError::MissingTips`] carrying every unresolved name; no
/// partial LCA over the found subset is computed. Callers that can tolerate
/// missing tips inspect the set inside the error.
pub fn lca<S: AsRef<str>>(tree: &Tree, names: &[S]) -> Result<Lca, TreeError> {
    if tree.root.is_none() {
        return Err(TreeError::NotRooted);
    }
    if names.is_empty() {
        return Err(TreeError::LogicError("empty tip name set".to_string()));
    }

    let wanted: BTreeSet<&str> = names.iter().map(|s| s.as_ref()).collect();

    let mut resolved = Vec::new();
    let mut missing = BTreeSet::new();
    for name in &wanted {
        match tip_by_name(tree, name) {
            Ok(id) => resolved.push((name.to_string(), id)),
            Err(TreeError::UnknownTipName(n)) => {
                missing.insert(n);
            }
            Err(e) => return Err(e),
        }
    }

    if !missing.is_empty() {
        return Err(TreeError::MissingTips(missing));
    }

    let mut depths = BTreeMap::new();
    for (name, id) in &resolved {
        depths.insert(name.clone(), depth_of(tree, *id)?);
    }

    let mut node = resolved[0].1;
    for (_, id) in &resolved[1..] {
        node = common_ancestor(tree, node, *id)?;
    }

    Ok(Lca { node, depths })
}
