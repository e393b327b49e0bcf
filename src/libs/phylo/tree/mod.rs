pub mod ops;
pub mod query;
pub mod stat;
pub mod traversal;

use crate::libs::phylo::error::TreeError;
use crate::libs::phylo::node::{Edge, EdgeId, Node, NodeId};
use std::collections::BTreeMap;

/// A phylogenetic tree stored as node and edge arenas.
///
/// Parent/child relations are held as arena indices, so the structure has no
/// ownership cycles and navigation is O(1). The root is optional: a tree
/// without a designated root is the unrooted representation, and traversal or
/// LCA queries on it fail with [`TreeError::NotRooted`].
#[derive(Debug, Default, Clone)]
pub struct Tree {
    /// Arena storage for all nodes
    pub(in crate::libs::phylo) nodes: Vec<Node>,

    /// Arena storage for all edges
    pub(in crate::libs::phylo) edges: Vec<Edge>,

    /// Designated root (None for the unrooted representation)
    pub(in crate::libs::phylo) root: Option<NodeId>,

    /// Length of the root branch, when the input carried one
    pub(in crate::libs::phylo) root_length: Option<f64>,

    /// Annotation on the root branch, preserved verbatim
    pub(in crate::libs::phylo) root_support: Option<String>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new detached node to the tree. Returns the new node's ID.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id));
        id
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get a reference to a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Get a reference to an edge by ID.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Get a mutable reference to an edge by ID.
    pub fn get_edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// Get the designated root, if any.
    pub fn get_root(&self) -> Option<NodeId> {
        self.root
    }

    /// Whether the tree has a designated root.
    pub fn is_rooted(&self) -> bool {
        self.root.is_some()
    }

    /// Designate a node as root without re-orienting edges.
    /// Use [`Tree::root_at`] to root at an arbitrary node.
    pub fn set_root(&mut self, id: NodeId) {
        if self.get_node(id).is_some() {
            self.root = Some(id);
        }
    }

    /// Drop the root designation. Edge orientation is retained, so the tree
    /// can be re-rooted later; traversal and LCA fail until then.
    pub fn unroot(&mut self) {
        self.root = None;
    }

    /// Length of the root branch, if the input specified one.
    pub fn root_length(&self) -> Option<f64> {
        self.root_length
    }

    /// Annotation of the root branch, if the input specified one.
    pub fn root_support(&self) -> Option<&str> {
        self.root_support.as_deref()
    }

    pub(in crate::libs::phylo) fn set_root_branch(
        &mut self,
        length: Option<f64>,
        support: Option<String>,
    ) {
        self.root_length = length;
        self.root_support = support;
    }

    /// The node every stored edge points away from (parent_edge is None).
    /// Equals the root for rooted trees; for unrooted trees it is where
    /// serialization starts.
    pub fn orientation_top(&self) -> Option<NodeId> {
        self.root
            .or_else(|| self.nodes.iter().find(|n| n.parent_edge.is_none()).map(|n| n.id))
    }

    /// Parent node of `id`, if any.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        let edge_id = self.nodes.get(id)?.parent_edge?;
        Some(self.edges[edge_id].parent)
    }

    /// The edge connecting `id` to its parent, if any.
    pub fn parent_edge_of(&self, id: NodeId) -> Option<&Edge> {
        let edge_id = self.nodes.get(id)?.parent_edge?;
        self.edges.get(edge_id)
    }

    /// Child nodes of `id`, in edge order.
    pub fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        match self.nodes.get(id) {
            Some(node) => node
                .child_edges
                .iter()
                .map(|&e| self.edges[e].child)
                .collect(),
            None => Vec::new(),
        }
    }

    // --- Delegation to ops ---

    pub fn link(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<EdgeId, TreeError> {
        ops::link(self, parent_id, child_id)
    }

    pub fn root_at(&mut self, new_root_id: NodeId) -> Result<(), TreeError> {
        ops::root_at(self, new_root_id)
    }

    // --- Delegation to traversal ---

    pub fn walk_postorder<F>(&self, visitor: F) -> Result<(), TreeError>
    where
        F: FnMut(&Node, Option<&Node>, Option<&Edge>) -> bool,
    {
        traversal::walk_postorder(self, visitor)
    }

    pub fn walk_preorder<F>(&self, visitor: F) -> Result<(), TreeError>
    where
        F: FnMut(&Node, Option<&Node>, Option<&Edge>) -> bool,
    {
        traversal::walk_preorder(self, visitor)
    }

    pub fn postorder(&self, start_node: NodeId) -> Vec<NodeId> {
        traversal::postorder(self, start_node)
    }

    pub fn preorder(&self, start_node: NodeId) -> Vec<NodeId> {
        traversal::preorder(self, start_node)
    }

    // --- Delegation to query ---

    pub fn path_from_root(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        query::path_from_root(self, id)
    }

    pub fn depth_of(&self, id: NodeId) -> Result<usize, TreeError> {
        query::depth_of(self, id)
    }

    pub fn common_ancestor(&self, a: NodeId, b: NodeId) -> Result<NodeId, TreeError> {
        query::common_ancestor(self, a, b)
    }

    pub fn tip_by_name(&self, name: &str) -> Result<NodeId, TreeError> {
        query::tip_by_name(self, name)
    }

    pub fn lca<S: AsRef<str>>(&self, names: &[S]) -> Result<query::Lca, TreeError> {
        query::lca(self, names)
    }

    // --- Delegation to stat ---

    pub fn tips(&self) -> Vec<NodeId> {
        stat::tips(self)
    }

    pub fn tip_names(&self) -> Vec<String> {
        stat::tip_names(self)
    }

    pub fn tip_name_ids(&self) -> BTreeMap<String, NodeId> {
        stat::tip_name_ids(self)
    }

    pub fn is_binary(&self) -> bool {
        stat::is_binary(self)
    }

    // --- Delegation to parser / writer ---

    pub fn from_newick(input: &str) -> Result<Self, TreeError> {
        crate::libs::phylo::parser::parse_newick(input)
    }

    /// Read one Newick tree from a file ("stdin" for standard input).
    pub fn from_file(infile: &str) -> anyhow::Result<Self> {
        let newick = crate::libs::io::read_to_string(infile)?;
        Ok(Self::from_newick(&newick)?)
    }

    pub fn to_newick(&self) -> String {
        crate::libs::phylo::writer::write_newick(self)
    }

    pub fn to_newick_with_format(&self, indent: &str) -> String {
        crate::libs::phylo::writer::write_newick_with_format(self, indent)
    }
}
