/// NodeId is an index into the Tree's node arena.
/// It is lightweight (Copy) and safe (no pointers).
pub type NodeId = usize;

/// EdgeId is an index into the Tree's edge arena.
pub type EdgeId = usize;

#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for the node (index in the arena)
    pub id: NodeId,

    /// Node name/label (taxon name for tips, often absent for internal nodes)
    pub name: Option<String>,

    /// Edge towards the parent (None for the root / orientation top)
    pub parent_edge: Option<EdgeId>,

    /// Ordered edges towards children
    pub child_edges: Vec<EdgeId>,
}

impl Node {
    /// Create a new detached node with a specific ID
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            name: None,
            parent_edge: None,
            child_edges: Vec::new(),
        }
    }

    /// Set the name of the node
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// A node is a tip iff it has no child edges
    pub fn is_tip(&self) -> bool {
        self.child_edges.is_empty()
    }
}

/// Directed link between a parent node and a child node.
///
/// Branch length and support/annotation text live on the edge, so re-rooting
/// moves them together with the link they describe.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique identifier for the edge (index in the arena)
    pub id: EdgeId,

    pub parent: NodeId,
    pub child: NodeId,

    /// Branch length (absent when the input did not specify one)
    pub length: Option<f64>,

    /// Raw bracket annotation from the Newick input (e.g. `&support=95`),
    /// preserved verbatim and never evaluated
    pub support: Option<String>,
}

impl Edge {
    pub fn new(id: EdgeId, parent: NodeId, child: NodeId) -> Self {
        Self {
            id,
            parent,
            child,
            length: None,
            support: None,
        }
    }
}
