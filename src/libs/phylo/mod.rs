pub mod error;
pub mod generate;
pub mod node;
pub mod parser;
pub mod tree;
pub mod writer;

pub use error::{ParseErrorKind, TreeError};
pub use node::{Edge, EdgeId, Node, NodeId};
pub use tree::query::Lca;
pub use tree::Tree;
