pub mod libs;

pub use crate::libs::io::{reader, writer};
pub use crate::libs::phylo;
