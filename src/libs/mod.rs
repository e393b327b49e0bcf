pub mod io;
pub mod phylo;
