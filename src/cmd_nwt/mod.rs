//! Subcommand modules for the `nwt` binary.

pub mod indent;
pub mod lca;
pub mod sim;
pub mod stat;
