extern crate clap;
use clap::*;

mod cmd_nwt;

fn main() -> anyhow::Result<()> {
    let app = Command::new("nwt")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`nwt` - Newick Tree toolkit")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_nwt::stat::make_subcommand())
        .subcommand(cmd_nwt::lca::make_subcommand())
        .subcommand(cmd_nwt::sim::make_subcommand())
        .subcommand(cmd_nwt::indent::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Info:
    * stat - Statistics about a tree
    * lca  - Last common ancestor of a set of tips

* Ops:
    * sim    - Simulate a random tree (Yule process)
    * indent - Re-format a tree with indentation

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("stat", sub_matches)) => cmd_nwt::stat::execute(sub_matches),
        Some(("lca", sub_matches)) => cmd_nwt::lca::execute(sub_matches),
        Some(("sim", sub_matches)) => cmd_nwt::sim::execute(sub_matches),
        Some(("indent", sub_matches)) => cmd_nwt::indent::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
