use clap::*;
use itertools::Itertools;
use nwt::libs::phylo::Tree;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("lca")
        .about("Last common ancestor of a set of tips")
        .after_help(
            r###"
Resolves tip names against the tree and reports their last common ancestor.

Notes:
* The tree must be rooted.
* Names match tip labels only; internal labels are ignored.
* Any name without a matching tip aborts the command and lists every
  unresolved name. No partial answer is computed.

Output format:
* Key-value pairs (TSV):
  lca	X
  depth	1
  tips	A,B
  clade	A,B

Examples:
1. LCA of two tips:
   nwt lca tests/newick/abc.nwk A B

2. Read the tree from stdin:
   cat tests/newick/abc.nwk | nwt lca stdin A C
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input filename. [stdin] for standard input"),
        )
        .arg(
            Arg::new("names")
                .required(true)
                .num_args(1..)
                .index(2)
                .help("Tip names"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());
    let infile = args.get_one::<String>("infile").unwrap();
    let names: Vec<String> = args
        .get_many::<String>("names")
        .unwrap()
        .cloned()
        .collect();

    let tree = Tree::from_file(infile)?;
    let lca = tree.lca(&names)?;

    let label = tree
        .get_node(lca.node)
        .and_then(|n| n.name.clone())
        .unwrap_or_else(|| format!("node_{}", lca.node));
    writer.write_fmt(format_args!("lca\t{}\n", label))?;
    writer.write_fmt(format_args!("depth\t{}\n", tree.depth_of(lca.node)?))?;
    writer.write_fmt(format_args!(
        "tips\t{}\n",
        lca.depths.keys().join(",")
    ))?;

    // Full tip content of the clade below the LCA
    let clade = tree
        .postorder(lca.node)
        .iter()
        .filter_map(|&id| tree.get_node(id))
        .filter(|n| n.is_tip())
        .filter_map(|n| n.name.clone())
        .sorted()
        .join(",");
    writer.write_fmt(format_args!("clade\t{}\n", clade))?;

    Ok(())
}
