use clap::*;
use nwt::libs::phylo::tree::stat;
use nwt::libs::phylo::Tree;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("stat")
        .about("Prints statistics about a tree")
        .after_help(
            r###"
Prints information about the tree in the input.

Input format:
* Newick tree filename or 'stdin'

Output format:
* Key-value pairs (TSV, default):
  Type	cladogram
  nodes	7
  tips	4
  ...

* Tab-separated values (--style line):
  Type	nodes	tips	binary	tip labels	internal labels
  cladogram	7	4	yes	4	0

Examples:
1. Default statistics:
   nwt stat tests/newick/abc.nwk

2. Output to file:
   nwt stat tests/newick/abc.nwk -o stats.tsv
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
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .value_parser(["col", "line"])
                .default_value("col")
                .help("Output style. [col] for key-value pairs, [line] for TSV"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());
    let infile = args.get_one::<String>("infile").unwrap();
    let style = args.get_one::<String>("style").unwrap();

    let tree = Tree::from_file(infile)?;

    let n_node = tree.len();
    let n_tip = tree.tips().len();
    let n_tip_label = tree.tip_names().len();
    let n_internal_label = stat::internal_label_count(&tree);
    let is_binary = if tree.is_binary() { "yes" } else { "no" };
    let tree_type = if stat::has_lengths(&tree) {
        "phylogram"
    } else {
        "cladogram"
    };

    if style == "line" {
        writer.write_fmt(format_args!(
            "Type\tnodes\ttips\tbinary\ttip labels\tinternal labels\n"
        ))?;
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            tree_type, n_node, n_tip, is_binary, n_tip_label, n_internal_label
        ))?;
    } else {
        writer.write_fmt(format_args!("Type\t{}\n", tree_type))?;
        writer.write_fmt(format_args!("nodes\t{}\n", n_node))?;
        writer.write_fmt(format_args!("tips\t{}\n", n_tip))?;
        writer.write_fmt(format_args!("binary\t{}\n", is_binary))?;
        writer.write_fmt(format_args!("tip labels\t{}\n", n_tip_label))?;
        writer.write_fmt(format_args!("internal labels\t{}\n", n_internal_label))?;
        writer.write_fmt(format_args!(
            "rooted\t{}\n",
            if tree.is_rooted() { "yes" } else { "no" }
        ))?;
    }

    Ok(())
}
