use clap::*;
use nwt::libs::phylo::generate;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("sim")
        .about("Simulates a random tree under the Yule process")
        .after_help(
            r###"
Grows a tree by repeatedly splitting a uniformly chosen tip until the
requested number of tips is reached. Tips are labeled T0, T1, ...

Notes:
* At least 2 tips are required.
* Branch lengths are not assigned; the output is a topology.
* With a fixed --seed the output is reproducible.

Examples:
1. A rooted 5-tip tree:
   nwt sim 5 --seed 42

2. An unrooted topology:
   nwt sim 8 --unrooted -o sim.nwk

3. Three replicates, one per line:
   nwt sim 5 --count 3 --seed 42
"###,
        )
        .arg(
            Arg::new("ntips")
                .required(true)
                .num_args(1)
                .index(1)
                .value_parser(value_parser!(usize))
                .help("Number of tips to generate"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .value_parser(value_parser!(u64))
                .help("Seed the RNG for reproducible output"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .num_args(1)
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("Number of trees to generate, one per line"),
        )
        .arg(
            Arg::new("unrooted")
                .long("unrooted")
                .action(ArgAction::SetTrue)
                .help("Do not designate a root"),
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

    let n_tips = *args.get_one::<usize>("ntips").unwrap();
    let count = *args.get_one::<usize>("count").unwrap();
    let rooted = !args.get_flag("unrooted");

    // One RNG across replicates: a fixed seed reproduces the whole batch
    let mut rng = match args.get_one::<u64>("seed") {
        Some(seed) => SmallRng::seed_from_u64(*seed),
        None => SmallRng::from_entropy(),
    };

    for _ in 0..count {
        let tree = generate::yule(n_tips, rooted, &mut rng)?;
        writer.write_all((tree.to_newick() + "\n").as_ref())?;
    }

    Ok(())
}
