use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use pll_chains::{prelude::*, report};
use std::path::PathBuf;

/// Find chains of PLL algorithms that return the cube to a solved state.
/// Without --anki or --one, print every chain with each algorithm's steps.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Only chain these algorithms (default: the whole catalog)
    algorithms: Vec<String>,

    /// Maximum number of algorithms in a chain
    #[arg(short = 'd', long, default_value_t = 4)]
    max_depth: usize,

    /// Print chains as Anki flash cards
    #[arg(short, long)]
    anki: bool,

    /// Only print chains that use at least one of these algorithms
    #[arg(short, long, num_args = 1..)]
    search: Vec<String>,

    /// Stop at the first chains found from a random starting algorithm and
    /// print one of them
    #[arg(short, long)]
    one: bool,

    /// Algorithm catalog
    #[arg(short, long, default_value = "pll.json")]
    catalog: PathBuf,

    /// Log level; repeat for more (-vvv)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;
    log::debug!("Logging initialized");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load {}", args.catalog.display()))?;

    let candidates = if args.algorithms.is_empty() {
        catalog.names().collect::<Vec<_>>()
    } else {
        args.algorithms.iter().map(String::as_str).collect()
    };

    let search = Search::new(&catalog)
        .max_depth(args.max_depth)
        .early_exit(args.one);
    let initial = Facelets::solved();
    let mut rng = rand::thread_rng();
    let found = if args.one {
        search.run_shuffled(&initial, candidates.iter().copied(), &mut rng)
    } else {
        search.run(&initial, candidates.iter().copied())
    };

    let matching = found
        .iter()
        .filter(|chain| report::matches_search(chain, &args.search))
        .collect::<Vec<_>>();
    let unused = report::unused(&candidates, matching.iter().copied());

    let chosen = if args.one {
        match report::pick_one(matching, &mut rng) {
            Some(chain) => vec![chain],
            None => {
                log::error!("No patterns found");
                anyhow::bail!("No patterns found; cannot continue")
            }
        }
    } else {
        matching
    };

    for chain in chosen {
        if args.anki {
            println!("{}", report::anki(chain, &catalog));
        } else {
            println!("{}", report::text(chain, &catalog));
        }
    }

    if !unused.is_empty() {
        log::debug!("Not used: {}", unused.join(", "));
    }

    Ok(())
}
