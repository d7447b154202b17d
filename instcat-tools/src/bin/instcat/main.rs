//! instcat: cone selection and inspection of phoSim instance catalogs

mod cli;
mod info;
mod logging;
mod select;
mod separation;
mod split;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Select(args) => select::run(args),
        Commands::Info(args) => info::run(args),
        Commands::Split(args) => split::run(args),
        Commands::Separation(args) => separation::run(args),
    }
}
