//! CLI argument definitions for instcat

use clap::{Args, Parser, Subcommand, ValueEnum};
use instcat_core::SeparationMethod;
use instcat_tools::split::DEFAULT_CHUNK_LINES;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "instcat")]
#[command(about = "Cone selection and inspection of phoSim instance catalogs")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keep the object lines within a cone; copy every other line
    Select(SelectArgs),

    /// Print header commands and line counts
    Info(InfoArgs),

    /// Split a catalog into a header file and object chunks
    Split(SplitArgs),

    /// Angular separation between two positions, in degrees
    Separation(SeparationArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct SelectArgs {
    /// Input instance catalog
    pub input: PathBuf,

    /// Cone center right ascension (degrees, or HMS e.g. 03h32m10s, 03:32:10)
    #[arg(
        long,
        required_unless_present = "at_pointing",
        requires = "dec",
        allow_hyphen_values = true
    )]
    pub ra: Option<String>,

    /// Cone center declination (degrees, or DMS e.g. -27d19m19s, -27:19:19)
    #[arg(
        long,
        required_unless_present = "at_pointing",
        requires = "ra",
        allow_hyphen_values = true
    )]
    pub dec: Option<String>,

    /// Center the cone on the catalog's rightascension/declination commands
    #[arg(long, conflicts_with_all = ["ra", "dec"])]
    pub at_pointing: bool,

    /// Cone radius in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub radius: f64,

    /// Output catalog, created or replaced
    #[arg(short, long)]
    pub output: PathBuf,

    /// Separation formula: vincenty, haversine or flat-sky
    #[arg(long, default_value = "vincenty", value_parser = SeparationMethod::from_str)]
    pub metric: SeparationMethod,

    /// Drop malformed object lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Input instance catalog
    pub input: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct SplitArgs {
    /// Input instance catalog
    pub input: PathBuf,

    /// Directory for the header and chunk files
    #[arg(long)]
    pub output_dir: PathBuf,

    /// File name prefix
    #[arg(long, default_value = "temp")]
    pub prefix: String,

    /// Maximum object lines per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_LINES)]
    pub lines: usize,
}

// Negative sexagesimal values need a preceding `--`.
#[derive(Args)]
pub struct SeparationArgs {
    /// First right ascension
    #[arg(allow_negative_numbers = true)]
    pub ra0: String,
    /// First declination
    #[arg(allow_negative_numbers = true)]
    pub dec0: String,
    /// Second right ascension
    #[arg(allow_negative_numbers = true)]
    pub ra1: String,
    /// Second declination
    #[arg(allow_negative_numbers = true)]
    pub dec1: String,

    /// Separation formula: vincenty, haversine or flat-sky
    #[arg(long, default_value = "vincenty", value_parser = SeparationMethod::from_str)]
    pub metric: SeparationMethod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_select_negative_dec() {
        let cli = Cli::try_parse_from([
            "instcat", "select", "in.txt", "--ra", "53.04", "--dec", "-27:19:19", "--radius",
            "0.1", "-o", "out.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Select(args) => {
                assert_eq!(args.dec.as_deref(), Some("-27:19:19"));
                assert!(!args.at_pointing);
            }
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn test_select_at_pointing() {
        let cli = Cli::try_parse_from([
            "instcat", "select", "in.txt", "--at-pointing", "--radius", "0.2", "-o", "out.txt",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Select(ref a) if a.at_pointing && a.ra.is_none()));
    }

    #[test]
    fn test_separation_negative_numbers() {
        let cli =
            Cli::try_parse_from(["instcat", "separation", "10", "-20.5", "11", "-20"]).unwrap();
        match cli.command {
            Commands::Separation(args) => assert_eq!(args.dec0, "-20.5"),
            _ => panic!("expected separation"),
        }
    }

    #[test]
    fn test_metric_names() {
        let cli = Cli::try_parse_from([
            "instcat", "select", "in.txt", "--at-pointing", "--radius", "0.2", "-o", "out.txt",
            "--metric", "flat-sky",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Select(ref a) if a.metric == SeparationMethod::FlatSky
        ));

        let cli = Cli::try_parse_from(["instcat", "separation", "10", "20", "11", "20"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Separation(ref a) if a.metric == SeparationMethod::Vincenty
        ));

        assert!(Cli::try_parse_from([
            "instcat", "separation", "10", "20", "11", "20", "--metric", "euclid",
        ])
        .is_err());
    }

    #[test]
    fn test_select_requires_center() {
        assert!(Cli::try_parse_from([
            "instcat", "select", "in.txt", "--radius", "0.2", "-o", "out.txt",
        ])
        .is_err());
    }
}
