use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: u8) {
    let level = default_level(verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("instcat_tools={0},instcat={0}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_verbosity_levels() {
        let level = |args: &[&str]| default_level(Cli::try_parse_from(args).unwrap().verbose);
        assert_eq!(level(&["instcat", "info", "in.txt"]), "warn");
        assert_eq!(level(&["instcat", "-v", "info", "in.txt"]), "info");
        assert_eq!(level(&["instcat", "info", "in.txt", "-vv"]), "debug");
        assert_eq!(level(&["instcat", "-vvv", "info", "in.txt"]), "debug");
    }
}
