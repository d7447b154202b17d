use crate::cli::{InfoArgs, OutputFormat};
use instcat_tools::catalog::summarize;

pub fn run(args: &InfoArgs) -> anyhow::Result<()> {
    let summary = summarize(&args.input)?;

    match args.format {
        OutputFormat::Table => {
            println!("Catalog: {}", args.input.display());
            println!("{}", summary);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
