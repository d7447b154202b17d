use crate::cli::SplitArgs;
use instcat_tools::split::split_catalog;

pub fn run(args: &SplitArgs) -> anyhow::Result<()> {
    let split = split_catalog(&args.input, &args.output_dir, &args.prefix, args.lines)?;

    println!(
        "Header: {} ({} lines)",
        split.header.display(),
        split.header_lines
    );
    for chunk in &split.chunks {
        println!("Chunk:  {}", chunk.display());
    }
    println!(
        "{} object lines in {} chunk(s)",
        split.object_lines,
        split.chunks.len()
    );

    Ok(())
}
