use crate::cli::SeparationArgs;
use anyhow::Context;
use instcat_core::angle::{parse_dec, parse_ra};
use instcat_core::{SeparationMetric, SkyPosition};

pub fn run(args: &SeparationArgs) -> anyhow::Result<()> {
    let a = position(&args.ra0, &args.dec0)?;
    let b = position(&args.ra1, &args.dec1)?;
    let metric = args.metric;

    let sep = metric.separation_deg(&a, &b);
    println!("{:.9}", sep);

    Ok(())
}

fn position(ra: &str, dec: &str) -> anyhow::Result<SkyPosition> {
    let ra = parse_ra(ra).with_context(|| format!("Cannot parse RA '{}'", ra))?;
    let dec = parse_dec(dec).with_context(|| format!("Cannot parse Dec '{}'", dec))?;
    Ok(SkyPosition::from_angles(ra, dec))
}
