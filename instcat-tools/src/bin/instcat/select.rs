use crate::cli::{OutputFormat, SelectArgs};
use anyhow::{anyhow, Context};
use instcat_core::angle::{parse_dec, parse_ra};
use instcat_core::SeparationMethod;
use instcat_tools::catalog::{read_header_block, read_header_commands};
use instcat_tools::select::{ConeQuery, ConeSelector, MalformedLinePolicy, SelectionStats};
use serde::Serialize;
use std::time::Instant;

pub fn run(args: &SelectArgs) -> anyhow::Result<()> {
    let query = cone_query(args)?;
    let metric = args.metric;
    let policy = if args.skip_malformed {
        MalformedLinePolicy::Skip
    } else {
        MalformedLinePolicy::Fail
    };

    let start = Instant::now();
    let stats = ConeSelector::new(query)
        .with_metric(metric)
        .with_policy(policy)
        .select_file(&args.input, &args.output)
        .with_context(|| {
            format!(
                "Cone selection of {} into {} failed",
                args.input.display(),
                args.output.display()
            )
        })?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match args.format {
        OutputFormat::Table => {
            println!("Cone: {} ({})", query, metric);
            println!("{}", stats);
            println!("Elapsed: {:.2} ms", elapsed_ms);
        }
        OutputFormat::Json => {
            let report = SelectReport {
                query,
                metric,
                stats,
                elapsed_ms,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SelectReport {
    query: ConeQuery,
    metric: SeparationMethod,
    stats: SelectionStats,
    elapsed_ms: f64,
}

fn cone_query(args: &SelectArgs) -> anyhow::Result<ConeQuery> {
    if args.at_pointing {
        // Commands placed after the objects need a full scan.
        let center = match read_header_block(&args.input)?.pointing() {
            Some(center) => Some(center),
            None => read_header_commands(&args.input)?.pointing(),
        };
        let center = center.ok_or_else(|| {
            anyhow!(
                "{} has no numeric rightascension/declination commands",
                args.input.display()
            )
        })?;
        return Ok(ConeQuery {
            center,
            radius_deg: args.radius,
        });
    }

    let (ra, dec) = match (&args.ra, &args.dec) {
        (Some(ra), Some(dec)) => (ra, dec),
        _ => anyhow::bail!("Both --ra and --dec are required without --at-pointing"),
    };
    let ra_deg = parse_ra(ra)
        .with_context(|| format!("Cannot parse RA '{}'", ra))?
        .degrees();
    let dec_deg = parse_dec(dec)
        .with_context(|| format!("Cannot parse Dec '{}'", dec))?
        .degrees();

    Ok(ConeQuery::new(ra_deg, dec_deg, args.radius))
}
