/*
cargo filter_district \
    --in-file  fixtures/revocations_matrix_distribution_by_district.json \
    --out-file fixtures/revocations_matrix_distribution_by_district_subset.json \
    --min 03 --max 07
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use fixture_dims::filter::DEFAULT_FIELD;
use fixture_dims::{read_records, write_records, DistrictRange};
use log::{info, warn};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

// Keep only the rows whose district falls inside [min, max] (string order)
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[arg(long)]
    in_file: PathBuf,

    #[arg(long)]
    out_file: PathBuf,

    // Lower bound, inclusive
    #[arg(long)]
    min: Option<String>,

    // Upper bound, inclusive
    #[arg(long)]
    max: Option<String>,

    #[arg(long, default_value = DEFAULT_FIELD)]
    field: String,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let range = DistrictRange::new(cli.field.clone(), cli.min.clone(), cli.max.clone())
        .context("invalid district bounds")?;

    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("filter_district_{ts}.log"));
    WriteLogger::init(LevelFilter::Info, LogConfig::default(), File::create(&log_path)?)?;

    if range.is_unbounded() {
        warn!("No bounds given, every row is kept");
    }

    let rows = read_records(&cli.in_file)
        .with_context(|| format!("reading {}", cli.in_file.display()))?;
    let total = rows.len();
    let kept = range.apply(rows);
    info!("Kept {} of {} rows using {:?}", kept.len(), total, range);

    write_records(&cli.out_file, &kept)
        .with_context(|| format!("writing {}", cli.out_file.display()))?;

    println!("Kept {} of {} rows → {}", kept.len(), total, cli.out_file.display());
    Ok(())
}
