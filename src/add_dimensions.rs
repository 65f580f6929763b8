/*
cargo add_dimensions \
    --dimension-label supervision_type -v PAROLE -v PROBATION -s count \
    --in-file  fixtures/ftr_referrals_by_race_and_ethnicity_60_days.json \
    --out-file fixtures/ftr_referrals_by_race_and_ethnicity_60_days_updated.json

rates
cargo add_dimensions \
    --dimension-label district \
    -v district_a -v district_b -v district_c -v ALL -r average_change \
    --in-file  fixtures/average_change_lsir_score_by_month.json \
    --out-file fixtures/average_change_lsir_score_by_month_updated.json
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use fixture_dims::{expand, read_records, write_records, DimensionSpec, Record};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

// Break every fixture row down along a new dimension
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    // JSON-lines file to read
    #[arg(long)]
    in_file: PathBuf,

    // JSON-lines file to write (overwritten)
    #[arg(long)]
    out_file: PathBuf,

    // Key of the new dimension, e.g. supervision_type
    #[arg(short = 'l', long)]
    dimension_label: String,

    // Values of the new dimension, repeat once per value
    #[arg(short = 'v', long = "dimension-value", required = true)]
    dimension_values: Vec<String>,

    // Fields whose integer value is split across the new rows
    #[arg(short = 's', long = "split")]
    split_fields: Vec<String>,

    // Fields that get an independent random value in each new row
    #[arg(short = 'r', long = "random")]
    random_fields: Vec<String>,

    // Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    // Log every row before and after expansion
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    dimension_label: &'a str,
    dimension_values: &'a [String],
    input_rows: usize,
    output_rows: usize,
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let spec = DimensionSpec::new(
        cli.dimension_label.clone(),
        cli.dimension_values.clone(),
        cli.split_fields.clone(),
        cli.random_fields.clone(),
    )
    .context("invalid dimension options")?;

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("add_dimensions_{ts}.log"));
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    WriteLogger::init(level, LogConfig::default(), File::create(&log_path)?)?;
    info!("Starting dimension expansion: {:?}", spec);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Reading fixture file {:?}", cli.in_file);
    let rows = read_records(&cli.in_file)
        .with_context(|| format!("reading {}", cli.in_file.display()))?;
    info!("Loaded {} rows from {:?}", rows.len(), cli.in_file);

    println!("Processing {} rows", rows.len());
    let bar = ProgressBar::new(rows.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
    )?);

    let mut expanded: Vec<Record> = Vec::with_capacity(rows.len() * spec.values().len());
    for (idx, row) in rows.iter().enumerate() {
        debug!("BEFORE: {}", Value::Object(row.clone()));
        let new_rows = expand(row, &spec, &mut rng)
            .with_context(|| format!("row {} of {}", idx + 1, cli.in_file.display()))?;
        for new_row in &new_rows {
            debug!("AFTER:  {}", Value::Object(new_row.clone()));
        }
        expanded.extend(new_rows);
        bar.inc(1);
    }
    bar.finish();

    println!("Writing results to {:?}", cli.out_file);
    write_records(&cli.out_file, &expanded)
        .with_context(|| format!("writing {}", cli.out_file.display()))?;

    let summary = RunSummary {
        dimension_label: spec.label(),
        dimension_values: spec.values(),
        input_rows: rows.len(),
        output_rows: expanded.len(),
        seed: cli.seed,
    };
    info!("Done: {}", serde_json::to_string(&summary)?);

    println!("\n=== Expansion summary ===");
    println!("Dimension          : {} ({} values)", summary.dimension_label, summary.dimension_values.len());
    println!("Split fields       : {:?}", spec.split_fields());
    println!("Random fields      : {:?}", spec.random_fields());
    println!("Input rows         : {}", summary.input_rows);
    println!("Output rows        : {}", summary.output_rows);
    println!("Output file        : {:?}", cli.out_file);
    println!("Log file           : {:?}", log_path);

    Ok(())
}
