//! gridcalc CLI - evaluate a pipe-delimited grid

use anyhow::{Context, Result};
use clap::Parser;
use gridcalc::prelude::*;
use gridcalc::{column_widths, DEFAULT_NUMBER_FORMAT};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(
    author,
    version,
    about = "Evaluate a pipe-delimited grid of numbers, expressions and clone directives"
)]
struct Cli {
    /// Input file (cells separated by '|', rows by newlines)
    input: PathBuf,

    /// Log pass details and print the grid after clone resolution to stderr
    #[arg(short, long)]
    debug: bool,

    /// Separate cells with " | " instead of "|"
    #[arg(long = "pp", visible_alias = "pretty")]
    pretty: bool,

    /// Pad every cell but the last of a row to its column width
    #[arg(long)]
    pad: bool,

    /// printf-style format for numbers (flags -+ 0, width, precision, verbs f e g)
    #[arg(short, long, default_value = DEFAULT_NUMBER_FORMAT)]
    format: NumberFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(&cli)
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let read_options = ReadOptions {
        number_format: cli.format.clone(),
        ..Default::default()
    };
    let write_options = WriteOptions {
        pad: cli.pad,
        pretty: cli.pretty,
        ..Default::default()
    };

    let mut grid = GridReader::read_file(&cli.input, &read_options)
        .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;
    tracing::debug!(rows = grid.row_count(), columns = grid.column_count(), "loaded grid");

    let clones_resolved = grid
        .resolve_clones()
        .context("Failed to resolve clone directives")?;

    if cli.debug {
        dump_grid(&grid, &write_options)?;
    }

    let formulas_evaluated = grid
        .evaluate_formulas(&cli.format)
        .context("Failed to evaluate expressions")?;

    tracing::debug!(clones_resolved, formulas_evaluated, "calculation finished");
    tracing::debug!(widths = ?column_widths(&grid), "column widths");

    GridWriter::write(&grid, io::stdout().lock(), &write_options)
        .context("Failed to write output")?;

    Ok(())
}

/// Print the grid as it stands between clone resolution and evaluation
fn dump_grid(grid: &Grid, options: &WriteOptions) -> Result<()> {
    GridWriter::write(grid, io::stderr().lock(), options)
        .context("Failed to write intermediate grid")?;
    eprintln!("{}", "-".repeat(80));
    Ok(())
}
