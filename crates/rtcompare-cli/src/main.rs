//! `rtcompare` — render backend comparison charts from layer benchmark reports.
//!
//! ```text
//! USAGE:
//!   rtcompare                         Parse results/bench_*.txt, write plots/<layer>.png
//!   rtcompare --format svg            Write SVG charts instead
//!   rtcompare --summary               Also print every table to stdout
//!   rtcompare --results-dir R --plots-dir P
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rtcompare_chart::{render_layers, ImageFormat};
use rtcompare_report::{BackendSet, LayerType, LAYER_SIZES};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rtcompare",
    about = "Compare layer benchmark reports across math backends",
    version
)]
struct Cli {
    /// Directory holding the bench_*.txt reports.
    #[arg(long, default_value = "results")]
    results_dir: PathBuf,

    /// Directory charts are written to (created if missing).
    #[arg(long, default_value = "plots")]
    plots_dir: PathBuf,

    /// Chart image format: png or svg.
    #[arg(long, default_value = "png")]
    format: ImageFormat,

    /// Print each layer's real-time factors per backend.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let set = BackendSet::load(&cli.results_dir).with_context(|| {
        format!(
            "Failed to load benchmark reports from {}",
            cli.results_dir.display()
        )
    })?;

    if cli.summary {
        print_summary(&set);
    }

    tracing::info!(
        "Rendering {} charts as {}",
        LayerType::ALL.len(),
        cli.format.extension()
    );

    let written = render_layers(&set, &cli.plots_dir, cli.format)
        .with_context(|| format!("Failed to render charts into {}", cli.plots_dir.display()))?;

    for path in &written {
        println!("Generated: {}", path.display());
    }

    Ok(())
}

fn print_summary(set: &BackendSet) {
    for layer in LayerType::ALL {
        println!("{layer} Layer (real-time factor)");
        print!("  {:<28}", "backend");
        for size in LAYER_SIZES {
            print!("  {size:>9}");
        }
        println!();
        println!("  {:-<28}{}", "", "  ---------".repeat(LAYER_SIZES.len()));

        for (backend, table) in set.iter() {
            print!("  {:<28}", backend.label());
            for ratio in table.row(layer) {
                print!("  {ratio:>9.2}");
            }
            println!();
        }
        println!();
    }
}
