//! Benchmark: Parse layer benchmark reports
//!
//! Times the parser on each report and prints where each layer type crosses
//! real time.

use rtcompare_report::prelude::*;
use rtcompare_report::parse_report;
use std::time::Instant;

fn main() -> Result<()> {
    println!("🏃 Report Parser Benchmark\n");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: cargo run --example benchmark_report -- <bench.txt> [bench.txt ...]");
        eprintln!("Example: cargo run --example benchmark_report -- results/bench_xsimd.txt");
        std::process::exit(1);
    }

    let mut total_time = std::time::Duration::ZERO;
    let mut total_bytes = 0u64;

    for report_path in &args {
        let path = std::path::Path::new(report_path);
        if !path.exists() {
            println!("⚠️  Skipping {report_path} (not found)\n");
            continue;
        }

        println!("📂 Parsing: {report_path}");

        let start = Instant::now();
        let table = parse_report(path)?;
        let elapsed = start.elapsed();

        total_time += elapsed;
        total_bytes += std::fs::metadata(path)?.len();

        println!(
            "   ⏱️  Parse time:   {:.3}ms",
            elapsed.as_secs_f64() * 1000.0
        );

        // Largest size still at or above real time
        for (layer, row) in table.iter() {
            let limit = LAYER_SIZES
                .iter()
                .zip(row)
                .filter(|(_, &ratio)| ratio >= 1.0)
                .map(|(&size, _)| size)
                .max();
            match limit {
                Some(size) => println!("   {layer:<8} real-time up to size {size}"),
                None => println!("   {layer:<8} never real-time"),
            }
        }

        println!();
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Benchmark Summary:");
    println!("   Total time:  {:.3}ms", total_time.as_secs_f64() * 1000.0);
    println!("   Total size:  {total_bytes} bytes");
    println!("\n✨ Benchmark complete!\n");

    Ok(())
}
