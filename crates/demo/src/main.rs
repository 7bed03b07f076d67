// File: crates/demo/src/main.rs
// Summary: Demo loads a standings CSV and renders the cumulative points race chart to SVG.

use anyhow::{Context, Result};
use race_core::types::GAME_COUNT;
use race_core::{game_labels, load_scores, Chart, RenderOptions};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT: &str = "WR1_points.csv";
const CHART_TITLE: &str = "ALGS Championship: Winners Round 1";

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled standings file
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let path = PathBuf::from(&raw);
    anyhow::ensure!(path.exists(), "file not found: {}", path.display());
    println!("Using input file: {}", path.display());

    let labels = game_labels(GAME_COUNT);
    let table = load_scores(&path, &labels)
        .with_context(|| format!("failed to load standings '{}'", path.display()))?;
    println!("Loaded {} teams across {} games", table.rows.len(), labels.len());

    let cumulative = table.cumulative();
    if let Some(max) = cumulative.max_value() {
        println!("Max cumulative score: {max}");
    }

    let chart = Chart::new(CHART_TITLE, cumulative);
    let opts = RenderOptions::default();
    let out = out_name(&path);
    chart
        .render_to_svg(&opts, &out)
        .with_context(|| format!("failed to render '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Produce output file name like target/out/race_<stem>.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("race_{stem}.svg"));
    out
}
