mod app;
mod chart;
mod data;
mod style;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use app::BenchPlotApp;
use eframe::egui;

/// Benchmark results, relative to the working directory.
pub const INPUT_PATH: &str = "benchmark.tsv";
/// Rendered chart, overwritten on every run.
pub const OUTPUT_PATH: &str = "benchmark.svg";

fn main() -> Result<()> {
    env_logger::init();

    let table = data::loader::load_table(Path::new(INPUT_PATH))?;
    log::info!(
        "loaded {} measurements in {} groups",
        table.len(),
        table.group_count()
    );

    let curves = data::smooth::build_curves(&table)?;
    chart::render_svg(Path::new(OUTPUT_PATH), &curves)
        .with_context(|| format!("rendering {OUTPUT_PATH}"))?;
    log::info!("wrote {OUTPUT_PATH}");

    let rows = table.len();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    // Blocks until the viewer window is closed.
    eframe::run_native(
        style::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(BenchPlotApp::new(curves, rows)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
