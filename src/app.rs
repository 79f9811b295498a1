use eframe::egui;

use crate::data::smooth::PlotCurve;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BenchPlotApp {
    curves: Vec<PlotCurve>,
    rows: usize,
    /// Whether the plot bounds were already pinned to the fixed ranges.
    bounds_set: bool,
}

impl BenchPlotApp {
    pub fn new(curves: Vec<PlotCurve>, rows: usize) -> Self {
        Self {
            curves,
            rows,
            bounds_set: false,
        }
    }
}

impl eframe::App for BenchPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status line ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui: &mut egui::Ui| {
                ui.label(format!(
                    "{} measurements, {} curves",
                    self.rows,
                    self.curves.len()
                ));
                ui.separator();
                ui.label(format!("saved {}", crate::OUTPUT_PATH));
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::timing_plot(ui, &self.curves, &mut self.bounds_set);
        });
    }
}
