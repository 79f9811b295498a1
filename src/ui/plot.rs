use eframe::egui::Ui;
use egui_plot::{log_grid_spacer, Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::data::smooth::PlotCurve;
use crate::style::{plot_color32, X_LABEL, X_RANGE, Y_LABEL, Y_RANGE};

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render the runtime curves in the central panel.
///
/// egui_plot has no logarithmic axis, so curves are plotted as
/// `log10(sec)` against `n`, with a base-10 grid spacer and decade tick
/// labels standing in for the log scale. On the first frame the bounds
/// are pinned to the fixed axis ranges; after that the user may pan and
/// zoom freely.
pub fn timing_plot(ui: &mut Ui, curves: &[PlotCurve], bounds_set: &mut bool) {
    let color = plot_color32();

    Plot::new("timing_plot")
        .legend(Legend::default())
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .y_grid_spacer(log_grid_spacer(10))
        .y_axis_formatter(|mark, _range| {
            // Label only the decades; minor marks stay unlabelled.
            let exp = mark.value.round();
            if (mark.value - exp).abs() < 1e-6 {
                format!("1e{exp:.0}")
            } else {
                String::new()
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if !*bounds_set {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [X_RANGE.0, Y_RANGE.0.log10()],
                    [X_RANGE.1, Y_RANGE.1.log10()],
                ));
                *bounds_set = true;
            }

            for curve in curves {
                let points: PlotPoints = curve
                    .points
                    .iter()
                    .map(|&[n, sec]| [n, sec.log10()])
                    .collect();

                let line = Line::new(points)
                    .name(curve.label())
                    .color(color)
                    .style(curve.style.egui_style())
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
