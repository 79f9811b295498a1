use std::path::Path;

use anyhow::Result;
use plotters::prelude::IntoLogRange;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::data::smooth::PlotCurve;
use crate::style::{PLOT_COLOR, TITLE, X_LABEL, X_RANGE, Y_LABEL, Y_RANGE};

/// Chart dimensions in pixels.
const SIZE: (u32, u32) = (960, 640);

// ---------------------------------------------------------------------------
// SVG export
// ---------------------------------------------------------------------------

/// Render the curves to a vector chart at `path`, overwriting any
/// existing file. Axis ranges are fixed; the y axis is logarithmic.
pub fn render_svg(path: &Path, curves: &[PlotCurve]) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let color = RGBColor(PLOT_COLOR.0, PLOT_COLOR.1, PLOT_COLOR.2);
    let stroke = color.stroke_width(2);

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(
            TITLE,
            FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Normal),
        )
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(
            X_RANGE.0..X_RANGE.1,
            (Y_RANGE.0..Y_RANGE.1).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0e}"))
        .label_style(FontDesc::new(
            FontFamily::SansSerif,
            16.0,
            FontStyle::Normal,
        ))
        .draw()?;

    for curve in curves {
        let points = curve.points.iter().map(|&[n, sec]| (n, sec));
        let anno = match curve.style.dash_pattern() {
            Some((dash, gap)) => {
                chart.draw_series(DashedLineSeries::new(points, dash, gap, stroke))?
            }
            None => chart.draw_series(LineSeries::new(points, stroke))?,
        };
        anno.label(curve.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], stroke));
    }

    if !curves.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.4))
            .label_font(FontDesc::new(
                FontFamily::SansSerif,
                16.0,
                FontStyle::Normal,
            ))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
