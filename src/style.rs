use eframe::egui::Color32;
use egui_plot::LineStyle;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Fixed chart styling
// ---------------------------------------------------------------------------

/// Shared curve colour (steel blue), as RGB components.
pub const PLOT_COLOR: (u8, u8, u8) = (0x4e, 0x79, 0xa7);

/// X axis range, fixed regardless of the data.
pub const X_RANGE: (f64, f64) = (10.0, 50.0);
/// Y axis range in seconds, fixed regardless of the data. Log scale.
pub const Y_RANGE: (f64, f64) = (2.5e-6, 1e2);

pub const TITLE: &str = "Performance of SNP";
pub const X_LABEL: &str = "n";
pub const Y_LABEL: &str = "median runtime (s)";

/// Shared curve colour for the egui viewer.
pub fn plot_color32() -> Color32 {
    Color32::from_rgb(PLOT_COLOR.0, PLOT_COLOR.1, PLOT_COLOR.2)
}

// ---------------------------------------------------------------------------
// Line styles
// ---------------------------------------------------------------------------

/// One of the four line-style variants curves are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyleKind {
    Dotted,
    Dashed,
    DashDot,
    Solid,
}

impl LineStyleKind {
    /// egui_plot rendering of this style.
    pub fn egui_style(self) -> LineStyle {
        match self {
            LineStyleKind::Dotted => LineStyle::dotted_dense(),
            LineStyleKind::Dashed => LineStyle::dashed_loose(),
            LineStyleKind::DashDot => LineStyle::dashed_dense(),
            LineStyleKind::Solid => LineStyle::Solid,
        }
    }

    /// Dash geometry `(dash, gap)` in pixels for the SVG export;
    /// `None` means a continuous stroke.
    pub fn dash_pattern(self) -> Option<(i32, i32)> {
        match self {
            LineStyleKind::Dotted => Some((1, 4)),
            LineStyleKind::Dashed => Some((6, 6)),
            LineStyleKind::DashDot => Some((14, 6)),
            LineStyleKind::Solid => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Style pool
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("line style pool exhausted: at most {capacity} groups can be plotted")]
pub struct StylePoolExhausted {
    pub capacity: usize,
}

/// The finite pool of line styles, consumed destructively one per curve.
/// Popped from the back, so the first curve gets `Solid` and the fourth
/// gets `Dotted`.
#[derive(Debug, Clone)]
pub struct StylePool {
    styles: Vec<LineStyleKind>,
    capacity: usize,
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

impl StylePool {
    pub fn new() -> Self {
        let styles = vec![
            LineStyleKind::Dotted,
            LineStyleKind::Dashed,
            LineStyleKind::DashDot,
            LineStyleKind::Solid,
        ];
        let capacity = styles.len();
        StylePool { styles, capacity }
    }

    /// Take the next unused style, or fail once the pool is dry.
    pub fn pop(&mut self) -> Result<LineStyleKind, StylePoolExhausted> {
        self.styles.pop().ok_or(StylePoolExhausted {
            capacity: self.capacity,
        })
    }

    pub fn remaining(&self) -> usize {
        self.styles.len()
    }
}
