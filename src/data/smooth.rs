use crate::style::{LineStyleKind, StylePool, StylePoolExhausted};

use super::model::{BenchmarkTable, Measurement};

// ---------------------------------------------------------------------------
// Per-group smoothing
// ---------------------------------------------------------------------------

/// Decay constant of the exponential window: side weights are `e^(-1/tau)`.
const WINDOW_TAU: f64 = 1.0;

/// Derived columns for one group, in computation order.
#[derive(Debug, Clone)]
pub struct SmoothedSeries {
    /// `log10(ms_median / 1000)` per row (runtime in seconds, log scale).
    pub log: Vec<f64>,
    /// Centered 3-point exponentially weighted rolling average of `log`.
    /// Rows without a full neighborhood keep their own `log` value.
    pub avg: Vec<f64>,
    /// `10^avg` per row (runtime back in seconds).
    pub sec: Vec<f64>,
}

/// Smooth one group's runtimes in log space.
///
/// The rolling window is undefined at the first and last row; those rows
/// fall back to their unsmoothed `log` value, which also covers groups of
/// one or two rows where no full window can form.
pub fn smooth_group(rows: &[Measurement]) -> SmoothedSeries {
    let log: Vec<f64> = rows
        .iter()
        .map(|r| (r.ms_median / 1e3).log10())
        .collect();

    let side = (-1.0 / WINDOW_TAU).exp();
    let norm = 1.0 + 2.0 * side;
    let avg: Vec<f64> = (0..log.len())
        .map(|i| {
            if i == 0 || i + 1 == log.len() {
                log[i]
            } else {
                (side * log[i - 1] + log[i] + side * log[i + 1]) / norm
            }
        })
        .collect();

    let sec: Vec<f64> = avg.iter().map(|&a| 10f64.powf(a)).collect();

    SmoothedSeries { log, avg, sec }
}

// ---------------------------------------------------------------------------
// Curve assembly
// ---------------------------------------------------------------------------

/// One plotted curve: a group's smoothed runtimes with its line style.
#[derive(Debug, Clone)]
pub struct PlotCurve {
    pub m: i64,
    /// `[n, sec]` points in row order.
    pub points: Vec<[f64; 2]>,
    pub style: LineStyleKind,
}

impl PlotCurve {
    /// Legend label for this curve.
    pub fn label(&self) -> String {
        format!("m={}", self.m)
    }
}

/// Smooth every group and assign each a line style from the pool.
pub fn build_curves(table: &BenchmarkTable) -> Result<Vec<PlotCurve>, StylePoolExhausted> {
    let mut pool = StylePool::new();
    table
        .groups()
        .map(|(m, rows)| {
            let series = smooth_group(&rows);
            let style = pool.pop()?;
            let points = rows
                .iter()
                .zip(series.sec.iter())
                .map(|(r, &sec)| [r.n, sec])
                .collect();
            Ok(PlotCurve { m, points, style })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn meas(m: i64, n: f64, ms_median: f64) -> Measurement {
        Measurement { m, n, ms_median }
    }

    fn group(ms: &[f64]) -> Vec<Measurement> {
        ms.iter()
            .enumerate()
            .map(|(i, &v)| meas(1, 10.0 + 10.0 * i as f64, v))
            .collect()
    }

    #[test]
    fn constant_input_round_trips() {
        // 3-row group, msMedian all 1 ms: smoothing of a constant is the
        // constant, so every sec value is 0.001 s.
        let series = smooth_group(&group(&[1.0, 1.0, 1.0]));
        for &sec in &series.sec {
            assert!((sec - 1e-3).abs() < EPS, "sec = {sec}");
        }
    }

    #[test]
    fn first_and_last_rows_stay_unsmoothed() {
        let rows = group(&[1.0, 100.0, 10.0, 50.0]);
        let series = smooth_group(&rows);
        let last = rows.len() - 1;
        assert_eq!(series.avg[0], series.log[0]);
        assert_eq!(series.avg[last], series.log[last]);
        assert!((series.sec[0] - 1.0 / 1e3).abs() < EPS);
        assert!((series.sec[last] - 50.0 / 1e3).abs() < EPS);
    }

    #[test]
    fn interior_rows_stay_within_their_neighborhood() {
        let rows = group(&[1.0, 100.0, 10.0, 50.0, 2.0]);
        let series = smooth_group(&rows);
        for i in 1..rows.len() - 1 {
            let lo = series.log[i - 1].min(series.log[i]).min(series.log[i + 1]);
            let hi = series.log[i - 1].max(series.log[i]).max(series.log[i + 1]);
            assert!(
                lo <= series.avg[i] && series.avg[i] <= hi,
                "avg[{i}] = {} outside [{lo}, {hi}]",
                series.avg[i]
            );
        }
    }

    #[test]
    fn interior_row_uses_exponential_weights() {
        let series = smooth_group(&group(&[1.0, 10.0, 100.0]));
        let w = (-1.0f64).exp();
        let expected =
            (w * series.log[0] + series.log[1] + w * series.log[2]) / (1.0 + 2.0 * w);
        assert!((series.avg[1] - expected).abs() < EPS);
    }

    #[test]
    fn short_groups_smooth_to_identity() {
        for ms in [&[4.0][..], &[4.0, 9.0][..]] {
            let series = smooth_group(&group(ms));
            assert_eq!(series.avg, series.log);
            for (sec, &v) in series.sec.iter().zip(ms) {
                assert!((sec - v / 1e3).abs() < EPS);
            }
        }
    }

    #[test]
    fn four_groups_get_distinct_styles_in_pop_order() {
        let rows: Vec<Measurement> = (1..=4).map(|m| meas(m, 10.0, 1.0)).collect();
        let curves = build_curves(&BenchmarkTable::from_rows(rows)).unwrap();
        let styles: Vec<LineStyleKind> = curves.iter().map(|c| c.style).collect();
        assert_eq!(
            styles,
            vec![
                LineStyleKind::Solid,
                LineStyleKind::DashDot,
                LineStyleKind::Dashed,
                LineStyleKind::Dotted,
            ]
        );
    }

    #[test]
    fn fifth_group_is_an_error() {
        let rows: Vec<Measurement> = (1..=5).map(|m| meas(m, 10.0, 1.0)).collect();
        let err = build_curves(&BenchmarkTable::from_rows(rows)).unwrap_err();
        assert_eq!(err.capacity, 4);
    }

    #[test]
    fn groups_do_not_interact() {
        let base = vec![
            meas(1, 10.0, 1.0),
            meas(1, 20.0, 2.0),
            meas(1, 30.0, 4.0),
            meas(2, 10.0, 8.0),
            meas(2, 20.0, 16.0),
            meas(2, 30.0, 32.0),
        ];
        let mut perturbed = base.clone();
        for row in perturbed.iter_mut().filter(|r| r.m == 2) {
            row.ms_median *= 1000.0;
        }

        let before = build_curves(&BenchmarkTable::from_rows(base)).unwrap();
        let after = build_curves(&BenchmarkTable::from_rows(perturbed)).unwrap();
        assert_eq!(before[0].points, after[0].points);
        assert_ne!(before[1].points, after[1].points);
    }

    #[test]
    fn curve_labels_name_the_group() {
        let rows = vec![meas(7, 10.0, 1.0)];
        let curves = build_curves(&BenchmarkTable::from_rows(rows)).unwrap();
        assert_eq!(curves[0].label(), "m=7");
    }
}
