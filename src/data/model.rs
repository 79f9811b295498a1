use serde::Deserialize;

// ---------------------------------------------------------------------------
// Measurement – one row of the benchmark table
// ---------------------------------------------------------------------------

/// A single benchmark measurement (one row of the source table).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Measurement {
    /// Group identifier.
    pub m: i64,
    /// Independent variable (problem size).
    pub n: f64,
    /// Median runtime in milliseconds.
    #[serde(rename = "msMedian")]
    pub ms_median: f64,
}

// ---------------------------------------------------------------------------
// BenchmarkTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with a pre-computed group index.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    /// All measurements (rows), in file order.
    pub rows: Vec<Measurement>,
    /// Distinct group ids in order of first appearance.
    pub group_keys: Vec<i64>,
}

impl BenchmarkTable {
    /// Build the group index from the loaded rows.
    pub fn from_rows(rows: Vec<Measurement>) -> Self {
        let mut group_keys: Vec<i64> = Vec::new();
        for row in &rows {
            if !group_keys.contains(&row.m) {
                group_keys.push(row.m);
            }
        }
        BenchmarkTable { rows, group_keys }
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.group_keys.len()
    }

    /// Iterate groups in first-appearance order; rows keep file order
    /// within each group.
    pub fn groups(&self) -> impl Iterator<Item = (i64, Vec<Measurement>)> + '_ {
        self.group_keys.iter().map(|&m| {
            let rows: Vec<Measurement> =
                self.rows.iter().copied().filter(|r| r.m == m).collect();
            (m, rows)
        })
    }
}
