use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{BenchmarkTable, Measurement};

/// Columns the benchmark table must carry, by header name.
const REQUIRED_COLUMNS: [&str; 3] = ["m", "n", "msMedian"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a benchmark table from a tab-separated file.
///
/// Expected layout: header row with at least the columns `m` (group id,
/// integer), `n` (numeric) and `msMedian` (numeric). Extra columns are
/// ignored; row order is preserved.
pub fn load_table(path: &Path) -> Result<BenchmarkTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_table(file).with_context(|| format!("reading {}", path.display()))
}

/// Parse a benchmark table from any reader. Split out of [`load_table`]
/// so tests can feed it in-memory bytes.
pub fn read_table<R: Read>(input: R) -> Result<BenchmarkTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(input);

    let headers = reader.headers().context("reading TSV header row")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("TSV missing '{col}' column");
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row: Measurement = result.with_context(|| format!("TSV row {row_no}"))?;
        rows.push(row);
    }

    Ok(BenchmarkTable::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_rows_in_order() {
        let data = "m\tn\tmsMedian\n5\t10\t1.5\n5\t20\t3.25\n10\t10\t0.75\n";
        let table = read_table(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.group_keys, vec![5, 10]);
        assert_eq!(table.rows[0].m, 5);
        assert_eq!(table.rows[0].n, 10.0);
        assert_eq!(table.rows[1].ms_median, 3.25);
    }

    #[test]
    fn ignores_extra_columns() {
        let data = "m\tn\tmsMedian\tmsMean\n1\t10\t2.0\t2.1\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].ms_median, 2.0);
    }

    #[test]
    fn missing_column_names_the_column() {
        let data = "m\tn\tmsMean\n1\t10\t2.0\n";
        let err = read_table(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("msMedian"), "got: {err:#}");
    }

    #[test]
    fn non_numeric_cell_reports_the_row() {
        let data = "m\tn\tmsMedian\n1\t10\t2.0\n1\ttwenty\t3.0\n";
        let err = read_table(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("row 1"), "got: {err:#}");
    }

    #[test]
    fn header_only_input_is_an_empty_table() {
        let table = read_table("m\tn\tmsMedian\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }
}
