/// Data layer: core types, loading, and smoothing.
///
/// Architecture:
/// ```text
///  benchmark.tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse TSV → BenchmarkTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ BenchmarkTable │  Vec<Measurement>, group index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  smooth   │  log10 → rolling mean → 10^avg → PlotCurve per group
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod smooth;
