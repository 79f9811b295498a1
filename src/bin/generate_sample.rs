/// Deterministic sample benchmark results for trying out the plotter.
///
/// Models a solver whose runtime doubles every `m/2` steps of `n`, with
/// multiplicative log-normal noise on top.
fn median_runtime_secs(m: i64, n: f64, rng: &mut SimpleRng) -> f64 {
    let base = 1e-5 * 2f64.powf(2.0 * n / m as f64);
    base * rng.gauss(0.0, 0.1).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Four groups, one per available line style.
    let groups: [i64; 4] = [5, 10, 15, 20];
    // Problem sizes: 10 → 50, step 5.
    let sizes: Vec<f64> = (0..9).map(|i| 10.0 + i as f64 * 5.0).collect();

    let output_path = "benchmark.tsv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(output_path)
        .expect("Failed to create output file");

    writer
        .write_record(["m", "n", "msMedian"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for &m in &groups {
        for &n in &sizes {
            let ms_median = median_runtime_secs(m, n, &mut rng) * 1e3;
            writer
                .write_record([m.to_string(), format!("{n:.0}"), format!("{ms_median:.6}")])
                .expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {rows} measurements ({} groups) to {output_path}",
        groups.len()
    );
}
