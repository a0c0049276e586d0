use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

const DEFAULT_OUTPUT: &str = "sample_errors.dat";
const STEPS: usize = 200;

/// Rough shape of a quantile estimator's error: largest mid-range, small in
/// the tails.
fn error_curve(q: f64, scale: f64, noise: f64, jitter: &mut Jitter) -> f64 {
    let base = scale * (q * (1.0 - q)).sqrt();
    (base + noise * jitter.next_signed()).abs()
}

/// xorshift64 stream; a fixed seed keeps the output file reproducible.
struct Jitter(u64);

impl Jitter {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    /// Uniform in `[-1, 1)`.
    fn next_signed(&mut self) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        2.0 * unit - 1.0
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let mut jitter = Jitter(0x9E37_79B9_7F4A_7C15);

    let file = File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# q err_a err_b")?;
    for i in 0..=STEPS {
        let q = i as f64 / STEPS as f64;
        let err_a = error_curve(q, 2e-3, 1e-4, &mut jitter);
        let err_b = error_curve(q, 5e-3, 3e-4, &mut jitter);
        writeln!(out, "{q:.6} {err_a:.8e} {err_b:.8e}")?;
    }
    out.flush().with_context(|| format!("writing {output_path}"))?;

    println!("Wrote {} rows to {output_path}", STEPS + 1);
    Ok(())
}
