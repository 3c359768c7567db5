//! Example: distance-decay normalization plus adaptive denoising on a
//! synthetic contact matrix.
//!
//! Builds a symmetric matrix with an exponential distance decay, sparse
//! raw counts and a few unmeasured loci, then runs both pipelines:
//! observed/expected normalization first, adaptive denoising of the
//! normalized map second. Per-stage timing is printed to stdout and a
//! JSON summary is written to the path given by `--out`.
//!
//! Run from the workspace root:
//!   cargo run -p contact-tools --example oe_denoise -- --help
//!   cargo run -p contact-tools --example oe_denoise

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use contact_tools::{
    DecayConfig, DenoiseConfig, Mask, Matrix, adaptive_denoise, observed_over_expected,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Normalize and denoise a synthetic contact matrix")]
struct Args {
    /// Matrix side length
    #[arg(long, default_value_t = 256)]
    side: usize,

    /// Seed for the synthetic noise
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Distance-bin edge ratio for the normalizer
    #[arg(long, default_value_t = 1.03)]
    ratio: f64,

    /// Minimum raw counts per pixel to keep a value as-is
    #[arg(long, default_value_t = 5.0)]
    cutoff: f64,

    /// Output JSON path
    #[arg(long, default_value = "oe_denoise_results.json")]
    out: String,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct BinDto {
    lo: usize,
    hi: usize,
    sum: f64,
    count: u64,
}

#[derive(Serialize)]
struct Summary {
    side: usize,
    normalize_ms: f64,
    denoise_ms: f64,
    zeros_before: usize,
    zeros_after: usize,
    unmeasured: usize,
    bins: Vec<BinDto>,
}

// ── Synthetic data ────────────────────────────────────────────────────────────

/// Tiny splitmix64; enough randomness for a demo, fully reproducible.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Symmetric decaying contact matrix with Poisson-ish sparse counts and a
/// handful of unmeasured loci.
fn synthetic_maps(side: usize, seed: u64) -> (Matrix<f64>, Matrix<f64>, Vec<bool>) {
    let mut rng = SplitMix64(seed);

    let mut loci = vec![true; side];
    for locus in loci.iter_mut() {
        if rng.next_f64() < 0.03 {
            *locus = false;
        }
    }

    let mut values = Matrix::new_fill(side, f64::NAN);
    let mut counts = Matrix::new_fill(side, 0.0f64);
    for i in 0..side {
        for j in 0..=i {
            if !(loci[i] && loci[j]) {
                continue;
            }
            let d = (i - j) as f64;
            let expected = 40.0 * (-d / 24.0).exp() + 0.05;
            let count = (expected * (0.25 + 1.5 * rng.next_f64())).floor();
            values.set(i, j, count);
            values.set(j, i, count);
            counts.set(i, j, count);
            counts.set(j, i, count);
        }
    }
    (values, counts, loci)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let (values, counts, loci) = synthetic_maps(args.side, args.seed);
    let unmeasured = values.data().iter().filter(|v| v.is_nan()).count();
    println!(
        "synthetic map: {0}x{0}, seed={1}, {2} unmeasured pixels",
        args.side, args.seed, unmeasured
    );

    let t0 = Instant::now();
    let oe = observed_over_expected(
        &values,
        Mask::Loci(&loci),
        &DecayConfig {
            bin_edge_ratio: args.ratio,
        },
    )
    .context("normalizing")?;
    let normalize_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "normalize: {} distance bins  ({normalize_ms:.2} ms)",
        oe.bin_sums.len()
    );

    let zeros_before = oe.matrix.data().iter().filter(|&&v| v == 0.0).count();

    let t1 = Instant::now();
    let denoised = adaptive_denoise(
        &oe.matrix,
        &counts,
        &DenoiseConfig {
            cutoff: args.cutoff,
            ..DenoiseConfig::default()
        },
    )
    .context("denoising")?;
    let denoise_ms = t1.elapsed().as_secs_f64() * 1e3;

    let zeros_after = denoised.data().iter().filter(|&&v| v == 0.0).count();
    println!(
        "denoise: zeros {zeros_before} -> {zeros_after}  ({denoise_ms:.2} ms)"
    );

    let bins = oe
        .bin_edges
        .windows(2)
        .zip(oe.bin_sums.iter().zip(oe.bin_counts.iter()))
        .map(|(pair, (&sum, &count))| BinDto {
            lo: pair[0],
            hi: pair[1],
            sum,
            count,
        })
        .collect();

    let summary = Summary {
        side: args.side,
        normalize_ms,
        denoise_ms,
        zeros_before,
        zeros_after,
        unmeasured,
        bins,
    };

    let out_file =
        std::fs::File::create(&args.out).with_context(|| format!("creating {}", args.out))?;
    serde_json::to_writer_pretty(out_file, &summary)
        .with_context(|| format!("writing JSON to {}", args.out))?;

    println!("summary written to {}", args.out);
    Ok(())
}
