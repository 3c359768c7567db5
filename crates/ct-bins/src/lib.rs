//! Log-spaced distance-bin edges.
//!
//! Diagonal offsets of a contact matrix are grouped into exponentially
//! growing bins. Edges are computed evenly in log10 space between the two
//! bounds, rounded to the nearest integer and deduplicated.
//!
//! Exactness policy:
//! - The first edge must land exactly on `lo` and the last exactly on `hi`.
//!   Rounding collisions that break this are reported as an error, never
//!   patched, because downstream bin accounting assumes exact coverage.

use ct_core::Error;

/// How the number of edges is chosen.
///
/// `Ratio` targets a fixed upper/lower bound ratio per bin and derives the
/// edge count from it. `Count` requests the edge count directly; the
/// resulting number is not guaranteed after rounding collapses duplicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinSpec {
    Ratio(f64),
    Count(usize),
}

/// Computes increasing integer bin edges spaced evenly in log space over
/// `[lo, hi]`, with `lo >= 1` and `hi >= lo`.
///
/// With `prepend_zero` a synthetic `0` edge is prepended so the caller gets
/// a dedicated zero-distance bin `[0, lo)`.
pub fn log_bins(
    lo: usize,
    hi: usize,
    spec: BinSpec,
    prepend_zero: bool,
) -> Result<Vec<usize>, Error> {
    if lo < 1 {
        return Err(Error::InvalidBinSpec("lo must be >= 1"));
    }
    if hi < lo {
        return Err(Error::InvalidBinSpec("hi must be >= lo"));
    }

    let n_points = match spec {
        BinSpec::Ratio(ratio) => {
            if !ratio.is_finite() || ratio <= 1.0 {
                return Err(Error::InvalidBinSpec("ratio must be finite and > 1"));
            }
            ((hi as f64 / lo as f64).ln() / ratio.ln()) as usize
        }
        BinSpec::Count(count) => {
            if count == 0 {
                return Err(Error::InvalidBinSpec("edge count must be >= 1"));
            }
            count
        }
    };

    let lo_log = (lo as f64).log10();
    let hi_log = (hi as f64).log10();

    let mut edges: Vec<usize> = Vec::with_capacity(n_points);
    for i in 0..n_points {
        let t = if n_points == 1 {
            0.0
        } else {
            i as f64 / (n_points - 1) as f64
        };
        let edge = 10f64.powf(lo_log + t * (hi_log - lo_log)).round() as usize;
        edges.push(edge);
    }
    edges.sort_unstable();
    edges.dedup();

    if edges.first() != Some(&lo) || edges.last() != Some(&hi) {
        return Err(Error::EdgeCoverage { lo, hi });
    }

    if prepend_zero {
        edges.insert(0, 0);
    }
    Ok(edges)
}
