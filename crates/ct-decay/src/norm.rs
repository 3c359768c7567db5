use ct_bins::{BinSpec, log_bins};
use ct_core::{Error, Mask, Matrix};

/// Parameters for distance-decay normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayConfig {
    /// Target ratio between the largest and the shortest distance in each
    /// distance bin.
    pub bin_edge_ratio: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            bin_edge_ratio: 1.03,
        }
    }
}

/// Output of [`observed_over_expected`].
#[derive(Debug, Clone)]
pub struct ObservedOverExpected {
    /// Normalized matrix, same side as the input.
    pub matrix: Matrix<f64>,
    /// Distance-bin edges used, including the synthetic zero edge.
    pub bin_edges: Vec<usize>,
    /// Sum of valid pixel values per bin.
    pub bin_sums: Vec<f64>,
    /// Number of valid pixels per bin.
    pub bin_counts: Vec<u64>,
}

/// Normalizes a contact matrix for distance-dependent signal decay.
///
/// Diagonals are grouped into distance bins via [`log_bins`] with a
/// dedicated zero-distance bin. Each bin is processed in two passes: first
/// its mean over valid pixels is accumulated, then every valid pixel in
/// the bin is divided by that mean. A bin with no valid pixels or a zero
/// mean is left untouched, which preserves exact zeros and empty regions.
///
/// Off-diagonal divisions are mirrored to the upper triangle; the main
/// diagonal is divided once. The input is not modified.
///
/// Matrices of side < 2 are rejected by the edge derivation: a 1x1 matrix
/// has no distance span, so the ratio-driven derivation yields no edges
/// and the call returns [`Error::EdgeCoverage`].
pub fn observed_over_expected(
    matrix: &Matrix<f64>,
    mask: Mask<'_>,
    cfg: &DecayConfig,
) -> Result<ObservedOverExpected, Error> {
    let n = matrix.side();
    mask.check_side(n)?;

    let bin_edges = log_bins(1, n, BinSpec::Ratio(cfg.bin_edge_ratio), true)?;
    let n_bins = bin_edges.len() - 1;

    let mut data = matrix.clone();
    let mut bin_sums = vec![0.0f64; n_bins];
    let mut bin_counts = vec![0u64; n_bins];

    for (bin_idx, pair) in bin_edges.windows(2).enumerate() {
        let (bin_lo, bin_hi) = (pair[0], pair[1]);

        // Pass 1: the correction factor depends on statistics over the
        // whole bin, so accumulate before touching any pixel.
        let mut sum = 0.0f64;
        let mut count = 0u64;
        for offset in bin_lo..bin_hi {
            for j in 0..n - offset {
                if mask.is_valid(offset + j, j) {
                    sum += data.at(offset + j, j);
                    count += 1;
                }
            }
        }
        bin_sums[bin_idx] = sum;
        bin_counts[bin_idx] = count;

        if count == 0 {
            continue;
        }
        let mean = sum / count as f64;
        if mean == 0.0 {
            continue;
        }

        // Pass 2: divide the lower triangle and mirror above the diagonal.
        for offset in bin_lo..bin_hi {
            for j in 0..n - offset {
                if mask.is_valid(offset + j, j) {
                    let lower = data.at(offset + j, j) / mean;
                    data.set(offset + j, j, lower);
                    if offset > 0 {
                        let upper = data.at(j, offset + j) / mean;
                        data.set(j, offset + j, upper);
                    }
                }
            }
        }
    }

    Ok(ObservedOverExpected {
        matrix: data,
        bin_edges,
        bin_sums,
        bin_counts,
    })
}
