use ct_core::{Error, Matrix};

use crate::coarsen::{coarsen_min, upsample_nearest};
use crate::pyramid::{Pyramid, PyramidLevel};

/// Parameters for adaptive denoising.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenoiseConfig {
    /// Minimum raw counts per pixel required to keep a value as-is.
    /// A cutoff of 1 only guarantees the absence of zeros.
    pub cutoff: f64,
    /// Maximum number of coarsening steps. Safe to keep large: heavily
    /// coarsened levels carry large counts and trigger no substitutions.
    pub max_levels: usize,
    /// Stop coarsening once the side reaches this floor.
    pub min_shape: usize,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            cutoff: 5.0,
            max_levels: 8,
            min_shape: 8,
        }
    }
}

/// Walks the pyramid from its coarsest level back to full resolution,
/// replacing pixels whose 2x2 neighborhood holds fewer than `cutoff` raw
/// counts with the coarser local average. Consumes the pyramid.
///
/// The result has the original pre-padding side; unmeasured pixels are
/// restored to NaN. At measured positions the result holds no exact zero
/// unless an entire `max_levels`-deep neighborhood was all-zero to begin
/// with.
pub fn refine(pyramid: Pyramid, cutoff: f64) -> Matrix<f64> {
    let (mut levels, orig_side) = pyramid.into_parts();

    let mut cur = match levels.pop() {
        Some(coarsest) => coarsest,
        None => return Matrix::new_fill(orig_side, f64::NAN),
    };

    while let Some(mut next) = levels.pop() {
        let avg_exp = upsample_nearest(&local_average(&cur));
        let min_exp = upsample_nearest(&coarsen_min(&masked_counts(&next)));

        let side = next.side();
        for i in 0..side {
            for j in 0..side {
                let weight = next.valid.at(i, j);
                if weight == 0 {
                    // Unmeasured cells carry no information at any stage.
                    next.values.set(i, j, 0.0);
                    continue;
                }

                let unreliable = min_exp.at(i, j).is_some_and(|m| m < cutoff);
                if unreliable && let Some(avg) = avg_exp.at(i, j) {
                    // The summed-validity weight keeps intermediate levels
                    // sum-consistent with their finer cells.
                    next.values.set(i, j, avg * weight as f64);
                }
            }
        }

        cur = next;
    }

    // Undo the zero fill used for safe summation, then crop the padding.
    let mut out = Matrix::new_fill(orig_side, f64::NAN);
    for i in 0..orig_side {
        for (j, dst) in out.row_mut(i).iter_mut().enumerate() {
            if cur.valid.at(i, j) != 0 {
                *dst = cur.values.at(i, j);
            }
        }
    }
    out
}

/// One-call pipeline: build the count pyramid and refine it.
pub fn adaptive_denoise(
    values: &Matrix<f64>,
    counts: &Matrix<f64>,
    cfg: &DenoiseConfig,
) -> Result<Matrix<f64>, Error> {
    let pyramid = Pyramid::build(values, counts, cfg.max_levels, cfg.min_shape)?;
    Ok(refine(pyramid, cfg.cutoff))
}

/// Per-cell local average, `None` where no measured finest cell
/// contributes.
fn local_average(level: &PyramidLevel) -> Matrix<Option<f64>> {
    let mut avg = Matrix::new_fill(level.side(), None);
    for ((out, &v), &w) in avg
        .data_mut()
        .iter_mut()
        .zip(level.values.data().iter())
        .zip(level.valid.data().iter())
    {
        if w != 0 {
            *out = Some(v / w as f64);
        }
    }
    avg
}

/// Raw counts with unmeasured cells marked undefined.
fn masked_counts(level: &PyramidLevel) -> Matrix<Option<f64>> {
    let mut out = Matrix::new_fill(level.side(), None);
    for ((cell, &c), &w) in out
        .data_mut()
        .iter_mut()
        .zip(level.counts.data().iter())
        .zip(level.valid.data().iter())
    {
        if w != 0 {
            *cell = Some(c);
        }
    }
    out
}
