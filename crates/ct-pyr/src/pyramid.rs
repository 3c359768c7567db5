use ct_core::{Error, Matrix};

use crate::coarsen::{coarsen_sum, coarsen_sum_u32};

/// One resolution step of a contact-matrix pyramid.
///
/// `values` and `counts` are zero-filled at unmeasured cells so that 2x2
/// block sums stay well-defined. `valid` counts how many measured
/// finest-level cells each cell aggregates: 0 or 1 at the finest level,
/// up to `4^k` at level `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct PyramidLevel {
    pub values: Matrix<f64>,
    pub counts: Matrix<f64>,
    pub valid: Matrix<u32>,
}

impl PyramidLevel {
    pub fn side(&self) -> usize {
        self.values.side()
    }
}

/// Ordered, immutable sequence of progressively 2x-coarsened level
/// snapshots. Level 0 is the padded original; each next level halves the
/// side.
#[derive(Debug, Clone)]
pub struct Pyramid {
    levels: Vec<PyramidLevel>,
    orig_side: usize,
}

impl Pyramid {
    /// Builds the level sequence for a value matrix and its matching
    /// raw-count matrix.
    ///
    /// The side is padded up to the next power of two (value padding NaN,
    /// count padding 0); non-finite values are treated as unmeasured and
    /// zeroed together with their counts. Counts must be finite wherever
    /// the value is measured.
    pub fn build(
        values: &Matrix<f64>,
        counts: &Matrix<f64>,
        max_levels: usize,
        min_shape: usize,
    ) -> Result<Self, Error> {
        if counts.side() != values.side() {
            return Err(Error::ShapeMismatch {
                expected: values.side(),
                actual: counts.side(),
            });
        }

        let orig_side = values.side();
        let padded_side = orig_side.next_power_of_two();

        let mut vals = Matrix::new_fill(padded_side, f64::NAN);
        let mut cnts = Matrix::new_fill(padded_side, 0.0f64);
        for i in 0..orig_side {
            vals.row_mut(i)[..orig_side].copy_from_slice(values.row(i));
            cnts.row_mut(i)[..orig_side].copy_from_slice(counts.row(i));
        }

        let mut valid = Matrix::new_fill(padded_side, 0u32);
        for ((v, c), m) in vals
            .data_mut()
            .iter_mut()
            .zip(cnts.data_mut().iter_mut())
            .zip(valid.data_mut().iter_mut())
        {
            if v.is_finite() {
                *m = 1;
            } else {
                *v = 0.0;
                *c = 0.0;
            }
        }

        if cnts.data().iter().any(|c| !c.is_finite()) {
            return Err(Error::NonFiniteCounts);
        }

        let mut levels = Vec::new();
        let mut cur = PyramidLevel {
            values: vals,
            counts: cnts,
            valid,
        };
        for _ in 0..max_levels {
            if cur.side() <= min_shape || cur.side() < 2 {
                break;
            }
            let next = PyramidLevel {
                values: coarsen_sum(&cur.values),
                counts: coarsen_sum(&cur.counts),
                valid: coarsen_sum_u32(&cur.valid),
            };
            levels.push(cur);
            cur = next;
        }
        levels.push(cur);

        Ok(Self { levels, orig_side })
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, i: usize) -> Option<&PyramidLevel> {
        self.levels.get(i)
    }

    pub fn levels(&self) -> &[PyramidLevel] {
        &self.levels
    }

    /// Side of the original matrix before power-of-two padding.
    pub fn orig_side(&self) -> usize {
        self.orig_side
    }

    pub(crate) fn into_parts(self) -> (Vec<PyramidLevel>, usize) {
        (self.levels, self.orig_side)
    }
}
