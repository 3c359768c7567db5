use ct_core::Matrix;

/// Sums each disjoint 2x2 block of `src` into one cell.
pub fn coarsen_sum(src: &Matrix<f64>) -> Matrix<f64> {
    debug_assert!(src.side().is_multiple_of(2) || src.side() < 2, "side must be even");

    let dst_side = src.side() / 2;
    let mut dst = Matrix::new_fill(dst_side, 0.0f64);
    for i in 0..dst_side {
        let row0 = src.row(2 * i);
        let row1 = src.row(2 * i + 1);
        for (j, out) in dst.row_mut(i).iter_mut().enumerate() {
            let sj = 2 * j;
            *out = row0[sj] + row0[sj + 1] + row1[sj] + row1[sj + 1];
        }
    }
    dst
}

/// Integer variant of [`coarsen_sum`] for summed validity indicators.
pub fn coarsen_sum_u32(src: &Matrix<u32>) -> Matrix<u32> {
    debug_assert!(src.side().is_multiple_of(2) || src.side() < 2, "side must be even");

    let dst_side = src.side() / 2;
    let mut dst = Matrix::new_fill(dst_side, 0u32);
    for i in 0..dst_side {
        let row0 = src.row(2 * i);
        let row1 = src.row(2 * i + 1);
        for (j, out) in dst.row_mut(i).iter_mut().enumerate() {
            let sj = 2 * j;
            *out = row0[sj] + row0[sj + 1] + row1[sj] + row1[sj + 1];
        }
    }
    dst
}

/// Tri-state 2x2 block minimum.
///
/// `None` marks an unmeasured cell and never wins a minimum; a block is
/// `None` only when all four of its cells are.
pub fn coarsen_min(src: &Matrix<Option<f64>>) -> Matrix<Option<f64>> {
    debug_assert!(src.side().is_multiple_of(2) || src.side() < 2, "side must be even");

    let dst_side = src.side() / 2;
    let mut dst = Matrix::new_fill(dst_side, None);
    for i in 0..dst_side {
        let row0 = src.row(2 * i);
        let row1 = src.row(2 * i + 1);
        for (j, out) in dst.row_mut(i).iter_mut().enumerate() {
            let sj = 2 * j;
            *out = min_cell(
                min_cell(row0[sj], row0[sj + 1]),
                min_cell(row1[sj], row1[sj + 1]),
            );
        }
    }
    dst
}

#[inline]
fn min_cell(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Replicates each cell of `src` into a 2x2 block, doubling the side.
pub fn upsample_nearest<T: Copy + Default>(src: &Matrix<T>) -> Matrix<T> {
    let dst_side = src.side() * 2;
    let mut dst = Matrix::new_fill(dst_side, T::default());
    for i in 0..src.side() {
        let row = src.row(i);
        for di in 0..2 {
            let out = dst.row_mut(2 * i + di);
            for (j, &v) in row.iter().enumerate() {
                out[2 * j] = v;
                out[2 * j + 1] = v;
            }
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use ct_core::Matrix;

    use crate::{coarsen_min, coarsen_sum, coarsen_sum_u32, upsample_nearest};

    #[test]
    fn sum_on_4x4_known_values() {
        let src = Matrix::from_vec(
            4,
            vec![
                0.0f64, 1.0, 2.0, 3.0, //
                4.0, 5.0, 6.0, 7.0, //
                8.0, 9.0, 10.0, 11.0, //
                12.0, 13.0, 14.0, 15.0, //
            ],
        )
        .expect("valid matrix");

        let dst = coarsen_sum(&src);
        assert_eq!(dst.side(), 2);
        assert_eq!(dst.data(), &[10.0, 18.0, 42.0, 50.0]);
    }

    #[test]
    fn sum_u32_matches_f64_variant() {
        let src = Matrix::from_vec(4, (0u32..16).collect()).expect("valid matrix");
        let dst = coarsen_sum_u32(&src);
        assert_eq!(dst.data(), &[10, 18, 42, 50]);
    }

    #[test]
    fn min_ignores_unmeasured_cells() {
        let src = Matrix::from_vec(
            4,
            vec![
                Some(5.0f64),
                None,
                Some(1.0),
                Some(2.0),
                Some(3.0),
                Some(9.0),
                Some(4.0),
                Some(8.0),
                None,
                None,
                Some(7.0),
                Some(6.0),
                None,
                None,
                Some(5.0),
                Some(4.0),
            ],
        )
        .expect("valid matrix");

        let dst = coarsen_min(&src);
        assert_eq!(dst.data(), &[Some(3.0), Some(1.0), None, Some(4.0)]);
    }

    #[test]
    fn min_of_all_unmeasured_block_is_unmeasured() {
        let src = Matrix::new_fill(2, None::<f64>);
        let dst = coarsen_min(&src);
        assert_eq!(dst.data(), &[None]);
    }

    #[test]
    fn upsample_replicates_2x2_blocks() {
        let src = Matrix::from_vec(2, vec![1.0f64, 2.0, 3.0, 4.0]).expect("valid matrix");
        let dst = upsample_nearest(&src);

        assert_eq!(dst.side(), 4);
        assert_eq!(
            dst.data(),
            &[
                1.0, 1.0, 2.0, 2.0, //
                1.0, 1.0, 2.0, 2.0, //
                3.0, 3.0, 4.0, 4.0, //
                3.0, 3.0, 4.0, 4.0, //
            ]
        );
    }

    #[test]
    fn upsample_then_coarsen_restores_quadrupled_values() {
        let src = Matrix::from_vec(2, vec![1.5f64, -2.0, 0.0, 8.25]).expect("valid matrix");
        let back = coarsen_sum(&upsample_nearest(&src));

        for (&orig, &quad) in src.data().iter().zip(back.data().iter()) {
            assert_eq!(quad, 4.0 * orig);
        }
    }
}
