use crate::{Error, Matrix};

/// Validity mask for an N×N contact matrix.
///
/// `All` treats every pixel as measured. `Loci` flags whole genomic bins:
/// pixel `(i, j)` is valid iff both locus `i` and locus `j` are flagged.
/// `Pixels` flags individual pixels.
#[derive(Debug, Clone, Copy)]
pub enum Mask<'a> {
    All,
    Loci(&'a [bool]),
    Pixels(&'a Matrix<bool>),
}

impl Mask<'_> {
    /// Checks the mask shape against the matrix side it will be applied to.
    pub fn check_side(&self, side: usize) -> Result<(), Error> {
        let actual = match self {
            Mask::All => return Ok(()),
            Mask::Loci(loci) => loci.len(),
            Mask::Pixels(pixels) => pixels.side(),
        };

        if actual != side {
            return Err(Error::ShapeMismatch {
                expected: side,
                actual,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self, i: usize, j: usize) -> bool {
        match self {
            Mask::All => true,
            Mask::Loci(loci) => loci[i] && loci[j],
            Mask::Pixels(pixels) => pixels.at(i, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mask;
    use crate::{Error, Matrix};

    #[test]
    fn all_mask_accepts_any_side() {
        let mask = Mask::All;
        assert!(mask.check_side(0).is_ok());
        assert!(mask.check_side(17).is_ok());
        assert!(mask.is_valid(3, 11));
    }

    #[test]
    fn loci_mask_requires_both_ends() {
        let loci = [true, false, true];
        let mask = Mask::Loci(&loci);

        assert!(mask.check_side(3).is_ok());
        assert!(mask.is_valid(0, 2));
        assert!(!mask.is_valid(0, 1));
        assert!(!mask.is_valid(1, 1));
    }

    #[test]
    fn pixel_mask_reads_single_entries() {
        let pixels = Matrix::from_vec(2, vec![true, false, false, true]).expect("valid mask");
        let mask = Mask::Pixels(&pixels);

        assert!(mask.is_valid(0, 0));
        assert!(!mask.is_valid(0, 1));
        assert!(mask.is_valid(1, 1));
    }

    #[test]
    fn side_disagreement_is_an_error() {
        let loci = [true; 4];
        let err = Mask::Loci(&loci).check_side(5).expect_err("wrong length");
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: 5,
                actual: 4
            }
        );
    }
}
