use crate::Error;

/// Square dense matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    side: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    pub fn from_vec(side: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = side.checked_mul(side).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { side, data })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.side, "row index out of bounds");
        let start = i * self.side;
        &self.data[start..start + self.side]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.side, "row index out of bounds");
        let start = i * self.side;
        &mut self.data[start..start + self.side]
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i >= self.side || j >= self.side {
            return None;
        }
        self.data.get(i * self.side + j)
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        if i >= self.side || j >= self.side {
            return None;
        }
        self.data.get_mut(i * self.side + j)
    }
}

impl<T: Copy> Matrix<T> {
    pub fn new_fill(side: usize, value: T) -> Self {
        let len = side.checked_mul(side).expect("matrix size overflow");
        Self {
            side,
            data: vec![value; len],
        }
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.side && j < self.side, "index out of bounds");
        self.data[i * self.side + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i < self.side && j < self.side, "index out of bounds");
        self.data[i * self.side + j] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;
    use crate::Error;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(3, vec![0.0f64; 8]).expect_err("length must be side^2");
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn row_and_scalar_access() {
        let m = Matrix::from_vec(3, vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
            .expect("valid matrix");

        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(2), &[7.0, 8.0, 9.0]);
        assert_eq!(m.at(1, 2), 6.0);
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn set_overwrites_single_cell() {
        let mut m = Matrix::new_fill(2, 0.0f64);
        m.set(1, 0, 7.5);

        assert_eq!(m.data(), &[0.0, 0.0, 7.5, 0.0]);
        assert_eq!(m.at(1, 0), 7.5);
    }
}
