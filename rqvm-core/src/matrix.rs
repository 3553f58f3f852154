//! 2×2 complex matrix operations
//!
//! Single-qubit gates and Kraus operators are all 2×2 complex matrices, so
//! the whole workspace shares this one fixed-size representation rather than
//! a general linear-algebra type. Row-major storage, `Complex64` entries.

use num_complex::Complex64;
use std::fmt;
use std::ops::Mul;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 2×2 complex matrix
///
/// # Example
/// ```
/// use rqvm_core::Matrix2;
///
/// let identity = Matrix2::identity();
/// let product = identity * identity;
/// assert_eq!(product, identity);
/// ```
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix2 {
    elements: [[Complex64; 2]; 2],
}

impl Matrix2 {
    /// Create a matrix from row-major elements
    #[inline]
    pub const fn new(elements: [[Complex64; 2]; 2]) -> Self {
        Self { elements }
    }

    /// The identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::new([[ONE, ZERO], [ZERO, ONE]])
    }

    /// The zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self::new([[ZERO, ZERO], [ZERO, ZERO]])
    }

    /// A diagonal matrix with the given real entries
    #[inline]
    pub fn diagonal(d0: f64, d1: f64) -> Self {
        Self::new([
            [Complex64::new(d0, 0.0), ZERO],
            [ZERO, Complex64::new(d1, 0.0)],
        ])
    }

    /// Get the element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.elements[row][col]
    }

    /// Borrow the raw row-major elements
    #[inline]
    pub fn elements(&self) -> &[[Complex64; 2]; 2] {
        &self.elements
    }

    /// Scale every entry by a real factor
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = self.elements;
        for row in out.iter_mut() {
            for entry in row.iter_mut() {
                *entry *= factor;
            }
        }
        Self::new(out)
    }

    /// Compute the adjoint (conjugate transpose)
    pub fn adjoint(&self) -> Self {
        let e = &self.elements;
        Self::new([
            [e[0][0].conj(), e[1][0].conj()],
            [e[0][1].conj(), e[1][1].conj()],
        ])
    }

    /// Maximum elementwise distance to another matrix
    ///
    /// Returns max_ij |a_ij - b_ij|, the measure used for unitarity and
    /// completeness checks.
    pub fn max_deviation_from(&self, other: &Self) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..2 {
            for j in 0..2 {
                max = max.max((self.elements[i][j] - other.elements[i][j]).norm());
            }
        }
        max
    }

    /// Check whether the matrix is unitary: U†U = I within `tolerance`
    ///
    /// # Example
    /// ```
    /// use rqvm_core::gates::HADAMARD;
    ///
    /// assert!(HADAMARD.is_unitary(1e-10));
    /// ```
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = self.adjoint() * *self;
        product.max_deviation_from(&Self::identity()) <= tolerance
    }

    /// Check that every entry is finite (no NaN, no infinities)
    pub fn is_finite(&self) -> bool {
        self.elements
            .iter()
            .flatten()
            .all(|c| c.re.is_finite() && c.im.is_finite())
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    fn mul(self, rhs: Matrix2) -> Matrix2 {
        let a = &self.elements;
        let b = &rhs.elements;
        let mut out = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }
        Matrix2::new(out)
    }
}

impl fmt::Debug for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.elements;
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            e[0][0], e[0][1], e[1][0], e[1][1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_product() {
        let id = Matrix2::identity();
        assert_eq!(id * id, id);
    }

    #[test]
    fn test_multiply_off_diagonal() {
        // [[0,1],[0,0]] * [[0,0],[1,0]] = [[1,0],[0,0]]
        let raise = Matrix2::new([[ZERO, ONE], [ZERO, ZERO]]);
        let lower = Matrix2::new([[ZERO, ZERO], [ONE, ZERO]]);
        let product = raise * lower;
        assert_relative_eq!(product.get(0, 0).re, 1.0);
        assert_relative_eq!(product.get(1, 1).re, 0.0);
    }

    #[test]
    fn test_adjoint() {
        let m = Matrix2::new([
            [Complex64::new(1.0, 1.0), Complex64::new(2.0, 0.0)],
            [Complex64::new(0.0, 3.0), Complex64::new(4.0, -1.0)],
        ]);
        let adj = m.adjoint();
        assert_eq!(adj.get(0, 0), Complex64::new(1.0, -1.0));
        assert_eq!(adj.get(0, 1), Complex64::new(0.0, -3.0));
        assert_eq!(adj.get(1, 0), Complex64::new(2.0, 0.0));
        assert_eq!(adj.get(1, 1), Complex64::new(4.0, 1.0));
    }

    #[test]
    fn test_diagonal() {
        let d = Matrix2::diagonal(1.0, 0.5);
        assert_relative_eq!(d.get(0, 0).re, 1.0);
        assert_relative_eq!(d.get(1, 1).re, 0.5);
        assert_relative_eq!(d.get(0, 1).norm(), 0.0);
    }

    #[test]
    fn test_is_unitary() {
        assert!(Matrix2::identity().is_unitary(1e-10));
        assert!(!Matrix2::diagonal(1.0, 0.5).is_unitary(1e-10));
        assert!(!Matrix2::zero().is_unitary(1e-10));
    }

    #[test]
    fn test_is_finite() {
        assert!(Matrix2::identity().is_finite());
        let bad = Matrix2::new([
            [Complex64::new(f64::NAN, 0.0), ZERO],
            [ZERO, ONE],
        ]);
        assert!(!bad.is_finite());
    }

    #[test]
    fn test_scaled() {
        let m = Matrix2::identity().scaled(0.25);
        assert_relative_eq!(m.get(0, 0).re, 0.25);
        assert_relative_eq!(m.get(1, 1).re, 0.25);
    }
}
