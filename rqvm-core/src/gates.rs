//! Standard single-qubit gate matrices
//!
//! Constant matrices for the named gates the virtual machine resolves
//! directly, plus parameterized rotation constructors.

use crate::matrix::Matrix2;
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = 0.7071067811865476; // 1/√2

/// Identity gate
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2 = Matrix2::new([[ONE, ZERO], [ZERO, ONE]]);

/// Pauli-X gate (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = Matrix2::new([[ZERO, ONE], [ONE, ZERO]]);

/// Pauli-Y gate
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = Matrix2::new([[ZERO, NEG_I], [I, ZERO]]);

/// Pauli-Z gate
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = Matrix2::new([[ONE, ZERO], [ZERO, NEG_ONE]]);

/// Hadamard gate
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = Matrix2::new([
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
]);

/// Generate the rotation-X gate matrix for a given angle
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_x(theta: f64) -> Matrix2 {
    let half_theta = theta / 2.0;
    let cos_val = Complex64::new(half_theta.cos(), 0.0);
    let sin_val = Complex64::new(0.0, -half_theta.sin());

    Matrix2::new([[cos_val, sin_val], [sin_val, cos_val]])
}

/// Generate the rotation-Y gate matrix for a given angle
/// RY(θ) = [[cos(θ/2),  -sin(θ/2)],
///          [sin(θ/2),   cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> Matrix2 {
    let half_theta = theta / 2.0;
    let cos_val = Complex64::new(half_theta.cos(), 0.0);
    let sin_val = half_theta.sin();

    Matrix2::new([
        [cos_val, Complex64::new(-sin_val, 0.0)],
        [Complex64::new(sin_val, 0.0), cos_val],
    ])
}

/// Generate the rotation-Z gate matrix for a given angle
/// RZ(θ) = [[e^(-iθ/2),  0       ],
///          [0,          e^(iθ/2)]]
#[inline]
pub fn rotation_z(theta: f64) -> Matrix2 {
    let half_theta = theta / 2.0;

    Matrix2::new([
        [
            Complex64::new(half_theta.cos(), -half_theta.sin()),
            ZERO,
        ],
        [
            ZERO,
            Complex64::new(half_theta.cos(), half_theta.sin()),
        ],
    ])
}

/// Look up a standard gate matrix by name
///
/// Covers the fixed-matrix gates; parameterized rotations have no name-level
/// entry and must be registered on a program via `defgate`.
pub fn standard_gate(name: &str) -> Option<Matrix2> {
    match name {
        "I" => Some(IDENTITY),
        "X" => Some(PAULI_X),
        "Y" => Some(PAULI_Y),
        "Z" => Some(PAULI_Z),
        "H" => Some(HADAMARD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_pauli_x_squares_to_identity() {
        let product = PAULI_X * PAULI_X;
        assert!(product.max_deviation_from(&IDENTITY) < 1e-12);
    }

    #[test]
    fn test_standard_gates_are_unitary() {
        for name in ["I", "X", "Y", "Z", "H"] {
            let gate = standard_gate(name).unwrap();
            assert!(gate.is_unitary(1e-10), "{} must be unitary", name);
        }
    }

    #[test]
    fn test_unknown_gate_name() {
        assert!(standard_gate("CNOT").is_none());
        assert!(standard_gate("RXdphi").is_none());
    }

    #[test]
    fn test_rotation_x_at_zero_is_identity() {
        let rx = rotation_x(0.0);
        assert!(rx.max_deviation_from(&IDENTITY) < 1e-12);
    }

    #[test]
    fn test_rotation_x_at_pi() {
        // RX(π) = -iX
        let rx = rotation_x(PI);
        assert_relative_eq!(rx.get(0, 1).im, -1.0, epsilon = 1e-12);
        assert_relative_eq!(rx.get(1, 0).im, -1.0, epsilon = 1e-12);
        assert_relative_eq!(rx.get(0, 0).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotations_are_unitary() {
        for theta in [0.0, 0.1, PI / 3.0, PI, 2.0 * PI] {
            assert!(rotation_x(theta).is_unitary(1e-10));
            assert!(rotation_y(theta).is_unitary(1e-10));
            assert!(rotation_z(theta).is_unitary(1e-10));
        }
    }
}
