//! Kraus operators and gate/noise composition
//!
//! The numerical core of the workspace: building the amplitude-damping
//! operator pair and right-multiplying a Kraus set by a unitary so the
//! resulting set models "apply the gate, then the noise".

use crate::matrix::Matrix2;
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// A single Kraus operator over one qubit
///
/// One matrix in an operator-sum representation. Operators are plain 2×2
/// matrices; validity (the completeness relation) is a property of the set
/// they belong to, checked with [`completeness_deviation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KrausOperator {
    matrix: Matrix2,
}

impl KrausOperator {
    /// Wrap a matrix as a Kraus operator
    #[inline]
    pub const fn new(matrix: Matrix2) -> Self {
        Self { matrix }
    }

    /// Borrow the underlying matrix
    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Compute the adjoint (conjugate transpose) of this operator
    pub fn adjoint(&self) -> Matrix2 {
        self.matrix.adjoint()
    }

    /// Right-multiply by a gate: K · G
    ///
    /// The returned operator models this operator's noise applied after
    /// the gate `g`.
    pub fn compose_after(&self, g: &Matrix2) -> Self {
        Self::new(self.matrix * *g)
    }
}

/// Build the Kraus operators of the single-qubit amplitude-damping channel
///
/// For a one-step decay probability `p`, the channel is the ordered pair
///
/// ```text
/// K0 = [[1, 0], [0, √(1-p)]]
/// K1 = [[0, √p], [0, 0]]
/// ```
///
/// The pair satisfies K0†K0 + K1†K1 = I for p ∈ [0,1]. The probability is
/// not range-checked here; out-of-range values yield operators that do not
/// represent a physical channel. Use [`AmplitudeDamping::new`] for the
/// validating constructor.
///
/// [`AmplitudeDamping::new`]: super::AmplitudeDamping::new
///
/// # Example
/// ```
/// use rqvm_core::noise::{completeness_deviation, damping_kraus_operators};
///
/// let ops = damping_kraus_operators(0.1);
/// assert!(completeness_deviation(&ops) < 1e-10);
/// ```
pub fn damping_kraus_operators(p: f64) -> [KrausOperator; 2] {
    let residual = Matrix2::diagonal(1.0, (1.0 - p).sqrt());
    let decay = Matrix2::new([
        [ZERO, Complex64::new(p.sqrt(), 0.0)],
        [ZERO, ZERO],
    ]);

    [KrausOperator::new(residual), KrausOperator::new(decay)]
}

/// Follow a gate by a Kraus map: each operator becomes K_i · G
///
/// Pure function over the inputs. If `{K_i}` satisfies completeness and `g`
/// is unitary, the returned set satisfies completeness as well, since
/// Σ (K_i G)† (K_i G) = G† (Σ K_i† K_i) G = G† G = I.
pub fn append_kraus_to_gate(kraus_ops: &[KrausOperator], g: &Matrix2) -> Vec<KrausOperator> {
    kraus_ops.iter().map(|k| k.compose_after(g)).collect()
}

/// Kraus operators for a unitary gate followed by amplitude damping
///
/// # Arguments
/// * `gate` - The 2×2 unitary gate matrix
/// * `damp_prob` - The one-step damping probability
///
/// # Example
/// ```
/// use rqvm_core::gates::PAULI_X;
/// use rqvm_core::noise::damped_gate;
///
/// let noisy_x = damped_gate(&PAULI_X, 0.2);
/// assert_eq!(noisy_x.len(), 2);
/// ```
pub fn damped_gate(gate: &Matrix2, damp_prob: f64) -> Vec<KrausOperator> {
    append_kraus_to_gate(&damping_kraus_operators(damp_prob), gate)
}

/// Maximum elementwise deviation of Σ K†K from the identity
///
/// Zero (within floating-point tolerance) for a trace-preserving channel.
pub fn completeness_deviation(kraus_ops: &[KrausOperator]) -> f64 {
    let mut sum = [[ZERO; 2]; 2];
    for k in kraus_ops {
        let product = k.adjoint() * *k.matrix();
        for i in 0..2 {
            for j in 0..2 {
                sum[i][j] += product.get(i, j);
            }
        }
    }
    Matrix2::new(sum).max_deviation_from(&Matrix2::identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{rotation_x, HADAMARD, IDENTITY, PAULI_X};
    use approx::assert_relative_eq;

    #[test]
    fn test_damping_completeness_across_range() {
        for p in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let ops = damping_kraus_operators(p);
            assert!(
                completeness_deviation(&ops) < 1e-10,
                "completeness violated at p = {}",
                p
            );
        }
    }

    #[test]
    fn test_no_damping() {
        // p = 0: K0 is the identity and K1 vanishes
        let [k0, k1] = damping_kraus_operators(0.0);
        assert!(k0.matrix().max_deviation_from(&IDENTITY) < 1e-12);
        assert!(k1.matrix().max_deviation_from(&Matrix2::zero()) < 1e-12);
    }

    #[test]
    fn test_full_damping() {
        // p = 1: K0 = diag(1, 0), K1 = [[0,1],[0,0]]
        let [k0, k1] = damping_kraus_operators(1.0);
        assert!(k0.matrix().max_deviation_from(&Matrix2::diagonal(1.0, 0.0)) < 1e-12);
        assert_relative_eq!(k1.matrix().get(0, 1).re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(k1.matrix().get(0, 0).norm(), 0.0);
        assert_relative_eq!(k1.matrix().get(1, 0).norm(), 0.0);
        assert_relative_eq!(k1.matrix().get(1, 1).norm(), 0.0);
    }

    #[test]
    fn test_operator_ordering() {
        // The residual (no-decay) operator comes first
        let [k0, k1] = damping_kraus_operators(0.3);
        assert_relative_eq!(k0.matrix().get(0, 0).re, 1.0);
        assert_relative_eq!(k1.matrix().get(0, 1).re, 0.3_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_compose_with_identity_is_noop() {
        let ops = damping_kraus_operators(0.2);
        let composed = append_kraus_to_gate(&ops, &IDENTITY);
        for (orig, comp) in ops.iter().zip(&composed) {
            assert!(orig.matrix().max_deviation_from(comp.matrix()) < 1e-12);
        }
    }

    #[test]
    fn test_composition_preserves_completeness() {
        let ops = damping_kraus_operators(0.2);
        for gate in [PAULI_X, HADAMARD, rotation_x(0.1), rotation_x(1.7)] {
            let composed = append_kraus_to_gate(&ops, &gate);
            assert!(completeness_deviation(&composed) < 1e-10);
        }
    }

    #[test]
    fn test_composition_order() {
        // K1 · X picks up the decay amplitude in the first column
        let ops = damping_kraus_operators(0.5);
        let composed = append_kraus_to_gate(&ops, &PAULI_X);
        assert_relative_eq!(
            composed[1].matrix().get(0, 0).re,
            0.5_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(composed[1].matrix().get(0, 1).norm(), 0.0);
    }

    #[test]
    fn test_damped_gate_matches_manual_composition() {
        let direct = damped_gate(&HADAMARD, 0.15);
        let manual = append_kraus_to_gate(&damping_kraus_operators(0.15), &HADAMARD);
        for (d, m) in direct.iter().zip(&manual) {
            assert!(d.matrix().max_deviation_from(m.matrix()) < 1e-15);
        }
    }
}
