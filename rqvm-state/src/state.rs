//! Dense pure-state vector with gate, measurement and Kraus operations

use crate::error::{Result, StateError};
use num_complex::Complex64;
use rqvm_core::matrix::Matrix2;
use rqvm_core::noise::KrausOperator;
use std::fmt;

/// Practical ceiling on state size: 2^24 amplitudes is 256 MiB
const MAX_QUBITS: usize = 24;

/// A pure quantum state over `n` qubits
///
/// Stores the full 2^n amplitude vector. Qubit `q` corresponds to bit `q`
/// of the basis-state index (qubit 0 is the least significant bit).
///
/// # Example
/// ```
/// use rqvm_state::PureState;
///
/// let state = PureState::new(2).unwrap();
/// assert_eq!(state.dimension(), 4);
/// assert!((state.norm() - 1.0).abs() < 1e-12);
/// ```
pub struct PureState {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl PureState {
    /// Create a new state initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns error if `num_qubits` exceeds the supported maximum.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Create a state from raw amplitude data
    ///
    /// # Errors
    /// Returns error if `amplitudes.len()` is not 2^num_qubits.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let expected = 1 << num_qubits;
        if amplitudes.len() != expected {
            return Err(StateError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            amplitudes: amplitudes.to_vec(),
            num_qubits,
        })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the amplitude vector (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Borrow the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// The Euclidean norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Reset to |0...0⟩
    pub fn reset(&mut self) {
        for amp in self.amplitudes.iter_mut() {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply a 2×2 matrix to one qubit
    ///
    /// The matrix is not required to be unitary; Kraus branches use this
    /// too and renormalize afterwards.
    pub fn apply_single_qubit_gate(&mut self, matrix: &Matrix2, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;

        let mask = 1 << qubit;
        let m = matrix.elements();

        for index in 0..self.amplitudes.len() {
            if index & mask != 0 {
                continue;
            }
            let partner = index | mask;
            let a0 = self.amplitudes[index];
            let a1 = self.amplitudes[partner];
            self.amplitudes[index] = m[0][0] * a0 + m[0][1] * a1;
            self.amplitudes[partner] = m[1][0] * a0 + m[1][1] * a1;
        }

        Ok(())
    }

    /// Probability that measuring `qubit` yields 1
    pub fn probability_of_one(&self, qubit: usize) -> Result<f64> {
        self.check_qubit(qubit)?;

        let mask = 1 << qubit;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(index, _)| index & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum())
    }

    /// Measure one qubit, collapse the state, and return the outcome
    ///
    /// # Arguments
    /// * `qubit` - Target qubit
    /// * `random_value` - Uniform sample in [0, 1) deciding the outcome
    ///
    /// # Errors
    /// Returns error if the qubit index is invalid or the collapsed state
    /// has vanishing norm.
    pub fn measure_qubit(&mut self, qubit: usize, random_value: f64) -> Result<u8> {
        let prob_one = self.probability_of_one(qubit)?;
        let prob_zero = 1.0 - prob_one;

        let outcome: u8 = if random_value < prob_zero { 0 } else { 1 };

        let normalization = if outcome == 0 {
            prob_zero.sqrt()
        } else {
            prob_one.sqrt()
        };
        if normalization < 1e-10 {
            return Err(StateError::NormVanished {
                norm: normalization,
            });
        }

        let mask = 1 << qubit;
        let inv_norm = 1.0 / normalization;
        for (index, amp) in self.amplitudes.iter_mut().enumerate() {
            let bit = ((index & mask) != 0) as u8;
            if bit != outcome {
                *amp = Complex64::new(0.0, 0.0);
            } else {
                *amp *= inv_norm;
            }
        }

        Ok(outcome)
    }

    /// Apply one stochastic trajectory step of a Kraus channel to `qubit`
    ///
    /// Branch `i` is chosen with probability p_i = ‖K_i|ψ⟩‖², the chosen
    /// operator is applied, and the state is renormalized. Returns the
    /// index of the branch taken.
    ///
    /// # Arguments
    /// * `kraus_ops` - The channel's operators (must be non-empty)
    /// * `qubit` - Target qubit
    /// * `random_value` - Uniform sample in [0, 1) selecting the branch
    pub fn apply_kraus(
        &mut self,
        kraus_ops: &[KrausOperator],
        qubit: usize,
        random_value: f64,
    ) -> Result<usize> {
        if kraus_ops.is_empty() {
            return Err(StateError::EmptyKrausSet);
        }
        self.check_qubit(qubit)?;

        let weights: Vec<f64> = kraus_ops
            .iter()
            .map(|k| self.branch_weight(k.matrix(), qubit))
            .collect();
        let total: f64 = weights.iter().sum();
        if total < 1e-12 {
            return Err(StateError::NormVanished { norm: total });
        }

        // For a completeness-satisfying set the total is 1 up to rounding;
        // scaling the threshold keeps the selection exact regardless.
        let threshold = random_value * total;
        let mut cumulative = 0.0;
        let mut chosen = kraus_ops.len() - 1;
        for (index, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if threshold < cumulative {
                chosen = index;
                break;
            }
        }

        let weight = weights[chosen];
        if weight < 1e-15 {
            return Err(StateError::NormVanished { norm: weight });
        }

        self.apply_single_qubit_gate(kraus_ops[chosen].matrix(), qubit)?;
        let inv_norm = 1.0 / weight.sqrt();
        for amp in self.amplitudes.iter_mut() {
            *amp *= inv_norm;
        }

        Ok(chosen)
    }

    /// Squared norm of K|ψ⟩ without mutating the state
    fn branch_weight(&self, matrix: &Matrix2, qubit: usize) -> f64 {
        let mask = 1 << qubit;
        let m = matrix.elements();
        let mut weight = 0.0;

        for index in 0..self.amplitudes.len() {
            if index & mask != 0 {
                continue;
            }
            let partner = index | mask;
            let a0 = self.amplitudes[index];
            let a1 = self.amplitudes[partner];
            weight += (m[0][0] * a0 + m[0][1] * a1).norm_sqr();
            weight += (m[1][0] * a0 + m[1][1] * a1).norm_sqr();
        }

        weight
    }
}

impl fmt::Debug for PureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PureState({} qubits)", self.num_qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rqvm_core::gates::{HADAMARD, PAULI_X};
    use rqvm_core::noise::damping_kraus_operators;

    #[test]
    fn test_initial_state() {
        let state = PureState::new(3).unwrap();
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.dimension(), 8);
        assert_relative_eq!(state.amplitudes()[0].re, 1.0);
        assert_relative_eq!(state.norm(), 1.0);
    }

    #[test]
    fn test_too_many_qubits() {
        assert!(PureState::new(25).is_err());
    }

    #[test]
    fn test_from_amplitudes_dimension_check() {
        let amps = vec![Complex64::new(1.0, 0.0); 3];
        assert!(matches!(
            PureState::from_amplitudes(2, &amps),
            Err(StateError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_apply_x_flips() {
        let mut state = PureState::new(1).unwrap();
        state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
        assert_relative_eq!(state.amplitudes()[0].norm(), 0.0);
        assert_relative_eq!(state.amplitudes()[1].re, 1.0);
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut state = PureState::new(1).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 0).unwrap();
        assert_relative_eq!(state.probability_of_one(0).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_gate_on_invalid_qubit() {
        let mut state = PureState::new(1).unwrap();
        assert!(matches!(
            state.apply_single_qubit_gate(&PAULI_X, 1),
            Err(StateError::InvalidQubitIndex { .. })
        ));
    }

    #[test]
    fn test_measure_deterministic_states() {
        let mut state = PureState::new(1).unwrap();
        assert_eq!(state.measure_qubit(0, 0.3).unwrap(), 0);

        state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
        assert_eq!(state.measure_qubit(0, 0.3).unwrap(), 1);
    }

    #[test]
    fn test_measure_collapses_superposition() {
        let mut state = PureState::new(1).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 0).unwrap();

        // random_value below P(0)=0.5 collapses to |0⟩
        let outcome = state.measure_qubit(0, 0.2).unwrap();
        assert_eq!(outcome, 0);
        assert_relative_eq!(state.probability_of_one(0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kraus_no_damping_keeps_state() {
        let mut state = PureState::new(1).unwrap();
        state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();

        // p = 0: only the identity branch has weight
        let ops = damping_kraus_operators(0.0);
        let branch = state.apply_kraus(&ops, 0, 0.99).unwrap();
        assert_eq!(branch, 0);
        assert_relative_eq!(state.probability_of_one(0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kraus_full_damping_decays_excited_state() {
        // p = 1 on |1⟩: every branch sends the state to |0⟩
        for random_value in [0.0, 0.5, 0.99] {
            let mut state = PureState::new(1).unwrap();
            state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();

            let ops = damping_kraus_operators(1.0);
            state.apply_kraus(&ops, 0, random_value).unwrap();
            assert_relative_eq!(state.probability_of_one(0).unwrap(), 0.0, epsilon = 1e-12);
            assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_kraus_branch_selection_on_excited_state() {
        // On |1⟩ with p = 0.4: branch 0 (no decay) has weight 0.6,
        // branch 1 (decay) has weight 0.4
        let ops = damping_kraus_operators(0.4);

        let mut state = PureState::new(1).unwrap();
        state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
        let branch = state.apply_kraus(&ops, 0, 0.55).unwrap();
        assert_eq!(branch, 0);
        assert_relative_eq!(state.probability_of_one(0).unwrap(), 1.0, epsilon = 1e-12);

        let mut state = PureState::new(1).unwrap();
        state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
        let branch = state.apply_kraus(&ops, 0, 0.65).unwrap();
        assert_eq!(branch, 1);
        assert_relative_eq!(state.probability_of_one(0).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kraus_renormalizes() {
        let mut state = PureState::new(2).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 0).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 1).unwrap();

        let ops = damping_kraus_operators(0.3);
        state.apply_kraus(&ops, 1, 0.7).unwrap();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kraus_empty_set() {
        let mut state = PureState::new(1).unwrap();
        assert!(matches!(
            state.apply_kraus(&[], 0, 0.5),
            Err(StateError::EmptyKrausSet)
        ));
    }

    #[test]
    fn test_reset() {
        let mut state = PureState::new(2).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 0).unwrap();
        state.reset();
        assert_relative_eq!(state.amplitudes()[0].re, 1.0);
        assert_relative_eq!(state.norm(), 1.0);
    }
}
