//! Pure quantum state representation for trajectory simulation
//!
//! One noisy execution of a program is a single stochastic trajectory: the
//! state stays pure, and each noisy gate samples one Kraus branch with the
//! state-dependent probability p_i = ‖K_i|ψ⟩‖², applies it, and
//! renormalizes. Averaging over many trajectories reproduces the channel.
//!
//! # Example
//! ```
//! use rqvm_state::PureState;
//! use rqvm_core::gates::PAULI_X;
//!
//! let mut state = PureState::new(1).unwrap();
//! state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
//! assert_eq!(state.measure_qubit(0, 0.5).unwrap(), 1);
//! ```

pub mod error;
pub mod state;

pub use error::{Result, StateError};
pub use state::PureState;
