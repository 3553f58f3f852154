//! Core types for the rqvm noisy quantum virtual machine
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Matrix2`]: 2×2 complex matrices for single-qubit gates
//! - [`Program`]: Instruction lists with custom and noisy gate definitions
//! - [`noise`]: Kraus-operator noise channels and gate/noise composition
//!
//! # Example
//! ```
//! use rqvm_core::{Program, QubitId};
//! use rqvm_core::noise::damped_gate;
//! use rqvm_core::gates::PAULI_X;
//!
//! let mut program = Program::new();
//! program.gate("X", QubitId::new(0));
//! program.define_noisy_gate("X", &[QubitId::new(0)], damped_gate(&PAULI_X, 0.1)).unwrap();
//! ```

pub mod error;
pub mod gates;
pub mod matrix;
pub mod noise;
pub mod program;
pub mod qubit;

// Re-exports for convenience
pub use error::ProgramError;
pub use matrix::Matrix2;
pub use num_complex::Complex64;
pub use program::{Instruction, Program};
pub use qubit::QubitId;

/// Type alias for results in rqvm-core
pub type Result<T> = std::result::Result<T, ProgramError>;
