//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Requested state is too large to allocate
    #[error("State of {requested} qubits exceeds the supported maximum of {max}")]
    TooManyQubits { requested: usize, max: usize },

    /// Amplitude data does not match the state dimension
    #[error("Dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A collapse or Kraus branch left the state with (near) zero norm
    #[error("State norm vanished: {norm}")]
    NormVanished { norm: f64 },

    /// A Kraus application was given no operators
    #[error("Cannot apply an empty Kraus operator set")]
    EmptyKrausSet,
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
