//! Error types for the virtual machine

use std::fmt;

/// Result type for virtual machine operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while executing programs
#[derive(Debug, Clone)]
pub enum SimulatorError {
    /// Invalid configuration
    InvalidConfig(String),

    /// Program is invalid or malformed
    InvalidProgram(String),

    /// A gate instruction named a gate with no definition
    UnknownGate(String),

    /// A gate instruction targeted an unsupported qubit count
    UnsupportedGate { name: String, num_qubits: usize },

    /// State evolution failed mid-trajectory
    ExecutionFailed { message: String },
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimulatorError::InvalidProgram(msg) => {
                write!(f, "Invalid program: {}", msg)
            }
            SimulatorError::UnknownGate(name) => {
                write!(f, "Unknown gate '{}': no standard, custom, or noisy definition", name)
            }
            SimulatorError::UnsupportedGate { name, num_qubits } => {
                write!(
                    f,
                    "Gate '{}' applied to {} qubits: only single-qubit gates are executable",
                    name, num_qubits
                )
            }
            SimulatorError::ExecutionFailed { message } => {
                write!(f, "Execution failed: {}", message)
            }
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<rqvm_core::ProgramError> for SimulatorError {
    fn from(err: rqvm_core::ProgramError) -> Self {
        SimulatorError::InvalidProgram(err.to_string())
    }
}

impl From<rqvm_state::StateError> for SimulatorError {
    fn from(err: rqvm_state::StateError) -> Self {
        SimulatorError::ExecutionFailed {
            message: err.to_string(),
        }
    }
}
