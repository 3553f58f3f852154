//! Error types for rqvm-core

use thiserror::Error;

/// Errors that can occur when building programs and noise channels
#[derive(Debug, Error)]
pub enum ProgramError {
    /// Probability parameter outside the valid range
    #[error("Probability must be in [0,1], got {0}")]
    InvalidProbability(f64),

    /// A gate definition was registered with an empty name
    #[error("Gate name cannot be empty")]
    EmptyGateName,

    /// A custom gate matrix failed the unitarity check
    #[error("Gate '{name}' is not unitary: max deviation {deviation:.2e} exceeds tolerance {tolerance:.2e}")]
    NotUnitary {
        name: String,
        deviation: f64,
        tolerance: f64,
    },

    /// A matrix contains NaN or infinite entries
    #[error("Gate '{name}' contains NaN or infinite matrix entries")]
    NonFiniteMatrix { name: String },

    /// A noisy gate definition was registered without operators
    #[error("Noisy gate '{name}' has no Kraus operators")]
    EmptyKrausSet { name: String },

    /// A Kraus operator set failed the completeness check
    #[error("Kraus operators for '{name}' violate completeness: max deviation {deviation:.2e} exceeds tolerance {tolerance:.2e}")]
    IncompleteKrausSet {
        name: String,
        deviation: f64,
        tolerance: f64,
    },

    /// A noisy gate definition targeted no qubits
    #[error("Noisy gate '{name}' must target at least one qubit")]
    NoTargetQubits { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probability_message() {
        let err = ProgramError::InvalidProbability(1.5);
        let msg = format!("{}", err);
        assert!(msg.contains("1.5"));
        assert!(msg.contains("[0,1]"));
    }

    #[test]
    fn test_not_unitary_message() {
        let err = ProgramError::NotUnitary {
            name: "BAD".to_string(),
            deviation: 0.25,
            tolerance: 1e-10,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("BAD"));
        assert!(msg.contains("not unitary"));
    }
}
