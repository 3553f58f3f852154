//! Quantum noise channels in the Kraus operator-sum representation
//!
//! A channel is a set of operators {K_i} satisfying the completeness
//! relation Σ K_i† K_i = I; it transforms a state ρ as ρ → Σ K_i ρ K_i†.
//! This module provides the amplitude-damping channel and the composition
//! rule that turns a unitary gate into a noisy gate ("apply gate, then
//! noise"), which is what programs register via `define_noisy_gate`.

pub mod channels;
pub mod kraus;

pub use channels::{AmplitudeDamping, NoiseChannel, DEFAULT_DAMPING};
pub use kraus::{
    append_kraus_to_gate, completeness_deviation, damped_gate, damping_kraus_operators,
    KrausOperator,
};
