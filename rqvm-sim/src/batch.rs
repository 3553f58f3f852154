//! Batch driver for noisy program execution
//!
//! Takes a list of bare programs and runs each under amplitude damping:
//! every program gets a custom small-angle rotation definition, noisy
//! variants of "I" and the rotation on each accumulated qubit, and a
//! measurement of each accumulated qubit into its same-numbered classical
//! slot. The virtual machine's seed is rewritten per program from the
//! program's position, so a batch is reproducible end to end.

use rqvm_core::gates::{rotation_x, IDENTITY};
use rqvm_core::noise::damped_gate;
use rqvm_core::{Program, QubitId};
use std::collections::BTreeSet;

use crate::error::{Result, SimulatorError};
use crate::qvm::Qvm;
use crate::result::BatchResults;

/// Name under which the driver registers its fixed rotation gate
pub const ROTATION_GATE: &str = "RXdphi";

/// Angle of the fixed rotation: RX(0.1)
pub const ROTATION_ANGLE: f64 = 0.1;

/// Configuration for a noisy batch run
#[derive(Debug, Clone)]
pub struct NoisyBatchConfig {
    /// Trials per program
    ///
    /// Default: 500
    pub trials: usize,

    /// One-step damping probability for the noisy gate definitions
    ///
    /// Default: 0.2
    pub damping: f64,
}

impl Default for NoisyBatchConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            damping: 0.2,
        }
    }
}

impl NoisyBatchConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trial count per program
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the damping probability
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }
}

/// Run every program in the batch under amplitude damping
///
/// For each program, in input order:
/// 1. Its qubits join the accumulated qubit set. The set is shared across
///    the whole batch and never resets: a program late in the batch
///    receives noisy definitions and measurements for every qubit any
///    earlier program referenced, not just its own.
/// 2. The fixed rotation RX(0.1) is registered as [`ROTATION_GATE`].
/// 3. Every accumulated qubit gets noisy "I" and noisy rotation variants
///    built from `config.damping`.
/// 4. Every accumulated qubit is measured into its same-numbered slot.
/// 5. The machine's seed is set to the program's position + 2.
/// 6. The program runs for `config.trials` trials over classical addresses
///    0..=max accumulated qubit.
///
/// Programs are mutated in place (definitions and measurements appended),
/// as is the machine's seed field. Any error from gate registration or
/// execution propagates unmodified; programs already run keep their
/// mutations.
///
/// # Example
/// ```
/// use rqvm_core::{Program, QubitId};
/// use rqvm_sim::{run_batch_noisy, NoisyBatchConfig, Qvm};
///
/// let mut programs = vec![Program::new()];
/// programs[0].gate("X", QubitId::new(0));
///
/// let mut qvm = Qvm::default();
/// let config = NoisyBatchConfig::new().with_trials(25);
/// let results = run_batch_noisy(&mut programs, &mut qvm, &config).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results.block(0).unwrap().trials(), 25);
/// ```
pub fn run_batch_noisy(
    programs: &mut [Program],
    qvm: &mut Qvm,
    config: &NoisyBatchConfig,
) -> Result<BatchResults> {
    let rotation = rotation_x(ROTATION_ANGLE);
    let mut accumulated: BTreeSet<QubitId> = BTreeSet::new();
    let mut blocks = Vec::with_capacity(programs.len());

    for (position, program) in programs.iter_mut().enumerate() {
        accumulated.extend(program.qubits());

        program.defgate(ROTATION_GATE, rotation)?;
        for &qubit in &accumulated {
            program.define_noisy_gate("I", &[qubit], damped_gate(&IDENTITY, config.damping))?;
            program.define_noisy_gate(
                ROTATION_GATE,
                &[qubit],
                damped_gate(&rotation, config.damping),
            )?;
        }
        for &qubit in &accumulated {
            program.measure(qubit, qubit.index());
        }

        let max_qubit = accumulated.iter().next_back().copied().ok_or_else(|| {
            SimulatorError::InvalidProgram("program references no qubits".to_string())
        })?;

        qvm.random_seed = Some(position as u64 + 2);

        let addresses: Vec<usize> = (0..=max_qubit.index()).collect();
        let results = qvm.run_trials(program, &addresses, config.trials)?;
        blocks.push(results);
    }

    Ok(BatchResults::from_blocks(blocks))
}
