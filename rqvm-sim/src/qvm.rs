//! The quantum virtual machine

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rqvm_core::gates::standard_gate;
use rqvm_core::{Instruction, Program};
use rqvm_state::PureState;
use std::time::Instant;

use crate::{
    config::QvmConfig,
    error::{Result, SimulatorError},
    result::TrialResults,
    statistics::ExecutionStatistics,
};

/// A trajectory-sampling quantum virtual machine
///
/// Executes programs one trial at a time. Each trial starts from |0...0⟩,
/// walks the instruction list, and ends with the requested classical
/// addresses copied into the result row. Gate names are resolved in order:
/// the program's noisy definitions (exact (name, qubits) match), then its
/// custom `defgate` table, then the standard gate set.
///
/// The `random_seed` field is deliberately public: drivers overwrite it
/// between runs to make each run reproducible. When it is `None` the
/// machine draws entropy from the OS.
///
/// # Example
/// ```
/// use rqvm_core::{Program, QubitId};
/// use rqvm_sim::{Qvm, QvmConfig};
///
/// let mut program = Program::new();
/// program.gate("H", QubitId::new(0));
/// program.measure(QubitId::new(0), 0);
///
/// let mut qvm = Qvm::new(QvmConfig::new().with_trials(20)).unwrap();
/// qvm.random_seed = Some(42);
/// let results = qvm.run(&program, &[0]).unwrap();
/// assert_eq!(results.trials(), 20);
/// ```
pub struct Qvm {
    config: QvmConfig,

    /// Seed for the next run; overwritten freely by callers
    pub random_seed: Option<u64>,
}

impl Qvm {
    /// Create a new virtual machine with the given configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid.
    pub fn new(config: QvmConfig) -> Result<Self> {
        config.validate().map_err(SimulatorError::InvalidConfig)?;

        Ok(Self {
            config,
            random_seed: None,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &QvmConfig {
        &self.config
    }

    /// Run a program for the configured default trial count
    pub fn run(&mut self, program: &Program, addresses: &[usize]) -> Result<TrialResults> {
        self.run_trials(program, addresses, self.config.trials)
    }

    /// Run a program for an explicit number of trials
    ///
    /// # Arguments
    /// * `program` - The program to execute (not mutated)
    /// * `addresses` - Classical memory addresses reported per trial
    /// * `trials` - Number of independent trajectories
    ///
    /// # Errors
    /// Returns error if the program is empty, a gate cannot be resolved,
    /// or state evolution fails. Errors are propagated unmodified; there
    /// is no retry and no partial result.
    pub fn run_trials(
        &mut self,
        program: &Program,
        addresses: &[usize],
        trials: usize,
    ) -> Result<TrialResults> {
        let start = Instant::now();

        if trials == 0 {
            return Err(SimulatorError::InvalidConfig(
                "trials must be > 0".to_string(),
            ));
        }
        if program.is_empty() {
            return Err(SimulatorError::InvalidProgram(
                "empty program".to_string(),
            ));
        }

        let num_qubits = program
            .max_qubit()
            .map(|q| q.index() + 1)
            .unwrap_or_default();

        let memory_size = addresses
            .iter()
            .copied()
            .max()
            .into_iter()
            .chain(program.max_slot())
            .max()
            .map(|highest| highest + 1)
            .unwrap_or_default();

        let mut rng = match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut stats = self
            .config
            .collect_statistics
            .then(ExecutionStatistics::new);

        let mut data = Vec::with_capacity(trials * addresses.len());
        let mut memory = vec![0u8; memory_size];

        for _ in 0..trials {
            let mut state = PureState::new(num_qubits)?;
            memory.fill(0);

            self.execute_trial(program, &mut state, &mut memory, &mut rng, stats.as_mut())?;

            for &address in addresses {
                data.push(memory[address]);
            }
        }

        if let Some(ref mut s) = stats {
            s.trials_executed = trials;
            s.total_time = start.elapsed();
        }

        let mut results = TrialResults::new(data, trials, addresses.len());
        if let Some(s) = stats {
            results = results.with_statistics(s);
        }

        Ok(results)
    }

    /// Walk the instruction list once over a fresh state
    fn execute_trial(
        &self,
        program: &Program,
        state: &mut PureState,
        memory: &mut [u8],
        rng: &mut StdRng,
        mut stats: Option<&mut ExecutionStatistics>,
    ) -> Result<()> {
        for instruction in program.instructions() {
            match instruction {
                Instruction::Gate { name, qubits } => {
                    if let Some(kraus_ops) = program.noisy_definition(name, qubits) {
                        let target = Self::single_target(name, qubits)?;
                        state.apply_kraus(kraus_ops, target, rng.gen::<f64>())?;
                        if let Some(ref mut s) = stats {
                            s.noise_applications += 1;
                        }
                    } else {
                        let matrix = program
                            .gate_definition(name)
                            .copied()
                            .or_else(|| standard_gate(name))
                            .ok_or_else(|| SimulatorError::UnknownGate(name.clone()))?;
                        let target = Self::single_target(name, qubits)?;
                        state.apply_single_qubit_gate(&matrix, target)?;
                        if let Some(ref mut s) = stats {
                            s.gates_applied += 1;
                        }
                    }
                }
                Instruction::Measure { qubit, slot } => {
                    let outcome = state.measure_qubit(qubit.index(), rng.gen::<f64>())?;
                    memory[*slot] = outcome;
                    if let Some(ref mut s) = stats {
                        s.measurements += 1;
                    }
                }
            }
        }

        Ok(())
    }

    fn single_target(name: &str, qubits: &[rqvm_core::QubitId]) -> Result<usize> {
        match qubits {
            [qubit] => Ok(qubit.index()),
            _ => Err(SimulatorError::UnsupportedGate {
                name: name.to_string(),
                num_qubits: qubits.len(),
            }),
        }
    }
}

impl Default for Qvm {
    fn default() -> Self {
        Self {
            config: QvmConfig::default(),
            random_seed: None,
        }
    }
}
