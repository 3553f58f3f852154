//! Quantum virtual machine with stochastic noise
//!
//! This crate executes [`Program`]s trial by trial: each trial is one pure
//! state trajectory where noisy gates sample a single Kraus branch and
//! measurements write bits into classical memory. The batch driver layers
//! the noisy-gate registration loop on top, turning a list of bare programs
//! into amplitude-damped executions.
//!
//! # Example
//! ```
//! use rqvm_core::{Program, QubitId};
//! use rqvm_sim::{Qvm, QvmConfig};
//!
//! let mut program = Program::new();
//! program.gate("X", QubitId::new(0));
//! program.measure(QubitId::new(0), 0);
//!
//! let mut qvm = Qvm::new(QvmConfig::new().with_trials(10)).unwrap();
//! qvm.random_seed = Some(7);
//! let results = qvm.run(&program, &[0]).unwrap();
//! assert_eq!(results.trials(), 10);
//! ```
//!
//! [`Program`]: rqvm_core::Program

pub mod batch;
pub mod config;
pub mod error;
pub mod qvm;
pub mod result;
pub mod statistics;

pub use batch::{run_batch_noisy, NoisyBatchConfig};
pub use config::QvmConfig;
pub use error::{Result, SimulatorError};
pub use qvm::Qvm;
pub use result::{BatchResults, TrialResults};
pub use statistics::ExecutionStatistics;
