//! Quantum program representation
//!
//! A [`Program`] is an ordered instruction list plus two definition tables:
//! custom unitary gates registered by name (`defgate`) and noisy gate
//! variants registered per (name, qubits) pair (`define_noisy_gate`). The
//! virtual machine resolves gate instructions against the noisy table
//! first, then the custom table, then the standard gate set.

use crate::error::ProgramError;
use crate::matrix::Matrix2;
use crate::noise::{completeness_deviation, KrausOperator};
use crate::qubit::QubitId;
use crate::Result;
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Tolerance for the unitarity check on custom gate definitions
pub const UNITARITY_TOLERANCE: f64 = 1e-10;

/// Tolerance for the completeness check on noisy gate definitions
pub const COMPLETENESS_TOLERANCE: f64 = 1e-8;

/// A single program instruction
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Apply the named gate to the given qubits
    Gate {
        name: String,
        qubits: SmallVec<[QubitId; 2]>, // most gates are 1-2 qubits
    },
    /// Measure a qubit into a classical memory slot
    Measure { qubit: QubitId, slot: usize },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Gate { name, qubits } => {
                write!(f, "{}", name)?;
                for q in qubits {
                    write!(f, " {}", q)?;
                }
                Ok(())
            }
            Instruction::Measure { qubit, slot } => {
                write!(f, "MEASURE {} [{}]", qubit, slot)
            }
        }
    }
}

/// A quantum program: instructions plus gate and noise definitions
///
/// # Example
/// ```
/// use rqvm_core::{Program, QubitId};
///
/// let mut program = Program::new();
/// program.gate("X", QubitId::new(0));
/// program.measure(QubitId::new(0), 0);
/// assert_eq!(program.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    gate_definitions: HashMap<String, Matrix2>,
    noisy_definitions: HashMap<(String, Vec<QubitId>), Vec<KrausOperator>>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instructions
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check whether the program has no instructions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Append a raw instruction
    pub fn inst(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// Append a single-qubit gate application
    pub fn gate(&mut self, name: impl Into<String>, qubit: QubitId) -> &mut Self {
        self.inst(Instruction::Gate {
            name: name.into(),
            qubits: SmallVec::from_slice(&[qubit]),
        })
    }

    /// Append a measurement of `qubit` into classical slot `slot`
    pub fn measure(&mut self, qubit: QubitId, slot: usize) -> &mut Self {
        self.inst(Instruction::Measure { qubit, slot })
    }

    /// Register a custom unitary gate under `name`
    ///
    /// Re-registering a name replaces the previous definition.
    ///
    /// # Errors
    /// Returns error if the name is empty, the matrix has non-finite
    /// entries, or the matrix is not unitary within [`UNITARITY_TOLERANCE`].
    pub fn defgate(&mut self, name: impl Into<String>, matrix: Matrix2) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProgramError::EmptyGateName);
        }
        if !matrix.is_finite() {
            return Err(ProgramError::NonFiniteMatrix { name });
        }
        let deviation = (matrix.adjoint() * matrix).max_deviation_from(&Matrix2::identity());
        if deviation > UNITARITY_TOLERANCE {
            return Err(ProgramError::NotUnitary {
                name,
                deviation,
                tolerance: UNITARITY_TOLERANCE,
            });
        }

        self.gate_definitions.insert(name, matrix);
        Ok(())
    }

    /// Register a noisy variant of gate `name` on the given qubits
    ///
    /// When the virtual machine encounters `name` applied to exactly
    /// `qubits`, it applies this Kraus map instead of the unitary.
    ///
    /// # Errors
    /// Returns error if the name is empty, the target list or operator list
    /// is empty, any operator has non-finite entries, or the set violates
    /// the completeness relation within [`COMPLETENESS_TOLERANCE`].
    pub fn define_noisy_gate(
        &mut self,
        name: impl Into<String>,
        qubits: &[QubitId],
        kraus_ops: Vec<KrausOperator>,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProgramError::EmptyGateName);
        }
        if qubits.is_empty() {
            return Err(ProgramError::NoTargetQubits { name });
        }
        if kraus_ops.is_empty() {
            return Err(ProgramError::EmptyKrausSet { name });
        }
        if kraus_ops.iter().any(|k| !k.matrix().is_finite()) {
            return Err(ProgramError::NonFiniteMatrix { name });
        }
        let deviation = completeness_deviation(&kraus_ops);
        if deviation > COMPLETENESS_TOLERANCE {
            return Err(ProgramError::IncompleteKrausSet {
                name,
                deviation,
                tolerance: COMPLETENESS_TOLERANCE,
            });
        }

        self.noisy_definitions
            .insert((name, qubits.to_vec()), kraus_ops);
        Ok(())
    }

    /// Look up a custom gate definition by name
    pub fn gate_definition(&self, name: &str) -> Option<&Matrix2> {
        self.gate_definitions.get(name)
    }

    /// Look up a noisy gate definition for an exact (name, qubits) pair
    pub fn noisy_definition(&self, name: &str, qubits: &[QubitId]) -> Option<&[KrausOperator]> {
        self.noisy_definitions
            .get(&(name.to_string(), qubits.to_vec()))
            .map(|ops| ops.as_slice())
    }

    /// The set of qubits referenced by any instruction
    ///
    /// Sorted ascending; gate targets and measured qubits both count.
    pub fn qubits(&self) -> BTreeSet<QubitId> {
        let mut set = BTreeSet::new();
        for instruction in &self.instructions {
            match instruction {
                Instruction::Gate { qubits, .. } => set.extend(qubits.iter().copied()),
                Instruction::Measure { qubit, .. } => {
                    set.insert(*qubit);
                }
            }
        }
        set
    }

    /// The highest referenced qubit, if any
    pub fn max_qubit(&self) -> Option<QubitId> {
        self.qubits().into_iter().next_back()
    }

    /// The highest classical slot written by a measurement, if any
    pub fn max_slot(&self) -> Option<usize> {
        self.instructions
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Measure { slot, .. } => Some(*slot),
                _ => None,
            })
            .max()
    }

    /// Iterate over the instructions in program order
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
