//! Result types for virtual machine runs

use crate::statistics::ExecutionStatistics;
use std::fmt;

/// Measurement outcomes of one run: a trials × addresses bit matrix
///
/// Row `t` holds the values of the requested classical addresses after
/// trial `t`, in the order the addresses were passed to the run.
#[derive(Debug, Clone)]
pub struct TrialResults {
    data: Vec<u8>,
    trials: usize,
    num_addresses: usize,
    statistics: Option<ExecutionStatistics>,
}

impl TrialResults {
    /// Create results from row-major bit data
    ///
    /// # Panics
    /// Panics if `data.len() != trials * num_addresses`.
    pub fn new(data: Vec<u8>, trials: usize, num_addresses: usize) -> Self {
        assert_eq!(
            data.len(),
            trials * num_addresses,
            "result data must be rectangular"
        );
        Self {
            data,
            trials,
            num_addresses,
            statistics: None,
        }
    }

    /// Attach execution statistics
    pub fn with_statistics(mut self, statistics: ExecutionStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Number of trials (rows)
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Number of classical addresses reported per trial (columns)
    #[inline]
    pub fn num_addresses(&self) -> usize {
        self.num_addresses
    }

    /// One trial's outcomes
    pub fn row(&self, trial: usize) -> Option<&[u8]> {
        if trial >= self.trials {
            return None;
        }
        let start = trial * self.num_addresses;
        Some(&self.data[start..start + self.num_addresses])
    }

    /// Iterate over trial rows
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.num_addresses.max(1)).take(self.trials)
    }

    /// A single outcome bit
    pub fn get(&self, trial: usize, address_index: usize) -> Option<u8> {
        if address_index >= self.num_addresses {
            return None;
        }
        self.row(trial).map(|row| row[address_index])
    }

    /// Fraction of trials where the given address column read 1
    pub fn fraction_ones(&self, address_index: usize) -> Option<f64> {
        if address_index >= self.num_addresses || self.trials == 0 {
            return None;
        }
        let ones = self
            .rows()
            .filter(|row| row[address_index] == 1)
            .count();
        Some(ones as f64 / self.trials as f64)
    }

    /// The raw row-major bit data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Statistics attached to this run, if collection was enabled
    pub fn statistics(&self) -> Option<&ExecutionStatistics> {
        self.statistics.as_ref()
    }
}

impl fmt::Display for TrialResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrialResults({} trials × {} addresses)",
            self.trials, self.num_addresses
        )
    }
}

/// Results of a batch run: one [`TrialResults`] block per program
#[derive(Debug, Clone, Default)]
pub struct BatchResults {
    blocks: Vec<TrialResults>,
}

impl BatchResults {
    /// Assemble batch results from per-program blocks
    pub fn from_blocks(blocks: Vec<TrialResults>) -> Self {
        Self { blocks }
    }

    /// Number of programs in the batch
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check whether the batch is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// One program's block of trial outcomes
    pub fn block(&self, program_index: usize) -> Option<&TrialResults> {
        self.blocks.get(program_index)
    }

    /// Iterate over per-program blocks in batch order
    pub fn iter(&self) -> impl Iterator<Item = &TrialResults> {
        self.blocks.iter()
    }
}
