//! Virtual machine configuration

/// Configuration for the quantum virtual machine
#[derive(Debug, Clone)]
pub struct QvmConfig {
    /// Number of trials executed when the caller does not pass a count
    ///
    /// Default: 500
    pub trials: usize,

    /// Enable execution statistics collection
    ///
    /// When true, each run attaches timing and operation counters to its
    /// results.
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl Default for QvmConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            collect_statistics: false,
        }
    }
}

impl QvmConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default trial count
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.trials == 0 {
            return Err("trials must be > 0".to_string());
        }
        Ok(())
    }
}
