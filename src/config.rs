//! Simulator configuration.

/// Default upper bound on the number of processes in one run.
pub const DEFAULT_MAX_PROCESSES: usize = 100;

/// Run-wide settings shared by sources and the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Largest accepted process count (inclusive).
    pub max_processes: usize,
}

impl SimulatorConfig {
    /// Creates a configuration with default limits.
    pub fn new() -> Self {
        Self {
            max_processes: DEFAULT_MAX_PROCESSES,
        }
    }

    /// Sets the maximum process count.
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(SimulatorConfig::default().max_processes, 100);
        assert_eq!(SimulatorConfig::new(), SimulatorConfig::default());
    }

    #[test]
    fn test_custom_limit() {
        let config = SimulatorConfig::new().with_max_processes(3);
        assert_eq!(config.max_processes, 3);
    }
}
