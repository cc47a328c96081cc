//! Engine configuration

use std::time::Duration;

use crate::error::{GameError, Result};

/// Search and timing parameters of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below the root (root moves count as the first ply)
    pub max_depth: u8,
    /// Time kept back from the budget for joining the worker and replying
    pub safety_margin: Duration,
}

impl EngineConfig {
    pub const DEFAULT_DEPTH: u8 = 5;
    pub const DEFAULT_MARGIN_MS: u64 = 750;

    #[must_use]
    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, safety_margin: Duration) -> Self {
        self.safety_margin = safety_margin;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(GameError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// How long the search may run for a per-move budget of `time_budget_secs`.
    ///
    /// Zero when the margin eats the whole budget.
    pub fn search_window(&self, time_budget_secs: u32) -> Duration {
        Duration::from_secs(u64::from(time_budget_secs)).saturating_sub(self.safety_margin)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_DEPTH,
            safety_margin: Duration::from_millis(Self::DEFAULT_MARGIN_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.safety_margin, Duration::from_millis(750));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_window() {
        let config = EngineConfig::default();
        assert_eq!(config.search_window(1), Duration::from_millis(250));
        assert_eq!(config.search_window(2), Duration::from_millis(1250));

        let greedy = config.with_margin(Duration::from_secs(3));
        assert_eq!(greedy.search_window(2), Duration::ZERO);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = EngineConfig::default().with_depth(0).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(EngineConfig::default().with_depth(1).validate().is_ok());
    }
}
