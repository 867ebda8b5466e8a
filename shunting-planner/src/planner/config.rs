//! Search configuration for the shunting planner.

use crate::domain::MoveRules;

/// Configuration parameters for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of trains a siding may hold.
    /// `None` leaves sidings unbounded.
    pub siding_capacity: Option<usize>,

    /// Maximum number of states to expand before giving up.
    /// Reaching the limit is reported as a failure, not an error.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(siding_capacity: Option<usize>, max_expansions: Option<usize>) -> Self {
        Self {
            siding_capacity,
            max_expansions,
        }
    }

    /// Returns a copy with every siding limited to `capacity` trains.
    pub fn with_siding_capacity(mut self, capacity: usize) -> Self {
        self.siding_capacity = Some(capacity);
        self
    }

    /// Returns a copy that stops after `limit` expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Returns the move rules implied by this configuration.
    pub fn move_rules(&self) -> MoveRules {
        MoveRules {
            siding_capacity: self.siding_capacity,
        }
    }

    /// Returns true once `expanded` has reached the expansion limit.
    pub fn expansion_limit_reached(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|limit| expanded >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.siding_capacity, None);
        assert_eq!(config.max_expansions, None);
        assert_eq!(config.move_rules(), MoveRules::unbounded());
        assert!(!config.expansion_limit_reached(usize::MAX));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(Some(3), Some(100));

        assert_eq!(config.siding_capacity, Some(3));
        assert_eq!(config.max_expansions, Some(100));
        assert_eq!(config.move_rules(), MoveRules::with_siding_capacity(3));
    }

    #[test]
    fn builder_methods() {
        let config = SearchConfig::default()
            .with_siding_capacity(2)
            .with_max_expansions(10);

        assert_eq!(config, SearchConfig::new(Some(2), Some(10)));
    }

    #[test]
    fn expansion_limit() {
        let config = SearchConfig::default().with_max_expansions(5);

        assert!(!config.expansion_limit_reached(4));
        assert!(config.expansion_limit_reached(5));
        assert!(config.expansion_limit_reached(6));
    }
}
