//! Prediction configuration parameters.

use serde::{Deserialize, Serialize};

/// When a card counts as affordable for the playability gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affordability {
    /// Cost fits in the opponent's currently available mana.
    CurrentMana,
    /// Cost fits in next turn's mana (current + 1).
    #[default]
    NextTurn,
}

impl Affordability {
    /// Whether a card of `cost` passes the gate at `mana`.
    #[must_use]
    pub fn allows(self, cost: u32, mana: u32) -> bool {
        match self {
            Affordability::CurrentMana => cost <= mana,
            Affordability::NextTurn => cost <= mana.saturating_add(1),
        }
    }
}

/// Prediction configuration parameters.
///
/// Changes take effect on the next recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Primary list capacity (default: 30, a standard deck).
    /// Certain slots are included past this.
    pub deck_size: usize,

    /// Slots below this probability are only predicted while affordable
    /// (default: 0.75).
    pub include_if_playable_threshold: f64,

    /// Non-certain slots below this probability are never predicted
    /// (default: 0.2).
    pub min_probability: f64,

    /// Affordability rule for the playability gate (default: next turn).
    pub affordability: Affordability,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            deck_size: 30,
            include_if_playable_threshold: 0.75,
            min_probability: 0.2,
            affordability: Affordability::NextTurn,
        }
    }
}

impl PredictorConfig {
    /// Create a new config with custom deck size.
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Create a new config with custom playability threshold.
    pub fn with_include_if_playable_threshold(mut self, threshold: f64) -> Self {
        self.include_if_playable_threshold = threshold;
        self
    }

    /// Create a new config with custom probability floor.
    pub fn with_min_probability(mut self, floor: f64) -> Self {
        self.min_probability = floor;
        self
    }

    /// Create a new config with custom affordability rule.
    pub fn with_affordability(mut self, affordability: Affordability) -> Self {
        self.affordability = affordability;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PredictorConfig::default();
        assert_eq!(config.deck_size, 30);
        assert_eq!(config.include_if_playable_threshold, 0.75);
        assert_eq!(config.affordability, Affordability::NextTurn);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PredictorConfig::default()
            .with_deck_size(40)
            .with_include_if_playable_threshold(0.5)
            .with_min_probability(0.0)
            .with_affordability(Affordability::CurrentMana);

        assert_eq!(config.deck_size, 40);
        assert_eq!(config.include_if_playable_threshold, 0.5);
        assert_eq!(config.min_probability, 0.0);
        assert_eq!(config.affordability, Affordability::CurrentMana);
    }

    #[test]
    fn test_affordability() {
        assert!(Affordability::CurrentMana.allows(3, 3));
        assert!(!Affordability::CurrentMana.allows(3, 2));
        assert!(Affordability::NextTurn.allows(3, 2));
        assert!(!Affordability::NextTurn.allows(3, 1));
        assert!(Affordability::NextTurn.allows(0, u32::MAX));
    }

    #[test]
    fn test_serialization() {
        let config = PredictorConfig::default().with_deck_size(40);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PredictorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
