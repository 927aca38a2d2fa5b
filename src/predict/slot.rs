//! Card slots - the unit of prediction.
//!
//! A slot is "the k-th copy of card X". Predicting slot `(X, 2)` means
//! predicting the opponent holds at least two copies of X.

use serde::{Deserialize, Serialize};

use crate::cards::CardIdentity;

/// Identifies the k-th copy (1-based) of a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardSlotKey {
    /// Card name.
    pub card: String,

    /// Copy index, starting at 1.
    pub copy: u32,
}

impl CardSlotKey {
    /// Create a slot key. A `copy` of 0 names no slot and is never found.
    #[must_use]
    pub fn new(card: impl Into<String>, copy: u32) -> Self {
        Self {
            card: card.into(),
            copy,
        }
    }
}

impl std::fmt::Display for CardSlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.card, self.copy)
    }
}

/// A ranked slot with its probability.
///
/// Recomputed in full on every ranking; only the key is stable across
/// recomputations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictedCardSlot {
    /// Which copy of which card.
    pub key: CardSlotKey,

    /// Card metadata from the card database.
    pub card: CardIdentity,

    /// Share of possible archetypes listing at least `key.copy` copies.
    pub probability: f64,
}

impl PredictedCardSlot {
    /// Probability exactly 1: every possible archetype lists this copy.
    #[must_use]
    pub fn is_certain(&self) -> bool {
        self.probability >= 1.0
    }
}
