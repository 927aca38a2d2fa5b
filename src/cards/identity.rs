//! Card identity - the static metadata the predictor needs about a card.
//!
//! Identities come from an external card database and are never mutated.
//! Only three facts matter for prediction: the name (the join key between
//! observations and archetype lists), the mana cost (ranking tie-break and
//! the playability gate), and whether the card is collectible.

use serde::{Deserialize, Serialize};

/// Static card metadata.
///
/// ## Example
///
/// ```
/// use deck_predictor::cards::CardIdentity;
///
/// let shot = CardIdentity::new("Deadly Shot", 3);
/// assert!(shot.collectible);
///
/// let token = CardIdentity::new("Greater Emerald Spellstone", 5).uncollectible();
/// assert!(!token.collectible);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIdentity {
    /// Card name, unique within a card database.
    pub name: String,

    /// Mana cost.
    pub cost: u32,

    /// Whether the card can be put in a constructed deck.
    #[serde(default = "default_collectible")]
    pub collectible: bool,
}

fn default_collectible() -> bool {
    true
}

impl CardIdentity {
    /// Create a collectible card identity.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            collectible: true,
        }
    }

    /// Placeholder for a name the card database does not know.
    ///
    /// Treated as a collectible zero-cost card so it still ranks and
    /// never fails the playability gate.
    #[must_use]
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    /// Mark the card as not collectible (builder pattern).
    #[must_use]
    pub fn uncollectible(mut self) -> Self {
        self.collectible = false;
        self
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}
