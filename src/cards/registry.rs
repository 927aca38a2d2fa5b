//! Card database seam and an in-memory registry.
//!
//! The predictor never owns card metadata. It asks a `CardDatabase` for the
//! cost and collectibility of a name. `CardRegistry` is the stock
//! implementation: a name-keyed map that hosts fill from their own data.

use rustc_hash::FxHashMap;

use super::identity::CardIdentity;
use crate::error::{PredictorError, Result};

/// Card metadata lookup by name.
pub trait CardDatabase {
    /// Look up a card by name.
    fn lookup(&self, name: &str) -> Option<CardIdentity>;

    /// Look up a card, falling back to a placeholder for unknown names.
    fn resolve(&self, name: &str) -> CardIdentity {
        self.lookup(name).unwrap_or_else(|| {
            tracing::warn!(card = name, "card missing from database");
            CardIdentity::unresolved(name)
        })
    }
}

impl<D: CardDatabase + ?Sized> CardDatabase for &D {
    fn lookup(&self, name: &str) -> Option<CardIdentity> {
        (**self).lookup(name)
    }
}

impl<D: CardDatabase + ?Sized> CardDatabase for std::sync::Arc<D> {
    fn lookup(&self, name: &str) -> Option<CardIdentity> {
        (**self).lookup(name)
    }
}

/// Registry of card identities keyed by name.
///
/// ## Example
///
/// ```
/// use deck_predictor::cards::{CardDatabase, CardIdentity, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardIdentity::new("Deadly Shot", 3));
///
/// let found = registry.lookup("Deadly Shot").unwrap();
/// assert_eq!(found.cost, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, CardIdentity>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardIdentity) {
        if let Err(err) = self.try_register(card) {
            panic!("{err}");
        }
    }

    /// Register a card, rejecting duplicate names.
    pub fn try_register(&mut self, card: CardIdentity) -> Result<()> {
        if self.cards.contains_key(&card.name) {
            return Err(PredictorError::DuplicateCard(card.name));
        }
        self.cards.insert(card.name.clone(), card);
        Ok(())
    }

    /// Build a registry from a JSON array of card identities.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cards: Vec<CardIdentity> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in cards {
            registry.try_register(card)?;
        }
        Ok(registry)
    }

    /// Get a card by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardIdentity> {
        self.cards.get(name)
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card identities.
    pub fn iter(&self) -> impl Iterator<Item = &CardIdentity> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardIdentity>
    where
        F: Fn(&CardIdentity) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl CardDatabase for CardRegistry {
    fn lookup(&self, name: &str) -> Option<CardIdentity> {
        self.cards.get(name).cloned()
    }
}

impl FromIterator<CardIdentity> for CardRegistry {
    /// Later duplicates replace earlier ones.
    fn from_iter<I: IntoIterator<Item = CardIdentity>>(iter: I) -> Self {
        let cards = iter
            .into_iter()
            .map(|card| (card.name.clone(), card))
            .collect();
        Self { cards }
    }
}
