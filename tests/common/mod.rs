//! Shared fixtures for integration tests.

#![allow(dead_code)]

use deck_predictor::archetypes::{ArchetypeDeck, ArchetypeSet};
use deck_predictor::cards::{CardIdentity, CardObservation, CardRegistry};
use deck_predictor::predict::{CardSlotKey, Predictor, PredictorConfig};

/// A small Hunter card pool with fixed costs.
pub fn hunter_cards() -> CardRegistry {
    [
        CardIdentity::new("Hunter's Mark", 1),
        CardIdentity::new("Alleycat", 1),
        CardIdentity::new("Tracking", 1),
        CardIdentity::new("Arcane Shot", 1),
        CardIdentity::new("Bear Trap", 2),
        CardIdentity::new("Deadly Shot", 3),
        CardIdentity::new("Greater Emerald Spellstone", 5).uncollectible(),
        CardIdentity::new("Ice Block", 3),
    ]
    .into_iter()
    .collect()
}

/// Collects archetypes the way a host assembles its reference data.
#[derive(Default)]
pub struct Meta {
    decks: Vec<ArchetypeDeck>,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deck with one copy of each card.
    pub fn deck(mut self, class: &str, cards: &[&str]) -> Self {
        let deck = cards
            .iter()
            .fold(ArchetypeDeck::new(class), |deck, name| deck.with_card(*name, 1));
        self.decks.push(deck);
        self
    }

    /// Add a deck with explicit copy counts.
    pub fn deck_with_counts(mut self, class: &str, cards: &[(&str, u32)]) -> Self {
        let deck = cards
            .iter()
            .fold(ArchetypeDeck::new(class), |deck, (name, copies)| {
                deck.with_card(*name, *copies)
            });
        self.decks.push(deck);
        self
    }

    pub fn set(self) -> ArchetypeSet {
        ArchetypeSet::new(self.decks)
    }

    pub fn predictor(self, class: &str) -> Predictor<CardRegistry> {
        Predictor::new(class, &self.set(), hunter_cards(), PredictorConfig::default())
    }
}

/// One drawn copy of a card from the pool.
pub fn seen(name: &str) -> CardObservation {
    let card = deck_predictor::cards::CardDatabase::resolve(&hunter_cards(), name);
    CardObservation::new(card)
}

pub fn key(name: &str, copy: u32) -> CardSlotKey {
    CardSlotKey::new(name, copy)
}

pub fn probability(predictor: &Predictor<CardRegistry>, name: &str, copy: u32) -> Option<f64> {
    predictor.predicted_card(&key(name, copy)).map(|s| s.probability)
}
