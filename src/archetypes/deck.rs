//! Archetype deck definitions.
//!
//! An archetype is one pre-catalogued deck list: a class and a copy count
//! per card name. Archetypes are hypotheses about what the opponent is
//! playing; the predictor never mutates them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One candidate deck definition.
///
/// ## Example
///
/// ```
/// use deck_predictor::archetypes::ArchetypeDeck;
///
/// let deck = ArchetypeDeck::new("Hunter")
///     .named("Secret Hunter")
///     .with_card("Alleycat", 2)
///     .with_card("Deadly Shot", 1);
///
/// assert_eq!(deck.copies_of("Alleycat"), 2);
/// assert_eq!(deck.copies_of("Tracking"), 0);
/// assert_eq!(deck.total_cards(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeDeck {
    /// Display name (diagnostics only).
    #[serde(default)]
    pub name: String,

    /// Class the deck is built for.
    pub class: String,

    /// Copy count per card name. Unlisted cards have zero copies.
    #[serde(default)]
    pub cards: FxHashMap<String, u32>,
}

impl ArchetypeDeck {
    /// Create an empty deck for a class.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            class: class.into(),
            cards: FxHashMap::default(),
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the copy count of a card (builder pattern).
    ///
    /// A count of zero removes the card.
    #[must_use]
    pub fn with_card(mut self, name: impl Into<String>, copies: u32) -> Self {
        self.set_copies(name, copies);
        self
    }

    /// Set the copy count of a card. A count of zero removes the card.
    pub fn set_copies(&mut self, name: impl Into<String>, copies: u32) {
        let name = name.into();
        if copies == 0 {
            self.cards.remove(&name);
        } else {
            self.cards.insert(name, copies);
        }
    }

    /// Copies of a card listed by this deck (0 if absent).
    #[must_use]
    pub fn copies_of(&self, name: &str) -> u32 {
        self.cards.get(name).copied().unwrap_or(0)
    }

    /// Whether the deck lists the card at all.
    #[must_use]
    pub fn lists(&self, name: &str) -> bool {
        self.copies_of(name) > 0
    }

    /// Total number of cards across all entries.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.cards.values().sum()
    }

    /// Iterate over listed card names.
    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    /// Iterate over (name, copies) entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.cards.iter().map(|(name, copies)| (name.as_str(), *copies))
    }
}
