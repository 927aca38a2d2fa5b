//! Index of card names attested by the reference archetype set.
//!
//! Built once from the full reference set at session start. A card outside
//! the index is off-meta: no tracked archetype plays it, so seeing it tells
//! us nothing about which archetype the opponent is on. The index is never
//! rebuilt as archetypes are filtered away.

use rustc_hash::FxHashSet;

use super::deck::ArchetypeDeck;

/// Read-only set of every card name listed by at least one archetype.
#[derive(Clone, Debug, Default)]
pub struct RecognizedCardIndex {
    names: FxHashSet<String>,
}

impl RecognizedCardIndex {
    /// Build the index from a sequence of decks.
    pub fn build<'a>(decks: impl IntoIterator<Item = &'a ArchetypeDeck>) -> Self {
        let names = decks
            .into_iter()
            .flat_map(|deck| deck.card_names().map(str::to_owned))
            .collect();
        Self { names }
    }

    /// Whether some archetype lists the card.
    #[must_use]
    pub fn recognizes(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Off-meta: not listed by any archetype.
    #[must_use]
    pub fn is_off_meta(&self, name: &str) -> bool {
        !self.recognizes(name)
    }

    /// Number of distinct card names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
