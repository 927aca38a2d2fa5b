//! The reference archetype set for a session.
//!
//! Loaded once (from JSON or a compact binary pack) and read-only
//! afterwards. Decks are shared behind `Arc` so per-session possible sets
//! can hold them without copying card lists.

use std::io::Read;
use std::sync::Arc;

use im::Vector;

use super::deck::ArchetypeDeck;
use super::index::RecognizedCardIndex;
use crate::error::{PredictorError, Result};

/// Immutable ordered sequence of archetype decks.
///
/// ## Example
///
/// ```
/// use deck_predictor::archetypes::ArchetypeSet;
///
/// let set = ArchetypeSet::from_json_str(r#"[
///     {"name": "Secret Hunter", "class": "Hunter", "cards": {"Alleycat": 2}},
///     {"name": "Freeze Mage", "class": "Mage", "cards": {"Ice Block": 2}}
/// ]"#).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.for_class("Hunter").len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArchetypeSet {
    decks: Vec<Arc<ArchetypeDeck>>,
}

impl ArchetypeSet {
    /// Create a set from decks, in the given order.
    ///
    /// No validation is performed; use the loaders for untrusted data.
    pub fn new(decks: impl IntoIterator<Item = ArchetypeDeck>) -> Self {
        Self {
            decks: decks.into_iter().map(Arc::new).collect(),
        }
    }

    /// Load and validate a JSON array of decks.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let decks: Vec<ArchetypeDeck> = serde_json::from_str(json)?;
        Self::validated(decks)
    }

    /// Load and validate a JSON array of decks from a reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let decks: Vec<ArchetypeDeck> = serde_json::from_reader(reader)?;
        Self::validated(decks)
    }

    /// Decode a binary pack produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decks: Vec<ArchetypeDeck> = bincode::deserialize(bytes)?;
        Self::validated(decks)
    }

    /// Encode the set as a compact binary pack.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let decks: Vec<&ArchetypeDeck> = self.decks.iter().map(Arc::as_ref).collect();
        Ok(bincode::serialize(&decks)?)
    }

    fn validated(decks: Vec<ArchetypeDeck>) -> Result<Self> {
        for (index, deck) in decks.iter().enumerate() {
            if deck.class.trim().is_empty() {
                return Err(PredictorError::EmptyClass { index });
            }
            for (card, copies) in deck.entries() {
                if card.trim().is_empty() {
                    return Err(PredictorError::EmptyCardName { index });
                }
                if copies == 0 {
                    return Err(PredictorError::ZeroCopies {
                        index,
                        card: card.to_owned(),
                    });
                }
            }
        }
        tracing::debug!(decks = decks.len(), "loaded archetype set");
        Ok(Self::new(decks))
    }

    /// Number of decks across all classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Get a deck by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArchetypeDeck> {
        self.decks.get(index).map(Arc::as_ref)
    }

    /// Iterate over all decks in order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeDeck> {
        self.decks.iter().map(Arc::as_ref)
    }

    /// Decks for a class, in reference order.
    #[must_use]
    pub fn for_class(&self, class: &str) -> Vector<Arc<ArchetypeDeck>> {
        self.decks
            .iter()
            .filter(|deck| deck.class == class)
            .cloned()
            .collect()
    }

    /// Build the index of every card name listed by any deck.
    #[must_use]
    pub fn recognized_cards(&self) -> RecognizedCardIndex {
        RecognizedCardIndex::build(self.iter())
    }
}

impl FromIterator<ArchetypeDeck> for ArchetypeSet {
    fn from_iter<I: IntoIterator<Item = ArchetypeDeck>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArchetypeSet {
        ArchetypeSet::new([
            ArchetypeDeck::new("Hunter").named("A").with_card("Alleycat", 1),
            ArchetypeDeck::new("Mage").named("B").with_card("Ice Block", 2),
            ArchetypeDeck::new("Hunter").named("C").with_card("Tracking", 2),
        ])
    }

    #[test]
    fn test_for_class_keeps_order() {
        let hunters = sample().for_class("Hunter");
        let names: Vec<_> = hunters.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_for_unknown_class_is_empty() {
        assert!(sample().for_class("Priest").is_empty());
    }

    #[test]
    fn test_binary_pack_round_trip() {
        let set = sample();
        let bytes = set.to_bytes().unwrap();
        let decoded = ArchetypeSet::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded.get(1), set.get(1));
    }

    #[test]
    fn test_rejects_zero_copies() {
        let err = ArchetypeSet::from_json_str(
            r#"[{"class": "Hunter", "cards": {"Alleycat": 1}},
                {"class": "Hunter", "cards": {"Tracking": 0}}]"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PredictorError::ZeroCopies { index: 1, ref card } if card == "Tracking"
        ));
    }

    #[test]
    fn test_rejects_empty_class() {
        let err = ArchetypeSet::from_json_str(r#"[{"class": " ", "cards": {}}]"#).unwrap_err();
        assert!(matches!(err, PredictorError::EmptyClass { index: 0 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ArchetypeSet::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PredictorError::Json(_)));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"[{"class": "Hunter", "cards": {"Alleycat": 2}}]"#;
        let set = ArchetypeSet::from_json_reader(&json[..]).unwrap();
        assert_eq!(set.get(0).map(|d| d.copies_of("Alleycat")), Some(2));
    }

    #[test]
    fn test_recognized_cards_span_all_classes() {
        let index = sample().recognized_cards();
        assert!(index.recognizes("Ice Block"));
        assert!(index.recognizes("Tracking"));
    }
}
