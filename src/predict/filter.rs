//! Possibility filter: which archetypes are still consistent with what the
//! opponent has shown.
//!
//! ## Rules
//!
//! Observations are grouped by card name. A group is uninformative, and
//! skipped, when the card is not collectible, when every copy was created
//! by a game effect, or when no archetype in the reference set lists it
//! (off-meta). For every remaining group, archetypes that do not list the
//! card at all are removed.
//!
//! Only presence is checked. An archetype listing one copy survives the
//! opponent revealing two.
//!
//! The set only ever shrinks, and re-applying the same snapshot is a no-op.

use std::sync::Arc;

use im::Vector;

use crate::archetypes::{ArchetypeDeck, RecognizedCardIndex};
use crate::cards::{group_observations, CardObservation, ObservedCardGroup};

/// Result of one filter pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Archetypes eliminated by this pass.
    pub removed: usize,

    /// Archetypes still possible afterwards.
    pub remaining: usize,
}

impl FilterOutcome {
    /// Whether the pass changed the set.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

/// Archetypes still consistent with the observations so far.
///
/// Backed by a persistent vector so snapshots are O(1).
#[derive(Clone, Debug, Default)]
pub struct PossibleArchetypeSet {
    decks: Vector<Arc<ArchetypeDeck>>,
}

impl PossibleArchetypeSet {
    /// Start from the given archetypes.
    #[must_use]
    pub fn new(decks: Vector<Arc<ArchetypeDeck>>) -> Self {
        Self { decks }
    }

    /// Number of possible archetypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if no archetype remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Iterate over the possible archetypes in reference order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeDeck> {
        self.decks.iter().map(Arc::as_ref)
    }

    /// Cheap snapshot of the current set.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Arc<ArchetypeDeck>> {
        self.decks.clone()
    }

    /// Remove archetypes inconsistent with `observations`.
    pub fn apply_observations(
        &mut self,
        observations: &[CardObservation],
        recognized: &RecognizedCardIndex,
    ) -> FilterOutcome {
        let before = self.decks.len();

        for group in group_observations(observations) {
            if !is_informative(&group, recognized) {
                continue;
            }
            let name = group.card.name.as_str();
            self.decks.retain(|deck| deck.lists(name));
        }

        let outcome = FilterOutcome {
            removed: before - self.decks.len(),
            remaining: self.decks.len(),
        };
        if outcome.changed() {
            tracing::debug!(
                removed = outcome.removed,
                remaining = outcome.remaining,
                "archetypes eliminated"
            );
        }
        outcome
    }
}

/// Whether a group of observations can discriminate between archetypes.
#[must_use]
pub fn is_informative(group: &ObservedCardGroup, recognized: &RecognizedCardIndex) -> bool {
    group.card.collectible && !group.all_created() && recognized.recognizes(&group.card.name)
}
