//! Opponent card observations.
//!
//! An observation is a card the tracker has actually seen the opponent
//! reveal. The host appends observations over the course of a match and
//! hands the predictor a snapshot slice; the predictor only reads it,
//! grouped by card name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;

/// A card the opponent has revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardObservation {
    /// The revealed card.
    pub card: CardIdentity,

    /// Copies seen together (at least 1).
    pub count: u32,

    /// True if the copy was generated by a game effect rather than drawn
    /// from the deck.
    pub created: bool,
}

impl CardObservation {
    /// Observe a single drawn copy of a card.
    #[must_use]
    pub fn new(card: CardIdentity) -> Self {
        Self {
            card,
            count: 1,
            created: false,
        }
    }

    /// Set the number of copies seen (builder pattern).
    ///
    /// Zero is clamped to one.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    /// Mark the copies as created by a game effect (builder pattern).
    #[must_use]
    pub fn created(mut self) -> Self {
        self.created = true;
        self
    }
}

/// All observations of one card name, merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservedCardGroup {
    /// Identity from the first observation of this name.
    pub card: CardIdentity,

    /// Copies drawn from the deck.
    pub drawn: u32,

    /// Copies generated by game effects.
    pub created: u32,
}

impl ObservedCardGroup {
    /// Total copies seen.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.drawn.saturating_add(self.created)
    }

    /// Every observed copy was created.
    #[must_use]
    pub fn all_created(&self) -> bool {
        self.drawn == 0
    }
}

/// Group observations by card name, preserving first-appearance order.
///
/// ```
/// use deck_predictor::cards::{group_observations, CardIdentity, CardObservation};
///
/// let shot = CardIdentity::new("Deadly Shot", 3);
/// let groups = group_observations(&[
///     CardObservation::new(shot.clone()).created(),
///     CardObservation::new(shot).with_count(2),
/// ]);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].total(), 3);
/// assert!(!groups[0].all_created());
/// ```
#[must_use]
pub fn group_observations(observations: &[CardObservation]) -> Vec<ObservedCardGroup> {
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<ObservedCardGroup> = Vec::new();

    for observation in observations {
        let index = *positions
            .entry(observation.card.name.as_str())
            .or_insert_with(|| {
                groups.push(ObservedCardGroup {
                    card: observation.card.clone(),
                    drawn: 0,
                    created: 0,
                });
                groups.len() - 1
            });

        let count = observation.count.max(1);
        let group = &mut groups[index];
        if observation.created {
            group.created = group.created.saturating_add(count);
        } else {
            group.drawn = group.drawn.saturating_add(count);
        }
    }

    groups
}
