//! Host-facing prediction snapshot.
//!
//! Overlays show one row per card rather than one per slot, next to how
//! many copies the opponent has already played. `PredictionSummary` folds
//! the ranked slots and the observation snapshot into those rows.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::predictor::Predictor;
use super::slot::PredictedCardSlot;
use crate::cards::{group_observations, CardDatabase, CardIdentity, CardObservation};

/// One card as displayed to the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRow {
    /// The card.
    pub card: CardIdentity,

    /// Probabilities of the predicted copies, by copy index.
    /// Empty for cards that are only known from observations.
    pub probabilities: SmallVec<[f64; 2]>,

    /// Copies already revealed (created copies for created rows).
    pub played: u32,

    /// Row describes copies generated by game effects.
    pub created: bool,

    /// No tracked archetype lists the card.
    pub off_meta: bool,
}

impl CardRow {
    fn observed(card: CardIdentity, played: u32, created: bool, off_meta: bool) -> Self {
        Self {
            card,
            probabilities: SmallVec::new(),
            played,
            created,
            off_meta,
        }
    }

    /// Number of predicted copies.
    #[must_use]
    pub fn predicted_copies(&self) -> usize {
        self.probabilities.len()
    }
}

/// Prediction state for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// Archetypes still possible.
    pub possible_archetypes: usize,

    /// Archetypes that matched the opponent's class at session start.
    pub total_archetypes: usize,

    /// Opponent mana the ranking used.
    pub available_mana: u32,

    /// Predicted and observed cards, sorted by cost then name.
    pub cards: Vec<CardRow>,

    /// Best slots that missed the primary list, one row per card,
    /// in ranked order.
    pub runner_ups: Vec<CardRow>,
}

impl PredictionSummary {
    /// Build a summary from a predictor and the observation snapshot it
    /// was last fed.
    pub fn build<D: CardDatabase>(
        predictor: &Predictor<D>,
        observations: &[CardObservation],
        runner_up_count: usize,
    ) -> Self {
        let recognized = predictor.recognized_cards();
        let groups = group_observations(observations);
        let drawn: FxHashMap<&str, u32> = groups
            .iter()
            .map(|g| (g.card.name.as_str(), g.drawn))
            .collect();

        let mut cards = fold_rows(predictor.predicted_cards());
        for row in &mut cards {
            row.played = drawn.get(row.card.name.as_str()).copied().unwrap_or(0);
        }

        for group in &groups {
            let name = group.card.name.as_str();
            let off_meta = recognized.is_off_meta(name);
            if group.drawn > 0 && !cards.iter().any(|r| !r.created && r.card.name == name) {
                cards.push(CardRow::observed(group.card.clone(), group.drawn, false, off_meta));
            }
            if group.created > 0 {
                cards.push(CardRow::observed(group.card.clone(), group.created, true, off_meta));
            }
        }

        cards.sort_by(|a, b| {
            a.card
                .cost
                .cmp(&b.card.cost)
                .then_with(|| a.card.name.cmp(&b.card.name))
                .then_with(|| a.created.cmp(&b.created))
        });

        Self {
            possible_archetypes: predictor.possible_archetypes().len(),
            total_archetypes: predictor.archetype_count(),
            available_mana: predictor.available_mana(),
            cards,
            runner_ups: fold_rows(predictor.next_predicted_cards(runner_up_count)),
        }
    }

    /// Total predicted slots across rows.
    #[must_use]
    pub fn predicted_slots(&self) -> usize {
        self.cards.iter().map(CardRow::predicted_copies).sum()
    }
}

/// One row per card name, in order of first appearance.
fn fold_rows(slots: &[PredictedCardSlot]) -> Vec<CardRow> {
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut rows: Vec<CardRow> = Vec::new();

    for slot in slots {
        let index = *positions.entry(slot.key.card.as_str()).or_insert_with(|| {
            rows.push(CardRow::observed(slot.card.clone(), 0, false, false));
            rows.len() - 1
        });
        rows[index].probabilities.push(slot.probability);
    }

    rows
}
