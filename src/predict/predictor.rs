//! The per-match prediction session.
//!
//! `Predictor` owns the one piece of mutable state (the possible archetype
//! set) together with the opponent's last known mana and the current
//! ranking. Every update recomputes the ranking from scratch; queries read
//! the cached result.
//!
//! The host serializes calls: one observation or mana update at a time.

use std::sync::Arc;

use im::Vector;

use super::config::PredictorConfig;
use super::filter::{FilterOutcome, PossibleArchetypeSet};
use super::ranker::{rank, Ranking};
use super::slot::{CardSlotKey, PredictedCardSlot};
use super::summary::PredictionSummary;
use crate::archetypes::{ArchetypeDeck, ArchetypeSet, RecognizedCardIndex};
use crate::cards::{CardDatabase, CardObservation};

/// Archetype inference and card prediction for one opponent.
///
/// ## Example
///
/// ```
/// use deck_predictor::archetypes::{ArchetypeDeck, ArchetypeSet};
/// use deck_predictor::cards::{CardIdentity, CardObservation, CardRegistry};
/// use deck_predictor::predict::{CardSlotKey, Predictor, PredictorConfig};
///
/// let cards: CardRegistry = [
///     CardIdentity::new("Hunter's Mark", 1),
///     CardIdentity::new("Alleycat", 1),
///     CardIdentity::new("Tracking", 1),
/// ]
/// .into_iter()
/// .collect();
///
/// let archetypes = ArchetypeSet::new([
///     ArchetypeDeck::new("Hunter").with_card("Hunter's Mark", 1).with_card("Alleycat", 1),
///     ArchetypeDeck::new("Hunter").with_card("Alleycat", 1).with_card("Tracking", 1),
/// ]);
///
/// let mut predictor = Predictor::new("Hunter", &archetypes, cards, PredictorConfig::default());
/// assert_eq!(predictor.predicted_cards().len(), 3);
///
/// let tracking = CardSlotKey::new("Tracking", 1);
/// assert_eq!(predictor.predicted_card(&tracking).map(|s| s.probability), Some(0.5));
///
/// predictor.apply_observations(&[CardObservation::new(CardIdentity::new("Tracking", 1))]);
/// assert_eq!(predictor.possible_archetypes().len(), 1);
/// assert_eq!(predictor.predicted_card(&tracking).map(|s| s.probability), Some(1.0));
/// ```
#[derive(Clone, Debug)]
pub struct Predictor<D: CardDatabase> {
    database: D,
    config: PredictorConfig,
    recognized: RecognizedCardIndex,
    possible: PossibleArchetypeSet,
    archetype_count: usize,
    mana: u32,
    ranking: Ranking,
}

impl<D: CardDatabase> Predictor<D> {
    /// Start a session against an opponent of `class`.
    ///
    /// The recognized-card index is built from the whole reference set. A
    /// class with no archetypes yields an empty session, not an error.
    pub fn new(
        class: &str,
        archetypes: &ArchetypeSet,
        database: D,
        config: PredictorConfig,
    ) -> Self {
        let possible = PossibleArchetypeSet::new(archetypes.for_class(class));
        let archetype_count = possible.len();
        if archetype_count == 0 {
            tracing::debug!(class, "no archetypes for opponent class");
        }

        let mut predictor = Self {
            database,
            config,
            recognized: archetypes.recognized_cards(),
            possible,
            archetype_count,
            mana: 0,
            ranking: Ranking::default(),
        };
        predictor.recompute();
        predictor
    }

    fn recompute(&mut self) {
        self.ranking = rank(&self.possible, &self.database, self.mana, &self.config);
    }

    /// Filter the possible archetypes against an observation snapshot.
    ///
    /// Safe to call repeatedly with overlapping snapshots.
    pub fn apply_observations(&mut self, observations: &[CardObservation]) -> FilterOutcome {
        let outcome = self.possible.apply_observations(observations, &self.recognized);
        self.recompute();
        outcome
    }

    /// Record the opponent's available mana.
    pub fn apply_mana_change(&mut self, mana: u32) {
        self.mana = mana;
        self.recompute();
    }

    /// The opponent's last known available mana.
    #[must_use]
    pub fn available_mana(&self) -> u32 {
        self.mana
    }

    /// Archetypes still possible, in reference order.
    #[must_use]
    pub fn possible_archetypes(&self) -> Vector<Arc<ArchetypeDeck>> {
        self.possible.snapshot()
    }

    /// Archetypes matching the opponent's class at session start.
    #[must_use]
    pub fn archetype_count(&self) -> usize {
        self.archetype_count
    }

    /// The primary ranked prediction.
    #[must_use]
    pub fn predicted_cards(&self) -> &[PredictedCardSlot] {
        self.ranking.predicted()
    }

    /// The top `n` slots that missed the primary prediction.
    #[must_use]
    pub fn next_predicted_cards(&self, n: usize) -> &[PredictedCardSlot] {
        self.ranking.next(n)
    }

    /// Probability record for a slot, if any possible archetype attests it.
    #[must_use]
    pub fn predicted_card(&self, key: &CardSlotKey) -> Option<&PredictedCardSlot> {
        self.ranking.get(key)
    }

    /// The current full ranking.
    #[must_use]
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// The recognized-card index built at session start.
    #[must_use]
    pub fn recognized_cards(&self) -> &RecognizedCardIndex {
        &self.recognized
    }

    /// Card database used for cost lookups.
    #[must_use]
    pub fn database(&self) -> &D {
        &self.database
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: PredictorConfig) {
        self.config = config;
        self.recompute();
    }

    /// Change the playability threshold.
    pub fn set_include_if_playable_threshold(&mut self, threshold: f64) {
        self.config.include_if_playable_threshold = threshold;
        self.recompute();
    }

    /// Change the primary list capacity.
    pub fn set_deck_size(&mut self, deck_size: usize) {
        self.config.deck_size = deck_size;
        self.recompute();
    }

    /// Host-facing snapshot combining the prediction with what has been
    /// played.
    #[must_use]
    pub fn summary(
        &self,
        observations: &[CardObservation],
        runner_up_count: usize,
    ) -> PredictionSummary {
        PredictionSummary::build(self, observations, runner_up_count)
    }
}
