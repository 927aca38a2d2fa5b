//! Prediction ranking over the possible archetypes.
//!
//! ## Steps
//!
//! 1. Enumerate slot keys `(card, 1..=copies)` across possible archetypes.
//! 2. Probability of `(card, k)` = archetypes listing at least `k` copies,
//!    divided by the number of possible archetypes. Archetypes are weighted
//!    uniformly.
//! 3. Sort by probability descending, then cost ascending, then name, then
//!    copy index.
//! 4. Walk the sorted slots through a `Selector` that decides which slots
//!    enter the primary list.
//! 5. Everything else is the overflow list, same order.
//!
//! Ranking is a pure function of its inputs and is recomputed in full
//! whenever the possible set, the mana, or the config changes.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use super::config::PredictorConfig;
use super::filter::PossibleArchetypeSet;
use super::slot::{CardSlotKey, PredictedCardSlot};
use crate::cards::CardDatabase;

/// Why a slot was kept out of the primary list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferReason {
    /// The primary list already holds `deck_size` slots.
    Capacity,
    /// Below the playability threshold and the configured floor.
    BelowFloor,
    /// Below the playability threshold and not affordable yet.
    Unaffordable,
}

/// Outcome of the selection walk for one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotDecision {
    /// Probability 1; included regardless of capacity.
    Certain,
    /// Included under the ordinary capacity rule.
    Included,
    /// Sent to the overflow list.
    Deferred(DeferReason),
}

impl SlotDecision {
    /// Whether the slot enters the primary list.
    #[must_use]
    pub fn is_included(self) -> bool {
        !matches!(self, SlotDecision::Deferred(_))
    }
}

/// Primary-list selection state machine.
///
/// Feed slots in ranked order. The running count includes certain slots,
/// so certainty consumes capacity but is never refused by it.
#[derive(Clone, Debug)]
pub struct Selector<'a> {
    config: &'a PredictorConfig,
    mana: u32,
    included: usize,
}

impl<'a> Selector<'a> {
    /// Start a walk for an opponent with `mana` available.
    #[must_use]
    pub fn new(config: &'a PredictorConfig, mana: u32) -> Self {
        Self {
            config,
            mana,
            included: 0,
        }
    }

    /// Slots included so far.
    #[must_use]
    pub fn included(&self) -> usize {
        self.included
    }

    /// Decide the next slot.
    pub fn decide(&mut self, slot: &PredictedCardSlot) -> SlotDecision {
        let decision = if slot.is_certain() {
            SlotDecision::Certain
        } else if self.included >= self.config.deck_size {
            SlotDecision::Deferred(DeferReason::Capacity)
        } else if slot.probability >= self.config.include_if_playable_threshold {
            SlotDecision::Included
        } else if slot.probability < self.config.min_probability {
            SlotDecision::Deferred(DeferReason::BelowFloor)
        } else if !self.config.affordability.allows(slot.card.cost, self.mana) {
            SlotDecision::Deferred(DeferReason::Unaffordable)
        } else {
            SlotDecision::Included
        };

        if decision.is_included() {
            self.included += 1;
        }
        decision
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Location {
    Predicted(usize),
    Overflow(usize),
}

/// A complete ranking: primary list, overflow list, and key lookup.
#[derive(Clone, Debug, Default)]
pub struct Ranking {
    predicted: Vec<PredictedCardSlot>,
    overflow: Vec<PredictedCardSlot>,
    locations: FxHashMap<CardSlotKey, Location>,
}

impl Ranking {
    /// The primary ranked list.
    #[must_use]
    pub fn predicted(&self) -> &[PredictedCardSlot] {
        &self.predicted
    }

    /// All slots left out of the primary list, in ranked order.
    #[must_use]
    pub fn overflow(&self) -> &[PredictedCardSlot] {
        &self.overflow
    }

    /// The top `n` slots left out of the primary list.
    #[must_use]
    pub fn next(&self, n: usize) -> &[PredictedCardSlot] {
        &self.overflow[..n.min(self.overflow.len())]
    }

    /// Look up any slot attested by a possible archetype.
    #[must_use]
    pub fn get(&self, key: &CardSlotKey) -> Option<&PredictedCardSlot> {
        match self.locations.get(key)? {
            Location::Predicted(i) => self.predicted.get(*i),
            Location::Overflow(i) => self.overflow.get(*i),
        }
    }

    /// Whether a slot made the primary list.
    #[must_use]
    pub fn is_predicted(&self, key: &CardSlotKey) -> bool {
        matches!(self.locations.get(key), Some(Location::Predicted(_)))
    }

    /// Total number of enumerated slots.
    #[must_use]
    pub fn len_all(&self) -> usize {
        self.predicted.len() + self.overflow.len()
    }

    /// Check if no slot was enumerated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len_all() == 0
    }
}

/// Enumerate every slot with its probability, in ranked order.
pub fn scored_slots<D: CardDatabase + ?Sized>(
    possible: &PossibleArchetypeSet,
    database: &D,
) -> Vec<PredictedCardSlot> {
    let total = possible.len();
    if total == 0 {
        return Vec::new();
    }

    // Copy counts per card name, one entry per archetype listing it.
    let mut copies_by_card: FxHashMap<&str, Vec<u32>> = FxHashMap::default();
    for deck in possible.iter() {
        for (name, copies) in deck.entries() {
            copies_by_card.entry(name).or_default().push(copies);
        }
    }

    let mut slots = Vec::new();
    for (name, copies) in copies_by_card {
        let card = database.resolve(name);
        let max = copies.iter().copied().max().unwrap_or(0);
        for copy in 1..=max {
            let attesting = copies.iter().filter(|&&c| c >= copy).count();
            slots.push(PredictedCardSlot {
                key: CardSlotKey::new(name, copy),
                card: card.clone(),
                probability: attesting as f64 / total as f64,
            });
        }
    }

    slots.sort_by(compare_slots);
    slots
}

/// Ranked order: probability desc, cost asc, name asc, copy asc.
#[must_use]
pub fn compare_slots(a: &PredictedCardSlot, b: &PredictedCardSlot) -> Ordering {
    b.probability
        .total_cmp(&a.probability)
        .then_with(|| a.card.cost.cmp(&b.card.cost))
        .then_with(|| a.key.card.cmp(&b.key.card))
        .then_with(|| a.key.copy.cmp(&b.key.copy))
}

/// Rank the possible archetypes' slots for an opponent with `mana`.
pub fn rank<D: CardDatabase + ?Sized>(
    possible: &PossibleArchetypeSet,
    database: &D,
    mana: u32,
    config: &PredictorConfig,
) -> Ranking {
    let mut ranking = Ranking::default();
    let mut selector = Selector::new(config, mana);

    for slot in scored_slots(possible, database) {
        let location = if selector.decide(&slot).is_included() {
            ranking.predicted.push(slot.clone());
            Location::Predicted(ranking.predicted.len() - 1)
        } else {
            ranking.overflow.push(slot.clone());
            Location::Overflow(ranking.overflow.len() - 1)
        };
        ranking.locations.insert(slot.key, location);
    }

    tracing::debug!(
        archetypes = possible.len(),
        mana,
        predicted = ranking.predicted.len(),
        overflow = ranking.overflow.len(),
        "ranking recomputed"
    );
    ranking
}
