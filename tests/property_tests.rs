//! Property tests over randomly generated archetype sets.

mod common;

use deck_predictor::archetypes::{ArchetypeDeck, ArchetypeSet};
use deck_predictor::cards::{CardDatabase, CardObservation};
use deck_predictor::predict::{Predictor, PredictorConfig};
use proptest::prelude::*;

const POOL: [&str; 8] = [
    "Hunter's Mark",
    "Alleycat",
    "Tracking",
    "Arcane Shot",
    "Bear Trap",
    "Deadly Shot",
    "Greater Emerald Spellstone",
    "Ice Block",
];

fn deck_strategy() -> impl Strategy<Value = ArchetypeDeck> {
    prop::collection::vec((0..POOL.len(), 1u32..=3), 0..6).prop_map(|cards| {
        cards
            .into_iter()
            .fold(ArchetypeDeck::new("Hunter"), |deck, (card, copies)| {
                deck.with_card(POOL[card], copies)
            })
    })
}

fn observation_strategy() -> impl Strategy<Value = CardObservation> {
    (0..POOL.len(), 1u32..=2, any::<bool>()).prop_map(|(card, count, created)| {
        let card = common::hunter_cards().resolve(POOL[card]);
        let observation = CardObservation::new(card).with_count(count);
        if created {
            observation.created()
        } else {
            observation
        }
    })
}

fn session(decks: Vec<ArchetypeDeck>, mana: u32) -> Predictor<deck_predictor::CardRegistry> {
    let mut predictor = Predictor::new(
        "Hunter",
        &ArchetypeSet::new(decks),
        common::hunter_cards(),
        PredictorConfig::default(),
    );
    predictor.apply_mana_change(mana);
    predictor
}

proptest! {
    #[test]
    fn prop_possible_set_never_grows(
        decks in prop::collection::vec(deck_strategy(), 0..8),
        observations in prop::collection::vec(observation_strategy(), 0..10),
    ) {
        let mut predictor = session(decks, 0);
        let mut previous = predictor.possible_archetypes().len();

        for end in 0..=observations.len() {
            predictor.apply_observations(&observations[..end]);
            let now = predictor.possible_archetypes().len();
            prop_assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn prop_apply_is_idempotent(
        decks in prop::collection::vec(deck_strategy(), 0..8),
        observations in prop::collection::vec(observation_strategy(), 0..10),
    ) {
        let mut once = session(decks.clone(), 0);
        once.apply_observations(&observations);

        let mut twice = session(decks, 0);
        twice.apply_observations(&observations);
        let second = twice.apply_observations(&observations);

        prop_assert_eq!(second.removed, 0);
        prop_assert_eq!(once.possible_archetypes(), twice.possible_archetypes());
        prop_assert_eq!(once.predicted_cards(), twice.predicted_cards());
    }

    #[test]
    fn prop_probabilities_in_unit_interval(
        decks in prop::collection::vec(deck_strategy(), 1..8),
        mana in 0u32..10,
    ) {
        let predictor = session(decks, mana);
        let ranking = predictor.ranking();

        for slot in ranking.predicted().iter().chain(ranking.overflow()) {
            prop_assert!(slot.probability > 0.0 && slot.probability <= 1.0);
        }
    }

    #[test]
    fn prop_first_copy_certain_iff_listed_everywhere(
        decks in prop::collection::vec(deck_strategy(), 1..8),
    ) {
        let predictor = session(decks, 0);
        let possible = predictor.possible_archetypes();

        for name in POOL {
            let everywhere = possible.iter().all(|d| d.lists(name));
            let certain = predictor
                .predicted_card(&common::key(name, 1))
                .map(|s| s.probability == 1.0)
                .unwrap_or(false);
            prop_assert_eq!(everywhere, certain, "card {}", name);
        }
    }

    #[test]
    fn prop_predicted_cards_ordered(
        decks in prop::collection::vec(deck_strategy(), 1..8),
        mana in 0u32..10,
    ) {
        let predictor = session(decks, mana);
        let predicted = predictor.predicted_cards();

        for pair in predicted.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
            if pair[0].probability == pair[1].probability {
                prop_assert!(pair[0].card.cost <= pair[1].card.cost);
            }
        }

        let next = predictor.next_predicted_cards(usize::MAX);
        for pair in next.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn prop_single_archetype_predicted_in_full(deck in deck_strategy()) {
        let total = deck.total_cards() as usize;
        let predictor = session(vec![deck], 0);

        prop_assert_eq!(predictor.predicted_cards().len(), total);
        prop_assert!(predictor.next_predicted_cards(usize::MAX).is_empty());
    }

    #[test]
    fn prop_primary_and_overflow_partition_slots(
        decks in prop::collection::vec(deck_strategy(), 1..8),
        mana in 0u32..10,
    ) {
        let predictor = session(decks, mana);
        let ranking = predictor.ranking();

        for slot in ranking.predicted() {
            prop_assert!(ranking.is_predicted(&slot.key));
        }
        for slot in ranking.overflow() {
            prop_assert!(!ranking.is_predicted(&slot.key));
            prop_assert_eq!(ranking.get(&slot.key), Some(slot));
        }
    }
}
