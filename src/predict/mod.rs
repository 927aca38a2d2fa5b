//! Archetype filtering and card prediction.
//!
//! ## Overview
//!
//! Data flows one way:
//!
//! observations -> `PossibleArchetypeSet` -> `rank` -> `Ranking`
//!
//! `Predictor` wires the two together for a match and caches the ranking.
//!
//! ## Usage
//!
//! ```rust
//! use deck_predictor::archetypes::{ArchetypeDeck, ArchetypeSet};
//! use deck_predictor::cards::{CardIdentity, CardObservation, CardRegistry};
//! use deck_predictor::predict::{Predictor, PredictorConfig};
//!
//! let cards: CardRegistry = [
//!     CardIdentity::new("Deadly Shot", 3),
//!     CardIdentity::new("Alleycat", 1),
//! ]
//! .into_iter()
//! .collect();
//! let archetypes = ArchetypeSet::new([
//!     ArchetypeDeck::new("Hunter").with_card("Deadly Shot", 1),
//!     ArchetypeDeck::new("Hunter").with_card("Alleycat", 1),
//! ]);
//!
//! let mut predictor = Predictor::new("Hunter", &archetypes, &cards, PredictorConfig::default());
//! predictor.apply_observations(&[CardObservation::new(CardIdentity::new("Deadly Shot", 3))]);
//! assert_eq!(predictor.possible_archetypes().len(), 1);
//!
//! for slot in predictor.predicted_cards() {
//!     println!("{}: {:.0}%", slot.key, slot.probability * 100.0);
//! }
//! ```

pub mod config;
pub mod filter;
pub mod predictor;
pub mod ranker;
pub mod slot;
pub mod summary;

pub use config::{Affordability, PredictorConfig};
pub use filter::{FilterOutcome, PossibleArchetypeSet};
pub use predictor::Predictor;
pub use ranker::{rank, DeferReason, Ranking, Selector, SlotDecision};
pub use slot::{CardSlotKey, PredictedCardSlot};
pub use summary::{CardRow, PredictionSummary};
