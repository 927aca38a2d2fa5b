//! # deck-predictor
//!
//! Real-time inference of which catalogued deck archetypes an opponent may
//! be playing, and a ranked prediction of the cards they still hold.
//!
//! ## Design Principles
//!
//! 1. **Monotonic Filtering**: The set of possible archetypes only shrinks
//!    as cards are revealed. Re-applying a snapshot changes nothing.
//!
//! 2. **Pure Recomputation**: Rankings are a function of the possible set,
//!    the opponent's mana and the config. Every change recomputes in full.
//!
//! 3. **Uniform Prior**: Every still-possible archetype is equally likely.
//!
//! ## Architecture
//!
//! - **Card Slots**: The unit of prediction is "the k-th copy of card X",
//!   with probability equal to the share of possible archetypes listing at
//!   least k copies.
//!
//! - **Selection State Machine**: Certainty overrides capacity; the
//!   playability gate holds back unlikely cards the opponent cannot cast
//!   yet.
//!
//! ## Modules
//!
//! - `cards`: Card identities, the card database seam, observations
//! - `archetypes`: Reference archetype decks and the recognized-card index
//! - `predict`: Possibility filter, ranking, session, host summary
//! - `error`: Errors raised while loading reference data

pub mod archetypes;
pub mod cards;
pub mod error;
pub mod predict;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::archetypes::{ArchetypeDeck, ArchetypeSet, RecognizedCardIndex};

pub use crate::cards::{
    CardDatabase, CardIdentity, CardObservation, CardRegistry, ObservedCardGroup,
};

pub use crate::error::{PredictorError, Result};

pub use crate::predict::{
    Affordability, CardRow, CardSlotKey, FilterOutcome, PossibleArchetypeSet,
    PredictedCardSlot, PredictionSummary, Predictor, PredictorConfig, Ranking,
};
