//! Errors raised while loading reference data.
//!
//! The prediction path itself never fails: unknown cards degrade to
//! "off-meta" and empty archetype sets produce empty predictions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary pack error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Archetype #{index} has an empty class name")]
    EmptyClass { index: usize },

    #[error("Archetype #{index} lists a card with an empty name")]
    EmptyCardName { index: usize },

    #[error("Archetype #{index} lists {card:?} with zero copies")]
    ZeroCopies { index: usize, card: String },

    #[error("Card {0:?} registered twice")]
    DuplicateCard(String),
}
