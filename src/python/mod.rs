//! Python bindings for the deck predictor.
//!
//! # Quick Start
//!
//! ```python
//! import deck_predictor as dp
//!
//! cards = dp.CardRegistry.from_json(open("cards.json").read())
//! archetypes = dp.ArchetypeSet.from_json(open("archetypes.json").read())
//!
//! predictor = dp.Predictor("Hunter", archetypes, cards)
//! predictor.apply_observations([dp.CardObservation("Deadly Shot", 3)])
//! predictor.apply_mana_change(4)
//!
//! for slot in predictor.predicted_cards():
//!     print(slot.name, slot.copy, slot.probability)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_predictor;

pub use py_cards::*;
pub use py_predictor::*;

/// deck_predictor: opponent archetype inference and card prediction.
#[pymodule]
fn deck_predictor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardRegistry>()?;
    m.add_class::<PyArchetypeSet>()?;
    m.add_class::<PyCardObservation>()?;
    m.add_class::<PyPredictedCardSlot>()?;
    m.add_class::<PyPredictor>()?;

    Ok(())
}
