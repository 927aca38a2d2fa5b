//! Predictor bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardObservation, CardRegistry};
use crate::predict::{CardSlotKey, PredictedCardSlot, Predictor, PredictorConfig};

use super::py_cards::{PyArchetypeSet, PyCardObservation, PyCardRegistry};

/// Python wrapper for PredictedCardSlot.
#[pyclass(name = "PredictedCardSlot")]
#[derive(Clone)]
pub struct PyPredictedCardSlot(pub PredictedCardSlot);

#[pymethods]
impl PyPredictedCardSlot {
    #[getter]
    fn name(&self) -> &str {
        &self.0.key.card
    }

    #[getter]
    fn copy(&self) -> u32 {
        self.0.key.copy
    }

    #[getter]
    fn cost(&self) -> u32 {
        self.0.card.cost
    }

    #[getter]
    fn probability(&self) -> f64 {
        self.0.probability
    }

    fn __repr__(&self) -> String {
        format!("PredictedCardSlot({}, p={:.3})", self.0.key, self.0.probability)
    }
}

fn wrap(slots: &[PredictedCardSlot]) -> Vec<PyPredictedCardSlot> {
    slots.iter().cloned().map(PyPredictedCardSlot).collect()
}

/// Python wrapper for Predictor.
#[pyclass(name = "Predictor")]
pub struct PyPredictor {
    inner: Predictor<CardRegistry>,
    observations: Vec<CardObservation>,
}

#[pymethods]
impl PyPredictor {
    /// Start a session against an opponent of `opponent_class`.
    #[new]
    #[pyo3(signature = (
        opponent_class,
        archetypes,
        cards,
        deck_size = 30,
        include_if_playable_threshold = 0.75
    ))]
    fn new(
        opponent_class: &str,
        archetypes: &PyArchetypeSet,
        cards: &PyCardRegistry,
        deck_size: usize,
        include_if_playable_threshold: f64,
    ) -> Self {
        let config = PredictorConfig::default()
            .with_deck_size(deck_size)
            .with_include_if_playable_threshold(include_if_playable_threshold);
        Self {
            inner: Predictor::new(opponent_class, &archetypes.0, cards.0.clone(), config),
            observations: Vec::new(),
        }
    }

    /// Feed the full observation snapshot. Returns archetypes eliminated.
    fn apply_observations(&mut self, observations: Vec<PyCardObservation>) -> usize {
        self.observations = observations.into_iter().map(|o| o.0).collect();
        self.inner.apply_observations(&self.observations).removed
    }

    fn apply_mana_change(&mut self, mana: u32) {
        self.inner.apply_mana_change(mana);
    }

    fn predicted_cards(&self) -> Vec<PyPredictedCardSlot> {
        wrap(self.inner.predicted_cards())
    }

    fn next_predicted_cards(&self, n: usize) -> Vec<PyPredictedCardSlot> {
        wrap(self.inner.next_predicted_cards(n))
    }

    /// Look up a slot; None if no possible archetype lists that copy.
    fn predicted_card(&self, name: &str, copy: u32) -> PyResult<Option<PyPredictedCardSlot>> {
        if copy == 0 {
            return Err(PyErr::new::<PyValueError, _>("copy index is 1-based"));
        }
        let key = CardSlotKey::new(name, copy);
        Ok(self.inner.predicted_card(&key).cloned().map(PyPredictedCardSlot))
    }

    /// Names of the archetypes still possible.
    fn possible_archetypes(&self) -> Vec<String> {
        self.inner
            .possible_archetypes()
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }

    /// Summary of the prediction as a JSON string.
    #[pyo3(signature = (runner_up_count = 10))]
    fn summary_json(&self, runner_up_count: usize) -> PyResult<String> {
        let summary = self.inner.summary(&self.observations, runner_up_count);
        serde_json::to_string(&summary).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    #[setter]
    fn set_include_if_playable_threshold(&mut self, threshold: f64) {
        self.inner.set_include_if_playable_threshold(threshold);
    }

    #[getter]
    fn include_if_playable_threshold(&self) -> f64 {
        self.inner.config().include_if_playable_threshold
    }

    #[setter]
    fn set_deck_size(&mut self, deck_size: usize) {
        self.inner.set_deck_size(deck_size);
    }

    #[getter]
    fn deck_size(&self) -> usize {
        self.inner.config().deck_size
    }

    fn __repr__(&self) -> String {
        format!(
            "Predictor(possible={}/{}, mana={})",
            self.inner.possible_archetypes().len(),
            self.inner.archetype_count(),
            self.inner.available_mana()
        )
    }
}
