//! Card and archetype bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::archetypes::ArchetypeSet;
use crate::cards::{CardIdentity, CardObservation, CardRegistry};
use crate::error::PredictorError;

pub(crate) fn to_py_err(err: PredictorError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for CardRegistry.
#[pyclass(name = "CardRegistry")]
#[derive(Clone, Default)]
pub struct PyCardRegistry(pub CardRegistry);

#[pymethods]
impl PyCardRegistry {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of {name, cost, collectible}.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        CardRegistry::from_json_str(json).map(Self).map_err(to_py_err)
    }

    /// Register a card. Raises ValueError on duplicate names.
    #[pyo3(signature = (name, cost, collectible = true))]
    fn register(&mut self, name: String, cost: u32, collectible: bool) -> PyResult<()> {
        let mut card = CardIdentity::new(name, cost);
        card.collectible = collectible;
        self.0.try_register(card).map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __contains__(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    fn __repr__(&self) -> String {
        format!("CardRegistry(cards={})", self.0.len())
    }
}

/// Python wrapper for ArchetypeSet.
#[pyclass(name = "ArchetypeSet")]
#[derive(Clone)]
pub struct PyArchetypeSet(pub ArchetypeSet);

#[pymethods]
impl PyArchetypeSet {
    /// Load archetypes from a JSON array of {name, class, cards}.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        ArchetypeSet::from_json_str(json).map(Self).map_err(to_py_err)
    }

    /// Decode a binary pack.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        ArchetypeSet::from_bytes(bytes).map(Self).map_err(to_py_err)
    }

    /// Encode as a binary pack.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0.to_bytes().map_err(to_py_err)
    }

    /// Names of the decks for a class.
    fn names_for_class(&self, class: &str) -> Vec<String> {
        self.0.for_class(class).iter().map(|d| d.name.clone()).collect()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("ArchetypeSet(decks={})", self.0.len())
    }
}

/// Python wrapper for CardObservation.
#[pyclass(name = "CardObservation")]
#[derive(Clone)]
pub struct PyCardObservation(pub CardObservation);

#[pymethods]
impl PyCardObservation {
    #[new]
    #[pyo3(signature = (name, cost, count = 1, created = false, collectible = true))]
    fn new(name: String, cost: u32, count: u32, created: bool, collectible: bool) -> Self {
        let mut card = CardIdentity::new(name, cost);
        card.collectible = collectible;
        let mut observation = CardObservation::new(card).with_count(count);
        observation.created = created;
        Self(observation)
    }

    #[getter]
    fn name(&self) -> &str {
        &self.0.card.name
    }

    #[getter]
    fn count(&self) -> u32 {
        self.0.count
    }

    #[getter]
    fn created(&self) -> bool {
        self.0.created
    }

    fn __repr__(&self) -> String {
        format!(
            "CardObservation({:?}, count={}, created={})",
            self.0.card.name, self.0.count, self.0.created
        )
    }
}
