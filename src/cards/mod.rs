//! Card system: identities, the card database seam, and observations.
//!
//! ## Key Types
//!
//! - `CardIdentity`: Static card data (name, cost, collectibility)
//! - `CardDatabase`: Lookup trait implemented by the host's card data
//! - `CardRegistry`: In-memory `CardDatabase` keyed by name
//! - `CardObservation`: A card the opponent has revealed
//! - `ObservedCardGroup`: Observations merged per card name

pub mod identity;
pub mod observation;
pub mod registry;

pub use identity::CardIdentity;
pub use observation::{group_observations, CardObservation, ObservedCardGroup};
pub use registry::{CardDatabase, CardRegistry};
