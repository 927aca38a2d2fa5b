//! Archetype reference data.
//!
//! ## Key Types
//!
//! - `ArchetypeDeck`: One pre-catalogued deck list (class + card counts)
//! - `ArchetypeSet`: The immutable reference set for a session
//! - `RecognizedCardIndex`: Card names attested by the full reference set

pub mod deck;
pub mod index;
pub mod set;

pub use deck::ArchetypeDeck;
pub use index::RecognizedCardIndex;
pub use set::ArchetypeSet;
