//! Character cards.
//!
//! ## Key Types
//!
//! - `CharacterKind`: Murloc or demon; drives labels and attack effects
//! - `Character`: Runtime card state (stats, portrait)
//!
//! Health is the only field that changes once a card is on screen.

pub mod character;

pub use character::{Character, CharacterKind, MAX_STAT};
