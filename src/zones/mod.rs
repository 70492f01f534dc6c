//! Team containers.
//!
//! ## Key Types
//!
//! - `Lineup`: Ordered characters of one team, front first
//! - `Teams<Lineup>`: Both lineups, indexed by `TeamSide`

pub mod lineup;

pub use lineup::Lineup;
