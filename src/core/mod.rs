//! Core types: character IDs, team sides, RNG, configuration.
//!
//! Everything here is independent of rendering and timing. The roster
//! builder and battle sequencer are configured via `BrawlConfig` rather
//! than module-level constants.

pub mod entity;
pub mod team;
pub mod rng;
pub mod config;

pub use entity::CharacterId;
pub use team::{TeamSide, Teams};
pub use rng::GameRng;
pub use config::{BrawlConfig, ConfigError, ImageSets, Timings};
