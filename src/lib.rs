//! # card-brawl
//!
//! A two-team card brawl: add triggers spawn murloc and demon cards into
//! two team containers, and a fight trigger plays a timed, turn-based
//! exchange between the front card of each team until one side is empty.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: Image sets, stat range, capacity and delays live
//!    in `BrawlConfig`, passed in explicitly.
//!
//! 2. **Time is injected**: Every battle step goes through a `Scheduler`.
//!    `VirtualClock` makes fights deterministic and instant in tests;
//!    `WallClock` plays them out in real time.
//!
//! 3. **Rendering is a capability**: The roster and battle only see the
//!    `Renderer` trait, never a UI toolkit.
//!
//! ## Modules
//!
//! - `core`: Character IDs, team sides, RNG, configuration
//! - `cards`: Character cards
//! - `zones`: Team lineups
//! - `roster`: Rolling characters into lineups with a capacity check
//! - `render`: Rendering trait plus headless and terminal renderers
//! - `schedule`: Scheduler trait plus virtual and wall clocks
//! - `battle`: The fight state machine and outcomes
//! - `arena`: Everything wired together behind the three user triggers

pub mod core;
pub mod cards;
pub mod zones;
pub mod roster;
pub mod render;
pub mod schedule;
pub mod battle;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    BrawlConfig, CharacterId, ConfigError, GameRng, ImageSets, TeamSide, Teams,
    Timings,
};

pub use crate::cards::{Character, CharacterKind, MAX_STAT};

pub use crate::zones::Lineup;

pub use crate::roster::{RosterBuilder, RosterRejection};

pub use crate::render::{CardView, RecordingRenderer, Renderer, TerminalRenderer, VisualCue};

pub use crate::schedule::{Millis, Scheduler, VirtualClock, WallClock};

pub use crate::battle::{BattlePhase, BattleSequencer, BattleStep, FightRejection, Outcome, Stage};

pub use crate::arena::{Arena, Rejection, Trigger};
