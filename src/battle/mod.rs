//! Battle sequencing.
//!
//! A fight is a state machine over the two lineups:
//!
//! ```text
//! Idle --start--> RoundStart --move_to_center--> Resolve
//!                     ^                              |
//!                     |       strikes, removals      |
//!                     +-------- both standing <------+
//!                                                    |
//!                     Idle <--- Announce <--- one side empty
//! ```
//!
//! Every transition is a [`BattleStep`] handed to a [`Scheduler`] with the
//! configured delay. The sequencer never waits itself; whoever owns the
//! scheduler pulls due steps out and feeds them back via
//! [`BattleSequencer::step`].
//!
//! [`Scheduler`]: crate::schedule::Scheduler

mod outcome;
mod sequencer;

pub use outcome::Outcome;
pub use sequencer::{BattleSequencer, FightRejection};

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, TeamSide, Teams};
use crate::render::Renderer;
use crate::schedule::Scheduler;
use crate::zones::Lineup;

/// Where the sequencer is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    /// No fight in progress.
    #[default]
    Idle,
    /// Front characters are stepping forward (or about to).
    RoundStart,
    /// Strikes are being exchanged.
    Resolve,
    /// One side is depleted; the winner is about to be announced.
    Announce,
}

/// A deferred battle step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleStep {
    /// Pick the front characters and move them to the center.
    RoundStart,
    /// Begin the exchange between the current fighters.
    Resolve,
    /// `attacker`'s fighter hits the opposing fighter.
    Strike { attacker: TeamSide },
    /// Take down an attack effect.
    ClearAttack { side: TeamSide },
    /// Drop a defeated character from its lineup.
    Remove { side: TeamSide, id: CharacterId },
    /// Report the winner and go idle.
    Announce,
}

/// Everything a battle step acts on.
pub struct Stage<'a> {
    pub teams: &'a mut Teams<Lineup>,
    pub renderer: &'a mut dyn Renderer,
    pub scheduler: &'a mut dyn Scheduler<BattleStep>,
}
