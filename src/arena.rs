//! The arena: both lineups plus everything needed to fill and fight them.
//!
//! `Arena` is the entry point for a front end. It owns the roster builder,
//! the lineups, the renderer and the scheduler, and turns the three user
//! triggers into roster and battle operations.
//!
//! ```
//! use card_brawl::arena::{Arena, Trigger};
//! use card_brawl::battle::BattleStep;
//! use card_brawl::core::BrawlConfig;
//! use card_brawl::render::RecordingRenderer;
//! use card_brawl::schedule::VirtualClock;
//!
//! let mut arena = Arena::new(
//!     BrawlConfig::default(),
//!     42,
//!     RecordingRenderer::new(1000.0, 100.0),
//!     VirtualClock::<BattleStep>::new(),
//! )
//! .unwrap();
//!
//! arena.handle(Trigger::AddMurloc).unwrap();
//! arena.handle(Trigger::AddDemon).unwrap();
//! arena.handle(Trigger::Fight).unwrap();
//!
//! let outcome = arena.run_until_idle().unwrap();
//! assert!(["murlocs", "demons"].contains(&outcome.winner_name()));
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::battle::{BattleSequencer, BattleStep, FightRejection, Outcome, Stage};
use crate::cards::CharacterKind;
use crate::core::{BrawlConfig, CharacterId, ConfigError, Teams};
use crate::render::Renderer;
use crate::roster::{RosterBuilder, RosterRejection};
use crate::schedule::Scheduler;
use crate::zones::Lineup;

/// A user action.
///
/// Add triggers name a kind, not a side: the character joins whichever
/// team `BrawlConfig::team_kinds` assigns that kind to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Add a murloc (team 1 by default).
    AddMurloc,
    /// Add a demon (team 2 by default).
    AddDemon,
    /// Start a fight.
    Fight,
}

impl Trigger {
    /// The kind an add trigger recruits.
    #[must_use]
    pub const fn kind(self) -> Option<CharacterKind> {
        match self {
            Trigger::AddMurloc => Some(CharacterKind::Murloc),
            Trigger::AddDemon => Some(CharacterKind::Demon),
            Trigger::Fight => None,
        }
    }
}

impl FromStr for Trigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "murloc" | "m" | "1" => Ok(Trigger::AddMurloc),
            "demon" | "d" | "2" => Ok(Trigger::AddDemon),
            "fight" | "f" => Ok(Trigger::Fight),
            other => Err(format!("unknown trigger '{other}'")),
        }
    }
}

/// Why a trigger had no effect.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Rejection {
    #[error(transparent)]
    Roster(#[from] RosterRejection),

    #[error(transparent)]
    Fight(#[from] FightRejection),

    #[error("cannot add characters while a fight is in progress")]
    FightInProgress,
}

/// Lineups, renderer and scheduler wired together.
pub struct Arena<R, S> {
    builder: RosterBuilder,
    teams: Teams<Lineup>,
    renderer: R,
    scheduler: S,
    sequencer: BattleSequencer,
    last_outcome: Option<Outcome>,
}

impl<R, S> Arena<R, S>
where
    R: Renderer,
    S: Scheduler<BattleStep>,
{
    /// Create an arena with empty lineups.
    pub fn new(
        config: BrawlConfig,
        seed: u64,
        renderer: R,
        scheduler: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let sequencer = BattleSequencer::new(config.timings, config.team_kinds.clone());
        Ok(Self {
            builder: RosterBuilder::new(config, seed),
            teams: Teams::default(),
            renderer,
            scheduler,
            sequencer,
            last_outcome: None,
        })
    }

    /// Dispatch a user trigger.
    pub fn handle(&mut self, trigger: Trigger) -> Result<(), Rejection> {
        match trigger.kind() {
            Some(kind) => self.add_character(kind).map(|_| ()),
            None => self.start_fight().map_err(Rejection::from),
        }
    }

    /// Roll a character of `kind` and add it to the team fielding that kind.
    ///
    /// Lineups are frozen while a fight runs: an add during a fight is
    /// refused with `Rejection::FightInProgress`, not held back for the
    /// next fight.
    pub fn add_character(&mut self, kind: CharacterKind) -> Result<CharacterId, Rejection> {
        if self.sequencer.is_running() {
            log::warn!("Cannot add {kind}: a fight is in progress");
            return Err(Rejection::FightInProgress);
        }

        let side = self.builder.config().side_for(kind);
        Ok(self
            .builder
            .add_character(&mut self.teams, &mut self.renderer, side, kind)?)
    }

    /// Start a fight between the current lineups.
    pub fn start_fight(&mut self) -> Result<(), FightRejection> {
        let mut stage = Stage {
            teams: &mut self.teams,
            renderer: &mut self.renderer,
            scheduler: &mut self.scheduler,
        };
        self.sequencer.start(&mut stage)
    }

    /// Run the next due step, waiting for it as the scheduler does.
    ///
    /// Returns `false` if nothing was queued.
    pub fn tick(&mut self) -> bool {
        let Some(step) = self.scheduler.next_task() else {
            return false;
        };

        let mut stage = Stage {
            teams: &mut self.teams,
            renderer: &mut self.renderer,
            scheduler: &mut self.scheduler,
        };
        if let Some(outcome) = self.sequencer.step(step, &mut stage) {
            self.last_outcome = Some(outcome);
        }
        true
    }

    /// Run queued steps until the scheduler is empty.
    ///
    /// Returns the outcome if a fight ended along the way.
    pub fn run_until_idle(&mut self) -> Option<Outcome> {
        let finished_before = self.last_outcome.take();
        while self.tick() {}

        match self.last_outcome {
            Some(outcome) => Some(outcome),
            None => {
                self.last_outcome = finished_before;
                None
            }
        }
    }

    /// Outcome of the most recent finished fight.
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Both lineups.
    #[must_use]
    pub fn teams(&self) -> &Teams<Lineup> {
        &self.teams
    }

    /// The battle state machine.
    #[must_use]
    pub fn sequencer(&self) -> &BattleSequencer {
        &self.sequencer
    }

    /// The roster builder.
    #[must_use]
    pub fn builder(&self) -> &RosterBuilder {
        &self.builder
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
