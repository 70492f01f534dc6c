//! Brawl configuration.
//!
//! Everything the roster builder and battle sequencer need to know up front:
//! - `ImageSets`: portrait images per character kind
//! - `Timings`: delays between battle steps
//! - `BrawlConfig`: combines the above with stat range, capacity ratio and
//!   which kind each team fields
//!
//! Configs are plain data and can be loaded from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::team::{TeamSide, Teams};
use crate::cards::{CharacterKind, MAX_STAT};

/// Errors raised when a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image set for {0} is empty")]
    EmptyImageSet(CharacterKind),

    #[error("stat range {min}..={max} must lie within 1..=10")]
    InvalidStatRange { min: u8, max: u8 },

    #[error("capacity ratio {0} must be in (0, 1]")]
    InvalidCapacityRatio(f32),

    #[error("both teams field {0}s")]
    SameKindBothTeams(CharacterKind),
}

/// Portrait images per character kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSets {
    pub murloc: Vec<String>,
    pub demon: Vec<String>,
}

impl ImageSets {
    /// Images for one kind.
    #[must_use]
    pub fn for_kind(&self, kind: CharacterKind) -> &[String] {
        match kind {
            CharacterKind::Murloc => &self.murloc,
            CharacterKind::Demon => &self.demon,
        }
    }
}

impl Default for ImageSets {
    fn default() -> Self {
        let set = |dir: &str, stem: &str, count: usize| {
            (1..=count)
                .map(|i| format!("{dir}/{stem}{i}.jpg"))
                .collect::<Vec<_>>()
        };

        Self {
            murloc: set("murloc", "murloc", 7),
            demon: set("demons", "demon", 6),
        }
    }
}

/// Delays between battle steps, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Move-to-center cue until the exchange begins.
    pub move_to_center: u64,
    /// Before each strike.
    pub strike: u64,
    /// Defeated mark until the card leaves its team.
    pub removal: u64,
    /// How long an attack effect stays on screen.
    pub attack_effect: u64,
    /// Settled exchange until the next round starts.
    pub next_round: u64,
    /// Last exchange until the winner is announced.
    pub announce: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            move_to_center: 1000,
            strike: 500,
            removal: 500,
            attack_effect: 500,
            next_round: 1000,
            announce: 400,
        }
    }
}

impl Timings {
    /// All delays zero. Useful for instant headless runs.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            move_to_center: 0,
            strike: 0,
            removal: 0,
            attack_effect: 0,
            next_round: 0,
            announce: 0,
        }
    }
}

/// Complete brawl configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrawlConfig {
    /// Portrait images per kind.
    pub images: ImageSets,

    /// Lowest rolled stat.
    pub stat_min: u8,

    /// Highest rolled stat.
    pub stat_max: u8,

    /// Fraction of the viewport height a team may fill.
    pub capacity_ratio: f32,

    /// Which kind each team fields.
    pub team_kinds: Teams<CharacterKind>,

    /// Step delays.
    pub timings: Timings,
}

impl Default for BrawlConfig {
    fn default() -> Self {
        Self {
            images: ImageSets::default(),
            stat_min: 1,
            stat_max: MAX_STAT,
            capacity_ratio: 0.8,
            team_kinds: Teams::new(CharacterKind::Murloc, CharacterKind::Demon),
            timings: Timings::default(),
        }
    }
}

impl BrawlConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in [CharacterKind::Murloc, CharacterKind::Demon] {
            if self.images.for_kind(kind).is_empty() {
                return Err(ConfigError::EmptyImageSet(kind));
            }
        }

        if self.stat_min == 0 || self.stat_min > self.stat_max || self.stat_max > MAX_STAT {
            return Err(ConfigError::InvalidStatRange {
                min: self.stat_min,
                max: self.stat_max,
            });
        }

        if !(self.capacity_ratio > 0.0 && self.capacity_ratio <= 1.0) {
            return Err(ConfigError::InvalidCapacityRatio(self.capacity_ratio));
        }

        if self.team_kinds.team1 == self.team_kinds.team2 {
            return Err(ConfigError::SameKindBothTeams(self.team_kinds.team1));
        }

        Ok(())
    }

    /// The side that fields `kind`. Only meaningful on a validated config,
    /// where the two sides field different kinds.
    #[must_use]
    pub fn side_for(&self, kind: CharacterKind) -> TeamSide {
        if self.team_kinds.team1 == kind {
            TeamSide::Team1
        } else {
            TeamSide::Team2
        }
    }

    /// Replace the step delays.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the rolled stat range.
    #[must_use]
    pub fn with_stat_range(mut self, min: u8, max: u8) -> Self {
        self.stat_min = min;
        self.stat_max = max;
        self
    }

    /// Set the capacity ratio.
    #[must_use]
    pub fn with_capacity_ratio(mut self, ratio: f32) -> Self {
        self.capacity_ratio = ratio;
        self
    }

    /// Replace the image set for one kind.
    #[must_use]
    pub fn with_images(mut self, kind: CharacterKind, images: Vec<String>) -> Self {
        match kind {
            CharacterKind::Murloc => self.images.murloc = images,
            CharacterKind::Demon => self.images.demon = images,
        }
        self
    }
}
