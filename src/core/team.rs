//! Team identification and per-team data storage.
//!
//! ## TeamSide
//!
//! The brawl always has exactly two sides. `TeamSide::Team1` is the left
//! container (murlocs by default), `TeamSide::Team2` the right one.
//!
//! ## Teams
//!
//! Pair storage indexed by `TeamSide`, used for lineups, per-side
//! configuration and anything else that exists once per team.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the brawl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    /// Both sides, in display order.
    pub const ALL: [TeamSide; 2] = [TeamSide::Team1, TeamSide::Team2];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Team1 => TeamSide::Team2,
            TeamSide::Team2 => TeamSide::Team1,
        }
    }

    /// Container name of this side.
    #[must_use]
    pub const fn container(self) -> &'static str {
        match self {
            TeamSide::Team1 => "team1",
            TeamSide::Team2 => "team2",
        }
    }

    /// Visual cue played when this side's front character steps forward.
    #[must_use]
    pub const fn center_cue(self) -> &'static str {
        match self {
            TeamSide::Team1 => "moveToCenterTeam1",
            TeamSide::Team2 => "moveToCenterTeam2",
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.container())
    }
}

/// Per-team data storage.
///
/// ```
/// use card_brawl::core::{TeamSide, Teams};
///
/// let mut wins: Teams<u32> = Teams::with_value(0);
/// wins[TeamSide::Team2] += 1;
///
/// assert_eq!(wins[TeamSide::Team1], 0);
/// assert_eq!(wins[TeamSide::Team2], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Teams<T> {
    pub team1: T,
    pub team2: T,
}

impl<T> Teams<T> {
    /// Create from explicit values.
    pub const fn new(team1: T, team2: T) -> Self {
        Self { team1, team2 }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            team1: value.clone(),
            team2: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: TeamSide) -> &T {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: TeamSide) -> &mut T {
        match side {
            TeamSide::Team1 => &mut self.team1,
            TeamSide::Team2 => &mut self.team2,
        }
    }

    /// Iterate over (TeamSide, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamSide, &T)> {
        [(TeamSide::Team1, &self.team1), (TeamSide::Team2, &self.team2)].into_iter()
    }

}

impl<T> Index<TeamSide> for Teams<T> {
    type Output = T;

    fn index(&self, side: TeamSide) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<TeamSide> for Teams<T> {
    fn index_mut(&mut self, side: TeamSide) -> &mut Self::Output {
        self.get_mut(side)
    }
}
