//! How a fight ended.

use serde::{Deserialize, Serialize};

use crate::cards::CharacterKind;
use crate::core::{TeamSide, Teams};
use crate::zones::Lineup;

/// Result of a finished fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One side still has characters, the other is empty.
    Winner { side: TeamSide, kind: CharacterKind },
    /// Anything else, including both sides empty.
    NoOne,
}

impl Outcome {
    /// Decide the outcome from the lineups left after the last exchange.
    #[must_use]
    pub fn decide(teams: &Teams<Lineup>, kinds: &Teams<CharacterKind>) -> Self {
        let standing = |side: TeamSide| !teams[side].is_empty();

        match (standing(TeamSide::Team1), standing(TeamSide::Team2)) {
            (true, false) => Outcome::Winner {
                side: TeamSide::Team1,
                kind: kinds[TeamSide::Team1],
            },
            (false, true) => Outcome::Winner {
                side: TeamSide::Team2,
                kind: kinds[TeamSide::Team2],
            },
            _ => Outcome::NoOne,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: TeamSide) -> bool {
        matches!(self, Outcome::Winner { side: s, .. } if *s == side)
    }

    /// "murlocs", "demons" or "no one".
    #[must_use]
    pub fn winner_name(&self) -> &'static str {
        match self {
            Outcome::Winner { kind, .. } => kind.plural(),
            Outcome::NoOne => "no one",
        }
    }

    /// The message shown to the user.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("{} won the battle!", self.winner_name())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.winner_name())
    }
}
