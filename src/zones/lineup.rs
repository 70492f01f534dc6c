//! Team lineups.
//!
//! A `Lineup` is the ordered list of characters one team has on screen.
//! Index 0 is the front: the only character of the team that fights.
//! New recruits join at the back; defeated characters leave from wherever
//! they are (in practice always the front).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Character;
use crate::core::entity::CharacterId;

/// Ordered characters of one team, front first.
///
/// ```
/// use card_brawl::cards::{Character, CharacterKind};
/// use card_brawl::core::CharacterId;
/// use card_brawl::zones::Lineup;
///
/// let mut lineup = Lineup::new();
/// lineup.push(Character::new(CharacterId(0), CharacterKind::Murloc, 5, 3, "a.jpg"));
/// lineup.push(Character::new(CharacterId(1), CharacterKind::Murloc, 2, 2, "b.jpg"));
///
/// assert_eq!(lineup.front().map(|c| c.id), Some(CharacterId(0)));
/// lineup.remove(CharacterId(0));
/// assert_eq!(lineup.front().map(|c| c.id), Some(CharacterId(1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    characters: SmallVec<[Character; 8]>,
}

impl Lineup {
    /// Create an empty lineup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character at the back.
    pub fn push(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// The active combatant.
    #[must_use]
    pub fn front(&self) -> Option<&Character> {
        self.characters.first()
    }

    /// Find a character by ID.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Find a character by ID, mutably.
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Remove a character by ID.
    ///
    /// Returns the removed character, or `None` if it wasn't in the lineup.
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let index = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(index))
    }

    /// Check whether a character is in the lineup.
    #[must_use]
    pub fn contains(&self, id: CharacterId) -> bool {
        self.get(id).is_some()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if no characters remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// IDs front to back.
    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.iter().map(|c| c.id)
    }
}

impl FromIterator<Character> for Lineup {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self {
            characters: iter.into_iter().collect(),
        }
    }
}
