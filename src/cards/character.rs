//! Character cards - the runtime state of one fighter.
//!
//! A `Character` is created by the roster builder with rolled stats and a
//! picked portrait. During a fight only its health changes; attack, kind
//! and image are fixed once the card is rendered.

use serde::{Deserialize, Serialize};

use crate::core::entity::CharacterId;

/// Upper bound for both health and attack.
pub const MAX_STAT: u8 = 10;

/// The kind of creature on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    Murloc,
    Demon,
}

impl CharacterKind {
    /// Type label shown on the card (also the image alt text).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CharacterKind::Murloc => "murloc",
            CharacterKind::Demon => "demon",
        }
    }

    /// Name used when this kind's team wins.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            CharacterKind::Murloc => "murlocs",
            CharacterKind::Demon => "demons",
        }
    }

    /// Transient effect shown while a character of this kind attacks.
    #[must_use]
    pub const fn attack_effect(self) -> &'static str {
        match self {
            CharacterKind::Murloc => "murlocAttackAnime",
            CharacterKind::Demon => "demonAttackAnime",
        }
    }
}

impl std::fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A character card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Unique ID for this card.
    pub id: CharacterId,

    /// Creature kind.
    pub kind: CharacterKind,

    /// Portrait image reference.
    pub image: String,

    health: u8,
    attack: u8,
}

impl Character {
    /// Create a character. Stats above `MAX_STAT` are clamped.
    #[must_use]
    pub fn new(
        id: CharacterId,
        kind: CharacterKind,
        health: u8,
        attack: u8,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            image: image.into(),
            health: health.min(MAX_STAT),
            attack: attack.min(MAX_STAT),
        }
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> u8 {
        self.health
    }

    /// Attack value, dealt as damage on each strike.
    #[must_use]
    pub const fn attack(&self) -> u8 {
        self.attack
    }

    /// A character at 0 health is defeated and leaves its team.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Apply damage, flooring health at 0. Returns the new health.
    pub fn take_damage(&mut self, amount: u8) -> u8 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }
}
