//! Roster builder: rolls characters and places them into team containers.

use thiserror::Error;

use crate::cards::{Character, CharacterKind};
use crate::core::{BrawlConfig, CharacterId, GameRng, TeamSide, Teams};
use crate::render::Renderer;
use crate::zones::Lineup;

/// Why an add was dropped. The lineup is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RosterRejection {
    #[error("no container for {0}")]
    MissingContainer(TeamSide),

    #[error("Cannot add {kind}: would overflow the box.")]
    Overflow {
        kind: CharacterKind,
        extent: f32,
        limit: f32,
    },
}

/// Builds characters from the configured stat range and image sets.
///
/// ## Example
///
/// ```
/// use card_brawl::cards::CharacterKind;
/// use card_brawl::core::{BrawlConfig, TeamSide, Teams};
/// use card_brawl::render::RecordingRenderer;
/// use card_brawl::roster::RosterBuilder;
/// use card_brawl::zones::Lineup;
///
/// let mut builder = RosterBuilder::new(BrawlConfig::default(), 42);
/// let mut teams: Teams<Lineup> = Teams::default();
/// let mut renderer = RecordingRenderer::new(1000.0, 100.0);
///
/// let id = builder
///     .add_character(&mut teams, &mut renderer, TeamSide::Team1, CharacterKind::Murloc)
///     .unwrap();
/// assert_eq!(teams[TeamSide::Team1].front().unwrap().id, id);
/// ```
#[derive(Clone, Debug)]
pub struct RosterBuilder {
    config: BrawlConfig,
    rng: GameRng,
    next_id: CharacterId,
}

impl RosterBuilder {
    /// Create a builder with a seeded RNG.
    #[must_use]
    pub fn new(config: BrawlConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a builder around an existing RNG.
    #[must_use]
    pub fn with_rng(config: BrawlConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            next_id: CharacterId::FIRST,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &BrawlConfig {
        &self.config
    }

    /// The RNG in use.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Roll a new character of `kind` without placing it anywhere.
    ///
    /// Health and attack are independent rolls; the image is a uniform pick
    /// from the kind's image set.
    pub fn roll_character(&mut self, kind: CharacterKind) -> Character {
        let health = self.rng.roll(self.config.stat_min, self.config.stat_max);
        let attack = self.rng.roll(self.config.stat_min, self.config.stat_max);
        let image = self
            .rng
            .choose(self.config.images.for_kind(kind))
            .cloned()
            .unwrap_or_default();

        Character::new(self.next_id.bump(), kind, health, attack, image)
    }

    /// Roll a character and add it to the back of `side`'s lineup.
    ///
    /// Rejected (logged, nothing changes) if the container is missing or if
    /// the card would push the container past `capacity_ratio` of the
    /// viewport height.
    pub fn add_character<R: Renderer + ?Sized>(
        &mut self,
        teams: &mut Teams<Lineup>,
        renderer: &mut R,
        side: TeamSide,
        kind: CharacterKind,
    ) -> Result<CharacterId, RosterRejection> {
        if !renderer.has_container(side) {
            log::debug!("No container for {side}, ignoring add");
            return Err(RosterRejection::MissingContainer(side));
        }

        let character = self.roll_character(kind);

        let extent = renderer.team_extent(side) + renderer.card_extent(&character);
        let limit = self.config.capacity_ratio * renderer.viewport_height();
        if extent > limit {
            let rejection = RosterRejection::Overflow { kind, extent, limit };
            log::warn!("{rejection}");
            return Err(rejection);
        }

        log::debug!(
            "{side} recruits {kind} {} (health {}, attack {}, {})",
            character.id,
            character.health(),
            character.attack(),
            character.image
        );

        let id = character.id;
        renderer.render_card(side, &character);
        teams[side].push(character);
        Ok(id)
    }

    /// Add a character of the kind configured for `side`.
    pub fn recruit<R: Renderer + ?Sized>(
        &mut self,
        teams: &mut Teams<Lineup>,
        renderer: &mut R,
        side: TeamSide,
    ) -> Result<CharacterId, RosterRejection> {
        let kind = self.config.team_kinds[side];
        self.add_character(teams, renderer, side, kind)
    }
}
