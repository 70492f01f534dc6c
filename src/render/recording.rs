//! Headless renderer that records what it was asked to draw.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Renderer, VisualCue};
use crate::cards::{Character, CharacterKind};
use crate::core::{CharacterId, TeamSide, Teams};

/// Everything a card shows on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub side: TeamSide,
    pub image: String,
    pub alt: String,
    pub type_label: String,
    pub health: u8,
    pub attack: u8,
    pub centered: bool,
    pub defeated: bool,
}

/// In-memory renderer with fixed card height.
///
/// Team extent is simply `cards * card_height`. Every call is appended to
/// `cues()` so tests can assert on the exact visual sequence.
///
/// ```
/// use card_brawl::render::{RecordingRenderer, Renderer};
/// use card_brawl::core::TeamSide;
///
/// let renderer = RecordingRenderer::new(1000.0, 100.0);
/// assert_eq!(renderer.team_extent(TeamSide::Team1), 0.0);
/// assert_eq!(renderer.viewport_height(), 1000.0);
/// ```
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    viewport_height: f32,
    card_height: f32,
    containers: Teams<bool>,
    order: Teams<Vec<CharacterId>>,
    cards: FxHashMap<CharacterId, CardView>,
    effects: Teams<Option<CharacterKind>>,
    cues: Vec<VisualCue>,
}

impl RecordingRenderer {
    /// Create a renderer with both containers present.
    #[must_use]
    pub fn new(viewport_height: f32, card_height: f32) -> Self {
        Self {
            viewport_height,
            card_height,
            containers: Teams::with_value(true),
            order: Teams::default(),
            cards: FxHashMap::default(),
            effects: Teams::default(),
            cues: Vec::new(),
        }
    }

    /// Drop a side's container, as if it were missing from the page.
    #[must_use]
    pub fn without_container(mut self, side: TeamSide) -> Self {
        self.containers[side] = false;
        self
    }

    /// Recorded commands, oldest first.
    #[must_use]
    pub fn cues(&self) -> &[VisualCue] {
        &self.cues
    }

    /// Forget recorded commands, keeping the cards.
    pub fn clear_cues(&mut self) {
        self.cues.clear();
    }

    /// A card currently on screen.
    #[must_use]
    pub fn card(&self, id: CharacterId) -> Option<&CardView> {
        self.cards.get(&id)
    }

    /// Card IDs of a container, top to bottom.
    #[must_use]
    pub fn container(&self, side: TeamSide) -> &[CharacterId] {
        &self.order[side]
    }

    /// The attack effect currently up for a side, if any.
    #[must_use]
    pub fn active_effect(&self, side: TeamSide) -> Option<CharacterKind> {
        self.effects[side]
    }

    /// Messages passed to `announce`, oldest first.
    pub fn announcements(&self) -> impl Iterator<Item = &str> {
        self.cues.iter().filter_map(|cue| match cue {
            VisualCue::Announced { message } => Some(message.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn has_container(&self, side: TeamSide) -> bool {
        self.containers[side]
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn team_extent(&self, side: TeamSide) -> f32 {
        self.order[side].len() as f32 * self.card_height
    }

    fn card_extent(&self, _character: &Character) -> f32 {
        self.card_height
    }

    fn render_card(&mut self, side: TeamSide, character: &Character) {
        self.cards.insert(
            character.id,
            CardView {
                side,
                image: character.image.clone(),
                alt: character.kind.label().to_string(),
                type_label: character.kind.label().to_string(),
                health: character.health(),
                attack: character.attack(),
                centered: false,
                defeated: false,
            },
        );
        self.order[side].push(character.id);
        self.cues.push(VisualCue::CardRendered { side, id: character.id });
    }

    fn update_health(&mut self, side: TeamSide, id: CharacterId, health: u8) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.health = health;
        }
        self.cues.push(VisualCue::HealthUpdated { side, id, health });
    }

    fn move_to_center(&mut self, side: TeamSide, id: CharacterId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.centered = true;
        }
        self.cues.push(VisualCue::MovedToCenter { side, id });
    }

    fn show_attack(&mut self, side: TeamSide, kind: CharacterKind) {
        self.effects[side] = Some(kind);
        self.cues.push(VisualCue::AttackShown { side, kind });
    }

    fn clear_attack(&mut self, side: TeamSide) {
        self.effects[side] = None;
        self.cues.push(VisualCue::AttackCleared { side });
    }

    fn mark_defeated(&mut self, side: TeamSide, id: CharacterId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.defeated = true;
        }
        self.cues.push(VisualCue::Defeated { side, id });
    }

    fn remove_card(&mut self, side: TeamSide, id: CharacterId) {
        self.cards.remove(&id);
        self.order[side].retain(|&c| c != id);
        self.cues.push(VisualCue::CardRemoved { side, id });
    }

    fn announce(&mut self, message: &str) {
        self.cues.push(VisualCue::Announced {
            message: message.to_string(),
        });
    }
}
