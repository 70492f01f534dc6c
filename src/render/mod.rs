//! Rendering capability.
//!
//! The roster builder and battle sequencer never touch a UI toolkit. They
//! talk to a `Renderer`, which owns the team containers and the cards in
//! them and knows how tall things are on screen.
//!
//! ## Implementations
//!
//! - [`RecordingRenderer`]: Headless. Keeps card views in memory and logs
//!   every visual command as a [`VisualCue`].
//! - [`TerminalRenderer`]: Prints the brawl as text lines to any writer.

mod recording;
mod terminal;

pub use recording::{CardView, RecordingRenderer};
pub use terminal::TerminalRenderer;

use serde::{Deserialize, Serialize};

use crate::cards::{Character, CharacterKind};
use crate::core::{CharacterId, TeamSide};

/// Rendering capability used by the roster and the battle.
///
/// ## Implementation Notes
///
/// - Extents are in the same unit as `viewport_height` (pixels, rows...).
/// - `card_extent` is asked before the card is rendered, so it must not
///   depend on the card being on screen.
/// - Every method targeting a card receives the side it lives on.
pub trait Renderer {
    /// Whether the container for a side exists. Adds to a missing
    /// container are dropped.
    fn has_container(&self, _side: TeamSide) -> bool {
        true
    }

    /// Total visible height.
    fn viewport_height(&self) -> f32;

    /// Current rendered height of a team container.
    fn team_extent(&self, side: TeamSide) -> f32;

    /// Height a card would take once rendered.
    fn card_extent(&self, character: &Character) -> f32;

    /// Append a card at the back of a team container.
    fn render_card(&mut self, side: TeamSide, character: &Character);

    /// Refresh a card's health display.
    fn update_health(&mut self, side: TeamSide, id: CharacterId, health: u8);

    /// Play the step-forward cue for a side's front character.
    fn move_to_center(&mut self, side: TeamSide, id: CharacterId);

    /// Show the attack effect for a striking character.
    fn show_attack(&mut self, side: TeamSide, kind: CharacterKind);

    /// Take down the attack effect a side put up.
    fn clear_attack(&mut self, side: TeamSide);

    /// Mark a card as defeated ahead of its removal.
    fn mark_defeated(&mut self, side: TeamSide, id: CharacterId);

    /// Remove a card from its container.
    fn remove_card(&mut self, side: TeamSide, id: CharacterId);

    /// Tell the user how the brawl ended.
    fn announce(&mut self, message: &str);
}

/// A visual command, as recorded by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualCue {
    CardRendered { side: TeamSide, id: CharacterId },
    HealthUpdated { side: TeamSide, id: CharacterId, health: u8 },
    MovedToCenter { side: TeamSide, id: CharacterId },
    AttackShown { side: TeamSide, kind: CharacterKind },
    AttackCleared { side: TeamSide },
    Defeated { side: TeamSide, id: CharacterId },
    CardRemoved { side: TeamSide, id: CharacterId },
    Announced { message: String },
}
