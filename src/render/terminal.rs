//! Line-oriented text renderer.

use std::io::Write;

use super::Renderer;
use crate::cards::{Character, CharacterKind};
use crate::core::{CharacterId, TeamSide, Teams};

/// Prints every visual command as one line of text.
///
/// Each card occupies `card_rows` rows of a `viewport_rows` tall screen,
/// which is what the capacity check measures against.
pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport_rows: f32,
    card_rows: f32,
    cards: Teams<Vec<CharacterId>>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W, viewport_rows: u16, card_rows: u16) -> Self {
        Self {
            out,
            viewport_rows: f32::from(viewport_rows),
            card_rows: f32::from(card_rows),
            cards: Teams::default(),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}") {
            log::warn!("Failed to write to terminal: {err}");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn viewport_height(&self) -> f32 {
        self.viewport_rows
    }

    fn team_extent(&self, side: TeamSide) -> f32 {
        self.cards[side].len() as f32 * self.card_rows
    }

    fn card_extent(&self, _character: &Character) -> f32 {
        self.card_rows
    }

    fn render_card(&mut self, side: TeamSide, character: &Character) {
        self.cards[side].push(character.id);
        self.line(format_args!(
            "[{side}] + {} #{} <{}> health {} attack {}",
            character.kind,
            character.id.raw(),
            character.image,
            character.health(),
            character.attack(),
        ));
    }

    fn update_health(&mut self, side: TeamSide, id: CharacterId, health: u8) {
        self.line(format_args!("[{side}]   #{} health -> {health}", id.raw()));
    }

    fn move_to_center(&mut self, side: TeamSide, id: CharacterId) {
        self.line(format_args!("[{side}] >> #{} ({})", id.raw(), side.center_cue()));
    }

    fn show_attack(&mut self, side: TeamSide, kind: CharacterKind) {
        self.line(format_args!("[{side}] ** {}", kind.attack_effect()));
    }

    fn clear_attack(&mut self, _side: TeamSide) {}

    fn mark_defeated(&mut self, side: TeamSide, id: CharacterId) {
        self.line(format_args!("[{side}] xx #{} is defeated", id.raw()));
    }

    fn remove_card(&mut self, side: TeamSide, id: CharacterId) {
        self.cards[side].retain(|&c| c != id);
        self.line(format_args!("[{side}] -  #{}", id.raw()));
    }

    fn announce(&mut self, message: &str) {
        self.line(format_args!("=== {message} ==="));
    }
}
