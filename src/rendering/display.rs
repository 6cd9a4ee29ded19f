//! # Display Management
//!
//! Draws the board, the word list and the message log using macroquad.

use crate::game::{Board, GameEvent, GameState, MessageImportance, Position, TileFlags, WordId};
use crate::rendering::{BoardLayout, UI};
use crate::{WordfindError, WordfindResult};
use macroquad::color::{hsl_to_rgb, rgb_to_hsl};
use macroquad::prelude::*;

/// Tile background when idle (`#fffdf0`).
pub const TILE_COLOR: Color = Color::new(1.0, 0.992, 0.941, 1.0);
/// Tile background while selected (`#ffe44b`).
pub const SELECTED_COLOR: Color = Color::new(1.0, 0.894, 0.294, 1.0);
/// Tile background once its word is found (`#c4faa1`).
pub const CLEARED_COLOR: Color = Color::new(0.769, 0.980, 0.631, 1.0);

/// Page background (floral white).
const BACKGROUND_COLOR: Color = Color::new(1.0, 0.980, 0.941, 1.0);
const BORDER_COLOR: Color = Color::new(0.333, 0.333, 0.333, 0.2);
const TEXT_COLOR: Color = BLACK;
/// Hue rotation between consecutive found words, in degrees.
const HUE_STEP_DEGREES: f32 = 37.0;

/// Text color for a log message.
pub fn message_color(importance: MessageImportance) -> Color {
    match importance {
        MessageImportance::Info => DARKGRAY,
        MessageImportance::Success => DARKGREEN,
        MessageImportance::Warning => Color::new(0.75, 0.35, 0.0, 1.0),
    }
}

/// Background color for a tile.
///
/// A selected tile always shows the selection color, even when cleared.
/// Cleared tiles get a hue shifted by the word they belong to so that
/// neighbouring found words are told apart.
pub fn tile_background(flags: &TileFlags, word: Option<WordId>) -> Color {
    if flags.selected {
        return SELECTED_COLOR;
    }
    if !flags.cleared {
        return TILE_COLOR;
    }

    let index = word.map(|id| id.0).unwrap_or(0);
    let (h, s, l) = rgb_to_hsl(CLEARED_COLOR);
    let shift = (index as f32 * HUE_STEP_DEGREES / 360.0).fract();
    hsl_to_rgb((h + shift).fract(), s, l)
}

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Where the board is drawn
    pub layout: BoardLayout,
    /// Word list panel width in pixels
    pub panel_width: f32,
    /// Message history
    pub messages: Vec<(String, MessageImportance)>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Overlay screens
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display for a board of the given dimension.
    pub fn new(dimension: usize) -> WordfindResult<Self> {
        if dimension == 0 {
            return Err(WordfindError::InvalidState(
                "Cannot display an empty board".to_string(),
            ));
        }

        let mut display = Self {
            screen_width: screen_width(),
            screen_height: screen_height(),
            layout: BoardLayout::fit(dimension, 0.0, 0.0, 1.0, 1.0),
            panel_width: 260.0,
            messages: Vec::new(),
            max_messages: 100,
            show_help: false,
            ui: UI::new(),
        };
        display.update_layout(dimension);
        Ok(display)
    }

    /// Recomputes the board layout for the current window size.
    pub fn update_layout(&mut self, dimension: usize) {
        self.screen_width = screen_width();
        self.screen_height = screen_height();

        let margin = 20.0;
        let message_area = 80.0;
        self.layout = BoardLayout::fit(
            dimension,
            margin,
            margin,
            (self.screen_width - self.panel_width - margin * 2.0).max(1.0),
            (self.screen_height - message_area - margin * 2.0).max(1.0),
        );
    }

    /// Renders the complete game screen.
    pub fn render_game(&mut self, game_state: &GameState) -> WordfindResult<()> {
        if screen_width() != self.screen_width || screen_height() != self.screen_height {
            self.update_layout(game_state.board.dimension());
        }

        clear_background(BACKGROUND_COLOR);

        self.render_board(&game_state.board)?;
        self.render_word_panel(game_state);
        self.render_messages();

        if self.show_help {
            self.ui.render_help(self.screen_width, self.screen_height);
        }

        Ok(())
    }

    /// Draws every tile of the board.
    fn render_board(&self, board: &Board) -> WordfindResult<()> {
        let font_size = (self.layout.tile_size * 0.6) as u16;

        for (pos, cell) in board.grid().cells() {
            let flags = board.flags(pos).ok_or_else(|| {
                WordfindError::InvalidState(format!("No tile flags at {}", pos))
            })?;
            let (x, y, size) = self.layout.tile_rect(pos);

            draw_rectangle(x, y, size, size, tile_background(flags, cell.across.or(cell.down)));
            draw_rectangle_lines(x, y, size, size, 2.0, BORDER_COLOR);
            self.render_letter(pos, cell.letter, font_size);
        }

        Ok(())
    }

    /// Draws one letter centred in its tile.
    fn render_letter(&self, pos: Position, letter: char, font_size: u16) {
        let text: String = letter.to_uppercase().collect();
        let (x, y, size) = self.layout.tile_rect(pos);
        let dims = measure_text(&text, None, font_size, 1.0);

        draw_text(
            &text,
            x + (size - dims.width) / 2.0,
            y + (size + dims.offset_y) / 2.0,
            font_size as f32,
            TEXT_COLOR,
        );
    }

    /// Draws the list of words to find, striking out found ones.
    fn render_word_panel(&self, game_state: &GameState) {
        let panel_x = self.screen_width - self.panel_width + 10.0;
        let mut line_y = 40.0;
        let line_height = 26.0;

        draw_text("WORDS", panel_x, line_y, 28.0, TEXT_COLOR);
        line_y += line_height * 1.5;

        for entry in game_state.words.iter() {
            let text = entry.placed.text.to_uppercase();
            let color = if entry.found {
                Color::new(0.0, 0.0, 0.0, 0.5)
            } else {
                TEXT_COLOR
            };
            draw_text(&text, panel_x, line_y, 22.0, color);
            if entry.found {
                let dims = measure_text(&text, None, 22, 1.0);
                let strike_y = line_y - dims.offset_y / 2.0;
                draw_line(panel_x, strike_y, panel_x + dims.width, strike_y, 2.0, color);
            }
            line_y += line_height;
        }

        line_y += line_height;
        let stats = &game_state.statistics;
        draw_text(
            &format!("Found: {}/{}", game_state.words.found_count(), game_state.words.len()),
            panel_x,
            line_y,
            18.0,
            DARKGRAY,
        );
        line_y += line_height * 0.8;
        draw_text(
            &format!("Gestures: {}", stats.gestures),
            panel_x,
            line_y,
            18.0,
            DARKGRAY,
        );
        line_y += line_height * 0.8;
        draw_text(
            &format!("Time: {}s", game_state.get_round_time_info().elapsed_time.as_secs()),
            panel_x,
            line_y,
            18.0,
            DARKGRAY,
        );
    }

    /// Renders the message area.
    fn render_messages(&self) {
        let message_area_y = self.screen_height - 60.0;
        let message_count = 3;
        let line_height = 18.0;

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, (message, importance)) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            draw_text(message, 20.0, y, 18.0, message_color(*importance));
        }
    }

    /// Adds any message text carried by game events to the log.
    pub fn add_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Message { text, importance } = event {
                self.add_message_with_importance(text.clone(), *importance);
            }
        }
    }

    /// Adds an informational message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.add_message_with_importance(message, MessageImportance::Info);
    }

    pub fn add_message_with_importance(&mut self, message: String, importance: MessageImportance) {
        self.messages.push((message, importance));

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }
}
