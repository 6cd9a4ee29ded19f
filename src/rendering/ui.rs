//! # User Interface Elements
//!
//! Overlays drawn on top of the board: help and the completion screen.

use crate::game::{GameCompletionState, GameState};
use macroquad::prelude::*;

/// Help lines shown by F1.
pub const HELP_LINES: [&str; 4] = [
    "Press and drag across a word, then release",
    "Dragging back over a tile deselects it",
    "N: new game",
    "ESC: quit",
];

/// Headline for the end-of-round screen.
pub fn completion_title(state: GameCompletionState) -> &'static str {
    match state {
        GameCompletionState::NoWordsPlaced => "NO WORDS FIT THIS BOARD",
        GameCompletionState::Playing | GameCompletionState::AllWordsFound => "ALL WORDS FOUND!",
    }
}

/// Overlay renderer.
#[derive(Debug, Default)]
pub struct UI;

impl UI {
    /// Creates a new UI instance.
    pub fn new() -> Self {
        Self
    }

    /// Draws the help overlay.
    pub fn render_help(&self, screen_width: f32, screen_height: f32) {
        let width = 460.0;
        let height = 40.0 + HELP_LINES.len() as f32 * 26.0;
        let x = (screen_width - width) / 2.0;
        let y = (screen_height - height) / 2.0;

        draw_rectangle(x, y, width, height, Color::new(0.0, 0.0, 0.0, 0.85));
        for (i, line) in HELP_LINES.iter().enumerate() {
            draw_text(line, x + 20.0, y + 36.0 + i as f32 * 26.0, 20.0, WHITE);
        }
    }

    /// Draws the round-complete screen over the board.
    pub fn render_completion_screen(&self, game_state: &GameState) {
        let screen_w = screen_width();
        let screen_h = screen_height();

        draw_rectangle(0.0, 0.0, screen_w, screen_h, Color::new(0.0, 0.0, 0.0, 0.6));

        let title = completion_title(game_state.get_completion_state());
        let title_size = 48.0;
        let dims = measure_text(title, None, title_size as u16, 1.0);
        draw_text(
            title,
            (screen_w - dims.width) / 2.0,
            screen_h / 2.0 - 40.0,
            title_size,
            Color::new(0.769, 0.980, 0.631, 1.0),
        );

        let time = game_state.get_round_time_info();
        let summary = format!(
            "{} words in {} gestures, {}s",
            game_state.words.len(),
            time.gestures,
            time.elapsed_time.as_secs()
        );
        let dims = measure_text(&summary, None, 24, 1.0);
        draw_text(
            &summary,
            (screen_w - dims.width) / 2.0,
            screen_h / 2.0 + 10.0,
            24.0,
            WHITE,
        );

        let prompt = "Press N for a new game, ESC to quit";
        let dims = measure_text(prompt, None, 22, 1.0);
        draw_text(
            prompt,
            (screen_w - dims.width) / 2.0,
            screen_h / 2.0 + 50.0,
            22.0,
            LIGHTGRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_title() {
        assert_eq!(
            completion_title(GameCompletionState::AllWordsFound),
            "ALL WORDS FOUND!"
        );
        assert_eq!(
            completion_title(GameCompletionState::NoWordsPlaced),
            "NO WORDS FIT THIS BOARD"
        );
    }
}
