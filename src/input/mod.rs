//! # Input Module
//!
//! Input handling for player interactions.
//!
//! Mouse and touch input is sampled from macroquad once per frame and turned
//! into board-level [`PointerEvent`]s. macroquad reports touches as mouse
//! input, so one path covers both.

pub mod pointer;

pub use pointer::*;

use crate::rendering::BoardLayout;
use crate::game::PointerEvent;
use macroquad::prelude::*;

/// Input handler for processing player commands.
pub struct InputHandler {
    pointer: PointerTracker,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self {
            pointer: PointerTracker::new(),
        }
    }

    /// Gets the current keyboard command, if any key was pressed.
    pub fn get_input(&self) -> Option<PlayerInput> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(PlayerInput::Quit);
        }
        if is_key_pressed(KeyCode::N) {
            return Some(PlayerInput::NewGame);
        }
        if is_key_pressed(KeyCode::F1) {
            return Some(PlayerInput::Help);
        }
        None
    }

    /// Samples the mouse and returns the pointer events for this frame.
    pub fn poll_pointer(&mut self, layout: &BoardLayout) -> Vec<PointerEvent> {
        let (x, y) = mouse_position();
        let sample = PointerSample {
            x,
            y,
            pressed: is_mouse_button_pressed(MouseButton::Left),
            down: is_mouse_button_down(MouseButton::Left),
            released: is_mouse_button_released(MouseButton::Left),
        };
        self.pointer.update(sample, layout)
    }

    /// Forgets any drag in progress, e.g. after the board was replaced.
    pub fn reset_pointer(&mut self) {
        self.pointer = PointerTracker::new();
    }
}

/// Keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Quit the game
    Quit,
    /// Show help information
    Help,
    /// Start a new game with a fresh board
    NewGame,
}
