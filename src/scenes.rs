//! # Scene Management System
//!
//! Switches between the playing board and the round-complete screen.

use crate::{
    GameEvent, GameState, InputHandler, MacroquadDisplay, PlayerInput, WordfindResult,
};
use log::{info, warn};
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Normal gameplay
    Playing,
    /// Every word has been found
    Completed,
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    game_state: GameState,
    display: MacroquadDisplay,
    input_handler: InputHandler,
}

impl SceneManager {
    /// Creates a new scene manager for a round that has already been generated.
    pub fn new(game_state: GameState, input_handler: InputHandler) -> WordfindResult<Self> {
        let mut display = MacroquadDisplay::new(game_state.board.dimension())?;
        display.add_message("Drag across the letters of a word, then let go".to_string());
        display.add_events(&game_state.round_notices());

        Ok(Self {
            current_scene: SceneType::Playing,
            game_state,
            display,
            input_handler,
        })
    }

    pub fn current_scene(&self) -> SceneType {
        self.current_scene
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> WordfindResult<()> {
        loop {
            let exit = match self.current_scene {
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::Completed => self.update_completed_scene()?,
            };
            if exit {
                break;
            }
            next_frame().await;
        }
        info!("Game loop ended");
        Ok(())
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> WordfindResult<bool> {
        if let Some(input) = self.input_handler.get_input() {
            match input {
                PlayerInput::Quit => return Ok(true),
                PlayerInput::Help => self.display.show_help = !self.display.show_help,
                PlayerInput::NewGame => {
                    self.start_new_game()?;
                    return Ok(false);
                }
            }
        }

        let pointer_events = self.input_handler.poll_pointer(&self.display.layout);
        for pointer_event in pointer_events {
            let events = self.game_state.handle_pointer(pointer_event)?;
            self.process_game_events(&events);
        }

        if self.game_state.is_complete() {
            self.current_scene = SceneType::Completed;
            self.input_handler.reset_pointer();
        }

        self.display.render_game(&self.game_state)?;

        Ok(false)
    }

    /// Updates the completed scene, returns true if exit is requested
    fn update_completed_scene(&mut self) -> WordfindResult<bool> {
        self.display.render_game(&self.game_state)?;
        self.display.ui.render_completion_screen(&self.game_state);

        match self.input_handler.get_input() {
            Some(PlayerInput::Quit) => Ok(true),
            Some(PlayerInput::NewGame) => {
                self.start_new_game()?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Logs and displays game events
    fn process_game_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::WordFound { word, word_id, .. } = event {
                info!("Word {} found: {}", word_id, word);
            }
        }
        self.display.add_events(events);
    }

    /// Starts a new round on a fresh board
    fn start_new_game(&mut self) -> WordfindResult<()> {
        let new_seed: u64 = ::rand::random();

        info!("Starting new game with seed: {}", new_seed);

        match self.game_state.reset_for_new_game(new_seed) {
            Ok(_) => {
                self.input_handler.reset_pointer();
                self.display.update_layout(self.game_state.board.dimension());
                self.current_scene = SceneType::Playing;
                self.display.add_message("New game started!".to_string());
                let notices = self.game_state.round_notices();
                self.display.add_events(&notices);
            }
            Err(e) => {
                warn!("{}", e);
                self.display.add_message(format!("Could not start a new game: {}", e));
            }
        }

        Ok(())
    }
}
