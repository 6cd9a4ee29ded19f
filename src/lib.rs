//! # Wordfind
//!
//! A word-search puzzle game built around a seeded grid generator.
//!
//! ## Architecture Overview
//!
//! - **Generation System**: Places words across and down in a square grid and
//!   backfills the remaining cells with filler letters
//! - **Game State**: Owns the current round, its board and the word table
//! - **Selection System**: Press/drag/release gestures and the word-completion check
//! - **Word Lists**: Named word lists loaded from text files
//! - **Rendering System**: 2D board rendering using macroquad
//!
//! ## Quick Start
//!
//! ```
//! use wordfind::{GenerationConfig, Generator, PuzzleGenerator};
//!
//! let config = GenerationConfig::for_testing(7);
//! let mut rng = wordfind::generation::utils::create_rng(&config);
//! let words = vec!["cat".to_string(), "dog".to_string()];
//!
//! let puzzle = PuzzleGenerator::new(words).generate(&config, &mut rng).unwrap();
//! assert_eq!(puzzle.grid.dimension(), config.dimension);
//! ```

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod wordlist;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use wordlist::*;

pub use scenes::{SceneManager, SceneType};

/// Core error type for the Wordfind game.
#[derive(thiserror::Error, Debug)]
pub enum WordfindError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input data (word lists, positions) is unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A dependency did not become ready in time
    #[error("Timed out after {millis}ms waiting for {what}")]
    Timeout { what: String, millis: u128 },

    /// Requested word list does not exist in the loaded set
    #[error("Word list not found: {0}")]
    WordListNotFound(String),
}

/// Result type used throughout the Wordfind codebase.
pub type WordfindResult<T> = Result<T, WordfindError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default board dimension in tiles
    pub const DEFAULT_DIMENSION: usize = 7;

    /// Largest board dimension accepted by the generator
    pub const MAX_DIMENSION: usize = 64;

    /// Default attempts made to place one word before dropping it
    pub const DEFAULT_ATTEMPTS_PER_WORD: u32 = 20;

    /// Filler alphabet, including the accented letters of the Swedish locale
    pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzåäö";

    /// Marker held by cells no word has claimed yet
    pub const UNFILLED: char = '-';

    /// Default time allowed for loading a word list, in milliseconds
    pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 10_000;
}
