//! # Generation Module
//!
//! Procedural puzzle generation.
//!
//! This module places a list of words across and down in a square grid and
//! backfills every cell no word claimed with a random filler letter. All
//! randomness flows through a seeded [`StdRng`], so a configuration and a word
//! list always reproduce the same board.

pub mod filler;
pub mod puzzle;

pub use filler::*;
pub use puzzle::*;

use crate::config::{DEFAULT_ALPHABET, DEFAULT_ATTEMPTS_PER_WORD, DEFAULT_DIMENSION, MAX_DIMENSION};
use crate::game::Grid;
use crate::{WordfindError, WordfindResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Side length of the square grid
    pub dimension: usize,
    /// Stop once this many words are placed (None places as many as fit)
    pub max_words_to_place: Option<usize>,
    /// Attempts made to place one word before it is dropped
    pub max_attempts_per_word: u32,
    /// Characters used to fill cells no word claimed
    pub alphabet: String,
    /// Shuffle the word list with the round's rng before placing
    pub shuffle_words: bool,
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfind::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.dimension, 7);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            dimension: DEFAULT_DIMENSION,
            max_words_to_place: None,
            max_attempts_per_word: DEFAULT_ATTEMPTS_PER_WORD,
            alphabet: DEFAULT_ALPHABET.to_string(),
            shuffle_words: true,
        }
    }

    /// Creates a configuration for testing: words are kept in input order and
    /// each word gets plenty of attempts.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            dimension: DEFAULT_DIMENSION,
            max_words_to_place: None,
            max_attempts_per_word: 100,
            alphabet: DEFAULT_ALPHABET.to_string(),
            shuffle_words: false,
        }
    }

    /// Sets the grid dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the cap on placed words.
    pub fn with_max_words(mut self, max_words_to_place: usize) -> Self {
        self.max_words_to_place = Some(max_words_to_place);
        self
    }

    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> WordfindResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a generation run.
    pub fn validate(&self) -> WordfindResult<()> {
        if self.dimension == 0 {
            return Err(WordfindError::InvalidConfig(
                "Dimension must be greater than zero".to_string(),
            ));
        }
        if self.dimension > MAX_DIMENSION {
            return Err(WordfindError::InvalidConfig(format!(
                "Dimension {} exceeds the maximum of {}",
                self.dimension, MAX_DIMENSION
            )));
        }
        if self.max_attempts_per_word == 0 {
            return Err(WordfindError::InvalidConfig(
                "At least one placement attempt per word is required".to_string(),
            ));
        }
        Filler::new(&self.alphabet)?;
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordfindResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WordfindResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::seq::SliceRandom;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Shuffles a word list in place.
    pub fn shuffle_words(words: &mut [String], rng: &mut StdRng) {
        words.shuffle(rng);
    }

    /// Validates that every cell of a finished grid holds a letter.
    pub fn validate_grid(grid: &Grid, dimension: usize) -> WordfindResult<()> {
        if grid.dimension() != dimension || grid.rows().len() != dimension {
            return Err(WordfindError::GenerationFailed(format!(
                "Grid is {} rows, expected {}",
                grid.rows().len(),
                dimension
            )));
        }

        if let Some(row) = grid.rows().iter().position(|row| row.len() != dimension) {
            return Err(WordfindError::GenerationFailed(format!(
                "Row {} does not have {} cells",
                row, dimension
            )));
        }

        if let Some((pos, cell)) = grid
            .cells()
            .find(|(_, cell)| !cell.is_filled() || !cell.letter.is_alphabetic())
        {
            return Err(WordfindError::GenerationFailed(format!(
                "Cell {} holds '{}' instead of a letter",
                pos, cell.letter
            )));
        }

        Ok(())
    }
}
