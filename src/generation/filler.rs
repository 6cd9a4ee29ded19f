//! # Filler Letters
//!
//! Random letters written to every cell no word claimed.

use crate::config::UNFILLED;
use crate::game::Grid;
use crate::{WordfindError, WordfindResult};
use rand::rngs::StdRng;
use rand::Rng;

/// Draws filler letters uniformly from a fixed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filler {
    alphabet: Vec<char>,
}

impl Filler {
    /// Creates a filler over the characters of `alphabet`.
    ///
    /// The alphabet must be non-empty and contain only letters.
    pub fn new(alphabet: &str) -> WordfindResult<Self> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(WordfindError::InvalidConfig(
                "Filler alphabet is empty".to_string(),
            ));
        }
        if let Some(bad) = alphabet
            .iter()
            .find(|&&c| c == UNFILLED || !c.is_alphabetic())
        {
            return Err(WordfindError::InvalidConfig(format!(
                "Filler alphabet contains non-letter '{}'",
                bad
            )));
        }
        Ok(Self { alphabet })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Picks one filler letter.
    pub fn random_char(&self, rng: &mut StdRng) -> char {
        self.alphabet[rng.gen_range(0..self.alphabet.len())]
    }

    /// Fills every unfilled cell and returns how many were filled.
    pub fn fill(&self, grid: &mut Grid, rng: &mut StdRng) -> usize {
        let unfilled: Vec<_> = grid
            .cells()
            .filter(|(_, cell)| !cell.is_filled())
            .map(|(pos, _)| pos)
            .collect();

        for &pos in &unfilled {
            let letter = self.random_char(rng);
            if let Some(cell) = grid.get_mut(pos) {
                cell.letter = letter;
            }
        }

        unfilled.len()
    }
}
