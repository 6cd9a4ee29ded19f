//! # Puzzle Generation
//!
//! Word placement for the word-search grid.
//!
//! Words are tried in input order. Each attempt picks a random axis and a
//! random origin where the word fits, and succeeds when every cell along the
//! span is either unfilled or already holds the same letter. Crossings are
//! therefore allowed, but a cell never belongs to two words on the same axis.
//! A word that fails every attempt is dropped.

use crate::game::{Axis, Grid, Position, WordId};
use crate::generation::{utils, Filler, GenerationConfig, Generator};
use crate::{WordfindError, WordfindResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a word sits on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// First letter of the word
    pub origin: Position,
    pub axis: Axis,
}

impl Placement {
    pub fn new(origin: Position, axis: Axis) -> Self {
        Self { origin, axis }
    }

    /// Positions covered by a word of `len` letters.
    pub fn span(self, len: usize) -> impl Iterator<Item = Position> {
        (0..len).map(move |i| self.origin.step(self.axis, i))
    }
}

/// A word that made it onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub id: WordId,
    pub text: String,
    pub placement: Placement,
}

impl PlacedWord {
    pub fn new(id: WordId, text: impl Into<String>, placement: Placement) -> Self {
        Self {
            id,
            text: text.into(),
            placement,
        }
    }

    /// Length in letters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Positions the word covers, first letter first.
    pub fn positions(&self) -> Vec<Position> {
        self.placement.span(self.len()).collect()
    }

    /// Each covered position paired with its letter.
    pub fn cells(&self) -> Vec<(Position, char)> {
        self.placement.span(self.len()).zip(self.text.chars()).collect()
    }
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    /// Fully filled grid
    pub grid: Grid,
    /// Words that were placed, in placement order; ids are their indices
    pub placed: Vec<PlacedWord>,
    /// Candidate words left off the board: filtered out, unplaceable, or
    /// past the placement cap
    pub dropped: Vec<String>,
}

impl PuzzleResult {
    /// Gets a placed word by its text.
    pub fn find(&self, text: &str) -> Option<&PlacedWord> {
        self.placed.iter().find(|word| word.text == text)
    }

    /// Texts of the placed words.
    pub fn placed_texts(&self) -> Vec<&str> {
        self.placed.iter().map(|word| word.text.as_str()).collect()
    }
}

/// Normalizes a raw word: trimmed and lowercased.
///
/// Returns None for empty words and words containing anything but letters.
///
/// # Examples
///
/// ```
/// use wordfind::normalize_word;
///
/// assert_eq!(normalize_word("  Älg "), Some("älg".to_string()));
/// assert_eq!(normalize_word("ice cream"), None);
/// assert_eq!(normalize_word(""), None);
/// ```
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(word)
}

/// Generator that lays out a word list on a square grid.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    words: Vec<String>,
}

impl PuzzleGenerator {
    /// Creates a generator for the given candidate words, tried in order.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Normalizes the candidates and splits off those that can never fit.
    fn candidates(&self, dimension: usize) -> (Vec<String>, Vec<String>) {
        let mut usable = Vec::new();
        let mut rejected = Vec::new();

        for raw in &self.words {
            match normalize_word(raw) {
                Some(word) if word.chars().count() <= dimension => usable.push(word),
                Some(word) => {
                    debug!(
                        "Skipping '{}': longer than the {}x{} grid",
                        word, dimension, dimension
                    );
                    rejected.push(word);
                }
                None => {
                    warn!("Skipping malformed word '{}'", raw);
                    rejected.push(raw.clone());
                }
            }
        }

        (usable, rejected)
    }

    /// Picks a random axis and an origin where a word of `len` letters fits.
    fn random_placement(&self, len: usize, dimension: usize, rng: &mut StdRng) -> Placement {
        let axis = if rng.gen_bool(0.5) {
            Axis::Across
        } else {
            Axis::Down
        };
        let along = rng.gen_range(0..=dimension - len);
        let across = rng.gen_range(0..dimension);

        let origin = match axis {
            Axis::Across => Position::new(along, across),
            Axis::Down => Position::new(across, along),
        };
        Placement::new(origin, axis)
    }

    /// Tries to place one word, returning where it went.
    fn try_place(
        &self,
        grid: &mut Grid,
        id: WordId,
        word: &str,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();

        for attempt in 0..config.max_attempts_per_word {
            let placement = self.random_placement(letters.len(), config.dimension, rng);
            if can_place(grid, &letters, placement) {
                place(grid, id, &letters, placement);
                debug!(
                    "Placed '{}' {} at {} after {} attempt(s)",
                    word,
                    placement.axis,
                    placement.origin,
                    attempt + 1
                );
                return Some(placement);
            }
        }

        None
    }
}

/// Whether `letters` can be written at `placement`.
///
/// Every covered cell must be on the grid, carry no word on the same axis,
/// and be unfilled or hold the same letter.
pub fn can_place(grid: &Grid, letters: &[char], placement: Placement) -> bool {
    placement
        .span(letters.len())
        .zip(letters)
        .all(|(pos, &letter)| match grid.get(pos) {
            Some(cell) => {
                cell.tag(placement.axis).is_none() && (!cell.is_filled() || cell.letter == letter)
            }
            None => false,
        })
}

/// Writes `letters` at `placement` and tags the cells with `id`.
fn place(grid: &mut Grid, id: WordId, letters: &[char], placement: Placement) {
    for (pos, &letter) in placement.span(letters.len()).zip(letters) {
        if let Some(cell) = grid.get_mut(pos) {
            cell.letter = letter;
            cell.set_tag(placement.axis, id);
        }
    }
}

impl Generator<PuzzleResult> for PuzzleGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordfindResult<PuzzleResult> {
        config.validate()?;
        if self.words.is_empty() {
            return Err(WordfindError::InvalidInput(
                "Word list is empty".to_string(),
            ));
        }

        let filler = Filler::new(&config.alphabet)?;
        let (candidates, mut dropped) = self.candidates(config.dimension);
        let mut grid = Grid::new(config.dimension);
        let mut placed: Vec<PlacedWord> = Vec::new();

        let mut candidates = candidates.into_iter();
        while let Some(word) = candidates.next() {
            if config
                .max_words_to_place
                .is_some_and(|max| placed.len() >= max)
            {
                debug!("Reached the cap of {} placed words", placed.len());
                dropped.push(word);
                dropped.extend(candidates);
                break;
            }

            let id = WordId(placed.len());
            match self.try_place(&mut grid, id, &word, config, rng) {
                Some(placement) => placed.push(PlacedWord::new(id, word, placement)),
                None => {
                    debug!(
                        "Dropping '{}' after {} attempts",
                        word, config.max_attempts_per_word
                    );
                    dropped.push(word);
                }
            }
        }

        let filled = filler.fill(&mut grid, rng);
        info!(
            "Generated {}x{} puzzle: {} word(s) placed, {} dropped, {} filler cell(s)",
            config.dimension,
            config.dimension,
            placed.len(),
            dropped.len(),
            filled
        );

        let result = PuzzleResult {
            grid,
            placed,
            dropped,
        };
        self.validate(&result, config)?;
        Ok(result)
    }

    fn validate(&self, content: &PuzzleResult, config: &GenerationConfig) -> WordfindResult<()> {
        utils::validate_grid(&content.grid, config.dimension)?;

        if let Some(max) = config.max_words_to_place {
            if content.placed.len() > max {
                return Err(WordfindError::GenerationFailed(format!(
                    "Placed {} words, cap is {}",
                    content.placed.len(),
                    max
                )));
            }
        }

        for (index, word) in content.placed.iter().enumerate() {
            if word.id != WordId(index) {
                return Err(WordfindError::GenerationFailed(format!(
                    "Word '{}' has id {} at index {}",
                    word.text, word.id, index
                )));
            }

            let read = content
                .grid
                .read_span(word.placement.origin, word.placement.axis, word.len());
            if read.as_deref() != Some(word.text.as_str()) {
                return Err(WordfindError::GenerationFailed(format!(
                    "Word '{}' reads back as {:?}",
                    word.text, read
                )));
            }

            for pos in word.positions() {
                let tagged = content
                    .grid
                    .get(pos)
                    .is_some_and(|cell| cell.has_tag(word.placement.axis, word.id));
                if !tagged {
                    return Err(WordfindError::GenerationFailed(format!(
                        "Cell {} is not tagged with word '{}'",
                        pos, word.text
                    )));
                }
            }
        }

        for (pos, cell) in content.grid.cells() {
            for (axis, id) in cell.tags() {
                let owner = content
                    .placed
                    .get(id.0)
                    .filter(|word| word.placement.axis == axis);
                match owner {
                    Some(word) if word.positions().contains(&pos) => {}
                    _ => {
                        return Err(WordfindError::GenerationFailed(format!(
                            "Cell {} carries stray {} tag {}",
                            pos, axis, id
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "PuzzleGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn generate(list: &[&str], config: &GenerationConfig) -> WordfindResult<PuzzleResult> {
        let mut rng = utils::create_rng(config);
        PuzzleGenerator::new(words(list)).generate(config, &mut rng)
    }

    #[test]
    fn test_can_place_on_empty_grid() {
        let grid = Grid::new(5);
        let letters: Vec<char> = "cat".chars().collect();
        assert!(can_place(&grid, &letters, Placement::new(Position::new(2, 0), Axis::Across)));
        assert!(!can_place(&grid, &letters, Placement::new(Position::new(3, 0), Axis::Across)));
        assert!(can_place(&grid, &letters, Placement::new(Position::new(4, 2), Axis::Down)));
        assert!(!can_place(&grid, &letters, Placement::new(Position::new(4, 3), Axis::Down)));
    }

    #[test]
    fn test_crossing_on_matching_letter() {
        let mut grid = Grid::new(5);
        let cat: Vec<char> = "cat".chars().collect();
        let tag: Vec<char> = "tag".chars().collect();
        place(&mut grid, WordId(0), &cat, Placement::new(Position::new(0, 0), Axis::Across));

        // "tag" down from the 't' of "cat"
        let crossing = Placement::new(Position::new(2, 0), Axis::Down);
        assert!(can_place(&grid, &tag, crossing));
        place(&mut grid, WordId(1), &tag, crossing);

        let shared = grid.get(Position::new(2, 0)).unwrap();
        assert_eq!(shared.across, Some(WordId(0)));
        assert_eq!(shared.down, Some(WordId(1)));
    }

    #[test]
    fn test_conflicting_letter_rejected() {
        let mut grid = Grid::new(5);
        let cat: Vec<char> = "cat".chars().collect();
        let dog: Vec<char> = "dog".chars().collect();
        place(&mut grid, WordId(0), &cat, Placement::new(Position::new(0, 0), Axis::Across));

        assert!(!can_place(&grid, &dog, Placement::new(Position::new(1, 0), Axis::Down)));
    }

    #[test]
    fn test_same_axis_overlap_rejected() {
        let mut grid = Grid::new(5);
        let cat: Vec<char> = "cat".chars().collect();
        let at: Vec<char> = "at".chars().collect();
        place(&mut grid, WordId(0), &cat, Placement::new(Position::new(0, 0), Axis::Across));

        // Letters match, but the cells already belong to an across word
        assert!(!can_place(&grid, &at, Placement::new(Position::new(1, 0), Axis::Across)));
        assert!(can_place(&grid, &at, Placement::new(Position::new(1, 0), Axis::Down)));
    }

    #[test]
    fn test_random_placement_stays_in_bounds() {
        let generator = PuzzleGenerator::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(99);
        for len in 1..=6 {
            for _ in 0..50 {
                let placement = generator.random_placement(len, 6, &mut rng);
                assert!(placement.span(len).all(|pos| pos.x < 6 && pos.y < 6));
            }
        }
    }

    #[test]
    fn test_empty_word_list_is_error() {
        let config = GenerationConfig::for_testing(1);
        assert!(matches!(
            generate(&[], &config),
            Err(WordfindError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_dimension_is_error() {
        let config = GenerationConfig::for_testing(1).with_dimension(0);
        assert!(matches!(
            generate(&["cat"], &config),
            Err(WordfindError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_too_long_word_filtered() {
        let config = GenerationConfig::for_testing(1).with_dimension(3);
        let result = generate(&["hello"], &config).unwrap();

        assert!(result.placed.is_empty());
        assert_eq!(result.dropped, vec!["hello".to_string()]);
        assert_eq!(result.grid.unfilled_count(), 0);
        assert!(result.grid.cells().all(|(_, cell)| !cell.is_tagged()));
    }

    #[test]
    fn test_word_filling_whole_row_fits() {
        let config = GenerationConfig::for_testing(5).with_dimension(4);
        let result = generate(&["frog"], &config).unwrap();
        assert_eq!(result.placed_texts(), vec!["frog"]);
    }

    #[test]
    fn test_words_are_normalized() {
        let config = GenerationConfig::for_testing(2);
        let result = generate(&["  CAT ", "no way", ""], &config).unwrap();

        assert_eq!(result.placed_texts(), vec!["cat"]);
        assert_eq!(result.dropped.len(), 2);
    }

    #[test]
    fn test_max_words_cap() {
        let config = GenerationConfig::for_testing(3).with_max_words(1);
        let result = generate(&["cat", "dog", "owl"], &config).unwrap();

        assert_eq!(result.placed.len(), 1);
        assert_eq!(result.placed[0].text, "cat");
        assert_eq!(result.dropped, words(&["dog", "owl"]));
    }

    #[test]
    fn test_first_word_always_placed() {
        for seed in 0..20 {
            let config = GenerationConfig::for_testing(seed);
            let result = generate(&["seven"], &config).unwrap();
            assert_eq!(result.placed.len(), 1);
        }
    }

    #[test]
    fn test_accented_words_read_back() {
        let config = GenerationConfig::for_testing(8);
        let result = generate(&["älg", "björn"], &config).unwrap();

        for word in &result.placed {
            let read = result
                .grid
                .read_span(word.placement.origin, word.placement.axis, word.len());
            assert_eq!(read.as_deref(), Some(word.text.as_str()));
        }
        assert!(result.find("älg").is_some());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = GenerationConfig::for_testing(4242);
        let list = ["cat", "dog", "bird", "fish", "mouse"];
        assert_eq!(generate(&list, &config).unwrap(), generate(&list, &config).unwrap());
    }

    #[test]
    fn test_validate_detects_corruption() {
        let config = GenerationConfig::for_testing(6);
        let generator = PuzzleGenerator::new(words(&["cat"]));
        let mut result = generator
            .generate(&config, &mut utils::create_rng(&config))
            .unwrap();

        let origin = result.placed[0].placement.origin;
        if let Some(cell) = result.grid.get_mut(origin) {
            cell.letter = if cell.letter == 'z' { 'y' } else { 'z' };
        }
        assert!(generator.validate(&result, &config).is_err());
    }

    #[test]
    fn test_generator_type() {
        assert_eq!(PuzzleGenerator::new(Vec::new()).generator_type(), "PuzzleGenerator");
    }
}
