//! # Game State Module
//!
//! Central state of one Wordfind round.
//!
//! `GameState` owns the board produced by the generator, the table of placed
//! words, the gesture in progress and the round statistics. Pointer events go
//! in, game events come out.

use crate::game::{
    new_round_id, Board, GameEvent, Gesture, MessageImportance, PointerEvent, RoundId,
    SelectionMode, SelectionTracker, WordTable,
};
use crate::generation::{utils, GenerationConfig, Generator, PlacedWord, PuzzleGenerator, PuzzleResult};
use crate::wordlist::WordSource;
use crate::{WordfindError, WordfindResult};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// State of a single round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Identity of this round, for logs and saves
    pub round_id: RoundId,
    /// Configuration the board was generated with
    pub config: GenerationConfig,
    /// Candidate words as supplied, before shuffling and filtering
    pub source_words: Vec<String>,
    /// The frozen board and its tile flags
    pub board: Board,
    /// Words placed on the board and their progress
    pub words: WordTable,
    /// Candidate words that did not make it onto the board
    pub dropped_words: Vec<String>,
    /// Gesture in progress
    pub gesture: Gesture,
    /// Statistics for this round
    pub statistics: RoundStatistics,
    /// Current completion state
    pub completion_state: GameCompletionState,
    /// Round start time
    #[serde(skip)]
    pub round_start_time: Option<Instant>,
    #[serde(skip)]
    tracker: SelectionTracker,
}

/// Statistics tracking player progress within a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStatistics {
    /// Completed press/drag/release gestures
    pub gestures: u32,
    /// Tile selection changes
    pub tiles_toggled: u32,
    /// Words found
    pub words_found: u32,
}

impl RoundStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TileToggled { .. } => self.tiles_toggled += 1,
            GameEvent::GestureEnded { .. } => self.gestures += 1,
            GameEvent::WordFound { .. } => self.words_found += 1,
            _ => {}
        }
    }
}

/// Whether the round is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Words remain to be found
    Playing,
    /// Every word tile has been cleared
    AllWordsFound,
    /// No candidate word fit on the board, so there is nothing to find
    NoWordsPlaced,
}

/// Timing information for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimeInfo {
    pub elapsed_time: Duration,
    pub gestures: u32,
}

impl GameState {
    /// Generates a board and starts a round.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfind::{GameState, GenerationConfig, SelectionMode};
    ///
    /// let words = vec!["cat".to_string(), "dog".to_string()];
    /// let state = GameState::new_round(words, GenerationConfig::for_testing(1), SelectionMode::Toggle).unwrap();
    /// assert_eq!(state.board.dimension(), 7);
    /// assert!(!state.is_complete());
    /// ```
    pub fn new_round(
        words: Vec<String>,
        config: GenerationConfig,
        mode: SelectionMode,
    ) -> WordfindResult<Self> {
        let puzzle = Self::generate_puzzle(&words, &config)?;
        let round_id = new_round_id();
        info!(
            "Round {} started with seed {}: {} of {} words placed",
            round_id,
            config.seed,
            puzzle.placed.len(),
            words.len()
        );

        let completion_state = if puzzle.placed.is_empty() {
            warn!("Round {} has no words to find", round_id);
            GameCompletionState::NoWordsPlaced
        } else {
            GameCompletionState::Playing
        };

        Ok(Self {
            round_id,
            config,
            source_words: words,
            board: Board::new(puzzle.grid),
            words: WordTable::new(puzzle.placed),
            dropped_words: puzzle.dropped,
            gesture: Gesture::new(mode),
            statistics: RoundStatistics::new(),
            completion_state,
            round_start_time: Some(Instant::now()),
            tracker: SelectionTracker::new(),
        })
    }

    /// Starts a round with the words of a word source.
    pub fn from_source(
        source: &dyn WordSource,
        config: GenerationConfig,
        mode: SelectionMode,
    ) -> WordfindResult<Self> {
        info!("Using word source '{}'", source.name());
        Self::new_round(source.words()?, config, mode)
    }

    /// Shuffles (if configured) and generates.
    fn generate_puzzle(words: &[String], config: &GenerationConfig) -> WordfindResult<PuzzleResult> {
        let mut rng = utils::create_rng(config);
        let mut candidates = words.to_vec();
        if config.shuffle_words {
            utils::shuffle_words(&mut candidates, &mut rng);
        }
        PuzzleGenerator::new(candidates).generate(config, &mut rng)
    }

    /// Event announcing the current round.
    pub fn round_started_event(&self) -> GameEvent {
        GameEvent::RoundStarted {
            round_id: self.round_id,
            dimension: self.board.dimension(),
            placed_words: self.words.len(),
        }
    }

    /// Warnings about words that did not make it onto the board.
    pub fn round_notices(&self) -> Vec<GameEvent> {
        let mut notices = Vec::new();
        if !self.dropped_words.is_empty() {
            notices.push(GameEvent::Message {
                text: format!(
                    "{} word(s) left off the board",
                    self.dropped_words.len()
                ),
                importance: MessageImportance::Warning,
            });
        }
        if self.completion_state == GameCompletionState::NoWordsPlaced {
            notices.push(GameEvent::Message {
                text: "No word fits this board, press N for a new game".to_string(),
                importance: MessageImportance::Warning,
            });
        }
        notices
    }

    /// Words placed on the board, in placement order.
    pub fn placed_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter().map(|entry| &entry.placed)
    }

    /// Feeds a pointer event through the gesture and, when the gesture ends,
    /// runs the completion check.
    ///
    /// Returns the events produced, followed by the responses to them.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> WordfindResult<Vec<GameEvent>> {
        if self.is_complete() {
            return Ok(Vec::new());
        }

        let step = self.gesture.handle(&mut self.board, event)?;
        let mut events = step.events;

        if step.ended {
            events.push(GameEvent::GestureEnded {
                selected_tiles: self.board.selected_positions().len(),
            });
            let found = self
                .tracker
                .check_completion(&mut self.board, &mut self.words)?;
            events.extend(found);
        }

        let mut responses = Vec::new();
        for event in &events {
            responses.extend(self.process_event(event)?);
        }
        events.extend(responses);

        Ok(events)
    }

    /// Processes a game event and returns any resulting events.
    pub fn process_event(&mut self, event: &GameEvent) -> WordfindResult<Vec<GameEvent>> {
        self.statistics.update_from_event(event);
        let mut responses = Vec::new();

        match event {
            GameEvent::WordFound {
                word, all_cleared, ..
            } => {
                responses.push(GameEvent::Message {
                    text: format!("Found \"{}\"!", word.to_uppercase()),
                    importance: MessageImportance::Success,
                });

                if *all_cleared {
                    self.completion_state = GameCompletionState::AllWordsFound;
                    let elapsed = self.get_round_time_info().elapsed_time;
                    info!(
                        "Round {} complete after {} gestures in {}s",
                        self.round_id,
                        self.statistics.gestures,
                        elapsed.as_secs()
                    );
                    responses.push(GameEvent::Message {
                        text: "All words found!".to_string(),
                        importance: MessageImportance::Success,
                    });
                }
            }
            GameEvent::GestureEnded { selected_tiles } => {
                debug!("Gesture ended with {} tile(s) selected", selected_tiles);
            }
            _ => {}
        }

        Ok(responses)
    }

    /// Discards the board and generates a new one from the same words.
    ///
    /// A seed equal to the current one is bumped so the new board differs.
    pub fn reset_for_new_game(&mut self, seed: u64) -> WordfindResult<GameEvent> {
        let seed = if seed == self.config.seed {
            seed.wrapping_add(1)
        } else {
            seed
        };
        let config = GenerationConfig {
            seed,
            ..self.config.clone()
        };
        let fresh = Self::new_round(self.source_words.clone(), config, self.gesture.mode());

        match fresh {
            Ok(fresh) => {
                *self = fresh;
                Ok(self.round_started_event())
            }
            Err(e) => Err(WordfindError::InvalidState(format!(
                "Could not start a new round: {}",
                e
            ))),
        }
    }

    /// Whether the round is over, either won or with nothing to find.
    pub fn is_complete(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    pub fn get_completion_state(&self) -> GameCompletionState {
        self.completion_state
    }

    /// Gets timing information for display.
    pub fn get_round_time_info(&self) -> RoundTimeInfo {
        RoundTimeInfo {
            elapsed_time: self
                .round_start_time
                .map(|start| start.elapsed())
                .unwrap_or_default(),
            gestures: self.statistics.gestures,
        }
    }

    /// Saves the round to a JSON string.
    pub fn save_to_json(&self) -> WordfindResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a round from a JSON string.
    pub fn load_from_json(json: &str) -> WordfindResult<Self> {
        let mut state: Self = serde_json::from_str(json)?;
        state.gesture.cancel();
        state.round_start_time = Some(Instant::now());
        Ok(state)
    }
}
