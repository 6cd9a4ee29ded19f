//! # Game Events
//!
//! Notifications emitted by the board, gesture and selection systems.

use crate::game::{Position, RoundId, WordId};
use serde::{Deserialize, Serialize};

/// Something that happened during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was generated
    RoundStarted {
        round_id: RoundId,
        dimension: usize,
        placed_words: usize,
    },
    /// A tile's selected flag changed during a gesture
    TileToggled { position: Position, selected: bool },
    /// A press/drag/release gesture finished
    GestureEnded { selected_tiles: usize },
    /// A word was completely selected and cleared
    WordFound {
        word_id: WordId,
        word: String,
        /// Whether every word tile on the board is now cleared
        all_cleared: bool,
    },
    /// Text for the message log
    Message {
        text: String,
        importance: MessageImportance,
    },
}

/// How prominently a message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageImportance {
    Info,
    Success,
    Warning,
}

impl GameEvent {
    /// Creates an informational message event.
    pub fn message(text: impl Into<String>) -> Self {
        GameEvent::Message {
            text: text.into(),
            importance: MessageImportance::Info,
        }
    }
}
