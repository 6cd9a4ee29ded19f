//! # Gesture Handling
//!
//! The press/drag/release state machine that turns pointer events into tile
//! selection changes.
//!
//! ```text
//!   Idle --press--> Dragging --release/leave--> Idle
//!                    |    ^
//!                    +----+ enter (new tile)
//! ```

use crate::game::{Board, GameEvent, Position};
use crate::WordfindResult;
use serde::{Deserialize, Serialize};

/// How pressing or entering a tile changes its selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Flip the selected flag, so revisiting a tile deselects it
    #[default]
    Toggle,
    /// Always select; tiles are only deselected by clearing a word
    SelectOnly,
}

/// Pointer input already resolved to board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer pressed on a tile
    Press(Position),
    /// Pointer moved onto a tile
    Enter(Position),
    /// Pointer released
    Release,
    /// Pointer left the board
    Leave,
}

/// Current phase of a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Idle,
    /// A press is in progress; `last` is the most recently visited tile
    Dragging { last: Position },
}

/// Result of feeding one pointer event to a gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureStep {
    /// Tile changes caused by this event
    pub events: Vec<GameEvent>,
    /// True exactly when this event moved the gesture from Dragging to Idle
    pub ended: bool,
}

/// Press/drag/release state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    state: GestureState,
    mode: SelectionMode,
}

impl Gesture {
    /// Creates an idle gesture with the given selection mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfind::{Gesture, GestureState, SelectionMode};
    ///
    /// let gesture = Gesture::new(SelectionMode::Toggle);
    /// assert_eq!(gesture.state(), GestureState::Idle);
    /// ```
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            state: GestureState::Idle,
            mode,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Feeds one pointer event through the state machine.
    pub fn handle(&mut self, board: &mut Board, event: PointerEvent) -> WordfindResult<GestureStep> {
        let mut step = GestureStep::default();

        match (self.state, event) {
            (_, PointerEvent::Press(pos)) => {
                self.apply(board, pos, &mut step)?;
                self.state = GestureState::Dragging { last: pos };
            }
            (GestureState::Dragging { last }, PointerEvent::Enter(pos)) => {
                if pos != last {
                    self.apply(board, pos, &mut step)?;
                    self.state = GestureState::Dragging { last: pos };
                }
            }
            (GestureState::Dragging { .. }, PointerEvent::Release | PointerEvent::Leave) => {
                self.state = GestureState::Idle;
                step.ended = true;
            }
            (GestureState::Idle, _) => {}
        }

        Ok(step)
    }

    /// Drops any gesture in progress without ending it.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    fn apply(&self, board: &mut Board, pos: Position, step: &mut GestureStep) -> WordfindResult<()> {
        match self.mode {
            SelectionMode::Toggle => {
                let selected = board.toggle_selected(pos)?;
                step.events.push(GameEvent::TileToggled {
                    position: pos,
                    selected,
                });
            }
            SelectionMode::SelectOnly => {
                if board.set_selected(pos, true)? {
                    step.events.push(GameEvent::TileToggled {
                        position: pos,
                        selected: true,
                    });
                }
            }
        }
        Ok(())
    }
}
