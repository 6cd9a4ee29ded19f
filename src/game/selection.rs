//! # Selection Tracking
//!
//! The word-completion check run when a gesture ends.
//!
//! A word counts as found only when the whole selection is exactly that
//! word's tiles: the number of selected tiles, the number of tiles carrying
//! the word's tag, and the number of selected tiles carrying the tag must all
//! be equal.

use crate::game::{Axis, Board, GameEvent, Position, WordId, WordTable};
use crate::WordfindResult;
use log::debug;
use std::collections::BTreeSet;

/// Runs the completion check over a board.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionTracker;

/// A word whose tiles exactly match the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CompletedWord {
    axis: Axis,
    word_id: WordId,
    positions: Vec<Position>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self
    }

    /// Clears every word that the current selection completes.
    ///
    /// Returns one `WordFound` event per newly found word. A word that was
    /// already found is not reported again; its tiles are just deselected.
    pub fn check_completion(
        &self,
        board: &mut Board,
        words: &mut WordTable,
    ) -> WordfindResult<Vec<GameEvent>> {
        let completed = self.completed_words(board);
        let mut events = Vec::new();

        for CompletedWord {
            axis,
            word_id,
            positions,
        } in completed
        {
            if words.is_found(word_id) {
                debug!("Word {} selected again after being found", word_id);
                board.deselect(&positions)?;
                continue;
            }

            board.mark_cleared(&positions)?;
            words.mark_found(word_id);

            let word = words.text(word_id).unwrap_or_default().to_string();
            let all_cleared = board.all_words_cleared();
            debug!(
                "Word {} '{}' found {} (all cleared: {})",
                word_id, word, axis, all_cleared
            );

            events.push(GameEvent::WordFound {
                word_id,
                word,
                all_cleared,
            });
        }

        Ok(events)
    }

    /// Finds the words the selection completes, without changing the board.
    fn completed_words(&self, board: &Board) -> Vec<CompletedWord> {
        let selected = board.selected_positions();
        if selected.is_empty() {
            return Vec::new();
        }

        let candidates: BTreeSet<(Axis, WordId)> = selected
            .iter()
            .filter_map(|&pos| board.cell(pos))
            .flat_map(|cell| cell.tags())
            .collect();

        candidates
            .into_iter()
            .filter_map(|(axis, word_id)| {
                let positions = board.word_positions(axis, word_id);
                let selected_in_word = positions
                    .iter()
                    .filter(|&&pos| board.is_selected(pos))
                    .count();

                let complete =
                    selected.len() == positions.len() && positions.len() == selected_in_word;
                complete.then_some(CompletedWord {
                    axis,
                    word_id,
                    positions,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Grid;
    use crate::generation::{Placement, PlacedWord};

    /// 5x5 board with "word" across on row 0 and "dart" down from (3, 0).
    fn fixture() -> (Board, WordTable) {
        let mut grid = Grid::new(5);
        let placed = vec![
            PlacedWord::new(WordId(0), "word", Placement::new(Position::new(0, 0), Axis::Across)),
            PlacedWord::new(WordId(1), "dart", Placement::new(Position::new(3, 0), Axis::Down)),
        ];
        for word in &placed {
            for (pos, letter) in word.cells() {
                if let Some(cell) = grid.get_mut(pos) {
                    cell.letter = letter;
                    cell.set_tag(word.placement.axis, word.id);
                }
            }
        }
        (Board::new(grid), WordTable::new(placed))
    }

    fn select(board: &mut Board, positions: &[Position]) {
        for &pos in positions {
            board.set_selected(pos, true).unwrap();
        }
    }

    #[test]
    fn test_exact_selection_finds_word() {
        let (mut board, mut words) = fixture();
        let word_cells = board.word_positions(Axis::Across, WordId(0));
        select(&mut board, &word_cells);

        let events = SelectionTracker::new()
            .check_completion(&mut board, &mut words)
            .unwrap();

        assert_eq!(
            events,
            vec![GameEvent::WordFound {
                word_id: WordId(0),
                word: "word".to_string(),
                all_cleared: false,
            }]
        );
        assert!(words.is_found(WordId(0)));
        assert!(board.selected_positions().is_empty());
        assert!(word_cells.iter().all(|&pos| board.is_cleared(pos)));
    }

    #[test]
    fn test_partial_selection_finds_nothing() {
        let (mut board, mut words) = fixture();
        let word_cells = board.word_positions(Axis::Across, WordId(0));
        select(&mut board, &word_cells[..3]);

        let events = SelectionTracker::new()
            .check_completion(&mut board, &mut words)
            .unwrap();

        assert!(events.is_empty());
        assert_eq!(board.selected_positions().len(), 3);
    }

    #[test]
    fn test_extra_tile_finds_nothing() {
        let (mut board, mut words) = fixture();
        let mut cells = board.word_positions(Axis::Across, WordId(0));
        cells.push(Position::new(0, 4));
        select(&mut board, &cells);

        let events = SelectionTracker::new()
            .check_completion(&mut board, &mut words)
            .unwrap();

        assert!(events.is_empty());
        assert!(!words.is_found(WordId(0)));
    }

    #[test]
    fn test_crossing_word_found_through_shared_tile() {
        let (mut board, mut words) = fixture();
        let down_cells = board.word_positions(Axis::Down, WordId(1));
        assert!(down_cells.contains(&Position::new(3, 0)));
        select(&mut board, &down_cells);

        let events = SelectionTracker::new()
            .check_completion(&mut board, &mut words)
            .unwrap();

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::WordFound { word_id: WordId(1), .. }
        ));
    }

    #[test]
    fn test_last_word_reports_all_cleared() {
        let (mut board, mut words) = fixture();
        let tracker = SelectionTracker::new();

        let across = board.word_positions(Axis::Across, WordId(0));
        select(&mut board, &across);
        tracker.check_completion(&mut board, &mut words).unwrap();

        let down = board.word_positions(Axis::Down, WordId(1));
        select(&mut board, &down);
        let events = tracker.check_completion(&mut board, &mut words).unwrap();

        assert_eq!(
            events,
            vec![GameEvent::WordFound {
                word_id: WordId(1),
                word: "dart".to_string(),
                all_cleared: true,
            }]
        );
    }

    #[test]
    fn test_found_word_is_not_reported_twice() {
        let (mut board, mut words) = fixture();
        let tracker = SelectionTracker::new();
        let across = board.word_positions(Axis::Across, WordId(0));

        select(&mut board, &across);
        assert_eq!(tracker.check_completion(&mut board, &mut words).unwrap().len(), 1);

        select(&mut board, &across);
        let events = tracker.check_completion(&mut board, &mut words).unwrap();
        assert!(events.is_empty());
        assert!(board.selected_positions().is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let (mut board, mut words) = fixture();
        let events = SelectionTracker::new()
            .check_completion(&mut board, &mut words)
            .unwrap();
        assert!(events.is_empty());
    }
}
