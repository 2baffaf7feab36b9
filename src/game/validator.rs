use crate::models::{Grid, PlacedWord, Position, Puzzle};
use std::collections::HashSet;

/// Reads placed words back out of a grid and matches player selections against them
pub struct SelectionValidator;

impl SelectionValidator {
    /// Cells covered by a placed word, from its start to its end.
    ///
    /// The step is rebuilt from the sign of each axis delta, so the record
    /// alone is enough to recover the path.
    pub fn path(placed: &PlacedWord) -> Vec<Position> {
        let dir = placed.direction();
        (0..placed.word.chars().count() as i64)
            .map(|i| Position {
                row: (placed.start_y as i64 + i * dir.dy as i64) as usize,
                col: (placed.start_x as i64 + i * dir.dx as i64) as usize,
            })
            .collect()
    }

    /// Extract word from grid positions. `None` if any position is off the grid.
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> Option<String> {
        positions
            .iter()
            .map(|pos| grid.get(pos.row).and_then(|row| row.get(pos.col)).copied())
            .collect()
    }

    /// Validate that positions form a straight run of neighbouring cells on a
    /// `size`x`size` grid
    pub fn is_valid_selection(positions: &[Position], size: usize) -> bool {
        if positions.is_empty() {
            return false;
        }

        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Every step must repeat the first one
        let steps: HashSet<_> = positions
            .windows(2)
            .map(|w| Self::step(&w[0], &w[1]))
            .collect();
        if steps.len() > 1 {
            return false;
        }

        let unique_positions: HashSet<_> = positions.iter().collect();
        if unique_positions.len() != positions.len() {
            return false;
        }

        positions.iter().all(|pos| pos.row < size && pos.col < size)
    }

    fn step(from: &Position, to: &Position) -> (i64, i64) {
        (
            to.row as i64 - from.row as i64,
            to.col as i64 - from.col as i64,
        )
    }

    /// Check if two positions are adjacent (including diagonals)
    fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = (pos1.row as i64 - pos2.row as i64).abs();
        let col_diff = (pos1.col as i64 - pos2.col as i64).abs();

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// The first placed word not yet found whose text equals the selected
    /// letters, read either way round.
    pub fn match_selection<'a>(
        puzzle: &'a Puzzle,
        found: &[String],
        positions: &[Position],
    ) -> Option<&'a PlacedWord> {
        if !Self::is_valid_selection(positions, puzzle.size()) {
            return None;
        }

        let selected = Self::extract_word(&puzzle.grid, positions)?;
        let reversed: String = selected.chars().rev().collect();

        puzzle
            .placed_words
            .iter()
            .find(|p| (p.word == selected || p.word == reversed) && !found.contains(&p.word))
    }

    /// First letter of the first placed word not yet found
    pub fn hint(puzzle: &Puzzle, found: &[String]) -> Option<char> {
        puzzle
            .placed_words
            .iter()
            .find(|placed| !found.contains(&placed.word))
            .and_then(|placed| placed.word.chars().next())
    }

    /// Whether every placed word has been found
    pub fn is_complete(puzzle: &Puzzle, found: &[String]) -> bool {
        !puzzle.placed_words.is_empty()
            && puzzle
                .placed_words
                .iter()
                .all(|placed| found.contains(&placed.word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    fn grid_from(rows: &[&str]) -> Grid {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    fn placed(word: &str, start_x: usize, start_y: usize, end_x: usize, end_y: usize) -> PlacedWord {
        PlacedWord {
            word: word.to_string(),
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// CAT across the top, DOG up the right-hand column
    fn sample_puzzle() -> Puzzle {
        Puzzle {
            grid: grid_from(&["CATG", "QRSO", "XYZD", "MNOP"]),
            placed_words: vec![placed("CAT", 0, 0, 2, 0), placed("DOG", 3, 2, 3, 0)],
        }
    }

    #[test]
    fn test_adjacent_positions() {
        assert!(SelectionValidator::are_adjacent(&pos(0, 0), &pos(0, 1)));
        assert!(SelectionValidator::are_adjacent(&pos(0, 1), &pos(1, 1)));
        assert!(SelectionValidator::are_adjacent(&pos(1, 1), &pos(0, 0)));
        assert!(!SelectionValidator::are_adjacent(&pos(0, 0), &pos(2, 2)));
        assert!(!SelectionValidator::are_adjacent(&pos(1, 1), &pos(1, 1)));
    }

    #[test]
    fn test_path_follows_direction_signs() {
        let diagonal = placed("ABC", 3, 0, 1, 2);
        assert_eq!(
            SelectionValidator::path(&diagonal),
            vec![pos(0, 3), pos(1, 2), pos(2, 1)]
        );

        let single = placed("A", 2, 2, 2, 2);
        assert_eq!(SelectionValidator::path(&single), vec![pos(2, 2)]);
    }

    fn read(grid: &Grid, placed: &PlacedWord) -> Option<String> {
        SelectionValidator::extract_word(grid, &SelectionValidator::path(placed))
    }

    #[test]
    fn test_path_reconstructs_placed_words() {
        let puzzle = sample_puzzle();
        for p in &puzzle.placed_words {
            assert_eq!(read(&puzzle.grid, p).as_deref(), Some(p.word.as_str()));
        }
    }

    #[test]
    fn test_path_outside_grid() {
        let puzzle = sample_puzzle();
        let off_grid = placed("CATS", 0, 0, 3, 0);
        assert_eq!(read(&puzzle.grid, &off_grid).as_deref(), Some("CATG"));
        let too_long = placed("CATSS", 0, 0, 4, 0);
        assert_eq!(read(&puzzle.grid, &too_long), None);
    }

    #[test]
    fn test_selection_validity() {
        assert!(SelectionValidator::is_valid_selection(&[pos(0, 0), pos(1, 1)], 4));
        assert!(!SelectionValidator::is_valid_selection(&[], 4));
        assert!(!SelectionValidator::is_valid_selection(&[pos(0, 0), pos(0, 2)], 4));
        assert!(!SelectionValidator::is_valid_selection(
            &[pos(0, 0), pos(0, 1), pos(0, 0)],
            4
        ));
        assert!(!SelectionValidator::is_valid_selection(&[pos(3, 3), pos(3, 4)], 4));
        assert!(SelectionValidator::is_valid_selection(&[pos(2, 2)], 4));
    }

    #[test]
    fn test_bent_selection_is_rejected() {
        assert!(SelectionValidator::is_valid_selection(
            &[pos(0, 0), pos(1, 1), pos(2, 2)],
            4
        ));
        assert!(!SelectionValidator::is_valid_selection(
            &[pos(0, 0), pos(0, 1), pos(1, 1)],
            4
        ));
    }

    #[test]
    fn test_bent_chain_spelling_a_word_does_not_match() {
        // CAT runs along the top row; a second T below it lets a bent chain spell it too
        let puzzle = Puzzle {
            grid: grid_from(&["CAT", "XYT", "ZZZ"]),
            placed_words: vec![placed("CAT", 0, 0, 2, 0)],
        };
        let bent = [pos(0, 0), pos(0, 1), pos(1, 2)];
        assert_eq!(
            SelectionValidator::extract_word(&puzzle.grid, &bent).as_deref(),
            Some("CAT")
        );
        assert!(SelectionValidator::match_selection(&puzzle, &[], &bent).is_none());
    }

    #[test]
    fn test_match_forward_and_reversed() {
        let puzzle = sample_puzzle();

        let forward = [pos(0, 0), pos(0, 1), pos(0, 2)];
        let matched = SelectionValidator::match_selection(&puzzle, &[], &forward);
        assert_eq!(matched.map(|p| p.word.as_str()), Some("CAT"));

        // DOG is placed bottom-up; selecting top-down reads GOD
        let reversed = [pos(0, 3), pos(1, 3), pos(2, 3)];
        let matched = SelectionValidator::match_selection(&puzzle, &[], &reversed);
        assert_eq!(matched.map(|p| p.word.as_str()), Some("DOG"));
    }

    #[test]
    fn test_found_words_do_not_match_again() {
        let puzzle = sample_puzzle();
        let selection = [pos(0, 0), pos(0, 1), pos(0, 2)];
        let found = vec!["CAT".to_string()];
        assert!(SelectionValidator::match_selection(&puzzle, &found, &selection).is_none());
    }

    #[test]
    fn test_non_word_selection() {
        let puzzle = sample_puzzle();
        let selection = [pos(1, 0), pos(1, 1), pos(1, 2)];
        assert!(SelectionValidator::match_selection(&puzzle, &[], &selection).is_none());
    }

    #[test]
    fn test_hint_reveals_first_unfound_word() {
        let puzzle = sample_puzzle();
        assert_eq!(SelectionValidator::hint(&puzzle, &[]), Some('C'));
        assert_eq!(
            SelectionValidator::hint(&puzzle, &["CAT".to_string()]),
            Some('D')
        );
        assert_eq!(
            SelectionValidator::hint(&puzzle, &["CAT".to_string(), "DOG".to_string()]),
            None
        );
    }

    #[test]
    fn test_completion() {
        let puzzle = sample_puzzle();
        assert!(!SelectionValidator::is_complete(&puzzle, &[]));
        assert!(!SelectionValidator::is_complete(&puzzle, &["CAT".to_string()]));
        assert!(SelectionValidator::is_complete(
            &puzzle,
            &["DOG".to_string(), "CAT".to_string()]
        ));

        let empty = Puzzle {
            grid: grid_from(&["A"]),
            placed_words: vec![],
        };
        assert!(!SelectionValidator::is_complete(&empty, &[]));
    }
}
