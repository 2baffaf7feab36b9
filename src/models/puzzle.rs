use serde::{Deserialize, Serialize};

/// A fixed stepping vector across the grid. `dx` moves along columns, `dy` along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Direction implied by a start/end pair, using the sign of each axis delta
    pub fn between(start_x: usize, start_y: usize, end_x: usize, end_y: usize) -> Self {
        Self {
            dx: (end_x as i32 - start_x as i32).signum(),
            dy: (end_y as i32 - start_y as i32).signum(),
        }
    }
}

/// All eight placement directions
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 0),   // Horizontal
    Direction::new(0, 1),   // Vertical
    Direction::new(1, 1),   // Diagonal down-right
    Direction::new(1, -1),  // Diagonal up-right
    Direction::new(-1, 0),  // Horizontal reversed
    Direction::new(0, -1),  // Vertical reversed
    Direction::new(-1, -1), // Diagonal up-left
    Direction::new(-1, 1),  // Diagonal down-left
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A word committed to the grid, with inclusive start and end coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub word: String,
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: usize,
    pub end_y: usize,
}

impl PlacedWord {
    pub fn direction(&self) -> Direction {
        Direction::between(self.start_x, self.start_y, self.end_x, self.end_y)
    }
}

/// Rows of letters, indexed `grid[y][x]`
pub type Grid = Vec<Vec<char>>;

/// A fully generated puzzle: every cell filled, every word placed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_vectors() {
        for dir in DIRECTIONS {
            assert!(dir.dx.abs() <= 1 && dir.dy.abs() <= 1);
            assert!(dir != Direction::new(0, 0));
        }
        let unique: std::collections::HashSet<_> = DIRECTIONS.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_direction_between_uses_sign() {
        assert_eq!(Direction::between(0, 0, 4, 0), Direction::new(1, 0));
        assert_eq!(Direction::between(4, 4, 0, 0), Direction::new(-1, -1));
        assert_eq!(Direction::between(2, 5, 5, 2), Direction::new(1, -1));
    }

    #[test]
    fn test_placed_word_serializes_camel_case() {
        let placed = PlacedWord {
            word: "CAT".to_string(),
            start_x: 0,
            start_y: 1,
            end_x: 2,
            end_y: 1,
        };
        let json = serde_json::to_value(&placed).unwrap();
        assert_eq!(json["startX"], 0);
        assert_eq!(json["startY"], 1);
        assert_eq!(json["endX"], 2);
        assert_eq!(json["endY"], 1);
    }
}
