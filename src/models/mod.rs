pub mod puzzle;

pub use puzzle::{Grid, PlacedWord, Position, Puzzle, DIRECTIONS};
