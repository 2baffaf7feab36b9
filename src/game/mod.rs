// Puzzle engine modules

pub mod grid;
pub mod puzzle;
pub mod validator;

pub use grid::GeneratorOptions;
pub use puzzle::{PuzzleBuilder, PuzzleError};
pub use validator::SelectionValidator;
