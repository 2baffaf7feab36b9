use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::{
    game::grid::{GenerationError, GeneratorOptions, GridGenerator},
    models::Puzzle,
    words::{Difficulty, WordBank},
};

/// Full regenerations attempted before giving up on a puzzle
pub const DEFAULT_MAX_RETRIES: u32 = 10;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("Could not generate a valid grid. Please try again.")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Invalid(#[from] GenerationError),
}

/// Drives the grid generator, regenerating from scratch when a pass leaves words unplaced
#[derive(Debug, Clone, Copy)]
pub struct PuzzleBuilder {
    max_retries: u32,
    options: GeneratorOptions,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, GeneratorOptions::default())
    }
}

impl PuzzleBuilder {
    pub fn new(max_retries: u32, options: GeneratorOptions) -> Self {
        Self {
            max_retries,
            options,
        }
    }

    /// Generate a puzzle from an exact word list.
    ///
    /// Input errors come back on the first pass; only unplaced-word failures
    /// are retried, up to `max_retries` passes in total.
    pub fn build<S: AsRef<str>>(
        &self,
        words: &[S],
        size: usize,
        rng: &mut impl Rng,
    ) -> Result<Puzzle, PuzzleError> {
        for attempt in 1..=self.max_retries {
            match GridGenerator::generate_with_rng(words, size, self.options, rng) {
                Ok(puzzle) => {
                    tracing::debug!("Generated {}x{} grid on attempt {}", size, size, attempt);
                    return Ok(puzzle);
                }
                Err(e) if e.is_retryable() => {
                    tracing::debug!("Generation attempt {} failed: {}", attempt, e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::warn!(
            "Giving up on {} words in a {}x{} grid after {} attempts",
            words.len(),
            size,
            size,
            self.max_retries
        );
        Err(PuzzleError::Exhausted {
            attempts: self.max_retries,
        })
    }

    /// Pick random words from a category and build a puzzle sized for the difficulty.
    ///
    /// Words too long for the grid are never picked.
    pub fn new_game(
        &self,
        bank: &WordBank,
        category: &str,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Result<Puzzle, PuzzleError> {
        let size = difficulty.grid_size();
        let mut words: Vec<&str> = bank
            .category(category)
            .ok_or_else(|| PuzzleError::UnknownCategory(category.to_string()))?
            .iter()
            .map(String::as_str)
            .filter(|word| word.len() <= size)
            .collect();

        words.shuffle(rng);
        words.truncate(difficulty.word_count());

        tracing::info!(
            "New {} game in category {} with {} words",
            difficulty.name(),
            category,
            words.len()
        );

        self.build(&words, size, rng)
    }
}
