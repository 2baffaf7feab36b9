use rand::Rng;
use thiserror::Error;

use crate::{
    models::{Grid, PlacedWord, Puzzle, DIRECTIONS},
    utils::letters::{is_valid_word, random_letter},
};

/// Placement attempts made for a single word before it is given up on
pub const DEFAULT_MAX_ATTEMPTS_PER_WORD: u32 = 100;

/// Largest grid side accepted; keeps every pass to a small, fixed amount of work
pub const MAX_GRID_SIZE: usize = 50;

/// Most words accepted in one puzzle
pub const MAX_WORDS: usize = 100;

/// Why a single generation pass produced no puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("grid size must be greater than zero")]
    InvalidSize,
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("{count} words exceeds the maximum of {max}")]
    TooManyWords { count: usize, max: usize },
    #[error("word {word:?} must be non-empty and contain only letters A-Z")]
    InvalidWord { word: String },
    #[error("word {word:?} has {len} letters and cannot fit in a {size}x{size} grid")]
    WordTooLong { word: String, len: usize, size: usize },
    #[error("placed {placed} of {total} words, could not place {missing:?}")]
    Unplaced {
        placed: usize,
        total: usize,
        missing: Vec<String>,
    },
}

impl GenerationError {
    /// Only a pass that ran out of attempts can succeed with fresh randomness.
    /// Input errors fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::Unplaced { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub max_attempts_per_word: u32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_attempts_per_word: DEFAULT_MAX_ATTEMPTS_PER_WORD,
        }
    }
}

/// Grid construction state: `None` marks a cell no word has claimed yet
type DraftGrid = Vec<Vec<Option<char>>>;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a puzzle with an injected random source.
    ///
    /// Words are placed longest first (ties keep input order), each with up to
    /// `max_attempts_per_word` random direction/start draws. A word that never
    /// fits fails the whole pass; no partial grid is returned. Filler letters
    /// are drawn only once every word is placed.
    pub fn generate_with_rng<S: AsRef<str>>(
        words: &[S],
        size: usize,
        options: GeneratorOptions,
        rng: &mut impl Rng,
    ) -> Result<Puzzle, GenerationError> {
        Self::validate(words, size)?;

        let mut ordered: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        // sort_by is stable, so equal lengths keep their input order
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut draft: DraftGrid = vec![vec![None; size]; size];
        let mut placed_words = Vec::with_capacity(ordered.len());
        let mut missing = Vec::new();

        for word in ordered {
            match Self::place_word(&mut draft, word, options.max_attempts_per_word, rng) {
                Some(placed) => placed_words.push(placed),
                None => {
                    tracing::debug!(
                        "Could not place {} after {} attempts",
                        word,
                        options.max_attempts_per_word
                    );
                    missing.push(word.to_string());
                }
            }
        }

        if placed_words.len() < words.len() {
            return Err(GenerationError::Unplaced {
                placed: placed_words.len(),
                total: words.len(),
                missing,
            });
        }

        Ok(Puzzle {
            grid: Self::fill(draft, rng),
            placed_words,
        })
    }

    fn validate<S: AsRef<str>>(words: &[S], size: usize) -> Result<(), GenerationError> {
        if size == 0 {
            return Err(GenerationError::InvalidSize);
        }
        if size > MAX_GRID_SIZE {
            return Err(GenerationError::GridTooLarge {
                size,
                max: MAX_GRID_SIZE,
            });
        }
        if words.len() > MAX_WORDS {
            return Err(GenerationError::TooManyWords {
                count: words.len(),
                max: MAX_WORDS,
            });
        }

        for word in words {
            let word: &str = word.as_ref();
            if !is_valid_word(word) {
                return Err(GenerationError::InvalidWord {
                    word: word.to_string(),
                });
            }
            if word.len() > size {
                return Err(GenerationError::WordTooLong {
                    word: word.to_string(),
                    len: word.len(),
                    size,
                });
            }
        }

        Ok(())
    }

    /// Try random placements for one word, committing the first that fits
    fn place_word(
        draft: &mut DraftGrid,
        word: &str,
        max_attempts: u32,
        rng: &mut impl Rng,
    ) -> Option<PlacedWord> {
        let size = draft.len() as i32;
        let letters: Vec<char> = word.chars().collect();
        let len = letters.len() as i32;

        for _ in 0..max_attempts {
            let dir = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            let start_x = rng.random_range(0..size);
            let start_y = rng.random_range(0..size);

            let end_x = start_x + (len - 1) * dir.dx;
            let end_y = start_y + (len - 1) * dir.dy;
            if !(0..size).contains(&end_x) || !(0..size).contains(&end_y) {
                continue;
            }

            let path = move || {
                (0..len).map(move |i| {
                    (
                        (start_x + i * dir.dx) as usize,
                        (start_y + i * dir.dy) as usize,
                    )
                })
            };

            // A claimed cell is only shared when the letters agree
            let fits = path()
                .zip(&letters)
                .all(|((x, y), &letter)| draft[y][x].map_or(true, |c| c == letter));
            if !fits {
                continue;
            }

            for ((x, y), &letter) in path().zip(&letters) {
                draft[y][x] = Some(letter);
            }

            return Some(PlacedWord {
                word: word.to_string(),
                start_x: start_x as usize,
                start_y: start_y as usize,
                end_x: end_x as usize,
                end_y: end_y as usize,
            });
        }

        None
    }

    /// Resolve every unclaimed cell to a random letter
    fn fill(draft: DraftGrid, rng: &mut impl Rng) -> Grid {
        let mut grid = Vec::with_capacity(draft.len());

        for draft_row in draft {
            let mut row = Vec::with_capacity(draft_row.len());
            for cell in draft_row {
                row.push(match cell {
                    Some(letter) => letter,
                    None => random_letter(rng),
                });
            }
            grid.push(row);
        }

        grid
    }
}
