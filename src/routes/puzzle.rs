use crate::{
    game::{PuzzleError, SelectionValidator},
    models::{Position, Puzzle},
    utils::letters::normalize_word,
    words::{difficulty::time_limit_for_size, Difficulty},
    AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

#[derive(Debug, Deserialize)]
pub struct PuzzleQuery {
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Fixes every random draw so the same puzzle can be served again
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CustomPuzzleRequest {
    pub words: Vec<String>,
    pub size: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub size: usize,
    /// Seconds the player gets to find every word
    pub time_limit: u32,
    #[serde(flatten)]
    pub puzzle: Puzzle,
}

impl PuzzleResponse {
    fn for_difficulty(puzzle: Puzzle, category: String, difficulty: Difficulty) -> Self {
        Self {
            category: Some(category),
            difficulty: Some(difficulty),
            size: puzzle.size(),
            time_limit: difficulty.time_limit_secs(),
            puzzle,
        }
    }

    fn custom(puzzle: Puzzle) -> Self {
        Self {
            category: None,
            difficulty: None,
            size: puzzle.size(),
            time_limit: time_limit_for_size(puzzle.size()),
            puzzle,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DifficultyInfo {
    pub name: Difficulty,
    pub size: usize,
    pub words: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub difficulties: Vec<DifficultyInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub puzzle: Puzzle,
    #[serde(default)]
    pub found: Vec<String>,
    pub selection: Vec<Position>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub matched: Option<String>,
    /// Cells of the matched word, start to end, for highlighting
    pub cells: Vec<Position>,
    pub complete: bool,
}

#[derive(Debug, Deserialize)]
pub struct HintRequest {
    pub puzzle: Puzzle,
    #[serde(default)]
    pub found: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub letter: Option<char>,
    pub message: Option<String>,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn puzzle_error(e: PuzzleError) -> ApiError {
    match &e {
        PuzzleError::UnknownCategory(_) => {
            tracing::warn!("Puzzle request rejected: {}", e);
            api_error(StatusCode::NOT_FOUND, e.to_string())
        }
        PuzzleError::Invalid(_) => {
            tracing::warn!("Puzzle request rejected: {}", e);
            api_error(StatusCode::BAD_REQUEST, e.to_string())
        }
        PuzzleError::Exhausted { attempts } => {
            tracing::error!("Puzzle generation failed after {} attempts", attempts);
            api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
    }
}

/// List the available categories and difficulty presets
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state
            .word_bank
            .category_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        difficulties: Difficulty::ALL
            .into_iter()
            .map(|difficulty| DifficultyInfo {
                name: difficulty,
                size: difficulty.grid_size(),
                words: difficulty.word_count(),
            })
            .collect(),
    })
}

/// Generate a puzzle from a category at the requested difficulty
pub async fn new_puzzle(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<PuzzleResponse>, ApiError> {
    let mut rng = rng_for(query.seed);
    let puzzle = state
        .builder
        .new_game(&state.word_bank, &query.category, query.difficulty, &mut rng)
        .map_err(puzzle_error)?;

    Ok(Json(PuzzleResponse::for_difficulty(
        puzzle,
        query.category.to_lowercase(),
        query.difficulty,
    )))
}

/// Generate a puzzle from a caller-supplied word list
pub async fn custom_puzzle(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CustomPuzzleRequest>,
) -> Result<Json<PuzzleResponse>, ApiError> {
    let words = payload
        .words
        .iter()
        .map(|raw| {
            normalize_word(raw).ok_or_else(|| {
                tracing::warn!("Rejected custom word {:?}", raw);
                api_error(StatusCode::BAD_REQUEST, format!("invalid word: {:?}", raw))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        "Custom puzzle requested: {} words, {}x{} grid",
        words.len(),
        payload.size,
        payload.size
    );

    let mut rng = rng_for(payload.seed);
    let puzzle = state
        .builder
        .build(&words, payload.size, &mut rng)
        .map_err(puzzle_error)?;

    Ok(Json(PuzzleResponse::custom(puzzle)))
}

/// Match a player's selection against the puzzle's placed words
pub async fn check_selection(Json(payload): Json<CheckRequest>) -> Json<CheckResponse> {
    let (matched, cells) = match SelectionValidator::match_selection(
        &payload.puzzle,
        &payload.found,
        &payload.selection,
    ) {
        Some(placed) => (Some(placed.word.clone()), SelectionValidator::path(placed)),
        None => (None, Vec::new()),
    };

    let mut found = payload.found;
    if let Some(word) = &matched {
        found.push(word.clone());
    }

    Json(CheckResponse {
        complete: SelectionValidator::is_complete(&payload.puzzle, &found),
        matched,
        cells,
    })
}

/// Reveal the first letter of a word the player has not found yet
pub async fn hint(Json(payload): Json<HintRequest>) -> Json<HintResponse> {
    let letter = SelectionValidator::hint(&payload.puzzle, &payload.found);

    Json(HintResponse {
        letter,
        message: letter.map(|c| format!("Try to find a word that starts with '{}'.", c)),
    })
}
