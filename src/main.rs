mod config;
mod game;
mod models;
mod routes;
mod utils;
mod words;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use config::Config;
use game::{GeneratorOptions, PuzzleBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words::WordBank;

/// Application state shared across all handlers
pub struct AppState {
    pub word_bank: WordBank,
    pub builder: PuzzleBuilder,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load word lists
    let word_bank = match WordBank::load(&config.game.word_list_path).await {
        Ok(bank) => {
            tracing::info!("Word list loaded successfully");
            bank
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load word list: {}. Using built-in categories.",
                e
            );
            WordBank::builtin()
        }
    };
    if word_bank.is_empty() {
        tracing::warn!("No word categories available; only custom puzzles can be served");
    } else {
        tracing::info!("{} categories available", word_bank.len());
    }

    let builder = PuzzleBuilder::new(
        config.game.max_generation_retries,
        GeneratorOptions {
            max_attempts_per_word: config.game.max_placement_attempts,
        },
    );

    let state = Arc::new(AppState { word_bank, builder });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Puzzles: http://{}/api/puzzle?category=animals", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
