use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{grid::DEFAULT_MAX_ATTEMPTS_PER_WORD, puzzle::DEFAULT_MAX_RETRIES};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub word_list_path: String,
    pub max_generation_retries: u32,
    pub max_placement_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            game: GameConfig {
                word_list_path: "./words.txt".to_string(),
                max_generation_retries: DEFAULT_MAX_RETRIES,
                max_placement_attempts: DEFAULT_MAX_ATTEMPTS_PER_WORD,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or(defaults.server.host),
            port: match lookup("PORT") {
                Some(port) => port.parse().context("PORT must be a number")?,
                None => defaults.server.port,
            },
        };

        let game = GameConfig {
            word_list_path: lookup("WORD_LIST_PATH").unwrap_or(defaults.game.word_list_path),
            max_generation_retries: match lookup("MAX_GENERATION_RETRIES") {
                Some(retries) => retries
                    .parse()
                    .context("MAX_GENERATION_RETRIES must be a number")?,
                None => defaults.game.max_generation_retries,
            },
            max_placement_attempts: match lookup("MAX_PLACEMENT_ATTEMPTS") {
                Some(attempts) => attempts
                    .parse()
                    .context("MAX_PLACEMENT_ATTEMPTS must be a number")?,
                None => defaults.game.max_placement_attempts,
            },
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
