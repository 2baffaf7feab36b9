pub mod difficulty;

pub use difficulty::Difficulty;

use anyhow::Result;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

use crate::utils::letters::normalize_word;

/// Categories every word bank starts from
static BUILTIN_CATEGORIES: Lazy<BTreeMap<String, Vec<String>>> = Lazy::new(|| {
    let raw: [(&str, [&str; 12]); 4] = [
        (
            "animals",
            [
                "DOG", "CAT", "LION", "TIGER", "BEAR", "ELEPHANT", "GIRAFFE", "ZEBRA", "MONKEY",
                "KANGAROO", "PANDA", "WOLF",
            ],
        ),
        (
            "food",
            [
                "PIZZA", "BURGER", "PASTA", "SALAD", "SUSHI", "STEAK", "TACO", "BREAD", "CHEESE",
                "APPLE", "ORANGE", "GRAPES",
            ],
        ),
        (
            "sports",
            [
                "SOCCER", "BASKETBALL", "TENNIS", "BASEBALL", "GOLF", "SWIMMING", "VOLLEYBALL",
                "HOCKEY", "RUGBY", "CRICKET", "BOXING", "SKIING",
            ],
        ),
        (
            "space",
            [
                "PLANET", "STAR", "GALAXY", "COMET", "ASTEROID", "NEBULA", "COSMOS", "ORBIT",
                "ROCKET", "ALIEN", "SUN", "MOON",
            ],
        ),
    ];

    raw.into_iter()
        .map(|(name, words)| {
            (
                name.to_string(),
                words.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
});

/// Named lists of puzzle words
#[derive(Debug, Clone)]
pub struct WordBank {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordBank {
    /// The built-in categories only
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES.clone(),
        }
    }

    /// Load extra categories from a file on top of the built-in ones
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let mut bank = Self::builtin();
        let loaded = Self::parse(&content);

        tracing::info!("Loaded {} categories from word list", loaded.len());

        bank.categories.extend(loaded);
        Ok(bank)
    }

    /// Parse `name: WORD WORD ...` lines. Blank lines and `#` comments are skipped.
    fn parse(content: &str) -> BTreeMap<String, Vec<String>> {
        let mut categories = BTreeMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, words)) = line.split_once(':') else {
                tracing::warn!("Skipping word list line {}: missing ':'", line_no + 1);
                continue;
            };

            let name = name.trim().to_lowercase();
            let words: Vec<String> = words
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|w| !w.is_empty())
                .filter_map(|raw| {
                    let word = normalize_word(raw);
                    if word.is_none() {
                        tracing::warn!("Skipping invalid word {:?} in category {}", raw, name);
                    }
                    word
                })
                .collect();

            if name.is_empty() || words.is_empty() {
                tracing::warn!("Skipping word list line {}: no usable words", line_no + 1);
                continue;
            }

            categories.insert(name, words);
        }

        categories
    }

    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.categories
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
