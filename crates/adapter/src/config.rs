//! Runtime configuration read from environment variables.
//!
//! - `ARCADE_GRID_ROWS` / `ARCADE_GRID_COLS`: board size (default 8, clamped to 4..=16)
//! - `ARCADE_SEED`: seed for shape and answer generation (default: OS entropy)
//! - `ARCADE_LEADERBOARD_SIZE`: rows per leaderboard view (default 10, clamped to 1..=100)
//! - `ARCADE_WORD_LIST`: comma-separated answer list replacing the built-in one

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::CatalogShapeGenerator;
use crate::types::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_LEADERBOARD_SIZE, LEADERBOARD_MAX, MAX_GRID_DIM,
};
use crate::words::StaticWordSource;

/// Smallest board side accepted from configuration
const MIN_CONFIG_GRID_DIM: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    pub grid_rows: u8,
    pub grid_cols: u8,
    pub seed: Option<u64>,
    pub leaderboard_size: usize,
    pub word_list: Option<Vec<String>>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,
            seed: None,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            word_list: None,
        }
    }
}

impl ArcadeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let grid_dim = |key: &str, default: u8| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u8>().ok())
                .unwrap_or(default)
                .clamp(MIN_CONFIG_GRID_DIM, MAX_GRID_DIM)
        };

        let grid_rows = grid_dim("ARCADE_GRID_ROWS", DEFAULT_GRID_ROWS);
        let grid_cols = grid_dim("ARCADE_GRID_COLS", DEFAULT_GRID_COLS);

        let seed = lookup("ARCADE_SEED").and_then(|s| s.trim().parse().ok());

        let leaderboard_size = lookup("ARCADE_LEADERBOARD_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_LEADERBOARD_SIZE)
            .clamp(1, LEADERBOARD_MAX);

        let word_list = lookup("ARCADE_WORD_LIST")
            .map(|s| {
                s.split(',')
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty());

        Self {
            grid_rows,
            grid_cols,
            seed,
            leaderboard_size,
            word_list,
        }
    }

    /// Shape generator honoring `seed`
    pub fn shape_generator(&self) -> CatalogShapeGenerator {
        match self.seed {
            Some(seed) => CatalogShapeGenerator::new(seed),
            None => CatalogShapeGenerator::from_entropy(),
        }
    }

    /// Word source honoring `word_list` and `seed`
    pub fn word_source(&self) -> StaticWordSource {
        match &self.word_list {
            Some(words) => {
                let rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                StaticWordSource::new(words, rng)
            }
            None => StaticWordSource::builtin(self.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::ports::WordSource;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ArcadeConfig::from_lookup(lookup(&[])), ArcadeConfig::default());
    }

    #[test]
    fn values_are_parsed_and_clamped() {
        let config = ArcadeConfig::from_lookup(lookup(&[
            ("ARCADE_GRID_ROWS", "2"),
            ("ARCADE_GRID_COLS", "10"),
            ("ARCADE_SEED", "42"),
            ("ARCADE_LEADERBOARD_SIZE", "500"),
            ("ARCADE_WORD_LIST", "crane, slate,,crane"),
        ]));
        assert_eq!(config.grid_rows, MIN_CONFIG_GRID_DIM);
        assert_eq!(config.grid_cols, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.leaderboard_size, LEADERBOARD_MAX);
        assert_eq!(
            config.word_list,
            Some(vec![
                "crane".to_string(),
                "slate".to_string(),
                "crane".to_string()
            ])
        );
        assert_eq!(config.word_source().list_all_answers(), vec!["crane", "slate"]);
    }

    #[test]
    fn garbage_falls_back() {
        let config = ArcadeConfig::from_lookup(lookup(&[
            ("ARCADE_GRID_ROWS", "tall"),
            ("ARCADE_SEED", "-1"),
            ("ARCADE_WORD_LIST", " , "),
        ]));
        assert_eq!(config.grid_rows, DEFAULT_GRID_ROWS);
        assert_eq!(config.seed, None);
        assert_eq!(config.word_list, None);
    }
}
