//! Self-play: scripted bots driving every engine through the in-memory adapters.
//!
//! [`Arcade`] wires one set of stores and play types from an [`ArcadeConfig`]; the
//! `play_*` methods are simple bots used by the `arcade-selfplay` binary and the
//! end-to-end tests.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::{ArcadeConfig, InMemoryAccountLedger, InMemoryEntityStore, InMemorySessionStore};
use crate::core::word::evaluate;
use crate::core::{
    submit_score, top_n, ChessPuzzle, MoveVerdict, PlayerScore, PuzzleSession, PuzzleTrainer,
    RankError, Submission, WordSource, WordStatus,
};
use crate::engine::{GuessResult, PackingPlay, PlayError, PuzzlePlay, WordPlay};
use crate::types::GameId;

/// Placements a packing bot makes before giving up on reaching a deadlock
pub const DEFAULT_MAX_PLACEMENTS: usize = 1_000;

pub struct Arcade {
    ledger: Arc<InMemoryAccountLedger>,
    word_source: Arc<dyn WordSource>,
    words: WordPlay,
    packing: PackingPlay,
    puzzles: PuzzlePlay,
    leaderboard_size: usize,
}

impl Arcade {
    pub fn from_config(config: &ArcadeConfig) -> Self {
        let word_source: Arc<dyn WordSource> = Arc::new(config.word_source());
        Self {
            ledger: Arc::new(InMemoryAccountLedger::new()),
            words: WordPlay::new(Arc::new(InMemorySessionStore::new()), word_source.clone()),
            word_source,
            packing: PackingPlay::new(
                Arc::new(InMemoryEntityStore::<PuzzleSession>::new()),
                config.shape_generator(),
                config.grid_rows,
                config.grid_cols,
            ),
            puzzles: PuzzlePlay::new(Arc::new(InMemoryEntityStore::<PuzzleTrainer>::new())),
            leaderboard_size: config.leaderboard_size,
        }
    }

    pub fn register(&self, player: &str) -> bool {
        self.ledger.register(player)
    }

    pub fn words(&self) -> &WordPlay {
        &self.words
    }

    pub fn packing(&self) -> &PackingPlay {
        &self.packing
    }

    pub fn puzzles(&self) -> &PuzzlePlay {
        &self.puzzles
    }

    /// Play one word game: always guess the first answer still consistent with every
    /// clue so far. Returns the final status.
    pub fn play_word_game(&self, player: &str) -> Result<WordStatus, PlayError> {
        self.words.start(player)?;
        let mut candidates = self.word_source.list_all_answers();

        while let Some(next) = candidates.first().cloned() {
            match self.words.guess(player, &next)? {
                GuessResult::Rejected { reason, .. } => {
                    debug!(player, word = %next, reason = reason.code(), "candidate skipped");
                    candidates.retain(|word| *word != next);
                }
                GuessResult::Accepted { status, .. } if status != WordStatus::Active => {
                    return Ok(status);
                }
                GuessResult::Accepted { guess, .. } => {
                    candidates.retain(|word| {
                        evaluate(guess.word(), word).is_ok_and(|clue| clue == *guess.outcomes())
                    });
                }
            }
        }

        // The answer is outside the candidate list; the game stays open.
        Ok(WordStatus::Active)
    }

    /// Play block packing first-fit until no shape fits or `max_placements` is reached.
    /// Returns the final session.
    pub fn play_block_packing(
        &self,
        player: &str,
        max_placements: usize,
    ) -> Result<PuzzleSession, PlayError> {
        let mut session = self.packing.start(player)?;

        for _ in 0..max_placements {
            let Some((slot, row, col)) = first_fit(&session) else {
                break;
            };
            self.packing.place(player, slot, row, col)?;
            session = self
                .packing
                .session(player)?
                .ok_or_else(|| PlayError::no_active_game(player))?;
        }
        Ok(session)
    }

    /// Load `puzzle` and play its solution. Returns whether it ended solved.
    pub fn solve_puzzle(&self, player: &str, puzzle: ChessPuzzle) -> Result<bool, PlayError> {
        let solution = puzzle.solution().to_vec();
        self.puzzles.load_puzzle(player, puzzle)?;

        for token in &solution {
            match self.puzzles.check_move(player, token)? {
                MoveVerdict::PuzzleSolved => return Ok(true),
                MoveVerdict::CorrectMove { .. } => {}
                MoveVerdict::IncorrectMove => return Ok(false),
            }
        }
        Ok(false)
    }

    pub fn submit(&self, player: &str, game: GameId, score: i64) -> Result<Submission, RankError> {
        submit_score(self.ledger.as_ref(), player, game, score, self.leaderboard_size)
    }

    /// Leaderboard view sized by configuration
    pub fn leaderboard(&self, game: GameId) -> Result<Vec<PlayerScore>, RankError> {
        let limit = i64::try_from(self.leaderboard_size).unwrap_or(i64::MAX);
        top_n(self.ledger.as_ref(), game, limit)
    }
}

/// First (slot, row, col) in scan order where a tray shape fits
pub fn first_fit(session: &PuzzleSession) -> Option<(usize, i8, i8)> {
    if session.is_over() {
        return None;
    }
    let grid = session.grid();
    session
        .tray()
        .iter()
        .enumerate()
        .filter_map(|(slot, entry)| entry.shape().map(|shape| (slot, shape)))
        .find_map(|(slot, shape)| {
            (0..grid.rows() as i8).find_map(|row| {
                (0..grid.cols() as i8)
                    .find(|&col| grid.can_place(shape, row, col))
                    .map(|col| (slot, row, col))
            })
        })
}

/// Short opening line used by the self-play runner
pub fn sample_puzzle() -> ChessPuzzle {
    ChessPuzzle::new(
        "scholars-mate",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]
            .into_iter()
            .map(String::from)
            .collect(),
        600,
        ["mateIn4".to_string(), "opening".to_string()],
    )
}
