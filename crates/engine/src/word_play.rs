//! Word game requests: load the player's game, apply one guess, write it back.
//!
//! Every mutation runs under the store's per-player lock, so two requests for the same
//! player are serialized while different players proceed in parallel. Guesses of the
//! wrong length or outside the dictionary are reported as [`GuessResult::Rejected`]; the
//! stored game and its history are left as they were.

use std::sync::{Arc, PoisonError};

use tracing::{debug, info};

use crate::core::word::normalize;
use crate::core::{Guess, SessionStore, WordGame, WordSource, WordStatus};
use crate::error::PlayError;
use crate::types::{MAX_ATTEMPTS, WORD_LENGTH};

/// Session points per unused attempt when a game is won (a first-try win earns the most)
pub const POINTS_PER_SPARE_ATTEMPT: i64 = 10;

/// Session points deducted for a lost game (the session score floors at 0)
pub const LOSS_PENALTY: i64 = 10;

/// Session points for a win after `attempts_used` guesses
pub fn win_points(attempts_used: usize) -> i64 {
    let spare = (MAX_ATTEMPTS + 1).saturating_sub(attempts_used);
    spare as i64 * POINTS_PER_SPARE_ATTEMPT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    WrongLength,
    NotInWordList,
}

impl RejectReason {
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::WrongLength => "invalid_guess_length",
            RejectReason::NotInWordList => "not_in_word_list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    Accepted {
        guess: Guess,
        status: WordStatus,
        attempts_left: usize,
        /// Revealed once the game is finished
        answer: Option<String>,
        /// Session score change; non-zero only when the game finished
        points: i64,
    },
    Rejected {
        reason: RejectReason,
        attempts_left: usize,
    },
}

pub struct WordPlay {
    sessions: Arc<dyn SessionStore>,
    words: Arc<dyn WordSource>,
}

impl WordPlay {
    pub fn new(sessions: Arc<dyn SessionStore>, words: Arc<dyn WordSource>) -> Self {
        Self { sessions, words }
    }

    /// Start a game with a random answer, replacing any game in progress
    pub fn start(&self, player: &str) -> Result<(), PlayError> {
        let answer = self.words.pick_random_answer();
        self.start_with_answer(player, &answer)
    }

    /// Start a game with a chosen answer (daily puzzles, tests)
    pub fn start_with_answer(&self, player: &str, answer: &str) -> Result<(), PlayError> {
        let game = WordGame::start(answer)?;

        let lock = self.sessions.session_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.sessions.save(player, game)?;
        debug!(player, "word game started");
        Ok(())
    }

    pub fn guess(&self, player: &str, raw_guess: &str) -> Result<GuessResult, PlayError> {
        let lock = self.sessions.session_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut game = self
            .sessions
            .load(player)?
            .ok_or_else(|| PlayError::no_active_game(player))?;

        let word = normalize(raw_guess);
        let reject = if word.chars().count() != WORD_LENGTH {
            Some(RejectReason::WrongLength)
        } else if !self.words.is_valid_word(&word) {
            Some(RejectReason::NotInWordList)
        } else {
            None
        };
        if let Some(reason) = reject {
            debug!(player, guess = %word, reason = reason.code(), "guess rejected");
            return Ok(GuessResult::Rejected {
                reason,
                attempts_left: game.attempts_left(),
            });
        }

        let guess = game.submit_guess(&word)?;

        if !game.is_finished() {
            let attempts_left = game.attempts_left();
            self.sessions.save(player, game)?;
            return Ok(GuessResult::Accepted {
                guess,
                status: WordStatus::Active,
                attempts_left,
                answer: None,
                points: 0,
            });
        }

        let points = if game.is_won() {
            win_points(game.attempts_used())
        } else {
            -LOSS_PENALTY
        };
        let total = self.sessions.add_score(player, points)?;
        self.sessions.remove(player)?;
        info!(player, status = ?game.status(), points, total, "word game finished");

        Ok(GuessResult::Accepted {
            guess,
            status: game.status(),
            attempts_left: game.attempts_left(),
            answer: Some(game.answer().to_string()),
            points,
        })
    }

    /// The player's game in progress, if any
    pub fn current(&self, player: &str) -> Result<Option<WordGame>, PlayError> {
        Ok(self.sessions.load(player)?)
    }

    /// The player's running session score
    pub fn score(&self, player: &str) -> Result<i64, PlayError> {
        Ok(self.sessions.get_score(player)?)
    }
}
