//! Word module - five-letter guessing game
//!
//! [`evaluate`] scores one guess against the answer in two passes:
//!
//! 1. exact position matches become `Correct`; every other answer letter goes into a tally
//! 2. each remaining guess letter becomes `Present` while the tally still holds that letter
//!    (consuming one), otherwise `Absent`
//!
//! so a repeated guess letter is never credited more often than the answer contains it.
//!
//! [`WordGame`] wraps the evaluation in a two-state machine: active until the player wins
//! or uses all [`MAX_ATTEMPTS`] guesses, finished afterwards.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{LetterOutcome, MAX_ATTEMPTS, WORD_LENGTH};

/// Per-letter verdicts for one guess
pub type Outcomes = [LetterOutcome; WORD_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("answer must be exactly {WORD_LENGTH} letters")]
    InvalidAnswerLength,
    #[error("guess must be exactly {WORD_LENGTH} letters")]
    InvalidGuessLength,
    #[error("game already finished")]
    GameAlreadyFinished,
}

impl WordError {
    pub fn code(self) -> &'static str {
        match self {
            WordError::InvalidAnswerLength => "invalid_answer_length",
            WordError::InvalidGuessLength => "invalid_guess_length",
            WordError::GameAlreadyFinished => "game_already_finished",
        }
    }
}

/// Lowercase and trim a raw token
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn letters(token: &str) -> Option<[char; WORD_LENGTH]> {
    let mut out = ['\0'; WORD_LENGTH];
    let mut chars = token.chars();
    for slot in &mut out {
        *slot = chars.next()?;
    }
    match chars.next() {
        Some(_) => None,
        None => Some(out),
    }
}

/// Score `guess` against `answer`. Both are normalized first.
///
/// # Examples
///
/// ```
/// use arcade_core::word::evaluate;
/// use arcade_core::types::LetterOutcome::{Absent, Correct};
///
/// assert_eq!(
///     evaluate("lever", "level").unwrap(),
///     [Correct, Correct, Correct, Correct, Absent]
/// );
/// assert_eq!(
///     evaluate("geese", "those").unwrap(),
///     [Absent, Absent, Absent, Correct, Correct]
/// );
/// ```
pub fn evaluate(guess: &str, answer: &str) -> Result<Outcomes, WordError> {
    let guess = letters(&normalize(guess)).ok_or(WordError::InvalidGuessLength)?;
    let answer = letters(&normalize(answer)).ok_or(WordError::InvalidAnswerLength)?;
    Ok(evaluate_letters(&guess, &answer))
}

fn evaluate_letters(guess: &[char; WORD_LENGTH], answer: &[char; WORD_LENGTH]) -> Outcomes {
    let mut outcomes = [LetterOutcome::Absent; WORD_LENGTH];
    // (letter, unmatched count) for answer letters not hit exactly
    let mut tally: ArrayVec<(char, u8), WORD_LENGTH> = ArrayVec::new();

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            outcomes[i] = LetterOutcome::Correct;
        } else if let Some(entry) = tally.iter_mut().find(|(c, _)| *c == answer[i]) {
            entry.1 += 1;
        } else {
            tally.push((answer[i], 1));
        }
    }

    for i in 0..WORD_LENGTH {
        if outcomes[i] == LetterOutcome::Correct {
            continue;
        }
        if let Some(entry) = tally.iter_mut().find(|(c, n)| *c == guess[i] && *n > 0) {
            entry.1 -= 1;
            outcomes[i] = LetterOutcome::Present;
        }
    }

    outcomes
}

/// Whether every letter is `Correct`
pub fn is_win(outcomes: &Outcomes) -> bool {
    outcomes.iter().all(|o| *o == LetterOutcome::Correct)
}

/// A scored guess. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: String,
    outcomes: Outcomes,
}

impl Guess {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn outcomes(&self) -> &Outcomes {
        &self.outcomes
    }

    pub fn is_win(&self) -> bool {
        is_win(&self.outcomes)
    }

    /// Compact form for logs, e.g. `=?.??`
    pub fn pattern(&self) -> String {
        self.outcomes.iter().map(LetterOutcome::symbol).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    Active,
    Won,
    Lost,
}

/// One word game: secret answer, guess history, finished/won flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGame {
    answer: String,
    guesses: ArrayVec<Guess, MAX_ATTEMPTS>,
    finished: bool,
    won: bool,
}

impl WordGame {
    /// Start a game for `answer`; the answer is normalized to lowercase.
    pub fn start(answer: &str) -> Result<Self, WordError> {
        let answer = normalize(answer);
        if answer.chars().count() != WORD_LENGTH {
            return Err(WordError::InvalidAnswerLength);
        }
        Ok(Self {
            answer,
            guesses: ArrayVec::new(),
            finished: false,
            won: false,
        })
    }

    /// Score `raw_guess`, record it, and advance the state machine.
    ///
    /// Errors leave the game untouched.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<Guess, WordError> {
        if self.finished {
            return Err(WordError::GameAlreadyFinished);
        }

        let word = normalize(raw_guess);
        let guess_letters = letters(&word).ok_or(WordError::InvalidGuessLength)?;
        let answer_letters = letters(&self.answer).ok_or(WordError::InvalidAnswerLength)?;

        let outcomes = evaluate_letters(&guess_letters, &answer_letters);
        let guess = Guess { word, outcomes };

        // `finished` is set once the history is full, so there is always room here.
        if self.guesses.try_push(guess.clone()).is_err() {
            return Err(WordError::GameAlreadyFinished);
        }

        if guess.is_win() {
            self.finished = true;
            self.won = true;
            info!(attempts = self.guesses.len(), "word game won");
        } else if self.guesses.is_full() {
            self.finished = true;
            info!(answer = %self.answer, "word game lost");
        } else {
            debug!(guess = %guess.word, pattern = %guess.pattern(), "guess recorded");
        }

        Ok(guess)
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> WordStatus {
        match (self.finished, self.won) {
            (false, _) => WordStatus::Active,
            (true, true) => WordStatus::Won,
            (true, false) => WordStatus::Lost,
        }
    }

    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }
}
