//! Word game tests - evaluation and session lifecycle

use arcade::core::word::evaluate;
use arcade::core::{WordError, WordGame, WordStatus};
use arcade::types::LetterOutcome::{Absent, Correct, Present};
use arcade::types::{MAX_ATTEMPTS, WORD_LENGTH};

#[test]
fn test_exact_match_is_all_correct() {
    assert_eq!(evaluate("crane", "crane").unwrap(), [Correct; WORD_LENGTH]);
}

#[test]
fn test_duplicate_letters_limited_by_answer_count() {
    // "speed" has two e's, "abide" one: only the first unmatched e is Present.
    assert_eq!(
        evaluate("speed", "abide").unwrap(),
        [Absent, Absent, Present, Absent, Present]
    );
}

#[test]
fn test_evaluation_is_case_insensitive() {
    assert_eq!(
        evaluate("CrAnE", " crane ").unwrap(),
        evaluate("crane", "crane").unwrap()
    );
}

#[test]
fn test_bad_lengths_are_errors() {
    assert_eq!(evaluate("cran", "crane"), Err(WordError::InvalidGuessLength));
    assert_eq!(evaluate("crane", "cranes"), Err(WordError::InvalidAnswerLength));
}

#[test]
fn test_correct_count_matches_identical_positions() {
    let words = ["crane", "level", "lever", "eerie", "geese", "those", "mamma", "speed"];
    for guess in words {
        for answer in words {
            let outcomes = evaluate(guess, answer).unwrap();
            let correct = outcomes.iter().filter(|&&o| o == Correct).count();
            let same = guess.chars().zip(answer.chars()).filter(|(a, b)| a == b).count();
            assert_eq!(correct, same, "{guess} vs {answer}");
        }
    }
}

#[test]
fn test_first_guess_wins() {
    let mut game = WordGame::start("crane").unwrap();
    let guess = game.submit_guess("crane").unwrap();
    assert!(guess.is_win());
    assert_eq!(game.status(), WordStatus::Won);
    assert_eq!(game.attempts_used(), 1);
}

#[test]
fn test_six_misses_lose_and_lock_the_game() {
    let mut game = WordGame::start("crane").unwrap();
    for _ in 0..MAX_ATTEMPTS {
        game.submit_guess("slate").unwrap();
    }
    assert_eq!(game.status(), WordStatus::Lost);
    assert_eq!(game.attempts_left(), 0);
    assert_eq!(
        game.submit_guess("crane"),
        Err(WordError::GameAlreadyFinished)
    );
    assert_eq!(game.guesses().len(), MAX_ATTEMPTS);
}

#[test]
fn test_invalid_guess_does_not_use_attempt() {
    let mut game = WordGame::start("crane").unwrap();
    assert_eq!(game.submit_guess("cr"), Err(WordError::InvalidGuessLength));
    assert_eq!(game.attempts_used(), 0);
    assert_eq!(game.status(), WordStatus::Active);
}
