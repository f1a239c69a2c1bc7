//! Leaderboard tests - best-score submission and ranked views

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use arcade::adapter::InMemoryAccountLedger;
use arcade::core::{submit_score, top_n, AccountLedger, PlayerScore, RankError, StoreError};
use arcade::types::{GameId, DEFAULT_LEADERBOARD_SIZE, LEADERBOARD_MAX};

const VIEW: usize = DEFAULT_LEADERBOARD_SIZE;

/// Ledger where another submitter raises the stored best by one on every access,
/// landing between any read and write the ranker might make.
struct BusyLedger {
    inner: InMemoryAccountLedger,
}

impl BusyLedger {
    fn bump(&self, name: &str, game: GameId) -> Result<(), StoreError> {
        let best = self.inner.best_scores(name)?.get(&game).copied().unwrap_or(0);
        self.inner.set_best_score(name, game, best + 1)
    }
}

impl AccountLedger for BusyLedger {
    fn exists(&self, name: &str) -> Result<bool, StoreError> {
        self.inner.exists(name)
    }

    fn best_scores(&self, name: &str) -> Result<BTreeMap<GameId, i64>, StoreError> {
        self.bump(name, GameId::Wordle)?;
        self.inner.best_scores(name)
    }

    fn set_best_score(&self, name: &str, game: GameId, value: i64) -> Result<(), StoreError> {
        self.inner.set_best_score(name, game, value)
    }

    fn raise_best_score(&self, name: &str, game: GameId, score: i64) -> Result<bool, StoreError> {
        self.bump(name, game)?;
        self.inner.raise_best_score(name, game, score)
    }

    fn recorded_scores(&self, game: GameId) -> Result<Vec<PlayerScore>, StoreError> {
        self.inner.recorded_scores(game)
    }
}

fn ledger_with(players: &[&str]) -> InMemoryAccountLedger {
    let ledger = InMemoryAccountLedger::new();
    for player in players {
        assert!(ledger.register(player));
    }
    ledger
}

#[test]
fn test_only_better_scores_are_recorded() {
    let ledger = ledger_with(&["ann"]);
    assert!(submit_score(&ledger, "ann", GameId::Wordle, 50, VIEW).unwrap().new_record);

    let lower = submit_score(&ledger, "ann", GameId::Wordle, 30, VIEW).unwrap();
    assert!(!lower.new_record);
    assert_eq!(lower.leaderboard, vec![PlayerScore::new("ann", 50)]);

    let equal = submit_score(&ledger, "ann", GameId::Wordle, 50, VIEW).unwrap();
    assert!(!equal.new_record);

    let higher = submit_score(&ledger, "ann", GameId::Wordle, 90, VIEW).unwrap();
    assert!(higher.new_record);
    assert_eq!(higher.game, GameId::Wordle);
    assert_eq!(higher.leaderboard, vec![PlayerScore::new("ann", 90)]);
}

#[test]
fn test_unknown_player_is_rejected() {
    let ledger = ledger_with(&[]);
    let err = submit_score(&ledger, "ghost", GameId::Wordle, 10, VIEW).unwrap_err();
    assert_eq!(err, RankError::PlayerNotFound("ghost".to_string()));
    assert_eq!(err.code(), "player_not_found");
}

#[test]
fn test_games_are_ranked_separately() {
    let ledger = ledger_with(&["ann", "bob", "cyd"]);
    submit_score(&ledger, "ann", GameId::Wordle, 40, VIEW).unwrap();
    submit_score(&ledger, "bob", GameId::Wordle, 60, VIEW).unwrap();
    submit_score(&ledger, "cyd", GameId::BlockPacking, 500, VIEW).unwrap();

    assert_eq!(
        top_n(&ledger, GameId::Wordle, 10).unwrap(),
        vec![PlayerScore::new("bob", 60), PlayerScore::new("ann", 40)]
    );
    assert_eq!(
        top_n(&ledger, GameId::BlockPacking, 10).unwrap(),
        vec![PlayerScore::new("cyd", 500)]
    );
    assert!(top_n(&ledger, GameId::ChessPuzzle, 10).unwrap().is_empty());
}

#[test]
fn test_top_n_limits_and_ties() {
    let ledger = ledger_with(&["dan", "ann", "cyd", "bob"]);
    submit_score(&ledger, "dan", GameId::Wordle, 70, VIEW).unwrap();
    submit_score(&ledger, "ann", GameId::Wordle, 70, VIEW).unwrap();
    submit_score(&ledger, "cyd", GameId::Wordle, 20, VIEW).unwrap();
    submit_score(&ledger, "bob", GameId::Wordle, 90, VIEW).unwrap();

    let names: Vec<_> = top_n(&ledger, GameId::Wordle, 3)
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, ["bob", "ann", "dan"]);

    assert_eq!(top_n(&ledger, GameId::Wordle, 0), Err(RankError::InvalidLimit(0)));
    assert_eq!(top_n(&ledger, GameId::Wordle, -5), Err(RankError::InvalidLimit(-5)));
}

#[test]
fn test_views_are_capped() {
    let names: Vec<String> = (0..LEADERBOARD_MAX + 20).map(|i| format!("p{i:03}")).collect();
    let ledger = InMemoryAccountLedger::new();
    for (i, name) in names.iter().enumerate() {
        ledger.register(name);
        submit_score(&ledger, name, GameId::BlockPacking, i as i64 + 1, VIEW).unwrap();
    }

    assert_eq!(
        top_n(&ledger, GameId::BlockPacking, i64::MAX).unwrap().len(),
        LEADERBOARD_MAX
    );
    let last = submit_score(&ledger, "p000", GameId::BlockPacking, 0, VIEW).unwrap();
    assert_eq!(last.leaderboard.len(), VIEW);
    assert_eq!(
        ledger.top_players(GameId::BlockPacking, 1).unwrap(),
        vec![PlayerScore::new(format!("p{:03}", LEADERBOARD_MAX + 19), (LEADERBOARD_MAX + 20) as i64)]
    );
}

#[test]
fn test_higher_score_survives_interleaved_writer() {
    let busy = BusyLedger {
        inner: ledger_with(&["ann"]),
    };
    busy.inner.set_best_score("ann", GameId::Wordle, 7).unwrap();

    let submission = submit_score(&busy, "ann", GameId::Wordle, 1000, VIEW).unwrap();

    assert!(submission.new_record);
    assert_eq!(
        busy.inner.best_scores("ann").unwrap().get(&GameId::Wordle),
        Some(&1000)
    );
    assert_eq!(submission.leaderboard, vec![PlayerScore::new("ann", 1000)]);
}

#[test]
fn test_view_size_limits_submission_board() {
    let ledger = ledger_with(&["ann", "bob", "cyd"]);
    submit_score(&ledger, "ann", GameId::Wordle, 10, VIEW).unwrap();
    submit_score(&ledger, "bob", GameId::Wordle, 20, VIEW).unwrap();

    let submission = submit_score(&ledger, "cyd", GameId::Wordle, 30, 2).unwrap();
    assert_eq!(
        submission.leaderboard,
        vec![PlayerScore::new("cyd", 30), PlayerScore::new("bob", 20)]
    );
}

#[test]
fn test_concurrent_submissions_keep_the_maximum() {
    let ledger = Arc::new(ledger_with(&["ann"]));
    let handles: Vec<_> = (1..=64)
        .map(|score| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                submit_score(ledger.as_ref(), "ann", GameId::ChessPuzzle, score, VIEW)
            })
        })
        .collect();

    let records = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .filter(|submission| submission.new_record)
        .count();

    assert!(records >= 1);
    assert_eq!(
        ledger.best_scores("ann").unwrap().get(&GameId::ChessPuzzle),
        Some(&64)
    );
}
