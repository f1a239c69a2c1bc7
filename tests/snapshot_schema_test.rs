//! Snapshot schema tests - JSON shape of values handed to external stores

use arcade::core::{
    ChessPuzzle, MoveVerdict, PlayerScore, PuzzleSession, PuzzleTrainer, ScriptedShapeGenerator,
    ShapeKind, Slot, WordGame,
};
use arcade::types::GameId;
use serde_json::{json, Value};

#[test]
fn test_game_ids_use_snake_case() {
    let ids: Vec<Value> = GameId::ALL
        .iter()
        .map(|id| serde_json::to_value(id).unwrap())
        .collect();
    assert_eq!(ids, vec![json!("wordle"), json!("block_packing"), json!("chess_puzzle")]);
}

#[test]
fn test_word_game_snapshot_roundtrip() {
    let mut game = WordGame::start("crane").unwrap();
    game.submit_guess("slate").unwrap();

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["answer"], "crane");
    assert_eq!(value["guesses"][0]["word"], "slate");
    assert_eq!(value["guesses"][0]["outcomes"][2], "correct");

    let back: WordGame = serde_json::from_value(value).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_packing_snapshot_has_tagged_slots() {
    let mut generator = ScriptedShapeGenerator::repeating(ShapeKind::Mono);
    let mut session = PuzzleSession::new(4, 4, &mut generator);
    session.execute_placement(0, 0, 0, &mut generator).unwrap();

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["tray"][0], json!({ "state": "empty" }));
    assert_eq!(value["tray"][1]["state"], "occupied");
    assert_eq!(value["grid"]["rows"], 4);

    let back: PuzzleSession = serde_json::from_value(value).unwrap();
    assert_eq!(back, session);
    assert!(matches!(back.tray()[0], Slot::Empty));
}

#[test]
fn test_verdicts_and_rows_serialize_flat() {
    assert_eq!(
        serde_json::to_value(MoveVerdict::PuzzleSolved).unwrap(),
        json!({ "verdict": "puzzle_solved" })
    );
    assert_eq!(
        serde_json::to_value(PlayerScore::new("ann", 90)).unwrap(),
        json!({ "name": "ann", "score": 90 })
    );

    let trainer = PuzzleTrainer::with_puzzle(ChessPuzzle::new(
        "p",
        "8/8/8/8/8/8/8/8 w - - 0 1",
        vec!["a1a2".to_string()],
        900,
        Vec::new(),
    ));
    let back: PuzzleTrainer =
        serde_json::from_str(&serde_json::to_string(&trainer).unwrap()).unwrap();
    assert_eq!(back, trainer);
}
