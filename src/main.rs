//! Self-play runner (default binary).
//!
//! Registers a few bots, lets each play every game once per round, submits their
//! scores and logs the resulting leaderboards. Configuration comes from the
//! `ARCADE_*` environment variables; log filtering from `RUST_LOG`.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcade::adapter::ArcadeConfig;
use arcade::selfplay::{sample_puzzle, Arcade, DEFAULT_MAX_PLACEMENTS};
use arcade::types::GameId;

const BOTS: [&str; 4] = ["ada", "bea", "cyd", "dov"];
const ROUNDS: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ArcadeConfig::from_env();
    info!(?config, "starting self-play");

    let arcade = Arcade::from_config(&config);
    for bot in BOTS {
        arcade.register(bot);
    }

    for round in 1..=ROUNDS {
        for bot in BOTS {
            let status = arcade
                .play_word_game(bot)
                .with_context(|| format!("word game for {bot}"))?;
            let word_score = arcade.words().score(bot)?;
            arcade.submit(bot, GameId::Wordle, word_score)?;

            let session = arcade
                .play_block_packing(bot, DEFAULT_MAX_PLACEMENTS)
                .with_context(|| format!("block packing for {bot}"))?;
            arcade.submit(bot, GameId::BlockPacking, i64::from(session.score()))?;

            let puzzle = sample_puzzle();
            let rating = i64::from(puzzle.rating());
            if arcade.solve_puzzle(bot, puzzle)? {
                arcade.submit(bot, GameId::ChessPuzzle, rating * round as i64)?;
            }

            info!(
                round,
                bot,
                word = ?status,
                word_score,
                packing_score = session.score(),
                packing_over = session.is_over(),
                "round played"
            );
        }
    }

    for game in GameId::ALL {
        let board = arcade
            .leaderboard(game)
            .with_context(|| format!("leaderboard for {game}"))?;
        for (place, entry) in board.iter().enumerate() {
            info!(game = %game, place = place + 1, name = %entry.name, score = entry.score, "leaderboard");
        }
    }

    Ok(())
}
