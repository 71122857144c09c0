//! Replay a list of long-algebraic moves and print the resulting position.
//!
//! Run with:
//! `cargo run --bin replay_moves -- e2e4 e7e5 g1f3`
//! `cargo run --bin replay_moves -- --random 40`
//!
//! Game setup comes from the `CHESS_MODEL_*` environment variables (see
//! `GameConfig::from_env`). Set `RUST_LOG`-style verbosity with `-v`.

use chess_model::engines::engine_random::RandomMover;
use chess_model::engines::engine_trait::MoveChooser;
use chess_model::utils::render_board::render_board;
use chess_model::{ChessError, Game, GameConfig, GameStatus};
use tracing::{info, warn, Level};

fn main() -> Result<(), ChessError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::TRACE } else { Level::INFO })
        .with_target(false)
        .init();

    let config = GameConfig::from_env()?;
    let mut game = Game::from_config(&config)?;

    let random_plies = args
        .windows(2)
        .find(|pair| pair[0] == "--random")
        .and_then(|pair| pair[1].parse::<usize>().ok());

    if let Some(plies) = random_plies {
        let mut chooser = RandomMover::new();
        info!(chooser = chooser.name(), plies, "playing random moves");
        for _ in 0..plies {
            let side = game.turn();
            let Some(mv) = chooser.choose_move(&game) else {
                break;
            };
            game.attempt_move(side, mv.from, mv.to)?;
            println!("{side}: {mv}");
        }
    } else {
        for text in args.iter().filter(|a| !a.starts_with('-')) {
            let side = game.turn();
            if let Err(error) = game.attempt_move_str(side, text) {
                warn!(%side, mv = %text, %error, "skipping move");
            }
        }
    }

    println!("{}", render_board(game.board()));
    let status = game.status();
    match game.winner() {
        Some(winner) => println!("{status:?}: {winner} wins"),
        None if status == GameStatus::Stalemate => println!("stalemate"),
        None => println!("{} to move ({status:?})", game.turn()),
    }

    Ok(())
}
