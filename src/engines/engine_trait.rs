//! Move chooser abstraction for automated players.
//!
//! A chooser looks at a game and proposes a move for the side to move. The
//! proposal still goes through `Game::attempt_move`, so choosers cannot bend
//! the rules.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::Game;

pub trait MoveChooser: Send {
    fn name(&self) -> &str;

    /// `None` when the side to move has no legal move.
    fn choose_move(&mut self, game: &Game) -> Option<ChessMove>;
}
