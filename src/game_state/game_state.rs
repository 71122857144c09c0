//! Turn-taking game wrapper around a [`Board`] and two [`Player`]s.
//!
//! `attempt_move` is the single state transition: on success the board is
//! replaced and the turn flips, on rejection nothing changes and the reason
//! comes back to the caller.

use tracing::{debug, info, trace, warn};

use crate::errors::{ChessError, MoveRejection};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Position, Side};
use crate::game_state::game_config::GameConfig;
use crate::game_state::player::Player;
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_generator::{
    has_legal_move, legal_destinations, legal_moves, validate_move,
};
use crate::utils::board_layout::load_layout_file;

/// Situation of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: Side,
}

impl Game {
    /// White moves first.
    pub fn new(board: Board, white: Player, black: Player) -> Self {
        Self {
            board,
            players: [white, black],
            turn: Side::White,
        }
    }

    /// Build players and the starting board from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ChessError> {
        let board = match &config.layout_path {
            Some(path) => load_layout_file(path, config.load_mode)?,
            None => Board::standard(),
        };
        info!(
            white = %config.white_name,
            black = %config.black_name,
            layout = ?config.layout_path,
            "new game"
        );
        Ok(Self::new(
            board,
            Player::new(config.white_name.clone(), config.starting_time),
            Player::new(config.black_name.clone(), config.starting_time),
        ))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Clock management belongs to the caller.
    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Full legality of `from -> to` for `side`, naming the first failed rule.
    pub fn check_move(&self, side: Side, from: Position, to: Position) -> Result<(), MoveRejection> {
        for square in [from, to] {
            if !square.is_valid() {
                return Err(MoveRejection::OutOfRange(square));
            }
        }
        if side != self.turn {
            return Err(MoveRejection::WrongTurn {
                expected: self.turn,
                attempted: side,
            });
        }
        validate_move(&self.board, side, ChessMove::new(from, to)).map(|_| ())
    }

    pub fn can_move(&self, side: Side, from: Position, to: Position) -> bool {
        self.check_move(side, from, to).is_ok()
    }

    /// Play `from -> to` for `side` if legal, then hand the turn over.
    pub fn attempt_move(
        &mut self,
        side: Side,
        from: Position,
        to: Position,
    ) -> Result<MoveOutcome, MoveRejection> {
        if let Err(reason) = self.check_move(side, from, to) {
            debug!(%side, %from, %to, %reason, "move rejected");
            return Err(reason);
        }

        // Cannot fail: validation proved both squares are on the board and `from` is occupied.
        let (next, outcome) = apply_move(&self.board, ChessMove::new(from, to)).map_err(|error| {
            warn!(%side, %from, %to, %error, "validated move failed to apply");
            MoveRejection::NoPiece(from)
        })?;

        self.board = next;
        self.turn = self.turn.opposite();
        trace!(%side, %from, %to, kind = ?outcome.kind, "move committed");
        Ok(outcome)
    }

    /// Convenience wrapper taking a long-algebraic move such as `e2e4`.
    pub fn attempt_move_str(&mut self, side: Side, text: &str) -> Result<MoveOutcome, ChessError> {
        let mv = ChessMove::from_long_algebraic(text)?;
        Ok(self.attempt_move(side, mv.from, mv.to)?)
    }

    /// Legal destinations of the piece on `from` if it belongs to the side to move.
    pub fn legal_moves_from(&self, from: Position) -> Result<Vec<Position>, ChessError> {
        match self.board.get_piece(from)? {
            Some(piece) if piece.side == self.turn => Ok(legal_destinations(&self.board, from)),
            _ => Ok(Vec::new()),
        }
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        legal_moves(&self.board, self.turn)
    }

    pub fn status(&self) -> GameStatus {
        let in_check = self.board.is_in_check(self.turn);
        let can_move = has_legal_move(&self.board, self.turn);
        match (in_check, can_move) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// The side that delivered mate, if the game ended that way.
    pub fn winner(&self) -> Option<Side> {
        (self.status() == GameStatus::Checkmate).then(|| self.turn.opposite())
    }
}
