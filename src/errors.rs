//! Errors used throughout the rules engine.
//!
//! Each concern gets its own enum so callers can match on exactly the failure
//! modes an operation can produce:
//! - [`ChessError`] for board queries, coordinate parsing and construction;
//! - [`MoveRejection`] for `Game::attempt_move`, which never changes state
//!   when it returns one;
//! - [`LayoutError`] for the `;`-separated board-layout format;
//! - [`ConfigError`] for `GameConfig` options.

use thiserror::Error;

use crate::game_state::chess_types::{Position, Side};

/// Unified error type for board-level operations.
#[derive(Error, Debug)]
pub enum ChessError {
    /// A raw coordinate outside `0..8` on either axis reached a public entry point.
    #[error("position {0} is off the board")]
    OutOfRange(Position),

    /// Tried to move a piece off an empty square.
    #[error("no piece at {0}")]
    NoPieceAt(Position),

    /// A coordinate string such as `e4` could not be parsed.
    #[error("invalid algebraic coordinate: {0:?}")]
    InvalidAlgebraic(String),

    #[error("move rejected: {0}")]
    Rejected(#[from] MoveRejection),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Why a move attempt was refused. The game state is untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("position {0} is off the board")]
    OutOfRange(Position),

    #[error("it is {expected}'s turn, not {attempted}'s")]
    WrongTurn { expected: Side, attempted: Side },

    #[error("no piece at {0}")]
    NoPiece(Position),

    #[error("the piece at {0} belongs to the opponent")]
    NotYourPiece(Position),

    #[error("{to} is not reachable from {from}")]
    NotALegalDestination { from: Position, to: Position },

    #[error("move would leave the king in check")]
    LeavesKingInCheck,
}

/// Problems reading the board-layout text format.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The layout did not contain exactly eight non-blank lines.
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    /// A rank line did not split into exactly eight cells.
    #[error("rank {rank} has {found} cells, expected 8")]
    FileCount { rank: i8, found: usize },

    /// Strict mode only: a cell that is neither empty nor `<Code>:<Side>`.
    #[error("unrecognised token {token:?} at file {file}, rank {rank}")]
    BadToken { rank: i8, file: i8, token: String },

    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option {0:?}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for option {name:?}")]
    InvalidValue { name: String, value: String },
}
