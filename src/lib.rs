//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the position model (board, pieces, players, game), per-piece move
//! generation, legality and check detection, the board-layout text format,
//! and simple automated move choosers.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
    pub mod player;
}

pub mod moves {
    pub mod king_moves;
    pub mod move_deltas;
    pub mod pawn_moves;
    pub mod piece_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_layout;
    pub mod render_board;
}

pub use errors::{ChessError, ConfigError, LayoutError, MoveRejection};
pub use game_state::board::Board;
pub use game_state::chess_types::{
    CastleDirection, Castling, ChessMove, Piece, PieceKind, Position, Side,
};
pub use game_state::game_config::GameConfig;
pub use game_state::game_state::{Game, GameStatus};
pub use game_state::player::Player;
pub use move_generation::legal_move_apply::{MoveKind, MoveOutcome};
pub use moves::piece_moves::possible_moves;
pub use utils::board_layout::LoadMode;
