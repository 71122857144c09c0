//! Castling detection, preconditions and application.
//!
//! Home squares come from a fixed lookup: king on the e-file, rooks on the
//! a- and h-files of the side's back rank. Transit squares are tested on
//! disposable hypothetical boards, so asking never disturbs the receiver.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    CASTLE_KING_DISTANCE, KING_HOME_FILE, LONG_ROOK_FILE, SHORT_ROOK_FILE,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

/// King and rook home squares for one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_from: Position,
    pub king_to: Position,
    pub rook_from: Position,
    pub rook_to: Position,
}

pub fn castle_squares(side: Side, direction: CastleDirection) -> CastleSquares {
    let rank = side.back_rank();
    let step = direction.king_step();
    let king_from = Position::new(KING_HOME_FILE, rank);
    let king_to = king_from.offset(step * CASTLE_KING_DISTANCE, 0);
    let rook_file = match direction {
        CastleDirection::Short => SHORT_ROOK_FILE,
        CastleDirection::Long => LONG_ROOK_FILE,
    };
    CastleSquares {
        king_from,
        king_to,
        rook_from: Position::new(rook_file, rank),
        rook_to: king_to.offset(-step, 0),
    }
}

/// A king moving exactly two files is a castle, whatever else is true.
pub fn detect_castling(board: &Board, from: Position, to: Position) -> Option<Castling> {
    let king = board.piece_at(from).filter(|piece| piece.kind == PieceKind::King)?;
    let direction = match to.delta_from(from).0 {
        CASTLE_KING_DISTANCE => CastleDirection::Short,
        d_file if d_file == -CASTLE_KING_DISTANCE => CastleDirection::Long,
        _ => return None,
    };
    Some(Castling {
        side: king.side,
        direction,
    })
}

/// King first, then the rook onto the square the king crossed.
pub fn apply_castle(
    board: &Board,
    side: Side,
    direction: CastleDirection,
) -> Result<Board, ChessError> {
    let squares = castle_squares(side, direction);
    board
        .move_piece(squares.king_from, squares.king_to)?
        .move_piece(squares.rook_from, squares.rook_to)
}

pub fn can_castle(board: &Board, side: Side, direction: CastleDirection) -> bool {
    let squares = castle_squares(side, direction);

    if !is_unmoved(board, squares.king_from, PieceKind::King, side)
        || !is_unmoved(board, squares.rook_from, PieceKind::Rook, side)
    {
        return false;
    }

    if is_king_in_check(board, side) {
        return false;
    }

    if between(squares.king_from, squares.rook_from)
        .any(|square| board.piece_at(square).is_some())
    {
        return false;
    }

    // Transit squares include the destination but never the b-file square
    // only the rook crosses.
    between(squares.king_from, squares.king_to.offset(direction.king_step(), 0)).all(|square| {
        board
            .move_piece(squares.king_from, square)
            .map(|hypothetical| !is_king_in_check(&hypothetical, side))
            .unwrap_or(false)
    })
}

fn is_unmoved(board: &Board, square: Position, kind: PieceKind, side: Side) -> bool {
    board
        .piece_at(square)
        .is_some_and(|piece| piece.kind == kind && piece.side == side && !piece.has_moved)
}

/// Squares strictly between two squares on the same rank.
fn between(a: Position, b: Position) -> impl Iterator<Item = Position> {
    let (low, high) = if a.file < b.file { (a.file, b.file) } else { (b.file, a.file) };
    let rank = a.rank;
    (low + 1..high).map(move |file| Position::new(file, rank))
}
