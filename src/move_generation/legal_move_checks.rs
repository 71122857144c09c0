//! Check detection by projecting outward from the king.
//!
//! Only pieces the king can "see" along a queen line, plus knights a knight's
//! jump away, can possibly attack it. Those few candidates are asked for their
//! attack sets instead of enumerating every enemy move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Position, Side};
use crate::moves::move_deltas::{KNIGHT_DELTAS, QUEEN_DELTAS};
use crate::moves::piece_moves::attacked_squares;

/// Whether `side`'s king is attacked. A board without such a king is never in check.
pub fn is_king_in_check(board: &Board, side: Side) -> bool {
    match board.king_position(side) {
        Some(king_square) => is_square_attacked_for(board, king_square, side),
        None => false,
    }
}

/// Whether a piece of `side` standing on `square` would be attacked by the
/// opponent. `square` is expected to hold that piece already.
pub fn is_square_attacked_for(board: &Board, square: Position, side: Side) -> bool {
    let sighted = line_of_sight(board, square, side);
    let by_line = sighted.iter().any(|candidate| {
        board
            .piece_at(*candidate)
            .filter(|piece| piece.side != side)
            .is_some_and(|piece| attacked_squares(piece, *candidate, board).contains(&square))
    });
    if by_line {
        return true;
    }

    KNIGHT_DELTAS
        .iter()
        .filter_map(|(d_file, d_rank)| square.checked_offset(*d_file, *d_rank))
        .filter_map(|target| board.piece_at(target))
        .any(|piece| piece.kind == PieceKind::Knight && piece.side != side)
}

/// Squares visible from `square` along the eight queen lines, each line
/// ending at (and including) its first occupied square.
pub fn line_of_sight(board: &Board, square: Position, side: Side) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    for (d_file, d_rank) in QUEEN_DELTAS {
        let mut cursor = square;
        while let Some(next) = cursor.checked_offset(d_file, d_rank) {
            out.push(next);
            if board.piece_at(next).is_some() {
                break;
            }
            cursor = next;
        }
    }
    // Friendly blockers can never attack; drop them so callers only see
    // empty squares and enemy candidates.
    out.retain(|target| {
        board
            .piece_at(*target)
            .map_or(true, |piece: Piece| piece.side != side)
    });
    out
}

/// Every enemy piece currently giving check to `side`, with its square.
pub fn checkers(board: &Board, side: Side) -> Vec<(Position, Piece)> {
    let Some(king_square) = board.king_position(side) else {
        return Vec::new();
    };
    board
        .pieces_of(side.opposite())
        .filter(|(from, piece)| attacked_squares(*piece, *from, board).contains(&king_square))
        .collect()
}
