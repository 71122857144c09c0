//! Legal move filtering.
//!
//! A pseudo-legal destination is legal when the hypothetical board after the
//! plain relocation leaves the mover's king out of check.

use crate::errors::MoveRejection;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Piece, Position, Side};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::piece_moves::pseudo_legal_moves;

/// Validate everything about `mv` for `side` except whose turn it is.
pub fn validate_move(board: &Board, side: Side, mv: ChessMove) -> Result<Piece, MoveRejection> {
    for square in [mv.from, mv.to] {
        if !square.is_valid() {
            return Err(MoveRejection::OutOfRange(square));
        }
    }

    let piece = board
        .piece_at(mv.from)
        .ok_or(MoveRejection::NoPiece(mv.from))?;
    if piece.side != side {
        return Err(MoveRejection::NotYourPiece(mv.from));
    }

    if !pseudo_legal_moves(piece, mv.from, board).contains(&mv.to) {
        return Err(MoveRejection::NotALegalDestination {
            from: mv.from,
            to: mv.to,
        });
    }

    if leaves_king_in_check(board, side, mv) {
        return Err(MoveRejection::LeavesKingInCheck);
    }

    Ok(piece)
}

fn leaves_king_in_check(board: &Board, side: Side, mv: ChessMove) -> bool {
    match board.move_piece(mv.from, mv.to) {
        Ok(next) => is_king_in_check(&next, side),
        Err(_) => true,
    }
}

/// Legal destinations of whatever stands on `from`, for its owner.
pub fn legal_destinations(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    pseudo_legal_moves(piece, from, board)
        .into_iter()
        .filter(|to| !leaves_king_in_check(board, piece.side, ChessMove::new(from, *to)))
        .collect()
}

/// Every legal move available to `side`, in board order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<ChessMove> {
    board
        .pieces_of(side)
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| ChessMove::new(from, to))
        })
        .collect()
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|(from, _)| !legal_destinations(board, from).is_empty())
}
