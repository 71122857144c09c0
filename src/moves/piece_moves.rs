//! Pseudo-legal destination generation for every piece kind.
//!
//! A single match on [`PieceKind`] dispatches to the shared jump and slide
//! walkers, with pawns and the king's castling squares handled by their own
//! modules. Nothing here checks whether the mover's own king ends up in check.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::moves::king_moves::castling_destinations;
use crate::moves::move_deltas::{deltas_for, Delta};
use crate::moves::pawn_moves::pawn_moves;

/// Every square `piece` standing on `from` could move to, ignoring self-check.
///
/// Destinations are unique. Off-board squares are never produced, and an
/// off-board `from` is rejected with [`ChessError::OutOfRange`].
pub fn possible_moves(
    piece: Piece,
    from: Position,
    board: &Board,
) -> Result<Vec<Position>, ChessError> {
    if !from.is_valid() {
        return Err(ChessError::OutOfRange(from));
    }
    Ok(pseudo_legal_moves(piece, from, board))
}

/// `possible_moves` for a `from` already known to be on the board.
pub(crate) fn pseudo_legal_moves(piece: Piece, from: Position, board: &Board) -> Vec<Position> {
    let mut out = attacked_squares(piece, from, board);
    if piece.kind == PieceKind::King {
        out.extend(castling_destinations(piece, from, board));
    }
    out
}

/// Squares `piece` on `from` threatens: its pseudo-legal moves without the
/// king's castling destinations. A castling destination is always an empty
/// square, so it never matters when testing whether a king is attacked.
pub(crate) fn attacked_squares(piece: Piece, from: Position, board: &Board) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, from, board),
        PieceKind::King | PieceKind::Knight => {
            jump_targets(piece, from, deltas_for(piece.kind), board)
        }
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => deltas_for(piece.kind)
            .iter()
            .flat_map(|delta| slide_targets(piece, from, *delta, board))
            .collect(),
    }
}

/// One step per delta: keep on-board targets that are empty or hold an enemy.
fn jump_targets(piece: Piece, from: Position, deltas: &[Delta], board: &Board) -> Vec<Position> {
    deltas
        .iter()
        .filter_map(|(d_file, d_rank)| from.checked_offset(*d_file, *d_rank))
        .filter(|to| match board.piece_at(*to) {
            None => true,
            Some(occupant) => occupant.side != piece.side,
        })
        .collect()
}

/// Walk one delta until the edge or a blocker. A friendly blocker is
/// excluded, an enemy blocker is included as a capture.
fn slide_targets(piece: Piece, from: Position, delta: Delta, board: &Board) -> Vec<Position> {
    let mut out = Vec::new();
    let mut cursor = from;
    while let Some(next) = cursor.checked_offset(delta.0, delta.1) {
        match board.piece_at(next) {
            None => out.push(next),
            Some(occupant) => {
                if occupant.side != piece.side {
                    out.push(next);
                }
                break;
            }
        }
        cursor = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Side;

    fn pos(square: &str) -> Position {
        Position::from_algebraic(square).expect("test square should parse")
    }

    fn moves(piece: Piece, from: &str, board: &Board) -> Vec<Position> {
        possible_moves(piece, pos(from), board).expect("test square is on the board")
    }

    fn sorted(mut squares: Vec<Position>) -> Vec<Position> {
        squares.sort();
        squares
    }

    #[test]
    fn rook_stops_at_first_blocker_and_captures_only_enemies() {
        let rook = Piece::new(PieceKind::Rook, Side::White);
        let board = Board::empty()
            .with_piece(pos("d4"), Some(rook))
            .and_then(|b| b.with_piece(pos("d6"), Some(Piece::new(PieceKind::Pawn, Side::Black))))
            .and_then(|b| b.with_piece(pos("f4"), Some(Piece::new(PieceKind::Knight, Side::White))))
            .expect("test board should build");

        let north = slide_targets(rook, pos("d4"), (0, 1), &board);
        assert_eq!(north, vec![pos("d5"), pos("d6")]);

        let east = slide_targets(rook, pos("d4"), (1, 0), &board);
        assert_eq!(east, vec![pos("e4")]);

        let all = moves(rook, "d4", &board);
        assert!(!all.contains(&pos("d7")));
        assert!(!all.contains(&pos("f4")));
        assert!(!all.contains(&pos("g4")));
        assert_eq!(all.len(), 2 + 1 + 3 + 3);
    }

    #[test]
    fn knight_jumps_over_pieces_and_skips_friends() {
        let knight = Piece::new(PieceKind::Knight, Side::White);
        let board = Board::standard();
        let targets = sorted(moves(knight, "g1", &board));
        assert_eq!(targets, sorted(vec![pos("f3"), pos("h3")]));
    }

    #[test]
    fn knight_in_center_has_eight_targets() {
        let knight = Piece::new(PieceKind::Knight, Side::Black);
        let board = Board::empty()
            .with_piece(pos("d4"), Some(knight))
            .expect("test board should build");
        assert_eq!(moves(knight, "d4", &board).len(), 8);
    }

    #[test]
    fn bishop_in_corner_walks_one_diagonal() {
        let bishop = Piece::new(PieceKind::Bishop, Side::White);
        let board = Board::empty()
            .with_piece(pos("a1"), Some(bishop))
            .expect("test board should build");
        let targets = moves(bishop, "a1", &board);
        assert_eq!(targets.len(), 7);
        assert_eq!(targets.last(), Some(&pos("h8")));
    }

    #[test]
    fn queen_moves_are_union_of_rook_and_bishop() {
        let side = Side::Black;
        let board = Board::empty()
            .with_piece(pos("e5"), Some(Piece::new(PieceKind::Queen, side)))
            .and_then(|b| b.with_piece(pos("c3"), Some(Piece::new(PieceKind::Pawn, Side::White))))
            .expect("test board should build");

        let queen = moves(Piece::new(PieceKind::Queen, side), "e5", &board);
        let mut union = moves(Piece::new(PieceKind::Rook, side), "e5", &board);
        union.extend(moves(Piece::new(PieceKind::Bishop, side), "e5", &board));
        assert_eq!(sorted(queen), sorted(union));
    }

    #[test]
    fn nothing_moves_in_the_starting_position_except_pawns_and_knights() {
        let board = Board::standard();
        for (square, occupant) in board.squares() {
            let Some(piece) = occupant else { continue };
            let count = pseudo_legal_moves(piece, square, &board).len();
            match piece.kind {
                PieceKind::Pawn | PieceKind::Knight => assert_eq!(count, 2, "{square}"),
                _ => assert_eq!(count, 0, "{square}"),
            }
        }
    }

    #[test]
    fn off_board_origin_is_rejected() {
        let rook = Piece::new(PieceKind::Rook, Side::White);
        let board = Board::empty();
        for from in [
            Position::new(-1, 3),
            Position::new(8, 0),
            Position::new(i8::MAX, 0),
            Position::new(0, i8::MIN),
        ] {
            assert!(matches!(
                possible_moves(rook, from, &board),
                Err(ChessError::OutOfRange(p)) if p == from
            ));
        }
    }
}
