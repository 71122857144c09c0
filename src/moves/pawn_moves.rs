//! Pawn movement: quiet pushes onto empty squares, the double step from the
//! home rank, and diagonal captures. Promotion is applied by
//! `Board::move_piece`, not here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_deltas::{PAWN_CAPTURES, PAWN_DOUBLE_PUSH, PAWN_PUSH};

pub fn pawn_moves(pawn: Piece, from: Position, board: &Board) -> Vec<Position> {
    let direction = pawn.side.forward();
    let mut out = Vec::with_capacity(4);

    if let Some(one) = from.checked_offset(PAWN_PUSH.0, PAWN_PUSH.1 * direction) {
        if board.piece_at(one).is_none() {
            out.push(one);

            if from.rank == pawn.side.pawn_rank() {
                if let Some(two) =
                    from.checked_offset(PAWN_DOUBLE_PUSH.0, PAWN_DOUBLE_PUSH.1 * direction)
                {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for (d_file, d_rank) in PAWN_CAPTURES {
        let Some(target) = from.checked_offset(d_file, d_rank * direction) else {
            continue;
        };
        if let Some(occupant) = board.piece_at(target) {
            if occupant.side != pawn.side {
                out.push(target);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Side};

    fn pos(square: &str) -> Position {
        Position::from_algebraic(square).expect("test square should parse")
    }

    fn white_pawn() -> Piece {
        Piece::new(PieceKind::Pawn, Side::White)
    }

    fn black_pawn() -> Piece {
        Piece::new(PieceKind::Pawn, Side::Black)
    }

    #[test]
    fn home_rank_pawn_has_single_and_double_step() {
        let board = Board::standard();
        assert_eq!(pawn_moves(white_pawn(), pos("e2"), &board), vec![pos("e3"), pos("e4")]);
        assert_eq!(pawn_moves(black_pawn(), pos("d7"), &board), vec![pos("d6"), pos("d5")]);
    }

    #[test]
    fn blocked_first_square_removes_both_pushes() {
        let board = Board::standard()
            .with_piece(pos("e3"), Some(Piece::new(PieceKind::Knight, Side::Black)))
            .expect("test board should build");
        assert!(pawn_moves(white_pawn(), pos("e2"), &board).is_empty());
    }

    #[test]
    fn blocked_second_square_keeps_single_push() {
        let board = Board::standard()
            .with_piece(pos("e4"), Some(Piece::new(PieceKind::Knight, Side::White)))
            .expect("test board should build");
        assert_eq!(pawn_moves(white_pawn(), pos("e2"), &board), vec![pos("e3")]);
    }

    #[test]
    fn no_double_step_off_home_rank() {
        let board = Board::empty()
            .with_piece(pos("c3"), Some(white_pawn()))
            .expect("test board should build");
        assert_eq!(pawn_moves(white_pawn(), pos("c3"), &board), vec![pos("c4")]);
    }

    #[test]
    fn diagonals_only_capture_enemies() {
        let board = Board::empty()
            .with_piece(pos("d4"), Some(white_pawn()))
            .and_then(|b| b.with_piece(pos("c5"), Some(black_pawn())))
            .and_then(|b| b.with_piece(pos("e5"), Some(Piece::new(PieceKind::Rook, Side::White))))
            .expect("test board should build");
        let moves = pawn_moves(white_pawn(), pos("d4"), &board);
        assert_eq!(moves, vec![pos("d5"), pos("c5")]);
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let board = Board::empty()
            .with_piece(pos("d5"), Some(black_pawn()))
            .and_then(|b| b.with_piece(pos("d4"), Some(white_pawn())))
            .expect("test board should build");
        assert!(pawn_moves(black_pawn(), pos("d5"), &board).is_empty());
        assert!(pawn_moves(white_pawn(), pos("d4"), &board).is_empty());
    }

    #[test]
    fn edge_file_pawn_has_one_capture_direction() {
        let board = Board::empty()
            .with_piece(pos("a6"), Some(black_pawn()))
            .and_then(|b| b.with_piece(pos("b5"), Some(white_pawn())))
            .expect("test board should build");
        assert_eq!(pawn_moves(black_pawn(), pos("a6"), &board), vec![pos("a5"), pos("b5")]);
    }
}
