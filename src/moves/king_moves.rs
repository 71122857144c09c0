//! Castling destinations added on top of the king's single-step moves.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CASTLE_KING_DISTANCE;
use crate::game_state::chess_types::{CastleDirection, Piece, Position};

/// Two-square king destinations for every direction `Board::can_castle` allows.
pub fn castling_destinations(king: Piece, from: Position, board: &Board) -> Vec<Position> {
    CastleDirection::BOTH
        .into_iter()
        .filter(|direction| board.can_castle(king.side, *direction))
        .map(|direction| from.offset(direction.king_step() * CASTLE_KING_DISTANCE, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::moves::piece_moves::possible_moves;

    fn pos(square: &str) -> Position {
        Position::from_algebraic(square).expect("test square should parse")
    }

    fn castling_board() -> Board {
        Board::empty()
            .with_piece(pos("e1"), Some(Piece::new(PieceKind::King, Side::White)))
            .and_then(|b| b.with_piece(pos("a1"), Some(Piece::new(PieceKind::Rook, Side::White))))
            .and_then(|b| b.with_piece(pos("h1"), Some(Piece::new(PieceKind::Rook, Side::White))))
            .and_then(|b| b.with_piece(pos("e8"), Some(Piece::new(PieceKind::King, Side::Black))))
            .expect("test board should build")
    }

    #[test]
    fn king_offers_both_castles_on_clean_back_rank() {
        let board = castling_board();
        let king = Piece::new(PieceKind::King, Side::White);
        assert_eq!(
            castling_destinations(king, pos("e1"), &board),
            vec![pos("g1"), pos("c1")]
        );
        let moves = possible_moves(king, pos("e1"), &board).expect("e1 is on the board");
        assert!(moves.contains(&pos("g1")));
        assert!(moves.contains(&pos("c1")));
        assert_eq!(moves.len(), 5 + 2);
    }

    #[test]
    fn facing_kings_on_home_squares_do_not_recurse() {
        // Both sides keep castling rights with an open e-file between the kings.
        let board = castling_board()
            .with_piece(pos("a8"), Some(Piece::new(PieceKind::Rook, Side::Black)))
            .and_then(|b| b.with_piece(pos("h8"), Some(Piece::new(PieceKind::Rook, Side::Black))))
            .expect("test board should build");
        assert!(!board.is_in_check(Side::White));
        assert!(!board.is_in_check(Side::Black));
        let king = Piece::new(PieceKind::King, Side::Black);
        assert_eq!(castling_destinations(king, pos("e8"), &board).len(), 2);
    }
}
