//! Commit a validated move to a board, dispatching castles vs. plain moves.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleDirection, ChessMove, Piece};

/// What kind of transition a committed move was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Castle(CastleDirection),
    /// A pawn reached the far rank and became a queen.
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    /// Whatever stood on the destination square before the move.
    pub captured: Option<Piece>,
}

/// Apply `mv` without any legality checks beyond the board's own bounds
/// validation. Callers are expected to have validated the move first.
pub fn apply_move(board: &Board, mv: ChessMove) -> Result<(Board, MoveOutcome), ChessError> {
    let captured = board.get_piece(mv.to)?;

    if let Some(castling) = board.is_castling(mv.from, mv.to) {
        let next = board.castle(castling.side, castling.direction)?;
        return Ok((
            next,
            MoveOutcome {
                kind: MoveKind::Castle(castling.direction),
                captured,
            },
        ));
    }

    let kind = if board.is_promoting(mv.from, mv.to) {
        MoveKind::Promotion
    } else {
        MoveKind::Normal
    };
    let next = board.move_piece(mv.from, mv.to)?;
    Ok((next, MoveOutcome { kind, captured }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Position, Side};

    fn pos(square: &str) -> Position {
        Position::from_algebraic(square).expect("test square should parse")
    }

    #[test]
    fn plain_capture_reports_the_victim() {
        let board = Board::standard()
            .move_piece(pos("e2"), pos("e4"))
            .and_then(|b| b.move_piece(pos("d7"), pos("d5")))
            .expect("setup moves should apply");
        let (next, outcome) =
            apply_move(&board, ChessMove::new(pos("e4"), pos("d5"))).expect("move should apply");
        assert_eq!(outcome.kind, MoveKind::Normal);
        assert_eq!(outcome.captured.map(|p| (p.kind, p.side)), Some((PieceKind::Pawn, Side::Black)));
        assert_eq!(next.get_piece(pos("e4")).expect("on board"), None);
    }

    #[test]
    fn king_two_step_moves_the_rook_too() {
        let board = Board::empty()
            .with_piece(pos("e1"), Some(Piece::new(PieceKind::King, Side::White)))
            .and_then(|b| b.with_piece(pos("h1"), Some(Piece::new(PieceKind::Rook, Side::White))))
            .expect("test board should build");
        let (next, outcome) =
            apply_move(&board, ChessMove::new(pos("e1"), pos("g1"))).expect("castle should apply");
        assert_eq!(outcome.kind, MoveKind::Castle(CastleDirection::Short));
        assert_eq!(next.get_piece(pos("f1")).expect("on board").map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(next.get_piece(pos("g1")).expect("on board").map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(next.get_piece(pos("h1")).expect("on board"), None);
    }

    #[test]
    fn promotion_is_reported() {
        let board = Board::empty()
            .with_piece(pos("a2"), Some(Piece::new(PieceKind::Pawn, Side::Black)))
            .expect("test board should build");
        let (_, outcome) =
            apply_move(&board, ChessMove::new(pos("a2"), pos("a1"))).expect("move should apply");
        assert_eq!(outcome.kind, MoveKind::Promotion);
    }
}
