//! Per-kind `(d_file, d_rank)` delta tables.
//!
//! Pawn deltas are written from White's point of view; `pawn_moves` flips the
//! rank component for Black.

use crate::game_state::chess_types::PieceKind;

pub type Delta = (i8, i8);

pub const ROOK_DELTAS: [Delta; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub const BISHOP_DELTAS: [Delta; 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Shared by the queen and the king, and by the line-of-sight scan in check detection.
pub const QUEEN_DELTAS: [Delta; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const KING_DELTAS: [Delta; 8] = QUEEN_DELTAS;

pub const KNIGHT_DELTAS: [Delta; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const PAWN_PUSH: Delta = (0, 1);
pub const PAWN_DOUBLE_PUSH: Delta = (0, 2);
pub const PAWN_CAPTURES: [Delta; 2] = [(1, 1), (-1, 1)];

/// Movement table for the non-pawn kinds. Pawns are handled entirely by
/// `pawn_moves`, so they get an empty table here.
#[inline]
pub const fn deltas_for(kind: PieceKind) -> &'static [Delta] {
    match kind {
        PieceKind::King => &KING_DELTAS,
        PieceKind::Queen => &QUEEN_DELTAS,
        PieceKind::Rook => &ROOK_DELTAS,
        PieceKind::Bishop => &BISHOP_DELTAS,
        PieceKind::Knight => &KNIGHT_DELTAS,
        PieceKind::Pawn => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_covers_rook_and_bishop_directions() {
        for delta in ROOK_DELTAS.iter().chain(BISHOP_DELTAS.iter()) {
            assert!(QUEEN_DELTAS.contains(delta));
        }
        assert_eq!(deltas_for(PieceKind::Queen).len(), 8);
        assert!(deltas_for(PieceKind::Pawn).is_empty());
    }
}
