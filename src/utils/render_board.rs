//! Plain-text dump of a [`Board`], rank 8 on top with file and rank labels.
//!
//! Empty squares print as `·`. The moved flag is not shown.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::GRID_SIZE;
use crate::game_state::chess_types::{Piece, PieceKind, Side};

const FILE_LABELS: &str = "  a b c d e f g h";
const EMPTY_SQUARE: char = '·';

/// Glyphs per side, ordered King, Queen, Rook, Bishop, Knight, Pawn.
const GLYPHS: [[char; 6]; 2] = [
    ['♔', '♕', '♖', '♗', '♘', '♙'],
    ['♚', '♛', '♜', '♝', '♞', '♟'],
];

pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(GRID_SIZE as usize + 2);
    lines.push(FILE_LABELS.to_owned());

    for (rank_index, rank) in board.as_array().chunks(GRID_SIZE as usize).enumerate().rev() {
        let label = rank_index + 1;
        let cells: Vec<String> = rank
            .iter()
            .copied()
            .map(|square| square.map_or(EMPTY_SQUARE, glyph).to_string())
            .collect();
        lines.push(format!("{label} {} {label}", cells.join(" ")));
    }

    lines.push(FILE_LABELS.to_owned());
    lines.join("\n")
}

fn glyph(piece: Piece) -> char {
    let column = match piece.kind {
        PieceKind::King => 0,
        PieceKind::Queen => 1,
        PieceKind::Rook => 2,
        PieceKind::Bishop => 3,
        PieceKind::Knight => 4,
        PieceKind::Pawn => 5,
    };
    let row = match piece.side {
        Side::White => 0,
        Side::Black => 1,
    };
    GLYPHS[row][column]
}
