//! Board-layout text format.
//!
//! One line per rank, farthest rank (rank 8) first. Each line holds eight
//! `;`-separated cells. A cell is empty or `<Code>:<Side>`, where the code is
//! one of `K Q R B N p` (`P` is accepted too) and the side is `0` for White,
//! `1` for Black.
//!
//! Unknown cells become empty squares in [`LoadMode::Lenient`] and are
//! errors in [`LoadMode::Strict`]. A wrong number of ranks or cells is an
//! error in both modes.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::LayoutError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{GRID_SIZE, SQUARE_COUNT};
use crate::game_state::chess_types::{Piece, PieceKind, Position, Side};

const CELL_SEPARATOR: char = ';';
const SIDE_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Malformed cells are read as empty squares.
    #[default]
    Lenient,
    /// Malformed cells are reported as [`LayoutError::BadToken`].
    Strict,
}

pub fn parse_layout(text: &str, mode: LoadMode) -> Result<Board, LayoutError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() != GRID_SIZE as usize {
        return Err(LayoutError::RankCount(lines.len()));
    }

    let mut squares = [None; SQUARE_COUNT];
    for (line_index, line) in lines.iter().enumerate() {
        let rank = GRID_SIZE - 1 - line_index as i8;
        let cells: Vec<&str> = line.split(CELL_SEPARATOR).collect();
        if cells.len() != GRID_SIZE as usize {
            return Err(LayoutError::FileCount {
                rank,
                found: cells.len(),
            });
        }

        for (file, cell) in cells.iter().enumerate() {
            let position = Position::new(file as i8, rank);
            let piece = match parse_cell(cell) {
                Ok(piece) => piece,
                Err(()) => match mode {
                    LoadMode::Strict => {
                        return Err(LayoutError::BadToken {
                            rank,
                            file: file as i8,
                            token: cell.trim().to_owned(),
                        })
                    }
                    LoadMode::Lenient => {
                        debug!(%position, token = cell.trim(), "unrecognised layout cell read as empty");
                        None
                    }
                },
            };
            if let Some(index) = position.index() {
                squares[index] = piece;
            }
        }
    }

    Ok(Board::from_squares(squares))
}

pub fn load_layout_file(path: impl AsRef<Path>, mode: LoadMode) -> Result<Board, LayoutError> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_layout(&text, mode)
}

/// Serialize `board` in the layout format. The moved flag is not stored.
pub fn write_layout(board: &Board) -> String {
    let mut out = String::with_capacity(SQUARE_COUNT * 4);
    for rank in (0..GRID_SIZE).rev() {
        let cells: Vec<String> = (0..GRID_SIZE)
            .map(|file| {
                board
                    .get_piece(Position::new(file, rank))
                    .ok()
                    .flatten()
                    .map(piece_to_cell)
                    .unwrap_or_default()
            })
            .collect();
        out.push_str(&cells.join(&CELL_SEPARATOR.to_string()));
        out.push('\n');
    }
    out
}

fn parse_cell(cell: &str) -> Result<Option<Piece>, ()> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }

    let (code, side) = cell.split_once(SIDE_SEPARATOR).ok_or(())?;
    let kind = match code.trim() {
        "K" => PieceKind::King,
        "Q" => PieceKind::Queen,
        "R" => PieceKind::Rook,
        "B" => PieceKind::Bishop,
        "N" => PieceKind::Knight,
        "p" | "P" => PieceKind::Pawn,
        _ => return Err(()),
    };
    let side = match side.trim() {
        "0" => Side::White,
        "1" => Side::Black,
        _ => return Err(()),
    };

    Ok(Some(Piece::new(kind, side)))
}

fn piece_to_cell(piece: Piece) -> String {
    let code = match piece.kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'p',
    };
    format!("{code}{SIDE_SEPARATOR}{}", piece.side.index())
}
