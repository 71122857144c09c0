//! Conversions between positions and algebraic coordinates.
//!
//! Accepts square names such as `e4` and long-algebraic moves such as
//! `e2e4`. Castling is written as the king's two-square move (`e1g1`).

use crate::errors::ChessError;
use crate::game_state::chess_types::{ChessMove, Position};

impl Position {
    /// Parse a square name such as `e4`.
    pub fn from_algebraic(square: &str) -> Result<Position, ChessError> {
        let bytes = square.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidAlgebraic(square.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidAlgebraic(square.to_owned()));
        }

        Ok(Position::new((file - b'a') as i8, (rank - b'1') as i8))
    }

    /// Square name such as `e4`, rejecting off-board positions.
    pub fn to_algebraic(self) -> Result<String, ChessError> {
        if !self.is_valid() {
            return Err(ChessError::OutOfRange(self));
        }
        Ok(self.to_string())
    }
}

impl ChessMove {
    /// Parse a long-algebraic move such as `e2e4`.
    pub fn from_long_algebraic(text: &str) -> Result<ChessMove, ChessError> {
        let trimmed = text.trim();
        if trimmed.len() != 4 || !trimmed.is_ascii() {
            return Err(ChessError::InvalidAlgebraic(text.to_owned()));
        }
        let from = Position::from_algebraic(&trimmed[..2])?;
        let to = Position::from_algebraic(&trimmed[2..])?;
        Ok(ChessMove::new(from, to))
    }
}
