//! Immutable 64-square board snapshot.
//!
//! Every operation that looks like a mutation returns a fresh `Board`. Legality
//! checks build hypothetical successors freely without touching the receiver,
//! and check detection relies on that.

use crate::errors::ChessError;
use crate::game_state::chess_rules::{STARTING_LAYOUT, SQUARE_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::castling;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::board_layout::{parse_layout, LoadMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// Build from squares indexed `rank * 8 + file`.
    #[inline]
    pub const fn from_squares(squares: [Option<Piece>; SQUARE_COUNT]) -> Self {
        Self { squares }
    }

    /// The standard chess starting position.
    pub fn standard() -> Self {
        parse_layout(STARTING_LAYOUT, LoadMode::Strict).expect("starting layout should always parse")
    }

    /// Raw square array, indexed `rank * 8 + file`.
    #[inline]
    pub fn as_array(&self) -> &[Option<Piece>; SQUARE_COUNT] {
        &self.squares
    }

    #[inline]
    pub fn is_valid_position(position: Position) -> bool {
        position.is_valid()
    }

    /// Occupant of `position`, rejecting off-board coordinates.
    pub fn get_piece(&self, position: Position) -> Result<Option<Piece>, ChessError> {
        let index = position.index().ok_or(ChessError::OutOfRange(position))?;
        Ok(self.squares[index])
    }

    /// Occupant of `position`, `None` for empty or off-board squares.
    #[inline]
    pub(crate) fn piece_at(&self, position: Position) -> Option<Piece> {
        position.index().and_then(|index| self.squares[index])
    }

    /// A copy of this board with `position` set to `piece`.
    pub fn with_piece(&self, position: Position, piece: Option<Piece>) -> Result<Board, ChessError> {
        let index = position.index().ok_or(ChessError::OutOfRange(position))?;
        let mut next = *self;
        next.squares[index] = piece;
        Ok(next)
    }

    /// Every square with its occupant, a1 first then along each rank.
    pub fn squares(&self) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(index, piece)| (Position::from_index(index), *piece))
    }

    /// Occupied squares belonging to `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares().filter_map(move |(position, occupant)| {
            occupant
                .filter(|piece| piece.side == side)
                .map(|piece| (position, piece))
        })
    }

    /// First king of `side` in index order.
    pub fn king_position(&self, side: Side) -> Option<Position> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }

    /// Relocate the piece on `from` to `to`, capturing anything there.
    ///
    /// The placed piece is marked as moved. A pawn reaching its promotion rank
    /// becomes a queen of the same side.
    pub fn move_piece(&self, from: Position, to: Position) -> Result<Board, ChessError> {
        let piece = self.get_piece(from)?.ok_or(ChessError::NoPieceAt(from))?;
        if !to.is_valid() {
            return Err(ChessError::OutOfRange(to));
        }

        let placed = if self.is_promoting(from, to) {
            Piece::new(PieceKind::Queen, piece.side)
        } else {
            piece
        };

        self.with_piece(to, Some(placed.moved()))?
            .with_piece(from, None)
    }

    /// Whether moving `from` to `to` is a pawn landing on its promotion rank.
    pub fn is_promoting(&self, from: Position, to: Position) -> bool {
        match self.piece_at(from) {
            Some(piece) if piece.kind == PieceKind::Pawn => to.rank == piece.side.promotion_rank(),
            _ => false,
        }
    }

    /// Detect a two-square king move. Says nothing about legality.
    pub fn is_castling(&self, from: Position, to: Position) -> Option<Castling> {
        castling::detect_castling(self, from, to)
    }

    /// Apply a castle for `side` that has already been found legal.
    pub fn castle(&self, side: Side, direction: CastleDirection) -> Result<Board, ChessError> {
        castling::apply_castle(self, side, direction)
    }

    /// Whether `side` may castle in `direction` right now.
    pub fn can_castle(&self, side: Side, direction: CastleDirection) -> bool {
        castling::can_castle(self, side, direction)
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        is_king_in_check(self, side)
    }

    /// Flip ranks and swap every piece's side. Position-wise, white and black
    /// trade places while every rule keeps its meaning.
    pub fn mirrored(&self) -> Board {
        let mut next = Board::empty();
        for (position, occupant) in self.squares() {
            if let (Some(piece), Some(index)) = (occupant, position.mirrored().index()) {
                next.squares[index] = Some(Piece {
                    side: piece.side.opposite(),
                    ..piece
                });
            }
        }
        next
    }
}
