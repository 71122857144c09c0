//! Primitive value types shared by the whole rules engine.
//!
//! Positions are raw `(file, rank)` pairs that may point off the board; the
//! board and game entry points validate them before indexing.

use std::fmt;

use crate::game_state::chess_rules::GRID_SIZE;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank step a pawn of this side advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at setup.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => GRID_SIZE - 1,
        }
    }

    /// Rank this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        self.back_rank() + self.forward()
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Sliding kinds walk their deltas until blocked.
    #[inline]
    pub const fn slides(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }
}

/// A piece as stored on a square. Moving a piece stores a new value with
/// `has_moved` set; nothing is shared between boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self {
            kind,
            side,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    /// Same kind and side, whatever the moved flag says.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.kind == other.kind && self.side == other.side
    }
}

/// Raw board coordinate. Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.file >= 0 && self.file < GRID_SIZE && self.rank >= 0 && self.rank < GRID_SIZE
    }

    /// Translate by a delta without any bounds check.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file + d_file,
            rank: self.rank + d_rank,
        }
    }

    /// Translate by a delta, `None` when the result leaves the board.
    #[inline]
    pub fn checked_offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let next = Self {
            file: self.file.checked_add(d_file)?,
            rank: self.rank.checked_add(d_rank)?,
        };
        next.is_valid().then_some(next)
    }

    /// `(d_file, d_rank)` taking `other` to `self`.
    #[inline]
    pub const fn delta_from(self, other: Position) -> (i8, i8) {
        (self.file - other.file, self.rank - other.rank)
    }

    /// `rank * 8 + file`, `None` when off the board.
    #[inline]
    pub fn index(self) -> Option<usize> {
        self.is_valid()
            .then(|| self.rank as usize * GRID_SIZE as usize + self.file as usize)
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        let grid = GRID_SIZE as usize;
        Self::new((index % grid) as i8, (index / grid) as i8)
    }

    /// Same file, rank seen from the other side of the board.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Self::new(self.file, GRID_SIZE - 1 - self.rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(
                f,
                "{}{}",
                char::from(b'a' + self.file as u8),
                char::from(b'1' + self.rank as u8)
            )
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// A from/to pair. Castling is written as the king's two-square move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Which rook the king castles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleDirection {
    /// Towards the h-file rook.
    Short,
    /// Towards the a-file rook.
    Long,
}

impl CastleDirection {
    pub const BOTH: [CastleDirection; 2] = [CastleDirection::Short, CastleDirection::Long];

    /// File step the king takes per square while castling.
    #[inline]
    pub const fn king_step(self) -> i8 {
        match self {
            CastleDirection::Short => 1,
            CastleDirection::Long => -1,
        }
    }
}

/// A detected two-square king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castling {
    pub side: Side,
    pub direction: CastleDirection,
}
