//! Canonical chess-rule constants.
//!
//! Board geometry, home files used by castling, and the standard starting
//! layout in the `;`-separated board-layout format.

/// Files and ranks per side of the board.
pub const GRID_SIZE: i8 = 8;

pub const SQUARE_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// King home file (e-file).
pub const KING_HOME_FILE: i8 = 4;

/// Rook home file for short castling (h-file).
pub const SHORT_ROOK_FILE: i8 = 7;

/// Rook home file for long castling (a-file).
pub const LONG_ROOK_FILE: i8 = 0;

/// Squares a castling king travels.
pub const CASTLE_KING_DISTANCE: i8 = 2;

/// Standard starting position, farthest rank (rank 8) first.
pub const STARTING_LAYOUT: &str = "\
R:1;N:1;B:1;Q:1;K:1;B:1;N:1;R:1
p:1;p:1;p:1;p:1;p:1;p:1;p:1;p:1
;;;;;;;
;;;;;;;
;;;;;;;
;;;;;;;
p:0;p:0;p:0;p:0;p:0;p:0;p:0;p:0
R:0;N:0;B:0;Q:0;K:0;B:0;N:0;R:0
";
