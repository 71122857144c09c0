//! Perft: exhaustive legal-move tree counting for move generator validation.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::move_generation::legal_move_apply::{apply_move, MoveKind};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaves `depth` plies below `board` with `side` to move.
pub fn perft(board: &Board, side: Side, depth: u8) -> Result<PerftCounts, ChessError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(board, side) {
        let (next, outcome) = apply_move(board, mv)?;

        if depth == 1 {
            total.nodes += 1;
            if outcome.captured.is_some() {
                total.captures += 1;
            }
            match outcome.kind {
                MoveKind::Castle(_) => total.castles += 1,
                MoveKind::Promotion => total.promotions += 1,
                MoveKind::Normal => {}
            }
            if is_king_in_check(&next, side.opposite()) {
                total.checks += 1;
                if !has_legal_move(&next, side.opposite()) {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft(&next, side.opposite(), depth - 1)?);
        }
    }

    Ok(total)
}
