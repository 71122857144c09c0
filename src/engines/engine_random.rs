//! Uniform random mover.
//!
//! Picks any legal move for the side to move. Used as a stand-in opponent and
//! for shaking out the rules engine over long random games.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::MoveChooser;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::Game;

pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RandomMover {
    fn name(&self) -> &str {
        "Random Mover"
    }

    fn choose_move(&mut self, game: &Game) -> Option<ChessMove> {
        let legal_moves = game.legal_moves();
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}
