//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod mailbox;

use makruk_core::Position;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Install `env_logger` once; `RUST_LOG=debug` shows search output.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Positions reached by a seeded random playout from the start, start included.
/// Stops early when the game is over.
pub fn random_playout(seed: u64, plies: usize) -> Vec<Position> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut pos = Position::startpos();
    let mut seen = vec![pos.clone()];

    for _ in 0..plies {
        let moves = pos.legal_moves();
        if moves.is_empty() || pos.is_game_over() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        pos = pos.apply_move(&mv);
        seen.push(pos.clone());
    }
    seen
}
