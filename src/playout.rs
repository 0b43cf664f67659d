//! Random playouts (random game simulation).
//!
//! A playout claims uniformly random unclaimed edges for whoever is to move
//! until every square has an owner.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Edge};

/// Pick a random unclaimed edge, or `None` on a full board.
pub fn choose_random_edge(board: &Board, rng: &mut Rng) -> Option<Edge> {
    let edges: Vec<Edge> = board.unclaimed_edges().collect();
    if edges.is_empty() {
        return None;
    }
    Some(edges[rng.usize(..edges.len())])
}

/// Play random claims to the end of the game. Returns the number of claims.
pub fn random_playout(board: &mut Board, rng: &mut Rng) -> usize {
    let mut moves = 0;
    while !board.is_game_over() {
        let Some(edge) = choose_random_edge(board, rng) else {
            break;
        };
        let player = board.current_player();
        if board.claim(player, edge).is_accepted() {
            moves += 1;
        }
    }
    debug!(moves, scores = ?board.scores(), "playout finished");
    moves
}
