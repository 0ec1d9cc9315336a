//! Bishop moves: the four diagonal rays, each ending at the first occupied
//! square, which is included only when it holds an enemy.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::ray_moves::{trace_rays, DIAGONAL_DIRECTIONS};

pub fn bishop_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(13);
    trace_rays(board, from, piece, &DIAGONAL_DIRECTIONS, &mut out);
    out
}
