//! Knight moves: the eight L-shaped jumps onto empty or enemy squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::ray_moves::can_land_on;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| can_land_on(board, to, piece.color))
        .map(|to| Move::new(from, to, piece))
        .collect()
}
