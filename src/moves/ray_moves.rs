//! Ray tracing shared by the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// True when a piece of `color` may end a move on `square`: the square is
/// empty or holds an enemy.
#[inline]
pub fn can_land_on(board: &Board, square: Square, color: Color) -> bool {
    board
        .piece_at(square)
        .map_or(true, |occupant| occupant.is_enemy_of(color))
}

/// Walks from `from` along `(d_row, d_col)` pushing every empty square, then
/// the first occupied square if it holds an enemy.
pub fn trace_ray(
    board: &Board,
    from: Square,
    piece: Piece,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Move>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        match board.piece_at(next) {
            None => out.push(Move::new(from, next, piece)),
            Some(occupant) => {
                if occupant.is_enemy_of(piece.color) {
                    out.push(Move::new(from, next, piece));
                }
                break;
            }
        }
        current = next;
    }
}

pub fn trace_rays(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, piece, d_row, d_col, out);
    }
}
