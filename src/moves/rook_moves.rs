//! Rook move generation.
//!
//! Two flavours exist. [`prime_rook_moves`] is what a rook may actually play:
//! only destinations a prime number of steps away. [`rook_moves`] is the
//! classical unrestricted pattern, used for queen moves and for every attack
//! computation, for both colors. A rook therefore attacks squares it cannot
//! move to (distance 4 or 6, or 1).

use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_prime;
use crate::game_state::chess_types::*;
use crate::moves::ray_moves::{trace_rays, ORTHOGONAL_DIRECTIONS};

/// Candidate rook moves under the prime-distance rule.
///
/// Blocking applies at every step. A prime step onto an empty square is a
/// move; a prime step onto an enemy is a capture and ends the ray; any piece
/// met at a non-prime step ends the ray without producing a move.
pub fn prime_rook_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(14);

    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        let mut current = from;
        let mut steps = 0u32;
        while let Some(next) = current.offset(d_row, d_col) {
            steps += 1;
            let occupant = board.piece_at(next);
            if is_prime(steps) {
                match occupant {
                    None => out.push(Move::new(from, next, piece)),
                    Some(blocker) => {
                        if blocker.is_enemy_of(piece.color) {
                            out.push(Move::new(from, next, piece));
                        }
                        break;
                    }
                }
            } else if occupant.is_some() {
                break;
            }
            current = next;
        }
    }

    out
}

/// Unrestricted orthogonal rays.
pub fn rook_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(14);
    trace_rays(board, from, piece, &ORTHOGONAL_DIRECTIONS, &mut out);
    out
}
