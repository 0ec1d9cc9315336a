//! Attack detection and king safety.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{AttackMoveGenerator, MoveGenerator};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// True when any piece of `attacker_color` threatens `square`.
///
/// Every piece contributes the destinations of its ordinary move generation,
/// except that rooks are scanned with their unrestricted rays (a rook four or
/// six squares away still attacks) and kings never castle. The en-passant
/// target plays no part. On an empty square this means a pawn's push squares
/// count and its empty diagonals do not; on an occupied square only the
/// captures matter.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board.pieces_of(attacker_color).any(|(from, _)| {
        AttackMoveGenerator
            .moves_from(board, from, None)
            .iter()
            .any(|m| m.to == square)
    })
}

/// Squares holding pieces of `attacker_color` that threaten `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| {
            AttackMoveGenerator
                .moves_from(board, *from, None)
                .iter()
                .any(|m| m.to == square)
        })
        .map(|(from, _)| from)
        .collect()
}

/// A missing king counts as in check only for the purpose of safety checks;
/// see [`is_king_safe`].
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when `color` has a king and it is not attacked.
#[inline]
pub fn is_king_safe(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(king_sq) => !is_square_attacked(board, king_sq, color.opposite()),
        None => false,
    }
}

/// Would a king of `color` standing on `square` be attacked? Works on a clone
/// with a hypothetical king placed there, whether or not a real king is.
pub fn is_square_safe_for_king(board: &Board, square: Square, color: Color) -> bool {
    let mut probe = board.clone();
    let mut king = Piece::new(PieceKind::King, color);
    king.has_moved = true;
    probe.place(square, king);
    !is_square_attacked(&probe, square, color.opposite())
}
