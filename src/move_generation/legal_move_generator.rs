//! Legality filtering.
//!
//! A candidate move is legal when it is among the pseudo-legal moves of its
//! piece and, after the piece is relocated on a cloned board, the mover's king
//! is not attacked. The simulation is the basic relocation only: the castling
//! rook hop and the en-passant capture are not replayed. Castling is already
//! vetted square by square when it is generated.

use tracing::debug;

use crate::errors::IllegalMoveReason;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::move_generator::{
    generate_all_pseudo_legal_moves, generate_pseudo_legal_moves,
};

/// Checks the move `from -> to` for `color` and returns the matching
/// generated move (carrying its en-passant and castle flags) when legal.
pub fn validate_move(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> Result<Move, IllegalMoveReason> {
    let candidate = generate_pseudo_legal_moves(board, from, en_passant_target)
        .into_iter()
        .find(|mv| mv.to == to);
    let Some(candidate) = candidate else {
        debug!(%from, %to, "rejected: destination not generated");
        return Err(IllegalMoveReason::NotPseudoLegal { from, to });
    };

    ensure_king_safe_after(board, &candidate, color)?;
    Ok(candidate)
}

/// Simulates `mv` on a clone and checks that `color` still has an unattacked
/// king.
pub fn ensure_king_safe_after(
    board: &Board,
    mv: &Move,
    color: Color,
) -> Result<(), IllegalMoveReason> {
    let mut simulated = board.clone();
    simulated.relocate(mv.from, mv.to);

    let Some(king_sq) = king_square(&simulated, color) else {
        debug!(from = %mv.from, to = %mv.to, %color, "rejected: king missing after simulation");
        return Err(IllegalMoveReason::InternalInconsistency(
            "king missing after simulated move",
        ));
    };

    if is_square_attacked(&simulated, king_sq, color.opposite()) {
        debug!(from = %mv.from, to = %mv.to, %color, "rejected: own king left attacked");
        return Err(IllegalMoveReason::SelfCheck(color));
    }
    Ok(())
}

#[inline]
pub fn is_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> bool {
    validate_move(board, from, to, color, en_passant_target).is_ok()
}

/// Legal moves of the piece on `from`, which must belong to `color`.
pub fn legal_moves_from_square(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> Vec<Move> {
    match board.piece_at(from) {
        Some(piece) if piece.color == color => {}
        _ => return Vec::new(),
    }
    generate_pseudo_legal_moves(board, from, en_passant_target)
        .into_iter()
        .filter(|mv| ensure_king_safe_after(board, mv, color).is_ok())
        .collect()
}

/// Every legal move available to `color`.
pub fn all_legal_moves(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
) -> Vec<Move> {
    generate_all_pseudo_legal_moves(board, color, en_passant_target)
        .into_iter()
        .filter(|mv| ensure_king_safe_after(board, mv, color).is_ok())
        .collect()
}

#[inline]
pub fn has_any_legal_move(board: &Board, color: Color, en_passant_target: Option<Square>) -> bool {
    generate_all_pseudo_legal_moves(board, color, en_passant_target)
        .iter()
        .any(|mv| ensure_king_safe_after(board, mv, color).is_ok())
}
