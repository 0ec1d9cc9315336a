//! Game flow: move submission, promotion completion and status queries.
//!
//! Each transition takes the current `GameState` by reference and returns the
//! next one. A move that reaches the last row parks the game in
//! `GamePhase::AwaitingPromotionChoice` without touching the board; the side
//! to move, history and clock change only once `resume_promotion` supplies the
//! piece.

use tracing::debug;

use crate::errors::{IllegalMoveReason, PromotionError};
use crate::game_flow::game_status::{evaluate_status, GameStatus};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GamePhase, GameState, PendingPromotion};
use crate::move_generation::legal_move_apply::{
    apply_move, apply_promotion, classify_move, next_en_passant_target, MoveClass,
};
use crate::move_generation::legal_move_generator::{legal_moves_from_square, validate_move};

pub use crate::move_generation::legal_move_checks::is_square_attacked;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed(GameState),
    /// The move promotes a pawn; call [`resume_promotion`] with the piece.
    PendingPromotion(GameState),
}

impl SubmitOutcome {
    pub fn into_state(self) -> GameState {
        match self {
            SubmitOutcome::Committed(state) | SubmitOutcome::PendingPromotion(state) => state,
        }
    }

    pub fn state(&self) -> &GameState {
        match self {
            SubmitOutcome::Committed(state) | SubmitOutcome::PendingPromotion(state) => state,
        }
    }
}

#[inline]
pub fn initialize() -> GameState {
    GameState::new_game()
}

/// Discards `state` and starts over from the initial position.
#[inline]
pub fn reset(_state: &GameState) -> GameState {
    initialize()
}

/// Legal moves for the piece on `square`. Empty when the square is empty or
/// off the board, holds a piece of the side not to move, a promotion choice
/// is pending, or the game is over.
pub fn legal_moves_from(state: &GameState, square: Square) -> Vec<Move> {
    if !square.is_on_board() || state.pending_promotion().is_some() || state.is_game_over() {
        return Vec::new();
    }
    legal_moves_from_square(
        &state.board,
        square,
        state.side_to_move,
        state.en_passant_target,
    )
}

pub fn submit_move(
    state: &GameState,
    from: Square,
    to: Square,
) -> Result<SubmitOutcome, IllegalMoveReason> {
    if state.pending_promotion().is_some() {
        return Err(IllegalMoveReason::PromotionPending);
    }
    if state.is_game_over() {
        return Err(IllegalMoveReason::GameOver(state.status));
    }
    for square in [from, to] {
        if !square.is_on_board() {
            return Err(IllegalMoveReason::OffBoard {
                row: square.row,
                col: square.col,
            });
        }
    }

    let color = state.side_to_move;
    let piece = state
        .board
        .piece_at(from)
        .ok_or(IllegalMoveReason::NoPieceAtSource(from))?;
    if piece.color != color {
        debug!(%from, %color, "rejected: piece belongs to the other side");
        return Err(IllegalMoveReason::WrongSideToMove(from));
    }

    let mv = validate_move(&state.board, from, to, color, state.en_passant_target)?;

    if classify_move(&state.board, from, to) == Some(MoveClass::Promotion) {
        let mut next = state.clone();
        next.phase = GamePhase::AwaitingPromotionChoice(PendingPromotion {
            from,
            to,
            color,
            capture: !state.board.is_empty(to),
        });
        debug!(%from, %to, "promotion pending");
        return Ok(SubmitOutcome::PendingPromotion(next));
    }

    let mut next = state.clone();
    let capture = !state.board.is_empty(to);
    apply_move(&mut next.board, &mv)?;
    next.half_move_clock.record(mv.piece.kind == PieceKind::Pawn, capture);
    next.en_passant_target = next_en_passant_target(&mv);
    finish_ply(&mut next, mv);
    Ok(SubmitOutcome::Committed(next))
}

/// Completes a pending promotion with `kind` (knight, bishop, rook or queen).
pub fn resume_promotion(state: &GameState, kind: PieceKind) -> Result<GameState, PromotionError> {
    let pending = state
        .pending_promotion()
        .ok_or(PromotionError::NoPendingPromotion)?;
    if !kind.is_promotion_choice() {
        return Err(PromotionError::InvalidPromotionPiece(kind));
    }
    let pawn = state
        .board
        .piece_at(pending.from)
        .filter(|p| p.kind == PieceKind::Pawn && p.color == pending.color)
        .ok_or(PromotionError::InternalInconsistency(
            "pending promotion lost its pawn",
        ))?;

    let mut next = state.clone();
    apply_promotion(&mut next.board, pending.from, pending.to, kind)
        .map_err(|_| PromotionError::InternalInconsistency("promotion could not be applied"))?;
    next.half_move_clock.record(true, pending.capture);
    next.en_passant_target = None;
    next.phase = GamePhase::AwaitingMove;

    let mv = Move {
        promotion: Some(kind),
        ..Move::new(pending.from, pending.to, pawn)
    };
    finish_ply(&mut next, mv);
    Ok(next)
}

/// Records the ply, hands the move to the other side and re-evaluates.
fn finish_ply(state: &mut GameState, mv: Move) {
    state.history.push(state.board.serialize());
    state.moves.push(mv);
    state.side_to_move = state.side_to_move.opposite();
    state.status = evaluate_status(
        &state.board,
        state.side_to_move,
        state.en_passant_target,
        &state.history,
        state.half_move_clock,
    );
    debug!(
        from = %mv.from,
        to = %mv.to,
        ply = state.moves.len(),
        clock = state.half_move_clock.value(),
        "move committed"
    );
}

#[inline]
pub fn game_status(state: &GameState) -> GameStatus {
    state.status
}

#[inline]
pub fn serialize(board: &Board) -> String {
    board.serialize()
}
