//! Error types returned by the rules engine.
//!
//! Each failure domain gets its own enum. Callers match on them to report a
//! rejection to the player; none of them abort the process.

use thiserror::Error;

use crate::game_flow::game_status::GameStatus;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Why a proposed move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    #[error("no piece at {0}")]
    NoPieceAtSource(Square),

    #[error("piece at {0} does not belong to the side to move")]
    WrongSideToMove(Square),

    #[error("{to} is not a reachable destination from {from}")]
    NotPseudoLegal { from: Square, to: Square },

    #[error("move would leave the {0} king under attack")]
    SelfCheck(Color),

    /// The position broke a board invariant, for example a missing king.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(&'static str),

    #[error("a promotion choice is pending")]
    PromotionPending,

    #[error("game is over: {0}")]
    GameOver(GameStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    #[error("internal inconsistency: {0}")]
    InternalInconsistency(&'static str),
}

/// Any failure raised while driving a game through the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveReason),

    #[error(transparent)]
    Promotion(#[from] PromotionError),
}
