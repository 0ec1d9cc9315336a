//! Complete state of one game.
//!
//! `GameState` is a plain value owned by the caller. Every transition in
//! `game_flow::game_controller` takes a state by reference and returns a new
//! one, so a rejected move never disturbs the state it was tried against.

use crate::game_flow::game_status::GameStatus;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::history::{BoardHistory, HalfMoveClock};

/// A pawn move waiting for the player to pick the promoted piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    /// Whether the destination held an enemy piece when the move was submitted.
    pub capture: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    AwaitingMove,
    AwaitingPromotionChoice(PendingPromotion),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Square skipped by the previous ply's double pawn step, if any.
    pub en_passant_target: Option<Square>,
    pub history: BoardHistory,
    pub half_move_clock: HalfMoveClock,
    pub phase: GamePhase,
    pub status: GameStatus,
    /// Committed moves in order; promotions carry their chosen piece.
    pub moves: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move, nothing recorded yet.
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// A fresh game over an arbitrary position. Used for setting up puzzles
    /// and tests; the status is not evaluated until the first move.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            en_passant_target: None,
            history: BoardHistory::new(),
            half_move_clock: HalfMoveClock::default(),
            phase: GamePhase::AwaitingMove,
            status: GameStatus::Ongoing,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        match self.phase {
            GamePhase::AwaitingPromotionChoice(pending) => Some(pending),
            GamePhase::AwaitingMove => None,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Number of committed plies.
    #[inline]
    pub fn ply(&self) -> usize {
        self.moves.len()
    }
}
