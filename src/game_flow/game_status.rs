//! End-of-game classification.

use std::fmt;

use tracing::info;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::history::{BoardHistory, HalfMoveClock};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Repetition,
    FiftyMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(DrawReason::Repetition) => write!(f, "draw by threefold repetition"),
            GameStatus::Draw(DrawReason::FiftyMove) => write!(f, "draw by the fifty-move rule"),
        }
    }
}

/// Classifies the position for `side_to_move`. Checkmate and stalemate take
/// precedence over repetition, which takes precedence over the fifty-move rule.
pub fn evaluate_status(
    board: &Board,
    side_to_move: Color,
    en_passant_target: Option<Square>,
    history: &BoardHistory,
    clock: HalfMoveClock,
) -> GameStatus {
    let status = if !has_any_legal_move(board, side_to_move, en_passant_target) {
        if is_king_in_check(board, side_to_move) {
            GameStatus::Checkmate {
                winner: side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    } else if history.is_threefold_repetition() {
        GameStatus::Draw(DrawReason::Repetition)
    } else if clock.is_fifty_move_draw() {
        GameStatus::Draw(DrawReason::FiftyMove)
    } else {
        GameStatus::Ongoing
    };

    if status.is_over() {
        info!(%status, plies = history.len(), "game finished");
    }
    status
}
