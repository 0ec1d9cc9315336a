//! Move-path enumeration over the legal move tree.
//!
//! Each level is produced by committing moves through the game controller, so
//! the counts exercise generation, legality, execution and end detection
//! together. Promotions branch over every promotion choice.

use crate::errors::RulesError;
use crate::game_flow::game_controller::{resume_promotion, submit_move, SubmitOutcome};
use crate::game_flow::game_status::GameStatus;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: &Move, capture: bool, child: &GameState) {
        self.nodes += 1;
        if capture {
            self.captures += 1;
        }
        if mv.en_passant {
            self.en_passant += 1;
        }
        if mv.castle.is_some() {
            self.castles += 1;
        }
        if child.moves.last().is_some_and(|m| m.promotion.is_some()) {
            self.promotions += 1;
        }
        if matches!(child.status, GameStatus::Checkmate { .. }) {
            self.checkmates += 1;
        }
    }
}

pub fn perft(state: &GameState, depth: u8) -> Result<PerftCounts, RulesError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(state, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse(state: &GameState, depth: u8, counts: &mut PerftCounts) -> Result<(), RulesError> {
    if state.is_game_over() {
        return Ok(());
    }

    let moves = all_legal_moves(&state.board, state.side_to_move, state.en_passant_target);
    for mv in moves {
        let capture = mv.en_passant || !state.board.is_empty(mv.to);
        for child in successors(state, &mv)? {
            if depth == 1 {
                counts.record_leaf(&mv, capture, &child);
            } else {
                perft_recurse(&child, depth - 1, counts)?;
            }
        }
    }
    Ok(())
}

/// The states reachable by playing `mv`, one per promotion choice when the
/// move promotes.
pub fn successors(state: &GameState, mv: &Move) -> Result<Vec<GameState>, RulesError> {
    match submit_move(state, mv.from, mv.to)? {
        SubmitOutcome::Committed(next) => Ok(vec![next]),
        SubmitOutcome::PendingPromotion(pending) => PROMOTION_CHOICES
            .iter()
            .map(|&kind| resume_promotion(&pending, kind).map_err(RulesError::from))
            .collect(),
    }
}
