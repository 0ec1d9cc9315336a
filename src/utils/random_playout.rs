//! Random-move playouts for diagnostics.
//!
//! Plays uniformly random legal moves, with random promotion choices, from the
//! starting position until the game ends or the ply cap is reached. Used to
//! shake out rule invariants over many games, not to play well.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::errors::RulesError;
use crate::game_flow::game_controller::{initialize, resume_promotion, submit_move, SubmitOutcome};
use crate::game_flow::game_status::GameStatus;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    /// Plies to play before giving up on a game that has not ended.
    pub max_plies: usize,
    /// Fixed seed for reproducible games; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub plies: usize,
    pub status: GameStatus,
    /// True when the ply cap stopped the game before it ended.
    pub truncated: bool,
    pub final_state: GameState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayoutError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The game was still running but the side to move had nothing to play.
    #[error("no legal moves at ply {ply} although the game is ongoing")]
    Stalled { ply: usize },
}

pub fn random_playout(config: &PlayoutConfig) -> Result<PlayoutSummary, PlayoutError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    random_playout_with_rng(config, &mut rng)
}

pub fn random_playout_with_rng(
    config: &PlayoutConfig,
    rng: &mut StdRng,
) -> Result<PlayoutSummary, PlayoutError> {
    let mut state = initialize();

    while !state.is_game_over() && state.ply() < config.max_plies {
        let moves = all_legal_moves(&state.board, state.side_to_move, state.en_passant_target);
        let Some(mv) = moves.as_slice().choose(rng) else {
            return Err(PlayoutError::Stalled { ply: state.ply() });
        };

        state = match submit_move(&state, mv.from, mv.to).map_err(RulesError::from)? {
            SubmitOutcome::Committed(next) => next,
            SubmitOutcome::PendingPromotion(pending) => {
                let kind = PROMOTION_CHOICES
                    .choose(rng)
                    .copied()
                    .unwrap_or(PROMOTION_CHOICES[0]);
                debug!(?kind, "random promotion");
                resume_promotion(&pending, kind).map_err(RulesError::from)?
            }
        };
    }

    let summary = PlayoutSummary {
        plies: state.ply(),
        status: state.status,
        truncated: !state.is_game_over(),
        final_state: state,
    };
    info!(
        plies = summary.plies,
        status = %summary.status,
        truncated = summary.truncated,
        "playout finished"
    );
    Ok(summary)
}
