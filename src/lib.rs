//! Crate root module declarations for the prime-rook chess rules engine.
//!
//! This file exposes the board model, per-piece move generation, legality
//! filtering and move execution, the game-flow state machine, and the text
//! utilities used by the binaries, tests and benches.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod history;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod game_flow {
    pub mod game_controller;
    pub mod game_status;
}

pub mod utils {
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
