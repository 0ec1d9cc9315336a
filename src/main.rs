//! Two-player prime-rook chess on the terminal.
//!
//! Commands: a move such as `e2e4` (append `q`, `r`, `b` or `n` to promote in
//! one go), `moves e2`, `board`, `reset`, `quit`.

use std::io::{self, BufRead, Write};

use prime_rook_chess::errors::RulesError;
use prime_rook_chess::game_flow::game_controller::{
    initialize, legal_moves_from, reset, resume_promotion, submit_move, SubmitOutcome,
};
use prime_rook_chess::game_state::chess_types::PieceKind;
use prime_rook_chess::game_state::game_state::GameState;
use prime_rook_chess::utils::long_algebraic::{
    parse_move, parse_promotion_choice, parse_square, square_to_algebraic,
};
use prime_rook_chess::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut state = initialize();
    println!("{}", render_game_state(&state));
    prompt(&state);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            prompt(&state);
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "board" => println!("{}", render_game_state(&state)),
            "reset" => {
                state = reset(&state);
                println!("{}", render_game_state(&state));
            }
            _ if input.starts_with("moves") => list_moves(&state, input),
            _ if state.pending_promotion().is_some() => {
                match input.chars().next().map(parse_promotion_choice) {
                    Some(Ok(kind)) => state = promote(&state, kind),
                    Some(Err(err)) => println!("{err}"),
                    None => {}
                }
            }
            _ => state = play(&state, input),
        }
        prompt(&state);
    }
}

fn play(state: &GameState, input: &str) -> GameState {
    let (from, to, promotion) = match parse_move(input) {
        Ok(parsed) => parsed,
        Err(err) => {
            println!("{err}");
            return state.clone();
        }
    };

    match submit_move(state, from, to) {
        Ok(SubmitOutcome::Committed(next)) => {
            println!("{}", render_game_state(&next));
            next
        }
        Ok(SubmitOutcome::PendingPromotion(next)) => match promotion {
            Some(kind) => promote(&next, kind),
            None => next,
        },
        Err(err) => {
            println!("illegal move: {err}");
            state.clone()
        }
    }
}

fn promote(state: &GameState, kind: PieceKind) -> GameState {
    match resume_promotion(state, kind).map_err(RulesError::from) {
        Ok(next) => {
            println!("{}", render_game_state(&next));
            next
        }
        Err(err) => {
            println!("{err}");
            state.clone()
        }
    }
}

fn list_moves(state: &GameState, input: &str) {
    let Some(text) = input.split_whitespace().nth(1) else {
        println!("usage: moves e2");
        return;
    };
    match parse_square(text) {
        Ok(square) => {
            let targets: Vec<String> = legal_moves_from(state, square)
                .iter()
                .map(|mv| square_to_algebraic(mv.to))
                .collect();
            if targets.is_empty() {
                println!("no legal moves from {text}");
            } else {
                println!("{text}: {}", targets.join(" "));
            }
        }
        Err(err) => println!("{err}"),
    }
}

fn prompt(state: &GameState) {
    if state.is_game_over() {
        print!("game over ({}); `reset` or `quit`> ", state.status);
    } else if state.pending_promotion().is_some() {
        print!("promote to (q/r/b/n)> ");
    } else {
        print!("{}> ", state.side_to_move);
    }
    io::stdout().flush().ok();
}
