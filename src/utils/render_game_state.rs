//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (Black's back rank) is drawn at the top as rank 8, with files a-h
//! left to right, so the diagram reads the way White sees the board.

use crate::game_flow::game_status::GameStatus;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GamePhase, GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|square| board.piece_at(square));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board diagram followed by a one-line summary of whose turn it is.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = render_board(&state.board);
    out.push('\n');
    match (state.status, state.phase) {
        (GameStatus::Ongoing, GamePhase::AwaitingMove) => {
            out.push_str(&format!("{} to move", state.side_to_move));
        }
        (GameStatus::Ongoing, GamePhase::AwaitingPromotionChoice(_)) => {
            out.push_str(&format!("{} to choose a promotion piece", state.side_to_move));
        }
        (status, _) => out.push_str(&status.to_string()),
    }
    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
