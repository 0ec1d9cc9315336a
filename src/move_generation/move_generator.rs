//! Per-square pseudo-legal move generation.
//!
//! Two generators share the piece routines in `crate::moves`:
//! `CandidateMoveGenerator` produces the moves a piece may try to play (prime
//! rook rule, castling, en passant), while `AttackMoveGenerator` produces the
//! squares a piece reaches for attack analysis: rooks are unrestricted, kings
//! step without castling, and pawns use their ordinary pushes and captures
//! with no en-passant target.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::{king_moves, king_steps};
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::{prime_rook_moves, rook_moves};

pub trait MoveGenerator {
    /// Moves for the piece standing on `from`; empty when the square is empty.
    fn moves_from(&self, board: &Board, from: Square, en_passant_target: Option<Square>)
        -> Vec<Move>;
}

/// Moves a side may attempt, ignoring whether its own king ends up attacked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateMoveGenerator;

/// Destinations used for check, castling-path safety and attack queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackMoveGenerator;

impl MoveGenerator for CandidateMoveGenerator {
    fn moves_from(
        &self,
        board: &Board,
        from: Square,
        en_passant_target: Option<Square>,
    ) -> Vec<Move> {
        let Some(piece) = board.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => pawn_moves(board, from, piece, en_passant_target),
            PieceKind::Knight => knight_moves(board, from, piece),
            PieceKind::Bishop => bishop_moves(board, from, piece),
            PieceKind::Rook => prime_rook_moves(board, from, piece),
            PieceKind::Queen => queen_moves(board, from, piece),
            PieceKind::King => king_moves(board, from, piece),
        }
    }
}

impl MoveGenerator for AttackMoveGenerator {
    fn moves_from(
        &self,
        board: &Board,
        from: Square,
        _en_passant_target: Option<Square>,
    ) -> Vec<Move> {
        let Some(piece) = board.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => pawn_moves(board, from, piece, None),
            PieceKind::Knight => knight_moves(board, from, piece),
            PieceKind::Bishop => bishop_moves(board, from, piece),
            PieceKind::Rook => rook_moves(board, from, piece),
            PieceKind::Queen => queen_moves(board, from, piece),
            PieceKind::King => king_steps(board, from, piece),
        }
    }
}

/// Pseudo-legal moves for the piece on `from`.
#[inline]
pub fn generate_pseudo_legal_moves(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
) -> Vec<Move> {
    CandidateMoveGenerator.moves_from(board, from, en_passant_target)
}

/// Pseudo-legal moves for every piece of `color`.
pub fn generate_all_pseudo_legal_moves(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (square, _) in board.pieces_of(color) {
        out.extend(generate_pseudo_legal_moves(board, square, en_passant_target));
    }
    out
}
