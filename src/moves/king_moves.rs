//! King steps and castling candidates.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KINGSIDE_SAFE_COLS, KING_START_COL, QUEENSIDE_ROOK_COL,
    QUEENSIDE_SAFE_COLS,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_safe_for_king;
use crate::moves::ray_moves::can_land_on;

/// The eight adjacent squares, empty or enemy-held. No castling.
pub fn king_steps(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);
    for d_row in -1i8..=1 {
        for d_col in -1i8..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(to) = from.offset(d_row, d_col) {
                if can_land_on(board, to, piece.color) {
                    out.push(Move::new(from, to, piece));
                }
            }
        }
    }
    out
}

/// King steps plus whichever castles are currently available.
pub fn king_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = king_steps(board, from, piece);
    out.extend(castling_moves(board, from, piece));
    out
}

pub fn castling_moves(board: &Board, from: Square, king: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(2);
    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if can_castle(board, from, king, side) {
            if let Some(to) = castle_destination(from, side) {
                out.push(Move::castle(from, to, king, side));
            }
        }
    }
    out
}

/// Where the king lands when castling toward `side`.
#[inline]
pub fn castle_destination(king_from: Square, side: CastleSide) -> Option<Square> {
    match side {
        CastleSide::Kingside => king_from.offset(0, 2),
        CastleSide::Queenside => king_from.offset(0, -2),
    }
}

/// Rook origin and destination columns for a castle toward `side`.
#[inline]
pub const fn castle_rook_cols(side: CastleSide) -> (u8, u8) {
    match side {
        CastleSide::Kingside => (KINGSIDE_ROOK_COL, KINGSIDE_SAFE_COLS[1]),
        CastleSide::Queenside => (QUEENSIDE_ROOK_COL, QUEENSIDE_SAFE_COLS[1]),
    }
}

/// Castling requires an unmoved king on its home square, an unmoved rook of
/// the same color in the corner, an empty path between them, and the king's
/// start, transit and landing squares all safe.
pub fn can_castle(board: &Board, from: Square, king: Piece, side: CastleSide) -> bool {
    if king.kind != PieceKind::King || king.has_moved {
        return false;
    }
    let row = king.color.home_row();
    if from.row != row || from.col != KING_START_COL {
        return false;
    }

    let (rook_col, _) = castle_rook_cols(side);
    let rook_ready = Square::new(row, rook_col)
        .and_then(|square| board.piece_at(square))
        .is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
    if !rook_ready {
        return false;
    }

    let (low, high) = if rook_col > KING_START_COL {
        (KING_START_COL + 1, rook_col)
    } else {
        (rook_col + 1, KING_START_COL)
    };
    let path_clear = (low..high)
        .filter_map(|col| Square::new(row, col))
        .all(|square| board.is_empty(square));
    if !path_clear {
        return false;
    }

    let safe_cols = match side {
        CastleSide::Kingside => KINGSIDE_SAFE_COLS,
        CastleSide::Queenside => QUEENSIDE_SAFE_COLS,
    };
    safe_cols
        .iter()
        .filter_map(|&col| Square::new(row, col))
        .all(|square| is_square_safe_for_king(board, square, king.color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place(sq(7, 7), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq(7, 0), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
        board
    }

    #[test]
    fn king_in_corner_has_three_steps() {
        let mut board = Board::empty();
        let king = Piece::new(PieceKind::King, Color::Black);
        board.place(sq(0, 0), king);
        assert_eq!(king_steps(&board, sq(0, 0), king).len(), 3);
    }

    #[test]
    fn kingside_castle_allowed_when_path_is_empty_and_safe() {
        let board = castling_board();
        let king = board.piece_at(sq(7, 4)).expect("white king");
        assert!(can_castle(&board, sq(7, 4), king, CastleSide::Kingside));
        assert!(king_moves(&board, sq(7, 4), king)
            .contains(&Move::castle(sq(7, 4), sq(7, 6), king, CastleSide::Kingside)));
    }

    #[test]
    fn castle_through_attacked_square_is_refused() {
        let mut board = castling_board();
        board.place(sq(6, 5), Piece::new(PieceKind::Bishop, Color::Black));
        let king = board.piece_at(sq(7, 4)).expect("white king");
        // The bishop covers (7,4) and (7,6); either is enough to forbid the castle.
        assert!(!can_castle(&board, sq(7, 4), king, CastleSide::Kingside));

        let mut board = castling_board();
        board.place(sq(2, 5), Piece::new(PieceKind::Rook, Color::Black));
        assert!(!can_castle(&board, sq(7, 4), king, CastleSide::Kingside));
        assert!(can_castle(&board, sq(7, 4), king, CastleSide::Queenside));
    }

    #[test]
    fn rook_attack_at_non_prime_distance_still_blocks_castling() {
        let mut board = castling_board();
        // Six squares above (7,5): the rook could never move there, yet it attacks it.
        board.place(sq(1, 5), Piece::new(PieceKind::Rook, Color::Black));
        let king = board.piece_at(sq(7, 4)).expect("white king");
        assert!(!can_castle(&board, sq(7, 4), king, CastleSide::Kingside));
    }

    #[test]
    fn moved_pieces_and_occupied_path_forbid_castling() {
        let mut board = castling_board();
        board
            .piece_at_mut(sq(7, 7))
            .expect("kingside rook")
            .has_moved = true;
        let king = board.piece_at(sq(7, 4)).expect("white king");
        assert!(!can_castle(&board, sq(7, 4), king, CastleSide::Kingside));

        let mut board = castling_board();
        board.place(sq(7, 1), Piece::new(PieceKind::Knight, Color::White));
        assert!(!can_castle(&board, sq(7, 4), king, CastleSide::Queenside));

        let mut moved_king = king;
        moved_king.has_moved = true;
        let board = castling_board();
        assert!(castling_moves(&board, sq(7, 4), moved_king).is_empty());
    }

    #[test]
    fn enemy_rook_in_the_corner_does_not_count() {
        let mut board = castling_board();
        board.place(sq(7, 7), Piece::new(PieceKind::Rook, Color::Black));
        let king = board.piece_at(sq(7, 4)).expect("white king");
        assert!(!can_castle(&board, sq(7, 4), king, CastleSide::Kingside));
    }
}
