//! Pawn pushes, captures and en passant.
//!
//! Promotion is not expanded here: a pawn reaching the last row produces a
//! single plain move, and the choice of piece is collected later when the move
//! is committed.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Pseudo-legal pawn moves. `en_passant_target` is the square skipped by the
/// opponent's last double step, if any.
pub fn pawn_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(4);
    let direction = piece.color.pawn_direction();

    let Some(one_step) = from.offset(direction, 0) else {
        return out;
    };

    if board.is_empty(one_step) {
        out.push(Move::new(from, one_step, piece));
        if from.row == piece.color.pawn_start_row() {
            if let Some(two_step) = one_step.offset(direction, 0) {
                if board.is_empty(two_step) {
                    out.push(Move::new(from, two_step, piece));
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.is_enemy_of(piece.color) => {
                out.push(Move::new(from, target, piece));
            }
            None if en_passant_target == Some(target) => {
                out.push(Move::en_passant(from, target, piece));
            }
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn pawn_on_start_row_has_single_and_double_step() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        board.place(sq(6, 0), pawn);

        let moves = pawn_moves(&board, sq(6, 0), pawn, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq(6, 0), sq(5, 0), pawn)));
        assert!(moves.contains(&Move::new(sq(6, 0), sq(4, 0), pawn)));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        board.place(sq(1, 4), pawn);
        board.place(sq(2, 4), Piece::new(PieceKind::Knight, Color::White));

        assert!(pawn_moves(&board, sq(1, 4), pawn, None).is_empty());

        board.take(sq(2, 4));
        board.place(sq(3, 4), Piece::new(PieceKind::Knight, Color::White));
        let moves = pawn_moves(&board, sq(1, 4), pawn, None);
        assert_eq!(moves, vec![Move::new(sq(1, 4), sq(2, 4), pawn)]);
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_enemies() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        board.place(sq(4, 4), pawn);
        board.place(sq(3, 3), Piece::new(PieceKind::Bishop, Color::Black));
        board.place(sq(3, 5), Piece::new(PieceKind::Bishop, Color::White));

        let targets: Vec<Square> = pawn_moves(&board, sq(4, 4), pawn, None)
            .iter()
            .map(|m| m.to)
            .collect();
        assert_eq!(targets, vec![sq(3, 4), sq(3, 3)]);
    }

    #[test]
    fn en_passant_target_produces_flagged_capture() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        board.place(sq(3, 3), pawn);
        board.place(sq(3, 4), Piece::new(PieceKind::Pawn, Color::Black));

        let moves = pawn_moves(&board, sq(3, 3), pawn, Some(sq(2, 4)));
        assert!(moves.contains(&Move::en_passant(sq(3, 3), sq(2, 4), pawn)));
        assert!(pawn_moves(&board, sq(3, 3), pawn, None)
            .iter()
            .all(|m| !m.en_passant));
    }

    #[test]
    fn pawn_reaching_last_row_is_a_plain_move() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White);
        pawn.has_moved = true;
        board.place(sq(1, 0), pawn);

        let moves = pawn_moves(&board, sq(1, 0), pawn, None);
        assert!(moves.iter().any(|m| m.to.row == 0 && m.promotion.is_none()));
    }
}
