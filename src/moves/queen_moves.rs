//! Queen moves: unrestricted orthogonal rays plus diagonal rays. The
//! prime-distance rule never applies to the queen.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

pub fn queen_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = rook_moves(board, from, piece);
    out.extend(bishop_moves(board, from, piece));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_moves_ignore_prime_rule() {
        let mut board = Board::empty();
        let from = Square::new(7, 3).expect("d1");
        let queen = Piece::new(PieceKind::Queen, Color::White);
        board.place(from, queen);

        let moves = queen_moves(&board, from, queen);
        // Seven up the file, seven along the rank, three plus four diagonally.
        assert_eq!(moves.len(), 21);
        assert!(moves
            .iter()
            .any(|m| m.to == Square::new(3, 3).expect("four squares up")));
    }
}
