//! Committing moves to a board: castling, en passant, promotion and plain
//! relocation. Every piece that moves here gets its moved flag set.

use crate::errors::IllegalMoveReason;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::castle_rook_cols;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    Castle(CastleSide),
    EnPassant,
    /// Pawn arriving on its promotion row; needs a piece choice.
    Promotion,
    Plain,
}

/// Classifies a legal move from the position it is played in. Returns `None`
/// when `from` is empty.
pub fn classify_move(board: &Board, from: Square, to: Square) -> Option<MoveClass> {
    let piece = board.piece_at(from)?;
    let d_col = to.col as i8 - from.col as i8;
    let class = match piece.kind {
        PieceKind::King if d_col == 2 => MoveClass::Castle(CastleSide::Kingside),
        PieceKind::King if d_col == -2 => MoveClass::Castle(CastleSide::Queenside),
        PieceKind::Pawn if to.row == piece.color.promotion_row() => MoveClass::Promotion,
        PieceKind::Pawn if d_col != 0 && board.is_empty(to) => MoveClass::EnPassant,
        _ => MoveClass::Plain,
    };
    Some(class)
}

/// Commits `mv` and returns the piece it captured, if any. Promotions are
/// committed only when `mv.promotion` names the new piece.
pub fn apply_move(board: &mut Board, mv: &Move) -> Result<Option<Piece>, IllegalMoveReason> {
    let class = classify_move(board, mv.from, mv.to).ok_or(
        IllegalMoveReason::InternalInconsistency("no piece on the source square"),
    )?;
    match class {
        MoveClass::Castle(side) => {
            apply_castle(board, mv.from, side)?;
            Ok(None)
        }
        MoveClass::EnPassant => apply_en_passant(board, mv.from, mv.to),
        MoveClass::Promotion => {
            let kind = mv.promotion.ok_or(IllegalMoveReason::InternalInconsistency(
                "promotion committed without a piece choice",
            ))?;
            apply_promotion(board, mv.from, mv.to, kind)
        }
        MoveClass::Plain => Ok(apply_plain(board, mv.from, mv.to)),
    }
}

/// King two squares toward the rook, rook onto the square the king crossed.
pub fn apply_castle(
    board: &mut Board,
    king_from: Square,
    side: CastleSide,
) -> Result<(), IllegalMoveReason> {
    let row = king_from.row;
    let (rook_from_col, rook_to_col) = castle_rook_cols(side);
    let d_col = match side {
        CastleSide::Kingside => 2,
        CastleSide::Queenside => -2,
    };
    let (Some(king_to), Some(rook_from), Some(rook_to)) = (
        king_from.offset(0, d_col),
        Square::new(row, rook_from_col),
        Square::new(row, rook_to_col),
    ) else {
        return Err(IllegalMoveReason::InternalInconsistency(
            "castling squares off the board",
        ));
    };

    let mut king = board
        .take(king_from)
        .ok_or(IllegalMoveReason::InternalInconsistency("castling without a king"))?;
    let Some(mut rook) = board.take(rook_from) else {
        board.place(king_from, king);
        return Err(IllegalMoveReason::InternalInconsistency(
            "castling without a rook",
        ));
    };
    king.has_moved = true;
    rook.has_moved = true;
    board.place(king_to, king);
    board.place(rook_to, rook);
    Ok(())
}

/// Relocates the pawn and removes the enemy pawn beside its origin, on the
/// destination file.
pub fn apply_en_passant(
    board: &mut Board,
    from: Square,
    to: Square,
) -> Result<Option<Piece>, IllegalMoveReason> {
    let victim_sq = Square::new(from.row, to.col).ok_or(
        IllegalMoveReason::InternalInconsistency("en passant victim off the board"),
    )?;
    let captured = board.take(victim_sq);
    apply_plain(board, from, to);
    Ok(captured)
}

/// Replaces the pawn with a freshly promoted piece on `to`.
pub fn apply_promotion(
    board: &mut Board,
    from: Square,
    to: Square,
    kind: PieceKind,
) -> Result<Option<Piece>, IllegalMoveReason> {
    let pawn = board
        .take(from)
        .ok_or(IllegalMoveReason::InternalInconsistency("promotion without a pawn"))?;
    let mut promoted = Piece::new(kind, pawn.color);
    promoted.has_moved = true;
    Ok(board.place(to, promoted))
}

pub fn apply_plain(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    if let Some(piece) = board.piece_at_mut(from) {
        piece.has_moved = true;
    }
    board.relocate(from, to)
}

/// The square skipped by a two-row pawn advance; `None` for anything else.
pub fn next_en_passant_target(mv: &Move) -> Option<Square> {
    if mv.piece.kind != PieceKind::Pawn || mv.from.col != mv.to.col {
        return None;
    }
    if mv.from.row.abs_diff(mv.to.row) != 2 {
        return None;
    }
    Square::new((mv.from.row + mv.to.row) / 2, mv.from.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn kingside_castle_moves_both_pieces() {
        let mut board = Board::empty();
        board.place(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place(sq(7, 7), Piece::new(PieceKind::Rook, Color::White));

        assert_eq!(
            classify_move(&board, sq(7, 4), sq(7, 6)),
            Some(MoveClass::Castle(CastleSide::Kingside))
        );
        apply_castle(&mut board, sq(7, 4), CastleSide::Kingside).expect("castle applies");

        let king = board.piece_at(sq(7, 6)).expect("king on g1");
        let rook = board.piece_at(sq(7, 5)).expect("rook on f1");
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(king.has_moved && rook.has_moved);
        assert!(board.is_empty(sq(7, 4)) && board.is_empty(sq(7, 7)));
    }

    #[test]
    fn queenside_castle_moves_rook_to_d_file() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
        board.place(sq(0, 0), Piece::new(PieceKind::Rook, Color::Black));
        let king = board.piece_at(sq(0, 4)).expect("black king");

        let mv = Move::castle(sq(0, 4), sq(0, 2), king, CastleSide::Queenside);
        assert_eq!(apply_move(&mut board, &mv), Ok(None));
        assert_eq!(board.piece_at(sq(0, 2)).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.piece_at(sq(0, 3)).map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        board.place(sq(3, 3), pawn);
        board.place(sq(3, 4), Piece::new(PieceKind::Pawn, Color::Black));

        assert_eq!(
            classify_move(&board, sq(3, 3), sq(2, 4)),
            Some(MoveClass::EnPassant)
        );
        let captured = apply_move(&mut board, &Move::en_passant(sq(3, 3), sq(2, 4), pawn))
            .expect("en passant applies");
        assert_eq!(captured.map(|p| p.color), Some(Color::Black));
        assert!(board.is_empty(sq(3, 4)));
        assert!(board.is_empty(sq(3, 3)));
        assert!(board.piece_at(sq(2, 4)).is_some_and(|p| p.has_moved));
    }

    #[test]
    fn promotion_needs_a_choice() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        board.place(sq(6, 2), pawn);
        board.place(sq(7, 3), Piece::new(PieceKind::Rook, Color::White));

        assert_eq!(
            classify_move(&board, sq(6, 2), sq(7, 3)),
            Some(MoveClass::Promotion)
        );
        let mut mv = Move::new(sq(6, 2), sq(7, 3), pawn);
        assert!(matches!(
            apply_move(&mut board.clone(), &mv),
            Err(IllegalMoveReason::InternalInconsistency(_))
        ));

        mv.promotion = Some(PieceKind::Knight);
        let captured = apply_move(&mut board, &mv).expect("promotion applies");
        assert_eq!(captured.map(|p| p.kind), Some(PieceKind::Rook));
        let promoted = board.piece_at(sq(7, 3)).expect("promoted piece");
        assert_eq!(promoted.kind, PieceKind::Knight);
        assert_eq!(promoted.color, Color::Black);
        assert!(promoted.has_moved);
        assert!(board.is_empty(sq(6, 2)));
    }

    #[test]
    fn double_step_sets_en_passant_target() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let double = Move::new(sq(1, 4), sq(3, 4), pawn);
        let single = Move::new(sq(1, 4), sq(2, 4), pawn);
        let rook_jump = Move::new(
            sq(7, 0),
            sq(5, 0),
            Piece::new(PieceKind::Rook, Color::White),
        );
        assert_eq!(next_en_passant_target(&double), Some(sq(2, 4)));
        assert_eq!(next_en_passant_target(&single), None);
        assert_eq!(next_en_passant_target(&rook_jump), None);
    }

    #[test]
    fn plain_move_marks_piece_moved() {
        let mut board = Board::starting_position();
        assert_eq!(apply_plain(&mut board, sq(7, 6), sq(5, 5)), None);
        assert!(board.piece_at(sq(5, 5)).is_some_and(|p| p.has_moved));
    }
}
