//! Mailbox board: an 8×8 grid of optional pieces.
//!
//! `Board` is a plain value. Cloning it yields a fully independent copy, which
//! is what legality testing relies on when it simulates a move.

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position, Black on rows 0-1 and White on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[Color::Black.home_row() as usize][col] =
                Some(Piece::new(*kind, Color::Black));
            board.squares[Color::White.home_row() as usize][col] =
                Some(Piece::new(*kind, Color::White));
            board.squares[Color::Black.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[Color::White.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square.row as usize][square.col as usize].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Puts `piece` on `square`, returning whatever stood there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].replace(piece)
    }

    /// Empties `square`, returning its previous occupant.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Basic relocation: the source is cleared and the destination receives its
    /// piece. Returns the piece that stood on the destination, if any.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.take(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|p| (square, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    /// Canonical, deterministic encoding of every square's occupant.
    ///
    /// Each square is two characters, kind letter then color letter, or two
    /// spaces when empty. Rows are joined with `|`. Moved flags, side to move
    /// and the en-passant target are not part of the encoding.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(8 * 16 + 7);
        for (row_idx, row) in self.squares.iter().enumerate() {
            if row_idx > 0 {
                out.push('|');
            }
            for cell in row {
                match cell {
                    Some(piece) => {
                        out.push(piece.kind.code());
                        out.push(piece.color.code());
                    }
                    None => out.push_str("  "),
                }
            }
        }
        out
    }
}
