//! Rule constants for the prime-rook variant.
//!
//! Everything tunable about the rules lives here so the generators, the draw
//! tracker and the castling checks read from one place.

use crate::game_state::chess_types::PieceKind;

/// Step counts a rook may travel when generating its own moves.
pub const PRIME_ROOK_DISTANCES: [u32; 4] = [2, 3, 5, 7];

/// Half-moves without a pawn move or capture that end the game in a draw.
pub const FIFTY_MOVE_LIMIT: u16 = 50;

/// Occurrences of one board position that end the game in a draw.
pub const REPETITION_LIMIT: usize = 3;

pub const WHITE_HOME_ROW: u8 = 7;
pub const BLACK_HOME_ROW: u8 = 0;

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Columns the king stands on, crosses and lands on when castling.
pub const KINGSIDE_SAFE_COLS: [u8; 3] = [4, 5, 6];
pub const QUEENSIDE_SAFE_COLS: [u8; 3] = [4, 3, 2];

/// Pieces a pawn may become, in the order they are offered.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Trial-division primality test.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
