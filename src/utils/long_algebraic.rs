//! Coordinate notation for the text front end.
//!
//! Files `a`-`h` map to columns 0-7 and ranks `8`-`1` map to rows 0-7, so
//! `e2` is White's king pawn at `(6, 4)`. Moves are written as two squares,
//! `e2e4`, optionally followed by a promotion letter.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("invalid move `{0}`, expected something like e2e4")]
    InvalidMove(String),

    #[error("invalid promotion piece `{0}`, expected one of q r b n")]
    InvalidPromotionPiece(char),
}

/// Parse a square such as `"e4"`.
pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(text.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a')
        .ok_or_else(|| NotationError::InvalidSquare(text.to_owned()))
}

pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col);
    let rank = char::from(b'8' - square.row);
    format!("{file}{rank}")
}

/// Parse `"e2e4"` or `"e7e8q"` into origin, destination and optional
/// promotion piece.
pub fn parse_move(text: &str) -> Result<(Square, Square, Option<PieceKind>), NotationError> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(NotationError::InvalidMove(text.to_owned()));
    }

    let invalid = |_| NotationError::InvalidMove(text.to_owned());
    let from = parse_square(&text[0..2]).map_err(invalid)?;
    let to = parse_square(&text[2..4]).map_err(invalid)?;
    let promotion = match text.chars().nth(4) {
        Some(letter) => Some(parse_promotion_choice(letter)?),
        None => None,
    };

    Ok((from, to, promotion))
}

pub fn parse_promotion_choice(letter: char) -> Result<PieceKind, NotationError> {
    match letter.to_ascii_lowercase() {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        _ => Err(NotationError::InvalidPromotionPiece(letter)),
    }
}
