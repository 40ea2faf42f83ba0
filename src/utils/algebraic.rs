//! Square conversions between `(row, col)` coordinates and algebraic text.
//!
//! Row 0 is the eighth rank (Dark's back rank), so rank characters count
//! down while rows count up.

use crate::game_state::chess_types::Square;

/// Convert algebraic text (for example: "e4") to a `(row, col)` square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok((row, col))
}

/// Convert a `(row, col)` square to algebraic text.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.1 as u8);
    let rank_char = char::from(b'8' - square.0 as u8);
    format!("{file_char}{rank_char}")
}
