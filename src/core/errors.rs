use std::fmt::Display;

use crate::core::definitions::{Color, Position};

/// Failures reported by the board.
///
/// The engine does not validate chess legality inside
/// [`Board::move_piece`](crate::Board::move_piece); `IllegalMove` only covers
/// moves that cannot be applied at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /** Source cell is empty or one of the squares lies off the board. */
    IllegalMove { from: Position, to: Position },
    /** Board holds no king of this color. */
    NoSuchKing(Color),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::IllegalMove { from, to } => {
                write!(f, "illegal move from {from} to {to}")
            }
            BoardError::NoSuchKing(color) => write!(f, "no {color} king on the board"),
        }
    }
}

impl std::error::Error for BoardError {}
