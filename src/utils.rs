use std::{fmt::Display, ops::AddAssign};

use crate::core::definitions::{Color, PieceType, Position};
use crate::core::engine::Board;
use crate::core::errors::BoardError;

/// Tallies of a perft run; every field counts leaf moves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub all: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftResult {
    pub fn combine(self, other: PerftResult) -> Self {
        PerftResult {
            all: self.all + other.all,
            captures: self.captures + other.captures,
            castles: self.castles + other.castles,
            checks: self.checks + other.checks,
            checkmates: self.checkmates + other.checkmates,
        }
    }
}

impl AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - cp: {:<4} cs: {:<4} Ch: {:<4} CM: {:4}",
            self.all, self.captures, self.castles, self.checks, self.checkmates
        )
    }
}

fn count_perft_result(board: &Board, color: Color) -> Result<PerftResult, BoardError> {
    let mut result = PerftResult::default();
    for (start, end) in board.legal_moves(color)? {
        result.all += 1;
        if !board.get(end).is_empty() {
            result.captures += 1;
        }
        let castling = board
            .get(start)
            .piece()
            .is_some_and(|piece| piece.kind() == PieceType::King)
            && start.col.abs_diff(end.col) == 2;
        if castling {
            result.castles += 1;
        }
        let mut board = board.duplicate();
        board.move_piece(start, end)?;
        if board.in_check(color.opposite())? {
            result.checks += 1;
            if board.checkmate(color.opposite())? {
                result.checkmates += 1;
            }
        }
    }
    Ok(result)
}

/// Counts move paths of length `depth` with `color` to move.
pub fn perft(board: &Board, color: Color, depth: usize) -> Result<PerftResult, BoardError> {
    match depth {
        0 => Ok(PerftResult {
            all: 1,
            ..Default::default()
        }),
        1 => count_perft_result(board, color),
        _ => {
            let mut result = PerftResult::default();
            for (start, end) in board.legal_moves(color)? {
                let mut board = board.duplicate();
                board.move_piece(start, end)?;
                result += perft(&board, color.opposite(), depth - 1)?;
            }
            Ok(result)
        }
    }
}

/// [`perft`] split by root move.
pub fn perft_divide(
    board: &Board,
    color: Color,
    depth: usize,
) -> Result<Vec<(Position, Position, PerftResult)>, BoardError> {
    board
        .legal_moves(color)?
        .into_iter()
        .map(|(start, end)| {
            let mut board = board.duplicate();
            board.move_piece(start, end)?;
            let result = perft(&board, color.opposite(), depth.saturating_sub(1))?;
            Ok((start, end, result))
        })
        .collect()
}
