use log::trace;

use crate::core::definitions::{Cell, Piece, PieceType, Position};
use crate::core::engine::Board;
use crate::core::errors::BoardError;
use crate::core::utils::{between, in_direction, is_in_diagonal_line, is_in_straight_line};

/** Tables directions for pieces */
const BISHOP_DIR: &[(i8, i8)] = &[(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ROOK_DIR: &[(i8, i8)] = &[(1, 0), (0, -1), (-1, 0), (0, 1)];
const QUEEN_DIR: &[(i8, i8)] = &[
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
];

/** Possible moves for pieces */
const KING_MOVES: &[(i8, i8)] = QUEEN_DIR;
const KNIGHT_MOVES: &[(i8, i8)] = &[
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/** (rook column, king destination column) for king side and queen side. */
const CASTLING: [(i8, i8); 2] = [(7, 6), (0, 2)];
const KING_COLUMN: i8 = 4;

impl Piece {
    /// Squares this piece could move to if its own king's safety were ignored.
    ///
    /// Castling is not included, see [`Piece::castling_moves`].
    pub fn moves(&self, board: &Board) -> Vec<Position> {
        match self.kind {
            PieceType::Pawn => self.pawn_moves(board),
            PieceType::Knight => self.step_moves(board, KNIGHT_MOVES),
            PieceType::King => self.step_moves(board, KING_MOVES),
            // Sliding pieces
            PieceType::Bishop => self.slide_moves(board, BISHOP_DIR),
            PieceType::Rook => self.slide_moves(board, ROOK_DIR),
            PieceType::Queen => self.slide_moves(board, QUEEN_DIR),
        }
    }

    /// Moves that do not leave this piece's own king in check.
    ///
    /// Every candidate is played on a duplicate of `board`, which is then
    /// asked whether the mover's king is attacked.
    pub fn valid_moves(&self, board: &Board) -> Result<Vec<Position>, BoardError> {
        let mut candidates = self.moves(board);
        candidates.extend(self.castling_moves(board)?);
        let mut valid = Vec::with_capacity(candidates.len());
        for end in candidates {
            let mut simulation = board.duplicate();
            simulation.move_piece(self.position, end)?;
            if !simulation.in_check(self.color)? {
                valid.push(end);
            }
        }
        trace!(
            "{} {:?} at {} has {} valid moves",
            self.color,
            self.kind,
            self.position,
            valid.len()
        );
        Ok(valid)
    }

    /// Whether this piece attacks `target`, whatever stands there.
    ///
    /// Pawns attack their two forward diagonals only, never the square
    /// straight ahead.
    pub fn can_attack(&self, target: Position, board: &Board) -> bool {
        if target == self.position {
            return false;
        }
        let row_diff = target.row - self.position.row;
        let col_diff = target.col.abs_diff(self.position.col);
        match self.kind {
            PieceType::Pawn => row_diff == self.color.forward() && col_diff == 1,
            PieceType::Knight => {
                let row_diff = row_diff.unsigned_abs();
                (row_diff == 1 && col_diff == 2) || (row_diff == 2 && col_diff == 1)
            }
            PieceType::King => row_diff.unsigned_abs() <= 1 && col_diff <= 1,
            PieceType::Bishop => {
                is_in_diagonal_line(self.position, target) && self.clear_path(target, board)
            }
            PieceType::Rook => {
                is_in_straight_line(self.position, target) && self.clear_path(target, board)
            }
            PieceType::Queen => {
                (is_in_straight_line(self.position, target)
                    || is_in_diagonal_line(self.position, target))
                    && self.clear_path(target, board)
            }
        }
    }

    /// Castling destinations of a king standing on its home square.
    ///
    /// Needs an unmoved king that is not in check, an unmoved own rook in the
    /// corner, empty squares between them, and no attacked square on the
    /// king's way or landing square. Any other piece yields nothing.
    pub fn castling_moves(&self, board: &Board) -> Result<Vec<Position>, BoardError> {
        let row = self.color.home_row();
        if self.kind != PieceType::King
            || self.moved
            || self.position != Position::new(row, KING_COLUMN)
        {
            return Ok(Vec::new());
        }
        if board.in_check(self.color)? {
            return Ok(Vec::new());
        }
        let enemy = self.color.opposite();
        let destinations = CASTLING
            .iter()
            .filter(|(rook_col, king_col)| {
                let rook_pos = Position::new(row, *rook_col);
                let rook_ready = matches!(
                    board.get(rook_pos),
                    Cell::Figure(rook)
                        if rook.kind == PieceType::Rook && rook.color == self.color && !rook.moved
                );
                let step = (king_col - KING_COLUMN).signum();
                rook_ready
                    && between(self.position, rook_pos).all(|pos| board.get(pos).is_empty())
                    && in_direction(self.position, (0, step))
                        .take(2)
                        .all(|pos| !board.is_attacked(pos, enemy))
            })
            .map(|&(_, king_col)| Position::new(row, king_col))
            .collect();
        Ok(destinations)
    }

    fn clear_path(&self, target: Position, board: &Board) -> bool {
        between(self.position, target).all(|pos| board.get(pos).is_empty())
    }

    fn pawn_moves(&self, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(4);
        let step = self.color.forward();
        // push
        let front = self.position.offset((step, 0));
        if board.in_bounds(front) && board.get(front).is_empty() {
            moves.push(front);
            // double push
            let double = front.offset((step, 0));
            if !self.moved
                && self.position.row == self.color.pawn_row()
                && board.in_bounds(double)
                && board.get(double).is_empty()
            {
                moves.push(double);
            }
        }
        // capture
        for side in [-1, 1] {
            let target = self.position.offset((step, side));
            if board.in_bounds(target) && board.get(target).color() == Some(self.color.opposite())
            {
                moves.push(target);
            }
        }
        moves
    }

    fn step_moves(&self, board: &Board, offsets: &[(i8, i8)]) -> Vec<Position> {
        offsets
            .iter()
            .map(|offset| self.position.offset(*offset))
            .filter(|pos| board.in_bounds(*pos) && board.get(*pos).color() != Some(self.color))
            .collect()
    }

    fn slide_moves(&self, board: &Board, directions: &[(i8, i8)]) -> Vec<Position> {
        let mut moves = Vec::with_capacity(14);
        for dir in directions {
            for pos in in_direction(self.position, *dir) {
                match board.get(pos) {
                    Cell::Empty => moves.push(pos),
                    Cell::Figure(other) => {
                        if other.color != self.color {
                            moves.push(pos);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
