use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Color, Piece, PieceType, Position};
use crate::core::errors::BoardError;
use crate::core::utils::is_valid_coord;

/** Columns the rook leaves and lands on, keyed by the king's castling column. */
const ROOK_CASTLING: [(i8, i8, i8); 2] = [(6, 7, 5), (2, 0, 3)];

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 8×8 grid, indexed `grid[row][col]`.
///
/// Every cell always holds a [`Cell`]; the board owns all pieces placed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; 8]; 8],
}

impl Board {
    /** Standard starting position. */
    pub fn new() -> Board {
        Board::default()
    }

    pub fn empty() -> Board {
        Board {
            grid: [[Cell::Empty; 8]; 8],
        }
    }

    /// Board from a prepared grid.
    ///
    /// Stored positions of the figures are rewritten to the cells holding them.
    pub fn from_grid(grid: [[Cell; 8]; 8]) -> Board {
        let mut board = Board::empty();
        for (row, cells) in (0..8).zip(grid) {
            for (col, cell) in (0..8).zip(cells) {
                board.set(Position::new(row, col), cell);
            }
        }
        board
    }

    /// # Panics
    /// If `pos` is off the board; check with [`Board::in_bounds`] first.
    pub fn get(&self, pos: Position) -> Cell {
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Puts `cell` at `pos`, syncing the stored position of a placed figure.
    ///
    /// # Panics
    /// If `pos` is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let cell = match cell {
            Cell::Figure(mut piece) => {
                piece.position = pos;
                Cell::Figure(piece)
            }
            Cell::Empty => Cell::Empty,
        };
        self.grid[pos.row as usize][pos.col as usize] = cell;
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        is_valid_coord(pos)
    }

    /// Applies a move without checking chess legality.
    ///
    /// Callers are expected to pick `end` from [`Piece::valid_moves`]. A king
    /// landing on one of its castling squares brings the rook along.
    pub fn move_piece(&mut self, start: Position, end: Position) -> Result<(), BoardError> {
        let illegal = BoardError::IllegalMove {
            from: start,
            to: end,
        };
        if !self.in_bounds(start) || !self.in_bounds(end) {
            return Err(illegal);
        }
        let Cell::Figure(piece) = self.get(start) else {
            return Err(illegal);
        };
        let castling = piece.kind == PieceType::King && piece.castling_moves(self)?.contains(&end);
        trace!("{} {:?} moves {} -> {}", piece.color, piece.kind, start, end);
        self.relocate(piece, end);
        if castling {
            for (king_col, rook_from, rook_to) in ROOK_CASTLING {
                if end.col != king_col {
                    continue;
                }
                let rook_from = Position::new(end.row, rook_from);
                let rook_to = Position::new(end.row, rook_to);
                if let Cell::Figure(rook) = self.get(rook_from) {
                    debug!("{} castles, rook {} -> {}", piece.color, rook_from, rook_to);
                    self.relocate(rook, rook_to);
                }
            }
        }
        Ok(())
    }

    pub fn in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.find_king(color)?;
        Ok(self.is_attacked(king, color.opposite()))
    }

    /** Whether any piece of color `by` attacks `pos`. */
    pub fn is_attacked(&self, pos: Position, by: Color) -> bool {
        self.iter_pieces()
            .any(|piece| piece.color == by && piece.can_attack(pos, self))
    }

    pub fn find_king(&self, color: Color) -> Result<Position, BoardError> {
        self.iter_pieces()
            .find(|piece| piece.color == color && piece.kind == PieceType::King)
            .map(|king| king.position)
            .ok_or(BoardError::NoSuchKing(color))
    }

    /// Checked side with no valid move for any of its pieces.
    pub fn checkmate(&self, color: Color) -> Result<bool, BoardError> {
        if !self.in_check(color)? {
            return Ok(false);
        }
        for piece in self.iter_pieces().filter(|piece| piece.color == color) {
            if !piece.valid_moves(self)?.is_empty() {
                return Ok(false);
            }
        }
        debug!("{} is checkmated", color);
        Ok(true)
    }

    /** Independent copy for simulating moves. */
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    /** Valid moves of whatever stands on `pos`, nothing for an empty cell. */
    pub fn valid_moves(&self, pos: Position) -> Result<Vec<Position>, BoardError> {
        match self.get(pos) {
            Cell::Figure(piece) => piece.valid_moves(self),
            Cell::Empty => Ok(Vec::new()),
        }
    }

    /// Every `(start, end)` pair `color` may play.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<(Position, Position)>, BoardError> {
        let mut moves = Vec::with_capacity(64);
        for piece in self.iter_pieces().filter(|piece| piece.color == color) {
            moves.extend(
                piece
                    .valid_moves(self)?
                    .into_iter()
                    .map(|end| (piece.position, end)),
            );
        }
        Ok(moves)
    }

    /** Figures on the board, row by row. */
    pub fn iter_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid
            .iter()
            .flatten()
            .filter_map(|cell| cell.piece().copied())
    }

    fn relocate(&mut self, mut piece: Piece, end: Position) {
        self.set(piece.position, Cell::Empty);
        piece.moved = true;
        self.set(end, Cell::Figure(piece));
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in (0..8).zip(BACK_RANK) {
                let home = Position::new(color.home_row(), col);
                board.set(home, Piece::new(kind, color, home).into());
                let pawn = Position::new(color.pawn_row(), col);
                board.set(pawn, Piece::new(PieceType::Pawn, color, pawn).into());
            }
        }
        board
    }
}
