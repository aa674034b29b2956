use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    #[default]
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /** Row of the back rank this color starts on. */
    pub fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /** Row the pawns of this color start on. */
    pub fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /** Row step of a pawn push: white goes up the grid, black goes down. */
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Square on the board addressed as (row, column).
///
/// Row 0 is black's back rank, column 0 is the a-file. Coordinates are signed
/// so that off-board squares can be expressed and rejected with
/// [`Board::in_bounds`](crate::Board::in_bounds).
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    #[inline]
    pub fn offset(self, (row, col): (i8, i8)) -> Position {
        Position {
            row: self.row.wrapping_add(row),
            col: self.col.wrapping_add(col),
        }
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Position { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub(crate) kind: PieceType,
    pub(crate) color: Color,
    pub(crate) position: Position,
    pub(crate) moved: bool,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color, position: Position) -> Piece {
        Piece {
            kind,
            color,
            position,
            moved: false,
        }
    }

    /** Same piece with the "has moved" flag forced, for custom setups. */
    pub fn with_moved(mut self, moved: bool) -> Piece {
        self.moved = moved;
        self
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }
}

/// Content of one of the 64 board cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Figure(Piece),
}

impl Cell {
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Figure(piece) => Some(piece),
            Cell::Empty => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.piece().map(|piece| piece.color)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Piece> for Cell {
    fn from(value: Piece) -> Self {
        Cell::Figure(value)
    }
}
