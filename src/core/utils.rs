use crate::core::definitions::Position;

#[derive(Debug)]
pub struct BetweenIterator {
    current: Position,
    target: Position,
    step: (i8, i8),
}

impl Iterator for BetweenIterator {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current.offset(self.step);
        if self.current == self.target || !is_valid_coord(self.current) {
            None
        } else {
            Some(self.current)
        }
    }
}

/** Squares strictly between two squares sharing a row, column or diagonal. */
pub fn between(from: Position, to: Position) -> BetweenIterator {
    #[cfg(debug_assertions)]
    if !is_in_diagonal_line(from, to) && !is_in_straight_line(from, to) {
        panic!("Points can't form line to search between them!")
    }
    let step = (
        (to.row - from.row).signum(),
        (to.col - from.col).signum(),
    );
    BetweenIterator {
        current: from,
        target: to,
        step,
    }
}

pub struct DirectionIterator {
    position: Position,
    direction: (i8, i8),
}

impl Iterator for DirectionIterator {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.position = self.position.offset(self.direction);
        if is_valid_coord(self.position) {
            Some(self.position)
        } else {
            None
        }
    }
}

/** Walks from `position` (exclusive) until the edge of the board. */
pub fn in_direction(position: Position, direction: (i8, i8)) -> DirectionIterator {
    DirectionIterator {
        position,
        direction,
    }
}

pub fn is_in_straight_line(a: Position, b: Position) -> bool {
    a.row == b.row || a.col == b.col
}

pub fn is_in_diagonal_line(a: Position, b: Position) -> bool {
    a.row.abs_diff(b.row) == a.col.abs_diff(b.col)
}

#[inline]
pub fn is_valid_coord(pos: Position) -> bool {
    (0..8).contains(&pos.row) && (0..8).contains(&pos.col)
}
