//! Rectangular board of player symbols.
//!
//! Cells are stored row-major. Coordinates are `(x, y)` with `x` the column
//! and `y` the row, both zero-based.

use std::fmt;

use crate::error::PlaceError;

/// Symbol marking a player's stones. Player `n` (1-based) plays symbol `n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cross,
    Circle,
    Triangle,
}

impl Symbol {
    /// All symbols in turn order.
    pub const ALL: [Symbol; 3] = [Symbol::Cross, Symbol::Circle, Symbol::Triangle];

    /// 1-based player number owning this symbol.
    pub fn number(self) -> usize {
        match self {
            Symbol::Cross => 1,
            Symbol::Circle => 2,
            Symbol::Triangle => 3,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Symbol::Cross => 'X',
            Symbol::Circle => 'O',
            Symbol::Triangle => '^',
        }
    }
}

/// A board coordinate `(x, y)`.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Symbol>>,
    stones: usize,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            stones: 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    #[inline]
    pub fn is_on_board(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Symbol at `(x, y)`, or `None` if the cell is empty or off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Symbol> {
        if !self.is_on_board(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// True for an unoccupied on-board cell. Off-board cells are never empty.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.is_on_board(x, y) && self.cells[self.idx(x, y)].is_none()
    }

    /// A cell a stone may legally be placed on.
    #[inline]
    pub fn is_valid_move(&self, x: usize, y: usize) -> bool {
        self.is_empty(x, y)
    }

    /// Neighbour of `(x, y)` at `step` times `(dx, dy)`, if it lies on the board.
    pub fn offset(&self, (x, y): Point, (dx, dy): (isize, isize), step: isize) -> Option<Point> {
        let nx = x.checked_add_signed(dx.checked_mul(step)?)?;
        let ny = y.checked_add_signed(dy.checked_mul(step)?)?;
        self.is_on_board(nx, ny).then_some((nx, ny))
    }

    /// Place `symbol` at `(x, y)`. Occupied or off-board targets are refused
    /// and the board is left untouched.
    pub fn place(&mut self, x: usize, y: usize, symbol: Symbol) -> Result<(), PlaceError> {
        if !self.is_on_board(x, y) {
            return Err(PlaceError::OffBoard {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        let idx = self.idx(x, y);
        if self.cells[idx].is_some() {
            return Err(PlaceError::Occupied { x, y });
        }
        self.cells[idx] = Some(symbol);
        self.stones += 1;
        Ok(())
    }

    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    pub fn is_full(&self) -> bool {
        self.stones == self.rows * self.cols
    }

    /// True before the first stone is placed.
    pub fn is_empty_board(&self) -> bool {
        self.stones == 0
    }

    /// Geometric centre, `(cols / 2, rows / 2)`.
    pub fn center(&self) -> Point {
        (self.cols / 2, self.rows / 2)
    }

    /// Every empty cell, row by row.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_empty(x, y))
    }

    /// Read-only rows of cells, top to bottom, for rendering.
    pub fn grid(&self) -> impl Iterator<Item = &[Option<Symbol>]> + '_ {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid() {
            for cell in row {
                let ch = cell.map_or('.', Symbol::glyph);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 8);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 8);
        assert!(board.is_empty_board());
        assert!(!board.is_full());
        assert_eq!(board.empty_points().count(), 48);
    }

    #[test]
    fn test_on_board_uses_cols_for_x() {
        let board = Board::new(5, 7);
        assert!(board.is_on_board(6, 4));
        assert!(!board.is_on_board(7, 0));
        assert!(!board.is_on_board(0, 5));
        assert!(!board.is_empty(7, 0));
    }

    #[test]
    fn test_place_refuses_occupied_and_off_board() {
        let mut board = Board::new(5, 5);
        assert_eq!(board.place(2, 2, Symbol::Cross), Ok(()));
        assert_eq!(
            board.place(2, 2, Symbol::Circle),
            Err(PlaceError::Occupied { x: 2, y: 2 })
        );
        assert!(matches!(
            board.place(5, 0, Symbol::Circle),
            Err(PlaceError::OffBoard { .. })
        ));
        assert_eq!(board.get(2, 2), Some(Symbol::Cross));
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                assert!(!board.is_full());
                board.place(x, y, Symbol::ALL[(x + y) % 3]).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_points().count(), 0);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let board = Board::new(5, 5);
        assert_eq!(board.offset((0, 0), (1, 1), 2), Some((2, 2)));
        assert_eq!(board.offset((0, 0), (1, 1), -1), None);
        assert_eq!(board.offset((4, 0), (1, -1), -3), Some((1, 3)));
        assert_eq!(board.offset((4, 4), (1, 0), 1), None);
    }

    #[test]
    fn test_symbol_numbers() {
        for (i, s) in Symbol::ALL.iter().enumerate() {
            assert_eq!(s.number(), i + 1);
        }
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(5, 5);
        board.place(0, 0, Symbol::Cross).unwrap();
        board.place(1, 0, Symbol::Circle).unwrap();
        board.place(2, 0, Symbol::Triangle).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some("X O ^ . . "));
        assert_eq!(text.lines().count(), 5);
    }
}
