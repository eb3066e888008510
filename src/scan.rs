//! Line scanning along the four board axes.
//!
//! A scan asks: if `symbol` occupied `(x, y)`, how long would the run through
//! that point be on each axis, and how much empty space lies beyond each end
//! of it? The same query serves win detection after a real placement and
//! threat evaluation for hypothetical ones.

use crate::board::{Board, Point, Symbol};
use crate::constants::{DIRECTIONS, GOAL};

/// Run and open-space measurements for one axis through a query point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineScan {
    /// Axis vector `(dx, dy)`; "next" is along it, "prev" against it.
    pub direction: (isize, isize),
    /// Run length through the query point, counting the point itself.
    pub hits: usize,
    /// Empty cells beyond the backward end of the run.
    pub blank_prev: usize,
    /// Empty cells beyond the forward end of the run.
    pub blank_next: usize,
    /// Extremal cells of the run: forward end, then backward end.
    pub ends: [Point; 2],
}

impl LineScan {
    /// Number of run ends with at least one empty cell beyond them (0..=2).
    pub fn open_ends(&self) -> usize {
        usize::from(self.blank_prev > 0) + usize::from(self.blank_next > 0)
    }

    /// Longest line this run could still grow into.
    pub fn reach(&self) -> usize {
        self.hits + self.blank_prev + self.blank_next
    }

    /// Whether the run could still become a winning line.
    pub fn can_reach_goal(&self) -> bool {
        self.reach() >= GOAL
    }

    pub fn is_win(&self) -> bool {
        self.hits >= GOAL
    }
}

/// Scan all four axes through `(x, y)` as if it held `symbol`.
///
/// Results are stable-sorted by `hits`, longest first, so `result[0]` is the
/// most advanced axis. Axes are laid out in reverse [`DIRECTIONS`] order
/// before sorting: on equal `hits` the anti-diagonal leads and the vertical
/// comes last.
pub fn scan(board: &Board, x: usize, y: usize, symbol: Symbol) -> [LineScan; 4] {
    let mut results = DIRECTIONS.map(|dir| scan_axis(board, (x, y), dir, symbol));
    results.reverse();
    results.sort_by(|a, b| b.hits.cmp(&a.hits));
    results
}

/// Scan one axis through `origin`.
pub fn scan_axis(board: &Board, origin: Point, direction: (isize, isize), symbol: Symbol) -> LineScan {
    let (ahead, end_next, blank_next) = walk(board, origin, direction, 1, symbol);
    let (behind, end_prev, blank_prev) = walk(board, origin, direction, -1, symbol);

    LineScan {
        direction,
        hits: 1 + ahead + behind,
        blank_prev,
        blank_next,
        ends: [end_next, end_prev],
    }
}

/// Walk away from `origin` in one sense of an axis.
///
/// Returns the number of `symbol` stones passed, the farthest of them (or
/// `origin` when there are none), and the count of empty cells after them.
/// Both walks stop at the board edge.
fn walk(
    board: &Board,
    origin: Point,
    direction: (isize, isize),
    sense: isize,
    symbol: Symbol,
) -> (usize, Point, usize) {
    let mut step = 1;
    let mut hits = 0;
    let mut end = origin;

    while let Some((x, y)) = board.offset(origin, direction, sense * step) {
        if board.get(x, y) != Some(symbol) {
            break;
        }
        hits += 1;
        end = (x, y);
        step += 1;
    }

    let mut blanks = 0;
    while let Some((x, y)) = board.offset(origin, direction, sense * step) {
        if !board.is_empty(x, y) {
            break;
        }
        blanks += 1;
        step += 1;
    }

    (hits, end, blanks)
}
