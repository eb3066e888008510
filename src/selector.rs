//! Rule-table move selection for agent players.
//!
//! The selector is a single pass over the empty cells; no look-ahead. Each
//! cell is scanned once for the mover's own symbol and once per opponent, and
//! its priority is the most urgent rule the best axis of any of those scans
//! satisfies. Only cells at the best priority found anywhere survive; among
//! them the one whose scans score highest under [`score_weight`] wins, with a
//! uniform random pick between equal scores.

use tracing::debug;

use crate::board::{Board, Point, Symbol};
use crate::error::SelectError;
use crate::rules::{RULES, Subject, match_priority, score_weight};
use crate::scan::{LineScan, scan};

/// What the agent decided to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(Point),
    /// The board is full; the match is drawn.
    Draw,
}

/// A cell that matched the best rule seen so far.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub point: Point,
    /// Every scan (own or per opponent) that matched at the cell's priority.
    pub scans: Vec<[LineScan; 4]>,
}

impl Candidate {
    /// Sum of [`score_weight`] over all axes of all contributing scans.
    pub fn score(&self) -> usize {
        self.scans.iter().flatten().map(score_weight).sum()
    }
}

/// Gate all empty cells through the rule table.
///
/// Returns the winning rule index and the cells that reached it, or `None`
/// when no cell matched any rule.
pub fn collect_candidates(
    board: &Board,
    own: Symbol,
    opponents: &[Symbol],
) -> Option<(usize, Vec<Candidate>)> {
    let mut best = RULES.len();
    let mut candidates: Vec<Candidate> = Vec::new();

    for (x, y) in board.empty_points() {
        let mine = scan(board, x, y, own);
        let theirs: Vec<[LineScan; 4]> = opponents.iter().map(|&s| scan(board, x, y, s)).collect();

        let mut rated = Vec::with_capacity(1 + theirs.len());
        if let Some(p) = match_priority(Subject::Own, &mine[0]) {
            rated.push((p, mine));
        }
        for scans in theirs {
            if let Some(p) = match_priority(Subject::Opponent, &scans[0]) {
                rated.push((p, scans));
            }
        }

        let Some(priority) = rated.iter().map(|&(p, _)| p).min() else {
            continue;
        };
        if priority > best {
            continue;
        }
        if priority < best {
            best = priority;
            candidates.clear();
        }
        candidates.push(Candidate {
            point: (x, y),
            scans: rated
                .into_iter()
                .filter(|&(p, _)| p == priority)
                .map(|(_, scans)| scans)
                .collect(),
        });
    }

    (!candidates.is_empty()).then_some((best, candidates))
}

/// Choose a move for `own` against `opponents`.
pub fn select_move(
    board: &Board,
    own: Symbol,
    opponents: &[Symbol],
    rng: &mut fastrand::Rng,
) -> Result<Decision, SelectError> {
    let (x, y) = if board.is_empty_board() {
        board.center()
    } else if let Some((priority, candidates)) = collect_candidates(board, own, opponents) {
        let top = candidates.iter().map(Candidate::score).max().unwrap_or(0);
        let finalists: Vec<Point> = candidates
            .iter()
            .filter(|c| c.score() == top)
            .map(|c| c.point)
            .collect();
        debug!(
            priority,
            candidates = candidates.len(),
            finalists = finalists.len(),
            score = top,
            "rule gate"
        );
        finalists[rng.usize(..finalists.len())]
    } else if board.is_full() {
        return Ok(Decision::Draw);
    } else {
        board.center()
    };

    if !board.is_valid_move(x, y) {
        return Err(SelectError::InvalidChoice { x, y });
    }
    debug!(symbol = own.number(), x, y, "agent move");
    Ok(Decision::Play((x, y)))
}
