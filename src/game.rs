//! Match state and the match controller.
//!
//! [`MatchState`] holds the board, the seating and whose turn it is.
//! [`Match`] is the only thing that mutates it: it accepts human moves,
//! detects wins and draws, and runs agent turns synchronously until a human
//! is to move again or the match is over.

use tracing::{debug, error, info, instrument};

use crate::board::{Board, Point, Symbol};
use crate::config::{MatchConfig, PlayerKind};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::PlaceError;
use crate::scan::scan;
use crate::selector::{Decision, select_move};

/// How a finished match ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `symbol` completed a line; `line` holds its two extremal stones.
    Win { symbol: Symbol, line: [Point; 2] },
    Draw,
}

impl Outcome {
    /// Zero-based seat of the winner, if any.
    pub fn winner_index(&self) -> Option<usize> {
        match self {
            Outcome::Win { symbol, .. } => Some(symbol.number() - 1),
            Outcome::Draw => None,
        }
    }
}

/// Lifecycle of a [`Match`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Finished(Outcome),
}

/// Board plus turn bookkeeping for one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    board: Board,
    players: Vec<PlayerKind>,
    /// Starts at 1, bumped once per move that does not end the match.
    round: usize,
    /// Seat to move, cycling through `players`.
    current: usize,
    running: bool,
    outcome: Option<Outcome>,
    moves: Vec<Point>,
}

impl MatchState {
    pub fn new(rows: usize, cols: usize, players: Vec<PlayerKind>) -> Self {
        Self {
            board: Board::new(rows, cols),
            players,
            round: 1,
            current: 0,
            running: true,
            outcome: None,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[PlayerKind] {
        &self.players
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Every point played so far, in order.
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    /// Symbol of the player `offset` seats after the one to move.
    ///
    /// Round 1 is symbol 1, round 2 symbol 2, wrapping after the last
    /// player.
    pub fn symbol_of(&self, offset: usize) -> Symbol {
        Symbol::ALL[(self.round - 1 + offset) % self.players.len()]
    }

    pub fn current_symbol(&self) -> Symbol {
        self.symbol_of(0)
    }

    /// The other players' symbols, in turn order after the mover.
    pub fn opponent_symbols(&self) -> Vec<Symbol> {
        (1..self.players.len()).map(|n| self.symbol_of(n)).collect()
    }

    pub fn current_kind(&self) -> PlayerKind {
        self.players[self.current]
    }

    /// Place the mover's stone at `(x, y)`, then record a win or draw or
    /// pass the turn on.
    fn apply(&mut self, x: usize, y: usize) -> Result<(), PlaceError> {
        let symbol = self.current_symbol();
        let line = scan(&self.board, x, y, symbol)[0];
        self.board.place(x, y, symbol)?;
        self.moves.push((x, y));
        debug!(symbol = symbol.number(), x, y, round = self.round, "stone placed");

        if line.is_win() {
            self.finish(Outcome::Win {
                symbol,
                line: line.ends,
            });
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        } else {
            self.advance();
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.round += 1;
        self.current = (self.current + 1) % self.players.len();
    }

    fn finish(&mut self, outcome: Outcome) {
        self.running = false;
        self.outcome = Some(outcome);
        info!(?outcome, moves = self.moves.len(), "match finished");
    }
}

/// Let agents move until a human is to play or the match ends.
///
/// A selector or placement fault ends the match as a draw; the board is left
/// as it was before the faulty move.
fn run_agents(state: &mut MatchState, rng: &mut fastrand::Rng) {
    while state.is_running() && state.current_kind() == PlayerKind::Agent {
        let own = state.current_symbol();
        let opponents = state.opponent_symbols();
        match select_move(state.board(), own, &opponents, rng) {
            Ok(Decision::Play((x, y))) => {
                if let Err(err) = state.apply(x, y) {
                    error!(%err, "agent placement failed");
                    state.finish(Outcome::Draw);
                }
            }
            Ok(Decision::Draw) => state.finish(Outcome::Draw),
            Err(err) => {
                error!(%err, "move selection failed");
                state.finish(Outcome::Draw);
            }
        }
    }
}

/// The match controller.
pub struct Match {
    state: Option<MatchState>,
    rng: fastrand::Rng,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// A controller whose agent tie-breaks are randomly seeded.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// A controller with reproducible agent tie-breaks.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self { state: None, rng }
    }

    /// Start a fresh match, discarding any previous one.
    ///
    /// Dimensions and seating are assumed valid (see [`MatchConfig`]). If
    /// the first seat is an agent it moves before this returns.
    pub fn start(&mut self, rows: usize, cols: usize, players: &[PlayerKind]) {
        debug_assert!((MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()));
        info!(rows, cols, players = players.len(), "match started");

        let state = self
            .state
            .insert(MatchState::new(rows, cols, players.to_vec()));
        run_agents(state, &mut self.rng);
    }

    pub fn start_with(&mut self, config: &MatchConfig) {
        self.start(config.rows, config.cols, &config.players);
    }

    /// Play a human move. Returns `false`, changing nothing, unless a match
    /// is running, a human is to move and `(x, y)` is an empty cell.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_move(&mut self, x: usize, y: usize) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !state.is_running()
            || state.current_kind() != PlayerKind::Human
            || !state.board().is_valid_move(x, y)
        {
            return false;
        }
        if state.apply(x, y).is_err() {
            return false;
        }
        run_agents(state, &mut self.rng);
        true
    }

    /// Drop the current match.
    pub fn end(&mut self) {
        self.state = None;
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            None => Phase::NotStarted,
            Some(state) => match state.outcome() {
                Some(outcome) => Phase::Finished(outcome),
                None => Phase::Running,
            },
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(MatchState::is_running)
    }

    pub fn current_player_index(&self) -> Option<usize> {
        self.state.as_ref().map(MatchState::current)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.as_ref().and_then(MatchState::outcome)
    }

    /// Read-only view of the board, for rendering.
    pub fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(MatchState::board)
    }

    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    pub fn round(&self) -> Option<usize> {
        self.state.as_ref().map(MatchState::round)
    }

    pub fn players(&self) -> &[PlayerKind] {
        self.state.as_ref().map(MatchState::players).unwrap_or_default()
    }

    pub fn moves(&self) -> &[Point] {
        self.state.as_ref().map(MatchState::moves).unwrap_or_default()
    }
}
