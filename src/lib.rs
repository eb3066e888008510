//! Gomoku-Rust: a connect-five engine with a rule-table agent.
//!
//! Two or three players take turns placing stones on a rectangular board;
//! the first to line up five in a row, column or diagonal wins. Any seat can
//! be played by the built-in agent, which picks moves from a fixed table of
//! tactical rules in a single pass over the board rather than by search.
//!
//! ## Modules
//!
//! - [`constants`] - Goal length, board bounds and scan axes
//! - [`board`] - Board storage and stone placement
//! - [`scan`] - Run and open-space measurement along the four axes
//! - [`rules`] - The ordered tactical rule table
//! - [`selector`] - Agent move selection
//! - [`game`] - Match state and the match controller
//! - [`config`] - Match setup validation
//! - [`protocol`] - Text command front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::config::PlayerKind;
//! use gomoku_rust::game::Match;
//!
//! // Human against agent on a 9x9 board
//! let mut game = Match::with_seed(7);
//! game.start(9, 9, &[PlayerKind::Human, PlayerKind::Agent]);
//!
//! // The agent answers before submit_move returns
//! assert!(game.submit_move(4, 4));
//! assert_eq!(game.moves().len(), 2);
//! println!("{}", game.board().unwrap());
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod protocol;
pub mod rules;
pub mod scan;
pub mod selector;
