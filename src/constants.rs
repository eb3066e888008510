//! Constants for the goal length, board bounds and scan geometry.
//!
//! Board dimensions are chosen at runtime (the setup layer validates them
//! against [`MIN_SIDE`] and [`MAX_SIDE`]), so unlike a fixed-size engine
//! nothing here depends on Cargo features.

// =============================================================================
// Game Rules
// =============================================================================

/// Number of contiguous stones needed to win.
pub const GOAL: usize = 5;

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest accepted board side. A shorter side could never hold a row of
/// [`GOAL`] stones along it.
pub const MIN_SIDE: usize = GOAL;

/// Largest accepted board side.
pub const MAX_SIDE: usize = 99;

/// Default board side used by the CLI demo.
pub const DEFAULT_SIDE: usize = 15;

/// Scan axes as `(dx, dy)`: vertical, main diagonal, horizontal, anti-diagonal.
/// Each axis is walked in both directions, so four vectors cover all eight
/// neighbours.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

// =============================================================================
// Players
// =============================================================================

/// Fewest players in a match.
pub const MIN_PLAYERS: usize = 2;

/// Most players in a match (one per [`crate::board::Symbol`]).
pub const MAX_PLAYERS: usize = 3;
