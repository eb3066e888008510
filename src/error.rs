/// Errors raised when a stone cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("({x}, {y}) is off the {cols}x{rows} board")]
    OffBoard {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    #[error("({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },
}

/// Errors raised by the move selector.
///
/// Any of these means candidate generation is broken; the controller treats
/// them as fatal for the current match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("agent chose an unplayable cell ({x}, {y})")]
    InvalidChoice { x: usize, y: usize },
}

/// Errors that can occur when validating match setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rows must be between {min} and {max} (got {got})")]
    Rows { got: usize, min: usize, max: usize },

    #[error("cols must be between {min} and {max} (got {got})")]
    Cols { got: usize, min: usize, max: usize },

    #[error("a match needs {min} or {max} players (got {got})")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("unknown player kind '{0}' (expected human or agent)")]
    PlayerKind(String),
}

/// Errors from parsing text-protocol commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("missing argument")]
    MissingArgument,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("no match in progress")]
    NoMatch,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
