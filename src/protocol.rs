//! Line-oriented text protocol for driving a match.
//!
//! The command set follows the shape of GTP: each line is an optional
//! numeric id followed by a command and its arguments, and each response is
//! `=[id] text` on success or `?[id] text` on failure, followed by a blank
//! line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit` - Exit the loop
//! - `start <rows> <cols> <kind> <kind> [kind]` - Start a match; kinds are
//!   `human` or `agent`
//! - `play <x> <y>` - Submit a human move
//! - `showboard` - Print the board
//! - `status` - Round, player to move and phase
//! - `outcome` - `none`, `draw` or `win <player> <x1>,<y1> <x2>,<y2>`
//! - `history` - Moves played so far
//! - `end` - Abandon the current match
//!
//! ## Example
//!
//! ```ignore
//! use gomoku_rust::protocol::TextEngine;
//! let mut engine = TextEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::config::{MatchConfig, PlayerKind};
use crate::error::CommandError;
use crate::game::{Match, Outcome, Phase};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "end",
    "history",
    "known_command",
    "list_commands",
    "name",
    "outcome",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "start",
    "status",
    "version",
];

/// Text front end state.
pub struct TextEngine {
    game: Match,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self::with_match(Match::new())
    }

    /// Use a pre-built controller, e.g. one with a fixed seed.
    pub fn with_match(game: Match) -> Self {
        Self { game }
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        let result = match command {
            "name" => Ok("gomoku-rust".to_string()),
            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),
            "protocol_version" => Ok("1".to_string()),
            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),
            "known_command" => args
                .first()
                .ok_or(CommandError::MissingArgument)
                .map(|cmd| KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str()).to_string()),
            "quit" => Ok(String::new()),
            "start" => self.start(args),
            "play" => return self.play(args),
            "showboard" => self.showboard(),
            "status" => Ok(self.status()),
            "outcome" => Ok(describe_outcome(self.game.outcome())),
            "history" => Ok(self
                .game
                .moves()
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ")),
            "end" => {
                self.game.end();
                Ok(String::new())
            }
            _ => return (false, format!("unknown command: {command}")),
        };

        match result {
            Ok(message) => (true, message),
            Err(err) => (false, err.to_string()),
        }
    }

    fn start(&mut self, args: &[&str]) -> Result<String, CommandError> {
        let [rows, cols, kinds @ ..] = args else {
            return Err(CommandError::MissingArgument);
        };
        let players = kinds
            .iter()
            .map(|k| k.parse::<PlayerKind>())
            .collect::<Result<Vec<_>, _>>()?;
        let config = MatchConfig::new(parse_number(rows)?, parse_number(cols)?, players)?;

        self.game.start_with(&config);
        Ok(self.status())
    }

    fn play(&mut self, args: &[&str]) -> (bool, String) {
        let parsed = match args {
            [x, y, ..] => parse_number(x).and_then(|x| Ok((x, parse_number(y)?))),
            _ => Err(CommandError::MissingArgument),
        };
        let (x, y) = match parsed {
            Ok(point) => point,
            Err(err) => return (false, err.to_string()),
        };
        if self.game.phase() == Phase::NotStarted {
            return (false, CommandError::NoMatch.to_string());
        }
        if !self.game.submit_move(x, y) {
            warn!(x, y, "move rejected");
            return (false, "illegal move".to_string());
        }
        (true, self.status())
    }

    fn showboard(&self) -> Result<String, CommandError> {
        let board = self.game.board().ok_or(CommandError::NoMatch)?;
        Ok(format!("\n{board}").trim_end().to_string())
    }

    fn status(&self) -> String {
        match self.game.phase() {
            Phase::NotStarted => "not started".to_string(),
            Phase::Running => format!(
                "round {} player {} to move",
                self.game.round().unwrap_or(1),
                self.game.current_player_index().map_or(0, |i| i + 1)
            ),
            Phase::Finished(outcome) => format!("finished {}", describe_outcome(Some(outcome))),
        }
    }
}

fn parse_number(s: &str) -> Result<usize, CommandError> {
    s.parse::<usize>()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn describe_outcome(outcome: Option<Outcome>) -> String {
    match outcome {
        None => "none".to_string(),
        Some(Outcome::Draw) => "draw".to_string(),
        Some(Outcome::Win {
            symbol,
            line: [(x1, y1), (x2, y2)],
        }) => format!("win {} {x1},{y1} {x2},{y2}", symbol.number()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TextEngine {
        TextEngine::with_match(Match::with_seed(9))
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = TextEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = TextEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_known_command() {
        let mut engine = engine();

        let (success, response) = engine.execute("known_command", &["play"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "false");

        let (success, _) = engine.execute("known_command", &[]);
        assert!(!success);
    }

    #[test]
    fn test_start_validates() {
        let mut engine = engine();

        let (success, response) = engine.execute("start", &["4", "9", "h", "a"]);
        assert!(!success);
        assert_eq!(response, "rows must be between 5 and 99 (got 4)");

        let (success, response) = engine.execute("start", &["9", "9", "h"]);
        assert!(!success);
        assert_eq!(response, "a match needs 2 or 3 players (got 1)");

        let (success, response) = engine.execute("start", &["9", "x", "h", "h"]);
        assert!(!success);
        assert_eq!(response, "invalid number 'x'");

        let (success, response) = engine.execute("start", &["9", "9", "h", "robot"]);
        assert!(!success);
        assert!(response.contains("robot"));
    }

    #[test]
    fn test_start_play_and_end() {
        let mut engine = engine();

        let (success, response) = engine.execute("play", &["0", "0"]);
        assert!(!success);
        assert_eq!(response, "no match in progress");

        let (success, response) = engine.execute("start", &["9", "9", "human", "agent"]);
        assert!(success);
        assert_eq!(response, "round 1 player 1 to move");

        let (success, response) = engine.execute("play", &["4", "4"]);
        assert!(success);
        assert_eq!(response, "round 3 player 1 to move");

        let (success, response) = engine.execute("play", &["4", "4"]);
        assert!(!success);
        assert_eq!(response, "illegal move");

        let (success, response) = engine.execute("history", &[]);
        assert!(success);
        assert!(response.starts_with("4,4 "));

        let (success, _) = engine.execute("end", &[]);
        assert!(success);
        let (_, response) = engine.execute("status", &[]);
        assert_eq!(response, "not started");
    }

    #[test]
    fn test_run_with_ids_and_quit() {
        let mut engine = engine();
        let input = b"1 start 5 5 h h\n# comment\n\n2 play 0 0\n3 showboard\n4 quit\n5 name\n";
        let mut output = Vec::new();
        engine.run_with(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("=1 round 1 player 1 to move"));
        assert!(text.contains("=2 round 2 player 2 to move"));
        assert!(text.contains("X . . . ."));
        assert!(text.contains("=4 "));
        assert!(!text.contains("=5"));
    }

    #[test]
    fn test_outcome_reports_win_line() {
        let mut engine = engine();
        engine.execute("start", &["5", "5", "h", "h"]);
        for x in 0..4 {
            let x = x.to_string();
            assert!(engine.execute("play", &[x.as_str(), "0"]).0);
            assert!(engine.execute("play", &[x.as_str(), "2"]).0);
        }
        let (success, response) = engine.execute("play", &["4", "0"]);
        assert!(success);
        assert_eq!(response, "finished win 1 4,0 0,0");
        assert_eq!(engine.execute("outcome", &[]).1, "win 1 4,0 0,0");
    }
}
