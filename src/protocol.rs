//! Line-oriented text protocol for driving a game.
//!
//! One command per line. Each command may be prefixed with a numeric id that
//! is echoed back. Successful responses start with `=`, failures with `?`,
//! and every response is followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `new_game <rows> <cols> <players> [strict|lenient]` - Start a fresh game
//! - `claim <player> <h|v> <row> <col>` - Claim an edge for a given player
//! - `play <h|v> <row> <col>` - Claim an edge for the player to move
//! - `turn` - Player to move
//! - `scores` - Scores in player order
//! - `game_over` - `true` once every square is owned
//! - `leaders` - Players tied on the highest score
//! - `colors` - Display color of each player
//! - `showboard` - ASCII rendering of the board
//!
//! ## Example
//!
//! ```ignore
//! use dots_and_squares::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Board, ClaimOutcome, Edge, Orientation, PlayerId, TurnPolicy};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "claim",
    "colors",
    "game_over",
    "known_command",
    "leaders",
    "list_commands",
    "name",
    "new_game",
    "play",
    "protocol_version",
    "quit",
    "scores",
    "showboard",
    "turn",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    config: GameConfig,
    board: Board,
}

impl ProtocolEngine {
    /// Engine with the default 6x6 two-player game.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            board: Board::default(),
        }
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let board = Board::from_config(&config)?;
        Ok(Self { config, board })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), io::stdout())
    }

    /// Run the command loop over arbitrary streams until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
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
            let (success, message) = self.execute(&command, &parts[1..]);
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
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Parse `<h|v> <row> <col>`.
    fn parse_edge(args: &[&str]) -> Result<Edge, String> {
        let [o, row, col] = args else {
            return Err("expected <h|v> <row> <col>".to_string());
        };
        let orientation = match o.to_lowercase().as_str() {
            "h" | "horizontal" => Orientation::Horizontal,
            "v" | "vertical" => Orientation::Vertical,
            other => return Err(format!("invalid orientation: {other}")),
        };
        let row = row.parse().map_err(|_| format!("invalid row: {row}"))?;
        let col = col.parse().map_err(|_| format!("invalid col: {col}"))?;
        Ok(Edge {
            orientation,
            row,
            col,
        })
    }

    fn claim(&mut self, player: PlayerId, edge: Edge) -> (bool, String) {
        match self.board.claim(player, edge) {
            ClaimOutcome::Rejected(reason) => (false, reason.to_string()),
            ClaimOutcome::Passed => (true, format!("next {}", self.board.current_player())),
            ClaimOutcome::Completed(n) => (
                true,
                format!("completed {n} next {}", self.board.current_player()),
            ),
        }
    }

    fn join<T: ToString>(items: &[T]) -> String {
        items
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "execute");
        match command {
            "name" => (true, "dots-and-squares".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "new_game" => {
                if args.len() < 3 {
                    return (false, "expected <rows> <cols> <players>".to_string());
                }
                let mut dims = [0usize; 3];
                for (slot, arg) in dims.iter_mut().zip(args) {
                    match arg.parse() {
                        Ok(v) => *slot = v,
                        Err(_) => return (false, format!("invalid number: {arg}")),
                    }
                }
                let policy = match args.get(3).map(|s| s.to_lowercase()) {
                    None => TurnPolicy::Lenient,
                    Some(p) if p == "lenient" => TurnPolicy::Lenient,
                    Some(p) if p == "strict" => TurnPolicy::Strict,
                    Some(p) => return (false, format!("invalid policy: {p}")),
                };
                let config = GameConfig::new(dims[0], dims[1], dims[2]).with_policy(policy);
                match Board::from_config(&config) {
                    Ok(board) => {
                        self.config = config;
                        self.board = board;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "claim" => {
                let Some((player, rest)) = args.split_first() else {
                    return (false, "missing arguments".to_string());
                };
                let Ok(player) = player.parse::<PlayerId>() else {
                    return (false, format!("invalid player: {player}"));
                };
                match Self::parse_edge(rest) {
                    Ok(edge) => self.claim(player, edge),
                    Err(e) => (false, e),
                }
            }

            "play" => match Self::parse_edge(args) {
                Ok(edge) => self.claim(self.board.current_player(), edge),
                Err(e) => (false, e),
            },

            "turn" => (true, self.board.current_player().to_string()),

            "scores" => (true, Self::join(self.board.scores())),

            "game_over" => (true, self.board.is_game_over().to_string()),

            "leaders" => (true, Self::join(self.board.leaders().as_slice())),

            "colors" => (true, self.config.colors.join(" ")),

            "showboard" => (true, format!("\n{}", self.board)),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = ProtocolEngine::parse_id("123 turn");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "turn");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = ProtocolEngine::parse_id("turn");
        assert_eq!(id, None);
        assert_eq!(cmd, "turn");
    }

    #[test]
    fn test_parse_edge() {
        assert_eq!(
            ProtocolEngine::parse_edge(&["h", "1", "2"]),
            Ok(Edge::horizontal(1, 2))
        );
        assert_eq!(
            ProtocolEngine::parse_edge(&["V", "0", "3"]),
            Ok(Edge::vertical(0, 3))
        );
        assert!(ProtocolEngine::parse_edge(&["d", "0", "0"]).is_err());
        assert!(ProtocolEngine::parse_edge(&["h", "-1", "0"]).is_err());
        assert!(ProtocolEngine::parse_edge(&["h", "0"]).is_err());
    }

    #[test]
    fn test_known_command() {
        let mut engine = ProtocolEngine::new();
        assert_eq!(
            engine.execute("known_command", &["claim"]),
            (true, "true".to_string())
        );
        assert_eq!(
            engine.execute("known_command", &["genmove"]),
            (true, "false".to_string())
        );
    }

    #[test]
    fn test_new_game_and_claims() {
        let mut engine = ProtocolEngine::new();
        assert!(engine.execute("new_game", &["1", "1", "2"]).0);
        assert_eq!(engine.board().rows(), 1);

        assert_eq!(
            engine.execute("play", &["h", "0", "0"]),
            (true, "next 1".to_string())
        );
        assert_eq!(
            engine.execute("claim", &["1", "h", "0", "0"]),
            (false, "illegal move: edge already claimed".to_string())
        );
        assert!(engine.execute("play", &["h", "1", "0"]).0);
        assert!(engine.execute("play", &["v", "0", "0"]).0);
        assert_eq!(
            engine.execute("play", &["v", "0", "1"]),
            (true, "completed 1 next 1".to_string())
        );
        assert_eq!(engine.execute("scores", &[]), (true, "0 1".to_string()));
        assert_eq!(engine.execute("game_over", &[]), (true, "true".to_string()));
        assert_eq!(engine.execute("leaders", &[]), (true, "1".to_string()));
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let mut engine = ProtocolEngine::new();
        let (success, message) = engine.execute("new_game", &["0", "3", "2"]);
        assert!(!success);
        assert!(message.starts_with("invalid configuration"));
        // The old game is untouched.
        assert_eq!(engine.board().rows(), 6);
        assert!(!engine.execute("new_game", &["2", "2", "2", "sloppy"]).0);
    }

    #[test]
    fn test_new_game_rejects_huge_sizes() {
        let mut engine = ProtocolEngine::new();
        let input = b"new_game 18446744073709551615 1 2\nnew_game 2 2 18446744073709551615\n";
        let mut out = Vec::new();
        engine.run_with(&input[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let responses: Vec<&str> = out.split("\n\n").filter(|r| !r.is_empty()).collect();
        assert_eq!(responses.len(), 2);
        assert!(responses.iter().all(|r| r.starts_with("? configuration too large")));
        assert_eq!(engine.board().rows(), 6);
        assert_eq!(engine.board().n_players(), 2);
        assert_eq!(engine.execute("colors", &[]).1.split(' ').count(), 2);
    }

    #[test]
    fn test_strict_game_rejects_out_of_turn() {
        let mut engine = ProtocolEngine::new();
        assert!(engine.execute("new_game", &["2", "2", "2", "strict"]).0);
        assert_eq!(
            engine.execute("claim", &["1", "h", "0", "0"]),
            (false, "illegal move: not this player's turn".to_string())
        );
        assert_eq!(engine.execute("turn", &[]), (true, "0".to_string()));
    }

    #[test]
    fn test_run_with_ids_and_quit() {
        let mut engine = ProtocolEngine::new();
        let input = b"# comment\n\n1 name\n2 bogus\nquit\nturn\n";
        let mut out = Vec::new();
        engine.run_with(&input[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "=1 dots-and-squares\n\n?2 unknown command: bogus\n\n= \n\n"
        );
    }
}
