/// Errors raised while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {rows}x{cols} board with {n_players} players")]
    InvalidConfiguration {
        rows: usize,
        cols: usize,
        n_players: usize,
    },

    #[error(
        "configuration too large: {rows}x{cols} board with {n_players} players \
         (limits {max_dimension} per side, {max_players} players)"
    )]
    TooLarge {
        rows: usize,
        cols: usize,
        n_players: usize,
        max_dimension: usize,
        max_players: usize,
    },

    #[error("expected one color per player ({expected}), got {got}")]
    ColorCount { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = ConfigError::InvalidConfiguration {
            rows: 0,
            cols: 6,
            n_players: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: 0x6 board with 2 players"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = ConfigError::TooLarge {
            rows: 300,
            cols: 2,
            n_players: 2,
            max_dimension: 256,
            max_players: 64,
        };
        assert_eq!(
            err.to_string(),
            "configuration too large: 300x2 board with 2 players (limits 256 per side, 64 players)"
        );
    }

    #[test]
    fn test_color_count_display() {
        let err = ConfigError::ColorCount {
            expected: 3,
            got: 1,
        };
        assert_eq!(err.to_string(), "expected one color per player (3), got 1");
    }
}
