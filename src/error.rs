use std::path::PathBuf;

use crate::board::Pos;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Reasons a move request is rejected by the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("AI is thinking")]
    AiThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error("cell ({}, {}) is occupied", .0.row + 1, .0.col + 1)]
    Occupied(Pos),

    #[error("cell ({}, {}) is not next to any mark", .0.row + 1, .0.col + 1)]
    NotAdjacent(Pos),
}

/// Errors that stop a self-play match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("engine found no move for player {player} on move {move_number}")]
    NoMove { player: char, move_number: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_is_one_based() {
        let err = MoveError::Occupied(Pos::new(2, 3));
        assert_eq!(err.to_string(), "cell (3, 4) is occupied");

        let err = MoveError::NotAdjacent(Pos::new(0, 0));
        assert_eq!(err.to_string(), "cell (1, 1) is not next to any mark");
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::NoMove {
            player: 'O',
            move_number: 7,
        };
        assert_eq!(err.to_string(), "engine found no move for player O on move 7");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("x_depth must be between 1 and 12".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: x_depth must be between 1 and 12"
        );
    }
}
