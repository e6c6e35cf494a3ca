//! Self-play match between two engines
//!
//! X moves first. Each turn the side to move searches at its configured
//! depth, the move is applied to the match board, and the game ends at the
//! first win or once the board is full.

use std::time::Duration;

use log::info;

use crate::board::{Board, Pos, Stone};
use crate::config::MatchConfig;
use crate::engine::AIEngine;
use crate::error::MatchError;
use crate::eval::Score;
use crate::rules::{check_outcome, Outcome};

/// One played turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    /// 1-based move number
    pub move_number: usize,
    pub player: Stone,
    pub mov: Pos,
    pub score: Score,
    /// Nodes generated by the search for this move
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Engine-vs-engine game
pub struct Match {
    board: Board,
    to_move: Stone,
    x_engine: AIEngine,
    o_engine: AIEngine,
    history: Vec<TurnRecord>,
    outcome: Option<Outcome>,
}

impl Match {
    /// Start a match from the initial position.
    pub fn new(config: &MatchConfig) -> Self {
        Self::from_position(config, Board::initial(), Stone::X)
    }

    /// Start a match from an arbitrary position with `to_move` on turn.
    pub fn from_position(config: &MatchConfig, board: Board, to_move: Stone) -> Self {
        Self {
            board,
            to_move,
            x_engine: AIEngine::with_config(config.x_depth, config.threads),
            o_engine: AIEngine::with_config(config.o_depth, config.threads),
            history: Vec::new(),
            outcome: check_outcome(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Final outcome, `None` while the game is running
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Play one turn for the side to move.
    ///
    /// Returns `Ok(None)` without searching if the game is already over.
    pub fn play_turn(&mut self) -> Result<Option<TurnRecord>, MatchError> {
        if self.outcome.is_some() {
            return Ok(None);
        }

        let player = self.to_move;
        let move_number = self.history.len() + 1;
        let engine = match player {
            Stone::O => &mut self.o_engine,
            _ => &mut self.x_engine,
        };

        let result = engine.get_move_with_stats(&self.board, player);
        let mov = result.best_move.ok_or(MatchError::NoMove {
            player: player.symbol(),
            move_number,
        })?;

        self.board.place_stone(mov, player);
        info!(
            "move {}: player {} played ({}, {}) nodes {} in {:?}",
            move_number,
            player.player_number(),
            mov.row + 1,
            mov.col + 1,
            result.nodes,
            result.elapsed
        );

        let record = TurnRecord {
            move_number,
            player,
            mov,
            score: result.score,
            nodes: result.nodes,
            elapsed: result.elapsed,
        };
        self.history.push(record.clone());
        self.outcome = check_outcome(&self.board);
        self.to_move = player.opponent();

        Ok(Some(record))
    }

    /// Play until the game ends, calling `on_turn` after every move.
    pub fn play_out<F>(&mut self, mut on_turn: F) -> Result<Outcome, MatchError>
    where
        F: FnMut(&TurnRecord, &Board),
    {
        loop {
            if let Some(outcome) = self.outcome {
                info!("game over: {:?}", outcome);
                return Ok(outcome);
            }
            if let Some(record) = self.play_turn()? {
                on_turn(&record, &self.board);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> MatchConfig {
        MatchConfig {
            x_depth: 1,
            o_depth: 2,
            threads: 1,
        }
    }

    #[test]
    fn test_match_plays_to_completion() {
        let mut game = Match::new(&fast_config());
        let mut turns = 0;
        let outcome = game.play_out(|_, _| turns += 1).unwrap();

        assert_eq!(game.outcome(), Some(outcome));
        assert_eq!(check_outcome(game.board()), Some(outcome));
        assert_eq!(turns, game.history().len());
        assert_eq!(game.board().stone_count() as usize, 2 + turns);
    }

    #[test]
    fn test_players_alternate_starting_with_x() {
        let mut game = Match::new(&fast_config());
        game.play_out(|_, _| {}).unwrap();
        for (i, record) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Stone::X } else { Stone::O };
            assert_eq!(record.player, expected);
            assert_eq!(record.move_number, i + 1);
            assert!(record.nodes >= 1);
        }
    }

    #[test]
    fn test_match_is_deterministic() {
        let mut a = Match::new(&fast_config());
        let mut b = Match::new(&fast_config());
        a.play_out(|_, _| {}).unwrap();
        b.play_out(|_, _| {}).unwrap();
        let moves_a: Vec<_> = a.history().iter().map(|r| (r.mov, r.nodes)).collect();
        let moves_b: Vec<_> = b.history().iter().map(|r| (r.mov, r.nodes)).collect();
        assert_eq!(moves_a, moves_b);
        assert_eq!(a.outcome(), b.outcome());
    }

    #[test]
    fn test_finished_match_does_not_search() {
        let board = Board::from_rows(["XXXX  ", "OOO   ", "      ", "      ", "      "]);
        let mut game = Match::from_position(&fast_config(), board, Stone::O);
        assert_eq!(game.outcome(), Some(Outcome::Winner(Stone::X)));
        assert!(game.play_turn().unwrap().is_none());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_no_move_is_an_error() {
        let mut game = Match::from_position(&fast_config(), Board::new(), Stone::X);
        let err = game.play_turn().unwrap_err();
        assert_eq!(
            err,
            MatchError::NoMove {
                player: 'X',
                move_number: 1
            }
        );
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board = Board::from_rows(["      ", "      ", "   O  ", "   O  ", " XXX O"]);
        let mut game = Match::from_position(&fast_config(), board, Stone::X);
        let record = game.play_turn().unwrap().unwrap();
        assert_eq!(record.mov, Pos::new(4, 0));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Stone::X)));
    }
}
