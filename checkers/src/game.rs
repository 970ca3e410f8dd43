//! Module to implement a checkers game
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::{debug, info};
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Game result
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// The given color has won.
    Win(Color),
    /// Neither side has any pieces left.
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(color) => write!(f, "{} wins!", color),
            GameResult::Draw => f.pad("Draw"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Where a game stands between calls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The side to move must make the first move of its turn.
    AwaitingMove,
    /// A capture was just made and the piece on the given square must capture again.
    AwaitingContinuation(Square),
    /// The side to move has finished moving. The turn passes on `end_turn`.
    TurnComplete,
    /// The game has been decided.
    GameOver(GameResult),
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A game of checkers: the current position, the moves made so far, and the state of the turn.
///
/// Each turn is played as:
///
///  1. [`begin_turn`](#method.begin_turn), which reports the result if the game is over;
///  2. one [`apply_move`](#method.apply_move), followed by another for as long as
///     [`has_forced_continuation`](#method.has_forced_continuation) returns a square;
///  3. [`end_turn`](#method.end_turn), which passes the turn to the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    phase: Phase,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Creates a new game from the standard starting position
    pub fn new() -> Self {
        Game::starting_at(Position::new())
    }

    /// Creates a new game starting at the given position
    pub fn starting_at(position: Position) -> Self {
        Game {
            position,
            phase: Phase::AwaitingMove,
            history: Vec::new(),
        }
    }

    /// Returns the current position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the current phase of the turn
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the moves made so far, including each jump of a multiple capture
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the result of the game, or `None` if it is still in progress
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Starts a turn, returning the result instead if the game has been decided.
    ///
    /// Calling this in the middle of a turn has no effect.
    pub fn begin_turn(&mut self) -> Option<GameResult> {
        if self.phase == Phase::AwaitingMove {
            if let Some(result) = self.position.winner() {
                info!("game over: {}", result);
                self.phase = Phase::GameOver(result);
            }
        }

        self.result()
    }

    /// Validates and makes a move for the side to move.
    ///
    /// The first move of a turn is validated with
    /// [`Position::check_move`](../struct.Position.html#method.check_move). While a capture is
    /// pending, `from` must be the capturing piece and the move is validated with
    /// [`Position::check_capture`](../struct.Position.html#method.check_capture).
    ///
    /// # Errors
    ///
    /// Returns the validation error, or `ContinuationPending` if `from` is not the piece that must
    /// continue capturing, `TurnComplete` if the turn has not been ended, and `GameOver` once the
    /// game is decided. The game is unchanged on error.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord> {
        match self.phase {
            Phase::AwaitingMove => {
                if self.begin_turn().is_some() {
                    return Err(Error::GameOver);
                }
                self.position.check_move(from, to)?;
            },
            Phase::AwaitingContinuation(sq) => {
                if from != sq {
                    return Err(Error::ContinuationPending);
                }
                self.position.check_capture(from, to)?;
            },
            Phase::TurnComplete => return Err(Error::TurnComplete),
            Phase::GameOver(_) => return Err(Error::GameOver),
        }

        let record = self.position.execute_move(from, to)?;
        self.history.push(record);

        self.phase = if record.is_jump() && self.position.can_continue_capturing(to) {
            debug!("{} must continue capturing from {}", record.color(), to);
            Phase::AwaitingContinuation(to)
        } else {
            Phase::TurnComplete
        };

        Ok(record)
    }

    /// Returns the square of the piece that must capture again, if any.
    pub fn has_forced_continuation(&self) -> Option<Square> {
        match self.phase {
            Phase::AwaitingContinuation(sq) => Some(sq),
            _ => None,
        }
    }

    /// Ends the current turn and passes the move to the other side.
    ///
    /// # Errors
    ///
    /// Returns `NoMoveMade` if no move has been made this turn, `ContinuationPending` if a capture
    /// must still be continued, and `GameOver` once the game is decided.
    pub fn end_turn(&mut self) -> Result<()> {
        match self.phase {
            Phase::TurnComplete => {
                self.position.switch_turn();
                self.phase = Phase::AwaitingMove;
                debug!("turn passes to {}", self.position.turn());
                self.begin_turn();
                Ok(())
            },
            Phase::AwaitingMove => Err(Error::NoMoveMade),
            Phase::AwaitingContinuation(_) => Err(Error::ContinuationPending),
            Phase::GameOver(_) => Err(Error::GameOver),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
