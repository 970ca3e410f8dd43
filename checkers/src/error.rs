//! Defines the error types needed by the checkers crate
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used by methods in the `checkers` crate
///
/// Every error is recoverable. A caller reporting one of these to a player should simply ask for
/// another move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cannot parse string
    ParseError,
    /// Position, row or column is outside the board
    OutOfBounds,
    /// The move breaks a geometry or occupancy rule
    IllegalMove,
    /// The continuation jump doesn't capture an opponent's piece
    IllegalCapture,
    /// The turn can't end until the capturing piece stops jumping
    ContinuationPending,
    /// The current turn is over and must be ended before another move
    TurnComplete,
    /// The turn can't end before a move is made
    NoMoveMade,
    /// The game has already been decided
    GameOver,
    /// More than one piece on the same square
    OverlappingPieces,
    /// A piece on a light square
    LightSquare,
    /// A man on the row where it should have been promoted
    ManOnPromotionRow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        f.write_str(match self {
            ParseError => "cannot parse string",
            OutOfBounds => "coordinates must be 0-7",
            IllegalMove => "illegal move",
            IllegalCapture => "not a valid capture",
            ContinuationPending => "the same piece must continue capturing",
            TurnComplete => "the turn is already complete",
            NoMoveMade => "no move has been made this turn",
            GameOver => "the game is over",
            OverlappingPieces => "more than one piece on a square",
            LightSquare => "piece on a light square",
            ManOnPromotionRow => "man on its promotion row",
        })
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by methods in the `checkers` crate
pub type Result<T> = std::result::Result<T, Error>;
