//! Parses the lines a player types.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use lazy_static::lazy_static;
use regex::{RegexSet, Regex};
use checkers::Square;
use checkers::error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A line of player input
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ends the game. Anything after a leading `-1` is ignored.
    ///
    /// ```text
    /// -1
    /// ```
    Quit,
    /// The first move of a turn.
    ///
    /// ```text
    /// FROM_ROW FROM_COL TO_ROW TO_COL
    /// ```
    Move(Coord, Coord),
    /// The destination of a further jump by the capturing piece.
    ///
    /// ```text
    /// TO_ROW TO_COL
    /// ```
    Jump(Coord),
    /// Anything else.
    Unknown,
}

/// A row and column as typed, which may be off the board
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Coord {
    /// The row
    pub row: i64,
    /// The column
    pub col: i64,
}

impl Coord {
    /// Returns the square at this coordinate.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless both the row and column are 0 through 7.
    pub fn square(self) -> Result<Square> {
        let row = usize::try_from(self.row).map_err(|_| Error::OutOfBounds)?;
        let col = usize::try_from(self.col).map_err(|_| Error::OutOfBounds)?;
        Square::from_coord(row, col)
    }
}

const COMMANDS: [&str; 3] = [
    r"^\s*-1(?:\s|$)",
    r"^\s*(-?\d+)\s+(-?\d+)\s+(-?\d+)\s+(-?\d+)\s*$",
    r"^\s*(-?\d+)\s+(-?\d+)\s*$",
];

lazy_static! {
    static ref COMMAND_SET: RegexSet = RegexSet::new(&COMMANDS).expect("INFALLIBLE");
    static ref COMMAND_VEC: Vec<Regex> = {
        let mut cmd_vec = Vec::new();
        for cmd in &COMMANDS {
            cmd_vec.push(Regex::new(cmd).expect("INFALLIBLE"));
        }
        cmd_vec
    };
}

impl Command {
    /// Parses one line of input.
    ///
    /// Numbers too large to fit are treated as off the board rather than unparseable.
    pub fn parse(line: &str) -> Command {
        let matches = COMMAND_SET.matches(line);

        let index = match matches.iter().next() {
            Some(index) => index,
            None => return Command::Unknown,
        };

        let caps = match COMMAND_VEC[index].captures(line) {
            Some(caps) => caps,
            None => return Command::Unknown,
        };
        let num = |i: usize| {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(i64::max_value())
        };

        match index {
            0 => Command::Quit,
            1 => Command::Move(
                Coord { row: num(1), col: num(2) },
                Coord { row: num(3), col: num(4) },
            ),
            2 => Command::Jump(Coord { row: num(1), col: num(2) }),
            _ => Command::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quit() {
        assert_eq!(Command::parse("-1"), Command::Quit);
        assert_eq!(Command::parse("  -1 \n"), Command::Quit);
        assert_eq!(Command::parse("-1 0 0 0"), Command::Quit);
        assert_eq!(Command::parse("-1 5"), Command::Quit);
        assert_eq!(Command::parse("-10 0"), Command::Jump(Coord { row: -10, col: 0 }));
    }

    #[test]
    fn parses_moves() {
        assert_eq!(
            Command::parse("2 1 3 2\n"),
            Command::Move(Coord { row: 2, col: 1 }, Coord { row: 3, col: 2 })
        );
        assert_eq!(
            Command::parse(" 8\t0  -3 2"),
            Command::Move(Coord { row: 8, col: 0 }, Coord { row: -3, col: 2 })
        );
    }

    #[test]
    fn parses_jumps() {
        assert_eq!(Command::parse("4 3"), Command::Jump(Coord { row: 4, col: 3 }));
    }

    #[test]
    fn rejects_other_input() {
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("quit"), Command::Unknown);
        assert_eq!(Command::parse("2 1 3"), Command::Unknown);
        assert_eq!(Command::parse("2 1 3 2 1"), Command::Unknown);
        assert_eq!(Command::parse("2,1 3,2"), Command::Unknown);
    }

    #[test]
    fn huge_numbers_are_off_the_board() {
        match Command::parse("99999999999999999999 0") {
            Command::Jump(coord) => assert_eq!(coord.square(), Err(Error::OutOfBounds)),
            cmd => panic!("parsed as {:?}", cmd),
        }
    }

    #[test]
    fn coordinates_to_squares() {
        assert_eq!(Coord { row: 2, col: 1 }.square().map(|sq| sq.index()), Ok(17));
        assert_eq!(Coord { row: 7, col: 7 }.square().map(|sq| sq.index()), Ok(63));
        assert_eq!(Coord { row: -1, col: 0 }.square(), Err(Error::OutOfBounds));
        assert_eq!(Coord { row: 0, col: 8 }.square(), Err(Error::OutOfBounds));
    }
}
