//! The `checkers` crate implements two-player checkers on an 8x8 board using bitboards.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Board Layout
//! Squares are numbered `row * 8 + col`, so square 0 is row 0, column 0 and square 63 is row 7,
//! column 7. Only the dark squares, where `row + col` is odd, are ever occupied. Red starts on
//! rows 0 through 2 and moves toward row 7. Black starts on rows 5 through 7 and moves toward
//! row 0.
//!
//! A typical flow looks something like this:
//!
//! ```rust
//! use checkers::{Color, Square};
//! use checkers::game::Game;
//!
//! let mut game = Game::new();
//! assert_eq!(game.begin_turn(), None);
//!
//! let from = Square::from_coord(2, 1).unwrap();
//! let to = Square::from_coord(3, 2).unwrap();
//! game.apply_move(from, to).unwrap();
//! assert_eq!(game.has_forced_continuation(), None);
//!
//! game.end_turn().unwrap();
//! assert_eq!(game.position().turn(), Color::Black);
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]

use std::ops;
use std::fmt;
use std::str::FromStr;
use std::convert::TryFrom;
use error::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// The number of colors
    pub const COUNT: usize = 2;

    /// Returns the change in row for a forward move by a man of this color.
    ///
    /// Red men move toward row 7 and black men toward row 0.
    pub fn forward(self) -> i32 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Returns the row on which a man of this color is promoted to a king.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::Red => 7,
            Color::Black => 0,
        }
    }
}

impl ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    ///
    /// # Example
    /// ```
    /// use checkers::Color;
    /// assert_eq!(!Color::Red, Color::Black);
    /// assert_eq!(!Color::Black, Color::Red);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Color::Red => "Red",
            Color::Black => "Black",
        })
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" | "red" | "Red" => Ok(Color::Red),
            "b" | "black" | "Black" => Ok(Color::Black),
            _ => Err(Error::ParseError),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Red
    }
}

impl TryFrom<usize> for Color {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Color::Red),
            1 => Ok(Color::Black),
            _ => Err(Error::OutOfBounds),
        }
    }
}

impl From<Color> for usize {
    fn from(value: Color) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The rank of a checkers piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    /// A piece that may only move toward the opponent's back row
    Man = 0,
    /// A promoted piece that may move in all four diagonal directions
    King = 1,
}

impl Piece {
    /// The number of piece types
    pub const COUNT: usize = Piece::King as usize + 1;

    /// Both piece types, men first
    pub const ALL: [Piece; Piece::COUNT] = [Piece::Man, Piece::King];

    /// Returns the board symbol for a piece of this type and `color`: `r`, `b`, `R` or `B`.
    pub fn symbol(self, color: Color) -> char {
        match (color, self) {
            (Color::Red, Piece::Man) => 'r',
            (Color::Black, Piece::Man) => 'b',
            (Color::Red, Piece::King) => 'R',
            (Color::Black, Piece::King) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Piece::Man => "man",
            Piece::King => "king",
        })
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::Man
    }
}

impl TryFrom<usize> for Piece {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Piece::Man),
            1 => Ok(Piece::King),
            _ => Err(Error::OutOfBounds),
        }
    }
}

impl From<Piece> for usize {
    fn from(value: Piece) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A square on the board, stored as its linear index `row * 8 + col`.
///
/// A `Square` is always on the board. Raw integer positions, which may be off the board, are
/// converted using `Square::try_from` or `Square::from_coord`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Square(u8);

impl Square {
    /// The number of squares
    pub const COUNT: usize = 64;

    /// The number of rows (and columns)
    pub const ROWS: usize = 8;

    /// Returns the square at `row` and `col`, or `OutOfBounds` if either is greater than 7.
    pub fn from_coord(row: usize, col: usize) -> Result<Square> {
        if row < Square::ROWS && col < Square::ROWS {
            Ok(Square((row * Square::ROWS + col) as u8))
        } else {
            Err(Error::OutOfBounds)
        }
    }

    /// Returns the square's row
    pub fn row(self) -> usize {
        self.index() / Square::ROWS
    }

    /// Returns the square's column
    pub fn col(self) -> usize {
        self.index() % Square::ROWS
    }

    /// Returns the square's linear index
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for the dark (playable) squares, where `row + col` is odd.
    pub fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the square `diff` positions away in the linear numbering, or `None` if that
    /// would be off the board.
    ///
    /// Note that this doesn't prevent wrapping from one row to the next.
    pub fn offset(self, diff: i32) -> Option<Square> {
        Square::try_from(self.0 as i32 + diff).ok()
    }

    /// Returns an iterator over all squares, from 0 to 63.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("({},{})", self.row(), self.col()))
    }
}

impl TryFrom<i32> for Square {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        if on_board(value) {
            Ok(Square(value as u8))
        } else {
            Err(Error::OutOfBounds)
        }
    }
}

impl TryFrom<usize> for Square {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Square::COUNT {
            Ok(Square(value as u8))
        } else {
            Err(Error::OutOfBounds)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value.index()
    }
}

impl From<Square> for i32 {
    fn from(value: Square) -> Self {
        value.0 as i32
    }
}

/// Returns `true` if the linear position `pos` is on the board (`0 <= pos < 64`).
pub fn on_board(pos: i32) -> bool {
    pos >= 0 && pos < Square::COUNT as i32
}

/// Returns `true` if the linear position `pos` is a dark square. Positions off the board are
/// never dark.
pub fn is_dark_square(pos: i32) -> bool {
    on_board(pos) && (pos / 8 + pos % 8) % 2 == 1
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod bitboard;
mod position;
pub use position::{Position, PositionBuilder};
pub use position::moves::{MoveKind, MoveRecord};

pub mod game;
pub use game::GameResult;

pub mod error;

#[cfg(test)]
mod color_tests {
    use std::convert::TryFrom;
    use super::Color;

    #[test]
    fn display_trait_works() {
        assert_eq!(format!("{}", Color::Red), "Red");
        assert_eq!(format!("{}", Color::Black), "Black");
    }

    #[test]
    fn fromstr_trait_works() {
        assert_eq!("r".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("black".parse::<Color>().unwrap(), Color::Black);
        assert!("x".parse::<Color>().is_err());
    }

    #[test]
    fn default_is_red() {
        assert_eq!(Color::Red, Default::default());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        assert_eq!(usize::from(Color::Red), 0);
        assert_eq!(usize::from(Color::Black), 1);
        assert_eq!(Color::try_from(0usize).unwrap(), Color::Red);
        assert_eq!(Color::try_from(1usize).unwrap(), Color::Black);
        assert!(Color::try_from(2usize).is_err());
    }

    #[test]
    fn red_moves_up_and_black_moves_down() {
        assert_eq!(Color::Red.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::Red.promotion_row(), 7);
        assert_eq!(Color::Black.promotion_row(), 0);
    }
}

#[cfg(test)]
mod piece_tests {
    use super::{Color, Piece};

    #[test]
    fn symbols_match_board_rendering() {
        assert_eq!(Piece::Man.symbol(Color::Red), 'r');
        assert_eq!(Piece::Man.symbol(Color::Black), 'b');
        assert_eq!(Piece::King.symbol(Color::Red), 'R');
        assert_eq!(Piece::King.symbol(Color::Black), 'B');
    }

    #[test]
    fn default_is_man() {
        assert_eq!(Piece::Man, Default::default());
    }
}

#[cfg(test)]
mod square_tests {
    use std::convert::TryFrom;
    use super::*;

    #[test]
    fn row_and_col_match_from_coord() {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::from_coord(row, col).unwrap();
                assert_eq!(sq.row(), row);
                assert_eq!(sq.col(), col);
                assert_eq!(sq.index(), row * 8 + col);
            }
        }
    }

    #[test]
    fn out_of_bound_coordinates_are_an_error() {
        assert_eq!(Square::from_coord(8, 0), Err(Error::OutOfBounds));
        assert_eq!(Square::from_coord(0, 8), Err(Error::OutOfBounds));
        assert_eq!(Square::try_from(64i32), Err(Error::OutOfBounds));
        assert_eq!(Square::try_from(-1i32), Err(Error::OutOfBounds));
        assert_eq!(Square::try_from(Square::COUNT), Err(Error::OutOfBounds));
    }

    #[test]
    fn on_board_matches_range() {
        assert!(!on_board(-1));
        assert!(on_board(0));
        assert!(on_board(63));
        assert!(!on_board(64));
    }

    #[test]
    fn dark_squares_have_odd_coordinate_sum() {
        for pos in 0..64 {
            let sq = Square::try_from(pos).unwrap();
            assert_eq!(is_dark_square(pos), (pos / 8 + pos % 8) % 2 == 1);
            assert_eq!(sq.is_dark(), is_dark_square(pos));
        }
        assert!(is_dark_square(1));
        assert!(is_dark_square(8));
        assert!(!is_dark_square(0));
        assert!(!is_dark_square(-7));
        assert_eq!(Square::all().filter(|sq| sq.is_dark()).count(), 32);
    }

    #[test]
    fn offset_stays_on_board() {
        let sq = Square::try_from(17i32).unwrap();
        assert_eq!(sq.offset(9), Some(Square::try_from(26i32).unwrap()));
        assert_eq!(sq.offset(-18), None);
        assert_eq!(sq.offset(47), None);
    }

    #[test]
    fn display_shows_row_and_col() {
        assert_eq!(Square::from_coord(2, 1).unwrap().to_string(), "(2,1)");
    }
}
