//! Contains structures related to the `Position`.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::*;
use crate::game::GameResult;

use bitboard::*;

use Color::*;
use Piece::*;

mod builder;
pub use builder::PositionBuilder;

pub mod moves;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The arrangement of pieces on the board, plus the side to move.
///
/// Pieces are stored in four bitboards: red men, black men, red kings and black kings. No square
/// is ever present in more than one of them.
///
/// # Instantiation
/// There are two typical ways of creating a new `Position` structure.
///  -  The [`new`](#method.new) method creates a `Position` containing the standard starting
///     layout with red to move.
///  -  Using a [`PositionBuilder`](struct.PositionBuilder.html).
///
/// # Making Moves
/// [`check_move`](#method.check_move) validates the first move of a turn and
/// [`check_capture`](#method.check_capture) validates each further jump by the same piece.
/// [`execute_move`](#method.execute_move) applies a validated move, including the removal of a
/// captured piece and promotion. It does not change the turn. That's up to the caller, once the
/// capturing piece has no jumps left (see
/// [`can_continue_capturing`](#method.can_continue_capturing)).
///
/// ```rust
/// use checkers::{Position, Square};
///
/// let mut pos = Position::new();
/// let from = Square::from_coord(2, 1).unwrap();
/// let to = Square::from_coord(3, 2).unwrap();
///
/// assert!(pos.is_legal_move(from, to));
/// pos.execute_move(from, to).unwrap();
/// assert!(!pos.red().contains(from));
/// assert!(pos.red().contains(to));
/// pos.switch_turn();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pieces: [[Bitboard; Piece::COUNT]; Color::COUNT],
    turn: Color,
}

impl Position {
    /// Returns the standard starting Position.
    pub fn new() -> Position {
        Position {
            pieces: [
                // red
                [
                    // men: dark squares of rows 0-2
                    Bitboard::from(0x0000_0000_00aa_55aau64),
                    // kings
                    Bitboard::new(),
                ],
                // black
                [
                    // men: dark squares of rows 5-7
                    Bitboard::from(0x55aa_5500_0000_0000u64),
                    // kings
                    Bitboard::new(),
                ],
            ],
            turn: Red,
        }
    }

    /// Returns a position with an empty board.
    fn empty_board() -> Position {
        Position {
            pieces: [[Bitboard::new(); Piece::COUNT]; Color::COUNT],
            turn: Red,
        }
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Passes the turn to the other side.
    pub fn switch_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Returns the squares occupied by `color`'s pieces of type `piece`.
    pub fn occupied_by_piece(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color as usize][piece as usize]
    }

    /// Returns the squares occupied by `color`'s men and kings.
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied_by_piece(color, Man) | self.occupied_by_piece(color, King)
    }

    /// Returns all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Red) | self.occupied_by(Black)
    }

    /// Returns the red men.
    pub fn red(&self) -> Bitboard {
        self.occupied_by_piece(Red, Man)
    }

    /// Returns the black men.
    pub fn black(&self) -> Bitboard {
        self.occupied_by_piece(Black, Man)
    }

    /// Returns the red kings.
    pub fn red_kings(&self) -> Bitboard {
        self.occupied_by_piece(Red, King)
    }

    /// Returns the black kings.
    pub fn black_kings(&self) -> Bitboard {
        self.occupied_by_piece(Black, King)
    }

    /// Returns the color and type of the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for &color in &[Red, Black] {
            for &piece in &Piece::ALL {
                if self.occupied_by_piece(color, piece).contains(sq) {
                    return Some((color, piece));
                }
            }
        }

        None
    }

    /// Returns `true` if any piece occupies `sq`.
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied().contains(sq)
    }

    /// Returns `true` if a piece belonging to the opponent of `mover` occupies `sq`.
    pub fn opponent_piece_at(&self, sq: Square, mover: Color) -> bool {
        self.occupied_by(!mover).contains(sq)
    }

    /// Returns `true` if a king of either color occupies `sq`.
    pub fn king_at(&self, sq: Square) -> bool {
        (self.red_kings() | self.black_kings()).contains(sq)
    }

    /// Returns the number of men and kings `color` has left.
    pub fn piece_count(&self, color: Color) -> usize {
        self.occupied_by(color).len()
    }

    /// Returns the result of the game if one side has no pieces left, or `None` if the game
    /// should continue.
    ///
    /// The side with no pieces loses. If neither side has any pieces, the game is a draw.
    pub fn winner(&self) -> Option<GameResult> {
        match (self.piece_count(Red), self.piece_count(Black)) {
            (0, 0) => Some(GameResult::Draw),
            (0, _) => Some(GameResult::Win(Black)),
            (_, 0) => Some(GameResult::Win(Red)),
            _ => None,
        }
    }

    /// Returns `true` if no square is present in more than one of the four bitboards and every
    /// piece is on a dark square.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::new();

        for color in &self.pieces {
            for &bd in color {
                if seen.intersects(bd) {
                    return false;
                }
                seen |= bd;
            }
        }

        seen.is_disjoint(!Bitboard::DARK_SQUARES)
    }

    /// Converts any man standing on its promotion row into a king. Returns the promoted squares.
    pub(crate) fn promote(&mut self) -> Bitboard {
        let mut promoted = Bitboard::new();

        for &color in &[Red, Black] {
            let c = color as usize;
            let new_kings = self.pieces[c][Man as usize] & Bitboard::row(color.promotion_row());

            self.pieces[c][King as usize] |= new_kings;
            self.pieces[c][Man as usize] &= !new_kings;
            promoted |= new_kings;
        }

        promoted
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    /// Draws the board with row 7 at the top: `.` for an empty square, `r` and `b` for men, `R`
    /// and `B` for kings. The side to move is shown below the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..Square::ROWS {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;

        for row in (0..Square::ROWS).rev() {
            write!(f, "{} | ", row)?;
            for col in 0..Square::ROWS {
                let ch = Square::from_coord(row, col)
                    .ok()
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |(color, piece)| piece.symbol(color));
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }

        write!(f, "Turn: {}", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use super::*;

    fn sq(pos: i32) -> Square {
        Square::try_from(pos).unwrap()
    }

    #[test]
    fn starting_position_has_twelve_men_each() {
        let pos = Position::new();

        assert_eq!(pos.occupied().len(), 24);
        assert_eq!(pos.red().len(), 12);
        assert_eq!(pos.black().len(), 12);
        assert_eq!(pos.red_kings().len(), 0);
        assert_eq!(pos.black_kings().len(), 0);
        assert_eq!(pos.turn(), Red);
        assert!(pos.is_consistent());
    }

    #[test]
    fn starting_position_uses_dark_squares_of_outer_rows() {
        let pos = Position::new();

        for s in Square::all() {
            let expected = if !s.is_dark() {
                None
            } else if s.row() <= 2 {
                Some((Red, Man))
            } else if s.row() >= 5 {
                Some((Black, Man))
            } else {
                None
            };
            assert_eq!(pos.piece_at(s), expected, "square {}", s);
        }
    }

    #[test]
    fn occupancy_queries() {
        let pos = Position::new();

        assert!(pos.is_occupied(sq(17)));
        assert!(!pos.is_occupied(sq(26)));
        assert!(pos.opponent_piece_at(sq(40), Red));
        assert!(!pos.opponent_piece_at(sq(17), Red));
        assert!(pos.opponent_piece_at(sq(17), Black));
        assert!(!pos.opponent_piece_at(sq(26), Black));
        assert!(!pos.king_at(sq(17)));
    }

    #[test]
    fn no_winner_at_start() {
        assert_eq!(Position::new().winner(), None);
    }

    #[test]
    fn side_without_pieces_loses() {
        let mut builder = PositionBuilder::new();
        builder.piece(Red, Man, sq(17));
        assert_eq!(builder.validate().unwrap().winner(), Some(GameResult::Win(Red)));

        let mut builder = PositionBuilder::new();
        builder.piece(Black, King, sq(26));
        assert_eq!(builder.validate().unwrap().winner(), Some(GameResult::Win(Black)));
    }

    #[test]
    fn empty_board_is_a_draw() {
        assert_eq!(PositionBuilder::new().validate().unwrap().winner(), Some(GameResult::Draw));
    }

    #[test]
    fn overlapping_bitboards_are_inconsistent() {
        let mut pos = Position::new();
        assert!(pos.is_consistent());

        pos.pieces[Red as usize][King as usize].insert(sq(17));
        assert!(!pos.is_consistent());
    }

    #[test]
    fn promote_moves_men_on_the_far_row() {
        let mut pos = Position::empty_board();
        pos.pieces[Red as usize][Man as usize].insert(sq(57));
        pos.pieces[Black as usize][Man as usize].insert(sq(1));
        pos.pieces[Black as usize][Man as usize].insert(sq(26));

        let promoted = pos.promote();

        assert_eq!(promoted, Bitboard::from(sq(57)) | sq(1).into());
        assert_eq!(pos.red_kings(), Bitboard::from(sq(57)));
        assert_eq!(pos.black_kings(), Bitboard::from(sq(1)));
        assert_eq!(pos.black(), Bitboard::from(sq(26)));
        assert!(pos.red().is_empty());

        // promotion is idempotent
        let before = pos.clone();
        assert!(pos.promote().is_empty());
        assert_eq!(pos, before);
    }

    #[test]
    fn display_draws_the_board() {
        let expected = "    0 1 2 3 4 5 6 7 \n\
                        7 | b . b . b . b . \n\
                        6 | . b . b . b . b \n\
                        5 | b . b . b . b . \n\
                        4 | . . . . . . . . \n\
                        3 | . . . . . . . . \n\
                        2 | . r . r . r . r \n\
                        1 | r . r . r . r . \n\
                        0 | . r . r . r . r \n\
                        Turn: Red";

        assert_eq!(Position::new().to_string(), expected);
    }
}
