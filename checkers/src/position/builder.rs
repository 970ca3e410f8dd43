//! Contains a builder for `Position`
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A builder for `Position`
///
/// ```rust
/// use checkers::{Color, Piece, PositionBuilder, Square};
///
/// let pos = PositionBuilder::new()
///     .piece(Color::Black, Piece::Man, Square::from_coord(3, 2).unwrap())
///     .piece(Color::Red, Piece::Man, Square::from_coord(2, 1).unwrap())
///     .turn(Color::Black)
///     .validate()
///     .unwrap();
///
/// assert_eq!(pos.piece_count(Color::Red), 1);
/// assert_eq!(pos.turn(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct PositionBuilder {
    board: [ Option<(Color, Piece)>; Square::COUNT ],
    turn: Color,
}

impl PositionBuilder {
    /// Creates a new, empty `PositionBuilder`
    pub fn new() -> Self {
        PositionBuilder {
            board: [ None; Square::COUNT ],
            turn: Red,
        }
    }

    /// Creates a `PositionBuilder` holding the pieces and turn of `pos`
    pub fn from_position(pos: &Position) -> Self {
        let mut builder = PositionBuilder::new();

        for sq in pos.occupied() {
            builder.board[sq.index()] = pos.piece_at(sq);
        }
        builder.turn = pos.turn();

        builder
    }

    /// Sets the piece at `square`
    pub fn piece(&mut self, color: Color, piece: Piece, square: Square) -> &mut Self {
        self.board[square.index()] = Some((color, piece));
        self
    }

    /// Clears the piece at `square`
    pub fn clear(&mut self, square: Square) -> &mut Self {
        self.board[square.index()] = None;
        self
    }

    /// Sets the turn to `color`
    pub fn turn(&mut self, color: Color) -> &mut Self {
        self.turn = color;
        self
    }

    /// Validates the arrangement and returns a `Position`
    ///
    /// # Errors
    ///
    /// Returns `LightSquare` if a piece is on a light square, and `ManOnPromotionRow` if a man is
    /// on the row where it would already have been promoted.
    pub fn validate(&self) -> Result<Position> {
        use Error::*;

        let mut pos = Position::empty_board();

        for (i, piece) in self.board.iter().enumerate() {
            if let Some((color, piece)) = *piece {
                let sq = Square::try_from(i)?;

                // Step 1: only dark squares are playable
                if !sq.is_dark() {
                    return Err(LightSquare);
                }
                // Step 2: men never stand on their own promotion row
                if piece == Man && sq.row() == color.promotion_row() {
                    return Err(ManOnPromotionRow);
                }

                pos.pieces[color as usize][piece as usize].insert(sq);
            }
        }

        pos.turn = self.turn;

        if pos.is_consistent() {
            Ok(pos)
        } else {
            Err(OverlappingPieces)
        }
    }
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(pos: i32) -> Square {
        Square::try_from(pos).unwrap()
    }

    #[test]
    fn round_trips_the_starting_position() {
        let pos = Position::new();
        assert_eq!(PositionBuilder::from_position(&pos).validate(), Ok(pos));
    }

    #[test]
    fn later_pieces_replace_earlier_ones() {
        let pos = PositionBuilder::new()
            .piece(Red, Man, sq(17))
            .piece(Black, King, sq(17))
            .validate()
            .unwrap();

        assert_eq!(pos.piece_at(sq(17)), Some((Black, King)));
        assert_eq!(pos.piece_count(Red), 0);
    }

    #[test]
    fn clear_removes_a_piece() {
        let pos = PositionBuilder::from_position(&Position::new())
            .clear(sq(17))
            .turn(Black)
            .validate()
            .unwrap();

        assert_eq!(pos.piece_count(Red), 11);
        assert_eq!(pos.turn(), Black);
    }

    #[test]
    fn rejects_light_squares() {
        assert_eq!(
            PositionBuilder::new().piece(Red, Man, sq(16)).validate(),
            Err(Error::LightSquare)
        );
    }

    #[test]
    fn rejects_unpromoted_men() {
        assert_eq!(
            PositionBuilder::new().piece(Red, Man, sq(58)).validate(),
            Err(Error::ManOnPromotionRow)
        );
        assert_eq!(
            PositionBuilder::new().piece(Black, Man, sq(1)).validate(),
            Err(Error::ManOnPromotionRow)
        );
        assert!(PositionBuilder::new().piece(Red, King, sq(58)).validate().is_ok());
        assert!(PositionBuilder::new().piece(Black, Man, sq(58)).validate().is_ok());
    }
}
