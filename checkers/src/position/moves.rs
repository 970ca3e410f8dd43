//! Contains the rules for validating and making moves
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! Moves are described by the difference between the destination and origin in the linear square
//! numbering. A diagonal step is `±7` or `±9` and a jump over one square is `±14` or `±18`. Moves
//! that would wrap from one edge of the board to the other always land on a light square, so the
//! dark square check on the destination is enough to rule them out.
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use log::{debug, trace};
use super::*;

/// Offsets of the four diagonal jumps
pub const JUMP_OFFSETS: [i32; 4] = [14, 18, -14, -18];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of move
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveKind {
    /// A single diagonal step
    Simple,
    /// A two-square diagonal jump over the square in between
    Jump,
}

impl MoveKind {
    /// Returns the kind of move that covers `diff` squares, or `None` if no diagonal move does.
    pub fn from_offset(diff: i32) -> Option<MoveKind> {
        match diff.abs() {
            7 | 9 => Some(MoveKind::Simple),
            14 | 18 => Some(MoveKind::Jump),
            _ => None,
        }
    }
}

impl Default for MoveKind {
    fn default() -> Self {
        MoveKind::Simple
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A description of a move that has been made.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    color: Color,
    piece: Piece,
    orig: Square,
    dest: Square,
    kind: MoveKind,
    capture: Option<(Square, Piece)>,
    promoted: bool,
}

impl MoveRecord {
    /// Returns the color of the piece that moved.
    pub fn color(&self) -> Color {
        self.color
    }
    /// Returns the type of the piece that moved, before any promotion.
    pub fn piece(&self) -> Piece {
        self.piece
    }
    /// Returns the origin of the moved piece.
    pub fn origin(&self) -> Square {
        self.orig
    }
    /// Returns the destination of the moved piece.
    pub fn destination(&self) -> Square {
        self.dest
    }
    /// Returns the type of move.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }
    /// Returns `true` if the move was a jump.
    ///
    /// A jump as the first move of a turn doesn't need to capture anything, so this can be `true`
    /// when `captured` is `None`.
    pub fn is_jump(&self) -> bool {
        self.kind == MoveKind::Jump
    }
    /// Returns the square and type of the captured piece, if any.
    pub fn captured(&self) -> Option<(Square, Piece)> {
        self.capture
    }
    /// Returns `true` if the moved man was promoted to a king.
    pub fn promoted(&self) -> bool {
        self.promoted
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.orig, sep, self.dest)?;
        if self.promoted {
            write!(f, "=K")?;
        }
        Ok(())
    }
}

impl Position {
    /// Validates the first move of a turn, returning its kind.
    ///
    /// `from` must hold a piece of the side to move and `to` must be an empty dark square one
    /// step or one jump away. Men may only move toward the opponent's side of the board; kings may
    /// move in all four directions.
    ///
    /// A jump is accepted on geometry alone. Whether there is anything to capture is only checked
    /// for continuation jumps, by [`check_capture`](#method.check_capture).
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove` if any of the above is violated.
    pub fn check_move(&self, from: Square, to: Square) -> Result<MoveKind> {
        if !to.is_dark() || self.is_occupied(to) {
            return Err(Error::IllegalMove);
        }

        let piece = match self.piece_at(from) {
            Some((color, piece)) if color == self.turn => piece,
            _ => return Err(Error::IllegalMove),
        };

        let diff = i32::from(to) - i32::from(from);
        let kind = MoveKind::from_offset(diff).ok_or(Error::IllegalMove)?;

        if piece == Man && diff.signum() != self.turn.forward() {
            return Err(Error::IllegalMove);
        }

        Ok(kind)
    }

    /// Returns `true` if [`check_move`](#method.check_move) accepts the move.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Validates a jump that continues a capture, returning the square of the piece it captures.
    ///
    /// In addition to the rules of [`check_move`](#method.check_move), the move must be a jump
    /// and the square jumped over must hold an opponent's piece.
    ///
    /// # Errors
    ///
    /// Returns `IllegalCapture` if the move is not a legal capture.
    pub fn check_capture(&self, from: Square, to: Square) -> Result<Square> {
        match self.check_move(from, to) {
            Ok(MoveKind::Jump) => { },
            _ => return Err(Error::IllegalCapture),
        }

        let over = jumped_square(from, to).ok_or(Error::IllegalCapture)?;
        if self.opponent_piece_at(over, self.turn) {
            Ok(over)
        } else {
            Err(Error::IllegalCapture)
        }
    }

    /// Returns `true` if [`check_capture`](#method.check_capture) accepts the move.
    pub fn is_legal_capture(&self, from: Square, to: Square) -> bool {
        self.check_capture(from, to).is_ok()
    }

    /// Makes a move that has already been validated, and returns a record of it.
    ///
    /// The moving piece is relocated. If the move is a jump, the opponent's piece on the square
    /// in between (if any) is removed. Then any man on its promotion row is made a king. The turn
    /// is *not* changed.
    ///
    /// Other than requiring a piece of the side to move on `from`, this does not check legality.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove`, leaving the position unchanged, if the side to move has no piece on
    /// `from`.
    pub fn execute_move(&mut self, from: Square, to: Square) -> Result<MoveRecord> {
        let mover = self.turn;
        let piece = Piece::ALL.iter()
            .copied()
            .find(|&p| self.occupied_by_piece(mover, p).contains(from))
            .ok_or(Error::IllegalMove)?;

        let diff = i32::from(to) - i32::from(from);
        let kind = MoveKind::from_offset(diff).unwrap_or_default();

        let moved = &mut self.pieces[mover as usize][piece as usize];
        moved.remove(from);
        moved.insert(to);

        let mut capture = None;
        if kind == MoveKind::Jump {
            if let Some(over) = jumped_square(from, to) {
                for &p in &Piece::ALL {
                    let opp = &mut self.pieces[(!mover) as usize][p as usize];
                    if opp.contains(over) {
                        opp.remove(over);
                        capture = Some((over, p));
                        break;
                    }
                }
            }
        }

        let promoted = self.promote().contains(to);

        debug_assert!(self.is_consistent(), "bitboards overlap after {:?}->{:?}", from, to);

        let record = MoveRecord {
            color: mover,
            piece,
            orig: from,
            dest: to,
            kind,
            capture,
            promoted,
        };
        debug!("{} {}: {}", mover, piece, record);
        if let Some((sq, p)) = capture {
            trace!("captured {} {} at {}", !mover, p, sq);
        }

        Ok(record)
    }

    /// Returns the squares the piece on `sq` could land on by capturing an opponent's piece.
    ///
    /// The side to move determines which pieces are opponents and, unless the piece is a king,
    /// which direction it may jump.
    pub fn jump_destinations(&self, sq: Square) -> Bitboard {
        let king = self.king_at(sq);
        let mut dests = Bitboard::new();

        for &diff in &JUMP_OFFSETS {
            if !king && diff.signum() != self.turn.forward() {
                continue;
            }

            let (to, over) = match (sq.offset(diff), sq.offset(diff / 2)) {
                (Some(to), Some(over)) => (to, over),
                _ => continue,
            };

            if !to.is_dark() || self.is_occupied(to) {
                continue;
            }

            if self.opponent_piece_at(over, self.turn) {
                dests.insert(to);
            }
        }

        dests
    }

    /// Returns `true` if the piece on `sq` has at least one capture available.
    ///
    /// After a capture, the same piece must keep capturing for as long as this holds.
    pub fn can_continue_capturing(&self, sq: Square) -> bool {
        !self.jump_destinations(sq).is_empty()
    }
}

/// Returns the square midway between `from` and `to`.
pub fn jumped_square(from: Square, to: Square) -> Option<Square> {
    Square::try_from((i32::from(from) + i32::from(to)) / 2).ok()
}
