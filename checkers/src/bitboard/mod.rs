//! Provides a representation of the pieces on the board
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Bit Primitives
//! The functions [`set_bit`](fn.set_bit.html), [`clear_bit`](fn.clear_bit.html),
//! [`toggle_bit`](fn.toggle_bit.html), [`get_bit`](fn.get_bit.html) and
//! [`count_bits`](fn.count_bits.html) operate directly on a raw 64-bit word. They are pure: the
//! word is passed and returned by value. A bit index outside `0..64` is never shifted into the
//! word, so those functions leave the word unchanged (or report the bit as clear).
//!
//! ```rust
//! use checkers::bitboard::{set_bit, clear_bit, toggle_bit, get_bit, count_bits};
//!
//! let word = set_bit(0, 3);
//! assert_eq!(get_bit(word, 3), 1);
//! assert_eq!(get_bit(clear_bit(word, 3), 3), 0);
//! assert_eq!(toggle_bit(toggle_bit(word, 5), 5), word);
//! assert_eq!(count_bits(set_bit(word, 63)), 2);
//! assert_eq!(set_bit(word, 64), word);
//! ```
//!
//! # Bitboards
//! The [`Bitboard`](struct.Bitboard.html) type wraps the same word with methods typical of a set
//! of [`Square`](../struct.Square.html)s. Since a `Square` is always on the board, these methods
//! need no range checks.
//!
//! ```rust
//! use checkers::Square;
//! use checkers::bitboard::Bitboard;
//!
//! let mut men = Bitboard::new();
//! men.insert(Square::from_coord(2, 1).unwrap());
//! men.insert(Square::from_coord(0, 7).unwrap());
//! assert_eq!(men.len(), 2);
//! assert_eq!(men.pop(), Some(Square::from_coord(0, 7).unwrap()));
//! assert_eq!(men.pop(), Some(Square::from_coord(2, 1).unwrap()));
//! assert_eq!(men.pop(), None);
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::iter::{FromIterator, Extend};
use std::ops;
use std::fmt;
use super::*;

/// Returns `word` with bit `pos` set.
pub fn set_bit(word: u64, pos: u32) -> u64 {
    word | mask(pos)
}

/// Returns `word` with bit `pos` cleared.
pub fn clear_bit(word: u64, pos: u32) -> u64 {
    word & !mask(pos)
}

/// Returns `word` with bit `pos` flipped.
pub fn toggle_bit(word: u64, pos: u32) -> u64 {
    word ^ mask(pos)
}

/// Returns the value (0 or 1) of bit `pos` in `word`.
pub fn get_bit(word: u64, pos: u32) -> u64 {
    word.checked_shr(pos).unwrap_or(0) & 1
}

/// Returns the number of set bits in `word`.
pub fn count_bits(word: u64) -> u32 {
    word.count_ones()
}

/// Shifts the whole word toward the high bits by `n`. `word` is returned unchanged if `n` is 64
/// or more.
pub fn shift_left(word: u64, n: u32) -> u64 {
    word.checked_shl(n).unwrap_or(word)
}

/// Shifts the whole word toward the low bits by `n`. `word` is returned unchanged if `n` is 64
/// or more.
pub fn shift_right(word: u64, n: u32) -> u64 {
    word.checked_shr(n).unwrap_or(word)
}

// single-bit mask, empty when `pos` is out of range
fn mask(pos: u32) -> u64 {
    1u64.checked_shl(pos).unwrap_or(0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with each bit representing one square
///
/// A `Bitboard` is, essentially, a set of [`Square`](../struct.Square.html)s stored in a 64-bit
/// integer. Bit `row * 8 + col` corresponds to the square at `row` and `col`. The diagram below
/// shows the layout of the bits, with the dark (playable) squares in brackets.
///
/// ```text
///        0    1    2    3    4    5    6    7
///    -----------------------------------------
/// 7 | [56]  57  [58]  59  [60]  61  [62]  63  | 7
/// 6 |  48  [49]  50  [51]  52  [53]  54  [55] | 6
/// 5 | [40]  41  [42]  43  [44]  45  [46]  47  | 5
/// 4 |  32  [33]  34  [35]  36  [37]  38  [39] | 4
/// 3 | [24]  25  [26]  27  [28]  29  [30]  31  | 3
/// 2 |  16  [17]  18  [19]  20  [21]  22  [23] | 2
/// 1 | [08]  09  [10]  11  [12]  13  [14]  15  | 1
/// 0 |  00  [01]  02  [03]  04  [05]  06  [07] | 0
///    -----------------------------------------
///        0    1    2    3    4    5    6    7
/// ```
///
/// `Bitboard` implements all the bit-wise logic operators: `|`, `&`, `^`, `!`, `|=`, `&=`, and
/// `^=`. It also has methods that are typical for sets and collections, such as `insert`,
/// `remove`, `len`, and `contains`. It implements `IntoIterator`, yielding squares from lowest
/// to highest.
///
/// `{}` formats the bitboard as lower-case hex. `{:#}` draws it as an 8x8 grid of `0`s and `1`s
/// with row 7 at the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Every dark square on the board
    pub const DARK_SQUARES: Bitboard = Bitboard(0x55aa_55aa_55aa_55aa);

    /// Creates a new, empty bitboard
    pub fn new() -> Bitboard {
        Default::default()
    }

    /// Returns a bitboard containing every square of `row`, or an empty bitboard if `row` is
    /// greater than 7.
    pub fn row(row: usize) -> Bitboard {
        if row < Square::ROWS {
            Bitboard(0x0000_0000_0000_00ff << (8 * row))
        } else {
            Bitboard::new()
        }
    }

    /// Returns the raw 64-bit word
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of squares in the bitboard
    pub fn len(self) -> usize {
        count_bits(self.0) as usize
    }

    /// Returns `true` if the bitboard is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the bitboard contains `sq`
    pub fn contains(self, sq: Square) -> bool {
        get_bit(self.0, sq.index() as u32) == 1
    }

    /// Returns `true` if `self` intersects `other`
    pub fn intersects(self, other: Bitboard) -> bool {
        !(self & other).is_empty()
    }

    /// Returns `true` if `self` does not intersect `other`
    pub fn is_disjoint(self, other: Bitboard) -> bool {
        (self & other).is_empty()
    }

    /// Adds a square to the bitboard if it is not already present
    pub fn insert(&mut self, sq: Square) {
        self.0 = set_bit(self.0, sq.index() as u32);
    }

    /// Removes a square from the bitboard if it is present
    pub fn remove(&mut self, sq: Square) {
        self.0 = clear_bit(self.0, sq.index() as u32);
    }

    /// Toggles a square in the bitboard
    pub fn toggle(&mut self, sq: Square) {
        self.0 = toggle_bit(self.0, sq.index() as u32);
    }

    /// Removes the lowest square from the bitboard and returns it
    pub fn pop(&mut self) -> Option<Square> {
        let sq = self.peek()?;
        // clear the least significant bit
        self.0 &= self.0 - 1;

        Some(sq)
    }

    /// Returns the square that would be removed by a pop command
    pub fn peek(self) -> Option<Square> {
        if self.0 > 0 {
            Square::try_from(self.0.trailing_zeros() as usize).ok()
        } else {
            None
        }
    }
}

impl ops::Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl ops::BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl ops::BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for row in (0..Square::ROWS).rev() {
                for col in 0..Square::ROWS {
                    let pos = (row * Square::ROWS + col) as u32;
                    write!(f, "{} ", get_bit(self.0, pos))?;
                }
                writeln!(f)?;
            }
            Ok(())
        } else {
            fmt::LowerHex::fmt(&self.0, f)
        }
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Octal for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl From<u64> for Bitboard {
    fn from(val: u64) -> Bitboard {
        Bitboard(val)
    }
}

impl From<Bitboard> for u64 {
    fn from(bd: Bitboard) -> u64 {
        bd.0
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Bitboard {
        Bitboard(mask(sq.index() as u32))
    }
}

impl From<IntoIter> for Bitboard {
    fn from(iter: IntoIter) -> Bitboard {
        iter.0
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    /// If converting from `bitboard::IntoIter`, use `Bitboard::from()` instead as that is faster
    fn from_iter<I: IntoIterator<Item=Square>>(iter: I) -> Self {
        let mut bd = Bitboard::new();

        for sq in iter {
            bd.insert(sq);
        }

        bd
    }
}

impl Extend<Square> for Bitboard {
    fn extend<I: IntoIterator<Item=Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a `Bitboard`
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter { }

impl FusedIterator for IntoIter { }
