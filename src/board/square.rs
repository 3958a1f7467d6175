/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::BoardError;

/// Number of rows (and columns) on a checkers board.
pub const BOARD_SIZE: usize = 8;

/// Represents a single square on an 8x8 checkers board.
///
/// Row `0` is the Computer's home row, and row `7` is the Player's home row.
/// Columns are numbered left-to-right from `0` to `7`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a new [`Square`] from a `row` and `col`, returning an error if either is off the board.
    ///
    /// # Example
    /// ```
    /// # use leap::Square;
    /// let sq = Square::new(2, 3).unwrap();
    /// assert_eq!(sq.row(), 2);
    /// assert_eq!(sq.col(), 3);
    ///
    /// assert!(Square::new(8, 0).is_err());
    /// assert!(Square::new(0, -1).is_err());
    /// ```
    #[inline(always)]
    pub fn new(row: i32, col: i32) -> Result<Self, BoardError> {
        Self::checked(row, col).ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Creates a new [`Square`] if `row` and `col` are both on the board, returning `None` otherwise.
    #[inline(always)]
    pub const fn checked(row: i32, col: i32) -> Option<Self> {
        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a new [`Square`] without checking its bounds.
    ///
    /// # Panics
    /// If `row` or `col` is `>= 8` and debug assertions are enabled.
    #[inline(always)]
    pub const fn new_unchecked(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// The row of this square, in `[0, 7]`.
    #[inline(always)]
    pub const fn row(&self) -> usize {
        self.row as usize
    }

    /// The column of this square, in `[0, 7]`.
    #[inline(always)]
    pub const fn col(&self) -> usize {
        self.col as usize
    }

    /// Returns `true` if this is a dark (playable) square, where `row + col` is odd.
    #[inline(always)]
    pub const fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square reached by stepping once along `dir`, if it is still on the board.
    #[inline(always)]
    pub const fn offset(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Self::checked(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// An iterator over all squares that are walked along `dir`, starting next to (and excluding) this square.
    #[inline(always)]
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Self> {
        std::iter::successors(self.offset(dir), move |sq| sq.offset(dir))
    }

    /// An iterator over all 64 squares, in row-major order.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self::new_unchecked(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// One of the four diagonal directions a piece can travel along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0, toward column 0.
    UpLeft,
    /// Toward row 0, toward column 7.
    UpRight,
    /// Toward row 7, toward column 0.
    DownLeft,
    /// Toward row 7, toward column 7.
    DownRight,
}

impl Direction {
    /// All four diagonals, in the order moves are generated.
    pub const ALL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownLeft, Self::DownRight];

    /// The two diagonals heading toward row 0.
    pub const UP: [Self; 2] = [Self::UpLeft, Self::UpRight];

    /// The two diagonals heading toward row 7.
    pub const DOWN: [Self; 2] = [Self::DownLeft, Self::DownRight];

    /// The `(row, col)` change of a single step in this direction.
    #[inline(always)]
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::UpRight => (-1, 1),
            Self::DownLeft => (1, -1),
            Self::DownRight => (1, 1),
        }
    }
}
