/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Not};

use super::{Direction, BOARD_SIZE};

/// Represents one of the two sides in a game of checkers.
///
/// The Computer starts on rows `0..3` and moves "down" the board (toward row 7).
/// The Player starts on rows `5..8` and moves "up" the board (toward row 0).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Side {
    #[default]
    Player,
    Computer,
}

impl Side {
    /// Number of side variants.
    pub const COUNT: usize = 2;

    /// An array of both sides, starting with the Player.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Player, Self::Computer]
    }

    /// Returns this side's opponent.
    ///
    /// # Example
    /// ```
    /// # use leap::Side;
    /// assert_eq!(Side::Player.opponent(), Side::Computer);
    /// assert_eq!(Side::Computer.opponent(), Side::Player);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    /// The diagonals a man of this side may move and capture along.
    #[inline(always)]
    pub const fn forward(&self) -> &'static [Direction; 2] {
        match self {
            Self::Player => &Direction::UP,
            Self::Computer => &Direction::DOWN,
        }
    }

    /// The row on which a man of this side is promoted.
    #[inline(always)]
    pub const fn promotion_row(&self) -> usize {
        match self {
            Self::Player => 0,
            Self::Computer => BOARD_SIZE - 1,
        }
    }

    /// Number of rows a man of this side on `row` has advanced from its own back row.
    #[inline(always)]
    pub const fn advancement(&self, row: usize) -> usize {
        match self {
            Self::Player => BOARD_SIZE - 1 - row,
            Self::Computer => row,
        }
    }

    /// Returns `1` for the Computer and `-1` for the Player.
    ///
    /// Evaluations are always from the Computer's perspective, so this is used to flip a side's contribution.
    #[inline(always)]
    pub const fn negation_multiplier(&self) -> i32 {
        match self {
            Self::Player => -1,
            Self::Computer => 1,
        }
    }

    /// Fetches a human-readable name for this side.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Computer => "Computer",
        }
    }
}

impl Not for Side {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a piece is still a man, or has been promoted to a king.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Rank {
    #[default]
    Man,
    King,
}

/// A checkers piece: a [`Side`] and its [`Rank`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    rank: Rank,
}

impl Piece {
    pub const PLAYER_MAN: Self = Self::new(Side::Player, Rank::Man);
    pub const PLAYER_KING: Self = Self::new(Side::Player, Rank::King);
    pub const COMPUTER_MAN: Self = Self::new(Side::Computer, Rank::Man);
    pub const COMPUTER_KING: Self = Self::new(Side::Computer, Rank::King);

    /// Creates a new [`Piece`] of the provided side and rank.
    #[inline(always)]
    pub const fn new(side: Side, rank: Rank) -> Self {
        Self { side, rank }
    }

    /// Creates a new king for `side`.
    #[inline(always)]
    pub const fn king(side: Side) -> Self {
        Self::new(side, Rank::King)
    }

    #[inline(always)]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns a copy of this piece that has been promoted to a king.
    ///
    /// Promotion is one-way; promoting a king yields the same king.
    #[inline(always)]
    pub const fn promoted(self) -> Self {
        Self::king(self.side)
    }

    /// The diagonals this piece may travel along.
    #[inline(always)]
    pub fn directions(&self) -> &'static [Direction] {
        match self.rank {
            Rank::King => &Direction::ALL,
            Rank::Man => self.side.forward(),
        }
    }

    /// Returns `true` if this piece is a man sitting on `row`, its side's promotion row.
    #[inline(always)]
    pub const fn promotes_on(&self, row: usize) -> bool {
        !self.is_king() && row == self.side.promotion_row()
    }

    /// Character used when displaying this piece.
    ///
    /// Computer pieces are `c`/`C` and Player pieces are `p`/`P`, with kings uppercased.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match (self.side, self.rank) {
            (Side::Player, Rank::Man) => 'p',
            (Side::Player, Rank::King) => 'P',
            (Side::Computer, Rank::Man) => 'c',
            (Side::Computer, Rank::King) => 'C',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.side, self.rank)
    }
}
