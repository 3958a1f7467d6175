/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::tune;

/// A numerical representation of the evaluation of a position, in hundredths of a man.
///
/// Scores are always from the Computer's perspective: positive is good for the Computer, negative is good for the Player.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Lowest representable score. Used as the initial alpha bound of a search.
    pub const MIN: Self = Self(i32::MIN);

    /// Highest representable score. Used as the initial beta bound of a search.
    pub const MAX: Self = Self(i32::MAX);

    /// Score of a position where the Computer must move, but cannot.
    ///
    /// Sits one above [`Score::MIN`] so that it still compares above the initial alpha bound.
    pub const LOSS: Self = Self(i32::MIN + 1);

    /// Score of a position where the Player must move, but cannot.
    ///
    /// Sits one below [`Score::MAX`] so that it still compares below the initial beta bound.
    pub const WIN: Self = Self(i32::MAX - 1);

    /// Score of a perfectly balanced position.
    pub const EVEN: Self = Self(0);

    /// Returns `true` if this score is a decided game, rather than a heuristic evaluation.
    #[inline(always)]
    pub const fn is_decisive(&self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= Self::LOSS.0
    }

    /// "Normalizes" a score so that it can be printed as a float, in units of men.
    #[inline(always)]
    pub fn normalize(&self) -> f32 {
        self.0 as f32 / tune::man_value!() as f32
    }
}

macro_rules! impl_binary_op {
    ($trait:tt, $fn:ident) => {
        impl std::ops::$trait for Score {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self(self.0.$fn(rhs.0))
            }
        }

        impl std::ops::$trait<i32> for Score {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: i32) -> Self::Output {
                Self(self.0.$fn(rhs))
            }
        }
    };
}

macro_rules! impl_binary_op_assign {
    ($trait:tt, $fn:ident) => {
        impl std::ops::$trait for Score {
            #[inline(always)]
            fn $fn(&mut self, rhs: Self) {
                self.0.$fn(rhs.0);
            }
        }

        impl std::ops::$trait<i32> for Score {
            #[inline(always)]
            fn $fn(&mut self, rhs: i32) {
                self.0.$fn(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl_binary_op_assign!(AddAssign, add_assign);
impl_binary_op_assign!(SubAssign, sub_assign);

impl PartialEq<i32> for Score {
    fn eq(&self, other: &i32) -> bool {
        self.0.eq(other)
    }
}

impl PartialOrd<i32> for Score {
    fn partial_cmp(&self, other: &i32) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for Score {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Score {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WIN => write!(f, "{} (Computer wins)", self.0),
            Self::LOSS => write!(f, "{} (Player wins)", self.0),
            _ => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_sit_inside_bounds() {
        assert!(Score::LOSS > Score::MIN);
        assert!(Score::WIN < Score::MAX);
        assert!(Score::LOSS.is_decisive());
        assert!(Score::WIN.is_decisive());
        assert!(!Score(1200).is_decisive());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Score(tune::man_value!() * 3).normalize(), 3.0);
    }
}
