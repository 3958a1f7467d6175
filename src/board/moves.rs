/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::Square;

/// An alias for the list of moves produced by move generation.
pub type MoveList = Vec<Move>;

/// Represents a single turn's move in checkers.
///
/// A move travels from a source [`Square`] to a destination [`Square`].
/// If the move captures, every captured square is recorded in the order it was jumped,
/// so a multi-jump chain is collapsed into a single [`Move`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Vec<Square>,
}

impl Move {
    /// Creates a new, non-capturing [`Move`] from `from` to `to`.
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
        }
    }

    /// Creates a new [`Move`] that jumps from `from` to `to`, capturing every square in `captured`, in order.
    #[inline(always)]
    pub fn new_capture(from: Square, to: Square, captured: impl Into<Vec<Square>>) -> Self {
        Self {
            from,
            to,
            captured: captured.into(),
        }
    }

    /// Returns a new [`Move`] extending this one by jumping over `victim` and landing on `landing`.
    ///
    /// `self` is left untouched, so several branches of a capture chain may be extended from the same partial move.
    #[inline(always)]
    pub fn extended(&self, victim: Square, landing: Square) -> Self {
        let mut captured = Vec::with_capacity(self.captured.len() + 1);
        captured.extend_from_slice(&self.captured);
        captured.push(victim);

        Self {
            from: self.from,
            to: landing,
            captured,
        }
    }

    /// Fetches the source square of this move.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Fetches the destination square of this move.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// All squares captured by this move, in the order they were jumped.
    #[inline(always)]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    /// Returns `true` if this move captures at least one piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Returns `true` if this move is a plain step or slide that captures nothing.
    #[inline(always)]
    pub fn is_simple(&self) -> bool {
        self.captured.is_empty()
    }

    /// Returns `true` if `square` was jumped at any point during this move.
    #[inline(always)]
    pub fn has_captured(&self, square: Square) -> bool {
        self.captured.contains(&square)
    }
}

impl fmt::Display for Move {
    /// Displays as `(r,c)->(r,c)`, followed by the captured squares (if any), such as `(2,3)->(4,5) x(3,4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        for sq in &self.captured {
            write!(f, " x{sq}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_capture() {
            "Capture"
        } else {
            "Simple"
        };
        write!(f, "{self} ({kind})")
    }
}
