/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::{Move, Side, Square};

/// Errors raised when addressing the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate pair does not lie on the 8x8 board.
    #[error("square ({row},{col}) is off the board (rows and columns must be 0-7)")]
    OutOfBounds { row: i32, col: i32 },
}

/// Errors raised when applying a move to a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square of the move holds no piece.
    #[error("no piece at source square {square}")]
    NoPiece { square: Square },

    /// The move is not among the legal moves of the side that owns the source piece.
    #[error("{mv} is not a legal move for {side}")]
    Illegal { mv: Move, side: Side },

    /// It is not the turn of the side that owns the source piece.
    #[error("it is {expected}'s turn, but {mv} moves a {found} piece")]
    WrongSide {
        mv: Move,
        expected: Side,
        found: Side,
    },
}
