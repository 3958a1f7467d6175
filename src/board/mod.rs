/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// A game of checkers: a board and the side to move.
mod game;

/// Legal move generation, including forced, maximal capture chains.
mod movegen;

/// The [`Move`] type.
mod moves;

/// Performance testing of move generation.
mod perft;

/// Sides and pieces.
mod piece;

/// The 8x8 board itself.
mod position;

/// Squares on the board, and the directions between them.
mod square;

pub use game::*;
pub use moves::*;
pub use perft::*;
pub use piece::*;
pub use position::*;
pub use square::*;
