/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The board, its pieces, and the rules of moving them.
mod board;

/// Command-line and engine command parsing.
mod cli;

/// Code related to the engine's functionality, such as user input handling.
mod engine;

/// Errors raised when addressing squares or making moves.
mod error;

/// Evaluation of checkers positions.
mod eval;

/// Centipawn-like scores produced by evaluation and search.
mod score;

/// Main engine logic; all search related code.
mod search;

/// Tunable evaluation weights.
mod tune;

pub use board::*;
pub use cli::*;
pub use engine::*;
pub use error::*;
pub use eval::*;
pub use score::*;
pub use search::*;
