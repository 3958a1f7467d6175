/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Evaluation weights are heuristic. Bonuses and penalties must stay well below the
// value of a man, so that gaining a man always outweighs the positional terms it shifts.

/// Material value of a man.
macro_rules! man_value {
    () => {
        100
    };
}
pub(crate) use man_value;

/// Material value of a king.
macro_rules! king_value {
    () => {
        300
    };
}
pub(crate) use king_value;

/// Bonus for any piece standing in the central 4x4 block of the board.
macro_rules! center_bonus {
    () => {
        5
    };
}
pub(crate) use center_bonus;

/// Bonus for every row a man has advanced from its own back row.
macro_rules! advancement_bonus {
    () => {
        2
    };
}
pub(crate) use advancement_bonus;

/// Penalty for a piece with no friendly piece on any diagonally adjacent square.
macro_rules! isolation_penalty {
    () => {
        8
    };
}
pub(crate) use isolation_penalty;

/// Bonus for a side that has a capture available.
macro_rules! capture_bonus {
    () => {
        10
    };
}
pub(crate) use capture_bonus;
