/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{tune, Board, Direction, Piece, Rank, Score, Side, Square, BOARD_SIZE};

/// Encapsulates the logic of scoring a checkers position.
///
/// A high score is good for the Computer, and a low score is good for the Player.
/// The score is built from material, plus a few positional terms:
/// centralization, advancement of men toward promotion, isolated pieces, and pending captures.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    /// The board whose position to evaluate.
    board: &'a Board,
}

impl<'a> Evaluator<'a> {
    /// Construct a new [`Evaluator`] for `board`.
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Evaluate this position from the Computer's perspective.
    ///
    /// # Example
    /// ```
    /// # use leap::{Board, Evaluator, Score};
    /// // The starting position is symmetric
    /// assert_eq!(Evaluator::new(&Board::new()).eval(), Score::EVEN);
    /// ```
    pub fn eval(&self) -> Score {
        let pieces = self
            .board
            .pieces()
            .fold(Score::EVEN, |score, (square, piece)| {
                score + self.piece_value(square, piece)
            });

        pieces + self.capture_value(Side::Computer) + self.capture_value(Side::Player)
    }

    /// The contribution of `piece` standing on `square`, signed from the Computer's perspective.
    fn piece_value(&self, square: Square, piece: Piece) -> Score {
        let mut value = Score(value_of(piece.rank()));

        if is_central(square) {
            value += tune::center_bonus!();
        }

        if !piece.is_king() {
            value += piece.side().advancement(square.row()) as i32 * tune::advancement_bonus!();
        }

        if self.is_isolated(square, piece.side()) {
            value -= tune::isolation_penalty!();
        }

        value * piece.side().negation_multiplier()
    }

    /// The bonus `side` receives for having a capture available, signed from the Computer's perspective.
    fn capture_value(&self, side: Side) -> Score {
        if self.board.can_capture(side) {
            Score(tune::capture_bonus!() * side.negation_multiplier())
        } else {
            Score::EVEN
        }
    }

    /// Returns `true` if no piece of `side` is diagonally adjacent to `square`.
    fn is_isolated(&self, square: Square, side: Side) -> bool {
        !Direction::ALL.into_iter().any(|dir| {
            square
                .offset(dir)
                .and_then(|neighbor| self.board.piece_at(neighbor))
                .is_some_and(|piece| piece.side() == side)
        })
    }

    /// Fetches the value for the piece on the specified square, if one exists.
    ///
    /// Only used when printing the evaluator
    #[inline(always)]
    fn value_at(&self, square: Square) -> Option<Score> {
        self.board
            .piece_at(square)
            .map(|piece| self.piece_value(square, piece))
    }
}

impl fmt::Display for Evaluator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  +")?;
        for _ in 0..BOARD_SIZE {
            write!(f, "-----+")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{row} |")?;

            // Step 1: Write the piece char
            for col in 0..BOARD_SIZE {
                let square = Square::new_unchecked(row, col);
                let piece_char = self.board.piece_at(square).map(|p| p.char()).unwrap_or(' ');
                write!(f, "  {piece_char}  |")?;
            }
            writeln!(f)?;
            write!(f, "  |")?;

            // Step 2: Write the contribution of that piece
            for col in 0..BOARD_SIZE {
                let square = Square::new_unchecked(row, col);
                let score = if let Some(val) = self.value_at(square) {
                    let s = if val > Score::EVEN {
                        format!("+{}", val.normalize())
                    } else {
                        format!("{}", val.normalize())
                    };

                    format!("{s:^5}")
                } else {
                    String::from("     ")
                };
                write!(f, "{score}|")?;
            }
            writeln!(f)?;

            write!(f, "  +")?;
            for _ in 0..BOARD_SIZE {
                write!(f, "-----+")?;
            }
            writeln!(f)?;
        }
        for col in 0..BOARD_SIZE {
            write!(f, "     {col}")?;
        }

        let captures = self.capture_value(Side::Computer) + self.capture_value(Side::Player);
        let score = self.eval();

        let winning_side = if score > Score::EVEN {
            Some(Side::Computer)
        } else if score < Score::EVEN {
            Some(Side::Player)
        } else {
            None
        };

        writeln!(f, "\n\nCaptures: {captures}")?;
        writeln!(
            f,
            "Winning side: {}",
            winning_side.map(|s| s.name()).unwrap_or("N/A")
        )?;
        writeln!(f, "Score: {score}")?;

        Ok(())
    }
}

/// Returns the material value of a man or king.
#[inline(always)]
pub const fn value_of(rank: Rank) -> i32 {
    match rank {
        Rank::Man => tune::man_value!(),
        Rank::King => tune::king_value!(),
    }
}

/// Returns `true` if `square` is in the central 4x4 block of the board.
#[inline(always)]
const fn is_central(square: Square) -> bool {
    const LOW: usize = 2;
    const HIGH: usize = BOARD_SIZE - 3;
    square.row() >= LOW && square.row() <= HIGH && square.col() >= LOW && square.col() <= HIGH
}
