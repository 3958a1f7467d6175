/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{Evaluator, MoveError};

use super::{Move, Piece, Side, Square, BOARD_SIZE};

/// Number of rows each side fills at the start of a game.
const STARTING_ROWS: usize = 3;

/// An 8x8 checkers board: the authoritative position of a game.
///
/// The board is a plain [`Copy`] value, so searches explore private copies instead of mutating and undoing a shared board.
/// Pieces only ever sit on dark squares (where `row + col` is odd).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no pieces on it.
    ///
    /// Useful for setting up custom positions with [`Board::place`].
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board in the standard starting position.
    ///
    /// # Example
    /// ```
    /// # use leap::{Board, Side};
    /// let board = Board::new();
    /// assert_eq!(board.count_pieces(Side::Computer), 12);
    /// assert_eq!(board.count_pieces(Side::Player), 12);
    /// ```
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// Clears the board and sets up the starting formation.
    ///
    /// Computer men fill the dark squares of rows `0..3`, Player men fill the dark squares of rows `5..8`.
    pub fn initialize(&mut self) {
        *self = Self::empty();

        for square in Square::iter().filter(Square::is_dark) {
            if square.row() < STARTING_ROWS {
                self[square] = Some(Piece::COMPUTER_MAN);
            } else if square.row() >= BOARD_SIZE - STARTING_ROWS {
                self[square] = Some(Piece::PLAYER_MAN);
            }
        }
    }

    /// Fetches the piece on `square`, if there is one.
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    /// Returns `true` if `square` holds no piece.
    #[inline(always)]
    pub const fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Places `piece` on `square`, returning whatever was there before.
    #[inline(always)]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self[square].replace(piece)
    }

    /// Removes and returns the piece on `square`, if any.
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self[square].take()
    }

    /// An iterator over every occupied square and its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// An iterator over every square occupied by `side`, and its piece, in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side() == side)
    }

    /// Counts the pieces (men and kings) that `side` has on the board.
    pub fn count_pieces(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    /// Returns `true` if the game on this board is over.
    ///
    /// That is the case when either side has no pieces left, or has no legal move to make.
    pub fn is_terminal(&self) -> bool {
        Side::all()
            .into_iter()
            .any(|side| self.count_pieces(side) == 0 || !self.has_valid_moves(side))
    }

    /// Scores this position from the Computer's perspective.
    ///
    /// Shorthand for [`Evaluator::eval`]; positive numbers favour the Computer.
    #[inline(always)]
    pub fn evaluate(&self) -> i32 {
        Evaluator::new(self).eval().0
    }

    /// Applies `mv` to the board without checking its legality.
    ///
    /// The moving piece is lifted off its source, every captured square is cleared,
    /// and the piece is dropped on the destination. Afterwards, every man on its
    /// promotion row is crowned, not only the piece that moved.
    ///
    /// If the source square is empty, the board is left untouched.
    pub fn make_move(&mut self, mv: &Move) {
        let Some(piece) = self.take(mv.from()) else {
            return;
        };

        for &square in mv.captured() {
            self[square] = None;
        }

        self[mv.to()] = Some(piece);
        self.promote_all();
    }

    /// Copies `self` and returns a [`Board`] after having applied the provided [`Move`].
    #[inline(always)]
    pub fn with_move_made(&self, mv: &Move) -> Self {
        let mut copied = *self;
        copied.make_move(mv);
        copied
    }

    /// Applies `mv` to the board, if it is legal for the side owning the piece on its source square.
    ///
    /// # Example
    /// ```
    /// # use leap::{Board, Move, Square};
    /// let mut board = Board::new();
    /// let step = Move::new(Square::new(2, 1).unwrap(), Square::new(3, 0).unwrap());
    /// assert!(board.apply_move(&step).is_ok());
    ///
    /// // Men cannot move backwards
    /// let back = Move::new(Square::new(3, 0).unwrap(), Square::new(2, 1).unwrap());
    /// assert!(board.apply_move(&back).is_err());
    /// ```
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        let piece = self
            .piece_at(mv.from())
            .ok_or(MoveError::NoPiece { square: mv.from() })?;

        if !self.legal_moves(piece.side()).contains(mv) {
            return Err(MoveError::Illegal {
                mv: mv.clone(),
                side: piece.side(),
            });
        }

        self.make_move(mv);
        Ok(())
    }

    /// Snapshots the pieces that `mv` will remove from the board, in the same order as [`Move::captured`].
    ///
    /// This must be called *before* the move is made, and its result handed to [`Board::undo_move`].
    pub fn captured_pieces(&self, mv: &Move) -> Vec<Piece> {
        mv.captured()
            .iter()
            .filter_map(|&square| self.piece_at(square))
            .collect()
    }

    /// Reverts `mv`, which must have been the last move made on this board.
    ///
    /// `mover` is the piece as it stood on the source square before the move (so a man crowned by the move is
    /// restored as a man), and `captured` holds the pieces returned by [`Board::captured_pieces`] before the move was made.
    ///
    /// Pieces crowned by the promotion sweep other than the mover are not demoted again.
    pub fn undo_move(&mut self, mv: &Move, mover: Piece, captured: &[Piece]) {
        self[mv.to()] = None;

        for (&square, &piece) in mv.captured().iter().zip(captured) {
            self[square] = Some(piece);
        }

        self[mv.from()] = Some(mover);
    }

    /// Crowns every man standing on its side's promotion row.
    fn promote_all(&mut self) {
        for row in [0, BOARD_SIZE - 1] {
            for cell in self.cells[row].iter_mut() {
                if let Some(piece) = cell.filter(|piece| piece.promotes_on(row)) {
                    *cell = Some(piece.promoted());
                }
            }
        }
    }
}

impl Default for Board {
    /// A default [`Board`] is the standard starting position.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.cells[index.row()][index.col()]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.cells[index.row()][index.col()]
    }
}

impl fmt::Display for Board {
    /// Prints the board as a grid, with row numbers on the left and column numbers along the top.
    ///
    /// Empty dark squares are printed as `.` and light squares are left blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{row} |")?;
            for col in 0..BOARD_SIZE {
                let square = Square::new_unchecked(row, col);
                let c = match self.piece_at(square) {
                    Some(piece) => piece.char(),
                    None if square.is_dark() => '.',
                    None => ' ',
                };
                write!(f, "{c}|")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new_unchecked(row, col)
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.count_pieces(Side::Computer), 12);
        assert_eq!(board.count_pieces(Side::Player), 12);

        for (square, piece) in board.pieces() {
            assert!(square.is_dark(), "{piece:?} placed on light square {square}");
            match piece.side() {
                Side::Computer => assert!(square.row() < 3),
                Side::Player => assert!(square.row() > 4),
            }
            assert!(!piece.is_king());
        }
    }

    #[test]
    fn test_initialize_resets() {
        let mut board = Board::empty();
        board.place(sq(4, 3), Piece::PLAYER_KING);
        board.initialize();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_make_move_clears_captures() {
        let mut board = Board::empty();
        board.place(sq(2, 3), Piece::COMPUTER_MAN);
        board.place(sq(3, 4), Piece::PLAYER_MAN);

        board.make_move(&Move::new_capture(sq(2, 3), sq(4, 5), [sq(3, 4)]));
        assert_eq!(board.piece_at(sq(4, 5)), Some(Piece::COMPUTER_MAN));
        assert!(board.is_empty_at(sq(2, 3)));
        assert!(board.is_empty_at(sq(3, 4)));
    }

    #[test]
    fn test_make_move_from_empty_square_is_noop() {
        let mut board = Board::new();
        let before = board;
        board.make_move(&Move::new(sq(4, 1), sq(3, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_promotion_of_mover() {
        let mut board = Board::empty();
        board.place(sq(6, 1), Piece::COMPUTER_MAN);
        board.make_move(&Move::new(sq(6, 1), sq(7, 0)));
        assert_eq!(board.piece_at(sq(7, 0)), Some(Piece::COMPUTER_KING));
    }

    #[test]
    fn test_promotion_sweep_covers_whole_board() {
        // A Player man left stranded on row 0 is crowned by a Computer move elsewhere on the board.
        let mut board = Board::empty();
        board.place(sq(0, 1), Piece::PLAYER_MAN);
        board.place(sq(7, 6), Piece::COMPUTER_MAN);
        board.place(sq(2, 3), Piece::COMPUTER_MAN);

        board.make_move(&Move::new(sq(2, 3), sq(3, 4)));
        assert_eq!(board.piece_at(sq(0, 1)), Some(Piece::PLAYER_KING));
        assert_eq!(board.piece_at(sq(7, 6)), Some(Piece::COMPUTER_KING));
        assert_eq!(board.piece_at(sq(3, 4)), Some(Piece::COMPUTER_MAN));
    }

    #[test]
    fn test_undo_restores_mover_rank() {
        let mut board = Board::empty();
        board.place(sq(5, 2), Piece::COMPUTER_MAN);
        board.place(sq(6, 3), Piece::PLAYER_MAN);
        let before = board;

        let mv = Move::new_capture(sq(5, 2), sq(7, 4), [sq(6, 3)]);
        let mover = board.piece_at(mv.from()).unwrap();
        let captured = board.captured_pieces(&mv);

        board.make_move(&mv);
        assert_eq!(board.piece_at(sq(7, 4)), Some(Piece::COMPUTER_KING));

        board.undo_move(&mv, mover, &captured);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_missing_piece() {
        let mut board = Board::new();
        let mv = Move::new(sq(3, 0), sq(4, 1));
        assert_eq!(
            board.apply_move(&mv),
            Err(MoveError::NoPiece { square: sq(3, 0) })
        );
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let shown = board.to_string();
        let lines = shown.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "0 | |c| |c| |c| |c|");
        assert_eq!(lines[4], "3 |.| |.| |.| |.| |");
        assert_eq!(lines[8], "7 |p| |p| |p| |p| |");
    }
}
