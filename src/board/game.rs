/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::MoveError;

use super::{Board, Move, MoveList, Side};

/// The state of a game, from the perspective of whoever is to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    InProgress,

    /// The game is over, and the provided side has won.
    Won(Side),
}

/// A game of checkers: a [`Board`] plus whose turn it is.
///
/// The Player moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Game {
    board: Board,
    side_to_move: Side,
}

impl Game {
    /// Creates a new [`Game`] in the starting position, with the Player to move.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Game`] from an existing board and side to move.
    #[inline(always)]
    pub const fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for setting up custom positions.
    #[inline(always)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline(always)]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Hands the turn to the other side without moving.
    #[inline(always)]
    pub fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// All legal moves for the side to move.
    #[inline(always)]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.side_to_move)
    }

    /// Plays `mv` for the side to move and passes the turn.
    ///
    /// Fails without touching the game if `mv` moves the opponent's piece or isn't legal.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        let piece = self
            .board
            .piece_at(mv.from())
            .ok_or(MoveError::NoPiece { square: mv.from() })?;

        if piece.side() != self.side_to_move {
            return Err(MoveError::WrongSide {
                mv: mv.clone(),
                expected: self.side_to_move,
                found: piece.side(),
            });
        }

        self.board.apply_move(mv)?;
        self.toggle_side_to_move();
        Ok(())
    }

    /// Determines whether the game is over.
    ///
    /// A side loses once it has no pieces left, or none of its pieces can move, whoever's turn it is.
    /// If both sides are stuck, the side to move is the one that loses.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;

        for loser in [side, side.opponent()] {
            if self.board.count_pieces(loser) == 0 || !self.board.has_valid_moves(loser) {
                return GameStatus::Won(loser.opponent());
            }
        }

        GameStatus::InProgress
    }

    /// Returns `true` if the game has concluded.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, Square};

    fn sq(row: usize, col: usize) -> Square {
        Square::new_unchecked(row, col)
    }

    #[test]
    fn test_play_toggles_turn() {
        let mut game = Game::new();
        assert_eq!(game.side_to_move(), Side::Player);

        let mv = game.legal_moves()[0].clone();
        game.play(&mv).unwrap();
        assert_eq!(game.side_to_move(), Side::Computer);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_play_rejects_opponent_piece() {
        let mut game = Game::new();
        let mv = Move::new(sq(2, 1), sq(3, 0));
        assert!(matches!(
            game.play(&mv),
            Err(MoveError::WrongSide {
                expected: Side::Player,
                found: Side::Computer,
                ..
            })
        ));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut game = Game::new();
        let mv = Move::new(sq(5, 0), sq(3, 2));
        assert!(matches!(game.play(&mv), Err(MoveError::Illegal { .. })));
        assert_eq!(game.side_to_move(), Side::Player);
    }

    #[test]
    fn test_side_without_pieces_loses() {
        let mut board = Board::empty();
        board.place(sq(5, 2), Piece::PLAYER_MAN);
        let game = Game::from_board(board, Side::Computer);
        assert_eq!(game.status(), GameStatus::Won(Side::Player));
        assert!(game.is_over());
    }

    #[test]
    fn test_moving_into_a_block_loses() {
        let mut board = Board::empty();
        board.place(sq(0, 1), Piece::COMPUTER_MAN);
        board.place(sq(1, 2), Piece::COMPUTER_MAN);
        board.place(sq(0, 3), Piece::COMPUTER_MAN);
        board.place(sq(2, 1), Piece::PLAYER_MAN);

        let mut game = Game::from_board(board, Side::Player);
        assert_eq!(game.status(), GameStatus::InProgress);

        // The Player's only move walks its man into the corner
        game.play(&Move::new(sq(2, 1), sq(1, 0))).unwrap();
        assert_eq!(game.side_to_move(), Side::Computer);
        assert_eq!(game.legal_moves().len(), 3);
        assert!(game.board().is_terminal());
        assert_eq!(game.status(), GameStatus::Won(Side::Computer));
    }

    #[test]
    fn test_blocked_side_loses() {
        let mut board = Board::empty();
        board.place(sq(6, 1), Piece::COMPUTER_MAN);
        board.place(sq(7, 0), Piece::PLAYER_MAN);
        board.place(sq(7, 2), Piece::PLAYER_MAN);

        let game = Game::from_board(board, Side::Computer);
        assert_eq!(game.status(), GameStatus::Won(Side::Player));
    }
}
