/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Direction, Move, MoveList, Piece, Side, Square, BOARD_SIZE};

impl Board {
    /// Generates every legal move for `side`.
    ///
    /// Capturing is mandatory: if any of `side`'s pieces can capture, only capture chains are returned.
    /// Every capture chain is maximal, meaning it ends on a square from which no further capture is possible.
    ///
    /// Moves are generated in a deterministic order for a given board, but that order carries no meaning.
    ///
    /// # Example
    /// ```
    /// # use leap::{Board, Side};
    /// let board = Board::new();
    /// assert_eq!(board.legal_moves(Side::Computer).len(), 7);
    /// ```
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut captures = MoveList::new();
        let mut simple = MoveList::new();

        for (square, piece) in self.pieces_of(side) {
            captures.extend(self.captures_from(square, piece));

            // Once a capture is known, simple moves can never be legal.
            if captures.is_empty() {
                self.simple_moves_from(square, piece, &mut simple);
            }
        }

        if captures.is_empty() {
            simple
        } else {
            captures
        }
    }

    /// Generates the legal moves of the piece on `square` alone, ignoring whether other pieces must capture.
    ///
    /// Returns an empty list if `square` is empty.
    pub fn moves_from(&self, square: Square) -> MoveList {
        let Some(piece) = self.piece_at(square) else {
            return MoveList::new();
        };

        let captures = self.captures_from(square, piece);
        if !captures.is_empty() {
            return captures;
        }

        let mut simple = MoveList::new();
        self.simple_moves_from(square, piece, &mut simple);
        simple
    }

    /// Returns `true` if `side` has at least one legal move.
    pub fn has_valid_moves(&self, side: Side) -> bool {
        self.pieces_of(side).any(|(square, piece)| {
            piece.directions().iter().any(|&dir| {
                square.offset(dir).is_some_and(|to| self.is_empty_at(to))
                    || self.capture_along(square, piece, dir, &Move::new(square, square)).is_some()
            })
        })
    }

    /// Returns `true` if any of `side`'s pieces can make a capture.
    pub fn can_capture(&self, side: Side) -> bool {
        self.pieces_of(side).any(|(square, piece)| {
            piece
                .directions()
                .iter()
                .any(|&dir| self.capture_along(square, piece, dir, &Move::new(square, square)).is_some())
        })
    }

    /// Generates every maximal capture chain available to `piece`, standing on `square`.
    ///
    /// Returns an empty list if `piece` has no first capture to make.
    pub fn captures_from(&self, square: Square, piece: Piece) -> MoveList {
        let mut captures = MoveList::new();
        self.extend_captures(square, piece, &Move::new(square, square), &mut captures);
        captures
    }

    /// Recursively extends the capture chain `partial`, whose piece now stands on `at`.
    ///
    /// Each capture is played out on a copy of the board, so that later jumps see the captured pieces gone.
    /// Only chains that cannot be extended any further are pushed to `captures`.
    fn extend_captures(&self, at: Square, piece: Piece, partial: &Move, captures: &mut MoveList) {
        let mut extended = false;

        for &dir in piece.directions() {
            let Some((victim, landing)) = self.capture_along(at, piece, dir, partial)
            else {
                continue;
            };

            // Promotion does not happen mid-chain, so the piece keeps its rank on the trial board.
            let mut trial = *self;
            trial[at] = None;
            trial[victim] = None;
            trial[landing] = Some(piece);

            trial.extend_captures(landing, piece, &partial.extended(victim, landing), captures);
            extended = true;
        }

        if !extended && partial.is_capture() {
            captures.push(partial.clone());
        }
    }

    /// Finds a capture for `piece` on `at` along `dir`, returning the captured square and the landing square.
    ///
    /// A man may only capture an adjacent enemy. A king captures the first piece it meets along the ray.
    /// Either way, the captured piece must be an enemy that `partial` hasn't already jumped,
    /// and the square directly beyond it must be empty.
    fn capture_along(
        &self,
        at: Square,
        piece: Piece,
        dir: Direction,
        partial: &Move,
    ) -> Option<(Square, Square)> {
        let reach = if piece.is_king() { BOARD_SIZE } else { 1 };

        let victim = at.ray(dir).take(reach).find(|&sq| !self.is_empty_at(sq))?;
        let is_enemy = self
            .piece_at(victim)
            .is_some_and(|other| other.side() != piece.side());

        if !is_enemy || partial.has_captured(victim) {
            return None;
        }

        let landing = victim.offset(dir).filter(|&sq| self.is_empty_at(sq))?;
        Some((victim, landing))
    }

    /// Pushes every non-capturing move available to `piece`, standing on `square`, onto `moves`.
    ///
    /// Men step one square forward. Kings slide any distance until blocked.
    fn simple_moves_from(&self, square: Square, piece: Piece, moves: &mut MoveList) {
        let reach = if piece.is_king() { BOARD_SIZE } else { 1 };

        for &dir in piece.directions() {
            moves.extend(
                square
                    .ray(dir)
                    .take(reach)
                    .take_while(|&to| self.is_empty_at(to))
                    .map(|to| Move::new(square, to)),
            );
        }
    }
}
