/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use leap::{Board, Game, Move, MoveList, Piece, Side, Square};

fn sq(row: usize, col: usize) -> Square {
    Square::new_unchecked(row, col)
}

/// Plays a fixed, varied sequence of moves from the starting position, calling `visit` on every position reached.
///
/// Moves are picked by a simple stride through the move list so the playouts stay deterministic.
fn playout(seed: usize, max_plies: usize, mut visit: impl FnMut(&Game, &MoveList)) {
    let mut game = Game::new();

    for ply in 0..max_plies {
        let moves = game.legal_moves();
        visit(&game, &moves);

        if moves.is_empty() {
            break;
        }

        let mv = &moves[(seed * 31 + ply * 7) % moves.len()];
        game.play(mv).unwrap();
    }
}

#[test]
fn capture_is_forced() {
    // Computer man at (2,3) may step to (3,2), but must take (3,4) instead
    let mut board = Board::empty();
    board.place(sq(2, 3), Piece::COMPUTER_MAN);
    board.place(sq(3, 4), Piece::PLAYER_MAN);
    board.place(sq(2, 7), Piece::COMPUTER_MAN);

    let moves = board.legal_moves(Side::Computer);
    assert_eq!(
        moves,
        [Move::new_capture(sq(2, 3), sq(4, 5), [sq(3, 4)])]
    );
}

#[test]
fn scenario_single_capture() {
    let mut board = Board::empty();
    board.place(sq(2, 3), Piece::COMPUTER_MAN);
    board.place(sq(3, 4), Piece::PLAYER_MAN);

    let moves = board.legal_moves(Side::Computer);
    assert_eq!(moves.len(), 1);

    let mv = &moves[0];
    assert_eq!(mv.from(), sq(2, 3));
    assert_eq!(mv.to(), sq(4, 5));
    assert_eq!(mv.captured(), [sq(3, 4)]);
}

#[test]
fn scenario_blocked_capture_falls_back_to_steps() {
    let mut board = Board::empty();
    board.place(sq(2, 3), Piece::COMPUTER_MAN);
    board.place(sq(3, 4), Piece::PLAYER_MAN);
    board.place(sq(4, 5), Piece::PLAYER_MAN);

    let moves = board.legal_moves(Side::Computer);
    assert!(moves.iter().all(Move::is_simple));
    assert_eq!(moves, [Move::new(sq(2, 3), sq(3, 2))]);
}

#[test]
fn scenario_side_without_pieces() {
    let mut board = Board::empty();
    board.place(sq(5, 2), Piece::PLAYER_MAN);

    assert_eq!(board.count_pieces(Side::Computer), 0);
    assert!(board.is_terminal());
}

#[test]
fn startpos_is_not_terminal() {
    let board = Board::new();
    assert!(!board.is_terminal());
    assert_eq!(board.count_pieces(Side::Player), 12);
    assert_eq!(board.count_pieces(Side::Computer), 12);
}

#[test]
fn playouts_never_mix_captures_and_steps() {
    for seed in 0..8 {
        playout(seed, 120, |_, moves| {
            if moves.iter().any(Move::is_capture) {
                assert!(moves.iter().all(Move::is_capture), "mixed move list: {moves:?}");
            }
        });
    }
}

#[test]
fn playouts_only_produce_maximal_chains() {
    for seed in 0..8 {
        playout(seed, 120, |game, moves| {
            for mv in moves.iter().filter(|mv| mv.is_capture()) {
                let is_prefix = |other: &Move| {
                    other.from() == mv.from()
                        && other.captured().len() < mv.captured().len()
                        && mv.captured().starts_with(other.captured())
                };

                assert!(
                    !moves.iter().any(is_prefix),
                    "{mv} has a shorter prefix in\n{:?}",
                    game.board()
                );
            }
        });
    }
}

#[test]
fn playouts_undo_restores_board() {
    for seed in 0..8 {
        playout(seed, 120, |game, moves| {
            for mv in moves {
                let before = *game.board();
                let mover = before.piece_at(mv.from()).unwrap();
                let captured = before.captured_pieces(mv);

                let mut board = before;
                board.apply_move(mv).unwrap();
                assert_eq!(
                    board.count_pieces(game.side_to_move().opponent()),
                    before.count_pieces(game.side_to_move().opponent()) - mv.captured().len()
                );

                board.undo_move(mv, mover, &captured);
                assert_eq!(board, before, "undoing {mv} did not restore the board");
            }
        });
    }
}

#[test]
fn evaluation_is_monotonic_in_material() {
    for seed in 0..4 {
        playout(seed, 60, |game, _| {
            let board = game.board();
            let score = board.evaluate();

            for square in Square::iter().filter(|s| s.is_dark() && board.is_empty_at(*s)) {
                let mut more = *board;
                more.place(square, Piece::COMPUTER_MAN);
                assert!(more.evaluate() >= score, "Computer man at {square} lowered the score");

                let mut more = *board;
                more.place(square, Piece::PLAYER_MAN);
                assert!(more.evaluate() <= score, "Player man at {square} raised the score");
            }
        });
    }
}

#[test]
fn promotion_sweeps_the_whole_board() {
    let mut board = Board::empty();
    // Placed pieces are never crowned on their own
    board.place(sq(0, 3), Piece::PLAYER_MAN);
    board.place(sq(6, 1), Piece::COMPUTER_MAN);
    board.place(sq(4, 5), Piece::PLAYER_MAN);

    // Any move at all crowns every man already on its promotion row
    board.apply_move(&Move::new(sq(4, 5), sq(3, 6))).unwrap();
    assert_eq!(board.piece_at(sq(0, 3)), Some(Piece::PLAYER_KING));
    assert_eq!(board.piece_at(sq(6, 1)), Some(Piece::COMPUTER_MAN));

    board.apply_move(&Move::new(sq(6, 1), sq(7, 2))).unwrap();
    assert_eq!(board.piece_at(sq(7, 2)), Some(Piece::COMPUTER_KING));
}

#[test]
fn illegal_moves_are_rejected() {
    let mut board = Board::new();
    let before = board;

    // A two-square step is never legal for a man
    let mv = Move::new(sq(5, 0), sq(3, 2));
    assert!(board.apply_move(&mv).is_err());
    assert_eq!(board, before);

    // Neither is moving from an empty square
    let mv = Move::new(sq(4, 1), sq(3, 2));
    assert!(board.apply_move(&mv).is_err());
    assert_eq!(board, before);
}

#[test]
fn out_of_bounds_squares_are_errors() {
    assert!(Square::new(8, 1).is_err());
    assert!(Square::new(-1, 0).is_err());
    assert!(Square::new(7, 0).is_ok());
}
