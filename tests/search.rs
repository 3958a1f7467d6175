/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use leap::{
    best_move, minimax, Board, Difficulty, Game, Move, Piece, Score, Search, SearchConfig, Side,
    Square,
};

fn sq(row: usize, col: usize) -> Square {
    Square::new_unchecked(row, col)
}

#[test]
fn depth_zero_is_static_evaluation() {
    let mut game = Game::new();

    for _ in 0..20 {
        let board = game.board();
        for maximizing in [true, false] {
            assert_eq!(
                minimax(board, 0, Score::MIN, Score::MAX, maximizing),
                board.evaluate()
            );
        }

        let Some(mv) = game.legal_moves().pop() else {
            break;
        };
        game.play(&mv).unwrap();
    }
}

#[test]
fn king_takes_undefended_man() {
    let mut board = Board::empty();
    board.place(sq(1, 0), Piece::COMPUTER_KING);
    board.place(sq(4, 3), Piece::PLAYER_MAN);

    let res = best_move(&board, Difficulty::Hard.depth());
    assert_eq!(
        res.bestmove,
        Some(Move::new_capture(sq(1, 0), sq(5, 4), [sq(4, 3)]))
    );

    // The Player is left without pieces
    assert_eq!(res.score, Score::WIN);
}

#[test]
fn man_is_not_left_hanging() {
    // Stepping to (3,2) lets the Player jump back to (2,1)
    let mut board = Board::empty();
    board.place(sq(2, 1), Piece::COMPUTER_MAN);
    board.place(sq(4, 3), Piece::PLAYER_MAN);

    let res = best_move(&board, Difficulty::Easy.depth());
    assert_eq!(res.bestmove, Some(Move::new(sq(2, 1), sq(3, 0))));
    assert!(res.score > Score::LOSS);
}

#[test]
fn computer_without_moves_gets_no_move() {
    let mut board = Board::empty();
    board.place(sq(5, 2), Piece::PLAYER_MAN);

    let res = best_move(&board, 4);
    assert!(res.bestmove.is_none());
}

#[test]
fn best_move_is_playable() {
    let mut game = Game::from_board(Board::new(), Side::Computer);

    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let res = Search::new(game.board(), difficulty.into()).start();
        let mv = res.bestmove.unwrap();

        assert!(game.legal_moves().contains(&mv));
        game.play(&mv).unwrap();

        // Hand the turn straight back to the Computer
        game.toggle_side_to_move();
    }
}

#[test]
fn pruning_matches_plain_minimax() {
    let mut game = Game::new();
    game.play(&game.legal_moves()[3]).unwrap();

    for depth in 1..=5 {
        let pruned = Search::new(game.board(), SearchConfig::from_depth(depth)).start();
        let full = Search::new(
            game.board(),
            SearchConfig {
                max_depth: depth,
                prune: false,
            },
        )
        .start();

        assert_eq!(pruned.bestmove, full.bestmove, "depth {depth}");
        assert_eq!(pruned.score, full.score, "depth {depth}");
        assert!(pruned.nodes <= full.nodes, "depth {depth}");
    }
}
