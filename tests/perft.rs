/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use leap::{perft_generic, Board, Game, Piece, Side, Square};

fn test_perft_nodes(game: &Game, depth: usize, expected: u64) {
    let res = perft_generic::<false, false>(game, depth);
    assert_eq!(res, expected, "PERFT({depth}) failed on\n{game:?}");
}

#[test]
fn test_startpos_perft() {
    let game = Game::new();
    test_perft_nodes(&game, 1, 7);
    test_perft_nodes(&game, 2, 49);
    test_perft_nodes(&game, 3, 302);
    test_perft_nodes(&game, 4, 1469);
    test_perft_nodes(&game, 5, 7361);
}

#[test]
fn test_lone_king_perft() {
    // A king in the corner slides along the long diagonal only
    let mut board = Board::empty();
    board.place(Square::new_unchecked(0, 7), Piece::COMPUTER_KING);
    board.place(Square::new_unchecked(7, 6), Piece::PLAYER_MAN);

    let game = Game::from_board(board, Side::Computer);
    test_perft_nodes(&game, 1, 7);
}
