// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
extern crate xiangqi;
use std::collections::HashSet;
use xiangqi::{legal_moves, Board, Color, Move, MoveGenerator, Piece, Role, Square};

fn board_with(pieces: &[(i8, i8, Role, Color)]) -> Board {
    let mut board = Board::new();
    for &(row, col, role, color) in pieces {
        board
            .add_piece(Square::of(row, col), Piece::new(role, color))
            .unwrap();
    }
    board
}

fn generated(board: &Board, square: Square) -> HashSet<Move> {
    legal_moves(board, square).iter().cloned().collect()
}

fn assert_moves_generated(board: &Board, square: Square, moves: &[Move]) {
    let moves_hash = generated(board, square);
    for mov in moves_hash.iter() {
        if !moves.contains(mov) {
            println!("move {} was not found in collection: ", mov);
            for m in moves {
                println!("   > {}", m);
            }

            panic!()
        }
    }

    assert_eq!(moves.len(), moves_hash.len(), "some moves were not generated");
}

fn assert_moves_contains(board: &Board, square: Square, moves: &[Move]) {
    let moves_hash = generated(board, square);
    for mov in moves {
        if !moves_hash.contains(mov) {
            println!("move {} was not generated", mov);
            panic!()
        }
    }
}

fn assert_moves_does_not_contain(board: &Board, square: Square, moves: &[Move]) {
    let moves_hash = generated(board, square);
    for mov in moves {
        if moves_hash.contains(mov) {
            println!("move list contained banned move: {}", mov);
            panic!()
        }
    }
}

fn sq(row: i8, col: i8) -> Square {
    Square::of(row, col)
}

mod generals {
    use super::*;

    #[test]
    fn palace_corner() {
        let board = board_with(&[(7, 3, Role::General, Color::Red)]);
        assert_moves_generated(&board, sq(7, 3), &[
            Move::quiet(sq(7, 3), sq(8, 3)),
            Move::quiet(sq(7, 3), sq(7, 4)),
        ]);
    }

    #[test]
    fn black_palace_center() {
        let board = board_with(&[(1, 4, Role::General, Color::Black)]);
        assert_moves_generated(&board, sq(1, 4), &[
            Move::quiet(sq(1, 4), sq(0, 4)),
            Move::quiet(sq(1, 4), sq(2, 4)),
            Move::quiet(sq(1, 4), sq(1, 3)),
            Move::quiet(sq(1, 4), sq(1, 5)),
        ]);
    }

    #[test]
    fn outside_palace_has_no_moves() {
        let board = board_with(&[(5, 4, Role::General, Color::Red)]);
        assert!(legal_moves(&board, sq(5, 4)).is_empty());
    }

    #[test]
    fn generals_do_not_fly() {
        let board = board_with(&[
            (9, 4, Role::General, Color::Red),
            (0, 4, Role::General, Color::Black),
        ]);
        assert_moves_does_not_contain(&board, sq(9, 4), &[Move::capture(sq(9, 4), sq(0, 4))]);
    }
}

mod advisors {
    use super::*;

    #[test]
    fn palace_corner() {
        let board = board_with(&[(9, 3, Role::Advisor, Color::Red)]);
        assert_moves_generated(&board, sq(9, 3), &[Move::quiet(sq(9, 3), sq(8, 4))]);
    }

    #[test]
    fn palace_center() {
        let board = board_with(&[(1, 4, Role::Advisor, Color::Black)]);
        assert_moves_generated(&board, sq(1, 4), &[
            Move::quiet(sq(1, 4), sq(0, 3)),
            Move::quiet(sq(1, 4), sq(0, 5)),
            Move::quiet(sq(1, 4), sq(2, 3)),
            Move::quiet(sq(1, 4), sq(2, 5)),
        ]);
    }
}

mod elephants {
    use super::*;

    #[test]
    fn opening() {
        let board = Board::opening();
        assert_moves_generated(&board, sq(9, 2), &[
            Move::quiet(sq(9, 2), sq(7, 0)),
            Move::quiet(sq(9, 2), sq(7, 4)),
        ]);
    }

    #[test]
    fn blocked_eye() {
        let board = board_with(&[
            (9, 2, Role::Elephant, Color::Red),
            (8, 3, Role::Soldier, Color::Black),
        ]);
        assert_moves_generated(&board, sq(9, 2), &[Move::quiet(sq(9, 2), sq(7, 0))]);
    }

    #[test]
    fn never_crosses_river() {
        let board = board_with(&[(5, 2, Role::Elephant, Color::Red)]);
        assert_moves_generated(&board, sq(5, 2), &[
            Move::quiet(sq(5, 2), sq(7, 0)),
            Move::quiet(sq(5, 2), sq(7, 4)),
        ]);

        let board = board_with(&[(4, 6, Role::Elephant, Color::Black)]);
        assert_moves_generated(&board, sq(4, 6), &[
            Move::quiet(sq(4, 6), sq(2, 4)),
            Move::quiet(sq(4, 6), sq(2, 8)),
        ]);
    }
}

mod horses {
    use super::*;

    #[test]
    fn open_board() {
        let board = board_with(&[(9, 1, Role::Horse, Color::Red)]);
        assert_moves_generated(&board, sq(9, 1), &[
            Move::quiet(sq(9, 1), sq(7, 0)),
            Move::quiet(sq(9, 1), sq(7, 2)),
            Move::quiet(sq(9, 1), sq(8, 3)),
        ]);
    }

    #[test]
    fn hobbled_leg() {
        let board = board_with(&[
            (9, 1, Role::Horse, Color::Red),
            (8, 1, Role::Soldier, Color::Black),
        ]);
        assert_moves_generated(&board, sq(9, 1), &[Move::quiet(sq(9, 1), sq(8, 3))]);
    }

    #[test]
    fn sideways_leg() {
        let board = board_with(&[
            (9, 1, Role::Horse, Color::Red),
            (9, 2, Role::Elephant, Color::Red),
        ]);
        assert_moves_does_not_contain(&board, sq(9, 1), &[Move::quiet(sq(9, 1), sq(8, 3))]);
        assert_moves_contains(&board, sq(9, 1), &[
            Move::quiet(sq(9, 1), sq(7, 0)),
            Move::quiet(sq(9, 1), sq(7, 2)),
        ]);
    }

    #[test]
    fn center_of_board() {
        let board = board_with(&[(4, 4, Role::Horse, Color::Black)]);
        assert_eq!(8, legal_moves(&board, sq(4, 4)).len());
    }
}

mod chariots {
    use super::*;

    #[test]
    fn opening_corner() {
        let board = Board::opening();
        assert_moves_generated(&board, sq(9, 0), &[
            Move::quiet(sq(9, 0), sq(8, 0)),
            Move::quiet(sq(9, 0), sq(7, 0)),
        ]);
    }

    #[test]
    fn stops_at_blockers() {
        let board = board_with(&[
            (5, 4, Role::Chariot, Color::Red),
            (5, 7, Role::Soldier, Color::Black),
            (2, 4, Role::Soldier, Color::Red),
        ]);
        let moves = legal_moves(&board, sq(5, 4));
        assert_eq!(13, moves.len());
        let captures: Vec<Move> = moves.iter().filter(|mov| mov.is_capture()).cloned().collect();
        assert_eq!(vec![Move::capture(sq(5, 4), sq(5, 7))], captures);
        assert_moves_does_not_contain(&board, sq(5, 4), &[
            Move::quiet(sq(5, 4), sq(5, 8)),
            Move::capture(sq(5, 4), sq(2, 4)),
            Move::quiet(sq(5, 4), sq(1, 4)),
        ]);
    }
}

mod cannons {
    use super::*;

    #[test]
    fn opening_screen_capture() {
        let board = Board::opening();
        assert_eq!(12, legal_moves(&board, sq(7, 1)).len());
        assert_moves_contains(&board, sq(7, 1), &[
            Move::capture(sq(7, 1), sq(0, 1)),
            Move::quiet(sq(7, 1), sq(3, 1)),
            Move::quiet(sq(7, 1), sq(7, 6)),
        ]);
        assert_moves_does_not_contain(&board, sq(7, 1), &[
            Move::capture(sq(7, 1), sq(2, 1)),
            Move::quiet(sq(7, 1), sq(1, 1)),
            Move::quiet(sq(7, 1), sq(7, 8)),
        ]);
    }

    #[test]
    fn no_screen_no_capture() {
        let board = board_with(&[
            (7, 1, Role::Cannon, Color::Red),
            (3, 1, Role::Chariot, Color::Black),
        ]);
        assert!(legal_moves(&board, sq(7, 1))
            .iter()
            .all(|mov| mov.is_quiet()));
        assert_moves_does_not_contain(&board, sq(7, 1), &[
            Move::capture(sq(7, 1), sq(3, 1)),
            Move::quiet(sq(7, 1), sq(3, 1)),
        ]);
    }

    #[test]
    fn jumps_exactly_one_screen() {
        let board = board_with(&[
            (7, 1, Role::Cannon, Color::Red),
            (5, 1, Role::Soldier, Color::Red),
            (3, 1, Role::Chariot, Color::Black),
        ]);
        assert_moves_contains(&board, sq(7, 1), &[
            Move::quiet(sq(7, 1), sq(6, 1)),
            Move::capture(sq(7, 1), sq(3, 1)),
        ]);
        assert_moves_does_not_contain(&board, sq(7, 1), &[
            Move::quiet(sq(7, 1), sq(4, 1)),
            Move::quiet(sq(7, 1), sq(2, 1)),
        ]);
    }

    #[test]
    fn never_captures_own_piece() {
        let board = board_with(&[
            (7, 1, Role::Cannon, Color::Black),
            (5, 1, Role::Soldier, Color::Red),
            (3, 1, Role::Chariot, Color::Black),
        ]);
        assert!(legal_moves(&board, sq(7, 1))
            .iter()
            .all(|mov| mov.destination() != sq(3, 1)));
    }
}

mod soldiers {
    use super::*;

    #[test]
    fn red_before_river() {
        let board = board_with(&[(6, 0, Role::Soldier, Color::Red)]);
        assert_moves_generated(&board, sq(6, 0), &[Move::quiet(sq(6, 0), sq(5, 0))]);
    }

    #[test]
    fn red_across_river() {
        let board = board_with(&[(4, 4, Role::Soldier, Color::Red)]);
        assert_moves_generated(&board, sq(4, 4), &[
            Move::quiet(sq(4, 4), sq(3, 4)),
            Move::quiet(sq(4, 4), sq(4, 3)),
            Move::quiet(sq(4, 4), sq(4, 5)),
        ]);
    }

    #[test]
    fn red_last_rank() {
        let board = board_with(&[(0, 4, Role::Soldier, Color::Red)]);
        assert_moves_generated(&board, sq(0, 4), &[
            Move::quiet(sq(0, 4), sq(0, 3)),
            Move::quiet(sq(0, 4), sq(0, 5)),
        ]);
    }

    #[test]
    fn black_across_river() {
        let board = board_with(&[(5, 4, Role::Soldier, Color::Black)]);
        assert_moves_generated(&board, sq(5, 4), &[
            Move::quiet(sq(5, 4), sq(6, 4)),
            Move::quiet(sq(5, 4), sq(5, 3)),
            Move::quiet(sq(5, 4), sq(5, 5)),
        ]);
    }

    #[test]
    fn black_before_river() {
        let board = board_with(&[(3, 2, Role::Soldier, Color::Black)]);
        assert_moves_generated(&board, sq(3, 2), &[Move::quiet(sq(3, 2), sq(4, 2))]);
    }

    #[test]
    fn captures_forward() {
        let board = board_with(&[
            (6, 0, Role::Soldier, Color::Red),
            (5, 0, Role::Soldier, Color::Black),
        ]);
        assert_moves_generated(&board, sq(6, 0), &[Move::capture(sq(6, 0), sq(5, 0))]);
    }
}

#[test]
fn empty_square_has_no_moves() {
    assert!(legal_moves(&Board::opening(), sq(4, 4)).is_empty());
}

fn assert_no_friendly_targets(board: &Board) {
    for (square, piece) in board.occupied() {
        for mov in legal_moves(board, square).iter() {
            let dest = mov.destination();
            assert!(Board::is_on_board(dest.row(), dest.col()));
            let occupant = board.piece_at(dest);
            if occupant.map(|p| p.color == piece.color).unwrap_or(false) {
                println!("{}", board);
                println!("move {} lands on a friendly piece", mov);
                panic!()
            }

            assert_eq!(occupant.is_some(), mov.is_capture());
        }
    }
}

// Every position reachable from `board` in exactly one move by `side`.
fn children(board: &Board, side: Color) -> Vec<Board> {
    let mut moves = Vec::new();
    MoveGenerator::new().generate_all_moves(board, side, &mut moves);
    moves
        .iter()
        .map(|mov| {
            let mut child = board.clone();
            child.move_piece(mov.source(), mov.destination()).unwrap();
            child
        })
        .collect()
}

#[test]
fn never_targets_friendly_piece() {
    let opening = Board::opening();
    assert_no_friendly_targets(&opening);

    let first_ply = children(&opening, Color::Red);
    assert_eq!(44, first_ply.len());
    for board in first_ply.iter() {
        assert_no_friendly_targets(board);
        for grandchild in children(board, Color::Black).iter() {
            assert_no_friendly_targets(grandchild);
        }
    }
}
