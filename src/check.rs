// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Check and mate detection.
//!
//! Both tests are built on pseudo-legal moves. In particular, `is_checkmate`
//! only asks whether a color has *any* move left; it does not verify that a
//! move actually gets the general out of check.
use crate::board::Board;
use crate::move_generator::{MoveGenerator, MoveVec};
use crate::types::{Color, Status};

/// Returns whether the general of `color` is attacked, i.e. whether any piece
/// of the opposing color has a move onto the general's square. A color whose
/// general has already been captured is not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let general = match board.find_general(color) {
        Some(square) => square,
        None => return false,
    };

    let gen = MoveGenerator::new();
    let mut moves = MoveVec::new();
    board.pieces(color.toggle()).any(|(square, _)| {
        gen.generate_moves(board, square, &mut moves);
        moves.iter().any(|mov| mov.destination() == general)
    })
}

/// Returns whether no piece of `color` has a move.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    !MoveGenerator::new().has_any_move(board, color)
}

/// Computes the status of the game after a completed move, with `to_move` the
/// side now to move.
///
/// A captured general ends the game immediately. Otherwise only the side to
/// move is examined: if it is in check and has no move, the other side wins.
pub fn evaluate(board: &Board, to_move: Color) -> Status {
    if board.find_general(Color::Red).is_none() {
        return Status::BlackWins;
    }

    if board.find_general(Color::Black).is_none() {
        return Status::RedWins;
    }

    if is_in_check(board, to_move) && is_checkmate(board, to_move) {
        return Status::win_for(to_move.toggle());
    }

    Status::Playing
}
