// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::prelude::*;

use crate::board::Board;
use crate::move_generator::MoveGenerator;
use crate::types::Color;

/// Counts the leaf nodes of the move tree rooted at `board` with `side` to
/// move, `depth` plies deep. Moves are pseudo-legal; a position in which a
/// general has been captured has no children.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    if board.find_general(Color::Red).is_none() || board.find_general(Color::Black).is_none() {
        return 0;
    }

    let mut moves = Vec::new();
    MoveGenerator::new().generate_all_moves(board, side, &mut moves);
    moves
        .par_iter()
        .map(|&mov| {
            let mut child = board.clone();
            child
                .move_piece(mov.source(), mov.destination())
                .expect("generated move from an empty square");
            perft(&child, side.toggle(), depth - 1)
        })
        .sum()
}
