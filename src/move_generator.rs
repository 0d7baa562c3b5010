// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation. Each role produces a list of candidate
//! destination squares; a shared post-filter then drops candidates occupied by
//! a friendly piece and flags captures. Candidates off the board are never
//! constructed, since `Square` cannot represent them.
//!
//! No move is checked against leaving the mover's own general attacked.
use arrayvec::ArrayVec;

use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, Piece, Role, Square, ORTHOGONALS};

/// The most moves a single piece can have: a chariot or cannon on an open
/// board reaches 9 squares along its column and 8 along its row.
pub const MAX_PIECE_MOVES: usize = 17;

/// Fixed-capacity list of the moves of one piece.
pub type MoveVec = ArrayVec<[Move; MAX_PIECE_MOVES]>;

type Targets = ArrayVec<[Square; MAX_PIECE_MOVES]>;

static DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

static ELEPHANT_OFFSETS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

static HORSE_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Copy, Clone, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Generates the moves of the piece standing on `square` into `moves`,
    /// which is cleared first. An empty square yields no moves.
    pub fn generate_moves(&self, board: &Board, square: Square, moves: &mut MoveVec) {
        moves.clear();
        let piece = match board.piece_at(square) {
            Some(piece) => piece,
            None => return,
        };

        let mut targets = Targets::new();
        match piece.role {
            Role::General => general_targets(piece.color, square, &mut targets),
            Role::Advisor => advisor_targets(piece.color, square, &mut targets),
            Role::Elephant => elephant_targets(board, piece.color, square, &mut targets),
            Role::Horse => horse_targets(board, square, &mut targets),
            Role::Chariot => chariot_targets(board, piece.color, square, &mut targets),
            Role::Cannon => cannon_targets(board, piece.color, square, &mut targets),
            Role::Soldier => soldier_targets(piece.color, square, &mut targets),
        }

        filter_targets(board, piece, square, &targets, moves);
    }

    /// Generates the moves of every piece of the given color, appending them
    /// to `moves`.
    pub fn generate_all_moves(&self, board: &Board, color: Color, moves: &mut Vec<Move>) {
        let mut piece_moves = MoveVec::new();
        for (square, _) in board.pieces(color) {
            self.generate_moves(board, square, &mut piece_moves);
            moves.extend(piece_moves.iter().cloned());
        }
    }

    /// Whether any piece of the given color has at least one move.
    pub fn has_any_move(&self, board: &Board, color: Color) -> bool {
        let mut piece_moves = MoveVec::new();
        board.pieces(color).any(|(square, _)| {
            self.generate_moves(board, square, &mut piece_moves);
            !piece_moves.is_empty()
        })
    }
}

/// Convenience wrapper returning the moves of the piece on `square`.
pub fn legal_moves(board: &Board, square: Square) -> MoveVec {
    let mut moves = MoveVec::new();
    MoveGenerator::new().generate_moves(board, square, &mut moves);
    moves
}

// The shared post-filter: friendly-occupied squares are dropped, and a move
// onto an enemy piece is a capture.
fn filter_targets(board: &Board, piece: Piece, source: Square, targets: &Targets, moves: &mut MoveVec) {
    for &target in targets.iter() {
        match board.piece_at(target) {
            Some(occupant) if occupant.color == piece.color => continue,
            Some(_) => moves.push(Move::capture(source, target)),
            None => moves.push(Move::quiet(source, target)),
        }
    }
}

fn general_targets(color: Color, square: Square, targets: &mut Targets) {
    if !color.palace_contains(square) {
        return;
    }

    for &dir in ORTHOGONALS.iter() {
        if let Some(target) = square.towards(dir) {
            if color.palace_contains(target) {
                targets.push(target);
            }
        }
    }
}

fn advisor_targets(color: Color, square: Square, targets: &mut Targets) {
    for &(drow, dcol) in DIAGONALS.iter() {
        if let Some(target) = square.offset(drow, dcol) {
            if color.palace_contains(target) {
                targets.push(target);
            }
        }
    }
}

fn elephant_targets(board: &Board, color: Color, square: Square, targets: &mut Targets) {
    for &(drow, dcol) in ELEPHANT_OFFSETS.iter() {
        let target = match square.offset(drow, dcol) {
            Some(target) => target,
            None => continue,
        };

        // elephants never cross the river.
        if !color.home_side(target.row()) {
            continue;
        }

        // the eye lies between source and target, so it is on the board
        // whenever the target is.
        let eye_free = square
            .offset(drow / 2, dcol / 2)
            .map(|eye| board.piece_at(eye).is_none())
            .unwrap_or(false);
        if eye_free {
            targets.push(target);
        }
    }
}

fn horse_targets(board: &Board, square: Square, targets: &mut Targets) {
    for &(drow, dcol) in HORSE_OFFSETS.iter() {
        let target = match square.offset(drow, dcol) {
            Some(target) => target,
            None => continue,
        };

        // the leg is one step along the longer axis of the jump.
        let leg = if drow.abs() == 2 {
            square.offset(drow / 2, 0)
        } else {
            square.offset(0, dcol / 2)
        };

        if leg.map(|leg| board.piece_at(leg).is_none()).unwrap_or(false) {
            targets.push(target);
        }
    }
}

fn chariot_targets(board: &Board, color: Color, square: Square, targets: &mut Targets) {
    for &dir in ORTHOGONALS.iter() {
        let mut cursor = square.towards(dir);
        while let Some(target) = cursor {
            if let Some(occupant) = board.piece_at(target) {
                if occupant.color != color {
                    targets.push(target);
                }

                break;
            }

            targets.push(target);
            cursor = target.towards(dir);
        }
    }
}

fn cannon_targets(board: &Board, color: Color, square: Square, targets: &mut Targets) {
    for &dir in ORTHOGONALS.iter() {
        let mut screened = false;
        let mut cursor = square.towards(dir);
        while let Some(target) = cursor {
            match (board.piece_at(target), screened) {
                (None, false) => targets.push(target),
                (None, true) => {}
                (Some(_), false) => screened = true,
                (Some(occupant), true) => {
                    if occupant.color != color {
                        targets.push(target);
                    }

                    break;
                }
            }

            cursor = target.towards(dir);
        }
    }
}

fn soldier_targets(color: Color, square: Square, targets: &mut Targets) {
    if let Some(target) = square.offset(color.forward(), 0) {
        targets.push(target);
    }

    // sideways steps open up once the soldier is across the river.
    if !color.home_side(square.row()) {
        for &dcol in &[-1, 1] {
            if let Some(target) = square.offset(0, dcol) {
                targets.push(target);
            }
        }
    }
}
