// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A rules engine for Xiangqi (Chinese chess): board model, pseudo-legal move
//! generation, check and mate detection, and a turn-based game state machine.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

mod board;
mod check;
mod console;
mod game;
mod move_generator;
mod moves;
mod perft;
mod types;

pub use board::{Board, BoardError};
pub use check::{evaluate, is_checkmate, is_in_check};
pub use console::Console;
pub use game::{CapturedPieces, Click, Game, GameState, MoveOutcome, Selection};
pub use move_generator::{legal_moves, MoveGenerator, MoveVec, MAX_PIECE_MOVES};
pub use moves::Move;
pub use perft::perft;
pub use types::{Color, Direction, Piece, Role, Square, Status, TableIndex, COLORS, ROLES};
