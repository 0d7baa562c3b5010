// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;
use std::ops::Index;

use crate::types::{Color, Piece, Role, Square};

const CELLS: usize = 90;

/// Errors raised by the board when a caller violates its contract. These
/// indicate a defect in the caller, never a game rule outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds { row: i8, col: i8 },
    Occupied(Square),
    Vacant(Square),
    DuplicateGeneral(Color),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinates ({}, {}) are off the board", row, col)
            }
            BoardError::Occupied(sq) => write!(f, "square {} is already occupied", sq),
            BoardError::Vacant(sq) => write!(f, "square {} is empty", sq),
            BoardError::DuplicateGeneral(color) => {
                write!(f, "the {} general is already on the board", color)
            }
        }
    }
}

impl Error for BoardError {}

/// The 10x9 grid. Pieces do not record their own square: the grid is the only
/// source of truth for where a piece stands, and `move_piece` is the only
/// operation that relocates one.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

lazy_static! {
    static ref OPENING: Board = {
        use crate::types::Role::*;

        let back_rank = [
            Chariot, Horse, Elephant, Advisor, General, Advisor, Elephant, Horse, Chariot,
        ];
        let mut board = Board::new();
        for &(color, back, cannons, soldiers) in &[(Color::Black, 0, 2, 3), (Color::Red, 9, 7, 6)] {
            for (col, &role) in back_rank.iter().enumerate() {
                board.put(Square::of(back, col as i8), Piece::new(role, color));
            }
            for &col in &[1, 7] {
                board.put(Square::of(cannons, col), Piece::new(Cannon, color));
            }
            for &col in &[0, 2, 4, 6, 8] {
                board.put(Square::of(soldiers, col), Piece::new(Soldier, color));
            }
        }
        board
    };
}

//
// Construction and storage
//

impl Board {
    pub const ROWS: i8 = 10;
    pub const COLS: i8 = 9;
    pub const CELLS: usize = CELLS;

    /// Constructs an empty board.
    pub const fn new() -> Board {
        Board {
            cells: [None; CELLS],
        }
    }

    /// Constructs a board holding the canonical opening layout.
    pub fn opening() -> Board {
        OPENING.clone()
    }

    pub fn is_on_board(row: i8, col: i8) -> bool {
        0 <= row && row < Board::ROWS && 0 <= col && col < Board::COLS
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Places a piece on an empty square. Each color has at most one general.
    pub fn add_piece(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.piece_at(square).is_some() {
            return Err(BoardError::Occupied(square));
        }

        if piece.role == Role::General && self.find_general(piece.color).is_some() {
            return Err(BoardError::DuplicateGeneral(piece.color));
        }

        self.put(square, piece);
        Ok(())
    }

    /// Removes and returns the piece on the square, if any.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Relocates the piece on `source` to `dest`, returning whatever piece
    /// previously stood on `dest`. No legality checks are made.
    pub fn move_piece(&mut self, source: Square, dest: Square) -> Result<Option<Piece>, BoardError> {
        let piece = self
            .remove_piece(source)
            .ok_or(BoardError::Vacant(source))?;
        let captured = self.cells[dest.index()].replace(piece);
        Ok(captured)
    }

    fn put(&mut self, square: Square, piece: Piece) {
        self.cells[square.index()] = Some(piece);
    }
}

//
// Queries
//

impl Board {
    /// Iterates over every occupied square and its piece.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|piece| (Square::from_index(idx), piece)))
    }

    /// Iterates over the pieces of one color and their squares.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |&(_, piece)| piece.color == color)
    }

    /// Finds the square of the given color's general, if it is still on the
    /// board.
    pub fn find_general(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece.role == Role::General)
            .map(|(sq, _)| sq)
    }

    /// Snapshot of the grid as rows of cells, row 0 first.
    pub fn rows(&self) -> Vec<Vec<Option<Piece>>> {
        self.cells
            .chunks(Board::COLS as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Option<Piece> {
        &self.cells[square.index()]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..Board::ROWS {
            for col in 0..Board::COLS {
                if let Some(piece) = self.piece_at(Square::of(row, col)) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", row)?;
        }

        for _ in 0..Board::COLS {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for col in 0..Board::COLS {
            write!(f, " {} ", col)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
