// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

use crate::board::{Board, BoardError};

// TableIndex is a trait for all types that can serve as an index into a table.
// Colors index the per-side tables (captured pieces, piece lists), so any type
// implementing To and FromPrimitive can be used as a table index.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// A cell of the 10x9 board. Row 0 is black's back rank, row 9 is red's back
/// rank, and columns run 0..8 left to right from red's point of view.
///
/// A `Square` is always on the board; constructing one is the only place
/// bounds are checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Constructs a square, failing with `BoardError::OutOfBounds` if the
    /// coordinates lie off the board.
    pub fn new(row: i8, col: i8) -> Result<Square, BoardError> {
        if Board::is_on_board(row, col) {
            Ok(Square { row, col })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Constructs a square from coordinates known to be on the board.
    ///
    /// # Panics
    /// Panics if the coordinates are off the board.
    pub fn of(row: i8, col: i8) -> Square {
        match Square::new(row, col) {
            Ok(sq) => sq,
            Err(err) => panic!("{}", err),
        }
    }

    /// Constructs a square from its row-major index.
    ///
    /// # Panics
    /// Panics if the index is not below `Board::CELLS`.
    pub fn from_index(idx: usize) -> Square {
        let cols = Board::COLS as usize;
        if idx >= Board::CELLS {
            let row = (idx / cols).min(i8::MAX as usize) as i8;
            panic!("{}", BoardError::OutOfBounds { row, col: (idx % cols) as i8 });
        }

        Square::of((idx / cols) as i8, (idx % cols) as i8)
    }

    pub fn row(self) -> i8 {
        self.row
    }

    pub fn col(self) -> i8 {
        self.col
    }

    pub fn index(self) -> usize {
        (self.row * Board::COLS + self.col) as usize
    }

    /// Returns the square `(drow, dcol)` away from this one, or None if that
    /// square is off the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row.checked_add(drow)?;
        let col = self.col.checked_add(dcol)?;
        Square::new(row, col).ok()
    }

    pub fn towards(self, dir: Direction) -> Option<Square> {
        let (drow, dcol) = dir.as_vector();
        self.offset(drow, dcol)
    }

    /// Iterates over all 90 squares, row-major from black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Board::CELLS).map(Square::from_index)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of one step towards the opponent's side.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Whether the square lies in this color's palace: columns 3-5, rows 7-9
    /// for red and rows 0-2 for black.
    pub fn palace_contains(self, sq: Square) -> bool {
        let rows = match self {
            Color::Red => 7..=9,
            Color::Black => 0..=2,
        };
        rows.contains(&sq.row()) && (3..=5).contains(&sq.col())
    }

    /// Whether the row lies on this color's own side of the river.
    pub fn home_side(self, row: i8) -> bool {
        match self {
            Color::Red => row >= 5,
            Color::Black => row <= 4,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

pub static COLORS: [Color; 2] = [Color::Red, Color::Black];

/// The seven functional piece behaviors. Role selects the movement algorithm;
/// color selects palace, river side and direction.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl Role {
    /// Maps any of the textual kind labels to its role. Horse and chariot
    /// labels are accepted in either character set regardless of color.
    pub fn from_label(label: char) -> Option<Role> {
        let role = match label {
            '帅' | '将' => Role::General,
            '仕' | '士' => Role::Advisor,
            '相' | '象' => Role::Elephant,
            '馬' | '马' => Role::Horse,
            '車' | '车' => Role::Chariot,
            '炮' | '砲' => Role::Cannon,
            '兵' | '卒' => Role::Soldier,
            _ => return None,
        };
        Some(role)
    }

    pub fn letter(self) -> char {
        match self {
            Role::General => 'k',
            Role::Advisor => 'a',
            Role::Elephant => 'e',
            Role::Horse => 'h',
            Role::Chariot => 'r',
            Role::Cannon => 'c',
            Role::Soldier => 'p',
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.letter())
    }
}

pub static ROLES: [Role; 7] = [
    Role::General,
    Role::Advisor,
    Role::Elephant,
    Role::Horse,
    Role::Chariot,
    Role::Cannon,
    Role::Soldier,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
}

impl Piece {
    pub fn new(role: Role, color: Color) -> Piece {
        Piece { role, color }
    }

    /// The textual kind of this piece; one of fourteen labels, seven per color.
    pub fn label(&self) -> char {
        match (self.color, self.role) {
            (Color::Red, Role::General) => '帅',
            (Color::Red, Role::Advisor) => '仕',
            (Color::Red, Role::Elephant) => '相',
            (Color::Red, Role::Horse) => '馬',
            (Color::Red, Role::Chariot) => '車',
            (Color::Red, Role::Cannon) => '炮',
            (Color::Red, Role::Soldier) => '兵',
            (Color::Black, Role::General) => '将',
            (Color::Black, Role::Advisor) => '士',
            (Color::Black, Role::Elephant) => '象',
            (Color::Black, Role::Horse) => '马',
            (Color::Black, Role::Chariot) => '车',
            (Color::Black, Role::Cannon) => '砲',
            (Color::Black, Role::Soldier) => '卒',
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = match c {
            '帅' | '仕' | '相' | '馬' | '車' | '炮' | '兵' => Color::Red,
            '将' | '士' | '象' | '马' | '车' | '砲' | '卒' => Color::Black,
            _ => return Err(()),
        };
        let role = Role::from_label(c).ok_or(())?;
        Ok(Piece::new(role, color))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = self.role.letter();
        match self.color {
            Color::Red => f.write_char(chr.to_ascii_uppercase()),
            Color::Black => f.write_char(chr),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// (row, col) delta; north is towards black's back rank.
    pub fn as_vector(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

pub static ORTHOGONALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Game status. `RedWins` and `BlackWins` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Playing,
    RedWins,
    BlackWins,
}

impl Status {
    pub fn win_for(color: Color) -> Status {
        match color {
            Color::Red => Status::RedWins,
            Color::Black => Status::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Status::Playing => None,
            Status::RedWins => Some(Color::Red),
            Status::BlackWins => Some(Color::Black),
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Status::Playing
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Playing => f.write_str("playing"),
            Status::RedWins => f.write_str("red wins"),
            Status::BlackWins => f.write_str("black wins"),
        }
    }
}
