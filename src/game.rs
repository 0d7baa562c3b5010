// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game state machine: whose turn it is, what is selected, what has been
//! captured and whether the game is over. Everything a front end needs goes
//! through `Game`; illegal requests are answered with "not applied" and leave
//! the game untouched.
use crate::board::Board;
use crate::check;
use crate::move_generator::{MoveGenerator, MoveVec};
use crate::moves::Move;
use crate::types::{Color, Piece, Square, Status, TableIndex};

/// The currently selected piece and the square it stands on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
}

/// Trophy lists, keyed by the color that made the captures, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CapturedPieces {
    pub red: Vec<Piece>,
    pub black: Vec<Piece>,
}

/// A read-only snapshot of everything but the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub current_player: Color,
    pub status: Status,
    pub captured_pieces: CapturedPieces,
    pub selection: Option<Selection>,
}

/// The answer to a move request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub applied: bool,
    pub captured_piece: Option<Piece>,
    pub new_status: Status,
}

impl MoveOutcome {
    fn rejected(status: Status) -> MoveOutcome {
        MoveOutcome {
            applied: false,
            captured_piece: None,
            new_status: status,
        }
    }
}

/// What a click on a square turned into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Click {
    /// One of the side to move's pieces is now selected.
    Selected(Selection),
    /// A move of the selected piece to the clicked square was attempted.
    Attempted(MoveOutcome),
    /// Nothing happened.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: Status,
    selection: Option<Selection>,
    captured: [Vec<Piece>; 2],
    history: Vec<(Move, Option<Piece>)>,
}

//
// Construction and state getters
//

impl Game {
    /// Starts a game from the opening layout with red to move.
    pub fn new() -> Game {
        info!("starting new game");
        Game::with_board(Board::opening(), Color::Red)
    }

    /// Starts a game from an arbitrary position. The status is evaluated
    /// immediately, so a position lacking a general starts out finished.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        info!("starting game from custom position, {} to move", side_to_move);
        Game::with_board(board, side_to_move)
    }

    fn with_board(board: Board, side_to_move: Color) -> Game {
        let status = check::evaluate(&board, side_to_move);
        Game {
            board,
            side_to_move,
            status,
            selection: None,
            captured: [Vec::new(), Vec::new()],
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The pieces captured by `color`, in the order they were taken.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.as_index()]
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|&(mov, _)| mov)
    }

    pub fn state(&self) -> GameState {
        GameState {
            current_player: self.side_to_move,
            status: self.status,
            captured_pieces: CapturedPieces {
                red: self.captured_by(Color::Red).to_vec(),
                black: self.captured_by(Color::Black).to_vec(),
            },
            selection: self.selection,
        }
    }

    /// The moves of the piece on `square`, whichever color it is. Freshly
    /// generated on every call; an empty square has no moves.
    pub fn legal_moves(&self, square: Square) -> MoveVec {
        let mut moves = MoveVec::new();
        MoveGenerator::new().generate_moves(&self.board, square, &mut moves);
        moves
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        check::is_in_check(&self.board, color)
    }
}

//
// Transitions
//

impl Game {
    /// Selects the piece on `square` if it belongs to the side to move,
    /// replacing any prior selection. Returns whether a piece is now selected
    /// there.
    pub fn select(&mut self, square: Square) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move => {
                self.selection = Some(Selection { square, piece });
                true
            }
            _ => {
                debug!("ignoring selection of {}", square);
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Handles a click on a square the way a board front end would: a piece
    /// of the side to move is selected, and anything else is a move attempt
    /// for the current selection, if there is one.
    pub fn click(&mut self, square: Square) -> Click {
        if self.status.is_terminal() {
            return Click::Ignored;
        }

        if self.select(square) {
            if let Some(selection) = self.selection {
                return Click::Selected(selection);
            }
        }

        if self.selection.is_some() {
            Click::Attempted(self.attempt_selected_move(square))
        } else {
            Click::Ignored
        }
    }

    /// Attempts to move the selected piece to `target`. Without a selection,
    /// or when the target is not among the piece's moves, nothing changes and
    /// the selection is kept.
    pub fn attempt_selected_move(&mut self, target: Square) -> MoveOutcome {
        match self.selection {
            Some(selection) => self.attempt_move(selection.square, target),
            None => MoveOutcome::rejected(self.status),
        }
    }

    /// Attempts to move the piece on `source` to `target`. The piece must
    /// belong to the side to move and `target` must be one of its generated
    /// moves; otherwise the game is left exactly as it was.
    pub fn attempt_move(&mut self, source: Square, target: Square) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!("game is over ({}), ignoring move {}-{}", self.status, source, target);
            return MoveOutcome::rejected(self.status);
        }

        match self.board.piece_at(source) {
            Some(piece) if piece.color == self.side_to_move => {}
            _ => {
                debug!("no {} piece on {}", self.side_to_move, source);
                return MoveOutcome::rejected(self.status);
            }
        }

        let mov = match self
            .legal_moves(source)
            .iter()
            .find(|mov| mov.destination() == target)
        {
            Some(&mov) => mov,
            None => {
                debug!("illegal move {}-{}", source, target);
                return MoveOutcome::rejected(self.status);
            }
        };

        let captured_piece = self.apply_move(mov);
        MoveOutcome {
            applied: true,
            captured_piece,
            new_status: self.status,
        }
    }

    // Applies a generated move: relocates the piece, files any captured piece
    // under the mover, hands the turn over and re-evaluates the status.
    fn apply_move(&mut self, mov: Move) -> Option<Piece> {
        let mover = self.side_to_move;
        let captured = self
            .board
            .move_piece(mov.source(), mov.destination())
            .expect("invalid move: no piece at source square");
        debug_assert_eq!(mov.is_capture(), captured.is_some());

        if let Some(piece) = captured {
            self.captured[mover.as_index()].push(piece);
        }

        self.history.push((mov, captured));
        self.selection = None;
        self.side_to_move = mover.toggle();
        self.status = check::evaluate(&self.board, self.side_to_move);

        info!("{} plays {}", mover, mov);
        if self.is_in_check(self.side_to_move) {
            info!("{} is in check", self.side_to_move);
        }
        if self.status.is_terminal() {
            info!("game over: {}", self.status);
        }

        captured
    }

    /// Takes back the last move, restoring any captured piece. Returns the
    /// move taken back, or None if no move has been played.
    pub fn undo(&mut self) -> Option<Move> {
        let (mov, captured) = self.history.pop()?;
        let mover = self.side_to_move.toggle();
        self.board
            .move_piece(mov.destination(), mov.source())
            .expect("invalid undo: moved piece missing");
        if let Some(piece) = captured {
            self.board
                .add_piece(mov.destination(), piece)
                .expect("invalid undo: destination still occupied");
            self.captured[mover.as_index()].pop();
        }

        self.side_to_move = mover;
        self.status = Status::Playing;
        self.selection = None;
        info!("took back {}", mov);
        Some(mov)
    }

    /// Returns to the opening layout with red to move, from any state.
    pub fn restart(&mut self) {
        info!("restarting game");
        *self = Game::with_board(Board::opening(), Color::Red);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
