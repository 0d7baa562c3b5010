// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented front end over `Game`. Squares are given as a row and a
//! column, both plain integers:
//!
//! ```text
//! board              print the board
//! moves R C          list the moves of the piece on (R, C)
//! click R C          select a piece, or move the selected piece there
//! move R C R C       move a piece
//! undo               take back the last move
//! restart            start over from the opening
//! state              print the board and game state as JSON
//! quit
//! ```
use std::io::{self, BufRead, Write};

use crate::game::{Click, Game, MoveOutcome};
use crate::types::Square;

pub struct Console {
    game: Game,
    json: bool,
}

impl Console {
    /// Creates a console over a fresh game. With `json` set, the state is
    /// echoed as JSON after every applied move.
    pub fn new(json: bool) -> Console {
        Console::with_game(Game::new(), json)
    }

    pub fn with_game(game: Game, json: bool) -> Console {
        Console { game, json }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run<R, W>(mut self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            let components: Vec<_> = line.split_whitespace().collect();
            match components.split_first().unwrap_or((&"", &[])) {
                (&"", []) => {}
                (&"board", []) => write!(&mut writer, "{}", self.game.board())?,
                (&"moves", args) => self.handle_moves(&mut writer, args)?,
                (&"click", args) => self.handle_click(&mut writer, args)?,
                (&"move", args) => self.handle_move(&mut writer, args)?,
                (&"undo", []) => self.handle_undo(&mut writer)?,
                (&"restart", []) => {
                    self.game.restart();
                    writeln!(&mut writer, "ok")?;
                }
                (&"state", []) => self.handle_state(&mut writer)?,
                (&"quit", []) => break,
                _ => {
                    debug!("unrecognized command: {}", line);
                    writeln!(&mut writer, "unrecognized command")?;
                }
            }

            writer.flush()?;
        }

        Ok(())
    }

    fn handle_moves<W: Write>(&mut self, w: &mut W, args: &[&str]) -> io::Result<()> {
        let square = match parse_squares(args) {
            Some(ref squares) if squares.len() == 1 => squares[0],
            _ => return writeln!(w, "invalid square"),
        };

        let moves = self.game.legal_moves(square);
        if moves.is_empty() {
            return writeln!(w, "no moves");
        }

        let text: Vec<_> = moves.iter().map(|mov| mov.to_string()).collect();
        writeln!(w, "{}", text.join(" "))
    }

    fn handle_click<W: Write>(&mut self, w: &mut W, args: &[&str]) -> io::Result<()> {
        let square = match parse_squares(args) {
            Some(ref squares) if squares.len() == 1 => squares[0],
            _ => return writeln!(w, "invalid square"),
        };

        match self.game.click(square) {
            Click::Selected(selection) => writeln!(
                w,
                "selected {} at {}",
                selection.piece.label(),
                selection.square
            ),
            Click::Attempted(outcome) => self.report_outcome(w, outcome),
            Click::Ignored => writeln!(w, "ignored"),
        }
    }

    fn handle_move<W: Write>(&mut self, w: &mut W, args: &[&str]) -> io::Result<()> {
        let (source, target) = match parse_squares(args) {
            Some(ref squares) if squares.len() == 2 => (squares[0], squares[1]),
            _ => return writeln!(w, "invalid move"),
        };

        let outcome = self.game.attempt_move(source, target);
        self.report_outcome(w, outcome)
    }

    fn handle_undo<W: Write>(&mut self, w: &mut W) -> io::Result<()> {
        match self.game.undo() {
            Some(mov) => writeln!(w, "took back {}", mov),
            None => writeln!(w, "nothing to undo"),
        }
    }

    fn handle_state<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let board: Vec<Vec<Option<char>>> = self
            .game
            .board()
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(|piece| piece.label())).collect())
            .collect();
        let value = json!({
            "board": board,
            "state": self.game.state(),
        });

        serde_json::to_writer(&mut *w, &value)?;
        writeln!(w)
    }

    fn report_outcome<W: Write>(&self, w: &mut W, outcome: MoveOutcome) -> io::Result<()> {
        if !outcome.applied {
            return writeln!(w, "illegal move");
        }

        match outcome.captured_piece {
            Some(piece) => writeln!(w, "ok, captured {}", piece.label())?,
            None => writeln!(w, "ok")?,
        }

        let to_move = self.game.side_to_move();
        if outcome.new_status.is_terminal() {
            writeln!(w, "game over: {}", outcome.new_status)?;
        } else if self.game.is_in_check(to_move) {
            writeln!(w, "{} is in check", to_move)?;
        }

        if self.json {
            self.handle_state(w)?;
        }

        Ok(())
    }
}

// Parses pairs of integers into squares. None if the count is odd, a
// component is not a number, or a square lies off the board.
fn parse_squares(args: &[&str]) -> Option<Vec<Square>> {
    if args.is_empty() || args.len() % 2 != 0 {
        return None;
    }

    args.chunks(2)
        .map(|pair| {
            let row = pair[0].parse::<i8>().ok()?;
            let col = pair[1].parse::<i8>().ok()?;
            Square::new(row, col).ok()
        })
        .collect()
}
