// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `moves` module contains the definition of a Move. Moves are produced
//! by the move generator for a single piece and consumed right away, either
//! by a legality lookup or by applying them to a game.
use std::fmt;

use crate::types::Square;

/// A move from one square to another. The capture flag is set by the move
/// generator iff the destination held an enemy piece when the move was
/// generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    source: Square,
    destination: Square,
    capture: bool,
}

impl Move {
    /// Constructs a new quiet move from the source square to the destination
    /// square.
    pub fn quiet(source: Square, destination: Square) -> Move {
        Move {
            source,
            destination,
            capture: false,
        }
    }

    /// Constructs a new capture move from the source square to the destination
    /// square.
    pub fn capture(source: Square, destination: Square) -> Move {
        Move {
            source,
            destination,
            capture: true,
        }
    }

    pub fn source(self) -> Square {
        self.source
    }

    pub fn destination(self) -> Square {
        self.destination
    }

    pub fn is_capture(self) -> bool {
        self.capture
    }

    pub fn is_quiet(self) -> bool {
        !self.capture
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.destination)?;
        if self.capture {
            write!(f, "x")?;
        }

        Ok(())
    }
}
