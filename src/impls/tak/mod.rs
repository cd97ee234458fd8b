//
// This file is part of tak_ai.
//
// tak_ai is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tak_ai is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tak_ai. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

//! The game of [tak](http://cheapass.com/tak/).
//!
//! Boards are indexed `board[row][col]`, with row 0 at the top and column 0 on the left.

use crate::analysis::search::{NegamaxSearch, Search, SearchOptions};

/// The colors of the players.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn flip(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The player's tag in external records: 1 for white, -1 for black.
    pub fn to_sign(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn from_sign(sign: i8) -> Option<Color> {
        match sign {
            1 => Some(Color::White),
            -1 => Some(Color::Black),
            _ => None,
        }
    }

    pub fn to_code(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// The types of pieces.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Piece {
    Flatstone(Color),
    StandingStone(Color),
    Capstone(Color),
}

impl Piece {
    pub fn get_color(&self) -> Color {
        match *self {
            Piece::Flatstone(color) |
            Piece::StandingStone(color) |
            Piece::Capstone(color) => color,
        }
    }

    pub fn is_flatstone(&self) -> bool {
        matches!(*self, Piece::Flatstone(_))
    }

    pub fn is_standing_stone(&self) -> bool {
        matches!(*self, Piece::StandingStone(_))
    }

    pub fn is_capstone(&self) -> bool {
        matches!(*self, Piece::Capstone(_))
    }

    /// Flatstones and capstones contribute to roads.
    pub fn is_road(&self) -> bool {
        !self.is_standing_stone()
    }

    /// The two-character code of the piece, color then kind: `wf`, `bs`, `wc`, ...
    pub fn to_code(&self) -> String {
        let kind = match *self {
            Piece::Flatstone(_) => 'f',
            Piece::StandingStone(_) => 'w',
            Piece::Capstone(_) => 'c',
        };

        let mut code = String::with_capacity(2);
        code.push(self.get_color().to_code());
        code.push(kind);
        code
    }

    pub fn from_code(code: &str) -> Option<Piece> {
        let mut chars = code.chars();

        let color = match chars.next() {
            Some('w') => Color::White,
            Some('b') => Color::Black,
            _ => return None,
        };

        let piece = match chars.next() {
            Some('f') => Piece::Flatstone(color),
            Some('w') => Piece::StandingStone(color),
            Some('c') => Piece::Capstone(color),
            _ => return None,
        };

        if chars.next().is_some() {
            return None;
        }

        Some(piece)
    }
}

/// The slidable directions.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in move generation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (row, column) step of the direction.
    pub fn to_offset(&self) -> (i8, i8) {
        match *self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_offset(offset: (i8, i8)) -> Option<Direction> {
        Direction::ALL.iter().cloned().find(|direction| direction.to_offset() == offset)
    }
}

/// Creates the state at the start of a game on a `board_size` board.
///
/// # Panics
/// Panics if `board_size` is not between 3 and 8.
pub fn new_game(board_size: usize) -> State {
    State::new(board_size)
}

/// Returns every legal ply of `state`, in generation order.  There are none once
/// the game is over.
pub fn legal_moves(state: &State) -> Vec<Ply> {
    state.legal_plies()
}

/// Executes a ply that is known to be legal in `state`.
pub fn apply(state: &State, ply: &Ply) -> State {
    ply.play(state)
}

pub fn objective(state: &State) -> Objective {
    state.objective()
}

/// Searches `depth` plies deep and returns the best ply for the player to move,
/// or `None` if `depth` is 0 or there is nothing to play.
pub fn search(state: &State, depth: u8, tier: Tier, pruning: bool, caching: bool) -> Option<Ply> {
    let mut search = NegamaxSearch::new(evaluator::StaticEvaluator::new(tier), SearchOptions {
        depth,
        pruning,
        caching,
        ..SearchOptions::default()
    });

    search.search(state).ply
}

pub use self::partition::{partitions, partitions_with_leading_zero};
pub use self::ply::Ply;
pub use self::position::Position;
pub use self::resolution::{Objective, Resolution};
pub use self::state::{evaluator, piece_counts, Evaluation, State, Tier, Weights};

pub mod partition;
mod ply;
mod position;
mod resolution;
#[cfg(feature = "with_serde")]
pub mod serialization;
mod state;
