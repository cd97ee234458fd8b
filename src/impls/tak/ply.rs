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

use std::fmt;

use crate::impls::tak::{Direction, Position};
use crate::ply;

/// Represents either a piece placement or a slide.
///
/// Legality is checked with `Ply::is_valid` and plies are executed with `Ply::play`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Ply {
    /// Placement of a flatstone in an empty space.
    PlaceFlat {
        position: Position,
    },
    /// Placement of a standing stone in an empty space.
    PlaceWall {
        position: Position,
    },
    /// Placement of a capstone in an empty space.
    PlaceCap {
        position: Position,
    },
    /// Move of a lone stone onto the adjacent space.
    Slide {
        position: Position,
        direction: Direction,
    },
    /// Move of a whole stack.  `partition[i]` stones are dropped `i` spaces from
    /// `position`, bottom stones first, so `partition[0]` stones stay behind.
    SplitSlide {
        position: Position,
        direction: Direction,
        partition: Vec<u8>,
    },
}

impl Ply {
    /// The space the ply places on or moves from.
    pub fn get_position(&self) -> Position {
        match *self {
            Ply::PlaceFlat { position } |
            Ply::PlaceWall { position } |
            Ply::PlaceCap { position } |
            Ply::Slide { position, .. } |
            Ply::SplitSlide { position, .. } => position,
        }
    }

    pub fn is_placement(&self) -> bool {
        matches!(*self, Ply::PlaceFlat { .. } | Ply::PlaceWall { .. } | Ply::PlaceCap { .. })
    }
}

impl ply::Ply for Ply { }

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn arrow(direction: Direction) -> char {
            match direction {
                Direction::Up => '^',
                Direction::Down => 'v',
                Direction::Left => '<',
                Direction::Right => '>',
            }
        }

        match *self {
            Ply::PlaceFlat { position } => write!(f, "F{}", position),
            Ply::PlaceWall { position } => write!(f, "S{}", position),
            Ply::PlaceCap { position } => write!(f, "C{}", position),
            Ply::Slide { position, direction } => write!(f, "{}{}", position, arrow(direction)),
            Ply::SplitSlide { position, direction, ref partition } => {
                write!(f, "{}{}[", position, arrow(direction))?;
                for (index, part) in partition.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", part)?;
                }
                write!(f, "]")
            },
        }
    }
}
