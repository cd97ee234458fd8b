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

use crate::impls::tak::Direction;

/// A square of the board.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position {
            row,
            col,
        }
    }

    pub fn is_within_bounds(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// Returns the position `distance` squares away in `direction`, or `None` if
    /// that leaves the board.
    pub fn offset(&self, direction: Direction, distance: usize, board_size: usize) -> Option<Position> {
        let (dr, dc) = direction.to_offset();
        let row = self.row as isize + dr as isize * distance as isize;
        let col = self.col as isize + dc as isize * distance as isize;

        if row < 0 || col < 0 {
            return None;
        }

        let position = Position::new(row as usize, col as usize);
        if position.is_within_bounds(board_size) {
            Some(position)
        } else {
            None
        }
    }

    /// The orthogonally adjacent positions that are on the board.
    pub fn neighbors(&self, board_size: usize) -> impl Iterator<Item = Position> {
        let position = *self;
        Direction::ALL.iter().filter_map(move |&direction| position.offset(direction, 1, board_size))
    }

    pub fn is_corner(&self, board_size: usize) -> bool {
        let edge = board_size - 1;
        (self.row == 0 || self.row == edge) && (self.col == 0 || self.col == edge)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod test {
    use crate::impls::tak::Direction;
    use super::Position;

    #[test]
    fn test_offset() {
        let position = Position::new(1, 2);

        assert_eq!(position.offset(Direction::Up, 1, 3), Some(Position::new(0, 2)));
        assert_eq!(position.offset(Direction::Up, 2, 3), None);
        assert_eq!(position.offset(Direction::Down, 1, 3), Some(Position::new(2, 2)));
        assert_eq!(position.offset(Direction::Left, 2, 3), Some(Position::new(1, 0)));
        assert_eq!(position.offset(Direction::Right, 1, 3), None);
        assert_eq!(position.offset(Direction::Right, 1, 4), Some(Position::new(1, 3)));
        assert_eq!(position.offset(Direction::Left, 0, 3), Some(position));
    }

    #[test]
    fn test_neighbors() {
        let corner = Position::new(0, 0).neighbors(5).collect::<Vec<_>>();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        assert_eq!(Position::new(2, 2).neighbors(5).count(), 4);
        assert_eq!(Position::new(4, 2).neighbors(5).count(), 3);
    }

    #[test]
    fn test_bounds_and_corners() {
        assert!(Position::new(4, 4).is_within_bounds(5));
        assert!(!Position::new(5, 0).is_within_bounds(5));

        assert!(Position::new(0, 4).is_corner(5));
        assert!(Position::new(4, 4).is_corner(5));
        assert!(!Position::new(0, 2).is_corner(5));
        assert!(Position::new(2, 2).is_corner(3));
        assert!(!Position::new(1, 2).is_corner(3));
    }
}
