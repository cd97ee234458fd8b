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
// Copyright 2016 Chris Foster
//

use crate::impls::tak::{Color, Objective, Position};
use crate::impls::tak::resolution::Resolution;
use crate::impls::tak::state::State;

impl State {
    pub fn objective(&self) -> Objective {
        Objective::from(self.resolve())
    }

    pub(crate) fn resolve(&self) -> Option<Resolution> {
        for &color in &[Color::White, Color::Black] {
            if self.has_road(color) {
                return Some(Resolution::Road(color));
            }
        }

        if !self.is_full() {
            return None;
        }

        let white = self.count_flats(Color::White);
        let black = self.count_flats(Color::Black);

        if white > black {
            Some(Resolution::Flat(Color::White))
        } else if black > white {
            Some(Resolution::Flat(Color::Black))
        } else {
            Some(Resolution::Draw)
        }
    }

    /// Returns true if the space is controlled by `color` with a piece that can be part of a road.
    pub fn is_road(&self, position: Position, color: Color) -> bool {
        match self.top(position) {
            Some(piece) => piece.get_color() == color && piece.is_road(),
            None => false,
        }
    }

    /// Returns true if `color` connects the left and right edges, or the top and bottom edges.
    pub fn has_road(&self, color: Color) -> bool {
        let board_size = self.board_size();
        let edge = board_size - 1;

        self.connects(color, (0..board_size).map(|row| Position::new(row, 0)), |p| p.col == edge) ||
        self.connects(color, (0..board_size).map(|col| Position::new(0, col)), |p| p.row == edge)
    }

    /// Depth-first search over the road spaces of `color` reachable from `seeds`.
    fn connects<I, F>(&self, color: Color, seeds: I, reached: F) -> bool where
        I: Iterator<Item = Position>,
        F: Fn(Position) -> bool {
        let board_size = self.board_size();
        let mut visited = vec![false; board_size * board_size];

        let mut stack = seeds.filter(|&seed| self.is_road(seed, color)).collect::<Vec<_>>();
        for seed in &stack {
            visited[seed.row * board_size + seed.col] = true;
        }

        while let Some(position) = stack.pop() {
            if reached(position) {
                return true;
            }

            for neighbor in position.neighbors(board_size) {
                let visit = &mut visited[neighbor.row * board_size + neighbor.col];
                if !*visit && self.is_road(neighbor, color) {
                    *visit = true;
                    stack.push(neighbor);
                }
            }
        }

        false
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().all(|row| row.iter().all(|stack| !stack.is_empty()))
    }

    /// The number of spaces controlled by a flatstone of `color`.
    pub fn count_flats(&self, color: Color) -> usize {
        self.board.iter().flat_map(|row| row.iter()).filter(|stack| match stack.last() {
            Some(piece) => piece.is_flatstone() && piece.get_color() == color,
            None => false,
        }).count()
    }
}

#[cfg(test)]
mod test {
    use crate::impls::tak::*;
    use crate::state::State as StateTrait;

    #[test]
    fn test_column_road() {
        let state = State::from_tps("1,x2/1,x2/1,2,2 2 3").unwrap();

        assert!(state.has_road(Color::White));
        assert!(!state.has_road(Color::Black));
        assert_eq!(state.objective(), Objective::WhiteWin);
        assert_eq!(state.check_resolution(), Some(Resolution::Road(Color::White)));
    }

    #[test]
    fn test_lone_column_road() {
        let state = State::from_tps("1,x2/1,x2/1,x2 2 2").unwrap();

        assert!(state.has_road(Color::White));
        assert!(!state.is_full());
        assert_eq!(state.objective(), Objective::WhiteWin);
    }

    #[test]
    fn test_winding_road() {
        let state = State::from_tps("x5/2,2,x3/x,2C,x,2,2/x,2,2,2,x/x5 1 8").unwrap();
        assert!(state.has_road(Color::Black));
        assert_eq!(state.objective(), Objective::BlackWin);
    }

    #[test]
    fn test_walls_break_roads() {
        let state = State::from_tps("x3/1,1S,1/2,2,x 2 3").unwrap();
        assert!(!state.has_road(Color::White));
        assert_eq!(state.objective(), Objective::NotFinished);
    }

    #[test]
    fn test_corner_to_corner_is_not_a_road() {
        // Touches the left and bottom edges only
        let state = State::from_tps("x3/1,1,x/2,1,2 2 3").unwrap();
        assert!(!state.has_road(Color::White));
    }

    #[test]
    fn test_both_roads_favor_white() {
        let state = State::from_tps("1,1,1/x3/2,2,2 1 4").unwrap();
        assert!(state.has_road(Color::Black));
        assert_eq!(state.objective(), Objective::WhiteWin);
    }

    #[test]
    fn test_flat_win() {
        let state = State::from_tps("1,2,1/2,1S,2/1,2,1 2 5").unwrap();
        assert!(state.is_full());
        assert_eq!(state.count_flats(Color::White), 4);
        assert_eq!(state.count_flats(Color::Black), 4);
        assert_eq!(state.objective(), Objective::Draw);

        let state = State::from_tps("1,2,1/2,1,2/1,2,1 2 5").unwrap();
        assert_eq!(state.check_resolution(), Some(Resolution::Flat(Color::White)));
        assert_eq!(state.objective(), Objective::WhiteWin);
    }

    #[test]
    fn test_not_finished() {
        assert_eq!(State::new(6).objective(), Objective::NotFinished);
        assert!(!State::new(6).is_full());
    }
}
