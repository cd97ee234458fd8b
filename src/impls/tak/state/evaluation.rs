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

use std::cmp;

use crate::analysis;
use crate::impls::tak::{Color, Piece, Position};
use crate::impls::tak::state::State;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Evaluation(pub i32);

prepare_evaluation_tuple!(Evaluation);

const WIN: i32 = 1_000_000_000;

impl analysis::Evaluation for Evaluation {
    fn null() -> Evaluation { Evaluation(0) }
    fn win() -> Evaluation { Evaluation(WIN) }
    fn max() -> Evaluation { Evaluation(i32::MAX) }
    fn is_win(&self) -> bool { self.0 >= WIN }
}

/// The strength of the static evaluation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "lowercase"))]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub fn weights(&self) -> &'static Weights {
        match *self {
            Tier::Easy => &EASY,
            Tier::Medium => &MEDIUM,
            Tier::Hard => &HARD,
        }
    }
}

/// Per-feature multipliers.  Each feature is measured for both players and the
/// difference taken from the perspective of the player to move.
#[derive(Debug)]
pub struct Weights {
    pub flats: i32,
    pub corners: i32,
    pub walls: i32,
    pub captives: i32,
    pub road: i32,
    pub influence: i32,
}

const EASY: Weights = Weights {
    flats:      10,
    corners:     0,
    walls:       0,
    captives:    0,
    road:        0,
    influence:   0,
};

const MEDIUM: Weights = Weights {
    flats:      10,
    corners:     5,
    walls:      -4,
    captives:    3,
    road:        0,
    influence:   0,
};

const HARD: Weights = Weights {
    flats:      10,
    corners:     5,
    walls:      -6,
    captives:    5,
    road:        8,
    influence:   2,
};

/// Weighted sum of the features of `state` for `color`.  Features with a zero
/// weight are skipped.
pub(crate) fn score(state: &State, color: Color, weights: &Weights) -> i32 {
    let mut score = weights.flats * state.count_flats(color) as i32;

    if weights.corners != 0 {
        score += weights.corners * corners(state, color);
    }
    if weights.walls != 0 {
        score += weights.walls * weak_walls(state, color);
    }
    if weights.captives != 0 {
        score += weights.captives * captives(state, color);
    }
    if weights.road != 0 {
        score += weights.road * longest_line(state, color);
    }
    if weights.influence != 0 {
        score += weights.influence * influence(state, color);
    }

    score
}

fn controls(state: &State, position: Position, color: Color) -> bool {
    match state.top(position) {
        Some(piece) => piece.get_color() == color,
        None => false,
    }
}

pub(crate) fn corners(state: &State, color: Color) -> i32 {
    let edge = state.board_size() - 1;

    [(0, 0), (0, edge), (edge, 0), (edge, edge)].iter()
        .filter(|&&(row, col)| controls(state, Position::new(row, col), color))
        .count() as i32
}

/// Standing stones with no friendly neighbor, or next to an enemy capstone.
pub(crate) fn weak_walls(state: &State, color: Color) -> i32 {
    let board_size = state.board_size();

    state.positions()
        .filter(|&position| state.top(position) == Some(Piece::StandingStone(color)))
        .filter(|&position| {
            let isolated = !position.neighbors(board_size).any(|neighbor| controls(state, neighbor, color));
            let threatened = position.neighbors(board_size)
                .any(|neighbor| state.top(neighbor) == Some(Piece::Capstone(color.flip())));
            isolated || threatened
        })
        .count() as i32
}

/// Enemy pieces buried under stacks controlled by `color`.
pub(crate) fn captives(state: &State, color: Color) -> i32 {
    state.board.iter().flat_map(|row| row.iter()).map(|stack| match stack.split_last() {
        Some((top, rest)) if top.get_color() == color => {
            rest.iter().filter(|piece| piece.get_color() != color).count() as i32
        },
        _ => 0,
    }).sum()
}

/// The most road spaces of `color` in any single row or column.
pub(crate) fn longest_line(state: &State, color: Color) -> i32 {
    let board_size = state.board_size();
    let mut best = 0;

    for i in 0..board_size {
        let row = (0..board_size).filter(|&col| state.is_road(Position::new(i, col), color)).count();
        let col = (0..board_size).filter(|&row| state.is_road(Position::new(row, i), color)).count();
        best = cmp::max(best, cmp::max(row, col));
    }

    best as i32
}

/// Spaces that are empty or under an enemy flatstone, next to a lone flatstone of `color`.
pub(crate) fn influence(state: &State, color: Color) -> i32 {
    let board_size = state.board_size();
    let mut influenced = vec![false; board_size * board_size];

    for position in state.positions() {
        match *state.stack(position) {
            [Piece::Flatstone(owner)] if owner == color => (),
            _ => continue,
        }

        for neighbor in position.neighbors(board_size) {
            match state.top(neighbor) {
                None => (),
                Some(Piece::Flatstone(owner)) if owner != color => (),
                _ => continue,
            }
            influenced[neighbor.row * board_size + neighbor.col] = true;
        }
    }

    influenced.iter().filter(|&&influenced| influenced).count() as i32
}

#[cfg(test)]
mod test {
    use crate::analysis::Evaluation as EvaluationTrait;
    use crate::impls::tak::{Color, State};
    use super::*;

    #[test]
    fn test_evaluation_bounds() {
        assert!(Evaluation::win().is_win());
        assert!(Evaluation::lose().is_lose());
        assert!(!Evaluation(999_999_999).is_win());
        assert!(<Evaluation as EvaluationTrait>::min() < Evaluation::lose());
        assert!(<Evaluation as EvaluationTrait>::max() > Evaluation::win());
        assert_eq!(-<Evaluation as EvaluationTrait>::min(), <Evaluation as EvaluationTrait>::max());
    }

    #[test]
    fn test_corners() {
        let state = State::from_tps("1,x,2/x3/2S,x,1 1 4").unwrap();
        assert_eq!(corners(&state, Color::White), 2);
        assert_eq!(corners(&state, Color::Black), 2);
    }

    #[test]
    fn test_weak_walls() {
        // The wall at (0, 0) is alone, the wall at (2, 2) has a neighbor, and the
        // wall at (4, 4) faces a capstone
        let state = State::from_tps("1S,x4/x5/x2,1S,1,x/x4,2C/x3,1,1S 2 6").unwrap();
        assert_eq!(weak_walls(&state, Color::White), 2);
        assert_eq!(weak_walls(&state, Color::Black), 0);
    }

    #[test]
    fn test_captives() {
        let state = State::from_tps("x3/x,2112,x/12,x,1 1 5").unwrap();
        assert_eq!(captives(&state, Color::Black), 3);
        assert_eq!(captives(&state, Color::White), 0);
    }

    #[test]
    fn test_longest_line() {
        let state = State::from_tps("1,1,1S,x2/x,1C,x3/x,1,x3/x5/x5 2 4").unwrap();
        assert_eq!(longest_line(&state, Color::White), 3);
        assert_eq!(longest_line(&state, Color::Black), 0);
    }

    #[test]
    fn test_influence() {
        // (1, 0) and (0, 2) are empty and (1, 1) holds a black flatstone; the
        // stack at (2, 2) exerts none
        let state = State::from_tps("1,1,x/x,2,x/x2,21 2 4").unwrap();
        assert_eq!(influence(&state, Color::White), 3);
    }

    #[test]
    fn test_tiers() {
        let state = State::from_tps("1,x2/x,2S,x/2,x,1 1 3").unwrap();

        assert_eq!(score(&state, Color::White, Tier::Easy.weights()), 20);
        assert_eq!(score(&state, Color::Black, Tier::Easy.weights()), 10);
        // Two corners for white; one corner and an isolated wall for black
        assert_eq!(score(&state, Color::White, Tier::Medium.weights()), 30);
        assert_eq!(score(&state, Color::Black, Tier::Medium.weights()), 11);
    }
}
