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

use std::mem;

use crate::impls::tak::{Color, Direction, Piece, Ply, Position};
use crate::impls::tak::resolution::Resolution;
use crate::impls::tak::state::{index, State};
use crate::state;

impl state::State for State {
    type Ply = Ply;
    type Resolution = Resolution;

    fn get_player(&self) -> u8 {
        index(self.current_player) as u8
    }

    fn play(&self, ply: &Ply) -> State {
        ply.play(self)
    }

    fn execute_ply(&self, ply: &Ply) -> Result<State, String> {
        if self.resolve().is_some() {
            return Err(String::from("The game is over."));
        }

        match ply.validate(self) {
            Ok(()) => Ok(ply.play(self)),
            Err(reason) => Err(format!("{} {}", ply, reason)),
        }
    }

    fn check_resolution(&self) -> Option<Resolution> {
        self.resolve()
    }
}

impl Ply {
    /// Returns true if the ply may be played in `state`, regardless of whether the game is over.
    pub fn is_valid(&self, state: &State) -> bool {
        self.validate(state).is_ok()
    }

    /// Returns the state after the ply.  `state` is left untouched.
    ///
    /// # Panics
    /// Debug builds panic if the ply is not valid in `state`.
    pub fn play(&self, state: &State) -> State {
        debug_assert!(self.is_valid(state), "Illegal ply {} in state: {}", self, state);

        let mut next = state.clone();
        let color = state.current_player;

        match *self {
            Ply::PlaceFlat { position } => {
                // Each player's opening placement is one of the opponent's flatstones
                let owner = if state.first_turn { color.flip() } else { color };

                next.flatstones[index(owner)] -= 1;
                next.board[position.row][position.col].push(Piece::Flatstone(owner));

                if state.first_turn && color == Color::Black {
                    next.first_turn = false;
                }
            },
            Ply::PlaceWall { position } => {
                next.flatstones[index(color)] -= 1;
                next.board[position.row][position.col].push(Piece::StandingStone(color));
            },
            Ply::PlaceCap { position } => {
                next.capstones[index(color)] -= 1;
                next.board[position.row][position.col].push(Piece::Capstone(color));
            },
            Ply::Slide { position, direction } => {
                let target = self.square(position, direction, 1, state.board_size());

                let piece = next.board[position.row][position.col].pop();
                let stack = &mut next.board[target.row][target.col];
                flatten(stack);
                stack.extend(piece);
            },
            Ply::SplitSlide { position, direction, ref partition } => {
                let carried = mem::take(&mut next.board[position.row][position.col]);
                let mut carried = carried.into_iter();

                for (distance, &count) in partition.iter().enumerate() {
                    if count == 0 {
                        continue;
                    }

                    let target = self.square(position, direction, distance, state.board_size());
                    let stack = &mut next.board[target.row][target.col];
                    flatten(stack);
                    stack.extend(carried.by_ref().take(count as usize));
                }
            },
        }

        next.current_player = color.flip();
        next
    }

    /// Checks the ply against the rules, returning the reason it is illegal.
    pub(crate) fn validate(&self, state: &State) -> Result<(), &'static str> {
        let board_size = state.board_size();
        let color = state.current_player;

        if !self.get_position().is_within_bounds(board_size) {
            return Err("is off the board.");
        }

        if state.first_turn && !self.is_placement() {
            return Err("cannot move a piece on the first turn.");
        }

        match *self {
            Ply::PlaceFlat { position } => {
                let owner = if state.first_turn { color.flip() } else { color };
                check_placement(state, position, state.flatstones(owner))
            },
            Ply::PlaceWall { position } => {
                if state.first_turn {
                    return Err("must place a flatstone on the first turn.");
                }
                check_placement(state, position, state.flatstones(color))
            },
            Ply::PlaceCap { position } => {
                if state.first_turn {
                    return Err("must place a flatstone on the first turn.");
                }
                check_placement(state, position, state.capstones(color))
            },
            Ply::Slide { position, direction } => {
                let stack = state.stack(position);
                if stack.len() != 1 {
                    return Err("must move a lone piece.");
                }

                let piece = stack[0];
                if piece.get_color() != color {
                    return Err("cannot move an opponent's piece.");
                }

                let target = match position.offset(direction, 1, board_size) {
                    Some(target) => target,
                    None => return Err("slides off the board."),
                };

                check_landing(state.top(target), &[piece])
            },
            Ply::SplitSlide { position, direction, ref partition } => {
                let stack = state.stack(position);
                if stack.len() < 2 {
                    return Err("must move a stack of at least two pieces.");
                }

                if partition.len() < 2 {
                    return Err("must drop pieces beyond its own space.");
                }

                if partition.iter().skip(1).any(|&count| count == 0) {
                    return Err("may only skip its own space.");
                }

                if partition.iter().map(|&count| count as usize).sum::<usize>() != stack.len() {
                    return Err("must drop exactly the pieces of the stack.");
                }

                match stack.last() {
                    Some(top) if top.get_color() == color => (),
                    _ => return Err("cannot move an opponent's stack."),
                }

                let mut dropped = 0;
                for (distance, &count) in partition.iter().enumerate() {
                    let group = &stack[dropped..dropped + count as usize];
                    dropped += count as usize;

                    let target = match position.offset(direction, distance, board_size) {
                        Some(target) => target,
                        None => return Err("slides off the board."),
                    };

                    if distance > 0 {
                        check_landing(state.top(target), group)?;
                    }
                }

                Ok(())
            },
        }
    }

    fn square(&self, position: Position, direction: Direction, distance: usize, board_size: usize) -> Position {
        match position.offset(direction, distance, board_size) {
            Some(target) => target,
            None => panic!("Illegal ply {}: slides off the board.", self),
        }
    }
}

fn check_placement(state: &State, position: Position, reserve: u8) -> Result<(), &'static str> {
    if !state.stack(position).is_empty() {
        Err("cannot place a piece in an occupied space.")
    } else if reserve == 0 {
        Err("has no pieces left to place.")
    } else {
        Ok(())
    }
}

/// Checks whether `group` may be dropped onto a space controlled by `top`.
fn check_landing(top: Option<Piece>, group: &[Piece]) -> Result<(), &'static str> {
    match top {
        Some(Piece::Capstone(_)) => Err("cannot slide onto a capstone."),
        Some(Piece::StandingStone(_)) => match *group {
            [Piece::Capstone(_)] => Ok(()),
            _ => Err("cannot slide onto a standing stone."),
        },
        _ => Ok(()),
    }
}

/// Flattens a standing stone on top of `stack`.
fn flatten(stack: &mut Vec<Piece>) {
    if let Some(top) = stack.last_mut() {
        if let Piece::StandingStone(color) = *top {
            *top = Piece::Flatstone(color);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::impls::tak::*;
    use crate::state::State as StateTrait;

    fn total_pieces(state: &State) -> usize {
        state.board.iter().flat_map(|row| row.iter()).map(|stack| stack.len()).sum()
    }

    #[test]
    fn test_opening_swap() {
        let state = State::new(5);
        let next = Ply::PlaceFlat { position: Position::new(0, 0) }.play(&state);

        assert_eq!(next.top(Position::new(0, 0)), Some(Piece::Flatstone(Color::Black)));
        assert_eq!(next.flatstones(Color::White), 21);
        assert_eq!(next.flatstones(Color::Black), 20);
        assert_eq!(next.current_player, Color::Black);
        assert!(next.first_turn);

        let next = Ply::PlaceFlat { position: Position::new(4, 4) }.play(&next);

        assert_eq!(next.top(Position::new(4, 4)), Some(Piece::Flatstone(Color::White)));
        assert_eq!(next.flatstones(Color::White), 20);
        assert_eq!(next.current_player, Color::White);
        assert!(!next.first_turn);
    }

    #[test]
    fn test_opening_restrictions() {
        let state = State::new(5);
        let position = Position::new(2, 2);

        assert!(!Ply::PlaceWall { position }.is_valid(&state));
        assert!(!Ply::PlaceCap { position }.is_valid(&state));
        assert!(Ply::PlaceFlat { position }.is_valid(&state));

        let state = State::from_tps("x5/x5/x2,2,x2/x5/x5 2 1").unwrap();
        assert!(state.first_turn);
        assert_eq!(
            Ply::Slide { position, direction: Direction::Up }.validate(&state),
            Err("cannot move a piece on the first turn."),
        );
        assert_eq!(
            Ply::SplitSlide { position, direction: Direction::Left, partition: vec![0, 1] }.validate(&state),
            Err("cannot move a piece on the first turn."),
        );
    }

    #[test]
    fn test_placement() {
        let state = State::from_tps("x3/x,1,x/2,x2 1 2").unwrap();

        assert!(!Ply::PlaceFlat { position: Position::new(1, 1) }.is_valid(&state));
        assert!(!Ply::PlaceCap { position: Position::new(0, 0) }.is_valid(&state));

        let next = Ply::PlaceWall { position: Position::new(0, 0) }.play(&state);
        assert_eq!(next.top(Position::new(0, 0)), Some(Piece::StandingStone(Color::White)));
        assert_eq!(next.flatstones(Color::White), state.flatstones(Color::White) - 1);

        let mut empty = state.clone();
        empty.flatstones = [0, 0];
        assert!(!Ply::PlaceFlat { position: Position::new(0, 0) }.is_valid(&empty));
        assert!(!Ply::PlaceFlat { position: Position::new(3, 0) }.is_valid(&state));
    }

    #[test]
    fn test_capstone_flattens_wall() {
        let state = State::from_tps("1C,2S,x3/x5/x5/x4,1/x4,2 1 3").unwrap();
        let ply = Ply::Slide { position: Position::new(0, 0), direction: Direction::Right };
        assert!(ply.is_valid(&state));

        let next = ply.play(&state);
        assert!(next.stack(Position::new(0, 0)).is_empty());
        assert_eq!(next.stack(Position::new(0, 1)), &[Piece::Flatstone(Color::Black), Piece::Capstone(Color::White)]);
        assert_eq!(next.current_player, Color::Black);
    }

    #[test]
    fn test_slide_restrictions() {
        let state = State::from_tps("1,2S,x3/2C,12,x3/1,x4/x5/x5 1 4").unwrap();

        // Flatstones cannot cover walls or capstones
        assert!(!Ply::Slide { position: Position::new(0, 0), direction: Direction::Right }.is_valid(&state));
        assert!(!Ply::Slide { position: Position::new(2, 0), direction: Direction::Up }.is_valid(&state));
        // Stacks of two are moved with a split slide
        assert!(!Ply::Slide { position: Position::new(1, 1), direction: Direction::Right }.is_valid(&state));
        // Off the board
        assert!(!Ply::Slide { position: Position::new(0, 0), direction: Direction::Up }.is_valid(&state));
        // Not White's piece
        assert!(!Ply::Slide { position: Position::new(0, 1), direction: Direction::Down }.is_valid(&state));
        assert!(Ply::Slide { position: Position::new(2, 0), direction: Direction::Right }.is_valid(&state));
    }

    #[test]
    fn test_split_slide() {
        // White controls a stack of three at (1, 1): black, white, white from the bottom
        let state = State::from_tps("x4/x,211,x2/x4/x,2,x2 1 5").unwrap();
        let position = Position::new(1, 1);

        let ply = Ply::SplitSlide { position, direction: Direction::Right, partition: vec![1, 1, 1] };
        assert!(ply.is_valid(&state));

        let next = ply.play(&state);
        assert_eq!(next.stack(position), &[Piece::Flatstone(Color::Black)]);
        assert_eq!(next.stack(Position::new(1, 2)), &[Piece::Flatstone(Color::White)]);
        assert_eq!(next.stack(Position::new(1, 3)), &[Piece::Flatstone(Color::White)]);
        assert_eq!(total_pieces(&next), total_pieces(&state));

        let ply = Ply::SplitSlide { position, direction: Direction::Down, partition: vec![0, 1, 2] };
        let next = ply.play(&state);
        assert!(next.stack(position).is_empty());
        assert_eq!(next.stack(Position::new(2, 1)), &[Piece::Flatstone(Color::Black)]);
        assert_eq!(next.stack(Position::new(3, 1)), &[
            Piece::Flatstone(Color::Black),
            Piece::Flatstone(Color::White),
            Piece::Flatstone(Color::White),
        ]);
        assert_eq!(total_pieces(&next), total_pieces(&state));
    }

    #[test]
    fn test_split_slide_restrictions() {
        let state = State::from_tps("x4/x,211,x,2S/x4/x,2,x2 1 5").unwrap();
        let position = Position::new(1, 1);
        let split = |direction: Direction, partition: &[u8]| Ply::SplitSlide { position, direction, partition: partition.to_vec() };

        // Must sum to the height of the stack
        assert!(!split(Direction::Right, &[1, 1]).is_valid(&state));
        assert!(!split(Direction::Right, &[1, 1, 2]).is_valid(&state));
        // Must move
        assert!(!split(Direction::Right, &[3]).is_valid(&state));
        // Only the origin may be skipped
        assert!(!split(Direction::Down, &[1, 0, 2]).is_valid(&state));
        // Off the board
        assert!(!split(Direction::Up, &[0, 1, 2]).is_valid(&state));
        // Only a lone capstone flattens a wall
        assert!(!split(Direction::Right, &[0, 1, 1, 1]).is_valid(&state));
        assert!(!split(Direction::Right, &[0, 2, 1]).is_valid(&state));
        assert!(split(Direction::Right, &[0, 3]).is_valid(&state));
        assert!(split(Direction::Left, &[1, 2]).is_valid(&state));

        let black = State::from_tps("x4/x,211,x,2S/x4/x,2,x2 2 5").unwrap();
        assert!(!split(Direction::Left, &[1, 2]).is_valid(&black));
    }

    #[test]
    fn test_split_slide_capstone_flattens_wall() {
        let state = State::from_tps("x5/x,21C,2S,x2/x5/x5/x4,2 1 4").unwrap();
        let position = Position::new(1, 1);

        let ply = Ply::SplitSlide { position, direction: Direction::Right, partition: vec![1, 1] };
        assert!(ply.is_valid(&state));

        let next = ply.play(&state);
        assert_eq!(next.stack(position), &[Piece::Flatstone(Color::Black)]);
        assert_eq!(next.stack(Position::new(1, 2)), &[Piece::Flatstone(Color::Black), Piece::Capstone(Color::White)]);
    }

    #[test]
    fn test_play_leaves_state_untouched() {
        let state = State::from_tps("x4/x,211,x2/x4/x,2,x2 1 5").unwrap();
        let before = state.clone();

        for ply in state.legal_plies() {
            let next = ply.play(&state);
            assert_ne!(next, state);
        }

        assert_eq!(state, before);
        assert_eq!(state.flatstones, before.flatstones);
        assert_eq!(state.first_turn, before.first_turn);
    }

    #[test]
    fn test_execute_ply() {
        let state = State::from_tps("x3/x,1,x/2,x2 1 2").unwrap();

        assert!(state.execute_ply(&Ply::PlaceFlat { position: Position::new(0, 0) }).is_ok());

        let error = state.execute_ply(&Ply::PlaceFlat { position: Position::new(1, 1) }).unwrap_err();
        assert!(error.contains("occupied"));

        let finished = State::from_tps("1,x2/1,x2/1,2,2 2 3").unwrap();
        assert!(finished.execute_ply(&Ply::PlaceFlat { position: Position::new(0, 1) }).is_err());
    }

    #[test]
    fn test_state_trait() {
        let state = State::new(3);
        assert_eq!(state.get_player(), 0);

        let next = state.play(&Ply::PlaceFlat { position: Position::new(1, 1) });
        assert_eq!(next.get_player(), 1);
        assert_eq!(next.check_resolution(), None);
    }
}
