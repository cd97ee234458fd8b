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

use crate::analysis;
use crate::impls::tak::{partitions_with_leading_zero, Direction, Ply};
use crate::impls::tak::state::State;

impl State {
    /// Every ply of a kind that could be legal, in generation order: spaces in
    /// row-major order, and for each space its placements, its slides, then its
    /// split slides.  Most of these are not valid.
    pub fn candidate_plies(&self) -> Vec<Ply> {
        let board_size = self.board_size();
        let mut plies = Vec::new();

        for position in self.positions() {
            plies.push(Ply::PlaceFlat { position });
            plies.push(Ply::PlaceWall { position });
            plies.push(Ply::PlaceCap { position });

            for &direction in &Direction::ALL {
                plies.push(Ply::Slide { position, direction });
            }

            let height = self.stack(position).len();
            if height < 2 {
                continue;
            }

            let partitions = partitions_with_leading_zero(height);

            for &direction in &Direction::ALL {
                // Spaces a split slide can drop on, the origin included
                let reach = (0..board_size)
                    .take_while(|&distance| position.offset(direction, distance, board_size).is_some())
                    .count();

                for partition in partitions.iter().filter(|partition| partition.len() <= reach) {
                    plies.push(Ply::SplitSlide {
                        position,
                        direction,
                        partition: partition.clone(),
                    });
                }
            }
        }

        plies
    }

    /// The legal plies, in generation order.  There are none once the game is over.
    pub fn legal_plies(&self) -> Vec<Ply> {
        if self.resolve().is_some() {
            return Vec::new();
        }

        let mut plies = self.candidate_plies();
        plies.retain(|ply| ply.is_valid(self));
        plies
    }
}

impl analysis::Extrapolatable<Ply> for State {
    fn extrapolate(&self) -> Vec<Ply> {
        self.legal_plies()
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand::rngs::SmallRng;

    use crate::analysis::Extrapolatable;
    use crate::impls::tak::*;

    #[test]
    fn test_opening_plies() {
        let state = State::new(4);
        let plies = state.legal_plies();

        assert_eq!(plies.len(), 16);
        assert!(plies.iter().all(|ply| matches!(*ply, Ply::PlaceFlat { .. })));
        assert_eq!(plies[0], Ply::PlaceFlat { position: Position::new(0, 0) });
        assert_eq!(plies[1], Ply::PlaceFlat { position: Position::new(0, 1) });
        assert_eq!(plies[15], Ply::PlaceFlat { position: Position::new(3, 3) });
        assert_eq!(state.extrapolate(), plies);
    }

    #[test]
    fn test_generation_order() {
        let state = State::from_tps("x3/x,21,x/x2,2 1 3").unwrap();
        let plies = state.legal_plies();

        // Placements on (0, 0) come first; capstones are unavailable on 3x3
        assert_eq!(plies[0], Ply::PlaceFlat { position: Position::new(0, 0) });
        assert_eq!(plies[1], Ply::PlaceWall { position: Position::new(0, 0) });

        // A split slide from the center covers two spaces at most
        let position = Position::new(1, 1);
        let stack_plies = plies.iter().filter(|ply| ply.get_position() == position).cloned().collect::<Vec<_>>();
        assert_eq!(stack_plies, vec![
            Ply::SplitSlide { position, direction: Direction::Up, partition: vec![1, 1] },
            Ply::SplitSlide { position, direction: Direction::Up, partition: vec![0, 2] },
            Ply::SplitSlide { position, direction: Direction::Down, partition: vec![1, 1] },
            Ply::SplitSlide { position, direction: Direction::Down, partition: vec![0, 2] },
            Ply::SplitSlide { position, direction: Direction::Left, partition: vec![1, 1] },
            Ply::SplitSlide { position, direction: Direction::Left, partition: vec![0, 2] },
            Ply::SplitSlide { position, direction: Direction::Right, partition: vec![1, 1] },
            Ply::SplitSlide { position, direction: Direction::Right, partition: vec![0, 2] },
        ]);
    }

    #[test]
    fn test_finished_game_has_no_plies() {
        let state = State::from_tps("1,x2/1,x2/1,2,2 2 3").unwrap();
        assert!(state.legal_plies().is_empty());
        assert!(!state.candidate_plies().is_empty());
    }

    #[test]
    fn test_legal_plies_are_valid() {
        for seed in 0..8 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut state = State::new(3 + seed as usize % 3);

            for _ in 0..40 {
                let legal = state.legal_plies();
                if legal.is_empty() {
                    break;
                }

                for ply in state.candidate_plies() {
                    assert_eq!(ply.is_valid(&state), legal.contains(&ply), "{} in state:\n{}", ply, state);
                }

                let ply = &legal[rng.gen_range(0..legal.len())];
                if let Ply::SplitSlide { position, ref partition, .. } = *ply {
                    let height = state.stack(position).len();
                    assert_eq!(partition.iter().map(|&count| count as usize).sum::<usize>(), height);
                }

                state = ply.play(&state);
            }
        }
    }
}
