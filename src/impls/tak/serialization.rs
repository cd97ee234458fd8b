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

//! Records for exchanging states and plies as JSON.
//!
//! Pieces are written as their two-character codes (`wf`, `bw`, `bc`, ...),
//! players as `1` for white and `-1` for black.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::impls::tak::{piece_counts, Color, Direction, Piece, Ply, Position, State};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StateRecord {
    /// `board[row][col]` lists the stack on that space, bottom to top.
    pub board: Vec<Vec<Vec<String>>>,
    pub current_player: i8,
    pub first_turn: bool,
    /// Remaining flatstones, keyed by player.
    pub num_flats: BTreeMap<String, u8>,
    pub num_caps: BTreeMap<String, u8>,
    pub objective: String,
}

impl<'a> From<&'a State> for StateRecord {
    fn from(state: &'a State) -> StateRecord {
        let counts = |count: fn(&State, Color) -> u8| {
            [Color::White, Color::Black].iter()
                .map(|&color| (color.to_sign().to_string(), count(state, color)))
                .collect::<BTreeMap<_, _>>()
        };

        StateRecord {
            board: state.board.iter().map(|row| {
                row.iter().map(|stack| stack.iter().map(Piece::to_code).collect()).collect()
            }).collect(),
            current_player: state.current_player.to_sign(),
            first_turn: state.first_turn,
            num_flats: counts(State::flatstones),
            num_caps: counts(State::capstones),
            objective: state.objective().to_string(),
        }
    }
}

impl TryFrom<StateRecord> for State {
    type Error = String;

    /// Rebuilds a state from its board and player.  Reserves and the first turn
    /// flag are taken from the record and checked against the pieces on the board.
    fn try_from(record: StateRecord) -> Result<State, String> {
        let mut state = State::try_new(record.board.len())?;
        let board_size = state.board_size();

        for (row, cells) in record.board.iter().enumerate() {
            if cells.len() != board_size {
                return Err(format!("Row {} has {} spaces; expected {}.", row, cells.len(), board_size));
            }

            for (col, codes) in cells.iter().enumerate() {
                for code in codes {
                    match Piece::from_code(code) {
                        Some(piece) => state.board[row][col].push(piece),
                        None => return Err(format!("Unknown piece code: {}", code)),
                    }
                }
            }
        }

        state.current_player = match Color::from_sign(record.current_player) {
            Some(color) => color,
            None => return Err(format!("Unknown player: {}", record.current_player)),
        };

        // The opening swap lasts exactly until both players have placed a piece
        let pieces = state.board.iter().flat_map(|row| row.iter()).map(|stack| stack.len()).sum::<usize>();
        if record.first_turn != (pieces < 2) {
            return Err(format!("First turn flag {} does not match {} placed pieces.", record.first_turn, pieces));
        }
        state.first_turn = record.first_turn;

        let (flatstone_count, capstone_count) = piece_counts(board_size).unwrap_or((0, 0));

        for &color in &[Color::White, Color::Black] {
            let key = color.to_sign().to_string();
            let index = match color {
                Color::White => 0,
                Color::Black => 1,
            };

            let placed = state.board.iter().flat_map(|row| row.iter()).flat_map(|stack| stack.iter())
                .filter(|piece| piece.get_color() == color);
            let (placed_capstones, placed_flatstones): (Vec<&Piece>, Vec<&Piece>) = placed.partition(|piece| piece.is_capstone());

            let flatstones = record.num_flats.get(&key).cloned().unwrap_or(0);
            let capstones = record.num_caps.get(&key).cloned().unwrap_or(0);

            if flatstones as usize + placed_flatstones.len() != flatstone_count as usize ||
               capstones as usize + placed_capstones.len() != capstone_count as usize {
                return Err(format!("Reserves of player {} do not match the board.", key));
            }

            state.flatstones[index] = flatstones;
            state.capstones[index] = capstones;
        }

        Ok(state)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MoveType {
    PlaceFlat,
    PlaceWall,
    PlaceCap,
    MovePiece,
    SplitStack,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MoveRecord {
    #[serde(rename = "type")]
    pub move_type: MoveType,
    /// `[row, col]` of the placement or the moved stack.
    pub pos: [usize; 2],
    /// `[row step, col step]` of a move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<[i8; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<u8>>,
}

impl<'a> From<&'a Ply> for MoveRecord {
    fn from(ply: &'a Ply) -> MoveRecord {
        let position = ply.get_position();
        let (move_type, direction, split) = match *ply {
            Ply::PlaceFlat { .. } => (MoveType::PlaceFlat, None, None),
            Ply::PlaceWall { .. } => (MoveType::PlaceWall, None, None),
            Ply::PlaceCap { .. } => (MoveType::PlaceCap, None, None),
            Ply::Slide { direction, .. } => (MoveType::MovePiece, Some(direction), None),
            Ply::SplitSlide { direction, ref partition, .. } => (MoveType::SplitStack, Some(direction), Some(partition.clone())),
        };

        MoveRecord {
            move_type,
            pos: [position.row, position.col],
            direction: direction.map(|direction| {
                let (dr, dc) = direction.to_offset();
                [dr, dc]
            }),
            split,
        }
    }
}

impl TryFrom<MoveRecord> for Ply {
    type Error = String;

    fn try_from(record: MoveRecord) -> Result<Ply, String> {
        let position = Position::new(record.pos[0], record.pos[1]);

        let direction = || match record.direction {
            Some([dr, dc]) => match Direction::from_offset((dr, dc)) {
                Some(direction) => Ok(direction),
                None => Err(format!("Not a direction: [{}, {}]", dr, dc)),
            },
            None => Err(format!("{:?} requires a direction.", record.move_type)),
        };

        Ok(match record.move_type {
            MoveType::PlaceFlat => Ply::PlaceFlat { position },
            MoveType::PlaceWall => Ply::PlaceWall { position },
            MoveType::PlaceCap => Ply::PlaceCap { position },
            MoveType::MovePiece => Ply::Slide {
                position,
                direction: direction()?,
            },
            MoveType::SplitStack => Ply::SplitSlide {
                position,
                direction: direction()?,
                partition: match record.split {
                    Some(ref split) => split.clone(),
                    None => return Err(String::from("SplitStack requires a split.")),
                },
            },
        })
    }
}
