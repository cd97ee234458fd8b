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

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::impls::tak::{Color, Piece, Position};

pub use self::evaluation::{Evaluation, Tier, Weights};

/// The flatstone and capstone reserves of each player, keyed by board size.
pub fn piece_counts(board_size: usize) -> Option<(u8, u8)> {
    match board_size {
        3 => Some((10, 0)),
        4 => Some((15, 0)),
        5 => Some((21, 1)),
        6 => Some((30, 1)),
        7 => Some((40, 1)),
        8 => Some((50, 2)),
        _ => None,
    }
}

/// A position of a game, with the reserves of both players.
///
/// States are compared and hashed by their board and the player to move only.
/// The reserves and `first_turn` follow from the board at a given board size.
#[derive(Debug)]
pub struct State {
    /// `board[row][col]` is the stack on that space, bottom to top.
    pub board: Vec<Vec<Vec<Piece>>>,
    pub current_player: Color,
    /// True until both players have made their opening placement.
    pub first_turn: bool,

    /// Remaining flatstones, indexed white then black.  Standing stones are drawn from here too.
    pub flatstones: [u8; 2],
    pub capstones: [u8; 2],
}

impl State {
    /// # Panics
    /// Panics if `board_size` is not between 3 and 8.
    pub fn new(board_size: usize) -> State {
        match State::try_new(board_size) {
            Ok(state) => state,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_new(board_size: usize) -> Result<State, String> {
        let (flatstone_count, capstone_count) = match piece_counts(board_size) {
            Some(counts) => counts,
            None => return Err(format!("Illegal board size: {}", board_size)),
        };

        Ok(State {
            board: vec![vec![Vec::new(); board_size]; board_size],
            current_player: Color::White,
            first_turn: true,
            flatstones: [flatstone_count; 2],
            capstones: [capstone_count; 2],
        })
    }

    /// Parses a position in Tak Positional System notation, with or without the
    /// surrounding `[TPS "..."]` tag, i.e. `x3/x,1,x/2C,x2 1 2`.
    pub fn from_tps(tps: &str) -> Result<State, String> {
        let mut tps = tps.trim();
        if tps.starts_with("[TPS \"") && tps.ends_with("\"]") && tps.len() >= 8 {
            tps = &tps[6..tps.len() - 2];
        }

        let mut fields = tps.split_whitespace();
        let (rows, player, turn) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(rows), Some(player), Some(turn), None) => (rows, player, turn),
            _ => return Err(format!("Malformed TPS: {}", tps)),
        };

        let rows = rows.split('/').collect::<Vec<_>>();
        let board_size = rows.len();

        let mut state = State::try_new(board_size)?;
        let mut used_flatstones = [0usize; 2];
        let mut used_capstones = [0usize; 2];

        for (row, cells) in rows.iter().enumerate() {
            let mut col = 0;

            for cell in cells.split(',') {
                if let Some(count) = cell.strip_prefix('x') {
                    col += if count.is_empty() {
                        1
                    } else {
                        match usize::from_str(count) {
                            Ok(count) if count > 0 => count,
                            _ => return Err(format!("Bad empty space count: {}", cell)),
                        }
                    };
                    continue;
                }

                if col >= board_size {
                    return Err(format!("Row {} is too long.", row + 1));
                }

                let stack = parse_stack(cell)?;
                for piece in &stack {
                    match *piece {
                        Piece::Capstone(color) => used_capstones[index(color)] += 1,
                        _ => used_flatstones[index(piece.get_color())] += 1,
                    }
                }

                state.board[row][col] = stack;
                col += 1;
            }

            if col != board_size {
                return Err(format!("Row {} has {} spaces; expected {}.", row + 1, col, board_size));
            }
        }

        for color in 0..2 {
            if used_flatstones[color] > state.flatstones[color] as usize ||
               used_capstones[color] > state.capstones[color] as usize {
                return Err(String::from("More pieces on the board than a player owns."));
            }
            state.flatstones[color] -= used_flatstones[color] as u8;
            state.capstones[color] -= used_capstones[color] as u8;
        }

        state.current_player = match player {
            "1" => Color::White,
            "2" => Color::Black,
            _ => return Err(format!("Bad player to move: {}", player)),
        };

        match u16::from_str(turn) {
            Ok(turn) if turn > 0 => (),
            _ => return Err(format!("Bad move number: {}", turn)),
        }

        let placed = state.board.iter().flat_map(|row| row.iter()).map(|stack| stack.len()).sum::<usize>();
        state.first_turn = placed < 2;

        Ok(state)
    }

    pub fn board_size(&self) -> usize {
        self.board.len()
    }

    pub fn stack(&self, position: Position) -> &[Piece] {
        &self.board[position.row][position.col]
    }

    /// The controlling piece of a space.
    pub fn top(&self, position: Position) -> Option<Piece> {
        self.board[position.row][position.col].last().cloned()
    }

    pub fn flatstones(&self, color: Color) -> u8 {
        self.flatstones[index(color)]
    }

    pub fn capstones(&self, color: Color) -> u8 {
        self.capstones[index(color)]
    }

    /// Every position of the board, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let board_size = self.board_size();
        (0..board_size).flat_map(move |row| (0..board_size).map(move |col| Position::new(row, col)))
    }
}

/// Reserve index of a color.
fn index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

fn parse_stack(cell: &str) -> Result<Vec<Piece>, String> {
    let mut stack = Vec::new();
    let mut chars = cell.chars().peekable();

    while let Some(c) = chars.next() {
        let color = match c {
            '1' => Color::White,
            '2' => Color::Black,
            _ => return Err(format!("Bad stack: {}", cell)),
        };

        let piece = match chars.peek() {
            Some('S') => Piece::StandingStone(color),
            Some('C') => Piece::Capstone(color),
            _ => Piece::Flatstone(color),
        };

        if !piece.is_flatstone() {
            chars.next();
            if chars.peek().is_some() {
                return Err(format!("Only the top of a stack may stand: {}", cell));
            }
        }

        stack.push(piece);
    }

    if stack.is_empty() {
        return Err(String::from("Empty stack."));
    }

    Ok(stack)
}

impl Clone for State {
    fn clone(&self) -> State {
        State {
            board: self.board.clone(),
            current_player: self.current_player,
            first_turn: self.first_turn,
            flatstones: self.flatstones,
            capstones: self.capstones,
        }
    }

    fn clone_from(&mut self, source: &State) {
        self.board.clone_from(&source.board);
        self.current_player = source.current_player;
        self.first_turn = source.first_turn;
        self.flatstones = source.flatstones;
        self.capstones = source.capstones;
    }
}

impl PartialEq for State {
    fn eq(&self, other: &State) -> bool {
        self.current_player == other.current_player && self.board == other.board
    }
}

impl Eq for State { }

impl Hash for State {
    fn hash<H>(&self, state: &mut H) where H: Hasher {
        self.current_player.hash(state);
        self.board.hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board_size = self.board_size();

        let column_widths = (0..board_size).map(|col| {
            self.board.iter().fold(4, |max, row| {
                let stack_width = row[col].len() * 3 + 1;
                if max > stack_width { max } else { stack_width }
            })
        }).collect::<Vec<_>>();

        for &color in &[Color::White, Color::Black] {
            write!(f, "\n {}: {:>2} flatstone{}", match color {
                Color::White => "White",
                Color::Black => "Black",
            }, self.flatstones(color), if self.flatstones(color) != 1 { "s" } else { "" })?;

            if self.capstones(color) > 0 {
                write!(f, ", {} capstone{}", self.capstones(color),
                    if self.capstones(color) != 1 { "s" } else { "" }
                )?;
            }
        }

        write!(f, "\n {} to move{}\n\n", match self.current_player {
            Color::White => "White",
            Color::Black => "Black",
        }, if self.first_turn { " (opening)" } else { "" })?;

        for (row, cells) in self.board.iter().enumerate() {
            write!(f, " {}  ", row)?;

            for (col, stack) in cells.iter().enumerate() {
                let mut c = String::new();
                write!(c, "[")?;

                for (i, piece) in stack.iter().enumerate() {
                    if i > 0 {
                        write!(c, " ")?;
                    }
                    write!(c, "{}", piece.to_code())?;
                }

                write!(c, "]")?;

                write!(f, "{:<width$}", c, width = column_widths[col] + 1)?;
            }

            writeln!(f)?;
        }

        write!(f, "\n    ")?;

        for (col, column_width) in column_widths.iter().enumerate() {
            write!(f, "{:<width$}", col, width = column_width + 1)?;
        }

        writeln!(f)
    }
}

pub mod evaluator;
mod evaluation;
mod extrapolation;
mod objective;
mod state;
