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

use std::fmt::Display;
use std::hash::Hash;

use crate::{Ply, Resolution};

/// The state of the game.
///
/// This should represent everything that makes up a single moment of the game, i.e. in chess,
/// this would be the board and all of its pieces, the player to move, etc.
///
/// States are values: executing a ply produces a new state and leaves the original untouched.
/// If the implementor stores data that changes or increments every turn, like a turn number,
/// it is recommended to implement `Hash` and `Eq` manually and to exclude that data, perhaps
/// simplifying it into the next player to move.  This allows the state to be used as the key
/// of a transposition table.
///
/// # Example
///
/// For tic-tac-toe, we might have:
///
/// ```rust
/// # use std::hash::{Hash, Hasher};
/// # use tak_ai::{Ply, Resolution, State};
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// enum Mark { X, O }
/// #[derive(Clone, Debug, Hash, PartialEq)]
/// struct Move(usize);
/// enum End { Win(Mark), CatsGame }
///
/// #[derive(Clone, Eq, PartialEq)]
/// struct Board([Option<Mark>; 9], u8); // The board and the turn number
///
/// impl State for Board {
///     type Ply = Move;
///     type Resolution = End;
///
///     fn get_player(&self) -> u8 { self.1 % 2 }
///
///     fn play(&self, ply: &Move) -> Board {
///         let mut next = self.clone();
///         next.0[ply.0] = Some(if self.1 % 2 == 0 { Mark::X } else { Mark::O });
///         next.1 += 1;
///         next
///     }
///
///     fn execute_ply(&self, ply: &Move) -> Result<Board, String> {
///         if ply.0 < 9 && self.0[ply.0].is_none() {
///             Ok(self.play(ply))
///         } else {
///             Err(String::from("Cannot mark an occupied space."))
///         }
///     }
///
///     fn check_resolution(&self) -> Option<End> {
///         // ...
///         # None
///     }
/// }
///
/// impl Hash for Board {
///     fn hash<H>(&self, state: &mut H) where H: Hasher {
///         self.0.hash(state);
///         self.get_player().hash(state);
///     }
/// }
/// # impl Ply for Move { }
/// # impl Resolution for End { fn get_winner(&self) -> Option<u8> { None } fn is_draw(&self) -> bool { false } }
/// # impl std::fmt::Display for Move { fn fmt(&self, _: &mut std::fmt::Formatter) -> std::fmt::Result { Ok(()) } }
/// # impl std::fmt::Display for Board { fn fmt(&self, _: &mut std::fmt::Formatter) -> std::fmt::Result { Ok(()) } }
/// ```
pub trait State: Clone + Display + Eq + Hash + PartialEq {
    type Ply: Ply;
    type Resolution: Resolution;

    /// Returns the index of the player to move (0 moves first).
    fn get_player(&self) -> u8;

    /// Returns the state that results from executing `ply`.
    ///
    /// `ply` must be legal in this state; searches only pass plies produced by
    /// `Extrapolatable::extrapolate`.  Implementors may panic otherwise.
    fn play(&self, ply: &Self::Ply) -> Self;

    /// Verifies `ply` and returns the resultant state, or a description of why
    /// the ply is illegal.
    fn execute_ply(&self, ply: &Self::Ply) -> Result<Self, String>;

    /// Returns `None` if the game has not reached a conclusion.
    fn check_resolution(&self) -> Option<Self::Resolution>;

    /// Executes each ply in `plies` on the result of the previous ply.
    fn execute_plies(&self, plies: &[Self::Ply]) -> Result<Self, String> {
        let mut state = self.clone();
        for ply in plies {
            match state.execute_ply(ply) {
                Ok(next) => state = next,
                Err(error) => return Err(format!("Error executing plies: {}, {}", ply, error)),
            }
        }
        Ok(state)
    }
}
