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

//! Rules and adversarial search for the game of Tak.
//!
//! The crate is split in two layers.  The root traits `Ply`, `Resolution`, and
//! `State`, together with the `analysis` module, describe any two-player
//! zero-sum game and provide a negamax search over it.  The `impls::tak`
//! module implements those traits for Tak.
//!
//! # Usage
//!
//! ```rust
//! use tak_ai::impls::tak::{self, Objective, Tier};
//!
//! let mut state = tak::new_game(4);
//! while state.objective() == Objective::NotFinished {
//!     match tak::search(&state, 1, Tier::Easy, true, true) {
//!         Some(ply) => state = tak::apply(&state, &ply),
//!         None => break,
//!     }
//! #   break;
//! }
//! ```
//!
//! # Implementation
//!
//! A game implements `Ply`, `Resolution`, and `State`, then provides an
//! evaluation type (usually a tuple wrapper around a numeric type, i.e.
//! `struct Eval(i32);`) implementing `analysis::Evaluation`, an
//! `analysis::Evaluator` for its states, and `analysis::Extrapolatable` to
//! enumerate legal plies.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
pub mod analysis;

pub use self::ply::Ply;
pub use self::resolution::Resolution;
pub use self::state::State;

pub mod impls;

mod ply;
mod resolution;
mod state;
