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

use crate::ply::Ply;

/// Provides the legal plies of a position.
///
/// This is usually implemented on a `State`.
pub trait Extrapolatable<P> where
    P: Ply {
    /// Returns every legal ply for the player to move, in a fixed order.
    /// A resolved state has no legal plies.
    fn extrapolate(&self) -> Vec<P>;
}
