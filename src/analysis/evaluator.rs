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

use crate::analysis::Evaluation;
use crate::state::State;

/// Evaluates a State.
///
/// Evaluators score positions that have not been resolved.  Resolved states
/// are scored by the search itself, using `Evaluation::win`, `Evaluation::lose`,
/// and `Evaluation::null`.
pub trait Evaluator {
    type State: State;
    type Evaluation: Evaluation;

    /// Returns the evaluation of `state` from the perspective of the player to move.
    fn evaluate(&self, state: &Self::State) -> Self::Evaluation;
}
