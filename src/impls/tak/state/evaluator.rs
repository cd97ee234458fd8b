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

//! Static evaluation of unresolved positions.

use crate::analysis;
use crate::impls::tak::state::evaluation::{score, Evaluation, Tier};
use crate::impls::tak::state::State;

/// Scores a state as a weighted sum of positional features, measured for the
/// player to move minus the same features for the opponent.
///
/// The evaluator does not recognize finished games; searches score those
/// themselves.
#[derive(Clone, Copy, Debug)]
pub struct StaticEvaluator {
    tier: Tier,
}

impl StaticEvaluator {
    pub fn new(tier: Tier) -> StaticEvaluator {
        StaticEvaluator {
            tier,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}

impl analysis::Evaluator for StaticEvaluator {
    type State = State;
    type Evaluation = Evaluation;

    fn evaluate(&self, state: &State) -> Evaluation {
        let weights = self.tier.weights();
        let color = state.current_player;

        Evaluation(score(state, color, weights) - score(state, color.flip(), weights))
    }
}

#[cfg(test)]
mod test {
    use crate::analysis::Evaluator;
    use crate::impls::tak::*;
    use super::StaticEvaluator;

    #[test]
    fn test_perspective() {
        let white = State::from_tps("1,x2/x,2S,x/2,x,1 1 3").unwrap();
        let black = State::from_tps("1,x2/x,2S,x/2,x,1 2 3").unwrap();

        let evaluator = StaticEvaluator::new(Tier::Medium);
        assert_eq!(evaluator.evaluate(&white), Evaluation(19));
        assert_eq!(evaluator.evaluate(&black), Evaluation(-19));
    }

    #[test]
    fn test_empty_board_is_even() {
        for &tier in &[Tier::Easy, Tier::Medium, Tier::Hard] {
            let evaluator = StaticEvaluator::new(tier);
            assert_eq!(evaluator.tier(), tier);
            assert_eq!(evaluator.evaluate(&State::new(5)), Evaluation(0));
        }
    }

    #[test]
    fn test_hard_rewards_lines() {
        // Black holds a corner; white's flatstones share a row
        let state = State::from_tps("x,1,1,x/x4/2,x3/x3,2 1 3").unwrap();

        assert_eq!(StaticEvaluator::new(Tier::Medium).evaluate(&state), Evaluation(-5));
        assert_eq!(StaticEvaluator::new(Tier::Hard).evaluate(&state), Evaluation(1));
        assert!(StaticEvaluator::new(Tier::Hard).evaluate(&state) > StaticEvaluator::new(Tier::Medium).evaluate(&state));
    }
}
