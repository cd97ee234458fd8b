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

//! Negamax search with alpha-beta pruning and a transposition table.

use std::fmt;
use std::time::Instant;

use crate::analysis::{Evaluation, Evaluator, Extrapolatable};
use crate::analysis::search::Search;
use crate::resolution::Resolution;
use crate::state::State;

use self::transposition_table::{Bound, TranspositionTable, TranspositionTableEntry};

/// Parameters of a search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    /// Plies to search.  A depth of 0 produces no ply.
    pub depth: u8,
    /// Skip the remaining plies of a node once it cannot affect the result.
    pub pruning: bool,
    /// Reuse results for states reached through different sequences of plies.
    pub caching: bool,
    /// The maximum number of states the transposition table holds.
    pub cache_capacity: usize,
}

impl SearchOptions {
    pub fn with_depth(depth: u8) -> SearchOptions {
        SearchOptions {
            depth,
            ..SearchOptions::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            depth: 3,
            pruning: true,
            caching: true,
            cache_capacity: 1 << 20,
        }
    }
}

/// The results of the search.
pub struct Analysis<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    /// The state on which the search was performed.
    pub state: S,
    /// The value of the state for the player to move.
    pub evaluation: <E as Evaluator>::Evaluation,
    /// The best ply found, if any.
    pub ply: Option<<S as State>::Ply>,
    /// Statistics from the search.
    pub statistics: Statistics,
}

/// Everything a single search owns.  A context is created at the start of each
/// search and dropped at its end.
struct SearchContext<S, E> where
    S: State,
    E: Evaluation {
    transposition_table: TranspositionTable<S, E>,
    statistics: Statistics,
}

/// A negamax implementation of `Search`.
///
/// # Example
///
/// ```rust
/// use tak_ai::analysis::search::{NegamaxSearch, Search, SearchOptions};
/// use tak_ai::impls::tak::{self, evaluator::StaticEvaluator, Tier};
///
/// let state = tak::new_game(3);
///
/// let mut search = NegamaxSearch::new(StaticEvaluator::new(Tier::Medium), SearchOptions::with_depth(2));
/// let analysis = search.search(&state);
///
/// assert!(analysis.ply.is_some());
/// ```
pub struct NegamaxSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    evaluator: E,
    options: SearchOptions,
}

impl<S, E> NegamaxSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    pub fn new(evaluator: E, options: SearchOptions) -> NegamaxSearch<S, E> {
        NegamaxSearch {
            evaluator,
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    fn negamax(
        &self,
        context: &mut SearchContext<S, <E as Evaluator>::Evaluation>,
        state: &S,
        depth: u8,
        mut alpha: <E as Evaluator>::Evaluation,
        mut beta: <E as Evaluator>::Evaluation,
    ) -> (<E as Evaluator>::Evaluation, Option<<S as State>::Ply>) {
        let (original_alpha, original_beta) = (alpha, beta);

        if self.options.caching {
            if let Some(entry) = context.transposition_table.get(state) {
                if entry.depth >= depth {
                    context.statistics.tt_hits += 1;

                    match entry.bound {
                        Bound::Exact => {
                            context.statistics.tt_saves += 1;
                            return (entry.value, entry.ply.clone());
                        },
                        Bound::Lower => if entry.value > alpha {
                            alpha = entry.value;
                        },
                        Bound::Upper => if entry.value < beta {
                            beta = entry.value;
                        },
                    }

                    if alpha >= beta {
                        context.statistics.tt_saves += 1;
                        return (entry.value, entry.ply.clone());
                    }
                }
            }
        }

        let generation_start = Instant::now();
        let plies = state.extrapolate();
        context.statistics.generation_time += generation_start.elapsed().as_secs_f32();

        let (value, best_ply) = if depth == 0 || plies.is_empty() {
            context.statistics.evaluated += 1;
            (self.evaluate_leaf(context, state), None)
        } else {
            context.statistics.visited += 1;

            let mut best_value = <E as Evaluator>::Evaluation::min();
            let mut best_ply = None;

            for ply in plies {
                let next_state = state.play(&ply);
                let (next_value, _) = self.negamax(context, &next_state, depth - 1, -beta, -alpha);
                let next_value = -next_value;

                if best_ply.is_none() || next_value > best_value {
                    best_value = next_value;
                    best_ply = Some(ply);
                }

                if self.options.pruning {
                    if best_value > alpha {
                        alpha = best_value;
                    }

                    if alpha >= beta {
                        context.statistics.cutoffs += 1;
                        break;
                    }
                }
            }

            (best_value, best_ply)
        };

        if self.options.caching {
            let bound = if value <= original_alpha {
                Bound::Upper
            } else if value >= original_beta {
                Bound::Lower
            } else {
                Bound::Exact
            };

            let stored = context.transposition_table.insert(state, TranspositionTableEntry {
                depth,
                value,
                bound,
                ply: best_ply.clone(),
            });

            if stored {
                context.statistics.tt_stores += 1;
            } else {
                context.statistics.tt_rejects += 1;
            }
        }

        (value, best_ply)
    }

    fn evaluate_leaf(
        &self,
        context: &mut SearchContext<S, <E as Evaluator>::Evaluation>,
        state: &S,
    ) -> <E as Evaluator>::Evaluation {
        let start = Instant::now();
        let value = match state.check_resolution() {
            Some(ref resolution) if resolution.is_draw() => <E as Evaluator>::Evaluation::null(),
            Some(ref resolution) => if resolution.get_winner() == Some(state.get_player()) {
                <E as Evaluator>::Evaluation::win()
            } else {
                <E as Evaluator>::Evaluation::lose()
            },
            None => self.evaluator.evaluate(state),
        };
        context.statistics.evaluation_time += start.elapsed().as_secs_f32();

        value
    }
}

impl<S, E> Search<S, E> for NegamaxSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    type Analysis = Analysis<S, E>;

    fn search(&mut self, state: &S) -> Analysis<S, E> {
        let start = Instant::now();

        let mut context = SearchContext {
            transposition_table: TranspositionTable::new(self.options.cache_capacity),
            statistics: Statistics::new(),
        };

        let (evaluation, ply) = if self.options.depth == 0 {
            (self.evaluate_leaf(&mut context, state), None)
        } else {
            self.negamax(
                &mut context,
                state,
                self.options.depth,
                <E as Evaluator>::Evaluation::min(),
                <E as Evaluator>::Evaluation::max(),
            )
        };

        context.statistics.time = start.elapsed().as_secs_f32();

        debug!(
            "Searched depth {} ({} nodes, {} cached states): {} -> {}",
            self.options.depth,
            context.statistics.nodes(),
            context.transposition_table.len(),
            match ply {
                Some(ref ply) => format!("{}", ply),
                None => String::from("none"),
            },
            evaluation,
        );
        trace!("Search statistics:\n{}", context.statistics);

        Analysis {
            state: state.clone(),
            evaluation,
            ply,
            statistics: context.statistics,
        }
    }
}

impl<S, E> fmt::Display for Analysis<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        if let Some(ref ply) = self.ply {
            if let Ok(result) = self.state.execute_ply(ply) {
                writeln!(f, "Resultant State: {}", result)?;
            }
        }
        writeln!(f, "Evaluation: {}{}", self.evaluation, if self.evaluation.is_end() {
            if self.evaluation.is_win() {
                " (Win)"
            } else {
                " (Lose)"
            }
        } else {
            ""
        })?;
        match self.ply {
            Some(ref ply) => writeln!(f, "Ply: {}", ply)?,
            None => writeln!(f, "Ply: none")?,
        }
        write!(f, "Statistics:\n{}", self.statistics)
    }
}

pub use self::statistics::Statistics;

mod statistics;
mod transposition_table;
