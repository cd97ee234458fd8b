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

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

use crate::analysis::Evaluation;
use crate::state::State;

/// How a stored value relates to the true value of its state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bound {
    /// The true value is at least the stored value.
    Lower,
    Exact,
    /// The true value is at most the stored value.
    Upper,
}

#[derive(Clone, Debug)]
pub struct TranspositionTableEntry<P, E> where
    E: Evaluation {
    pub depth: u8,
    pub value: E,
    pub bound: Bound,
    pub ply: Option<P>,
}

/// A map from states to search results, holding at most `capacity` states.
pub struct TranspositionTable<S, E> where
    S: State,
    E: Evaluation {
    map: HashMap<S, TranspositionTableEntry<<S as State>::Ply, E>, BuildHasherDefault<FnvHasher>>,
    capacity: usize,
}

impl<S, E> TranspositionTable<S, E> where
    S: State,
    E: Evaluation {
    pub fn new(capacity: usize) -> TranspositionTable<S, E> {
        TranspositionTable {
            map: HashMap::default(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, state: &S) -> Option<&TranspositionTableEntry<<S as State>::Ply, E>> {
        self.map.get(state)
    }

    /// Stores `entry` for `state`, replacing any previous entry.  Returns `false`
    /// if the table is full and `state` had no entry, in which case nothing is stored.
    pub fn insert(&mut self, state: &S, entry: TranspositionTableEntry<<S as State>::Ply, E>) -> bool {
        if let Some(existing) = self.map.get_mut(state) {
            *existing = entry;
            return true;
        }

        if self.map.len() >= self.capacity {
            return false;
        }

        self.map.insert(state.clone(), entry);
        true
    }
}

#[cfg(test)]
mod test {
    use crate::impls::tak::*;
    use crate::state::State as StateTrait;
    use super::{Bound, TranspositionTable, TranspositionTableEntry};

    fn entry(depth: u8, value: i32) -> TranspositionTableEntry<Ply, Evaluation> {
        TranspositionTableEntry {
            depth,
            value: Evaluation(value),
            bound: Bound::Exact,
            ply: None,
        }
    }

    #[test]
    fn test_insert_overwrites() {
        let mut table = TranspositionTable::<State, Evaluation>::new(4);
        let state = State::new(4);

        assert!(table.insert(&state, entry(1, 10)));
        assert!(table.insert(&state, entry(3, -20)));

        assert_eq!(table.len(), 1);
        let stored = table.get(&state).unwrap();
        assert_eq!(stored.depth, 3);
        assert_eq!(stored.value, Evaluation(-20));
    }

    #[test]
    fn test_capacity_rejects_new_states() {
        let mut table = TranspositionTable::<State, Evaluation>::new(1);
        let first = State::new(4);
        let second = first.play(&Ply::PlaceFlat { position: Position::new(0, 0) });

        assert!(table.is_empty());
        assert!(table.insert(&first, entry(1, 1)));
        assert!(!table.insert(&second, entry(1, 2)));
        assert!(table.get(&second).is_none());

        // Known states may still be refreshed when the table is full
        assert!(table.insert(&first, entry(2, 5)));
        assert_eq!(table.get(&first).unwrap().value, Evaluation(5));
    }
}
