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

use std::fmt;

/// Counters gathered during a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Interior nodes, whose children were searched.
    pub visited: u32,
    /// Leaf nodes, scored by the evaluator or by their resolution.
    pub evaluated: u32,
    /// Nodes whose remaining plies were skipped by an alpha-beta cut.
    pub cutoffs: u32,
    /// Transposition table entries found with sufficient depth.
    pub tt_hits: u32,
    /// Transposition table hits that ended a node without searching it.
    pub tt_saves: u32,
    pub tt_stores: u32,
    /// Stores dropped because the table was full.
    pub tt_rejects: u32,
    /// Seconds spent listing plies.
    pub generation_time: f32,
    /// Seconds spent scoring leaves, including the check for a finished game.
    pub evaluation_time: f32,
    /// Seconds spent searching.
    pub time: f32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// Total number of nodes reached by the search.
    pub fn nodes(&self) -> u32 {
        self.visited + self.evaluated + self.tt_saves
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = [
            ("Visited:", format!("{}", self.visited)),
            ("Evaluated:", format!("{}", self.evaluated)),
            ("Cutoffs:", format!("{}", self.cutoffs)),
            ("TT Hits:", format!("{}", self.tt_hits)),
            ("TT Saves:", format!("{}", self.tt_saves)),
            ("TT Stores:", format!("{}", self.tt_stores)),
            ("TT Rejects:", format!("{}", self.tt_rejects)),
            ("Generation Time:", format!("{:.2}", self.generation_time)),
            ("Evaluation Time:", format!("{:.2}", self.evaluation_time)),
            ("Time:", format!("{:.2}", self.time)),
        ];

        let title_width = rows.iter().map(|&(title, _)| title.len()).max().unwrap_or(0) + 1;
        let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (index, (title, value)) in rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "  {0:1$}{2:>3$}", title, title_width, value, value_width)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Statistics;

    #[test]
    fn test_display_aligns_values() {
        let statistics = Statistics {
            visited: 12,
            evaluated: 3456,
            generation_time: 0.25,
            time: 0.5,
            ..Statistics::new()
        };

        let printed = format!("{}", statistics);
        let lines = printed.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  Visited:           12");
        assert_eq!(lines[1], "  Evaluated:       3456");
        assert_eq!(lines[7], "  Generation Time: 0.25");
        assert_eq!(lines[8], "  Evaluation Time: 0.00");
        assert_eq!(lines[9], "  Time:            0.50");
        assert_eq!(statistics.nodes(), 3468);
    }
}
