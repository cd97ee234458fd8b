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

//! Plays the opening of a computer-vs-computer game on a 5x5 board, printing
//! each position and the statistics of each search.
//!
//! The first argument sets the log level: `cargo run --example tak_opening -- debug`.

use std::env;
use std::io;
use std::str::FromStr;

use tak_ai::analysis::search::{NegamaxSearch, Search, SearchOptions};
use tak_ai::impls::tak::*;

const PLIES: usize = 12;

fn main() -> Result<(), fern::InitError> {
    let level = env::args().nth(1)
        .and_then(|level| log::LevelFilter::from_str(&level).ok())
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.target(), record.level(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;

    let mut white = NegamaxSearch::new(evaluator::StaticEvaluator::new(Tier::Medium), SearchOptions::with_depth(2));
    let mut black = NegamaxSearch::new(evaluator::StaticEvaluator::new(Tier::Hard), SearchOptions::with_depth(2));

    let mut state = new_game(5);
    println!("{}", state);

    for _ in 0..PLIES {
        if objective(&state) != Objective::NotFinished {
            break;
        }

        let analysis = match state.current_player {
            Color::White => white.search(&state),
            Color::Black => black.search(&state),
        };

        let ply = match analysis.ply {
            Some(ref ply) => ply.clone(),
            None => break,
        };

        println!("{:?} plays {} ({})", state.current_player, ply, analysis.evaluation);
        println!("{}", analysis.statistics);

        state = apply(&state, &ply);
        println!("{}", state);
    }

    println!("Result: {}", objective(&state));

    Ok(())
}
