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

use crate::impls::tak::Color;
use crate::resolution;

/// The ways a game can end.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// One player has completed a road.
    Road(Color),
    /// The board is completely full, and one player controls more flatstones.
    Flat(Color),
    /// The board is completely full, and neither player controls more flatstones.
    Draw,
}

impl resolution::Resolution for Resolution {
    /// Returns the index of the winning player (0 for white, 1 for black) if the value is either a `Road` or a `Flat`; `None` otherwise.
    fn get_winner(&self) -> Option<u8> {
        match *self {
            Resolution::Road(Color::White) |
            Resolution::Flat(Color::White) => Some(0),
            Resolution::Road(Color::Black) |
            Resolution::Flat(Color::Black) => Some(1),
            Resolution::Draw => None,
        }
    }

    /// Returns true if the value is a `Draw`.
    fn is_draw(&self) -> bool {
        matches!(*self, Resolution::Draw)
    }
}

/// The status of a game, as reported to players.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Objective {
    NotFinished,
    WhiteWin,
    BlackWin,
    Draw,
}

impl From<Option<Resolution>> for Objective {
    fn from(resolution: Option<Resolution>) -> Objective {
        match resolution {
            None => Objective::NotFinished,
            Some(Resolution::Road(Color::White)) |
            Some(Resolution::Flat(Color::White)) => Objective::WhiteWin,
            Some(Resolution::Road(Color::Black)) |
            Some(Resolution::Flat(Color::Black)) => Objective::BlackWin,
            Some(Resolution::Draw) => Objective::Draw,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Objective::NotFinished => "NotFinished",
            Objective::WhiteWin => "WhiteWin",
            Objective::BlackWin => "BlackWin",
            Objective::Draw => "Draw",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod test {
    use crate::impls::tak::Color;
    use crate::resolution::Resolution as ResolutionTrait;
    use super::{Objective, Resolution};

    #[test]
    fn test_winner() {
        assert_eq!(Resolution::Road(Color::Black).get_winner(), Some(1));
        assert_eq!(Resolution::Flat(Color::White).get_winner(), Some(0));
        assert_eq!(Resolution::Draw.get_winner(), None);
        assert!(Resolution::Draw.is_draw());
        assert!(!Resolution::Flat(Color::Black).is_draw());
    }

    #[test]
    fn test_objective() {
        assert_eq!(Objective::from(None), Objective::NotFinished);
        assert_eq!(Objective::from(Some(Resolution::Road(Color::White))), Objective::WhiteWin);
        assert_eq!(Objective::from(Some(Resolution::Flat(Color::Black))), Objective::BlackWin);
        assert_eq!(Objective::from(Some(Resolution::Draw)), Objective::Draw);
        assert_eq!(format!("{}", Objective::BlackWin), "BlackWin");
    }
}
