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
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An evaluation type.
///
/// This is usually a tuple around a signed numeric type.
///
/// # Example
///
/// There is a [helper macro](../macro.prepare_evaluation_tuple.html) to facilitate the implementation of tuple structs:
///
/// ```rust
/// #[macro_use]
/// extern crate tak_ai;
/// # use tak_ai::analysis::Evaluation;
/// use std::i32;
///
/// #[derive(Clone, Copy, PartialEq, PartialOrd)]
/// struct Eval(i32);
///
/// prepare_evaluation_tuple!(Eval); // impl Add, Div, Mul, Neg, Sub, and Display
///
/// impl Evaluation for Eval {
///     fn null() -> Eval { Eval(0) }
///     fn win() -> Eval { Eval(100000) }
///     fn max() -> Eval { Eval(i32::MAX) }
///     fn is_win(&self) -> bool { self.0 >= 100000 }
/// }
/// # fn main() { }
/// ```
pub trait Evaluation:
    Sized +
    Clone +
    Copy +
    Display +
    Add<Output = Self> +
    Sub<Output = Self> +
    Mul<Output = Self> +
    Neg<Output = Self> +
    Div<Output = Self> +
    PartialEq +
    PartialOrd {
    /// An empty, or zero evaluation.  Draws are worth this much.
    fn null() -> Self;
    /// The value of a win for the player to move.
    fn win() -> Self;
    /// The value of a loss for the player to move.
    fn lose() -> Self { -Self::win() }
    /// The maximum value representable.  This must be safely negatable.
    fn max() -> Self;
    /// The minimum value representable.
    fn min() -> Self { -Self::max() }
    /// Returns `true` if this evaluation contains a win.  This is usually a check to
    /// see if the value is above a certain threshold.
    fn is_win(&self) -> bool;
    /// Returns `true` if this evaluation contains a loss.
    fn is_lose(&self) -> bool { (-*self).is_win() }
    /// Returns `true` if this evaluation is either a win or a loss.
    fn is_end(&self) -> bool { self.is_win() || self.is_lose() }
}

/// Implement arithmetic operators (`Add`, `Sub`, `Mul`, `Neg`, `Div`) and `Display` for a tuple
/// struct in terms of the enclosed type.
///
/// # Example
///
/// ```rust
/// #[macro_use]
/// extern crate tak_ai;
///
/// #[derive(Clone, Copy, PartialEq, PartialOrd)]
/// struct Eval(i32);
///
/// prepare_evaluation_tuple!(Eval);
///
/// fn main() {
///     assert!(-(Eval(3) + Eval(4)) * Eval(2) == Eval(-14));
///     assert_eq!(format!("{}", Eval(12) / Eval(4) - Eval(1)), "2");
/// }
/// ```
#[macro_export]
macro_rules! prepare_evaluation_tuple {
    ($type_: ident) => {
        $crate::prepare_evaluation_tuple!(@binary $type_, Add, add, +);
        $crate::prepare_evaluation_tuple!(@binary $type_, Sub, sub, -);
        $crate::prepare_evaluation_tuple!(@binary $type_, Mul, mul, *);
        $crate::prepare_evaluation_tuple!(@binary $type_, Div, div, /);

        impl ::std::ops::Neg for $type_ {
            type Output = $type_;
            fn neg(self) -> $type_ {
                $type_(-self.0)
            }
        }

        impl ::std::fmt::Display for $type_ {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
    (@binary $type_: ident, $trait_: ident, $method: ident, $op: tt) => {
        impl ::std::ops::$trait_ for $type_ {
            type Output = $type_;
            fn $method(self, other: $type_) -> $type_ {
                $type_(self.0 $op other.0)
            }
        }
    };
}
