//! A small premise language for building rule conditions out of fuzzy sets.
//!
//! ```
//! use fuzzymind::{Expr, FuzzySet, Inputs, Piecewise};
//!
//! let urgent = FuzzySet::new("Urgent", Piecewise::new([(3., 0.), (7., 1.)]));
//! let complex = FuzzySet::new("Complex", Piecewise::new([(2., 0.), (5., 1.)]));
//! let premise = Expr::is("urgency", urgent).and(Expr::is("complexity", complex));
//!
//! let inputs = Inputs::from([("urgency", 5.), ("complexity", 6.)]);
//!
//! assert_eq!(premise.strength(&inputs), 0.5);
//! ```

use std::ops::Not;

use crate::inputs::Inputs;
use crate::math::{max_nan, min_nan};
use crate::set::FuzzySet;

#[derive(Clone, Debug)]
pub enum Expr {
    /// Degree to which the named input belongs to the set. Missing inputs have degree zero.
    Is(String, FuzzySet),
    /// Minimum of the operands; an empty conjunction is fully true.
    And(Vec<Expr>),
    /// Maximum of the operands; an empty disjunction is fully false.
    Or(Vec<Expr>),
    /// `1 - x`
    Not(Box<Expr>),
}

impl Expr {
    pub fn is(input: impl Into<String>, set: FuzzySet) -> Self {
        Expr::Is(input.into(), set)
    }

    pub fn or(self, rhs: Expr) -> Self {
        match self {
            Expr::Or(mut exprs) => {
                exprs.push(rhs);
                Expr::Or(exprs)
            },
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }

    pub fn and(self, rhs: Expr) -> Self {
        match self {
            Expr::And(mut exprs) => {
                exprs.push(rhs);
                Expr::And(exprs)
            },
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }

    pub fn and2(self, rhs: Expr, rhs2: Expr) -> Self {
        self.and(rhs).and(rhs2)
    }

    /// Firing strength of the premise for the given inputs.
    pub fn strength(&self, inputs: &Inputs) -> f64 {
        match self {
            Expr::Is(input, set) => inputs.get(input).map_or(0., |x| set.membership_degree(x)),
            Expr::And(exprs) => exprs.iter().map(|e| e.strength(inputs)).fold(1., min_nan),
            Expr::Or(exprs) => exprs.iter().map(|e| e.strength(inputs)).fold(0., max_nan),
            Expr::Not(expr) => 1. - expr.strength(inputs),
        }
    }

    /// Turns the premise into a crisp rule condition that holds once the firing
    /// strength reaches `threshold`.
    pub fn at_least(self, threshold: f64) -> impl Fn(&Inputs) -> bool + Send + Sync + 'static {
        move |inputs: &Inputs| self.strength(inputs) >= threshold
    }

    /// Holds whenever the firing strength is strictly positive.
    pub fn fires(self) -> impl Fn(&Inputs) -> bool + Send + Sync + 'static {
        move |inputs: &Inputs| self.strength(inputs) > 0.
    }

    /// Every `(input, set)` proposition in the premise, left to right.
    pub fn propositions(&self) -> Vec<(&str, &FuzzySet)> {
        let mut props = Vec::new();

        fn parse<'p>(expr: &'p Expr, out: &mut Vec<(&'p str, &'p FuzzySet)>) {
            match expr {
                Expr::Is(input, set) => out.push((input.as_str(), set)),
                Expr::And(exprs) | Expr::Or(exprs) => {
                    for expr in exprs {
                        parse(expr, out);
                    }
                },
                Expr::Not(expr) => parse(expr, out),
            }
        }

        parse(self, &mut props);

        props
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}
