use crate::dsl::Expr;
use crate::error::{FuzzyError, Result};
use crate::inference::InferenceEngine;
use crate::ops::DefuzzificationOp;
use crate::set::FuzzySet;
use crate::universe::Universe;

/// A named linguistic variable: a universe of discourse and the terms defined over it.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    universe: Universe,
    terms: Vec<FuzzySet>,
}

impl Variable {
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Terms are keyed by their set's name, which must be unique within the variable.
    pub fn add_term(&mut self, set: FuzzySet) -> Result<()> {
        if self.terms.iter().any(|term| term.name() == set.name()) {
            return Err(FuzzyError::DuplicateTerm {
                variable: self.name.clone(),
                term: set.name().to_owned(),
            });
        }

        self.terms.push(set);

        Ok(())
    }

    pub fn with_term(mut self, set: FuzzySet) -> Result<Self> {
        self.add_term(set)?;

        Ok(self)
    }

    pub fn terms(&self) -> &[FuzzySet] {
        &self.terms
    }

    pub fn term(&self, name: &str) -> Result<&FuzzySet> {
        self.terms
            .iter()
            .find(|term| term.name() == name)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.name.clone(),
                term: name.to_owned(),
            })
    }

    /// Degree of every term at `value`, in insertion order. Values outside the universe
    /// are clamped onto it first.
    pub fn fuzzify(&self, value: f64) -> Vec<(&str, f64)> {
        let x = value.clamp(self.universe.min(), self.universe.max());

        self.terms.iter().map(|term| (term.name(), term.membership_degree(x))).collect()
    }

    /// A premise reading this variable's input under the named term.
    pub fn is(&self, term: &str) -> Result<Expr> {
        Ok(Expr::is(self.name.as_str(), self.term(term)?.clone()))
    }

    /// Defuzzificates the engine's aggregated output over this variable's universe.
    pub fn defuzzify(&self, engine: &InferenceEngine, op: DefuzzificationOp) -> f64 {
        engine.defuzzify(op, &self.universe)
    }
}
