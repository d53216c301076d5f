use thiserror::Error;

/// Errors raised while configuring universes and linguistic variables.
///
/// Inference and defuzzification themselves never fail; degenerate inputs produce
/// documented fallback values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    #[error("invalid universe [{min}, {max}] with step {step}: bounds must be finite with min <= max and step > 0")]
    InvalidUniverse { min: f64, max: f64, step: f64 },

    #[error("variable `{variable}` has no term named `{term}`")]
    UnknownTerm { variable: String, term: String },

    #[error("variable `{variable}` already has a term named `{term}`")]
    DuplicateTerm { variable: String, term: String },
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
