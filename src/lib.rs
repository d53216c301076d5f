//! Fuzzy sets, weighted fuzzy rules, priority inference and defuzzification.
//!
//! A rule base mixes two kinds of rules. Label rules produce a [`Priority`] label and are
//! combined by [`InferenceEngine::infer`] into a weighted average on the priority scale.
//! Rules whose consequence is a [`FuzzySet`] are combined by pointwise maximum and turned
//! back into a crisp number by [`InferenceEngine::defuzzify_centroid`],
//! [`InferenceEngine::defuzzify_mom`] or [`InferenceEngine::defuzzify_bisector`].
//!
//! ```
//! use fuzzymind::{Consequence, FuzzyRule, FuzzySet, InferenceEngine, Inputs, Piecewise, Priority};
//!
//! let urgency = FuzzySet::new("Urgency", Piecewise::new([(3., 0.), (7., 1.)]));
//! let urgent = FuzzySet::new("Urgent", Piecewise::new([(6., 0.), (9., 1.)]));
//!
//! let engine = InferenceEngine::new([
//!     FuzzyRule::new(move |inputs| urgency.membership_degree(inputs.value("urgency")) > 0.7, Priority::Urgent, 1.),
//!     FuzzyRule::new(|_| true, urgent, 0.1),
//!     FuzzyRule::new(|inputs| inputs.value("urgency") < 3., Consequence::label(|_| "Low Priority".into()), 1.),
//! ]);
//!
//! let inputs = Inputs::from([("urgency", 8.), ("complexity", 6.)]);
//!
//! assert_eq!(engine.infer(&inputs), Priority::Urgent);
//! assert_eq!(engine.defuzzify_mom(0., 10., 0.5), 9.5);
//! ```

mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod priority;
mod rules;
mod set;
mod universe;
mod variable;

pub use dsl::Expr;
pub use error::{FuzzyError, Result};
pub use inference::InferenceEngine;
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use membership::{Membership, Piecewise, Trapezoidal, Triangular};
pub use ops::DefuzzificationOp;
pub use outputs::Outcome;
pub use priority::Priority;
pub use rules::{Consequence, Evaluation, FuzzyRule, Payload, Rules};
pub use set::FuzzySet;
pub use universe::{Universe, DEFAULT_STEP};
pub use variable::Variable;
