use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::inputs::Inputs;
use crate::priority::Priority;
use crate::set::FuzzySet;

type Condition = Arc<dyn Fn(&Inputs) -> bool + Send + Sync>;
type LabelFn = Arc<dyn Fn(&Inputs) -> String + Send + Sync>;

/// What a rule produces once its condition holds.
#[derive(Clone)]
pub enum Consequence {
    /// Consumed by defuzzification. Scores zero in label inference.
    Set(FuzzySet),
    /// Produces a priority label from the inputs.
    Label(LabelFn),
    /// Accepted but meaningless: evaluates to an empty payload that scores zero and is
    /// ignored by defuzzification.
    Unrecognized,
}

impl Consequence {
    pub fn label(label: impl Fn(&Inputs) -> String + Send + Sync + 'static) -> Self {
        Consequence::Label(Arc::new(label))
    }

    /// A label function that ignores its inputs.
    pub fn fixed(priority: Priority) -> Self {
        Self::label(move |_| priority.label().to_owned())
    }

    pub fn as_set(&self) -> Option<&FuzzySet> {
        match self {
            Consequence::Set(set) => Some(set),
            Consequence::Label(_) | Consequence::Unrecognized => None,
        }
    }
}

impl From<FuzzySet> for Consequence {
    fn from(set: FuzzySet) -> Self {
        Consequence::Set(set)
    }
}

impl From<Priority> for Consequence {
    fn from(priority: Priority) -> Self {
        Consequence::fixed(priority)
    }
}

impl fmt::Debug for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consequence::Set(set) => f.debug_tuple("Set").field(set).finish(),
            Consequence::Label(_) => f.write_str("Label(..)"),
            Consequence::Unrecognized => f.write_str("Unrecognized"),
        }
    }
}

/// The result carried by a fired rule.
#[derive(Clone, Debug)]
pub enum Payload<'r> {
    Set(&'r FuzzySet),
    Label(String),
    Empty,
}

impl Payload<'_> {
    /// `Urgent` = 3, `High Priority` = 2, `Medium Priority` = 1; any other label, a fuzzy
    /// set or an empty payload = 0.
    pub fn priority_score(&self) -> f64 {
        match self {
            Payload::Label(label) => Priority::from_label(label).map_or(0., Priority::score),
            Payload::Set(_) | Payload::Empty => 0.,
        }
    }

    /// The recognized priority of a label payload.
    pub fn priority(&self) -> Option<Priority> {
        match self {
            Payload::Label(label) => Priority::from_label(label),
            Payload::Set(_) | Payload::Empty => None,
        }
    }
}

/// A fired rule's payload together with the rule's weight.
#[derive(Clone, Debug)]
pub struct Evaluation<'r> {
    pub payload: Payload<'r>,
    pub weight: f64,
}

impl<'r> Evaluation<'r> {
    pub fn new(payload: Payload<'r>, weight: f64) -> Self {
        Self { payload, weight }
    }
}

/// A weighted conditional rule over named inputs.
#[derive(Clone)]
pub struct FuzzyRule {
    condition: Condition,
    consequence: Consequence,
    weight: f64,
}

impl FuzzyRule {
    pub fn new(
        condition: impl Fn(&Inputs) -> bool + Send + Sync + 'static,
        consequence: impl Into<Consequence>,
        weight: f64,
    ) -> Self {
        Self {
            condition: Arc::new(condition),
            consequence: consequence.into(),
            weight,
        }
    }

    pub fn consequence(&self) -> &Consequence {
        &self.consequence
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `None` when the condition doesn't hold. Otherwise the resolved consequence and the
    /// rule's weight.
    pub fn evaluate(&self, inputs: &Inputs) -> Option<Evaluation<'_>> {
        if !(self.condition)(inputs) {
            return None;
        }

        let payload = match &self.consequence {
            Consequence::Set(set) => Payload::Set(set),
            Consequence::Label(label) => Payload::Label(label(inputs)),
            Consequence::Unrecognized => Payload::Empty,
        };

        trace!(?payload, weight = self.weight, "rule fired");

        Some(Evaluation::new(payload, self.weight))
    }
}

impl fmt::Debug for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyRule")
            .field("consequence", &self.consequence)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// An ordered rule list under construction.
#[derive(Clone, Debug, Default)]
pub struct Rules(pub(crate) Vec<FuzzyRule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(
        &mut self,
        condition: impl Fn(&Inputs) -> bool + Send + Sync + 'static,
        consequence: impl Into<Consequence>,
        weight: f64,
    ) {
        self.push(FuzzyRule::new(condition, consequence, weight));
    }

    pub fn push(&mut self, rule: FuzzyRule) {
        self.0.push(rule);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Rules {
    type Item = FuzzyRule;
    type IntoIter = std::vec::IntoIter<FuzzyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<FuzzyRule> for Rules {
    fn from_iter<T: IntoIterator<Item = FuzzyRule>>(iter: T) -> Self {
        Rules(iter.into_iter().collect())
    }
}
