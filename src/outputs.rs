use fixed_map::Map as FixedMap;

use crate::priority::Priority;

/// Detailed result of label inference.
#[derive(Clone, Debug)]
pub struct Outcome {
    priority: Priority,
    score: Option<f64>,
    fired: usize,
    weights: FixedMap<Priority, f64>,
}

impl Outcome {
    pub(crate) fn new(priority: Priority, score: Option<f64>, fired: usize, weights: FixedMap<Priority, f64>) -> Self {
        Self {
            priority,
            score,
            fired,
            weights,
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Weighted average score, or `None` when nothing fired or the fired rules'
    /// weights sum to zero or less.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Number of rules whose condition held.
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Total weight of fired rules whose payload was this priority's label.
    pub fn weight_of(&self, priority: Priority) -> f64 {
        self.weights.get(priority).copied().unwrap_or(0.)
    }
}
