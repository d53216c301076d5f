use std::fmt;
use std::sync::Arc;

use crate::math::{max_nan, min_nan};
use crate::membership::Membership;
use crate::ops::DefuzzificationOp;
use crate::universe::Universe;

type SharedMembership = Arc<dyn Membership + Send + Sync>;

/// A named fuzzy set over the real line.
///
/// Sets are immutable. The combinators build new sets whose membership functions refer
/// back to the operands' functions, so cloning and combining are cheap and a set can be
/// read from several threads at once.
#[derive(Clone)]
pub struct FuzzySet {
    name: String,
    membership: SharedMembership,
}

impl FuzzySet {
    pub fn new(name: impl Into<String>, membership: impl Membership + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            membership: Arc::new(membership),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn membership_degree(&self, x: f64) -> f64 {
        self.membership.degree(x)
    }

    /// Zadeh OR: `max(a(x), b(x))`. NaN if either degree is NaN.
    pub fn union(&self, other: &FuzzySet) -> FuzzySet {
        let (a, b) = (self.membership.clone(), other.membership.clone());

        FuzzySet::new(format!("Union({}, {})", self.name, other.name), move |x: f64| {
            max_nan(a.degree(x), b.degree(x))
        })
    }

    /// Zadeh AND: `min(a(x), b(x))`. NaN if either degree is NaN.
    pub fn intersection(&self, other: &FuzzySet) -> FuzzySet {
        let (a, b) = (self.membership.clone(), other.membership.clone());

        FuzzySet::new(format!("Intersection({}, {})", self.name, other.name), move |x: f64| {
            min_nan(a.degree(x), b.degree(x))
        })
    }

    /// `1 - a(x)`
    pub fn complement(&self) -> FuzzySet {
        let a = self.membership.clone();

        FuzzySet::new(format!("Complement({})", self.name), move |x: f64| 1. - a.degree(x))
    }

    /// `a(x) / max(1, a(x))`
    ///
    /// This clamps degrees above one down to one and leaves everything else untouched.
    /// It does not rescale the set by its peak over a domain.
    pub fn normalize(&self) -> FuzzySet {
        let a = self.membership.clone();

        FuzzySet::new(format!("Normalized({})", self.name), move |x: f64| {
            let mu = a.degree(x);

            mu / f64::max(1., mu)
        })
    }

    /// Center of gravity over the samples `min, min + step, ..., <= max`.
    ///
    /// Returns zero when the set has no membership mass on the samples.
    pub fn centroid(&self, min: f64, max: f64, step: f64) -> f64 {
        self.defuzzify(DefuzzificationOp::Centroid, &Universe::unchecked(min, max, step))
    }

    /// Defuzzificates this set alone with any of the supported methods.
    pub fn defuzzify(&self, op: DefuzzificationOp, universe: &Universe) -> f64 {
        let points = universe.samples().map(|x| (x, self.membership_degree(x)));

        op.call(universe.min(), universe.step(), points)
    }
}

impl fmt::Debug for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzySet").field("name", &self.name).finish_non_exhaustive()
    }
}
