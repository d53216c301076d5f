use fixed_map::Map as FixedMap;
use tracing::{debug, trace};

use crate::inputs::Inputs;
use crate::math::max_nan;
use crate::ops::DefuzzificationOp;
use crate::outputs::Outcome;
use crate::priority::Priority;
use crate::rules::{Evaluation, FuzzyRule};
use crate::set::FuzzySet;
use crate::universe::Universe;

/// Evaluates an ordered rule base.
///
/// One rule base serves two purposes: label rules feed [`InferenceEngine::infer`], while
/// rules whose consequence is a fuzzy set feed the defuzzification methods. The two are
/// independent of each other; defuzzification considers every set consequence regardless
/// of whether its condition would hold.
#[derive(Clone, Debug, Default)]
pub struct InferenceEngine {
    rules: Vec<FuzzyRule>,
}

impl InferenceEngine {
    pub fn new(rules: impl IntoIterator<Item = FuzzyRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    /// Evaluates every rule in order and keeps the ones that fired.
    pub fn evaluate(&self, inputs: &Inputs) -> Vec<Evaluation<'_>> {
        self.rules.iter().filter_map(|rule| rule.evaluate(inputs)).collect()
    }

    pub fn infer(&self, inputs: &Inputs) -> Priority {
        self.infer_outcome(inputs).priority()
    }

    pub fn infer_outcome(&self, inputs: &Inputs) -> Outcome {
        let results = self.evaluate(inputs);

        Self::aggregate(&results)
    }

    /// Weighted average of the results' priority scores, mapped back onto the priority
    /// scale. No results, or a total weight of zero or less, is [`Priority::Low`].
    pub fn aggregate_results(results: &[Evaluation<'_>]) -> Priority {
        Self::aggregate(results).priority()
    }

    fn aggregate(results: &[Evaluation<'_>]) -> Outcome {
        let mut weights: FixedMap<Priority, f64> = FixedMap::new();
        let mut total_weight = 0.;
        let mut weighted_sum = 0.;

        for result in results {
            weighted_sum += result.payload.priority_score() * result.weight;
            total_weight += result.weight;

            if let Some(priority) = result.payload.priority() {
                let tally = weights.get(priority).copied().unwrap_or(0.);

                weights.insert(priority, tally + result.weight);
            }
        }

        let score = if total_weight > 0. {
            Some(weighted_sum / total_weight)
        } else {
            None
        };
        let priority = score.map_or(Priority::Low, Priority::from_score);

        debug!(fired = results.len(), total_weight, ?score, %priority, "aggregated rule results");

        Outcome::new(priority, score, results.len(), weights)
    }

    /// Fuzzy set consequences in rule order. Label rules are skipped.
    pub fn fuzzy_set_consequences(&self) -> Vec<&FuzzySet> {
        self.rules.iter().filter_map(|rule| rule.consequence().as_set()).collect()
    }

    /// Pointwise maximum over all set consequences, never below zero. A NaN degree from any
    /// set makes the aggregate NaN at that point.
    pub fn aggregate_membership(&self, x: f64) -> f64 {
        Self::max_membership(&self.fuzzy_set_consequences(), x)
    }

    fn max_membership(sets: &[&FuzzySet], x: f64) -> f64 {
        sets.iter().fold(0., |mu, set| max_nan(mu, set.membership_degree(x)))
    }

    pub fn defuzzify(&self, op: DefuzzificationOp, universe: &Universe) -> f64 {
        let sets = self.fuzzy_set_consequences();

        if sets.is_empty() {
            debug!(?op, "no fuzzy set consequences to defuzzificate");
        }

        let points = universe.samples().map(|x| (x, Self::max_membership(&sets, x)));
        let crisp = op.call(universe.min(), universe.step(), points);

        trace!(?op, samples = universe.len(), crisp, "defuzzificated");

        crisp
    }

    /// Center of gravity of the aggregated membership over `min, min + step, ..., <= max`.
    /// Zero when there is no membership mass.
    pub fn defuzzify_centroid(&self, min: f64, max: f64, step: f64) -> f64 {
        self.defuzzify(DefuzzificationOp::Centroid, &Universe::unchecked(min, max, step))
    }

    /// Mean of the samples at which the aggregated membership peaks. Peaks are compared
    /// with exact float equality. Zero when nothing has positive membership.
    pub fn defuzzify_mom(&self, min: f64, max: f64, step: f64) -> f64 {
        self.defuzzify(DefuzzificationOp::MeanOfMaxima, &Universe::unchecked(min, max, step))
    }

    /// First sample at which the accumulated area reaches half the total area, or `min`.
    pub fn defuzzify_bisector(&self, min: f64, max: f64, step: f64) -> f64 {
        self.defuzzify(DefuzzificationOp::Bisector, &Universe::unchecked(min, max, step))
    }
}

impl FromIterator<FuzzyRule> for InferenceEngine {
    fn from_iter<T: IntoIterator<Item = FuzzyRule>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::{Piecewise, Trapezoidal, Triangular};
    use crate::rules::{Consequence, Payload, Rules};

    fn label(label: &str, weight: f64) -> Evaluation<'static> {
        Evaluation::new(Payload::Label(label.to_owned()), weight)
    }

    fn task_engine() -> InferenceEngine {
        let urgency = FuzzySet::new("Urgency", Piecewise::new([(3., 0.), (7., 1.)]));
        let complexity = FuzzySet::new("Complexity", Piecewise::new([(2., 0.), (5., 1.)]));
        let urgent_output = FuzzySet::new("UrgentOutput", Piecewise::new([(6., 0.), (9., 1.)]));
        let mut rules = Rules::new();

        {
            let (urgency, complexity) = (urgency.clone(), complexity.clone());

            rules.add(
                move |inputs| {
                    urgency.membership_degree(inputs.value("urgency")) > 0.5
                        && complexity.membership_degree(inputs.value("complexity")) > 0.5
                },
                urgent_output,
                0.1,
            );
        }
        {
            let (urgency, complexity) = (urgency.clone(), complexity.clone());

            rules.add(
                move |inputs| urgency.membership_degree(inputs.value("urgency")) > 0.7,
                Consequence::label(move |inputs| {
                    if complexity.membership_degree(inputs.value("complexity")) > 0.5 {
                        "Urgent".to_owned()
                    } else {
                        "High Priority".to_owned()
                    }
                }),
                1.,
            );
        }
        {
            let urgency = urgency.clone();

            rules.add(
                move |inputs| {
                    let mu = urgency.membership_degree(inputs.value("urgency"));

                    mu > 0.3 && mu <= 0.7
                },
                Consequence::label(|_| "Medium Priority".to_owned()),
                0.8,
            );
        }
        rules.add(
            move |inputs| urgency.membership_degree(inputs.value("urgency")) <= 0.3,
            Priority::Low,
            0.5,
        );

        InferenceEngine::new(rules)
    }

    #[test]
    fn test_task_priority() {
        let engine = task_engine();

        assert_eq!(engine.infer(&Inputs::from([("urgency", 8.), ("complexity", 6.)])), Priority::Urgent);
        assert_eq!(engine.infer(&Inputs::from([("urgency", 8.), ("complexity", 1.)])), Priority::High);
        assert_eq!(engine.infer(&Inputs::from([("urgency", 5.), ("complexity", 6.)])), Priority::Medium);
        assert_eq!(engine.infer(&Inputs::from([("urgency", 1.), ("complexity", 6.)])), Priority::Low);
        assert_eq!(engine.infer(&Inputs::from([("urgency", 8.), ("complexity", 6.)])).to_string(), "Urgent");
    }

    #[test]
    fn test_task_outcome() {
        let engine = task_engine();
        let outcome = engine.infer_outcome(&Inputs::from([("urgency", 8.), ("complexity", 6.)]));

        assert_eq!(outcome.priority(), Priority::Urgent);
        assert_eq!(outcome.fired(), 2);
        assert_eq!(outcome.score(), Some(3. / 1.1));
        assert_eq!(outcome.weight_of(Priority::Urgent), 1.);
        assert_eq!(outcome.weight_of(Priority::High), 0.);
    }

    #[test]
    fn test_task_defuzzification() {
        let engine = task_engine();

        assert_eq!(engine.fuzzy_set_consequences().len(), 1);
        assert_eq!(engine.defuzzify_mom(0., 10., 0.5), 9.5);
        assert!(engine.defuzzify_centroid(0., 10., 0.5) > 7.5);

        let bisector = engine.defuzzify_bisector(0., 10., 0.5);

        assert!((7.5..=9.5).contains(&bisector));
    }

    #[test]
    fn test_aggregate_empty_and_single() {
        assert_eq!(InferenceEngine::aggregate_results(&[]), Priority::Low);
        assert_eq!(InferenceEngine::aggregate_results(&[label("Urgent", 1.)]), Priority::Urgent);
    }

    #[test]
    fn test_aggregate_boundaries() {
        let exactly = |a: &str, b: &str| InferenceEngine::aggregate_results(&[label(a, 1.), label(b, 1.)]);

        assert_eq!(exactly("Urgent", "High Priority"), Priority::Urgent);
        assert_eq!(exactly("High Priority", "Medium Priority"), Priority::High);
        assert_eq!(exactly("Medium Priority", "Low Priority"), Priority::Medium);
        assert_eq!(
            InferenceEngine::aggregate_results(&[label("Medium Priority", 1.), label("Low Priority", 2.)]),
            Priority::Low
        );
    }

    #[test]
    fn test_aggregate_non_labels_score_zero() {
        let set = FuzzySet::new("Anything", |_: f64| 1.);
        let results = [
            label("Urgent", 1.),
            Evaluation::new(Payload::Set(&set), 1.),
            Evaluation::new(Payload::Empty, 1.),
            label("Panic", 1.),
        ];

        // 3 / 4
        assert_eq!(InferenceEngine::aggregate_results(&results), Priority::Medium);
    }

    #[test]
    fn test_aggregate_without_weight() {
        assert_eq!(InferenceEngine::aggregate_results(&[label("Urgent", 0.)]), Priority::Low);
        assert_eq!(
            InferenceEngine::aggregate_results(&[label("Urgent", 1.), label("High Priority", -1.)]),
            Priority::Low
        );

        let outcome = InferenceEngine::aggregate(&[label("Urgent", 0.)]);

        assert_eq!(outcome.score(), None);
        assert_eq!(outcome.fired(), 1);
    }

    #[test]
    fn test_no_rules_fire() {
        let engine = InferenceEngine::new([FuzzyRule::new(|_| false, Priority::Urgent, 1.)]);

        assert_eq!(engine.infer(&Inputs::new()), Priority::Low);
        assert_eq!(engine.infer_outcome(&Inputs::new()).fired(), 0);
    }

    #[test]
    fn test_defuzzify_without_sets() {
        let engine = InferenceEngine::new([
            FuzzyRule::new(|_| true, Priority::High, 1.),
            FuzzyRule::new(|_| true, Consequence::Unrecognized, 1.),
        ]);

        assert!(engine.fuzzy_set_consequences().is_empty());
        assert_eq!(engine.defuzzify_centroid(0., 10., 0.5), 0.);
        assert_eq!(engine.defuzzify_mom(0., 10., 0.5), 0.);
        assert_eq!(engine.defuzzify_bisector(2., 10., 0.5), 2.);

        let empty = InferenceEngine::default();

        assert_eq!(empty.defuzzify_centroid(0., 10., 0.5), 0.);
        assert_eq!(empty.defuzzify_mom(0., 10., 0.5), 0.);
        assert_eq!(empty.defuzzify_bisector(0., 10., 0.5), 0.);
    }

    #[test]
    fn test_nan_membership_propagates() {
        let undefined = FuzzySet::new("Undefined", |_: f64| f64::NAN);
        let engine = InferenceEngine::new([
            FuzzyRule::new(|_| true, FuzzySet::new("Medium", Triangular::new(2., 5., 8.)), 1.),
            FuzzyRule::new(|_| true, undefined.clone(), 1.),
        ]);

        assert!(engine.aggregate_membership(5.).is_nan());
        assert!(engine.defuzzify_centroid(0., 10., 0.5).is_nan());
        assert!(undefined.centroid(0., 10., 0.5).is_nan());
        // NaN samples never become the running maximum, leaving no peak
        assert_eq!(engine.defuzzify_mom(0., 10., 0.5), 0.);
        // A NaN total area is never reached
        assert_eq!(engine.defuzzify_bisector(2., 10., 0.5), 2.);
        // Label inference doesn't read set consequences
        assert_eq!(engine.infer(&Inputs::new()), Priority::Low);
    }

    #[test]
    fn test_infinite_membership() {
        let spike = FuzzySet::new("Spike", |x: f64| if x == 2. { f64::INFINITY } else { 0. });
        let engine = InferenceEngine::new([
            FuzzyRule::new(|_| true, spike, 1.),
            FuzzyRule::new(|_| true, FuzzySet::new("Medium", Triangular::new(2., 5., 8.)), 1.),
        ]);

        assert_eq!(engine.aggregate_membership(2.), f64::INFINITY);
        assert!(engine.defuzzify_centroid(1., 9., 1.).is_nan());
        assert_eq!(engine.defuzzify_mom(1., 9., 1.), 2.);
        assert_eq!(engine.defuzzify_bisector(1., 9., 1.), 2.);
    }

    #[test]
    fn test_defuzzify_two_peaks() {
        let engine: InferenceEngine = [
            FuzzyRule::new(|_| true, FuzzySet::new("Left", Triangular::new(0., 2., 4.)), 1.),
            FuzzyRule::new(|_| false, FuzzySet::new("Right", Triangular::new(6., 8., 10.)), 1.),
        ]
        .into_iter()
        .collect();

        assert_eq!(engine.aggregate_membership(2.), 1.);
        assert_eq!(engine.aggregate_membership(5.), 0.);
        assert!((engine.defuzzify_centroid(0., 10., 0.5) - 5.).abs() < 1e-9);
        assert_eq!(engine.defuzzify_mom(0., 10., 0.5), 5.);
        assert_eq!(engine.defuzzify_bisector(0., 10., 0.5), 3.5);
    }

    #[test]
    fn test_mom_plateau() {
        let engine = InferenceEngine::new([
            FuzzyRule::new(|_| true, FuzzySet::new("Plateau", Trapezoidal::new(2., 4., 6., 9.)), 1.),
            FuzzyRule::new(|_| true, FuzzySet::new("Early", |x: f64| if x < 3. { 0.4 } else { 0. }), 1.),
        ]);

        assert_eq!(engine.defuzzify_mom(0., 10., 0.5), 5.);
        assert_eq!(engine.defuzzify_mom(0., 10., 0.25), 5.);
    }

    #[test]
    fn test_defuzzify_matches_named_methods() {
        let engine = task_engine();
        let universe = Universe::new(0., 10., 0.5).unwrap();

        assert_eq!(
            engine.defuzzify(DefuzzificationOp::Centroid, &universe),
            engine.defuzzify_centroid(0., 10., 0.5)
        );
        assert_eq!(
            engine.defuzzify(DefuzzificationOp::Bisector, &universe).to_bits(),
            engine.defuzzify_bisector(0., 10., 0.5).to_bits()
        );
    }

    #[test]
    fn test_single_set_centroid_agrees() {
        let medium = FuzzySet::new("Medium", Triangular::new(2., 5., 8.));
        let engine = InferenceEngine::new([FuzzyRule::new(|_| true, medium.clone(), 1.)]);

        assert_eq!(engine.defuzzify_centroid(0., 10., 0.1), medium.centroid(0., 10., 0.1));
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<InferenceEngine>();
        assert_send_sync::<FuzzySet>();

        let engine = task_engine();
        let inputs = Inputs::from([("urgency", 8.), ("complexity", 6.)]);
        let expected = engine.defuzzify_centroid(0., 10., 0.1);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (engine.infer(&inputs), engine.defuzzify_centroid(0., 10., 0.1))))
                .collect();

            for handle in handles {
                let (priority, centroid) = handle.join().unwrap();

                assert_eq!(priority, Priority::Urgent);
                assert_eq!(centroid.to_bits(), expected.to_bits());
            }
        });
    }
}
