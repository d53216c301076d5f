use std::ops::AddAssign;

use num::Float;

/// Method for defuzzificating a sampled membership function.
///
/// Every method reads the same input: `(x, μ(x))` pairs in grid order, plus the domain
/// start and step used to build the grid. The pairs are streamed; nothing is buffered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefuzzificationOp {
    /// Center of gravity: `Σ x·μ(x) / Σ μ(x)`. Zero if there is no membership mass.
    Centroid,
    /// Mean of the values for which the membership function is maximum.
    /// Zero if no sample has positive membership. NaN samples are never a maximum.
    MeanOfMaxima,
    /// First sample at which the accumulated area reaches half of the total area.
    /// The domain start if that never happens.
    Bisector,
}

impl DefuzzificationOp {
    /// The bisector walks the points twice, once for the total area and once to find the
    /// half-way sample, so the iterator must be cheap to clone.
    pub fn call<F, I>(self, min: F, step: F, points: I) -> F
    where
        F: Float + AddAssign,
        I: IntoIterator<Item = (F, F)>,
        I::IntoIter: Clone,
    {
        let points = points.into_iter();

        match self {
            Self::Centroid => {
                let mut num = F::zero();
                let mut den = F::zero();

                for (x, mu) in points {
                    num += x * mu;
                    den += mu;
                }

                if den == F::zero() {
                    F::zero()
                } else {
                    num / den
                }
            },
            Self::MeanOfMaxima => {
                let mut max_mu = F::zero();
                let mut sum_x = F::zero();
                let mut count = 0usize;

                // Ties use exact float equality; near-equal peaks are distinct maxima
                for (x, mu) in points {
                    if mu > max_mu {
                        max_mu = mu;
                        sum_x = x;
                        count = 1;
                    } else if mu == max_mu {
                        sum_x += x;
                        count += 1;
                    }
                }

                if count == 0 || max_mu == F::zero() {
                    return F::zero();
                }

                F::from(count).map_or(F::zero(), |count| sum_x / count)
            },
            Self::Bisector => {
                let total_area = points.clone().fold(F::zero(), |area, (_, mu)| area + mu * step);
                let half = total_area / (F::one() + F::one());
                let mut left_area = F::zero();

                // A NaN half never compares, so the scan falls through to min
                for (x, mu) in points {
                    left_area += mu * step;

                    if left_area >= half {
                        return x;
                    }
                }

                min
            },
        }
    }
}

#[cfg(test)]
fn sample(min: f64, max: f64, step: f64, f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
    crate::linspace::Linspace::with_step(min, max, step).map(|x| (x, f(x))).collect()
}

#[test]
fn test_centroid() {
    let points = sample(0., 4., 1., |x| if x >= 2. { 1. } else { 0. });

    assert_eq!(DefuzzificationOp::Centroid.call(0., 1., points.iter().copied()), 3.);

    let zeros = sample(0., 4., 1., |_| 0.);

    assert_eq!(DefuzzificationOp::Centroid.call(0., 1., zeros), 0.);
    assert_eq!(DefuzzificationOp::Centroid.call(0., 1., Vec::<(f64, f64)>::new()), 0.);
}

#[test]
fn test_mean_of_maxima_plateau() {
    let points = sample(0., 10., 0.5, |x| {
        if (4. ..=6.).contains(&x) {
            0.9
        } else if x > 2. && x < 8. {
            0.4
        } else {
            0.
        }
    });

    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(0., 0.5, points), 5.);
}

#[test]
fn test_mean_of_maxima_exact_ties_only() {
    let points = [(1., 0.7), (2., 0.7 + 1e-12), (3., 0.7)];

    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(1., 1., points), 2.);

    let points = [(1., 0.7), (2., 0.2), (3., 0.7)];

    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(1., 1., points), 2.);
}

#[test]
fn test_mean_of_maxima_degenerate() {
    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(0., 1., Vec::<(f64, f64)>::new()), 0.);
    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(3., 1., [(3., 0.), (4., 0.), (5., 0.)]), 0.);
}

#[test]
fn test_bisector() {
    let points = sample(0., 9., 1., |_| 1.);

    // Total area 10, half reached at the fifth sample
    assert_eq!(DefuzzificationOp::Bisector.call(0., 1., points), 4.);

    let points = sample(0., 10., 1., |x| if x >= 8. { 1. } else { 0. });

    assert_eq!(DefuzzificationOp::Bisector.call(0., 1., points), 9.);
}

#[test]
fn test_bisector_degenerate() {
    let points = sample(2., 6., 1., |_| 0.);

    assert_eq!(DefuzzificationOp::Bisector.call(2., 1., points), 2.);
    assert_eq!(DefuzzificationOp::Bisector.call(2., 1., Vec::<(f64, f64)>::new()), 2.);
}

#[test]
fn test_non_finite_membership() {
    let nan = [(1., 0.5), (2., f64::NAN), (3., 1.)];

    assert!(DefuzzificationOp::Centroid.call(1., 1., nan).is_nan());
    // NaN is skipped by the running maximum
    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(1., 1., nan), 3.);
    assert_eq!(DefuzzificationOp::Bisector.call(1., 1., nan), 1.);

    let inf = [(1., 0.), (2., f64::INFINITY), (3., 0.)];

    // inf / inf
    assert!(DefuzzificationOp::Centroid.call(1., 1., inf).is_nan());
    assert_eq!(DefuzzificationOp::MeanOfMaxima.call(1., 1., inf), 2.);
    assert_eq!(DefuzzificationOp::Bisector.call(1., 1., inf), 2.);
}

#[test]
fn test_streams_lazily() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let points = crate::linspace::Linspace::with_step(0., 9., 1.).map(|x| {
        calls.set(calls.get() + 1);
        (x, 1.)
    });

    assert_eq!(DefuzzificationOp::Bisector.call(0., 1., points), 4.);
    // Ten samples for the total area, then five until the half-way point
    assert_eq!(calls.get(), 15);
}
