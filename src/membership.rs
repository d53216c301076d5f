//! Membership functions.
//!
//! Anything implementing [`Membership`] can back a [`FuzzySet`](crate::FuzzySet), including
//! plain closures `Fn(f64) -> f64`. Implementations must be pure: the same `x` always maps
//! to the same degree.

use crate::math::interp;

/// Maps a crisp value to a degree of membership, conventionally within `[0, 1]`.
pub trait Membership {
    fn degree(&self, x: f64) -> f64;
}

impl<F> Membership for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn degree(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Rises linearly from `a` to a peak of one at `b`, then falls back to zero at `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangular {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Membership for Triangular {
    fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x <= a || x >= c {
            0.
        } else if x <= b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        }
    }
}

/// Zero outside `(a, d)`, one on `[b, c]`, linear on the shoulders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoidal {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Trapezoidal {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

impl Membership for Trapezoidal {
    fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c, d } = *self;

        if x >= b && x <= c {
            1.
        } else if x <= a || x >= d {
            0.
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (d - x) / (d - c)
        }
    }
}

/// Linear interpolation between `(x, degree)` points, holding the end values
/// outside the covered range.
///
/// A ramp that is zero below 3 and reaches one at 7 is `Piecewise::new([(3., 0.), (7., 1.)])`.
#[derive(Clone, Debug, PartialEq)]
pub struct Piecewise(Vec<(f64, f64)>);

impl Piecewise {
    /// Points are sorted by `x`; ties keep their given order.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut points: Vec<_> = points.into_iter().collect();

        points.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        Piecewise(points)
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.0
    }
}

impl Membership for Piecewise {
    fn degree(&self, x: f64) -> f64 {
        interp(x, &self.0)
    }
}

#[test]
fn test_closure_membership() {
    let double = |x: f64| x * 2.;

    assert_eq!(double.degree(0.25), 0.5);
}

#[test]
fn test_triangular() {
    let tri = Triangular::new(2., 5., 8.);

    assert_eq!(tri.degree(2.), 0.);
    assert_eq!(tri.degree(3.5), 0.5);
    assert_eq!(tri.degree(5.), 1.);
    assert_eq!(tri.degree(6.5), 0.5);
    assert_eq!(tri.degree(8.), 0.);
    assert_eq!(tri.degree(-100.), 0.);
}

#[test]
fn test_trapezoidal() {
    let trap = Trapezoidal::new(2., 4., 6., 9.);

    assert_eq!(trap.degree(1.), 0.);
    assert_eq!(trap.degree(3.), 0.5);
    assert_eq!(trap.degree(4.), 1.);
    assert_eq!(trap.degree(6.), 1.);
    assert_eq!(trap.degree(7.5), 0.5);
    assert_eq!(trap.degree(9.), 0.);
}

#[test]
fn test_piecewise_ramp() {
    let ramp = Piecewise::new([(7., 1.), (3., 0.)]);

    assert_eq!(ramp.points(), &[(3., 0.), (7., 1.)]);
    assert_eq!(ramp.degree(0.), 0.);
    assert_eq!(ramp.degree(3.), 0.);
    assert_eq!(ramp.degree(5.), 0.5);
    assert_eq!(ramp.degree(7.), 1.);
    assert_eq!(ramp.degree(8.), 1.);
}
