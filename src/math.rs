use num::Float;

/// Similar to numpy.interp for a single point: linear interpolation between
/// `coords`, holding the first and last `y` values outside the covered range.
///
/// `coords` must be sorted by `x`. An empty slice yields zero.
pub(crate) fn interp<F: Float>(x: F, coords: &[(F, F)]) -> F {
    let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) = (coords.first(), coords.last()) else {
        return F::zero();
    };

    // Base cases
    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    for window in coords.windows(2) {
        let (x1, y1) = window[0];
        let (x2, y2) = window[1];

        // Actual interpolation
        if x1 <= x && x <= x2 {
            if x2 == x1 {
                return y2;
            }

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    // Only reachable for NaN input
    x
}

/// `max` that returns NaN when either operand is NaN, unlike `Float::max`.
#[inline]
pub(crate) fn max_nan<F: Float>(a: F, b: F) -> F {
    if a.is_nan() || b.is_nan() {
        F::nan()
    } else {
        a.max(b)
    }
}

/// `min` that returns NaN when either operand is NaN, unlike `Float::min`.
#[inline]
pub(crate) fn min_nan<F: Float>(a: F, b: F) -> F {
    if a.is_nan() || b.is_nan() {
        F::nan()
    } else {
        a.min(b)
    }
}

#[test]
fn test_interp() {
    let xs = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];
    let ys: Vec<f64> = xs.iter().map(|x| interp(*x, &coords)).collect();

    assert_eq!(ys, vec![3., 3., 2.5, 0.5599999999999996, 0.]);

    let xs = [2.5, -1., 7.5];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];
    let ys: Vec<f64> = xs.iter().map(|x| interp(*x, &coords)).collect();

    assert_eq!(ys, vec![4., 0., 2.]);
}

#[test]
fn test_interp_edges() {
    assert_eq!(interp::<f64>(1., &[]), 0.);
    assert_eq!(interp(10., &[(2., 0.7)]), 0.7);
    // Vertical step takes the right-hand value
    assert_eq!(interp(5., &[(0., 0.), (5., 0.), (5., 1.), (9., 1.)]), 0.);
    assert_eq!(interp(6., &[(0., 0.), (5., 0.), (5., 1.), (9., 1.)]), 1.);
    assert!(interp(f64::NAN, &[(0., 0.), (1., 1.)]).is_nan());
}

#[test]
fn test_nan_aware_extrema() {
    assert_eq!(max_nan(0.25, 0.75), 0.75);
    assert_eq!(min_nan(0.25, 0.75), 0.25);
    assert_eq!(max_nan(f64::INFINITY, 1.), f64::INFINITY);
    assert!(max_nan(f64::NAN, 1.).is_nan());
    assert!(max_nan(1., f64::NAN).is_nan());
    assert!(min_nan(f64::NAN, 0.).is_nan());
    assert!(min_nan(0., f64::NAN).is_nan());
    // std's max/min drop the NaN operand
    assert_eq!(f64::max(f64::NAN, 1.), 1.);
}
