use num::Float;

/// Evenly spaced samples `min + i * step` for every `i` with `min + i * step <= max`.
///
/// Points are computed from their index rather than by repeated addition so the
/// number of samples doesn't drift with accumulated rounding error.
#[derive(Clone, Debug)]
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    /// An empty grid is produced when `step` isn't a positive finite number, when either
    /// bound isn't finite, or when `max < min`.
    pub fn with_step(min: F, max: F, step: F) -> Self {
        Linspace {
            start: min,
            step,
            index: 0,
            len: sample_count(min, max, step),
        }
    }
}

pub(crate) fn sample_count<F: Float>(min: F, max: F, step: F) -> usize {
    if step <= F::zero() || !step.is_finite() || !min.is_finite() || !max.is_finite() || max < min {
        return 0;
    }

    // floor keeps the final sample at or below max
    ((max - min) / step).floor().to_usize().map_or(0, |n| n + 1)
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * F::from(i)?)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace_includes_max() {
    let xs: Vec<f64> = Linspace::with_step(0., 2., 0.5).collect();

    assert_eq!(xs, vec![0., 0.5, 1., 1.5, 2.]);
}

#[test]
fn test_linspace_partial_last_step() {
    let xs: Vec<f64> = Linspace::with_step(0., 1., 0.25 + 0.125).collect();

    assert_eq!(xs, vec![0., 0.375, 0.75]);
}

#[test]
fn test_linspace_degenerate() {
    assert_eq!(Linspace::with_step(0., 10., 0.).count(), 0);
    assert_eq!(Linspace::with_step(0., 10., -1.).count(), 0);
    assert_eq!(Linspace::with_step(0., 10., f64::NAN).count(), 0);
    assert_eq!(Linspace::with_step(5., 1., 1.).count(), 0);
    assert_eq!(Linspace::with_step(f64::NEG_INFINITY, 1., 1.).count(), 0);

    let single: Vec<f64> = Linspace::with_step(3., 3., 1.).collect();

    assert_eq!(single, vec![3.]);
}
