use crate::error::{FuzzyError, Result};
use crate::linspace::{sample_count, Linspace};

/// Default sampling step, matching the resolution most rule bases are tuned for.
pub const DEFAULT_STEP: f64 = 0.1;

/// A validated one-dimensional sampling domain `[min, max]` with a fixed step.
///
/// The samples are `min + i * step` for `i` in `0..=floor((max - min) / step)`. The exact
/// count feeds directly into every integration result, so all defuzzification routines
/// share this grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if sample_count(min, max, step) == 0 {
            return Err(FuzzyError::InvalidUniverse { min, max, step });
        }

        Ok(Self { min, max, step })
    }

    /// Uses [`DEFAULT_STEP`].
    pub fn with_default_step(min: f64, max: f64) -> Result<Self> {
        Self::new(min, max, DEFAULT_STEP)
    }

    pub fn with_step(self, step: f64) -> Result<Self> {
        Self::new(self.min, self.max, step)
    }

    /// Skips validation. An invalid domain simply yields no samples.
    pub(crate) fn unchecked(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        sample_count(self.min, self.max, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn samples(&self) -> Linspace<f64> {
        Linspace::with_step(self.min, self.max, self.step)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

#[test]
fn test_universe_validation() {
    assert!(Universe::new(0., 10., 0.5).is_ok());
    assert!(Universe::new(1., 1., 0.5).is_ok());

    assert_eq!(
        Universe::new(0., 10., 0.),
        Err(FuzzyError::InvalidUniverse {
            min: 0.,
            max: 10.,
            step: 0.
        })
    );
    assert!(Universe::new(10., 0., 1.).is_err());
    assert!(Universe::new(0., f64::INFINITY, 1.).is_err());
    assert!(Universe::new(0., 1., f64::NAN).is_err());
}

#[test]
fn test_universe_samples() {
    let universe = Universe::new(0., 10., 2.5).unwrap();

    assert_eq!(universe.len(), 5);
    assert_eq!(universe.samples().collect::<Vec<_>>(), vec![0., 2.5, 5., 7.5, 10.]);
    assert!(universe.contains(10.));
    assert!(!universe.contains(10.5));

    let coarse = universe.with_step(4.).unwrap();

    assert_eq!(coarse.samples().collect::<Vec<_>>(), vec![0., 4., 8.]);
    assert_eq!(Universe::with_default_step(0., 1.).unwrap().step(), DEFAULT_STEP);
}
