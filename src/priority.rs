use std::fmt;

use fixed_map::Key;

/// The linguistic output scale of label inference.
///
/// Labels map to scores `Low = 0`, `Medium = 1`, `High = 2`, `Urgent = 3`. Weighted average
/// scores map back through bands that include their lower bound: `>= 2.5` is urgent,
/// `>= 1.5` high, `>= 0.5` medium and anything else low.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
            Self::Urgent => "Urgent",
        }
    }

    /// Exact, case sensitive match against [`Priority::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    pub fn score(self) -> f64 {
        match self {
            Self::Low => 0.,
            Self::Medium => 1.,
            Self::High => 2.,
            Self::Urgent => 3.,
        }
    }

    pub fn from_score(score: f64) -> Self {
        if score >= 2.5 {
            Self::Urgent
        } else if score >= 1.5 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PartialEq<&str> for Priority {
    fn eq(&self, other: &&str) -> bool {
        self.label() == *other
    }
}

#[test]
fn test_labels_round_trip() {
    for priority in Priority::ALL {
        assert_eq!(Priority::from_label(priority.label()), Some(priority));
        assert_eq!(priority.to_string(), priority.label());
    }

    assert_eq!(Priority::from_label("urgent"), None);
    assert_eq!(Priority::from_label("Critical"), None);
    assert_eq!(Priority::Urgent, "Urgent");
}

#[test]
fn test_score_bands() {
    assert_eq!(Priority::from_score(3.), Priority::Urgent);
    assert_eq!(Priority::from_score(2.5), Priority::Urgent);
    assert_eq!(Priority::from_score(2.4999999), Priority::High);
    assert_eq!(Priority::from_score(1.5), Priority::High);
    assert_eq!(Priority::from_score(1.4999999), Priority::Medium);
    assert_eq!(Priority::from_score(0.5), Priority::Medium);
    assert_eq!(Priority::from_score(0.4999999), Priority::Low);
    assert_eq!(Priority::from_score(-1.), Priority::Low);
    assert_eq!(Priority::from_score(f64::NAN), Priority::Low);
}

#[test]
fn test_score_is_inverse_of_from_score() {
    for priority in Priority::ALL {
        assert_eq!(Priority::from_score(priority.score()), priority);
    }
}
