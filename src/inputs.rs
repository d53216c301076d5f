use std::collections::HashMap;

/// Named crisp input values handed to rule conditions and label functions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) HashMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Inputs(HashMap::with_capacity(capacity))
    }

    /// Replaces any previous value under the same name.
    pub fn add(&mut self, name: impl Into<String>, val: f64) {
        self.0.insert(name.into(), val);
    }

    pub fn with(mut self, name: impl Into<String>, val: f64) -> Self {
        self.add(name, val);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Same as [`Inputs::get`], but a missing input reads as zero.
    pub fn value(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, val)| (name.as_str(), *val))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Inputs {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Inputs(iter.into_iter().map(|(name, val)| (name.into(), val)).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for Inputs {
    fn from(pairs: [(S, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[test]
fn test_inputs() {
    let mut inputs = Inputs::from([("urgency", 8.), ("complexity", 6.)]);

    assert_eq!(inputs.get("urgency"), Some(8.));
    assert_eq!(inputs.get("effort"), None);
    assert_eq!(inputs.value("effort"), 0.);

    inputs.add("urgency", 2.);

    assert_eq!(inputs.value("urgency"), 2.);
    assert_eq!(inputs.len(), 2);

    let built = Inputs::new().with("a", 1.).with("b", 2.);

    assert_eq!(built.iter().map(|(_, v)| v).sum::<f64>(), 3.);
    assert!(Inputs::with_capacity(4).is_empty());
}
