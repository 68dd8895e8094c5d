//! Linguistic variables over sampled universes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::FuzzyError;
use crate::membership::Triangular;

/// Closed numeric interval with an evenly spaced, inclusive sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Universe {
    min: f64,
    max: f64,
    samples: usize,
}

impl Universe {
    /// The interval `[min, max]` sampled at `samples` evenly spaced points,
    /// both endpoints included.
    pub fn new(min: f64, max: f64, samples: usize) -> Result<Self, FuzzyError> {
        if !min.is_finite() || !max.is_finite() || min >= max || samples < 2 {
            return Err(FuzzyError::InvalidUniverse { min, max, samples });
        }
        Ok(Self { min, max, samples })
    }

    /// Lower bound of the interval.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the interval.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of grid samples.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Whether `x` lies inside the closed interval. NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// The sample grid, endpoints included.
    pub fn grid(&self) -> impl Iterator<Item = f64> + '_ {
        let step = (self.max - self.min) / (self.samples - 1) as f64;
        (0..self.samples).map(move |i| self.min + step * i as f64)
    }
}

/// A linguistic variable: a named universe plus its labelled fuzzy terms.
///
/// Terms keep declaration order, which is the order plots and reports list
/// them in.
#[derive(Debug, Clone, Serialize)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: IndexMap<String, Triangular>,
}

impl LinguisticVariable {
    /// Create a variable with no terms yet.
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: IndexMap::new(),
        }
    }

    /// Attach a labelled term, replacing any previous term with the same label.
    pub fn with_term(mut self, label: impl Into<String>, mf: Triangular) -> Self {
        self.terms.insert(label.into(), mf);
        self
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's universe.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// The term registered under `label`, if any.
    pub fn term(&self, label: &str) -> Option<&Triangular> {
        self.terms.get(label)
    }

    /// All terms in declaration order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &Triangular)> {
        self.terms.iter().map(|(label, mf)| (label.as_str(), mf))
    }

    /// Membership degree of `x` in every term, in declaration order.
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        self.terms
            .iter()
            .map(|(label, mf)| (label.as_str(), mf.degree(x)))
            .collect()
    }
}
