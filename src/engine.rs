//! Mamdani fuzzy inference.
//!
//! The engine implements the classic four-step pipeline:
//!
//! 1. **Fuzzification**: evaluate every term's membership function at the
//!    crisp inputs.
//! 2. **Rule evaluation**: a rule's firing strength is the minimum of its
//!    antecedent degrees (AND conjunction).
//! 3. **Aggregation**: rules sharing an output term combine by maximum; the
//!    combined output set is the pointwise maximum of each term clipped at
//!    its aggregated strength.
//! 4. **Defuzzification**: centroid (area-weighted mean) of the combined set
//!    over the output universe's sample grid.
//!
//! The engine owns immutable model data only. Every [`MamdaniEngine::infer`]
//! call builds its own working buffers, so a shared reference can evaluate
//! concurrently from multiple threads.
//!
//! ## Example
//!
//! ```
//! use fuzzy_tip::engine::{MamdaniEngine, Rule};
//! use fuzzy_tip::membership::Triangular;
//! use fuzzy_tip::variable::{LinguisticVariable, Universe};
//!
//! let temperature = LinguisticVariable::new("temperature", Universe::new(0.0, 40.0, 41)?)
//!     .with_term("cold", Triangular::new(0.0, 0.0, 20.0)?)
//!     .with_term("hot", Triangular::new(20.0, 40.0, 40.0)?);
//! let fan = LinguisticVariable::new("fan", Universe::new(0.0, 100.0, 101)?)
//!     .with_term("low", Triangular::new(0.0, 0.0, 50.0)?)
//!     .with_term("high", Triangular::new(50.0, 100.0, 100.0)?);
//!
//! let engine = MamdaniEngine::new(
//!     vec![temperature],
//!     fan,
//!     vec![
//!         Rule::new(&[("temperature", "cold")], "low"),
//!         Rule::new(&[("temperature", "hot")], "high"),
//!     ],
//! )?;
//!
//! let speed = engine.infer(&[("temperature", 30.0)])?;
//! assert!((0.0..=100.0).contains(&speed));
//! # Ok::<(), fuzzy_tip::FuzzyError>(())
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use ndarray::Array1;
use serde::Serialize;
use tracing::trace;

use crate::error::FuzzyError;
use crate::variable::LinguisticVariable;

/// A fuzzy IF-THEN rule: an AND conjunction of one term per input variable,
/// implying one output term.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    /// Antecedents as (variable, term) pairs.
    pub antecedents: Vec<(String, String)>,
    /// Output term the rule fires.
    pub consequent: String,
}

impl Rule {
    /// Build a rule from borrowed (variable, term) pairs.
    pub fn new(antecedents: &[(&str, &str)], consequent: &str) -> Self {
        Self {
            antecedents: antecedents
                .iter()
                .map(|(var, term)| (var.to_string(), term.to_string()))
                .collect(),
            consequent: consequent.to_string(),
        }
    }
}

/// Min/max Mamdani engine with centroid defuzzification.
#[derive(Debug, Clone)]
pub struct MamdaniEngine {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<Rule>,
}

impl MamdaniEngine {
    /// Assemble an engine, validating every rule against the declared
    /// variables and terms. Each rule must constrain every input variable.
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: Vec<Rule>,
    ) -> Result<Self, FuzzyError> {
        for rule in &rules {
            for (var_name, term) in &rule.antecedents {
                let var = inputs
                    .iter()
                    .find(|v| v.name() == var_name)
                    .ok_or_else(|| FuzzyError::UnknownVariable(var_name.clone()))?;
                if var.term(term).is_none() {
                    return Err(FuzzyError::UnknownTerm {
                        variable: var_name.clone(),
                        term: term.clone(),
                    });
                }
            }
            for input in &inputs {
                if !rule.antecedents.iter().any(|(var, _)| var == input.name()) {
                    return Err(FuzzyError::UnconstrainedInput(input.name().to_string()));
                }
            }
            if output.term(&rule.consequent).is_none() {
                return Err(FuzzyError::UnknownTerm {
                    variable: output.name().to_string(),
                    term: rule.consequent.clone(),
                });
            }
        }
        Ok(Self {
            inputs,
            output,
            rules,
        })
    }

    /// Declared input variables, in declaration order.
    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    /// The output variable.
    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    /// The rule base.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run one inference over named crisp inputs.
    ///
    /// Every declared input variable must be supplied a value inside its
    /// universe. Returns the defuzzified crisp output, or
    /// [`FuzzyError::UndefinedOutput`] when no rule fires with positive
    /// strength.
    pub fn infer(&self, crisp: &[(&str, f64)]) -> Result<f64, FuzzyError> {
        let mut values = Vec::with_capacity(self.inputs.len());
        for var in &self.inputs {
            let value = crisp
                .iter()
                .find(|(name, _)| *name == var.name())
                .map(|(_, value)| *value)
                .ok_or_else(|| FuzzyError::MissingInput(var.name().to_string()))?;
            if !var.universe().contains(value) {
                return Err(FuzzyError::OutOfRange {
                    variable: var.name().to_string(),
                    value,
                    min: var.universe().min(),
                    max: var.universe().max(),
                });
            }
            values.push(value);
        }

        // Fuzzification
        let mut degrees: HashMap<(&str, &str), f64> = HashMap::new();
        for (var, &value) in self.inputs.iter().zip(&values) {
            for (label, degree) in var.fuzzify(value) {
                degrees.insert((var.name(), label), degree);
            }
        }

        // Rule firing (min) and per-term aggregation (max)
        let mut strengths: IndexMap<&str, f64> = IndexMap::new();
        for rule in &self.rules {
            let mut strength = 1.0f64;
            for (var, term) in &rule.antecedents {
                let degree = degrees
                    .get(&(var.as_str(), term.as_str()))
                    .copied()
                    .unwrap_or(0.0);
                strength = strength.min(degree);
            }
            let aggregated = strengths.entry(rule.consequent.as_str()).or_insert(0.0);
            *aggregated = aggregated.max(strength);
        }
        trace!(?strengths, "aggregated rule strengths");

        // Combined output set over the universe grid
        let grid: Vec<f64> = self.output.universe().grid().collect();
        let mut combined = Array1::<f64>::zeros(grid.len());
        for (i, &x) in grid.iter().enumerate() {
            let mut mu = 0.0f64;
            for (term, &strength) in &strengths {
                if strength <= 0.0 {
                    continue;
                }
                if let Some(mf) = self.output.term(term) {
                    mu = mu.max(mf.degree(x).min(strength));
                }
            }
            combined[i] = mu;
        }

        centroid(&grid, &combined)
    }
}

/// Centroid of the piecewise-linear curve through `(grid[i], mu[i])`.
///
/// Integrates each segment exactly (trapezoid area, linear-moment formula)
/// instead of summing point masses, so the result matches the continuous
/// centroid of the sampled set.
fn centroid(grid: &[f64], mu: &Array1<f64>) -> Result<f64, FuzzyError> {
    let mut area = 0.0;
    let mut moment = 0.0;
    for i in 0..grid.len().saturating_sub(1) {
        let (x1, x2) = (grid[i], grid[i + 1]);
        let (m1, m2) = (mu[i], mu[i + 1]);
        let dx = x2 - x1;
        area += 0.5 * (m1 + m2) * dx;
        moment += dx * (x1 * (2.0 * m1 + m2) + x2 * (m1 + 2.0 * m2)) / 6.0;
    }
    if area < 1e-10 {
        return Err(FuzzyError::UndefinedOutput);
    }
    Ok(moment / area)
}
