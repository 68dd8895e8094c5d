//! Error types for the fuzzy inference model.

use thiserror::Error;

/// Fuzzy inference error type
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// Malformed membership control points
    #[error("invalid membership function: control points must be finite and satisfy a <= b <= c, got ({a}, {b}, {c})")]
    InvalidMembership {
        /// Lower foot of the triangle
        a: f64,
        /// Peak of the triangle
        b: f64,
        /// Upper foot of the triangle
        c: f64,
    },

    /// Universe bounds do not form a sampled closed interval
    #[error("invalid universe: expected finite min < max and at least two samples, got [{min}, {max}] with {samples} samples")]
    InvalidUniverse {
        /// Lower bound of the interval
        min: f64,
        /// Upper bound of the interval
        max: f64,
        /// Requested sample count
        samples: usize,
    },

    /// Rule references a variable that was never declared
    #[error("unknown variable '{0}' in rule")]
    UnknownVariable(String),

    /// Rule references a term its variable does not define
    #[error("variable '{variable}' has no term '{term}'")]
    UnknownTerm {
        /// Variable the rule referenced
        variable: String,
        /// Term that is not defined on it
        term: String,
    },

    /// Rule leaves an input variable unconstrained
    #[error("rule does not constrain input variable '{0}'")]
    UnconstrainedInput(String),

    /// No crisp value supplied for an input variable
    #[error("no input supplied for variable '{0}'")]
    MissingInput(String),

    /// Crisp input outside the variable's universe
    #[error("input {value} for '{variable}' is outside the universe [{min}, {max}]")]
    OutOfRange {
        /// Variable the value was supplied for
        variable: String,
        /// The rejected value
        value: f64,
        /// Lower universe bound
        min: f64,
        /// Upper universe bound
        max: f64,
    },

    /// Rule base fails the completeness invariant
    #[error("incomplete rule base: {0}")]
    IncompleteRuleBase(String),

    /// Aggregated output set carries no area
    #[error("no rule fired with positive strength, centroid is undefined")]
    UndefinedOutput,
}
