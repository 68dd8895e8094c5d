//! # Fuzzy Tip Advisor
//!
//! A small Mamdani fuzzy-inference system that maps two subjective quality
//! ratings (service, food) to a recommended gratuity percentage.
//!
//! ## Features
//!
//! - **Triangular membership functions** with validated control points
//! - **Mamdani inference**: min conjunction, max aggregation, centroid
//!   defuzzification over the sampled output universe
//! - **Fixed tip model**: two inputs over \[0,10\], one output over \[0,25\],
//!   three terms per variable, a complete 9-rule table
//! - **Reporting**: sampled results grid, case studies, markdown report
//! - **Charts**: SVG membership-function and control-surface plots
//! - **PDF rendering**: markdown report to PDF, with an HTML fallback when
//!   no converter is installed
//!
//! ## Example
//!
//! ```
//! use fuzzy_tip::advisor::TipAdvisor;
//!
//! let advisor = TipAdvisor::new()?;
//! let tip = advisor.evaluate(6.5, 6.0)?;
//! assert!((0.0..=25.0).contains(&tip));
//! # Ok::<(), fuzzy_tip::FuzzyError>(())
//! ```

pub mod advisor;
pub mod engine;
pub mod error;
pub mod membership;
pub mod pdf;
pub mod plot;
pub mod report;
pub mod surface;
pub mod variable;

pub use advisor::{Quality, TipAdvisor, TipBand};
pub use engine::{MamdaniEngine, Rule};
pub use error::FuzzyError;
pub use membership::Triangular;
pub use variable::{LinguisticVariable, Universe};
