//! The fixed tip model: two quality ratings in, one gratuity percentage out.

use serde::Serialize;
use tracing::debug;

use crate::engine::{MamdaniEngine, Rule};
use crate::error::FuzzyError;
use crate::membership::Triangular;
use crate::variable::{LinguisticVariable, Universe};

/// Lower bound of both rating universes.
pub const RATING_MIN: f64 = 0.0;
/// Upper bound of both rating universes.
pub const RATING_MAX: f64 = 10.0;
/// Lower bound of the tip universe, in percent.
pub const TIP_MIN: f64 = 0.0;
/// Upper bound of the tip universe, in percent.
pub const TIP_MAX: f64 = 25.0;

/// Quality rating labels, shared by the service and food inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Poor,
    Average,
    Excellent,
}

impl Quality {
    /// All labels, in universe order.
    pub const ALL: [Quality; 3] = [Quality::Poor, Quality::Average, Quality::Excellent];

    /// Label used inside the inference model.
    pub fn label(self) -> &'static str {
        match self {
            Quality::Poor => "poor",
            Quality::Average => "average",
            Quality::Excellent => "excellent",
        }
    }

    /// Control points of the label's triangular membership function.
    fn points(self) -> (f64, f64, f64) {
        match self {
            Quality::Poor => (0.0, 0.0, 5.0),
            Quality::Average => (0.0, 5.0, 10.0),
            Quality::Excellent => (5.0, 10.0, 10.0),
        }
    }
}

/// Tip bands of the output variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipBand {
    Low,
    Medium,
    High,
}

impl TipBand {
    /// All bands, in universe order.
    pub const ALL: [TipBand; 3] = [TipBand::Low, TipBand::Medium, TipBand::High];

    /// Label used inside the inference model.
    pub fn label(self) -> &'static str {
        match self {
            TipBand::Low => "low",
            TipBand::Medium => "medium",
            TipBand::High => "high",
        }
    }

    /// Control points of the band's triangular membership function.
    fn points(self) -> (f64, f64, f64) {
        match self {
            TipBand::Low => (0.0, 0.0, 13.0),
            TipBand::Medium => (0.0, 13.0, 25.0),
            TipBand::High => (13.0, 25.0, 25.0),
        }
    }
}

/// The 9-rule table: (service, food) -> tip band, covering the full 3x3
/// label cross product exactly once.
pub const RULE_TABLE: [(Quality, Quality, TipBand); 9] = [
    (Quality::Poor, Quality::Poor, TipBand::Low),
    (Quality::Poor, Quality::Average, TipBand::Low),
    (Quality::Poor, Quality::Excellent, TipBand::Medium),
    (Quality::Average, Quality::Poor, TipBand::Low),
    (Quality::Average, Quality::Average, TipBand::Medium),
    (Quality::Average, Quality::Excellent, TipBand::Medium),
    (Quality::Excellent, Quality::Poor, TipBand::Medium),
    (Quality::Excellent, Quality::Average, TipBand::Medium),
    (Quality::Excellent, Quality::Excellent, TipBand::High),
];

const SERVICE: &str = "service";
const FOOD: &str = "food";
const TIP: &str = "tip";

/// Fuzzy tip advisor.
///
/// Owns the fixed linguistic model (two rating inputs over \[0,10\], one tip
/// output over \[0,25\], the 9-rule table) and exposes one operation:
/// [`TipAdvisor::evaluate`]. The model is built once and never mutated;
/// evaluation is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct TipAdvisor {
    engine: MamdaniEngine,
}

impl TipAdvisor {
    /// Build the advisor from the fixed control points and rule table.
    ///
    /// Fails only if the fixed configuration is malformed (misordered control
    /// points, or a rule table that does not cover every label combination
    /// exactly once).
    pub fn new() -> Result<Self, FuzzyError> {
        check_rule_table()?;

        let service = rating_variable(SERVICE)?;
        let food = rating_variable(FOOD)?;
        let mut tip =
            LinguisticVariable::new(TIP, Universe::new(TIP_MIN, TIP_MAX, 26)?);
        for band in TipBand::ALL {
            let (a, b, c) = band.points();
            tip = tip.with_term(band.label(), Triangular::new(a, b, c)?);
        }

        let rules = RULE_TABLE
            .iter()
            .map(|&(service, food, band)| {
                Rule::new(
                    &[(SERVICE, service.label()), (FOOD, food.label())],
                    band.label(),
                )
            })
            .collect();

        let engine = MamdaniEngine::new(vec![service, food], tip, rules)?;
        Ok(Self { engine })
    }

    /// Recommend a tip percentage for the given service and food ratings.
    ///
    /// Both ratings must lie in `[0, 10]`; out-of-range or non-finite values
    /// are rejected with [`FuzzyError::OutOfRange`]. The result is the
    /// centroid of the aggregated output set, a percentage in `[0, 25]`.
    pub fn evaluate(&self, service: f64, food: f64) -> Result<f64, FuzzyError> {
        let tip = self.engine.infer(&[(SERVICE, service), (FOOD, food)])?;
        debug!(service, food, tip, "tip recommendation");
        Ok(tip)
    }

    /// The service quality input variable.
    pub fn service(&self) -> &LinguisticVariable {
        &self.engine.inputs()[0]
    }

    /// The food quality input variable.
    pub fn food(&self) -> &LinguisticVariable {
        &self.engine.inputs()[1]
    }

    /// The tip output variable.
    pub fn tip(&self) -> &LinguisticVariable {
        self.engine.output()
    }
}

fn rating_variable(name: &str) -> Result<LinguisticVariable, FuzzyError> {
    let mut var = LinguisticVariable::new(name, Universe::new(RATING_MIN, RATING_MAX, 11)?);
    for quality in Quality::ALL {
        let (a, b, c) = quality.points();
        var = var.with_term(quality.label(), Triangular::new(a, b, c)?);
    }
    Ok(var)
}

/// Every (service, food) combination must appear exactly once.
fn check_rule_table() -> Result<(), FuzzyError> {
    for service in Quality::ALL {
        for food in Quality::ALL {
            let hits = RULE_TABLE
                .iter()
                .filter(|&&(s, f, _)| s == service && f == food)
                .count();
            if hits != 1 {
                return Err(FuzzyError::IncompleteRuleBase(format!(
                    "antecedent ({}, {}) appears {} times",
                    service.label(),
                    food.label(),
                    hits
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_builds() {
        let advisor = TipAdvisor::new().unwrap();
        assert_eq!(advisor.service().name(), "service");
        assert_eq!(advisor.food().name(), "food");
        assert_eq!(advisor.tip().name(), "tip");
        assert_eq!(advisor.tip().universe().samples(), 26);
    }

    #[test]
    fn test_extremes_are_ordered() {
        let advisor = TipAdvisor::new().unwrap();
        let worst = advisor.evaluate(0.0, 0.0).unwrap();
        let best = advisor.evaluate(10.0, 10.0).unwrap();
        assert!(best > worst);
    }

    #[test]
    fn test_midpoint_recommendation() {
        let advisor = TipAdvisor::new().unwrap();
        // At (5, 5) only the average/average rule fires at full strength, so
        // the result is the centroid of the full medium triangle.
        let tip = advisor.evaluate(5.0, 5.0).unwrap();
        assert!((tip - 38.0 / 3.0).abs() < 1e-9, "got {tip}");
    }

    #[test]
    fn test_rejects_out_of_range_ratings() {
        let advisor = TipAdvisor::new().unwrap();
        assert!(matches!(
            advisor.evaluate(-0.5, 5.0),
            Err(FuzzyError::OutOfRange { .. })
        ));
        assert!(matches!(
            advisor.evaluate(5.0, 10.5),
            Err(FuzzyError::OutOfRange { .. })
        ));
        assert!(matches!(
            advisor.evaluate(f64::NAN, 5.0),
            Err(FuzzyError::OutOfRange { .. })
        ));
    }
}
