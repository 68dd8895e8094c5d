//! Results tables, case studies, and the markdown report.

use prettytable::{format, row, Table};
use serde::Serialize;

use crate::advisor::{TipAdvisor, RULE_TABLE};
use crate::error::FuzzyError;
use crate::surface::ControlSurface;

/// Qualitative reading of a tip percentage, as shown in the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    VeryLow,
    Low,
    Medium,
    High,
}

impl Interpretation {
    /// Band a tip percentage falls into.
    pub fn from_tip(tip: f64) -> Self {
        if tip < 10.0 {
            Interpretation::VeryLow
        } else if tip < 15.0 {
            Interpretation::Low
        } else if tip < 20.0 {
            Interpretation::Medium
        } else {
            Interpretation::High
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Interpretation::VeryLow => "very low",
            Interpretation::Low => "low",
            Interpretation::Medium => "medium",
            Interpretation::High => "high",
        }
    }
}

/// One row of the sampled results grid.
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    /// Service rating of this sample.
    pub service: f64,
    /// Food rating of this sample.
    pub food: f64,
    /// Recommended tip percentage.
    pub tip: f64,
    /// Qualitative band of the recommendation.
    pub interpretation: Interpretation,
}

/// A scenario from the study set shipped with the system.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaseStudy {
    /// Service rating of the scenario.
    pub service: f64,
    /// Food rating of the scenario.
    pub food: f64,
    /// One-line description.
    pub description: &'static str,
}

/// The seven study scenarios.
pub const CASE_STUDIES: [CaseStudy; 7] = [
    CaseStudy {
        service: 6.5,
        food: 6.0,
        description: "Average restaurant, unremarkable service and food",
    },
    CaseStudy {
        service: 10.0,
        food: 10.0,
        description: "Outstanding restaurant, exceptional service and food",
    },
    CaseStudy {
        service: 2.0,
        food: 8.0,
        description: "Poor service but excellent food",
    },
    CaseStudy {
        service: 9.0,
        food: 4.0,
        description: "Excellent service but disappointing food",
    },
    CaseStudy {
        service: 1.0,
        food: 1.0,
        description: "Thoroughly negative experience",
    },
    CaseStudy {
        service: 7.5,
        food: 8.5,
        description: "Good restaurant, very good food",
    },
    CaseStudy {
        service: 3.5,
        food: 5.5,
        description: "Below-average experience",
    },
];

/// One-line analysis of a recommendation, mirroring the study write-up bands.
pub fn analysis(tip: f64) -> &'static str {
    if tip < 12.0 {
        "Minimal tip for an unsatisfactory experience"
    } else if tip < 16.0 {
        "Moderate tip, with room for improvement"
    } else if tip < 20.0 {
        "Standard tip for acceptable service"
    } else {
        "Generous tip for exceptional service"
    }
}

/// Evaluate the advisor over a coarse grid and collect interpreted rows.
pub fn results_grid(advisor: &TipAdvisor, step: usize) -> Result<Vec<GridRow>, FuzzyError> {
    let surface = ControlSurface::sample(advisor, step)?;
    let mut rows = Vec::with_capacity(surface.service.len() * surface.food.len());
    for (i, &service) in surface.service.iter().enumerate() {
        for (j, &food) in surface.food.iter().enumerate() {
            let tip = surface.tip[(i, j)];
            rows.push(GridRow {
                service,
                food,
                tip,
                interpretation: Interpretation::from_tip(tip),
            });
        }
    }
    Ok(rows)
}

/// Render grid rows as a console table.
pub fn render_table(rows: &[GridRow]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Service", "Food", "Tip %", "Interpretation"]);
    for r in rows {
        table.add_row(row![
            format!("{:.0}", r.service),
            format!("{:.0}", r.food),
            format!("{:.1}", r.tip),
            r.interpretation.as_str()
        ]);
    }
    table
}

/// Assemble the full markdown report: model summary, rule table, results
/// grid, and case studies.
pub fn markdown_report(advisor: &TipAdvisor) -> Result<String, FuzzyError> {
    let mut out = String::new();
    out.push_str("# Fuzzy Tip Advisor\n\n");
    out.push_str(
        "A Mamdani fuzzy-inference system that maps service and food quality \
         ratings (0-10) to a recommended tip percentage (0-25%). Rules combine \
         by minimum, aggregate by maximum, and the output is the centroid of \
         the aggregated set.\n\n",
    );

    out.push_str("## Membership functions\n\n");
    out.push_str("| Variable | Term | a | b | c |\n");
    out.push_str("|---|---|---|---|---|\n");
    for var in [advisor.service(), advisor.food(), advisor.tip()] {
        for (label, mf) in var.terms() {
            let (a, b, c) = mf.points();
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                var.name(),
                label,
                a,
                b,
                c
            ));
        }
    }
    out.push('\n');

    out.push_str("## Rule table\n\n");
    out.push_str("| Service | Food | Tip |\n");
    out.push_str("|---|---|---|\n");
    for (service, food, band) in RULE_TABLE {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            service.label(),
            food.label(),
            band.label()
        ));
    }
    out.push('\n');

    out.push_str("## Results grid\n\n");
    out.push_str("| Service | Food | Tip % | Interpretation |\n");
    out.push_str("|---|---|---|---|\n");
    for r in results_grid(advisor, 2)? {
        out.push_str(&format!(
            "| {:.0} | {:.0} | {:.1} | {} |\n",
            r.service,
            r.food,
            r.tip,
            r.interpretation.as_str()
        ));
    }
    out.push('\n');

    out.push_str("## Case studies\n\n");
    for case in CASE_STUDIES {
        let tip = advisor.evaluate(case.service, case.food)?;
        out.push_str(&format!("### {}\n\n", case.description));
        out.push_str(&format!(
            "- Service quality: {:.1}/10\n- Food quality: {:.1}/10\n- Recommended tip: {:.1}%\n- {}\n\n",
            case.service,
            case.food,
            tip,
            analysis(tip)
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretation_bands() {
        assert_eq!(Interpretation::from_tip(4.0), Interpretation::VeryLow);
        assert_eq!(Interpretation::from_tip(10.0), Interpretation::Low);
        assert_eq!(Interpretation::from_tip(15.0), Interpretation::Medium);
        assert_eq!(Interpretation::from_tip(20.0), Interpretation::High);
        assert_eq!(Interpretation::from_tip(25.0), Interpretation::High);
    }

    #[test]
    fn test_results_grid_covers_square() {
        let advisor = TipAdvisor::new().unwrap();
        let rows = results_grid(&advisor, 2).unwrap();
        assert_eq!(rows.len(), 36);
        assert!(rows.iter().all(|r| (0.0..=25.0).contains(&r.tip)));
    }

    #[test]
    fn test_table_renders_all_rows() {
        let advisor = TipAdvisor::new().unwrap();
        let rows = results_grid(&advisor, 2).unwrap();
        let table = render_table(&rows);
        // header + one line per row, plus box-drawing borders
        assert!(table.to_string().lines().count() > rows.len());
    }

    #[test]
    fn test_markdown_report_sections() {
        let advisor = TipAdvisor::new().unwrap();
        let report = markdown_report(&advisor).unwrap();
        assert!(report.contains("## Membership functions"));
        assert!(report.contains("## Rule table"));
        assert!(report.contains("## Results grid"));
        assert!(report.contains("## Case studies"));
        assert!(report.contains("| excellent | excellent | high |"));
    }

    #[test]
    fn test_grid_rows_serialize() {
        let advisor = TipAdvisor::new().unwrap();
        let rows = results_grid(&advisor, 5).unwrap();
        let json = serde_json::to_string(&rows).unwrap();
        assert!(json.contains("\"interpretation\""));
    }
}
