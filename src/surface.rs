//! Control-surface sampling over the rating grid.

use ndarray::Array2;
use serde::Serialize;

use crate::advisor::{TipAdvisor, RATING_MAX, RATING_MIN};
use crate::error::FuzzyError;

/// Tip recommendations sampled over a service x food grid.
#[derive(Debug, Clone, Serialize)]
pub struct ControlSurface {
    /// Sampled service ratings (row axis).
    pub service: Vec<f64>,
    /// Sampled food ratings (column axis).
    pub food: Vec<f64>,
    /// `tip[(i, j)]` is the recommendation for `(service[i], food[j])`.
    pub tip: Array2<f64>,
}

impl ControlSurface {
    /// Sample the advisor over the full rating square in integer steps.
    ///
    /// `step` is clamped to at least 1; the axis always includes both
    /// endpoints of the rating range.
    pub fn sample(advisor: &TipAdvisor, step: usize) -> Result<Self, FuzzyError> {
        let axis = axis_points(step.max(1));
        let mut tip = Array2::zeros((axis.len(), axis.len()));
        for (i, &service) in axis.iter().enumerate() {
            for (j, &food) in axis.iter().enumerate() {
                tip[(i, j)] = advisor.evaluate(service, food)?;
            }
        }
        Ok(Self {
            service: axis.clone(),
            food: axis,
            tip,
        })
    }

    /// The sampled tip for the axis values nearest to `(service, food)`.
    pub fn nearest(&self, service: f64, food: f64) -> f64 {
        let i = nearest_index(&self.service, service);
        let j = nearest_index(&self.food, food);
        self.tip[(i, j)]
    }
}

fn axis_points(step: usize) -> Vec<f64> {
    let mut axis: Vec<f64> = (RATING_MIN as usize..=RATING_MAX as usize)
        .step_by(step)
        .map(|v| v as f64)
        .collect();
    if axis.last() != Some(&RATING_MAX) {
        axis.push(RATING_MAX);
    }
    axis
}

fn nearest_index(axis: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &x) in axis.iter().enumerate() {
        let distance = (x - value).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_dimensions() {
        let advisor = TipAdvisor::new().unwrap();
        let surface = ControlSurface::sample(&advisor, 1).unwrap();
        assert_eq!(surface.service.len(), 11);
        assert_eq!(surface.food.len(), 11);
        assert_eq!(surface.tip.dim(), (11, 11));
    }

    #[test]
    fn test_coarse_grid_keeps_endpoints() {
        let advisor = TipAdvisor::new().unwrap();
        let surface = ControlSurface::sample(&advisor, 3).unwrap();
        assert_eq!(surface.service.first(), Some(&0.0));
        assert_eq!(surface.service.last(), Some(&10.0));
    }

    #[test]
    fn test_surface_values_in_tip_range() {
        let advisor = TipAdvisor::new().unwrap();
        let surface = ControlSurface::sample(&advisor, 2).unwrap();
        for &tip in surface.tip.iter() {
            assert!((0.0..=25.0).contains(&tip));
        }
    }

    #[test]
    fn test_nearest_lookup() {
        let advisor = TipAdvisor::new().unwrap();
        let surface = ControlSurface::sample(&advisor, 1).unwrap();
        let direct = advisor.evaluate(4.0, 7.0).unwrap();
        assert_eq!(surface.nearest(4.2, 6.9), direct);
    }
}
