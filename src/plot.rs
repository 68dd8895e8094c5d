//! SVG charts for the linguistic model.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::surface::ControlSurface;
use crate::variable::LinguisticVariable;

/// Samples per membership curve.
const CURVE_POINTS: usize = 201;

/// Plot every term of `var` as a labelled line series.
pub fn plot_memberships(var: &LinguisticVariable, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let universe = var.universe();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Membership functions: {}", var.name()),
            ("sans-serif", 28),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(universe.min()..universe.max(), 0.0..1.05)?;

    chart
        .configure_mesh()
        .x_desc(var.name())
        .y_desc("membership")
        .draw()?;

    let step = (universe.max() - universe.min()) / (CURVE_POINTS - 1) as f64;
    for (idx, (label, mf)) in var.terms().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let curve: Vec<(f64, f64)> = (0..CURVE_POINTS)
            .map(|i| {
                let x = universe.min() + step * i as f64;
                (x, mf.degree(x))
            })
            .collect();
        chart
            .draw_series(LineSeries::new(curve, color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Plot the sampled control surface as a 3D chart.
pub fn plot_surface(surface: &ControlSurface, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (900, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Control surface: recommended tip (%)", ("sans-serif", 28))
        .margin(20)
        .build_cartesian_3d(0.0..10.0, 0.0..25.0, 0.0..10.0)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    chart.draw_series(
        SurfaceSeries::xoz(
            surface.service.iter().copied(),
            surface.food.iter().copied(),
            |service, food| surface.nearest(service, food),
        )
        .style_func(&|&tip| {
            HSLColor(0.66 - 0.5 * (tip / 25.0), 0.8, 0.5).mix(0.8).filled()
        }),
    )?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
