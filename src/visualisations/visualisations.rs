use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::models::params::OutputMode;
use crate::models::paths::PathMatrix;

pub const CHART_SIZE: (u32, u32) = (1200, 650);

// 10% headroom, never an empty range
fn y_bounds(paths: &PathMatrix) -> (f64, f64) {
    let (lo, hi) = paths.value_range();
    let margin = ((hi - lo) * 0.1).max(hi.abs().max(1.0) * 0.01);
    (lo - margin, hi + margin)
}

/// One line with point markers per scenario, time step on the (hidden) x axis.
pub fn plot_price_paths(
    paths: &PathMatrix,
    mode: OutputMode,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let last_step = (paths.steps().max(2) - 1) as f64;
    let (y_min, y_max) = y_bounds(paths);

    let caption = match mode {
        OutputMode::Prices => "Geometric Brownian Motion Price Simulation",
        OutputMode::Returns => "Geometric Brownian Motion Cumulative Return Simulation",
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(40)
        .x_label_area_size(0)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..last_step, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_desc(match mode {
            OutputMode::Prices => "Price",
            OutputMode::Returns => "Cumulative Return",
        })
        .draw()?;

    for scenario in 0..paths.scenarios() {
        let color = Palette99::pick(scenario).mix(0.8);
        let points: Vec<(f64, f64)> = paths
            .path(scenario)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(step, value)| (step as f64, value))
            .collect();

        chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(1)))?;
        chart.draw_series(points.into_iter().map(|p| Circle::new(p, 2, color.filled())))?;
    }

    root.present()?;
    info!(path = %output.display(), "path chart saved");

    Ok(())
}
