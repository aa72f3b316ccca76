//! Discrete-time GBM on a monthly grid. Gaussian step factors can in
//! principle be non-positive; that discretization error is not corrected.

use nalgebra::DMatrix;
use rand::distr::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::error::{Result, SimulationError};

use super::params::{OutputMode, SimulationParameters};
use super::paths::PathMatrix;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| SimulationError::Distribution(e.to_string()))
}

// steps x scenarios gross step factors, filled row by row
fn draw_step_factors<R: Rng>(params: &SimulationParameters, rng: &mut R) -> Result<DMatrix<f64>> {
    let normal = standard_normal()?;
    let mean = params.step_mean();
    let std_dev = params.step_std_dev();

    let draws: Vec<f64> = (0..params.steps() * params.scenarios())
        .map(|_| {
            let u: f64 = rng.sample(Open01);
            mean + std_dev * normal.inverse_cdf(u)
        })
        .collect();

    Ok(DMatrix::from_row_slice(params.steps(), params.scenarios(), &draws))
}

/// No growth at time zero: every path starts from the same point whatever
/// was drawn for the first row.
fn force_initial_row(factors: &mut DMatrix<f64>) {
    factors.row_mut(0).fill(1.0);
}

fn cumulative_product(mut factors: DMatrix<f64>) -> DMatrix<f64> {
    for mut column in factors.column_iter_mut() {
        for t in 1..column.len() {
            column[t] *= column[t - 1];
        }
    }
    factors
}

fn cumulative_growth<R: Rng>(params: &SimulationParameters, rng: &mut R) -> Result<DMatrix<f64>> {
    debug!(
        steps = params.steps(),
        scenarios = params.scenarios(),
        step_mean = params.step_mean(),
        step_std_dev = params.step_std_dev(),
        "simulating gbm paths"
    );

    let mut factors = draw_step_factors(params, rng)?;
    force_initial_row(&mut factors);
    Ok(cumulative_product(factors))
}

/// Simulated prices: `initial_value * cumulative_product`. Row 0 equals the
/// initial value exactly in every column.
pub fn simulate_prices<R: Rng>(params: &SimulationParameters, rng: &mut R) -> Result<PathMatrix> {
    let mut growth = cumulative_growth(params, rng)?;
    growth *= params.initial_value();
    Ok(PathMatrix::from_matrix(growth))
}

/// Net cumulative returns: `cumulative_product - 1`. Row 0 is exactly zero.
pub fn simulate_returns<R: Rng>(params: &SimulationParameters, rng: &mut R) -> Result<PathMatrix> {
    let mut growth = cumulative_growth(params, rng)?;
    growth.add_scalar_mut(-1.0);
    Ok(PathMatrix::from_matrix(growth))
}

pub fn simulate<R: Rng>(params: &SimulationParameters, mode: OutputMode, rng: &mut R) -> Result<PathMatrix> {
    match mode {
        OutputMode::Prices => simulate_prices(params, rng),
        OutputMode::Returns => simulate_returns(params, rng),
    }
}
