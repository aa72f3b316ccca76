use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SimulationError};

pub const STEPS_PER_YEAR: u32 = 12; // monthly steps

// Open01 draws lie in [2^-53, 1 - 2^-53], whose normal quantiles stay below 8.3.
const MAX_ABS_DRAW: f64 = 8.5;

pub fn step_dt() -> f64 {
    1.0 / STEPS_PER_YEAR as f64
}

/// Validated inputs to a single simulation run. Every accepted value
/// produces a path matrix with only finite entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    steps: usize,
    scenarios: usize,
    drift: f64,
    volatility: f64,
    initial_value: f64,
}

impl SimulationParameters {
    pub fn new(
        steps: usize,
        scenarios: usize,
        drift: f64,
        volatility: f64,
        initial_value: f64,
    ) -> Result<Self> {
        if steps < 1 {
            return Err(SimulationError::invalid(
                "steps",
                format!("must be at least 1, got {steps}"),
            ));
        }
        if scenarios < 1 {
            return Err(SimulationError::invalid(
                "scenarios",
                format!("must be at least 1, got {scenarios}"),
            ));
        }
        if !drift.is_finite() || drift <= -1.0 {
            return Err(SimulationError::invalid(
                "drift",
                format!("must be finite and greater than -1, got {drift}"),
            ));
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SimulationError::invalid(
                "volatility",
                format!("must be finite and non-negative, got {volatility}"),
            ));
        }
        if !initial_value.is_finite() || initial_value <= 0.0 {
            return Err(SimulationError::invalid(
                "initial_value",
                format!("must be finite and positive, got {initial_value}"),
            ));
        }

        let params = SimulationParameters {
            steps,
            scenarios,
            drift,
            volatility,
            initial_value,
        };
        params.check_growth_bound()?;
        Ok(params)
    }

    /// Rejects inputs whose largest reachable value, `initial_value` times
    /// `steps - 1` worst-case step factors, would overflow `f64`.
    fn check_growth_bound(&self) -> Result<()> {
        let compounding = (self.steps - 1) as f64;
        let log_limit = f64::MAX.ln();
        let log_start = self.initial_value.ln();

        let log_drift_only = log_start + compounding * self.step_mean().max(1.0).ln();
        if !(log_drift_only <= log_limit) {
            return Err(SimulationError::invalid(
                "drift",
                format!("{} compounded over {} steps overflows f64", self.drift, self.steps),
            ));
        }

        let worst_factor = self.step_mean() + MAX_ABS_DRAW * self.step_std_dev();
        let log_worst = log_start + compounding * worst_factor.max(1.0).ln();
        if !(log_worst <= log_limit) {
            return Err(SimulationError::invalid(
                "volatility",
                format!("{} compounded over {} steps overflows f64", self.volatility, self.steps),
            ));
        }
        Ok(())
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn scenarios(&self) -> usize {
        self.scenarios
    }

    pub fn drift(&self) -> f64 {
        self.drift
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// `(1 + drift)^dt`
    pub fn step_mean(&self) -> f64 {
        (1.0 + self.drift).powf(step_dt())
    }

    /// `volatility * sqrt(dt)`
    pub fn step_std_dev(&self) -> f64 {
        self.volatility * step_dt().sqrt()
    }
}

/// What the simulator reports for each cell of the path matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Absolute prices, `initial_value * cumulative_product`.
    #[default]
    Prices,
    /// Net cumulative returns, `cumulative_product - 1`.
    Returns,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Prices => f.write_str("prices"),
            OutputMode::Returns => f.write_str("returns"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prices" | "price" => Ok(OutputMode::Prices),
            "returns" | "return" => Ok(OutputMode::Returns),
            _ => Err(SimulationError::UnsupportedMode(s.to_string())),
        }
    }
}
