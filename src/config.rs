use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, SimulationError};
use crate::models::params::{OutputMode, SimulationParameters};

pub const STEPS_RANGE: RangeInclusive<usize> = 10..=200;
pub const SCENARIOS_RANGE: RangeInclusive<usize> = 10..=200;
pub const DRIFT_RANGE: RangeInclusive<f64> = 0.01..=0.10;
pub const VOLATILITY_RANGE: RangeInclusive<f64> = 0.05..=0.30;

#[derive(Parser, Debug, Clone)]
#[command(name = "gbmflow", version)]
#[command(about = "Simulate geometric Brownian motion price paths and summarize terminal values")]
pub struct Cli {
    /// Number of monthly steps in each path (10..=200)
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Number of independent scenarios (10..=200)
    #[arg(long, default_value_t = 10)]
    pub scenarios: usize,

    /// Annualized drift (0.01..=0.10)
    #[arg(long, default_value_t = 0.05)]
    pub drift: f64,

    /// Annualized volatility (0.05..=0.30)
    #[arg(long, default_value_t = 0.15)]
    pub volatility: f64,

    /// Starting price shared by every path
    #[arg(long, default_value_t = 100.0)]
    pub initial_value: f64,

    /// `prices` or `returns`
    #[arg(long, default_value = "prices")]
    pub mode: String,

    /// Seed for reproducible paths; drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the path chart
    #[arg(long, default_value = "gbm_paths.png")]
    pub chart: PathBuf,

    /// Skip rendering the chart
    #[arg(long)]
    pub no_chart: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn check_range<T>(name: &'static str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::invalid(
            name,
            format!("{value} is outside [{}, {}]", range.start(), range.end()),
        ))
    }
}

impl Cli {
    /// Applies the command-line bounds, then the model's own preconditions.
    pub fn parameters(&self) -> Result<SimulationParameters> {
        check_range("steps", self.steps, &STEPS_RANGE)?;
        check_range("scenarios", self.scenarios, &SCENARIOS_RANGE)?;
        check_range("drift", self.drift, &DRIFT_RANGE)?;
        check_range("volatility", self.volatility, &VOLATILITY_RANGE)?;

        SimulationParameters::new(
            self.steps,
            self.scenarios,
            self.drift,
            self.volatility,
            self.initial_value,
        )
    }

    pub fn output_mode(&self) -> Result<OutputMode> {
        self.mode.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gbmflow").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_are_valid() {
        let cli = parse(&[]);
        let params = cli.parameters().unwrap();
        assert_eq!(params.steps(), 10);
        assert_eq!(params.scenarios(), 10);
        assert_eq!(params.drift(), 0.05);
        assert_eq!(params.volatility(), 0.15);
        assert_eq!(params.initial_value(), 100.0);
        assert_eq!(cli.output_mode().unwrap(), OutputMode::Prices);
        assert!(cli.seed.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn explicit_options() {
        let cli = parse(&[
            "--steps", "200", "--scenarios", "50", "--drift", "0.1", "--volatility", "0.3",
            "--initial-value", "250", "--mode", "returns", "--seed", "7", "--no-chart", "--json",
        ]);
        let params = cli.parameters().unwrap();
        assert_eq!(params.steps(), 200);
        assert_eq!(params.initial_value(), 250.0);
        assert_eq!(cli.output_mode().unwrap(), OutputMode::Returns);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.no_chart && cli.json);
    }

    #[test]
    fn out_of_bounds_options_are_rejected() {
        let cases = [
            (vec!["--steps", "9"], "steps"),
            (vec!["--scenarios", "201"], "scenarios"),
            (vec!["--drift", "0.2"], "drift"),
            (vec!["--volatility", "0.01"], "volatility"),
            (vec!["--initial-value", "0"], "initial_value"),
        ];
        for (args, expected) in cases {
            match parse(&args).parameters() {
                Err(SimulationError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected {expected} rejection, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_mode_is_unsupported() {
        let cli = parse(&["--mode", "levels"]);
        assert_eq!(
            cli.output_mode(),
            Err(SimulationError::UnsupportedMode("levels".into()))
        );
    }
}
