use serde::Serialize;

use crate::error::{Result, SimulationError};

use super::paths::PathMatrix;

/// Distribution of terminal values for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 75th percentile.
    pub q3: f64,
}

/// [`SummaryStatistics`] rounded to whole numbers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundedSummary {
    pub min: i64,
    pub max: i64,
    pub mean: i64,
    pub q1: i64,
    pub q3: i64,
}

impl SummaryStatistics {
    /// Ties go to the even neighbour.
    pub fn rounded(&self) -> RoundedSummary {
        let round = |v: f64| v.round_ties_even() as i64;
        RoundedSummary {
            min: round(self.min),
            max: round(self.max),
            mean: round(self.mean),
            q1: round(self.q1),
            q3: round(self.q3),
        }
    }
}

fn sorted_copy(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(SimulationError::EmptyDistribution);
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(SimulationError::invalid("terminal_values", "contains NaN"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Linear interpolation between order statistics at rank `p/100 * (n - 1)`.
fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let (a, b) = (sorted[lower], sorted[upper]);
        (a + (b - a) * (rank - lower as f64)).clamp(a, b)
    }
}

/// The `p`-th percentile of `values`, `p` in `[0, 100]`.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(SimulationError::invalid(
            "percentile",
            format!("must be within [0, 100], got {p}"),
        ));
    }
    let sorted = sorted_copy(values)?;
    Ok(interpolate(&sorted, p))
}

pub fn summarize(terminal_values: &[f64]) -> Result<SummaryStatistics> {
    let sorted = sorted_copy(terminal_values)?;
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    // Summation rounding can land the mean an ulp outside the sample range.
    let mean = (sorted.iter().sum::<f64>() / sorted.len() as f64).clamp(min, max);

    Ok(SummaryStatistics {
        min,
        max,
        mean,
        q1: interpolate(&sorted, 25.0),
        q3: interpolate(&sorted, 75.0),
    })
}

/// Summarizes the terminal row of `paths`.
pub fn summarize_paths(paths: &PathMatrix) -> Result<SummaryStatistics> {
    summarize(&paths.terminal_values())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn symmetric_five_values() {
        let stats = summarize(&[90.0, 95.0, 100.0, 105.0, 110.0]).unwrap();
        assert_eq!(
            stats.rounded(),
            RoundedSummary { min: 90, max: 110, mean: 100, q1: 95, q3: 105 }
        );
        assert_eq!(stats.q1, 95.0);
        assert_eq!(stats.q3, 105.0);
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let a = summarize(&[110.0, 90.0, 105.0, 95.0, 100.0]).unwrap();
        let b = summarize(&[90.0, 95.0, 100.0, 105.0, 110.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn quartiles_interpolate_between_order_statistics() {
        // rank for q1 = 0.25 * 3 = 0.75, q3 = 2.25
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(stats.q1, 1.75);
        assert_relative_eq!(stats.q3, 3.25);
        assert_relative_eq!(stats.mean, 2.5);
    }

    #[test]
    fn single_value_collapses() {
        let stats = summarize(&[7.3]).unwrap();
        assert_eq!((stats.min, stats.q1, stats.mean, stats.q3, stats.max), (7.3, 7.3, 7.3, 7.3, 7.3));
    }

    #[test]
    fn mean_stays_inside_range_for_repeated_values() {
        let stats = summarize(&[0.1, 0.1, 0.1]).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn rounding_ties_to_even() {
        let stats = SummaryStatistics { min: 0.5, max: 3.5, mean: 2.5, q1: 1.5, q3: 2.6 };
        assert_eq!(
            stats.rounded(),
            RoundedSummary { min: 0, max: 4, mean: 2, q1: 2, q3: 3 }
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(summarize(&[]), Err(SimulationError::EmptyDistribution));
        assert_eq!(percentile(&[], 50.0), Err(SimulationError::EmptyDistribution));
    }

    #[test]
    fn nan_input_is_rejected() {
        assert!(matches!(
            summarize(&[1.0, f64::NAN]),
            Err(SimulationError::InvalidParameter { name: "terminal_values", .. })
        ));
    }

    #[test]
    fn percentile_bounds() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(percentile(&values, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&values, 50.0).unwrap(), 2.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 3.0);
        assert!(percentile(&values, 101.0).is_err());
        assert!(percentile(&values, f64::NAN).is_err());
    }

    #[test]
    fn summarize_is_idempotent() {
        let values = [12.0, 4.5, 99.1, 33.3, 8.0, 61.2];
        assert_eq!(summarize(&values), summarize(&values));
    }
}
