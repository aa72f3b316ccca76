use serde::Serialize;

use crate::models::summary::{RoundedSummary, SummaryStatistics};

#[derive(Debug, Clone, Serialize)]
struct JsonReport {
    steps: usize,
    scenarios: usize,
    #[serde(flatten)]
    summary: RoundedSummary,
}

/// Plain-text summary of the terminal distribution, one figure per line.
pub fn text_report(scenarios: usize, stats: &SummaryStatistics) -> String {
    let r = stats.rounded();
    format!(
        "After simulating {scenarios} different paths:\n\
         Minimum final value: {}\n\
         First quartile: {}\n\
         Average final value: {}\n\
         Third quartile: {}\n\
         Maximum final value: {}\n",
        r.min, r.q1, r.mean, r.q3, r.max
    )
}

pub fn json_report(
    steps: usize,
    scenarios: usize,
    stats: &SummaryStatistics,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        steps,
        scenarios,
        summary: stats.rounded(),
    })
}
