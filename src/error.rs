use thiserror::Error;

/// Errors reported by the simulation core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// An argument was out of range, non-positive or not finite.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// Summary statistics were requested over no values.
    #[error("cannot summarize an empty distribution")]
    EmptyDistribution,

    /// The sampling distribution could not be built.
    #[error("distribution setup failed: {0}")]
    Distribution(String),

    /// An output mode name that is not recognized.
    #[error("unsupported output mode `{0}` (expected `prices` or `returns`)")]
    UnsupportedMode(String),
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = SimulationError> = std::result::Result<T, E>;
