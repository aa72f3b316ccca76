//! Discrete-time geometric Brownian motion scenario simulator.
//!
//! [`simulate`] produces a `steps x scenarios` matrix of price paths on a
//! monthly grid, and [`summarize`] reduces the terminal row to its minimum,
//! maximum, mean and quartiles. Both are pure apart from the random source
//! the caller passes in.
//!
//! ```
//! use gbmflow::{seeded_rng, simulate_prices, summarize_paths, SimulationParameters};
//!
//! let params = SimulationParameters::new(24, 50, 0.05, 0.15, 100.0)?;
//! let paths = simulate_prices(&params, &mut seeded_rng(7))?;
//! assert_eq!(paths.row(0), Some(vec![100.0; 50]));
//!
//! let stats = summarize_paths(&paths)?;
//! assert!(stats.min <= stats.q1 && stats.q3 <= stats.max);
//! # Ok::<(), gbmflow::SimulationError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod visualisations;

pub use error::{Result, SimulationError};
pub use models::brownian::{entropy_rng, seeded_rng, simulate, simulate_prices, simulate_returns};
pub use models::cache::{PathCache, DEFAULT_CACHE_CAPACITY};
pub use models::params::{step_dt, OutputMode, SimulationParameters, STEPS_PER_YEAR};
pub use models::paths::PathMatrix;
pub use models::summary::{percentile, summarize, summarize_paths, RoundedSummary, SummaryStatistics};
