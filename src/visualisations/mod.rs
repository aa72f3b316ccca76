pub mod report;
pub mod visualisations;
