use nalgebra::DMatrix;

/// Simulated trajectories indexed `[time step][scenario]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    values: DMatrix<f64>,
}

impl PathMatrix {
    pub(crate) fn from_matrix(values: DMatrix<f64>) -> Self {
        PathMatrix { values }
    }

    pub fn steps(&self) -> usize {
        self.values.nrows()
    }

    pub fn scenarios(&self) -> usize {
        self.values.ncols()
    }

    pub fn get(&self, step: usize, scenario: usize) -> Option<f64> {
        self.values.get((step, scenario)).copied()
    }

    pub fn row(&self, step: usize) -> Option<Vec<f64>> {
        (step < self.steps()).then(|| self.values.row(step).iter().copied().collect())
    }

    /// One scenario's trajectory through time.
    pub fn path(&self, scenario: usize) -> Option<Vec<f64>> {
        (scenario < self.scenarios()).then(|| self.values.column(scenario).iter().copied().collect())
    }

    /// The final row: one value per scenario.
    pub fn terminal_values(&self) -> Vec<f64> {
        self.values.row(self.steps() - 1).iter().copied().collect()
    }

    /// Row-major copy, one inner `Vec` per time step.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn value_range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}
