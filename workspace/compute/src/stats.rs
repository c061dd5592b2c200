use common::Statistic;

use crate::error::{ComputeError, Result};

/// Mean, sample standard deviation, min, max and median of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Summary {
    /// Summarize a non-empty series.
    ///
    /// The standard deviation uses the n-1 denominator; a single value has a
    /// deviation of 0 rather than NaN so the result stays JSON friendly.
    pub fn of(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ComputeError::EmptySeries(
                "cannot summarize zero values".to_string(),
            ));
        }

        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let std = if values.len() > 1 {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (count - 1.0)).sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let middle = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[middle - 1] + sorted[middle]) / 2.0
        } else {
            sorted[middle]
        };

        Ok(Self {
            mean,
            std,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median,
        })
    }

    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Min => self.min,
            Statistic::Max => self.max,
            Statistic::Median => self.median,
        }
    }
}
