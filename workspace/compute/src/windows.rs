use common::{FeatureVector, FeatureWindow, SensorChannel, SensorReading, Statistic, feature_name};
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};
use crate::stats::Summary;

const UNKNOWN_TURBINE: &str = "unknown_turbine";

/// Size and stride of the sliding window, both counted in readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub window_size: usize,
    pub step: usize,
}

impl Default for WindowConfig {
    /// Ten one-minute readings per window, advancing five readings at a time.
    fn default() -> Self {
        Self {
            window_size: 10,
            step: 5,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ComputeError::InvalidWindow(
                "window size must be at least 1".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(ComputeError::InvalidWindow(
                "step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of windows a series of `len` readings produces.
    pub fn window_count(&self, len: usize) -> usize {
        if self.window_size == 0 || self.step == 0 || len < self.window_size {
            return 0;
        }
        (len - self.window_size) / self.step + 1
    }
}

/// Derive `turbine_<n>` from a file name like `turbine_3_data.json`.
pub fn turbine_id_from_source(source: &str) -> String {
    let file_name = source.rsplit(['/', '\\']).next().unwrap_or(source);
    let mut parts = file_name.split('_');
    match (parts.next(), parts.next()) {
        (Some("turbine"), Some(id)) if !id.is_empty() => format!("turbine_{}", id),
        _ => UNKNOWN_TURBINE.to_string(),
    }
}

/// Turns raw readings into per-window feature vectors.
///
/// Readings are sorted by timestamp first; every numeric channel contributes
/// mean, std, min, max and median, named `<channel>_<statistic>`.
#[derive(Debug, Default)]
pub struct WindowExtractor {
    config: WindowConfig,
}

impl WindowExtractor {
    pub fn new(config: WindowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> WindowConfig {
        self.config
    }

    /// Extract all windows for one turbine.
    ///
    /// # Arguments
    ///
    /// * `turbine_id` - Identifier copied into every window
    /// * `readings` - Raw readings in any order
    ///
    /// # Returns
    ///
    /// One [`FeatureWindow`] per full window; an empty list when there are
    /// fewer readings than one window.
    #[instrument(skip(self, readings), fields(num_readings = readings.len(), window_size = self.config.window_size, step = self.config.step))]
    pub fn extract(&self, turbine_id: &str, readings: &[SensorReading]) -> Result<Vec<FeatureWindow>> {
        let expected = self.config.window_count(readings.len());
        if expected == 0 {
            warn!(
                "Not enough readings for a single window ({} < {})",
                readings.len(),
                self.config.window_size
            );
            return Ok(Vec::new());
        }

        let mut sorted = readings.to_vec();
        sorted.sort_by_key(|reading| reading.timestamp);

        let mut windows = Vec::with_capacity(expected);
        for start in (0..=sorted.len() - self.config.window_size).step_by(self.config.step) {
            let window = &sorted[start..start + self.config.window_size];
            windows.push(self.summarize(turbine_id, window)?);
        }

        debug!("Expected {} windows, produced {}", expected, windows.len());
        info!("Extracted {} feature windows for {}", windows.len(), turbine_id);
        Ok(windows)
    }

    fn summarize(&self, turbine_id: &str, window: &[SensorReading]) -> Result<FeatureWindow> {
        let last = window.last().ok_or_else(|| {
            ComputeError::EmptySeries("window without readings".to_string())
        })?;

        Ok(FeatureWindow {
            turbine_id: turbine_id.to_string(),
            window_end_timestamp: last.timestamp,
            label: u8::from(window.iter().any(SensorReading::is_anomalous)),
            features: window_features(window)?,
        })
    }
}

/// Feature vector of a single window, in catalog order.
pub fn window_features(window: &[SensorReading]) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();
    for channel in SensorChannel::ALL {
        let values: Vec<f64> = window.iter().map(|reading| reading.channel(channel)).collect();
        let summary = Summary::of(&values)?;
        for statistic in Statistic::ALL {
            features.insert(feature_name(channel, statistic), summary.get(statistic));
        }
    }
    Ok(features)
}
