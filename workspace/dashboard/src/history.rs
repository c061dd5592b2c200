use common::HistoryPoint;
use rand::Rng;

/// Number of points in the sample history chart.
pub const SAMPLE_HISTORY_LEN: usize = 30;

/// Synthetic sensor history for the chart, labelled `T-0` to `T-29`.
///
/// Temperature is drawn from [60, 80), vibration from [0.1, 0.2) and power
/// from [1400, 1600), each independently.
pub fn generate_sample_history<R: Rng>(rng: &mut R) -> Vec<HistoryPoint> {
    (0..SAMPLE_HISTORY_LEN)
        .map(|i| HistoryPoint {
            name: format!("T-{}", i),
            temperature: rng.random_range(60.0..80.0),
            vibration: rng.random_range(0.1..0.2),
            power: rng.random_range(1400.0..1600.0),
        })
        .collect()
}

/// [`generate_sample_history`] with the thread-local generator.
pub fn sample_history() -> Vec<HistoryPoint> {
    generate_sample_history(&mut rand::rng())
}
