use chrono::{Duration, NaiveDateTime};
use common::{FailureClass, SensorChannel, SensorReading};
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};

/// One reading per minute.
pub const DATA_POINTS_PER_HOUR: usize = 60;

/// Gearbox temperature added per reading while overheating, in °C.
pub const GEARBOX_TEMP_INCREASE_RATE: f64 = 0.1;

/// Multiplier applied to both vibration axes during a vibration anomaly.
pub const VIBRATION_INCREASE_FACTOR: f64 = 5.0;

const DECIMALS: f64 = 10_000.0;

/// Normal distribution parameters of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelProfile {
    pub mean: f64,
    pub std: f64,
}

impl ChannelProfile {
    pub const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// Mean and std must be finite and std non-negative.
    pub fn validate(&self, channel: &str) -> Result<()> {
        if !self.mean.is_finite() || !self.std.is_finite() || self.std < 0.0 {
            return Err(ComputeError::Simulation(format!(
                "{} needs a finite mean and a finite, non-negative std (got {} ± {})",
                channel, self.mean, self.std
            )));
        }
        Ok(())
    }

    /// Box-Muller draw from N(mean, std²).
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        // 1 - u keeps the argument of ln strictly positive
        let u1: f64 = 1.0 - rng.random::<f64>();
        let u2: f64 = rng.random::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        self.mean + self.std * z
    }
}

/// Healthy operating characteristics of a turbine.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingProfile {
    pub wind_speed_m_s: ChannelProfile,
    pub rotation_speed_rpm: ChannelProfile,
    pub gearbox_temperature_c: ChannelProfile,
    pub generator_power_kw: ChannelProfile,
    pub vibration_x_g: ChannelProfile,
    pub vibration_y_g: ChannelProfile,
}

impl Default for OperatingProfile {
    fn default() -> Self {
        Self {
            wind_speed_m_s: ChannelProfile::new(7.0, 2.0),
            rotation_speed_rpm: ChannelProfile::new(15.0, 3.0),
            gearbox_temperature_c: ChannelProfile::new(60.0, 5.0),
            generator_power_kw: ChannelProfile::new(1500.0, 300.0),
            vibration_x_g: ChannelProfile::new(0.1, 0.02),
            vibration_y_g: ChannelProfile::new(0.1, 0.02),
        }
    }
}

impl OperatingProfile {
    pub fn validate(&self) -> Result<()> {
        self.wind_speed_m_s.validate("wind_speed_m_s")?;
        self.rotation_speed_rpm.validate("rotation_speed_rpm")?;
        self.gearbox_temperature_c.validate("gearbox_temperature_c")?;
        self.generator_power_kw.validate("generator_power_kw")?;
        self.vibration_x_g.validate("vibration_x_g")?;
        self.vibration_y_g.validate("vibration_y_g")
    }
}

/// Fault injected into a run of readings, indexes counted in readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// Gradual temperature ramp, label 1.
    GearboxOverheating { start: usize, duration: usize },
    /// Sudden vibration increase on both axes, label 2.
    Vibration { start: usize, duration: usize },
}

impl Anomaly {
    pub fn start(&self) -> usize {
        match self {
            Anomaly::GearboxOverheating { start, .. } | Anomaly::Vibration { start, .. } => *start,
        }
    }

    pub fn duration(&self) -> usize {
        match self {
            Anomaly::GearboxOverheating { duration, .. } | Anomaly::Vibration { duration, .. } => {
                *duration
            }
        }
    }

    pub fn class(&self) -> FailureClass {
        match self {
            Anomaly::GearboxOverheating { .. } => FailureClass::GearboxOverheating,
            Anomaly::Vibration { .. } => FailureClass::Vibration,
        }
    }

    /// Apply the anomaly in place. Indexes past the end are skipped.
    pub fn apply(&self, readings: &mut [SensorReading]) {
        let label = self.class().label();
        let end = (self.start() + self.duration()).min(readings.len());
        let start = self.start().min(end);
        for (offset, reading) in readings[start..end].iter_mut().enumerate() {
            match self {
                Anomaly::GearboxOverheating { .. } => {
                    reading.gearbox_temperature_c += GEARBOX_TEMP_INCREASE_RATE * (offset + 1) as f64;
                }
                Anomaly::Vibration { .. } => {
                    reading.vibration_x_g *= VIBRATION_INCREASE_FACTOR;
                    reading.vibration_y_g *= VIBRATION_INCREASE_FACTOR;
                }
            }
            reading.label = label;
        }
    }
}

/// Readings generated for one turbine.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedTurbine {
    pub turbine_id: u32,
    pub anomaly: Option<Anomaly>,
    pub readings: Vec<SensorReading>,
}

impl SimulatedTurbine {
    /// File name the raw data is written under.
    pub fn file_name(&self) -> String {
        format!("turbine_{}_data.json", self.turbine_id)
    }
}

/// Synthetic telemetry generator.
///
/// Readings are spaced one minute apart and end at `end`.
#[derive(Debug, Clone)]
pub struct TurbineSimulator {
    profile: OperatingProfile,
    end: NaiveDateTime,
}

impl TurbineSimulator {
    pub fn new(end: NaiveDateTime) -> Self {
        Self {
            profile: OperatingProfile::default(),
            end,
        }
    }

    /// Replace the healthy profile; rejects negative or non-finite parameters.
    pub fn with_profile(mut self, profile: OperatingProfile) -> Result<Self> {
        profile.validate()?;
        self.profile = profile;
        Ok(self)
    }

    /// Draw `count` healthy readings, oldest first.
    pub fn normal_readings<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<SensorReading> {
        (0..count)
            .map(|i| SensorReading {
                timestamp: self.end - Duration::minutes((count - 1 - i) as i64),
                wind_speed_m_s: self.profile.wind_speed_m_s.sample(rng),
                rotation_speed_rpm: self.profile.rotation_speed_rpm.sample(rng),
                gearbox_temperature_c: self.profile.gearbox_temperature_c.sample(rng),
                generator_power_kw: self.profile.generator_power_kw.sample(rng),
                vibration_x_g: self.profile.vibration_x_g.sample(rng),
                vibration_y_g: self.profile.vibration_y_g.sample(rng),
                label: FailureClass::Normal.label(),
            })
            .collect()
    }

    /// The reference fleet: turbine 1 overheats, turbine 2 vibrates, turbine 3 stays healthy.
    ///
    /// Overheating starts in the second half of the run and lasts three hours,
    /// ending at least five hours before the end. Vibration starts after the
    /// first third and lasts two hours, ending at least six hours before the end.
    #[instrument(skip(self, rng))]
    pub fn simulate_fleet<R: Rng>(&self, rng: &mut R, hours: usize) -> Result<Vec<SimulatedTurbine>> {
        let total = hours * DATA_POINTS_PER_HOUR;
        info!("Simulating 3 turbines with {} readings each", total);

        let overheating_latest = total.checked_sub(DATA_POINTS_PER_HOUR * 5);
        let vibration_latest = total.checked_sub(DATA_POINTS_PER_HOUR * 6);
        let (overheating_latest, vibration_latest) = match (overheating_latest, vibration_latest) {
            (Some(o), Some(v)) if o > total / 2 && v > total / 3 => (o, v),
            _ => {
                return Err(ComputeError::Simulation(format!(
                    "{} hours is too short to place the anomaly windows",
                    hours
                )));
            }
        };

        let mut fleet = Vec::with_capacity(3);
        for turbine_id in 1..=3u32 {
            let mut readings = self.normal_readings(rng, total);
            let anomaly = match turbine_id {
                1 => Some(Anomaly::GearboxOverheating {
                    start: rng.random_range(total / 2..overheating_latest),
                    duration: DATA_POINTS_PER_HOUR * 3,
                }),
                2 => Some(Anomaly::Vibration {
                    start: rng.random_range(total / 3..vibration_latest),
                    duration: DATA_POINTS_PER_HOUR * 2,
                }),
                _ => None,
            };

            if let Some(anomaly) = anomaly {
                anomaly.apply(&mut readings);
                info!("Turbine {}: {:?} injected from reading {}", turbine_id, anomaly.class(), anomaly.start());
            } else {
                debug!("Turbine {} left healthy", turbine_id);
            }

            round_readings(&mut readings);
            fleet.push(SimulatedTurbine {
                turbine_id,
                anomaly,
                readings,
            });
        }

        Ok(fleet)
    }
}

/// Round every channel to four decimals.
pub fn round_readings(readings: &mut [SensorReading]) {
    for reading in readings {
        for channel in SensorChannel::ALL {
            let value = reading.channel_mut(channel);
            *value = (*value * DECIMALS).round() / DECIMALS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn end() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 13)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn flat_readings(count: usize) -> Vec<SensorReading> {
        let profile = OperatingProfile {
            wind_speed_m_s: ChannelProfile::new(7.0, 0.0),
            rotation_speed_rpm: ChannelProfile::new(15.0, 0.0),
            gearbox_temperature_c: ChannelProfile::new(60.0, 0.0),
            generator_power_kw: ChannelProfile::new(1500.0, 0.0),
            vibration_x_g: ChannelProfile::new(0.1, 0.0),
            vibration_y_g: ChannelProfile::new(0.1, 0.0),
        };
        let mut rng = StdRng::seed_from_u64(1);
        TurbineSimulator::new(end())
            .with_profile(profile)
            .unwrap()
            .normal_readings(&mut rng, count)
    }

    #[test]
    fn test_readings_are_minute_spaced_and_end_at_end() {
        let readings = flat_readings(5);
        assert_eq!(readings.len(), 5);
        assert_eq!(readings[4].timestamp, end());
        assert_eq!(readings[0].timestamp, end() - Duration::minutes(4));
        assert!(readings.iter().all(|r| r.label == 0));
    }

    #[test]
    fn test_overheating_ramp() {
        let mut readings = flat_readings(10);
        Anomaly::GearboxOverheating { start: 2, duration: 3 }.apply(&mut readings);

        assert_eq!(readings[1].gearbox_temperature_c, 60.0);
        assert!((readings[2].gearbox_temperature_c - 60.1).abs() < 1e-9);
        assert!((readings[4].gearbox_temperature_c - 60.3).abs() < 1e-9);
        assert_eq!(readings[5].gearbox_temperature_c, 60.0);
        assert_eq!(readings[2].label, 1);
        assert_eq!(readings[5].label, 0);
    }

    #[test]
    fn test_vibration_anomaly_is_clipped_at_end() {
        let mut readings = flat_readings(4);
        Anomaly::Vibration { start: 2, duration: 10 }.apply(&mut readings);

        assert!((readings[3].vibration_x_g - 0.5).abs() < 1e-9);
        assert!((readings[3].vibration_y_g - 0.5).abs() < 1e-9);
        assert_eq!(readings[3].label, 2);
        assert_eq!(readings[1].label, 0);
    }

    #[test]
    fn test_fleet_is_deterministic_for_a_seed() {
        let simulator = TurbineSimulator::new(end());
        let first = simulator.simulate_fleet(&mut StdRng::seed_from_u64(42), 12).unwrap();
        let second = simulator.simulate_fleet(&mut StdRng::seed_from_u64(42), 12).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fleet_scenario() {
        let simulator = TurbineSimulator::new(end());
        let fleet = simulator.simulate_fleet(&mut StdRng::seed_from_u64(7), 24).unwrap();
        let total = 24 * DATA_POINTS_PER_HOUR;

        assert_eq!(fleet.len(), 3);
        assert!(fleet.iter().all(|t| t.readings.len() == total));
        assert_eq!(fleet[0].file_name(), "turbine_1_data.json");

        let overheating = fleet[0].anomaly.unwrap();
        assert_eq!(overheating.class(), FailureClass::GearboxOverheating);
        assert!(overheating.start() >= total / 2);
        assert!(overheating.start() + overheating.duration() <= total);
        assert_eq!(fleet[0].readings.iter().filter(|r| r.label == 1).count(), 180);

        assert_eq!(fleet[1].readings.iter().filter(|r| r.label == 2).count(), 120);
        assert!(fleet[2].anomaly.is_none());
        assert!(fleet[2].readings.iter().all(|r| r.label == 0));
    }

    #[test]
    fn test_values_are_rounded() {
        let simulator = TurbineSimulator::new(end());
        let fleet = simulator.simulate_fleet(&mut StdRng::seed_from_u64(3), 12).unwrap();
        for reading in &fleet[2].readings {
            let scaled = reading.generator_power_kw * DECIMALS;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_negative_std_is_rejected() {
        let profile = OperatingProfile {
            vibration_y_g: ChannelProfile::new(0.1, -0.02),
            ..OperatingProfile::default()
        };
        let result = TurbineSimulator::new(end()).with_profile(profile);
        assert!(matches!(result, Err(ComputeError::Simulation(msg)) if msg.contains("vibration_y_g")));

        let nan_mean = OperatingProfile {
            wind_speed_m_s: ChannelProfile::new(f64::NAN, 1.0),
            ..OperatingProfile::default()
        };
        assert!(TurbineSimulator::new(end()).with_profile(nan_mean).is_err());
    }

    #[test]
    fn test_too_short_run_is_rejected() {
        let simulator = TurbineSimulator::new(end());
        let result = simulator.simulate_fleet(&mut StdRng::seed_from_u64(1), 6);
        assert!(matches!(result, Err(ComputeError::Simulation(_))));
    }
}
