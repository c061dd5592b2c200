use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::{FeatureVector, SensorChannel};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse `2025-05-13T10:00:00` or `2025-05-13 10:00:00.123456`.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMATS[1]))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
}

/// One raw telemetry sample, one per minute per turbine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SensorReading {
    /// ISO 8601 on output; `T` or space separated on input
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub wind_speed_m_s: f64,
    pub rotation_speed_rpm: f64,
    pub gearbox_temperature_c: f64,
    pub generator_power_kw: f64,
    pub vibration_x_g: f64,
    pub vibration_y_g: f64,
    /// 0 = normal, 1 = gearbox overheating, 2 = vibration anomaly
    #[serde(default)]
    pub label: u8,
}

impl SensorReading {
    pub fn channel(&self, channel: SensorChannel) -> f64 {
        match channel {
            SensorChannel::GearboxTemperatureC => self.gearbox_temperature_c,
            SensorChannel::GeneratorPowerKw => self.generator_power_kw,
            SensorChannel::RotationSpeedRpm => self.rotation_speed_rpm,
            SensorChannel::VibrationXG => self.vibration_x_g,
            SensorChannel::VibrationYG => self.vibration_y_g,
            SensorChannel::WindSpeedMS => self.wind_speed_m_s,
        }
    }

    pub fn channel_mut(&mut self, channel: SensorChannel) -> &mut f64 {
        match channel {
            SensorChannel::GearboxTemperatureC => &mut self.gearbox_temperature_c,
            SensorChannel::GeneratorPowerKw => &mut self.generator_power_kw,
            SensorChannel::RotationSpeedRpm => &mut self.rotation_speed_rpm,
            SensorChannel::VibrationXG => &mut self.vibration_x_g,
            SensorChannel::VibrationYG => &mut self.vibration_y_g,
            SensorChannel::WindSpeedMS => &mut self.wind_speed_m_s,
        }
    }

    pub fn is_anomalous(&self) -> bool {
        self.label != 0
    }
}

/// Summary statistics of one sliding window of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureWindow {
    /// `turbine_<n>` or `unknown_turbine`
    pub turbine_id: String,
    /// Timestamp of the last reading in the window
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub window_end_timestamp: NaiveDateTime,
    /// 1 if any reading in the window is anomalous, else 0
    pub label: u8,
    /// Feature name to value, in catalog order
    #[schema(value_type = Object)]
    pub features: FeatureVector,
}
