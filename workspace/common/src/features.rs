use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::FeatureVector;

/// Raw sensor channels reported by a turbine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SensorChannel {
    GearboxTemperatureC,
    GeneratorPowerKw,
    RotationSpeedRpm,
    VibrationXG,
    VibrationYG,
    WindSpeedMS,
}

impl SensorChannel {
    /// All channels, in the order their features appear in the built-in catalog.
    pub const ALL: [SensorChannel; 6] = [
        SensorChannel::GearboxTemperatureC,
        SensorChannel::GeneratorPowerKw,
        SensorChannel::RotationSpeedRpm,
        SensorChannel::VibrationXG,
        SensorChannel::VibrationYG,
        SensorChannel::WindSpeedMS,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SensorChannel::GearboxTemperatureC => "gearbox_temperature_c",
            SensorChannel::GeneratorPowerKw => "generator_power_kw",
            SensorChannel::RotationSpeedRpm => "rotation_speed_rpm",
            SensorChannel::VibrationXG => "vibration_x_g",
            SensorChannel::VibrationYG => "vibration_y_g",
            SensorChannel::WindSpeedMS => "wind_speed_m_s",
        }
    }
}

/// Summary statistics computed per channel over a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Mean,
    Std,
    Min,
    Max,
    Median,
}

impl Statistic {
    pub const ALL: [Statistic; 5] = [
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Max,
        Statistic::Median,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Median => "median",
        }
    }
}

/// Feature name for a channel statistic, e.g. `wind_speed_m_s_median`.
pub fn feature_name(channel: SensorChannel, statistic: Statistic) -> String {
    format!("{}_{}", channel.name(), statistic.suffix())
}

/// Turn a snake_case feature name into a display label (`wind_speed_m_s_mean` -> `Wind Speed M S Mean`).
pub fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Typed descriptor of one form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureField {
    /// Feature name sent to the prediction endpoint
    pub name: String,
    /// Human readable label
    pub label: String,
    /// Initial value of the input
    pub default: f64,
}

impl FeatureField {
    pub fn new(name: impl Into<String>, default: f64) -> Self {
        let name = name.into();
        let label = humanize(&name);
        Self { name, label, default }
    }
}

// mean, std, min, max, median
const BUILTIN_DEFAULTS: [(SensorChannel, [f64; 5]); 6] = [
    (SensorChannel::GearboxTemperatureC, [75.0, 2.5, 72.0, 78.0, 75.0]),
    (SensorChannel::GeneratorPowerKw, [1600.0, 250.0, 1200.0, 2000.0, 1600.0]),
    (SensorChannel::RotationSpeedRpm, [15.0, 3.0, 10.0, 20.0, 15.0]),
    (SensorChannel::VibrationXG, [0.15, 0.03, 0.1, 0.2, 0.15]),
    (SensorChannel::VibrationYG, [0.16, 0.04, 0.11, 0.22, 0.16]),
    (SensorChannel::WindSpeedMS, [8.0, 2.0, 5.0, 12.0, 8.0]),
];

/// Ordered list of the features the dashboard form collects.
///
/// The model's real column list is an external contract (`model_columns.json`);
/// the built-in catalog is only the illustrative subset the dashboard ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureCatalog {
    fields: Vec<FeatureField>,
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FeatureCatalog {
    /// Six channels times five statistics, with the dashboard's example defaults.
    pub fn builtin() -> Self {
        let fields = BUILTIN_DEFAULTS
            .iter()
            .flat_map(|(channel, defaults)| {
                Statistic::ALL
                    .iter()
                    .zip(defaults.iter())
                    .map(move |(statistic, default)| {
                        FeatureField::new(feature_name(*channel, *statistic), *default)
                    })
            })
            .collect();
        Self { fields }
    }

    pub fn from_fields(fields: Vec<FeatureField>) -> Self {
        Self { fields }
    }

    /// Build a catalog from an external column list, keeping built-in defaults
    /// where the names match and starting every other column at 0.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let builtin = Self::builtin();
        let fields = columns
            .into_iter()
            .map(|column| {
                let column = column.as_ref();
                builtin
                    .get(column)
                    .cloned()
                    .unwrap_or_else(|| FeatureField::new(column, 0.0))
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FeatureField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FeatureField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Feature vector holding every field at its default, in catalog order.
    pub fn defaults(&self) -> FeatureVector {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.default))
            .collect()
    }
}
