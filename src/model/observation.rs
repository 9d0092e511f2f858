//! The ingest payload for one city observation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{uv::UvLevel, wmo};

/// One complete weather observation for a city, as handed over by the
/// external ingestion process.
///
/// This is the unit [`crate::data::weather::snapshot::SnapshotRepository::upsert`]
/// consumes: the stored snapshot is this observation plus the city it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// UV index reading.
    pub uv_index: f64,
    /// Severity label for `uv_index`.
    pub uv_desc: String,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Apparent temperature in °C.
    pub feels_like: f64,
    /// Relative humidity percentage.
    pub humidity: i32,
    /// Wind speed in km/h.
    pub wind_speed: f64,
    /// Human-readable sky condition.
    pub weather_desc: String,
    /// When the provider took the reading.
    pub observed_at: NaiveDateTime,
}

impl WeatherObservation {
    /// Build an observation from raw provider readings, deriving the UV
    /// description and the weather description from the numeric values.
    pub fn from_readings(
        uv_index: f64,
        temperature: f64,
        feels_like: f64,
        humidity: i32,
        wind_speed: f64,
        weather_code: i32,
        observed_at: NaiveDateTime,
    ) -> Self {
        Self {
            uv_index,
            uv_desc: UvLevel::from_index(uv_index).label().to_string(),
            temperature,
            feels_like,
            humidity,
            wind_speed,
            weather_desc: wmo::description(weather_code).to_string(),
            observed_at,
        }
    }
}
