use serde_json::{json, Map, Value};

/// The fixed enumeration of snapshot fields a caller may request.
///
/// Any requested name outside this list is unknown and silently dropped
/// during projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    /// `uv_index` - numeric UV index reading.
    UvIndex,
    /// `uv_desc` - severity label for the UV index.
    UvDesc,
    /// `temperature` - air temperature in °C.
    Temperature,
    /// `feels_like` - apparent temperature in °C.
    FeelsLike,
    /// `humidity` - relative humidity percentage.
    Humidity,
    /// `wind_speed` - wind speed in km/h.
    WindSpeed,
    /// `weather_desc` - human-readable sky condition.
    WeatherDesc,
    /// `updated_at` - observation timestamp.
    UpdatedAt,
}

impl SnapshotField {
    /// All snapshot fields, in reply order.
    pub const ALL: [SnapshotField; 8] = [
        SnapshotField::UvIndex,
        SnapshotField::UvDesc,
        SnapshotField::Temperature,
        SnapshotField::FeelsLike,
        SnapshotField::Humidity,
        SnapshotField::WindSpeed,
        SnapshotField::WeatherDesc,
        SnapshotField::UpdatedAt,
    ];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotField::UvIndex => "uv_index",
            SnapshotField::UvDesc => "uv_desc",
            SnapshotField::Temperature => "temperature",
            SnapshotField::FeelsLike => "feels_like",
            SnapshotField::Humidity => "humidity",
            SnapshotField::WindSpeed => "wind_speed",
            SnapshotField::WeatherDesc => "weather_desc",
            SnapshotField::UpdatedAt => "updated_at",
        }
    }

    /// Parses a wire name back into a field; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// Renders a snapshot row as an ordered field map following
/// [`SnapshotField::ALL`].
pub fn snapshot_record(snapshot: &entity::weather_snapshot::Model) -> Map<String, Value> {
    let mut record = Map::new();

    for field in SnapshotField::ALL {
        let value = match field {
            SnapshotField::UvIndex => json!(snapshot.uv_index),
            SnapshotField::UvDesc => json!(snapshot.uv_desc),
            SnapshotField::Temperature => json!(snapshot.temperature),
            SnapshotField::FeelsLike => json!(snapshot.feels_like),
            SnapshotField::Humidity => json!(snapshot.humidity),
            SnapshotField::WindSpeed => json!(snapshot.wind_speed),
            SnapshotField::WeatherDesc => json!(snapshot.weather_desc),
            SnapshotField::UpdatedAt => json!(snapshot.updated_at),
        };

        record.insert(field.as_str().to_string(), value);
    }

    record
}

/// Reduces a record to a caller-chosen field subset.
///
/// With no requested fields (`None` or empty) the record passes through
/// unchanged. Otherwise the result keeps the keys named in `always` (identity
/// keys such as `ok`, `city`, `country`) plus the requested keys that exist
/// in the record; requested names the record does not carry are dropped
/// without error. Key order follows the input record.
pub fn project(
    record: Map<String, Value>,
    requested: Option<&[String]>,
    always: &[&str],
) -> Map<String, Value> {
    let requested = match requested {
        Some(fields) if !fields.is_empty() => fields,
        _ => return record,
    };

    record
        .into_iter()
        .filter(|(key, _)| {
            always.contains(&key.as_str()) || requested.iter().any(|field| field == key)
        })
        .collect()
}
