//! Database model type aliases for test utilities.
//!
//! Convenient aliases for the sea-orm entity models used throughout the
//! test suite. These match the names used in the main zenith crate so
//! fixtures and assertions read the same on both sides.

/// Type alias for the country database model.
pub type CountryModel = entity::country::Model;

/// Type alias for the city database model.
pub type CityModel = entity::city::Model;

/// Type alias for the city alias database model.
pub type CityAliasModel = entity::city_alias::Model;

/// Type alias for the weather snapshot database model.
pub type WeatherSnapshotModel = entity::weather_snapshot::Model;

/// Type alias for the operational config database model.
pub type AppConfigModel = entity::app_config::Model;
