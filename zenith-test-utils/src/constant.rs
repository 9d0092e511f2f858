//! Standard values for catalog and snapshot fixtures.
//!
//! These are placeholder records, not live observations: the coordinates
//! point at Mumbai and the snapshot numbers are plausible monsoon-season
//! readings. Tests that care about a specific value should assert against
//! these constants rather than repeating literals.

/// Country name used by default fixture rows.
pub static TEST_COUNTRY_NAME: &str = "India";

/// ISO 3166-1 alpha-2 code of the default fixture country.
pub static TEST_COUNTRY_CODE: &str = "IN";

/// City name used by default fixture rows.
pub static TEST_CITY_NAME: &str = "Mumbai";

/// Latitude assigned to fixture cities.
pub static TEST_LATITUDE: f64 = 19.076;

/// Longitude assigned to fixture cities.
pub static TEST_LONGITUDE: f64 = 72.8777;

/// UV index stored by default snapshot fixtures.
pub static TEST_UV_INDEX: f64 = 6.4;

/// UV description matching [`TEST_UV_INDEX`].
pub static TEST_UV_DESC: &str = "High";

/// Air temperature in °C stored by default snapshot fixtures.
pub static TEST_TEMPERATURE: f64 = 31.2;

/// Apparent temperature in °C stored by default snapshot fixtures.
pub static TEST_FEELS_LIKE: f64 = 33.8;

/// Relative humidity percentage stored by default snapshot fixtures.
pub static TEST_HUMIDITY: i32 = 74;

/// Wind speed in km/h stored by default snapshot fixtures.
pub static TEST_WIND_SPEED: f64 = 12.5;

/// Weather description stored by default snapshot fixtures.
pub static TEST_WEATHER_DESC: &str = "Partly cloudy";
