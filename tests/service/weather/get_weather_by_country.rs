//! Tests for WeatherService::get_weather_by_country method.
//!
//! This module verifies the whole-country weather query: code resolution,
//! name-ordered rows, omission of cities without a snapshot, the
//! rows-returned count semantics, and per-row field projection without the
//! envelope keys.

use zenith::{
    data::catalog::country::CountryRepository, service::weather::WeatherService,
};
use zenith_test_utils::prelude::*;

/// Tests listing a country's cities sorted by canonical name.
///
/// Verifies the envelope carries the country name and uppercased code, and
/// that rows are in ascending name order regardless of insertion order.
///
/// Expected: data rows [Delhi, Mumbai] under country "India", code "IN"
#[tokio::test]
async fn lists_cities_sorted_by_name() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let mumbai = test.catalog().insert_city("Mumbai", country_model.id).await?;
    let delhi = test.catalog().insert_city("Delhi", country_model.id).await?;
    test.weather().insert_snapshot(mumbai.id).await?;
    test.weather().insert_snapshot(delhi.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country("in", None).await?;

    assert_eq!(reply["ok"], true);
    assert_eq!(reply["country"], "India");
    assert_eq!(reply["code"], "IN");
    assert_eq!(reply["count"], 2);
    let data = reply["data"].as_array().unwrap();
    assert_eq!(data[0]["city"], "Delhi");
    assert_eq!(data[1]["city"], "Mumbai");

    Ok(())
}

/// Tests normalization of the input country code.
///
/// Verifies that a padded, lower-case code resolves and is echoed back
/// trimmed and uppercased.
///
/// Expected: code "IN" for input " in "
#[tokio::test]
async fn echoes_trimmed_uppercased_code() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_country("India", "IN").await?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country(" in ", None).await?;

    assert_eq!(reply["ok"], true);
    assert_eq!(reply["code"], "IN");

    Ok(())
}

/// Tests omission of cities that have no snapshot yet.
///
/// Verifies that a snapshotless city appears in neither data nor count;
/// by-country count reflects returned rows only, unlike the batch count
/// which covers the full input length.
///
/// Expected: count 1 and a single Mumbai row despite two active cities
#[tokio::test]
async fn omits_cities_without_snapshot_from_data_and_count() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let mumbai = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.catalog().insert_city("Delhi", country_model.id).await?;
    test.weather().insert_snapshot(mumbai.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country("IN", None).await?;

    assert_eq!(reply["count"], 1);
    let data = reply["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["city"], "Mumbai");

    Ok(())
}

/// Tests per-row field projection.
///
/// Verifies that rows keep the city name plus the requested fields only;
/// ok and country are not re-included per row since the envelope carries
/// them.
///
/// Expected: row keys exactly [city, temperature]
#[tokio::test]
async fn projects_rows_to_requested_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let mumbai = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(mumbai.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let fields = vec!["temperature".to_string()];
    let reply = weather_service.get_weather_by_country("IN", Some(&fields)).await?;

    let data = reply["data"].as_array().unwrap();
    let keys: Vec<&str> = data[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["city", "temperature"]);

    Ok(())
}

/// Tests the error reply for an unknown country code.
///
/// Verifies that the code is interpolated as given, not normalized.
///
/// Expected: ok:false with the country-not-found message
#[tokio::test]
async fn returns_error_for_unknown_code() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country("zz", None).await?;

    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"], "Country \"zz\" not found or inactive");

    Ok(())
}

/// Tests the error reply for a deactivated country.
///
/// Verifies that deactivation excludes the country from code resolution.
///
/// Expected: ok:false with the country-not-found message
#[tokio::test]
async fn returns_error_for_inactive_country() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;

    let country_repo = CountryRepository::new(&test.db);
    country_repo.set_active(country_model.id, false).await?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country("IN", None).await?;

    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"], "Country \"IN\" not found or inactive");

    Ok(())
}

/// Tests tolerance of codes that are empty after trimming.
///
/// Verifies that blank input produces the ordinary not-found reply rather
/// than an error or panic.
///
/// Expected: ok:false for "  "
#[tokio::test]
async fn treats_blank_code_as_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country("  ", None).await?;

    assert_eq!(reply["ok"], false);

    Ok(())
}

/// Tests the reply for an active country without any cities.
///
/// Verifies that an empty country is a success with zero rows, not an
/// error.
///
/// Expected: ok:true with count 0 and empty data
#[tokio::test]
async fn returns_empty_data_for_country_without_cities() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_country("India", "IN").await?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather_by_country("IN", None).await?;

    assert_eq!(reply["ok"], true);
    assert_eq!(reply["count"], 0);
    assert!(reply["data"].as_array().unwrap().is_empty());

    Ok(())
}
