//! Tests for WeatherService::get_weather method.
//!
//! This module verifies the single-city weather query: resolution through
//! canonical names and aliases, case and whitespace normalization, field
//! projection with identity keys, and the `ok: false` replies for unknown
//! cities and cities without an ingested snapshot.

use zenith::{
    data::catalog::country::CountryRepository, service::weather::WeatherService,
};
use zenith_test_utils::constant::{
    TEST_FEELS_LIKE, TEST_HUMIDITY, TEST_TEMPERATURE, TEST_UV_DESC, TEST_UV_INDEX,
    TEST_WEATHER_DESC, TEST_WIND_SPEED,
};
use zenith_test_utils::prelude::*;

/// Tests retrieving the full snapshot of a city by its canonical name.
///
/// Verifies that the reply carries the identity keys followed by every
/// snapshot field, with the stored values.
///
/// Expected: Ok with ok:true and all snapshot fields
#[tokio::test]
async fn returns_full_snapshot_for_canonical_name() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let result = weather_service.get_weather("Mumbai", None).await;

    assert!(result.is_ok());
    let reply = result.unwrap();
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["city"], "Mumbai");
    assert_eq!(reply["country"], "India");
    assert_eq!(reply["uv_index"], TEST_UV_INDEX);
    assert_eq!(reply["uv_desc"], TEST_UV_DESC);
    assert_eq!(reply["temperature"], TEST_TEMPERATURE);
    assert_eq!(reply["feels_like"], TEST_FEELS_LIKE);
    assert_eq!(reply["humidity"], TEST_HUMIDITY);
    assert_eq!(reply["wind_speed"], TEST_WIND_SPEED);
    assert_eq!(reply["weather_desc"], TEST_WEATHER_DESC);
    assert!(reply["updated_at"].is_string());

    Ok(())
}

/// Tests that an alias yields the same payload as the canonical name.
///
/// Verifies that resolving through the alias table changes nothing about
/// the reply; the resolution path is not observable.
///
/// Expected: identical replies for "Mumbai" and "Bombay"
#[tokio::test]
async fn alias_returns_same_payload_as_canonical_name() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.catalog().insert_alias("Bombay", city_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let by_name = weather_service.get_weather("Mumbai", None).await?;
    let by_alias = weather_service.get_weather("Bombay", None).await?;

    assert_eq!(by_name, by_alias);
    assert_eq!(by_alias["city"], "Mumbai");

    Ok(())
}

/// Tests case and whitespace insensitivity of the city identifier.
///
/// Verifies that upper-case, lower-case, and padded spellings of the same
/// name produce equivalent replies.
///
/// Expected: identical replies for "MUMBAI", "mumbai", and " Mumbai "
#[tokio::test]
async fn is_case_and_whitespace_insensitive() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let reference = weather_service.get_weather("Mumbai", None).await?;

    for identifier in ["MUMBAI", "mumbai", " Mumbai "] {
        let reply = weather_service.get_weather(identifier, None).await?;
        assert_eq!(reply, reference, "identifier {identifier:?}");
    }

    Ok(())
}

/// Tests field projection to a single requested field.
///
/// Verifies that the reply keys are exactly the identity keys plus the
/// requested field, in that order; no unrequested field leaks through.
///
/// Expected: keys exactly [ok, city, country, uv_index]
#[tokio::test]
async fn projects_to_requested_fields_only() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let fields = vec!["uv_index".to_string()];
    let reply = weather_service.get_weather("Mumbai", Some(&fields)).await?;

    let keys: Vec<&str> = reply.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["ok", "city", "country", "uv_index"]);
    assert_eq!(reply["uv_index"], TEST_UV_INDEX);

    Ok(())
}

/// Tests that unknown requested field names drop silently.
///
/// Verifies that a request for a name outside the snapshot field
/// enumeration keeps only the identity keys and raises no error.
///
/// Expected: keys exactly [ok, city, country]
#[tokio::test]
async fn drops_unknown_requested_fields_silently() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let fields = vec!["bogus_field".to_string()];
    let reply = weather_service.get_weather("Mumbai", Some(&fields)).await?;

    assert_eq!(reply["ok"], true);
    let keys: Vec<&str> = reply.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["ok", "city", "country"]);

    Ok(())
}

/// Tests the round-trip property of field projection.
///
/// Verifies that requesting no fields and requesting the explicit full
/// field enumeration produce identical replies.
///
/// Expected: identical objects for fields=None and the full field list
#[tokio::test]
async fn full_field_list_equals_no_projection() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let unprojected = weather_service.get_weather("Mumbai", None).await?;

    let all_fields: Vec<String> = zenith::service::projection::SnapshotField::ALL
        .iter()
        .map(|field| field.as_str().to_string())
        .collect();
    let projected = weather_service.get_weather("Mumbai", Some(&all_fields)).await?;

    assert_eq!(unprojected, projected);

    Ok(())
}

/// Tests the error reply for an unknown city identifier.
///
/// Verifies that the original, unnormalized identifier is interpolated
/// into the error message.
///
/// Expected: ok:false with the city-not-found message
#[tokio::test]
async fn returns_error_for_unknown_city() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather("Nowhere", None).await?;

    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"], "City \"Nowhere\" not found or inactive");

    Ok(())
}

/// Tests the error reply for a resolved city without a snapshot.
///
/// Verifies that "not yet observed" is distinct from "not found" and
/// interpolates the canonical name, not the identifier as given.
///
/// Expected: ok:false with the no-data-yet message
#[tokio::test]
async fn returns_error_for_city_without_snapshot() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    test.catalog().insert_city("Mumbai", country_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    let reply = weather_service.get_weather("mumbai", None).await?;

    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"], "No data yet for city \"Mumbai\"");

    Ok(())
}

/// Tests that deactivating the owning country breaks resolution.
///
/// Verifies that a previously resolvable name returns the not-found reply
/// once the country is inactive, even though city and snapshot still exist.
///
/// Expected: ok:false with the city-not-found message
#[tokio::test]
async fn returns_error_after_country_deactivated() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let country_model = test.catalog().insert_country("India", "IN").await?;
    let city_model = test.catalog().insert_city("Mumbai", country_model.id).await?;
    test.weather().insert_snapshot(city_model.id).await?;

    let weather_service = WeatherService::new(&test.db);
    assert_eq!(weather_service.get_weather("Mumbai", None).await?["ok"], true);

    let country_repo = CountryRepository::new(&test.db);
    country_repo.set_active(country_model.id, false).await?;

    let reply = weather_service.get_weather("Mumbai", None).await?;

    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"], "City \"Mumbai\" not found or inactive");

    Ok(())
}

/// Tests tolerance of identifiers that are empty after trimming.
///
/// Verifies that blank input produces the ordinary not-found reply rather
/// than an error or panic.
///
/// Expected: ok:false for "" and "   "
#[tokio::test]
async fn treats_blank_identifier_as_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let weather_service = WeatherService::new(&test.db);

    let reply = weather_service.get_weather("", None).await?;
    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"], "City \"\" not found or inactive");

    let reply = weather_service.get_weather("   ", None).await?;
    assert_eq!(reply["ok"], false);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that an infrastructure failure propagates as Err rather than
/// being folded into an ok:false reply.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let weather_service = WeatherService::new(&test.db);
    let result = weather_service.get_weather("Mumbai", None).await;

    assert!(result.is_err());

    Ok(())
}
