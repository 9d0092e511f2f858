use futures::future::join_all;
use sea_orm::DatabaseConnection;
use serde_json::{json, Map, Value};

use crate::{
    data::{catalog::city::CityRepository, weather::snapshot::SnapshotRepository},
    error::Error,
    service::{projection, resolver::ResolverService},
};

/// Identity keys a single-city reply keeps regardless of the requested fields.
static CITY_IDENTITY_KEYS: [&str; 3] = ["ok", "city", "country"];

/// Identity keys a per-city row of a by-country reply keeps; `ok` and the
/// country are hoisted to the envelope there.
static COUNTRY_ROW_IDENTITY_KEYS: [&str; 1] = ["city"];

pub struct WeatherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeatherService<'a> {
    /// Creates a new instance of [`WeatherService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current weather snapshot of one city, projected to the requested
    /// fields.
    ///
    /// The identifier may be a canonical name or an alias, in any case and
    /// padding. An unresolvable identifier or a city without an ingested
    /// snapshot yields an `ok: false` reply carrying an `error` message;
    /// only infrastructure failures surface as `Err`.
    pub async fn get_weather(
        &self,
        city: &str,
        fields: Option<&[String]>,
    ) -> Result<Value, Error> {
        let resolver = ResolverService::new(self.db);

        let resolved = match resolver.resolve_city(city).await? {
            Some(resolved) => resolved,
            None => {
                return Ok(json!({
                    "ok": false,
                    "error": format!("City \"{city}\" not found or inactive"),
                }));
            }
        };

        let snapshot_repo = SnapshotRepository::new(self.db);

        let snapshot = match snapshot_repo.get_by_city(resolved.city.id).await? {
            Some(snapshot) => snapshot,
            None => {
                return Ok(json!({
                    "ok": false,
                    "error": format!("No data yet for city \"{}\"", resolved.city.name),
                }));
            }
        };

        let mut record = Map::new();
        record.insert("ok".to_string(), json!(true));
        record.insert("city".to_string(), json!(resolved.city.name));
        record.insert("country".to_string(), json!(resolved.country.name));
        record.extend(projection::snapshot_record(&snapshot));

        Ok(Value::Object(projection::project(
            record,
            fields,
            &CITY_IDENTITY_KEYS,
        )))
    }

    /// Current weather snapshots of several cities, one reply entry per
    /// input identifier.
    ///
    /// Identifiers are looked up independently and concurrently; a failed
    /// entry ("not found", "no data yet") never aborts the batch, and the
    /// reply entries are in input order. Duplicates are each resolved on
    /// their own. `count` is the input length, failed entries included.
    pub async fn get_weather_batch(
        &self,
        cities: &[String],
        fields: Option<&[String]>,
    ) -> Result<Value, Error> {
        let lookups = cities.iter().map(|city| self.get_weather(city, fields));

        // join_all keeps input order, so no re-sorting is needed
        let data = join_all(lookups)
            .await
            .into_iter()
            .collect::<Result<Vec<Value>, Error>>()?;

        Ok(json!({
            "ok": true,
            "count": cities.len(),
            "data": data,
        }))
    }

    /// Current weather snapshots of every active city of a country that has
    /// one, ordered by canonical city name ascending.
    ///
    /// Cities without an ingested snapshot are omitted; `count` reflects
    /// the returned rows, not the country's city total. The per-city rows
    /// carry the city name plus the requested fields; `ok` and the country
    /// live on the envelope.
    pub async fn get_weather_by_country(
        &self,
        country_code: &str,
        fields: Option<&[String]>,
    ) -> Result<Value, Error> {
        let resolver = ResolverService::new(self.db);

        let country = match resolver.resolve_country(country_code).await? {
            Some(country) => country,
            None => {
                return Ok(json!({
                    "ok": false,
                    "error": format!("Country \"{country_code}\" not found or inactive"),
                }));
            }
        };

        let city_repo = CityRepository::new(self.db);
        let cities = city_repo.list_active_by_country(country.id).await?;

        let data: Vec<Value> = cities
            .into_iter()
            .filter_map(|(city, snapshot)| snapshot.map(|snapshot| (city, snapshot)))
            .map(|(city, snapshot)| {
                let mut record = Map::new();
                record.insert("city".to_string(), json!(city.name));
                record.extend(projection::snapshot_record(&snapshot));

                Value::Object(projection::project(
                    record,
                    fields,
                    &COUNTRY_ROW_IDENTITY_KEYS,
                ))
            })
            .collect();

        tracing::debug!(country = %country.name, rows = data.len(), "served by-country weather");

        Ok(json!({
            "ok": true,
            "country": country.name,
            "code": country_code.trim().to_uppercase(),
            "count": data.len(),
            "data": data,
        }))
    }
}
