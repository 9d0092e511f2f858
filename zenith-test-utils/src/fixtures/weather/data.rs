//! Weather snapshot insertion utilities.
//!
//! Methods for attaching snapshot records to catalog cities. Snapshots are
//! unique per city; a second insert for the same city returns the existing
//! record, since replacement semantics belong to the repository upsert.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::{
        TEST_FEELS_LIKE, TEST_HUMIDITY, TEST_TEMPERATURE, TEST_UV_DESC, TEST_UV_INDEX,
        TEST_WEATHER_DESC, TEST_WIND_SPEED,
    },
    error::TestError,
    fixtures::weather::WeatherFixtures,
    model::WeatherSnapshotModel,
};

impl<'a> WeatherFixtures<'a> {
    /// Insert a weather snapshot for a city.
    ///
    /// Stores the standard fixture observation from [`crate::constant`]
    /// with the current time as the observation timestamp.
    ///
    /// # Arguments
    /// - `city_id` - Identifier of the observed city record
    ///
    /// # Returns
    /// - `Ok(WeatherSnapshotModel)` - The created or existing snapshot record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_snapshot(&self, city_id: i32) -> Result<WeatherSnapshotModel, TestError> {
        if let Some(existing_snapshot) = entity::prelude::WeatherSnapshot::find()
            .filter(entity::weather_snapshot::Column::CityId.eq(city_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_snapshot);
        }

        Ok(entity::prelude::WeatherSnapshot::insert(
            entity::weather_snapshot::ActiveModel {
                city_id: ActiveValue::Set(city_id),
                uv_index: ActiveValue::Set(TEST_UV_INDEX),
                uv_desc: ActiveValue::Set(TEST_UV_DESC.to_string()),
                temperature: ActiveValue::Set(TEST_TEMPERATURE),
                feels_like: ActiveValue::Set(TEST_FEELS_LIKE),
                humidity: ActiveValue::Set(TEST_HUMIDITY),
                wind_speed: ActiveValue::Set(TEST_WIND_SPEED),
                weather_desc: ActiveValue::Set(TEST_WEATHER_DESC.to_string()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
