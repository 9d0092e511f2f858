use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::observation::WeatherObservation;

pub struct SnapshotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SnapshotRepository<'a> {
    /// Creates a new instance of [`SnapshotRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current snapshot of a city.
    ///
    /// `Ok(None)` is the distinct "not yet observed" state: the city exists
    /// but the ingestion process has not stored an observation for it yet.
    pub async fn get_by_city(
        &self,
        city_id: i32,
    ) -> Result<Option<entity::weather_snapshot::Model>, DbErr> {
        entity::prelude::WeatherSnapshot::find()
            .filter(entity::weather_snapshot::Column::CityId.eq(city_id))
            .one(self.db)
            .await
    }

    /// Inserts or replaces the snapshot of a city.
    ///
    /// The conflict target is the unique `city_id`, so the whole row is
    /// swapped in one statement and readers see either the previous or the
    /// new observation, never a mix.
    pub async fn upsert(
        &self,
        city_id: i32,
        observation: &WeatherObservation,
    ) -> Result<entity::weather_snapshot::Model, DbErr> {
        let snapshot = entity::weather_snapshot::ActiveModel {
            city_id: ActiveValue::Set(city_id),
            uv_index: ActiveValue::Set(observation.uv_index),
            uv_desc: ActiveValue::Set(observation.uv_desc.clone()),
            temperature: ActiveValue::Set(observation.temperature),
            feels_like: ActiveValue::Set(observation.feels_like),
            humidity: ActiveValue::Set(observation.humidity),
            wind_speed: ActiveValue::Set(observation.wind_speed),
            weather_desc: ActiveValue::Set(observation.weather_desc.clone()),
            updated_at: ActiveValue::Set(observation.observed_at),
            ..Default::default()
        };

        entity::prelude::WeatherSnapshot::insert(snapshot)
            .on_conflict(
                OnConflict::column(entity::weather_snapshot::Column::CityId)
                    .update_columns([
                        entity::weather_snapshot::Column::UvIndex,
                        entity::weather_snapshot::Column::UvDesc,
                        entity::weather_snapshot::Column::Temperature,
                        entity::weather_snapshot::Column::FeelsLike,
                        entity::weather_snapshot::Column::Humidity,
                        entity::weather_snapshot::Column::WindSpeed,
                        entity::weather_snapshot::Column::WeatherDesc,
                        entity::weather_snapshot::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
