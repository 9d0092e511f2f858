use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    /// Creates a new instance of [`CityRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a city record owned by the given country
    pub async fn create(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
        country_id: i32,
        active: bool,
        batch_group: Option<i32>,
    ) -> Result<entity::city::Model, DbErr> {
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            country_id: ActiveValue::Set(country_id),
            active: ActiveValue::Set(active),
            batch_group: ActiveValue::Set(batch_group),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        city.insert(self.db).await
    }

    /// Finds a city by its canonical name, together with its owning country.
    ///
    /// The lookup matches `lower(name)` against the given name, so the caller
    /// is expected to pass an already trimmed, lowercased identifier. A city
    /// is only returned when both the city and its country are active.
    pub async fn find_active_by_name(
        &self,
        normalized_name: &str,
    ) -> Result<Option<(entity::city::Model, entity::country::Model)>, DbErr> {
        let city = entity::prelude::City::find()
            .find_also_related(entity::country::Entity)
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::city::Entity,
                    entity::city::Column::Name,
                ))))
                .eq(normalized_name),
            )
            .filter(entity::city::Column::Active.eq(true))
            .filter(entity::country::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(city.and_then(|(city, country)| country.map(|country| (city, country))))
    }

    /// Finds a city by its record ID, subject to the same active-city and
    /// active-country constraints as [`Self::find_active_by_name`].
    pub async fn find_active_by_id(
        &self,
        city_id: i32,
    ) -> Result<Option<(entity::city::Model, entity::country::Model)>, DbErr> {
        let city = entity::prelude::City::find_by_id(city_id)
            .find_also_related(entity::country::Entity)
            .filter(entity::city::Column::Active.eq(true))
            .filter(entity::country::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(city.and_then(|(city, country)| country.map(|country| (city, country))))
    }

    /// Lists the active cities of a country with their snapshot, if one has
    /// been ingested yet, ordered by canonical name ascending.
    pub async fn list_active_by_country(
        &self,
        country_id: i32,
    ) -> Result<Vec<(entity::city::Model, Option<entity::weather_snapshot::Model>)>, DbErr> {
        entity::prelude::City::find()
            .find_also_related(entity::weather_snapshot::Entity)
            .filter(entity::city::Column::CountryId.eq(country_id))
            .filter(entity::city::Column::Active.eq(true))
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the active cities of active countries assigned to one ingestion
    /// batch group, ordered by canonical name ascending.
    ///
    /// The external ingestion scheduler uses this to pick the city set for
    /// one refresh cycle.
    pub async fn list_active_in_batch_group(
        &self,
        batch_group: i32,
    ) -> Result<Vec<entity::city::Model>, DbErr> {
        let cities = entity::prelude::City::find()
            .find_also_related(entity::country::Entity)
            .filter(entity::city::Column::BatchGroup.eq(batch_group))
            .filter(entity::city::Column::Active.eq(true))
            .filter(entity::country::Column::Active.eq(true))
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?;

        Ok(cities.into_iter().map(|(city, _)| city).collect())
    }

    /// Activates or deactivates a city, returning the updated record.
    ///
    /// Returns `Ok(None)` when no city with the given ID exists.
    pub async fn set_active(
        &self,
        city_id: i32,
        active: bool,
    ) -> Result<Option<entity::city::Model>, DbErr> {
        let city = match entity::prelude::City::find_by_id(city_id)
            .one(self.db)
            .await?
        {
            Some(city) => city,
            None => return Ok(None),
        };

        let mut city_am = city.into_active_model();
        city_am.active = ActiveValue::Set(active);
        city_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let city = city_am.update(self.db).await?;

        Ok(Some(city))
    }
}
