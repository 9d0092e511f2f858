use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct CountryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryRepository<'a> {
    /// Creates a new instance of [`CountryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a country record
    pub async fn create(
        &self,
        name: &str,
        iso_code: &str,
        active: bool,
    ) -> Result<entity::country::Model, DbErr> {
        let country = entity::country::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            iso_code: ActiveValue::Set(iso_code.to_string()),
            active: ActiveValue::Set(active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        country.insert(self.db).await
    }

    /// Finds an active country by its ISO 3166-1 alpha-2 code.
    ///
    /// The lookup matches `lower(iso_code)` against the given code, so the
    /// caller is expected to pass an already trimmed, lowercased code.
    pub async fn find_active_by_iso_code(
        &self,
        normalized_code: &str,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::country::Entity,
                    entity::country::Column::IsoCode,
                ))))
                .eq(normalized_code),
            )
            .filter(entity::country::Column::Active.eq(true))
            .one(self.db)
            .await
    }

    /// Activates or deactivates a country, returning the updated record.
    ///
    /// Returns `Ok(None)` when no country with the given ID exists.
    pub async fn set_active(
        &self,
        country_id: i32,
        active: bool,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        let country = match entity::prelude::Country::find_by_id(country_id)
            .one(self.db)
            .await?
        {
            Some(country) => country,
            None => return Ok(None),
        };

        let mut country_am = country.into_active_model();
        country_am.active = ActiveValue::Set(active);
        country_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let country = country_am.update(self.db).await?;

        Ok(Some(country))
    }
}
