use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct CityAliasRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityAliasRepository<'a> {
    /// Creates a new instance of [`CityAliasRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an alias pointing at the given city
    pub async fn create(
        &self,
        alias: &str,
        city_id: i32,
    ) -> Result<entity::city_alias::Model, DbErr> {
        let alias = entity::city_alias::ActiveModel {
            alias: ActiveValue::Set(alias.to_string()),
            city_id: ActiveValue::Set(city_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        alias.insert(self.db).await
    }

    /// Finds an alias by its text, matching `lower(alias)` against the given
    /// already trimmed, lowercased identifier.
    ///
    /// An alias carries no activity of its own; the caller still has to check
    /// the referenced city and its country.
    pub async fn find_by_alias(
        &self,
        normalized_alias: &str,
    ) -> Result<Option<entity::city_alias::Model>, DbErr> {
        entity::prelude::CityAlias::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::city_alias::Entity,
                    entity::city_alias::Column::Alias,
                ))))
                .eq(normalized_alias),
            )
            .one(self.db)
            .await
    }
}
