//! Operational configuration store.
//!
//! Plain key/value parameters for the processes embedding this crate, such
//! as the ingestion scheduler's cadence. The resolution and projection core
//! never reads these.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct AppConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppConfigRepository<'a> {
    /// Creates a new instance of [`AppConfigRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the value stored under a key
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::AppConfig::find_by_id(key).one(self.db).await?;

        Ok(row.map(|row| row.value))
    }

    /// Sets the value stored under a key, inserting or replacing on the key
    pub async fn set(&self, key: &str, value: &str) -> Result<entity::app_config::Model, DbErr> {
        let row = entity::app_config::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::AppConfig::insert(row)
            .on_conflict(
                OnConflict::column(entity::app_config::Column::Key)
                    .update_columns([
                        entity::app_config::Column::Value,
                        entity::app_config::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
