pub use sea_orm_migration::prelude::*;

mod m20260601_000001_country;
mod m20260601_000002_city;
mod m20260601_000003_city_alias;
mod m20260601_000004_weather_snapshot;
mod m20260601_000005_app_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_country::Migration),
            Box::new(m20260601_000002_city::Migration),
            Box::new(m20260601_000003_city_alias::Migration),
            Box::new(m20260601_000004_weather_snapshot::Migration),
            Box::new(m20260601_000005_app_config::Migration),
        ]
    }
}
