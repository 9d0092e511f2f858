use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000002_city::City;

static FK_WEATHER_SNAPSHOT_CITY_ID: &str = "fk-weather_snapshot-city_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The unique city_id carries the one-snapshot-per-city rule and
        // doubles as the lookup index.
        manager
            .create_table(
                Table::create()
                    .table(WeatherSnapshot::Table)
                    .if_not_exists()
                    .col(pk_auto(WeatherSnapshot::Id))
                    .col(integer_uniq(WeatherSnapshot::CityId))
                    .col(double(WeatherSnapshot::UvIndex))
                    .col(string(WeatherSnapshot::UvDesc))
                    .col(double(WeatherSnapshot::Temperature))
                    .col(double(WeatherSnapshot::FeelsLike))
                    .col(integer(WeatherSnapshot::Humidity))
                    .col(double(WeatherSnapshot::WindSpeed))
                    .col(string(WeatherSnapshot::WeatherDesc))
                    .col(timestamp(WeatherSnapshot::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WEATHER_SNAPSHOT_CITY_ID)
                            .from(WeatherSnapshot::Table, WeatherSnapshot::CityId)
                            .to(City::Table, City::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeatherSnapshot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WeatherSnapshot {
    Table,
    Id,
    CityId,
    UvIndex,
    UvDesc,
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    WeatherDesc,
    UpdatedAt,
}
