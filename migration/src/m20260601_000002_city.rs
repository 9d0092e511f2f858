use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_country::Country;

static IDX_CITY_COUNTRY_ID: &str = "idx-city-country_id";
static IDX_CITY_BATCH_GROUP: &str = "idx-city-batch_group";
static FK_CITY_COUNTRY_ID: &str = "fk-city-country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the migrations also run on
        // sqlite, which cannot add a constraint to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string_uniq(City::Name))
                    .col(double(City::Latitude))
                    .col(double(City::Longitude))
                    .col(integer(City::CountryId))
                    .col(boolean(City::Active))
                    .col(integer_null(City::BatchGroup))
                    .col(timestamp(City::CreatedAt))
                    .col(timestamp(City::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_COUNTRY_ID)
                            .from(City::Table, City::CountryId)
                            .to(Country::Table, Country::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITY_COUNTRY_ID)
                    .table(City::Table)
                    .col(City::CountryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITY_BATCH_GROUP)
                    .table(City::Table)
                    .col(City::BatchGroup)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITY_BATCH_GROUP)
                    .table(City::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITY_COUNTRY_ID)
                    .table(City::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    CountryId,
    Active,
    BatchGroup,
    CreatedAt,
    UpdatedAt,
}
