use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000002_city::City;

static IDX_CITY_ALIAS_CITY_ID: &str = "idx-city_alias-city_id";
static FK_CITY_ALIAS_CITY_ID: &str = "fk-city_alias-city_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CityAlias::Table)
                    .if_not_exists()
                    .col(pk_auto(CityAlias::Id))
                    .col(string_uniq(CityAlias::Alias))
                    .col(integer(CityAlias::CityId))
                    .col(timestamp(CityAlias::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_ALIAS_CITY_ID)
                            .from(CityAlias::Table, CityAlias::CityId)
                            .to(City::Table, City::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITY_ALIAS_CITY_ID)
                    .table(CityAlias::Table)
                    .col(CityAlias::CityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITY_ALIAS_CITY_ID)
                    .table(CityAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CityAlias::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CityAlias {
    Table,
    Id,
    Alias,
    CityId,
    CreatedAt,
}
