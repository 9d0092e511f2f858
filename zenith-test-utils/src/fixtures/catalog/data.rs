//! Catalog database insertion utilities.
//!
//! Methods for inserting country, city, and alias records into the test
//! database. An insert that collides with an existing unique value returns
//! the existing record instead of failing, so fixtures can be layered
//! freely across test steps.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::{TEST_LATITUDE, TEST_LONGITUDE},
    error::TestError,
    fixtures::catalog::CatalogFixtures,
    model::{CityAliasModel, CityModel, CountryModel},
};

impl<'a> CatalogFixtures<'a> {
    /// Insert an active country into the database.
    ///
    /// If a country with the given ISO code already exists, returns the
    /// existing record instead of creating a duplicate.
    ///
    /// # Arguments
    /// - `name` - Canonical country name
    /// - `iso_code` - ISO 3166-1 alpha-2 code
    ///
    /// # Returns
    /// - `Ok(CountryModel)` - The created or existing country record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_country(
        &self,
        name: &str,
        iso_code: &str,
    ) -> Result<CountryModel, TestError> {
        if let Some(existing_country) = entity::prelude::Country::find()
            .filter(entity::country::Column::IsoCode.eq(iso_code))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_country);
        }

        Ok(
            entity::prelude::Country::insert(entity::country::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                iso_code: ActiveValue::Set(iso_code.to_string()),
                active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an active city into the database.
    ///
    /// Coordinates default to the fixture values in [`crate::constant`] and
    /// the batch group is left unassigned. If a city with the given name
    /// already exists, returns the existing record.
    ///
    /// # Arguments
    /// - `name` - Canonical city name
    /// - `country_id` - Identifier of the owning country record
    ///
    /// # Returns
    /// - `Ok(CityModel)` - The created or existing city record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_city(&self, name: &str, country_id: i32) -> Result<CityModel, TestError> {
        if let Some(existing_city) = entity::prelude::City::find()
            .filter(entity::city::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_city);
        }

        Ok(
            entity::prelude::City::insert(entity::city::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                latitude: ActiveValue::Set(TEST_LATITUDE),
                longitude: ActiveValue::Set(TEST_LONGITUDE),
                country_id: ActiveValue::Set(country_id),
                active: ActiveValue::Set(true),
                batch_group: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a city alias into the database.
    ///
    /// The alias is stored exactly as given; lookups lowercase both sides,
    /// so mixed-case aliases are fine. If the alias already exists, returns
    /// the existing record.
    ///
    /// # Arguments
    /// - `alias` - Alternate spelling or local name
    /// - `city_id` - Identifier of the referenced city record
    ///
    /// # Returns
    /// - `Ok(CityAliasModel)` - The created or existing alias record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_alias(
        &self,
        alias: &str,
        city_id: i32,
    ) -> Result<CityAliasModel, TestError> {
        if let Some(existing_alias) = entity::prelude::CityAlias::find()
            .filter(entity::city_alias::Column::Alias.eq(alias))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_alias);
        }

        Ok(
            entity::prelude::CityAlias::insert(entity::city_alias::ActiveModel {
                alias: ActiveValue::Set(alias.to_string()),
                city_id: ActiveValue::Set(city_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
