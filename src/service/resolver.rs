use sea_orm::{DatabaseConnection, DbErr};

use crate::data::catalog::{
    alias::CityAliasRepository, city::CityRepository, country::CountryRepository,
};

/// A canonical city together with its owning country, as produced by
/// [`ResolverService::resolve_city`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCity {
    /// The canonical city record the identifier resolved to.
    pub city: entity::city::Model,
    /// The active country owning the city.
    pub country: entity::country::Model,
}

pub struct ResolverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResolverService<'a> {
    /// Creates a new instance of [`ResolverService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a free-text city identifier to a canonical city.
    ///
    /// The identifier is trimmed and case-folded, then matched in a fixed
    /// order: the canonical city name first, the alias table second. The
    /// canonical name always wins on a tie. Either path only yields a city
    /// whose own `active` flag and owning country's `active` flag are both
    /// set. Matching is exact after normalization; there is no partial or
    /// fuzzy matching.
    ///
    /// `Ok(None)` covers every non-match, including identifiers that are
    /// empty after trimming.
    pub async fn resolve_city(&self, identifier: &str) -> Result<Option<ResolvedCity>, DbErr> {
        let normalized = normalize(identifier);
        if normalized.is_empty() {
            return Ok(None);
        }

        let city_repo = CityRepository::new(self.db);

        if let Some((city, country)) = city_repo.find_active_by_name(&normalized).await? {
            return Ok(Some(ResolvedCity { city, country }));
        }

        let alias_repo = CityAliasRepository::new(self.db);

        if let Some(alias) = alias_repo.find_by_alias(&normalized).await? {
            if let Some((city, country)) = city_repo.find_active_by_id(alias.city_id).await? {
                tracing::debug!(alias = %alias.alias, city = %city.name, "resolved city via alias");

                return Ok(Some(ResolvedCity { city, country }));
            }
        }

        Ok(None)
    }

    /// Resolves a country code to an active country.
    ///
    /// The code is trimmed and case-folded, then matched exactly against
    /// `iso_code`. `Ok(None)` covers unknown codes, inactive countries, and
    /// codes that are empty after trimming.
    pub async fn resolve_country(
        &self,
        code: &str,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        let normalized = normalize(code);
        if normalized.is_empty() {
            return Ok(None);
        }

        let country_repo = CountryRepository::new(self.db);

        country_repo.find_active_by_iso_code(&normalized).await
    }
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}
