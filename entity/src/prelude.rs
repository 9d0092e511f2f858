pub use super::app_config::Entity as AppConfig;
pub use super::city::Entity as City;
pub use super::city_alias::Entity as CityAlias;
pub use super::country::Entity as Country;
pub use super::weather_snapshot::Entity as WeatherSnapshot;
