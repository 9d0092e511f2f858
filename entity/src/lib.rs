pub mod prelude;

pub mod app_config;
pub mod city;
pub mod city_alias;
pub mod country;
pub mod weather_snapshot;
