mod get_weather;
mod get_weather_by_country;
