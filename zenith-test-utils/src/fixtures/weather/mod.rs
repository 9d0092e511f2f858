use crate::TestSetup;

pub mod data;

impl TestSetup {
    pub fn weather<'a>(&'a mut self) -> WeatherFixtures<'a> {
        WeatherFixtures { setup: self }
    }
}

pub struct WeatherFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
