use crate::{Config, error::LookupError, model::WeatherReading};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of current weather observations.
///
/// One call issues one outbound request and normalizes the answer into a
/// [`WeatherReading`]. The returned future carries no retry or cancellation
/// machinery of its own: callers may await it, race it against another
/// lookup, or drop it, and racing lookups settle in completion order.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetches current weather for `city` in metric units.
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, LookupError>;
}

/// Constructs the provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
             Hint: run `skycast configure` and enter your API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::ApiKeyEnv;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let _env = ApiKeyEnv::unset();
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn provider_from_config_works_when_key_is_set() {
        let cfg = Config { api_key: Some("KEY".to_string()), ..Config::default() };
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn provider_from_config_accepts_the_env_key() {
        let _env = ApiKeyEnv::set("ENV_KEY");
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }
}
