use crate::{
    Config,
    climate::ClimateProfile,
    model::{LocationCandidate, WeatherRequest, WeatherSnapshot},
    provider::simulated::SimulatedProvider,
    synth::WeatherSynthesizer,
};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod simulated;

/// The single failure mode of the weather surface: the upstream source
/// produced nothing usable. Always recoverable; callers retry by calling
/// again. An empty search result list is NOT an error.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("weather data is currently unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ProviderError {
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable { reason: reason.into() }
    }
}

/// A source of weather snapshots and location search results.
///
/// `fetch_weather` either yields a fully populated, internally consistent
/// snapshot or fails; partial snapshots do not exist.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, ProviderError>;

    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, ProviderError>;
}

/// Construct the provider described by config. Currently always the
/// simulated source; a networked provider would slot in behind the same
/// trait.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let profile = ClimateProfile::from_id(config.profile_id()?);
    let synthesizer = WeatherSynthesizer::new(profile).with_days(config.forecast_days());

    Ok(Box::new(SimulatedProvider::new(synthesizer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_is_descriptive() {
        let err = ProviderError::unavailable("generator offline");
        assert!(err.to_string().contains("currently unavailable"));
        assert!(err.to_string().contains("generator offline"));
    }

    #[test]
    fn provider_from_default_config_succeeds() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn provider_from_config_rejects_bad_profile() {
        let cfg = Config { profile: Some("lunar".into()), ..Config::default() };
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Unknown climate profile"));
    }
}
