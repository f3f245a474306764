use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, info};

use crate::{
    model::{LocationCandidate, WeatherRequest, WeatherSnapshot},
    synth::WeatherSynthesizer,
};

use super::{ProviderError, WeatherProvider};

/// Cosmetic stand-in for network latency.
const DEFAULT_LATENCY: Duration = Duration::from_millis(450);

/// In-process weather source backed by the synthesizer.
///
/// Each call reads the clock once and draws from a fresh thread-local RNG, so
/// concurrent fetches produce independent snapshots with no shared state.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    synthesizer: WeatherSynthesizer,
    latency: Duration,
}

impl SimulatedProvider {
    pub fn new(synthesizer: WeatherSynthesizer) -> Self {
        Self { synthesizer, latency: DEFAULT_LATENCY }
    }

    /// Override the simulated latency (tests want zero).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl WeatherProvider for SimulatedProvider {
    async fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, ProviderError> {
        tokio::time::sleep(self.latency).await;

        let now = Local::now().naive_local();
        let mut rng = rand::rng();
        let snapshot = self.synthesizer.snapshot(&request.location, now, &mut rng);

        info!(location = %snapshot.location.name, "simulated snapshot ready");
        Ok(snapshot)
    }

    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, ProviderError> {
        tokio::time::sleep(self.latency).await;

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let profile = self.synthesizer.profile();
        let matches: Vec<LocationCandidate> = profile
            .cities
            .iter()
            .filter(|city| {
                city.name.to_lowercase().contains(&query)
                    || city.region.to_lowercase().contains(&query)
                    || profile.country.to_lowercase().contains(&query)
            })
            .map(|city| LocationCandidate {
                id: city.id,
                name: city.name.to_string(),
                region: city.region.to_string(),
                country: profile.country.to_string(),
                lat: city.lat,
                lon: city.lon,
            })
            .collect();

        debug!(%query, hits = matches.len(), "location search");
        Ok(matches)
    }
}
