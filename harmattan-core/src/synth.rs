//! The synthetic weather generator.
//!
//! Produces a complete [`WeatherSnapshot`] from a location query, an explicit
//! wall-clock time and an injected random source. Passing the clock and the
//! RNG in (instead of reading globals) keeps every generated value assertable
//! under a fixed seed and a pinned timestamp.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::RngExt;
use tracing::debug;

use crate::{
    climate::{City, ClimateProfile},
    model::{
        COMPASS_POINTS, Condition, CurrentConditions, Forecast, ForecastDay, HourSlot, KPH_PER_MPH,
        Location, WeatherSnapshot, celsius_to_fahrenheit,
    },
};

/// Number of forecast days produced when nothing else is configured.
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// Night runs from strictly after 18:00 to strictly before 06:00, so both
/// 18:xx and 06:xx count as day.
pub fn is_night(hour: u32) -> bool {
    hour > 18 || hour < 6
}

fn persists_at_night(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("rain") || lower.contains("thunder")
}

/// Generator for internally consistent simulated weather data.
#[derive(Debug, Clone)]
pub struct WeatherSynthesizer {
    profile: ClimateProfile,
    days: usize,
}

impl WeatherSynthesizer {
    pub fn new(profile: ClimateProfile) -> Self {
        Self { profile, days: DEFAULT_FORECAST_DAYS }
    }

    /// Override the forecast length (at least one day).
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days.max(1);
        self
    }

    pub fn profile(&self) -> &ClimateProfile {
        &self.profile
    }

    /// Produce a complete snapshot for `query` as of `now`.
    ///
    /// Never fails: an empty query resolves to the profile's default city and
    /// an unknown name keeps the given text with fallback region/country.
    pub fn snapshot<R: RngExt>(
        &self,
        query: &str,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> WeatherSnapshot {
        let location = self.resolve_location(query, now);
        let month = now.month();

        // One base draw anchors every temperature in this snapshot.
        let base_temp = rng.random_range(self.profile.base_temp_c.0..self.profile.base_temp_c.1);
        debug!(name = %location.name, month, base_temp, "synthesizing snapshot");

        let mut days = Vec::with_capacity(self.days);
        for offset in 0..self.days {
            let date = now.date() + Days::new(offset as u64);
            days.push(self.forecast_day(date, base_temp, month, rng));
        }
        let forecast = Forecast { days };

        let current = self.current_conditions(base_temp, forecast.days[0].condition.clone(), rng);

        WeatherSnapshot { location, current, forecast }
    }

    fn forecast_day<R: RngExt>(
        &self,
        date: NaiveDate,
        base_temp: f64,
        month: u32,
        rng: &mut R,
    ) -> ForecastDay {
        let condition = self.representative(month, rng);

        // Daily max/min are independent draws around the base, not aggregates
        // of the hourly curve.
        let max_c = base_temp + rng.random_range(2.0..5.0);
        let min_c = base_temp - rng.random_range(1.0..4.0);

        let hours = (0..24)
            .map(|hour| self.hour_slot(date, hour, base_temp, &condition, rng))
            .collect();

        ForecastDay {
            date,
            maxtemp_c: max_c,
            maxtemp_f: celsius_to_fahrenheit(max_c),
            mintemp_c: min_c,
            mintemp_f: celsius_to_fahrenheit(min_c),
            condition,
            hours,
        }
    }

    fn hour_slot<R: RngExt>(
        &self,
        date: NaiveDate,
        hour: u32,
        base_temp: f64,
        day_condition: &Condition,
        rng: &mut R,
    ) -> HourSlot {
        let temp_c = self.hour_temp(hour, base_temp, rng);
        HourSlot {
            time: date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour)),
            temp_c,
            temp_f: celsius_to_fahrenheit(temp_c),
            condition: self.hour_condition(hour, day_condition),
        }
    }

    // Banded day curve: midday runs above the base, night below, shoulders at
    // or slightly above. The offset signs are disjoint, so midday always
    // outruns night without clamping.
    fn hour_temp<R: RngExt>(&self, hour: u32, base_temp: f64, rng: &mut R) -> f64 {
        if (10..=16).contains(&hour) {
            base_temp + rng.random_range(2.0..5.0)
        } else if hour >= 20 || hour <= 6 {
            base_temp - rng.random_range(1.0..4.0)
        } else {
            base_temp + rng.random_range(0.0..2.0)
        }
    }

    // Daylight hours carry the day's condition; after dark the sky clears
    // unless rain or thunder persists.
    fn hour_condition(&self, hour: u32, day_condition: &Condition) -> Condition {
        if !is_night(hour) || persists_at_night(&day_condition.text) {
            day_condition.clone()
        } else {
            Condition::named(self.profile.night_fallback)
        }
    }

    fn representative<R: RngExt>(&self, month: u32, rng: &mut R) -> Condition {
        let pool = self.profile.pool_for_month(month);
        Condition::named(pool[rng.random_range(0..pool.len())])
    }

    fn current_conditions<R: RngExt>(
        &self,
        base_temp: f64,
        condition: Condition,
        rng: &mut R,
    ) -> CurrentConditions {
        let humidity = rng.random_range(self.profile.humidity_pct.0..=self.profile.humidity_pct.1);
        let uv = rng.random_range(self.profile.uv_index.0..=self.profile.uv_index.1);

        // Wind is drawn once in kph; mph is derived so the two never drift.
        let wind_kph = rng.random_range(self.profile.wind_kph.0..self.profile.wind_kph.1);
        let wind_dir = COMPASS_POINTS[rng.random_range(0..COMPASS_POINTS.len())];

        // Humid climates read hotter than the thermometer says.
        let feels_like = base_temp + rng.random_range(1.0..3.0);

        CurrentConditions {
            temp_c: base_temp,
            temp_f: celsius_to_fahrenheit(base_temp),
            condition,
            wind_mph: wind_kph / KPH_PER_MPH,
            wind_kph,
            wind_dir: wind_dir.to_string(),
            humidity,
            feelslike_c: feels_like,
            feelslike_f: celsius_to_fahrenheit(feels_like),
            uv,
        }
    }

    fn resolve_location(&self, query: &str, now: NaiveDateTime) -> Location {
        let localtime = now.format("%Y-%m-%d %H:%M").to_string();
        let query = query.trim();

        if query.is_empty() {
            return self.city_location(self.profile.default_city, localtime);
        }

        match self.profile.find_city(query) {
            Some(city) => self.city_location(*city, localtime),
            None => {
                debug!(query, "unknown location, keeping the name with fallback region");
                let fallback = &self.profile.default_city;
                Location {
                    name: query.to_string(),
                    region: fallback.region.to_string(),
                    country: self.profile.country.to_string(),
                    lat: fallback.lat,
                    lon: fallback.lon,
                    localtime,
                }
            }
        }
    }

    fn city_location(&self, city: City, localtime: String) -> Location {
        Location {
            name: city.name.to_string(),
            region: city.region.to_string(),
            country: self.profile.country.to_string(),
            lat: city.lat,
            lon: city.lon,
            localtime,
        }
    }
}
