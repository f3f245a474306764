use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Kilometres-per-hour per mile-per-hour.
pub const KPH_PER_MPH: f64 = 1.60934;

/// The eight compass points used for wind direction.
pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Convert a Celsius temperature to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    /// Free-text location query; empty means "use the configured default".
    pub location: String,
}

/// A resolved place, created fresh for each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    /// Preformatted local-time display string, fixed at synthesis time.
    pub localtime: String,
}

/// Weather condition: human-readable text plus its WeatherAPI-style code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub code: u16,
}

impl Condition {
    /// Build a condition from text, resolving the code through the fixed
    /// text-to-code table.
    pub fn named(text: &str) -> Self {
        Self { text: text.to_string(), code: condition_code(text) }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fixed condition-text to condition-code table, following the WeatherAPI
/// code convention. Unknown text falls back to 1000 (clear).
pub fn condition_code(text: &str) -> u16 {
    match text {
        "Sunny" | "Clear" | "Mostly sunny" | "Hot and sunny" | "Hot" => 1000,
        "Partly cloudy" => 1003,
        "Cloudy" => 1006,
        "Overcast" => 1009,
        "Mist" | "Hazy" => 1030,
        "Patchy rain possible" => 1063,
        "Thunderstorms" | "Thundery outbreaks" => 1087,
        "Light rain" => 1183,
        "Cloudy with rain" => 1186,
        "Moderate rain" => 1189,
        "Light snow" => 1213,
        "Partly cloudy with showers" => 1240,
        "Heavy rain" => 1246,
        _ => 1000,
    }
}

/// Conditions observed right now. Paired Celsius/Fahrenheit and mph/kph
/// values are consistent by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    /// One of [`COMPASS_POINTS`].
    pub wind_dir: String,
    /// Relative humidity, 0..=100 percent.
    pub humidity: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    /// UV index, non-negative.
    pub uv: u8,
}

/// One generated hour of a forecast day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourSlot {
    pub time: NaiveDateTime,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
}

/// One calendar day of the forecast: 24 hour slots plus independently drawn
/// daily aggregates and a representative condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: Condition,
    pub hours: Vec<HourSlot>,
}

/// The full generated forecast. Day 0 is today; dates ascend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
}

/// One complete, immutable weather data set for a location at a point in
/// synthesis time. A new query produces an entirely new snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

/// A location search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}
