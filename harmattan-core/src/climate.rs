//! Climate profiles: the literal ranges, season rules, condition pools and
//! gazetteer that drive the synthesizer. One profile is active per build,
//! selected through [`crate::Config`].

use std::convert::TryFrom;

/// One gazetteer entry the simulated provider can resolve and search.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub id: u32,
    pub name: &'static str,
    pub region: &'static str,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileId {
    Tropical,
    Temperate,
}

impl ProfileId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileId::Tropical => "tropical",
            ProfileId::Temperate => "temperate",
        }
    }

    pub const fn all() -> &'static [ProfileId] {
        &[ProfileId::Tropical, ProfileId::Temperate]
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProfileId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "tropical" => Ok(ProfileId::Tropical),
            "temperate" => Ok(ProfileId::Temperate),
            _ => Err(anyhow::anyhow!(
                "Unknown climate profile '{value}'. Supported profiles: tropical, temperate."
            )),
        }
    }
}

/// Literal ranges and season rules for one climate. Inclusive (lo, hi)
/// bounds for the integer draws, half-open for the float draws.
#[derive(Debug, Clone)]
pub struct ClimateProfile {
    pub id: ProfileId,
    pub country: &'static str,
    /// Base temperature draw, degrees Celsius.
    pub base_temp_c: (f64, f64),
    pub humidity_pct: (u8, u8),
    pub wind_kph: (f64, f64),
    pub uv_index: (u8, u8),
    /// Calendar months (1-indexed) in which the rainy pool applies.
    pub rainy_months: &'static [u32],
    pub dry_pool: &'static [&'static str],
    pub rainy_pool: &'static [&'static str],
    /// Condition non-rainy days fall back to after dark.
    pub night_fallback: &'static str,
    pub default_city: City,
    pub cities: &'static [City],
}

static GHANA_CITIES: [City; 10] = [
    City { id: 1, name: "Accra", region: "Greater Accra", lat: 5.6037, lon: -0.1870 },
    City { id: 2, name: "Kumasi", region: "Ashanti", lat: 6.6885, lon: -1.6244 },
    City { id: 3, name: "Tamale", region: "Northern", lat: 9.4075, lon: -0.8533 },
    City { id: 4, name: "Takoradi", region: "Western", lat: 4.8845, lon: -1.7554 },
    City { id: 5, name: "Cape Coast", region: "Central", lat: 5.1053, lon: -1.2466 },
    City { id: 6, name: "Sekondi", region: "Western", lat: 4.9349, lon: -1.7041 },
    City { id: 7, name: "Koforidua", region: "Eastern", lat: 6.0945, lon: -0.2579 },
    City { id: 8, name: "Sunyani", region: "Bono", lat: 7.3349, lon: -2.3268 },
    City { id: 9, name: "Ho", region: "Volta", lat: 6.6015, lon: 0.4713 },
    City { id: 10, name: "Techiman", region: "Bono East", lat: 7.5908, lon: -1.9427 },
];

static US_CITIES: [City; 5] = [
    City { id: 1, name: "Seattle", region: "Washington", lat: 47.6062, lon: -122.3321 },
    City { id: 2, name: "Portland", region: "Oregon", lat: 45.5152, lon: -122.6784 },
    City { id: 3, name: "San Francisco", region: "California", lat: 37.7749, lon: -122.4194 },
    City { id: 4, name: "Denver", region: "Colorado", lat: 39.7392, lon: -104.9903 },
    City { id: 5, name: "Chicago", region: "Illinois", lat: 41.8781, lon: -87.6298 },
];

impl ClimateProfile {
    /// The tropical (Ghana) profile, the default. Rainy seasons run
    /// April-June and September-October.
    pub fn tropical() -> Self {
        Self {
            id: ProfileId::Tropical,
            country: "Ghana",
            base_temp_c: (26.0, 32.0),
            humidity_pct: (65, 85),
            wind_kph: (5.0, 20.0),
            uv_index: (6, 10),
            rainy_months: &[4, 5, 6, 9, 10],
            dry_pool: &["Sunny", "Partly cloudy", "Clear", "Mostly sunny", "Hot and sunny"],
            rainy_pool: &[
                "Light rain",
                "Moderate rain",
                "Partly cloudy with showers",
                "Thunderstorms",
                "Cloudy with rain",
            ],
            night_fallback: "Clear",
            default_city: GHANA_CITIES[0],
            cities: &GHANA_CITIES,
        }
    }

    /// The generic temperate (US) profile. Wet season November-March.
    pub fn temperate() -> Self {
        Self {
            id: ProfileId::Temperate,
            country: "USA",
            base_temp_c: (8.0, 18.0),
            humidity_pct: (45, 80),
            wind_kph: (5.0, 25.0),
            uv_index: (1, 6),
            rainy_months: &[11, 12, 1, 2, 3],
            dry_pool: &["Sunny", "Clear", "Partly cloudy", "Cloudy"],
            rainy_pool: &["Light rain", "Moderate rain", "Cloudy with rain", "Mist", "Light snow"],
            night_fallback: "Clear",
            default_city: US_CITIES[0],
            cities: &US_CITIES,
        }
    }

    pub fn from_id(id: ProfileId) -> Self {
        match id {
            ProfileId::Tropical => Self::tropical(),
            ProfileId::Temperate => Self::temperate(),
        }
    }

    /// Whether the given 1-indexed calendar month falls in the rainy season.
    pub fn is_rainy_month(&self, month: u32) -> bool {
        self.rainy_months.contains(&month)
    }

    /// The condition pool in effect for the given month. The same rule feeds
    /// the representative-condition draw and every per-hour draw.
    pub fn pool_for_month(&self, month: u32) -> &'static [&'static str] {
        if self.is_rainy_month(month) { self.rainy_pool } else { self.dry_pool }
    }

    /// Case-insensitive exact-name lookup in the gazetteer.
    pub fn find_city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_id_as_str_roundtrip() {
        for id in ProfileId::all() {
            let s = id.as_str();
            let parsed = ProfileId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn unknown_profile_error() {
        let err = ProfileId::try_from("mediterranean").unwrap_err();
        assert!(err.to_string().contains("Unknown climate profile"));
    }

    #[test]
    fn profile_parse_is_case_insensitive() {
        assert_eq!(ProfileId::try_from("Tropical").unwrap(), ProfileId::Tropical);
        assert_eq!(ProfileId::try_from("TEMPERATE").unwrap(), ProfileId::Temperate);
    }

    #[test]
    fn tropical_rainy_season_is_april_june_and_september_october() {
        let profile = ClimateProfile::tropical();
        for month in [4, 5, 6, 9, 10] {
            assert!(profile.is_rainy_month(month), "month {month} should be rainy");
        }
        for month in [1, 2, 3, 7, 8, 11, 12] {
            assert!(!profile.is_rainy_month(month), "month {month} should be dry");
        }
    }

    #[test]
    fn pool_switches_with_the_season() {
        let profile = ClimateProfile::tropical();
        assert_eq!(profile.pool_for_month(5), profile.rainy_pool);
        assert_eq!(profile.pool_for_month(8), profile.dry_pool);
    }

    #[test]
    fn find_city_ignores_case() {
        let profile = ClimateProfile::tropical();
        let city = profile.find_city("kumasi").expect("Kumasi is in the gazetteer");
        assert_eq!(city.region, "Ashanti");
        assert!(profile.find_city("Zzzzz").is_none());
    }

    #[test]
    fn profiles_have_sane_literal_ranges() {
        for profile in [ClimateProfile::tropical(), ClimateProfile::temperate()] {
            assert!(profile.base_temp_c.0 < profile.base_temp_c.1);
            assert!(profile.humidity_pct.0 < profile.humidity_pct.1);
            assert!(profile.humidity_pct.1 <= 100);
            assert!(profile.wind_kph.0 < profile.wind_kph.1);
            assert!(profile.uv_index.0 < profile.uv_index.1);
            assert!(!profile.dry_pool.is_empty());
            assert!(!profile.rainy_pool.is_empty());
            assert!(!profile.cities.is_empty());
        }
    }
}
