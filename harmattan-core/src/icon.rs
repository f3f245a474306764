//! Condition-to-icon classification.
//!
//! One closed category set behind two entry points: substring matching for
//! condition text and range matching for WeatherAPI-style codes. Keeping both
//! on the same enumeration stops the two call sites from drifting apart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    ClearDay,
    ClearNight,
    PartlyCloudy,
    Cloudy,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
    Default,
}

impl IconKind {
    /// Classify by condition text, case-insensitively. Rule order is
    /// significant: the combined cloud + part check must run before the plain
    /// cloud rule.
    pub fn from_text(text: &str, night: bool) -> Self {
        let lower = text.to_lowercase();

        if lower.contains("sun") || lower.contains("clear") {
            if night { Self::ClearNight } else { Self::ClearDay }
        } else if lower.contains("cloud") && lower.contains("part") {
            Self::PartlyCloudy
        } else if lower.contains("cloud") {
            Self::Cloudy
        } else if lower.contains("rain") || lower.contains("drizzle") {
            Self::Rain
        } else if lower.contains("thunder") || lower.contains("storm") {
            Self::Thunderstorm
        } else if lower.contains("snow") {
            Self::Snow
        } else if lower.contains("mist") || lower.contains("fog") {
            Self::Fog
        } else {
            Self::Default
        }
    }

    /// Classify by WeatherAPI-style condition code.
    pub fn from_code(code: u16, night: bool) -> Self {
        match code {
            1000 => {
                if night {
                    Self::ClearNight
                } else {
                    Self::ClearDay
                }
            }
            1003 => Self::PartlyCloudy,
            1006..=1009 => Self::Cloudy,
            1030 | 1135 | 1147 => Self::Fog,
            1063..=1072 => Self::Rain,
            1087..=1117 => Self::Thunderstorm,
            1150..=1207 => Self::Rain,
            1210..=1237 => Self::Snow,
            1240..=1252 => Self::Rain,
            1255..=1282 => Self::Snow,
            _ => Self::Default,
        }
    }

    /// Terminal glyph for the category.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::ClearDay => "☀️",
            Self::ClearNight => "🌙",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::Rain => "🌧️",
            Self::Thunderstorm => "⛈️",
            Self::Snow => "❄️",
            Self::Fog => "🌫️",
            Self::Default => "🌤️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::condition_code;

    #[test]
    fn partly_cloudy_outranks_rain() {
        // The cloud + part rule fires before the rain rule.
        assert_eq!(IconKind::from_text("Partly cloudy with showers", false), IconKind::PartlyCloudy);
    }

    #[test]
    fn text_rules_match_their_families() {
        assert_eq!(IconKind::from_text("Thunderstorms", false), IconKind::Thunderstorm);
        assert_eq!(IconKind::from_text("Thundery outbreaks", false), IconKind::Thunderstorm);
        assert_eq!(IconKind::from_text("Light rain", false), IconKind::Rain);
        assert_eq!(IconKind::from_text("Patchy drizzle", false), IconKind::Rain);
        assert_eq!(IconKind::from_text("Light snow", false), IconKind::Snow);
        assert_eq!(IconKind::from_text("Mist", false), IconKind::Fog);
        assert_eq!(IconKind::from_text("Cloudy", false), IconKind::Cloudy);
        assert_eq!(IconKind::from_text("CLEAR", false), IconKind::ClearDay);
    }

    #[test]
    fn unmatched_text_is_default() {
        assert_eq!(IconKind::from_text("Hazy", false), IconKind::Default);
        assert_eq!(IconKind::from_text("Windy", true), IconKind::Default);
    }

    #[test]
    fn clear_splits_on_night() {
        assert_eq!(IconKind::from_text("Clear", true), IconKind::ClearNight);
        assert_eq!(IconKind::from_text("Sunny", false), IconKind::ClearDay);
        assert_eq!(IconKind::from_code(1000, true), IconKind::ClearNight);
        assert_eq!(IconKind::from_code(1000, false), IconKind::ClearDay);
    }

    #[test]
    fn code_ranges_match_their_families() {
        assert_eq!(IconKind::from_code(1003, false), IconKind::PartlyCloudy);
        assert_eq!(IconKind::from_code(1006, false), IconKind::Cloudy);
        assert_eq!(IconKind::from_code(1063, false), IconKind::Rain);
        assert_eq!(IconKind::from_code(1087, false), IconKind::Thunderstorm);
        assert_eq!(IconKind::from_code(1135, false), IconKind::Fog);
        assert_eq!(IconKind::from_code(1183, false), IconKind::Rain);
        assert_eq!(IconKind::from_code(1213, false), IconKind::Snow);
        // Heavy rain sits in the 1240-1252 band.
        assert_eq!(IconKind::from_code(1246, false), IconKind::Rain);
        assert_eq!(IconKind::from_code(1279, false), IconKind::Snow);
        assert_eq!(IconKind::from_code(9999, false), IconKind::Default);
    }

    #[test]
    fn text_and_code_classifiers_agree_on_generated_conditions() {
        for text in [
            "Sunny",
            "Clear",
            "Partly cloudy",
            "Cloudy",
            "Mist",
            "Patchy rain possible",
            "Light rain",
            "Moderate rain",
            "Heavy rain",
            "Thunderstorms",
            "Light snow",
        ] {
            for night in [false, true] {
                assert_eq!(
                    IconKind::from_text(text, night),
                    IconKind::from_code(condition_code(text), night),
                    "classifiers disagree on {text:?} (night={night})"
                );
            }
        }
    }
}
