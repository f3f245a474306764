use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{climate::ProfileId, synth::DEFAULT_FORECAST_DAYS};

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Location used when a query is empty, e.g. "Accra". Unset means "use
    /// the active profile's default city".
    pub default_location: Option<String>,

    /// Climate profile id, e.g. "tropical" or "temperate".
    pub profile: Option<String>,

    /// How many forecast days to synthesize.
    pub forecast_days: Option<usize>,
}

impl Config {
    /// Return the configured profile as a strongly-typed ProfileId. Tropical
    /// when unset.
    pub fn profile_id(&self) -> Result<ProfileId> {
        match self.profile.as_deref() {
            Some(s) => ProfileId::try_from(s),
            None => Ok(ProfileId::Tropical),
        }
    }

    /// Configured forecast length, clamped to a sensible 1..=10 days.
    pub fn forecast_days(&self) -> usize {
        self.forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS).clamp(1, 10)
    }

    /// Configured default location, or empty (profile default applies).
    pub fn default_location(&self) -> &str {
        self.default_location.as_deref().unwrap_or("")
    }

    pub fn set_profile(&mut self, id: ProfileId) {
        self.profile = Some(id.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "harmattan", "harmattan-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_defaults_to_tropical() {
        let cfg = Config::default();
        assert_eq!(cfg.profile_id().expect("default must parse"), ProfileId::Tropical);
        assert_eq!(cfg.forecast_days(), DEFAULT_FORECAST_DAYS);
        assert_eq!(cfg.default_location(), "");
    }

    #[test]
    fn profile_id_errors_on_unknown_name() {
        let cfg = Config { profile: Some("arctic".into()), ..Config::default() };
        let err = cfg.profile_id().unwrap_err();
        assert!(err.to_string().contains("Unknown climate profile"));
    }

    #[test]
    fn set_profile_round_trips() {
        let mut cfg = Config::default();
        cfg.set_profile(ProfileId::Temperate);
        assert_eq!(cfg.profile_id().expect("profile must parse"), ProfileId::Temperate);
    }

    #[test]
    fn forecast_days_are_clamped() {
        let mut cfg = Config::default();

        cfg.forecast_days = Some(0);
        assert_eq!(cfg.forecast_days(), 1);

        cfg.forecast_days = Some(3);
        assert_eq!(cfg.forecast_days(), 3);

        cfg.forecast_days = Some(100);
        assert_eq!(cfg.forecast_days(), 10);
    }

    #[test]
    fn config_serializes_to_toml_and_back() {
        let cfg = Config {
            default_location: Some("Kumasi".into()),
            profile: Some("tropical".into()),
            forecast_days: Some(5),
        };

        let toml = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&toml).expect("config must parse back");

        assert_eq!(parsed.default_location.as_deref(), Some("Kumasi"));
        assert_eq!(parsed.profile_id().expect("profile must parse"), ProfileId::Tropical);
        assert_eq!(parsed.forecast_days(), 5);
    }
}
