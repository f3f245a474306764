//! Core library for the `harmattan` weather dashboard.
//!
//! This crate defines:
//! - Configuration handling and climate profiles
//! - The synthetic weather generator and display-window selection
//! - Condition-to-icon classification
//! - Abstraction over weather data providers, with a simulated default
//!
//! It is used by `harmattan-cli`, but can also be reused by other binaries or services.

pub mod climate;
pub mod config;
pub mod icon;
pub mod model;
pub mod provider;
pub mod synth;
pub mod window;

pub use climate::{ClimateProfile, ProfileId};
pub use config::Config;
pub use icon::IconKind;
pub use model::{WeatherRequest, WeatherSnapshot};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use synth::{WeatherSynthesizer, is_night};
pub use window::{daily_window, hourly_window};
