use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use harmattan_core::{
    ClimateProfile, Config, IconKind, ProfileId, WeatherRequest, WeatherSnapshot,
    daily_window, hourly_window, is_night, provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "harmattan", version, about = "Simulated weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard for a location.
    Show {
        /// Location name; falls back to the configured default when omitted.
        location: Option<String>,

        /// Print the raw snapshot as JSON instead of the dashboard.
        #[arg(long)]
        json: bool,
    },

    /// Search known locations by partial name or region.
    Search {
        /// Case-insensitive fragment, e.g. "kum" or "western".
        query: String,
    },

    /// Interactively set the default location, climate profile and forecast length.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { location, json } => show(location, json).await,
            Command::Search { query } => search(&query).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(location: Option<String>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let query = location.unwrap_or_else(|| config.default_location().to_string());
    let request = WeatherRequest { location: query };

    // A missing snapshot is recoverable by design: report it and suggest a retry.
    let snapshot = provider.fetch_weather(&request).await.map_err(|err| {
        anyhow::anyhow!("{err}\nHint: the weather source returned nothing, try again in a moment.")
    })?;

    if json {
        let body =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{body}");
        return Ok(());
    }

    render_dashboard(&snapshot);
    Ok(())
}

fn render_dashboard(snapshot: &WeatherSnapshot) {
    let now = Local::now();
    let night = is_night(now.hour());

    let location = &snapshot.location;
    let current = &snapshot.current;
    let icon = IconKind::from_text(&current.condition.text, night);

    println!("{}, {} ({})", location.name, location.region, location.country);
    if night {
        println!("as of {} (night)", location.localtime);
    } else {
        println!("as of {}", location.localtime);
    }
    println!();
    println!(
        "  {} {}  {:.0}°C / {:.0}°F  (feels like {:.0}°C)",
        icon.glyph(),
        current.condition.text,
        current.temp_c,
        current.temp_f,
        current.feelslike_c
    );
    println!(
        "  humidity {}%   wind {:.0} km/h {}   UV {}",
        current.humidity, current.wind_kph, current.wind_dir, current.uv
    );

    println!();
    println!("Next hours");
    for slot in hourly_window(&snapshot.forecast, now.hour()) {
        let slot_night = is_night(slot.time.hour());
        let icon = IconKind::from_code(slot.condition.code, slot_night);
        println!("  {:>5}  {}  {:.0}°", hour_label(slot.time.hour()), icon.glyph(), slot.temp_c);
    }

    println!();
    println!("Upcoming days");
    for entry in daily_window(&snapshot.forecast) {
        let icon = IconKind::from_text(&entry.day.condition.text, false);
        println!(
            "  {:<9}  {}  {:.0}° / {:.0}°  {}",
            entry.label,
            icon.glyph(),
            entry.day.maxtemp_c,
            entry.day.mintemp_c,
            entry.day.condition.text
        );
    }
}

/// 12-hour clock label: 0 -> "12 AM", 13 -> "1 PM".
fn hour_label(hour: u32) -> String {
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {meridiem}")
}

async fn search(query: &str) -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let candidates = provider
        .search_locations(query)
        .await
        .map_err(|err| anyhow::anyhow!("{err}\nHint: try the search again in a moment."))?;

    if candidates.is_empty() {
        println!("No locations match '{query}'.");
        return Ok(());
    }

    for candidate in candidates {
        println!(
            "{:<14} {}, {}  ({:.4}, {:.4})",
            candidate.name, candidate.region, candidate.country, candidate.lat, candidate.lon
        );
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let profiles: Vec<&str> = ProfileId::all().iter().map(|id| id.as_str()).collect();
    let chosen = Select::new("Climate profile:", profiles)
        .prompt()
        .context("Profile selection aborted")?;
    let profile_id = ProfileId::try_from(chosen)?;

    let default_city = ClimateProfile::from_id(profile_id).default_city.name;
    let location = Text::new("Default location:")
        .with_placeholder(default_city)
        .prompt()
        .context("Location input aborted")?;

    let days = Text::new("Forecast days (1-10):")
        .with_placeholder("5")
        .prompt()
        .context("Forecast length input aborted")?;

    config.set_profile(profile_id);
    if !location.trim().is_empty() {
        config.default_location = Some(location.trim().to_string());
    }
    if !days.trim().is_empty() {
        let parsed: usize = days.trim().parse().context("Forecast days must be a number")?;
        config.forecast_days = Some(parsed);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
