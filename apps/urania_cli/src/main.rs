mod render;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use urania::chart::{BirthInput, NatalChartService, ServiceConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Human-readable tables.
    Text,
    /// Pretty-printed chart JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a natal chart")]
struct Args {
    /// Birth date, `DD.MM.YYYY` or `YYYY-MM-DD`.
    #[arg(long)]
    date: String,

    /// Birth time `HH:MM`, read as UTC.
    #[arg(long)]
    time: String,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// House system name or one-letter code (default from config).
    #[arg(long)]
    house_system: Option<String>,

    /// Config file (default: configs/urania.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = urania_config::load_settings(args.config.as_deref())?;
    if let Some(source) = &settings.source {
        log::debug!("Loaded settings from {}", source.display());
    }

    let service = NatalChartService::new(ServiceConfig {
        ephemeris_path: settings.ephemeris.path.clone(),
        prefer_real: settings.ephemeris.prefer_real,
        per_body_fallback: settings.ephemeris.per_body_fallback,
    });
    let mode = service.init().await;
    log::info!("Ephemeris ready ({})", mode);

    let house_system = args
        .house_system
        .unwrap_or_else(|| settings.chart.default_house_system.clone());
    let input = BirthInput::new(args.date, args.time, args.lat, args.lon, house_system);

    let chart = service
        .calculate_natal_chart(&input)
        .with_context(|| format!("lat {} / lon {}", input.latitude, input.longitude))?;

    match args.format {
        Format::Text => print!("{}", render::render_text(&chart)?),
        Format::Json => println!(
            "{}",
            chart.to_json_pretty().context("Failed to serialize chart")?
        ),
    }
    Ok(())
}
