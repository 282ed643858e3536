use chrono::{DateTime, Utc};
use clap::Parser;
use navagraha::ephemeris::parse_birth_input;
use navagraha::{generate_chart_report, ChartRequest, SwissEphemerisAdapter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sidereal birth chart report as JSON")]
struct Args {
    #[arg(help = "Birth date, YYYY-MM-DD")]
    date: String,

    #[arg(help = "Local birth time, HH:MM or HH:MM:SS")]
    time: String,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    #[arg(long, help = "Reference instant for transits and the current dasha (RFC 3339); defaults to now")]
    now: Option<DateTime<Utc>>,

    #[arg(long, help = "Config file with an [engine] table")]
    config: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = navagraha_config::load_engine_settings(args.config.as_deref())?;
    let birth = parse_birth_input(&args.date, &args.time, args.lat, args.lon)?;
    let adapter = SwissEphemerisAdapter::new(&settings)?;

    let request = ChartRequest {
        birth,
        now: args.now.unwrap_or_else(Utc::now),
    };
    log::info!("Generating chart for {} {}", args.date, args.time);
    let report = generate_chart_report(&adapter, &settings, &request)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
