//! Command-line front end for the `utmzone` library.

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use utmzone::{Error, Zone};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert latitude/longitude to UTM
    ToUtm {
        /// Latitude in decimal degrees (-90 to 90)
        #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Force the point into this zone (e.g. "1N") instead of its standard zone
        #[arg(long, value_parser = parse_zone, env = "UTMZONE_ZONE")]
        zone: Option<Zone>,
    },
    /// Convert UTM easting/northing to latitude/longitude
    ToLatlon {
        /// Easting in meters
        #[arg(long, allow_hyphen_values = true)]
        easting: f64,
        /// Northing in meters
        #[arg(long, allow_hyphen_values = true)]
        northing: f64,
        /// Zone the coordinates belong to (e.g. "33T")
        #[arg(long, value_parser = parse_zone, required_unless_present = "srid", conflicts_with = "srid")]
        zone: Option<Zone>,
        /// EPSG code of the zone (e.g. 32633)
        #[arg(long)]
        srid: Option<i32>,
    },
    /// Show the standard zone of a latitude/longitude
    Zone {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Show the zone for an EPSG code
    Srid {
        srid: i32,
    },
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    let lat: f64 = s.parse().map_err(|e| format!("invalid latitude {s:?}: {e}"))?;
    if (-90.0..=90.0).contains(&lat) {
        Ok(lat)
    } else {
        Err(format!("latitude {lat} outside of [-90, 90]"))
    }
}

fn parse_zone(s: &str) -> Result<Zone, String> {
    Zone::parse_str(s).map_err(|e| e.to_string())
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::ToUtm { lat, lon, zone } => {
            let zone = zone.unwrap_or_else(|| Zone::from_latlon(lat, lon));
            let utm = zone.to_utm(lat, lon);
            println!("zone:     {zone}");
            println!("easting:  {:.3}", utm.easting());
            println!("northing: {:.3}", utm.northing());
        }
        Command::ToLatlon { easting, northing, zone, srid } => {
            let zone = match zone {
                Some(zone) => zone,
                None => Zone::from_srid(srid.unwrap_or_default())?,
            };
            let coord = zone.to_latlon(easting, northing);
            println!("latitude:  {:.6}", coord.latitude());
            println!("longitude: {:.6}", coord.longitude());
        }
        Command::Zone { lat, lon } => {
            let zone = Zone::from_latlon(lat, lon);
            println!("{zone} EPSG:{}", zone.srid());
        }
        Command::Srid { srid } => {
            let zone = Zone::from_srid(srid)?;
            println!("{zone}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
