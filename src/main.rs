use ar_route_overlay::{
    api::{formatter_for, OutputFormat, OverlaySession, SessionEvent, TextFormatter},
    api::formatting::SceneFormatter,
    utils::{init_logging, ConfigurationManager},
    GeoPoint, RoutePlan,
};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Lay out a route as AR arrows, path pieces and a destination marker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Route plan JSON: { "sections": [[{"latitude":..,"longitude":..}]], "destination": {..} }
    #[arg(required_unless_present = "directions", conflicts_with = "directions")]
    route: Option<PathBuf>,

    /// Directions service response to take the route from
    #[arg(long, requires = "destination")]
    directions: Option<PathBuf>,

    /// Destination for a directions route, as LAT,LON
    #[arg(long, value_parser = parse_geo_point)]
    destination: Option<GeoPoint>,

    /// Current user location, as LAT,LON
    #[arg(long, value_parser = parse_geo_point)]
    origin: Option<GeoPoint>,

    /// Overlay configuration JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Print mapped section points in text output
    #[arg(long)]
    points: bool,
}

fn parse_geo_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{}'", s))?;
    let latitude = lat.trim().parse::<f64>().map_err(|e| format!("bad latitude '{}': {}", lat, e))?;
    let longitude = lon.trim().parse::<f64>().map_err(|e| format!("bad longitude '{}': {}", lon, e))?;
    Ok(GeoPoint::new(latitude, longitude))
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => ConfigurationManager::from_file(path)?.config().clone(),
        None => ConfigurationManager::new().config().clone(),
    };
    let mut session = OverlaySession::new(config)?;

    if let Some(origin) = cli.origin {
        session.dispatch(SessionEvent::LocationUpdated { location: origin });
    }

    let scene = match (&cli.route, &cli.directions, cli.destination) {
        (Some(path), _, _) => {
            let json = std::fs::read_to_string(path)?;
            let mut plan: RoutePlan = serde_json::from_str(&json)?;
            if let Some(destination) = cli.destination {
                plan.destination = Some(destination);
            }
            session.set_route(plan)?
        }
        (None, Some(path), Some(destination)) => {
            let json = std::fs::read_to_string(path)?;
            session.set_route_from_directions(&json, destination)?
        }
        _ => return Err("a route file or --directions with --destination is required".into()),
    };

    let output = match cli.format {
        OutputFormat::Text if cli.points => TextFormatter { include_mapped_points: true }.format(&scene)?,
        format => formatter_for(format).format(&scene)?,
    };
    Ok(output)
}

fn main() {
    init_logging();

    match run(Cli::parse()) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
