use roundtrip::config::Config;
use roundtrip::models::GeoPoint;
use roundtrip::services::{AllEdges, LinearNodeIndex, RoundTripGenerator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roundtrip=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;
    let start = GeoPoint::new(config.start_lat, config.start_lon)?;

    tracing::info!(
        "Building {}x{} street grid around {}, {}m spacing",
        config.grid_size,
        config.grid_size,
        start,
        config.grid_spacing_m
    );
    let index = LinearNodeIndex::grid(
        start,
        config.grid_size,
        config.grid_spacing_m,
        config.search_radius_m,
    );

    let generator = RoundTripGenerator::new(&index);
    let waypoints = generator.generate(start, &AllEdges, &config.round_trip)?;

    tracing::info!(
        "Round trip through nodes {:?}, {} as the crow flies",
        waypoints.node_ids(),
        waypoints.straight_line_distance()
    );

    // GeoJSON goes to stdout, logs to stderr
    println!(
        "{}",
        serde_json::to_string_pretty(&waypoints.to_geojson_feature())?
    );

    Ok(())
}
