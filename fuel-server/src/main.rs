use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fuel_server::cache::{CacheConfig, CachedMapquestClient};
use fuel_server::mapquest::{MapquestClient, MapquestConfig};
use fuel_server::planner::PlannerConfig;
use fuel_server::stations::{StationStore, load_stations};
use fuel_server::web::{AppState, create_router};

/// Default path of the geocoded station dataset.
const DEFAULT_STATIONS_CSV: &str = "data/fuel-prices.csv";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get credentials from environment
    let api_key = std::env::var("MAPQUEST_API_KEY").unwrap_or_else(|_| {
        error!("MAPQUEST_API_KEY not set. Get a free key at https://developer.mapquest.com/");
        String::new()
    });

    // Create MapQuest client
    let mapquest_config = MapquestConfig::new(api_key);
    let mapquest_client =
        MapquestClient::new(mapquest_config).expect("Failed to create MapQuest client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_mapquest = CachedMapquestClient::new(mapquest_client, &cache_config);

    // Load the station dataset (fail fast if unreadable)
    let csv_path =
        std::env::var("FUEL_STATIONS_CSV").unwrap_or_else(|_| DEFAULT_STATIONS_CSV.to_string());
    info!(path = %csv_path, "loading fuel stations");
    let (stations, report) =
        load_stations(&csv_path).expect("Failed to load fuel station dataset");
    info!(%report, "fuel stations loaded");
    let store = StationStore::new(stations);

    // Create planner config (500-mile tank, 10 mpg)
    let planner_config = PlannerConfig::default();

    // Build app state
    let state = AppState::new(cached_mapquest, store, planner_config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    println!("Fuel Route Optimizer listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health              - Health check");
    println!("  POST /api/route/optimize  - Optimize a route with fuel stops");
    println!("  GET  /api/stations/stats  - Station dataset statistics");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
