//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedMapquestClient;
use crate::planner::PlannerConfig;
use crate::stations::StationStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached MapQuest API client
    pub mapquest: Arc<CachedMapquestClient>,

    /// The in-memory fuel station dataset
    pub stations: Arc<StationStore>,

    /// Fuel stop planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        mapquest: CachedMapquestClient,
        stations: StationStore,
        config: PlannerConfig,
    ) -> Self {
        Self {
            mapquest: Arc::new(mapquest),
            stations: Arc::new(stations),
            config: Arc::new(config),
        }
    }
}
