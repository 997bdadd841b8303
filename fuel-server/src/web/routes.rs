//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::LocationQuery;
use crate::mapquest::MapquestError;
use crate::planner::TripPlan;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/route/optimize", post(optimize_route))
        .route("/api/stations/stats", get(station_stats))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Optimize a route with fuel stops.
///
/// Geocodes and routes the trip with a single provider call (cached), then
/// runs the fuel stop planner over the returned polyline.
async fn optimize_route(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRouteRequest>,
) -> Result<Json<OptimizeRouteResponse>, AppError> {
    let start = LocationQuery::parse(&req.start).map_err(|e| AppError::BadRequest {
        message: format!("start: {e}"),
    })?;

    let end = LocationQuery::parse(&req.end).map_err(|e| AppError::BadRequest {
        message: format!("end: {e}"),
    })?;

    if start.same_place(&end) {
        return Err(AppError::BadRequest {
            message: "start and end locations must be different".to_string(),
        });
    }

    info!(start = %start, end = %end, "optimizing route");

    let route = state.mapquest.route(&start, &end).await.map_err(AppError::from)?;

    let plan = TripPlan::build(route, &state.stations, &state.config);

    info!(
        stops = plan.stops.len(),
        total_cost = plan.total_fuel_cost,
        "route optimized"
    );

    Ok(Json(OptimizeRouteResponse::from_plan(&plan)))
}

/// Statistics about the loaded fuel station dataset.
async fn station_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.stations.stats();
    Json(StatsResponse::from_stats(&stats))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<MapquestError> for AppError {
    fn from(e: MapquestError) -> Self {
        match e {
            // The provider rejected the trip itself (unroutable or
            // un-geocodable locations): the client sent a bad trip.
            MapquestError::RouteFailed { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            // Everything else is on us or the provider.
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
