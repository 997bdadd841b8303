//! Web layer for the fuel route optimizer.
//!
//! Provides the REST endpoints for optimizing trips and inspecting the
//! station dataset.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
