//! Fuel station dataset: CSV import, cleaning, and in-memory store.
//!
//! The dataset is loaded once at startup and is immutable afterwards;
//! refreshing prices means restarting with a new CSV.

mod error;
mod import;
mod store;

pub use error::ImportError;
pub use import::{ImportReport, RawStationRow, load_stations, load_stations_from_reader, read_rows};
pub use store::{StationStats, StationStore};
