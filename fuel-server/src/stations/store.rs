//! In-memory station dataset.

use crate::domain::{BoundingBox, FuelStation};

/// Summary statistics over the dataset, for the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationStats {
    /// Total number of stations.
    pub total: usize,

    /// Number of distinct states covered.
    pub states: usize,

    /// Cheapest price per gallon, `None` when the store is empty.
    pub cheapest_price: Option<f64>,

    /// Highest price per gallon, `None` when the store is empty.
    pub highest_price: Option<f64>,
}

/// The full station dataset, held in memory.
///
/// Built once at startup from the imported CSV and kept behind an `Arc`
/// in app state. Stations are stored sorted by retail price ascending, so
/// every query that preserves order yields cheapest-first results.
#[derive(Debug, Clone, Default)]
pub struct StationStore {
    /// Stations sorted by retail price ascending.
    stations: Vec<FuelStation>,
}

impl StationStore {
    /// Build a store from imported stations.
    pub fn new(mut stations: Vec<FuelStation>) -> Self {
        stations.sort_by(|a, b| a.retail_price.total_cmp(&b.retail_price));
        Self { stations }
    }

    /// Number of stations in the store.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations, cheapest first.
    pub fn all(&self) -> &[FuelStation] {
        &self.stations
    }

    /// Stations inside a bounding box, cheapest first.
    ///
    /// This is the coarse pre-filter; the planner does the fine distance
    /// scoring on what it returns.
    pub fn in_bounds(&self, bbox: &BoundingBox) -> Vec<&FuelStation> {
        self.stations
            .iter()
            .filter(|s| bbox.contains(s.coords()))
            .collect()
    }

    /// Dataset summary statistics.
    pub fn stats(&self) -> StationStats {
        use std::collections::HashSet;

        let states: HashSet<_> = self.stations.iter().map(|s| s.state).collect();

        // Price order makes min/max the first and last entries
        StationStats {
            total: self.stations.len(),
            states: states.len(),
            cheapest_price: self.stations.first().map(|s| s.retail_price),
            highest_price: self.stations.last().map(|s| s.retail_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StateCode;

    fn station(opis_id: u32, state: &str, price: f64, lat: f64, lon: f64) -> FuelStation {
        FuelStation {
            opis_id,
            name: format!("Station {opis_id}"),
            address: String::new(),
            city: "Town".to_string(),
            state: StateCode::parse(state).unwrap(),
            retail_price: price,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn stations_are_sorted_by_price() {
        let store = StationStore::new(vec![
            station(1, "CA", 3.50, 40.0, -100.0),
            station(2, "NV", 2.90, 40.5, -101.0),
            station(3, "UT", 3.20, 41.0, -102.0),
        ]);

        let prices: Vec<f64> = store.all().iter().map(|s| s.retail_price).collect();
        assert_eq!(prices, vec![2.90, 3.20, 3.50]);
    }

    #[test]
    fn in_bounds_filters_and_preserves_price_order() {
        let store = StationStore::new(vec![
            station(1, "CA", 3.50, 40.0, -100.0),
            station(2, "NV", 2.90, 40.5, -100.5),
            station(3, "UT", 3.20, 50.0, -120.0), // far outside
        ]);

        let bbox = BoundingBox {
            min_lat: 39.0,
            max_lat: 41.0,
            min_lon: -101.0,
            max_lon: -99.0,
        };

        let hits = store.in_bounds(&bbox);
        let ids: Vec<u32> = hits.iter().map(|s| s.opis_id).collect();
        assert_eq!(ids, vec![2, 1]); // cheapest first
    }

    #[test]
    fn stats_over_dataset() {
        let store = StationStore::new(vec![
            station(1, "CA", 3.50, 40.0, -100.0),
            station(2, "CA", 2.90, 40.5, -101.0),
            station(3, "NV", 3.20, 41.0, -102.0),
        ]);

        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.states, 2);
        assert_eq!(stats.cheapest_price, Some(2.90));
        assert_eq!(stats.highest_price, Some(3.50));
    }

    #[test]
    fn stats_of_empty_store() {
        let store = StationStore::default();

        let stats = store.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.states, 0);
        assert_eq!(stats.cheapest_price, None);
        assert_eq!(stats.highest_price, None);
        assert!(store.is_empty());
    }
}
