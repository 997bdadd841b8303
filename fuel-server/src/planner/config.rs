//! Planner configuration.

/// Configuration parameters for fuel stop selection.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum distance on a full tank (miles).
    pub vehicle_range_miles: f64,

    /// Fuel economy (miles per gallon).
    pub vehicle_mpg: f64,

    /// Refuel once remaining range drops below this fraction of a tank.
    pub low_fuel_fraction: f64,

    /// Candidate search radius, as a fraction of the tank range.
    pub search_radius_fraction: f64,

    /// Target spacing between sampled route points (miles).
    pub sample_spacing_miles: f64,

    /// Weight applied to route deviation when scoring a candidate.
    /// Score is `price + deviation_miles * weight`.
    pub deviation_weight: f64,

    /// Bounding-box margin around the route, in degrees.
    /// 0.5 degrees is roughly 35 miles.
    pub bbox_margin_deg: f64,
}

impl PlannerConfig {
    /// Remaining range below which the planner starts looking for a stop.
    pub fn low_fuel_threshold(&self) -> f64 {
        self.vehicle_range_miles * self.low_fuel_fraction
    }

    /// How far off the current route point a candidate may be.
    pub fn search_radius(&self) -> f64 {
        self.vehicle_range_miles * self.search_radius_fraction
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            vehicle_range_miles: 500.0,
            vehicle_mpg: 10.0,
            low_fuel_fraction: 0.25,
            search_radius_fraction: 0.2,
            sample_spacing_miles: 50.0,
            deviation_weight: 0.1,
            bbox_margin_deg: 0.5,
        }
    }
}
