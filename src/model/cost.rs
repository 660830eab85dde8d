//! Travel cost model for a walking network
//!
//! Distance is a flat-earth approximation good enough for a single
//! map region: latitude and longitude deltas are scaled to meters
//! with per-axis factors and combined with Pythagoras. The elevation
//! term is asymmetric, reflecting pedestrian effort: descending is
//! free, a net climb costs its square.

use geo::Point;

/// Approximate meters per degree of latitude.
const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// Per-axis degree-to-meter scales for one map region.
///
/// The longitude scale shrinks with the cosine of the region's
/// reference latitude, correcting for meridian convergence. The
/// scales are fixed at graph build time and shared by edge weights
/// and the search heuristic.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    meters_per_lat: f64,
    meters_per_lon: f64,
}

impl CostModel {
    /// Cost model for a region around the given latitude, in degrees.
    pub fn for_latitude(reference_latitude: f64) -> Self {
        Self {
            meters_per_lat: METERS_PER_DEGREE_LAT,
            meters_per_lon: METERS_PER_DEGREE_LAT * reference_latitude.to_radians().cos(),
        }
    }

    /// Planar distance between two positions, in meters.
    ///
    /// A true lower bound on the length of any path between the two
    /// points, which keeps the heuristic's distance term admissible.
    pub fn distance_cost(&self, from: Point<f64>, to: Point<f64>) -> f64 {
        let dx = (to.x() - from.x()) * self.meters_per_lon;
        let dy = (to.y() - from.y()) * self.meters_per_lat;
        dx.hypot(dy)
    }

    /// Penalty for the elevation change between two points.
    ///
    /// Zero when level or descending; the square of the rise when
    /// climbing. Squaring weights climbs heavily against distance,
    /// which suits walking effort.
    ///
    /// As a heuristic term this uses the net rise to the goal. Per-edge
    /// penalties along a real path are each squared, so their sum can
    /// exceed the net-rise square when a profile descends past interior
    /// climbs; the estimate is an approximation rather than a strict
    /// lower bound.
    pub fn elevation_cost(from: i32, to: i32) -> f64 {
        if to > from {
            f64::from(to - from).powi(2)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Point<f64> {
        Point::new(lon, lat)
    }

    #[test]
    fn distance_is_zero_between_identical_points() {
        let model = CostModel::for_latitude(43.9);
        let p = point(43.9, -78.85);
        assert_eq!(model.distance_cost(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_positive() {
        let model = CostModel::for_latitude(43.9);
        let a = point(43.90, -78.85);
        let b = point(43.91, -78.86);
        let ab = model.distance_cost(a, b);
        let ba = model.distance_cost(b, a);
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn one_hundredth_degree_of_latitude_is_about_a_kilometer() {
        let model = CostModel::for_latitude(43.9);
        let a = point(43.90, -78.85);
        let b = point(43.91, -78.85);
        let d = model.distance_cost(a, b);
        assert!((d - 1110.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_away_from_the_equator() {
        let equator = CostModel::for_latitude(0.0);
        let north = CostModel::for_latitude(43.9);
        let a = point(0.0, 10.00);
        let b = point(0.0, 10.01);
        assert!(north.distance_cost(a, b) < equator.distance_cost(a, b));
        // At the equator both axes scale identically.
        let c = point(0.01, 10.00);
        let lat_leg = equator.distance_cost(a, c);
        let lon_leg = equator.distance_cost(a, b);
        assert!((lat_leg - lon_leg).abs() < 1e-6);
    }

    #[test]
    fn descending_and_level_ground_are_free() {
        assert_eq!(CostModel::elevation_cost(100, 100), 0.0);
        assert_eq!(CostModel::elevation_cost(100, 40), 0.0);
    }

    #[test]
    fn climbing_costs_the_square_of_the_rise() {
        assert_eq!(CostModel::elevation_cost(100, 103), 9.0);
        assert_eq!(CostModel::elevation_cost(0, 20), 400.0);
    }
}
