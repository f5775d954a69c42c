//! Tour type.

use serde::Serialize;

use crate::distance::TravelTimeProvider;
use crate::error::RoutingResult;

use super::{Location, Network};

/// An ordered visiting sequence plus its accumulated travel time.
///
/// `order` starts at the tour's origin and lists every network member
/// exactly once. `total_time` is the sum of travel times between
/// consecutive entries; the return leg to the origin is not included (see
/// [`round_trip_time`](Self::round_trip_time)).
///
/// Tours are only produced by tour construction, so they serialize but do
/// not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    order: Vec<Location>,
    total_time: f64,
}

impl Tour {
    pub(crate) fn new(order: Vec<Location>, total_time: f64) -> Self {
        Self { order, total_time }
    }

    /// Locations in visiting order.
    pub fn order(&self) -> &[Location] {
        &self.order
    }

    /// Sum of travel times between consecutive locations.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First location of the tour.
    pub fn origin(&self) -> Option<&Location> {
        self.order.first()
    }

    /// Location names in visiting order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(Location::name).collect()
    }

    /// Recomputes the sum of consecutive travel times against `network`.
    pub fn path_time<P: TravelTimeProvider>(&self, network: &Network<P>) -> RoutingResult<f64> {
        self.order
            .windows(2)
            .try_fold(0.0, |acc, pair| -> RoutingResult<f64> {
                Ok(acc + network.travel_time(&pair[0], &pair[1])?)
            })
    }

    /// Total time including the final leg back to the origin.
    pub fn round_trip_time<P: TravelTimeProvider>(
        &self,
        network: &Network<P>,
    ) -> RoutingResult<f64> {
        match (self.order.first(), self.order.last()) {
            (Some(first), Some(last)) => Ok(self.total_time + network.travel_time(last, first)?),
            _ => Ok(self.total_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn triangle() -> (Vec<Location>, Network) {
        let locs = vec![
            Location::new("A", "R", Position::new(0.0, 0.0)),
            Location::new("B", "R", Position::new(3.0, 0.0)),
            Location::new("C", "R", Position::new(0.0, 4.0)),
        ];
        let network = Network::euclidean(locs.clone()).expect("valid");
        (locs, network)
    }

    #[test]
    fn test_tour_accessors() {
        let (locs, _) = triangle();
        let tour = Tour::new(locs.clone(), 8.0);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert_eq!(tour.origin(), Some(&locs[0]));
        assert_eq!(tour.names(), vec!["A", "B", "C"]);
        assert_eq!(tour.total_time(), 8.0);
    }

    #[test]
    fn test_path_time() {
        let (locs, network) = triangle();
        let tour = Tour::new(locs, 8.0);
        assert!((tour.path_time(&network).expect("members") - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_trip_time() {
        let (locs, network) = triangle();
        let tour = Tour::new(locs, 8.0);
        assert!((tour.round_trip_time(&network).expect("members") - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_serializes_order_and_total() {
        let (locs, _) = triangle();
        let json = serde_json::to_value(Tour::new(locs, 8.0)).expect("serialize");
        assert_eq!(json["total_time"], 8.0);
        assert_eq!(json["order"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_empty_tour() {
        let (_, network) = triangle();
        let tour = Tour::new(Vec::new(), 0.0);
        assert!(tour.is_empty());
        assert_eq!(tour.origin(), None);
        assert_eq!(tour.round_trip_time(&network), Ok(0.0));
        assert_eq!(tour.path_time(&network), Ok(0.0));
    }
}
