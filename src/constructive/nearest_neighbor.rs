//! Nearest-neighbour tour construction.
//!
//! Starting from an origin, repeatedly travel to the fastest unvisited
//! member (ties broken by name, then region) until none remain.
//!
//! # Complexity
//!
//! O(n²) where n = number of network members: step k scans the n - k
//! members still unvisited.
//!
//! # Reference
//!
//! The simplest constructive heuristic for TSP. It gives no optimality
//! guarantee; its value here is a fully deterministic baseline whose cost
//! can be measured against n.

use tracing::{debug, trace};

use crate::distance::TravelTimeProvider;
use crate::error::{RoutingError, RoutingResult};
use crate::models::{Location, Network, Tour};

use super::fastest_trip::fastest_among;

/// Builds a nearest-neighbour tour over every member of `network`.
///
/// The tour starts at `origin` and visits each member exactly once. Its
/// total time is the sum of the legs taken; the return to `origin` is not
/// included.
///
/// # Errors
///
/// * [`RoutingError::UnknownLocation`] if `origin` is not a member.
/// * [`RoutingError::IncompleteNetwork`] if, at some step, no unvisited
///   member has a travel time from the current location.
/// * [`RoutingError::InvalidTravelTime`] if a leg scanned along the way is
///   negative, NaN or an overflowed distance.
///
/// # Examples
///
/// ```
/// use u_depot::models::{Location, Network, Position};
/// use u_depot::constructive::build_tour;
///
/// let a = Location::new("A", "R", Position::new(0.0, 0.0));
/// let b = Location::new("B", "R", Position::new(3.0, 0.0));
/// let c = Location::new("C", "R", Position::new(0.0, 4.0));
/// let network = Network::euclidean(vec![c, b, a.clone()])?;
///
/// let tour = build_tour(&network, &a)?;
/// assert_eq!(tour.names(), vec!["A", "B", "C"]);
/// assert_eq!(tour.total_time(), 8.0);
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub fn build_tour<P: TravelTimeProvider>(
    network: &Network<P>,
    origin: &Location,
) -> RoutingResult<Tour> {
    let start = network.index_of(origin)?;
    let settlements = network.settlements();
    let n = settlements.len();

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut total_time = 0.0;
    let mut current = start;

    while !unvisited.is_empty() {
        match fastest_among(network, current, &unvisited)? {
            Some((slot, time)) => {
                // Selection does not depend on candidate order.
                let next = unvisited.swap_remove(slot);
                trace!(
                    from = settlements[current].name(),
                    to = settlements[next].name(),
                    time,
                    "tour step"
                );
                order.push(next);
                total_time += time;
                current = next;
            }
            None => {
                return Err(RoutingError::IncompleteNetwork {
                    current: settlements[current].name().to_string(),
                    unvisited: unvisited.len(),
                })
            }
        }
    }

    debug!(
        origin = origin.name(),
        settlements = n,
        total_time,
        "nearest-neighbour tour built"
    );
    let order = order.into_iter().map(|i| settlements[i].clone()).collect();
    Ok(Tour::new(order, total_time))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::models::Position;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        /// Every member appears exactly once and the total equals the sum
        /// of the legs.
        #[test]
        fn prop_tour_is_complete_permutation(
            points in prop::collection::vec((-50i32..50, -50i32..50), 1..30),
            start in any::<prop::sample::Index>(),
        ) {
            let locations: Vec<Location> = points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    Location::new(format!("L{i}"), "R", Position::new(f64::from(x), f64::from(y)))
                })
                .collect();
            let network = Network::euclidean(locations.clone()).expect("distinct names");
            let origin = &locations[start.index(locations.len())];

            let tour = build_tour(&network, origin).expect("complete network");
            prop_assert_eq!(tour.len(), locations.len());
            prop_assert_eq!(tour.origin(), Some(origin));
            let seen: HashSet<&Location> = tour.order().iter().collect();
            prop_assert_eq!(seen.len(), locations.len());

            let legs = tour.path_time(&network).expect("members");
            prop_assert!((legs - tour.total_time()).abs() < 1e-9);
        }
    }
}
