//! Fastest-trip selection.
//!
//! Picks the single fastest destination from an origin with a total,
//! deterministic tie-break: minimum travel time (exact comparison), then the
//! smallest name, then the smallest region. See [`Location`]'s ordering.
//!
//! # Complexity
//!
//! O(k) travel-time lookups for k candidates.

use crate::distance::TravelTimeProvider;
use crate::error::{RoutingError, RoutingResult};
use crate::models::{Location, Network};

/// The winning destination of a selection and the time to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FastestTrip<'a> {
    /// Selected destination, borrowed from the network.
    pub destination: &'a Location,
    /// Travel time from the origin to `destination`.
    pub travel_time: f64,
}

/// Selects the fastest destination from `origin` among `candidates`.
///
/// Candidates are de-duplicated under location equality and `origin` is
/// discarded before the scan. Candidates the provider has no travel time
/// for are skipped. Returns `Ok(None)` when nothing is left to choose
/// from; an empty candidate set is a normal outcome, not an error.
///
/// # Errors
///
/// * [`RoutingError::UnknownLocation`] if `origin` or any candidate is not
///   a member of `network`.
/// * [`RoutingError::InvalidTravelTime`] if a scanned candidate's travel
///   time is negative, NaN or an overflowed distance. Only gaps are skipped.
///
/// # Examples
///
/// ```
/// use u_depot::models::{Location, Network, Position};
/// use u_depot::constructive::select_fastest;
///
/// let x = Location::new("Riverwood", "North", Position::new(0.0, 0.0));
/// let y = Location::new("Anvard", "South", Position::new(0.0, 5.0));
/// let z = Location::new("Anvard", "North", Position::new(0.0, 5.0));
/// let network = Network::euclidean(vec![x.clone(), y.clone(), z.clone()])?;
///
/// let trip = select_fastest(&network, &x, [&y, &z])?.expect("two candidates");
/// assert_eq!(trip.destination, &z);
/// assert_eq!(trip.travel_time, 5.0);
///
/// assert!(select_fastest(&network, &x, Vec::<&Location>::new())?.is_none());
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub fn select_fastest<'n, 'c, P, I>(
    network: &'n Network<P>,
    origin: &Location,
    candidates: I,
) -> RoutingResult<Option<FastestTrip<'n>>>
where
    P: TravelTimeProvider,
    I: IntoIterator<Item = &'c Location>,
{
    let origin = network.index_of(origin)?;
    let mut indices = candidates
        .into_iter()
        .map(|c| network.index_of(c))
        .collect::<RoutingResult<Vec<_>>>()?;
    indices.sort_unstable();
    indices.dedup();
    indices.retain(|&i| i != origin);

    let best = fastest_among(network, origin, &indices)?;
    Ok(best.map(|(slot, travel_time)| FastestTrip {
        destination: &network.settlements()[indices[slot]],
        travel_time,
    }))
}

/// Selects the fastest destination from `origin` among all other members.
pub fn fastest_trip_from<'n, P: TravelTimeProvider>(
    network: &'n Network<P>,
    origin: &Location,
) -> RoutingResult<Option<FastestTrip<'n>>> {
    select_fastest(network, origin, network.settlements())
}

/// Linear scan over member indices.
///
/// `candidates` must be duplicate-free. Returns the winner's position in
/// `candidates` together with its travel time.
pub(crate) fn fastest_among<P: TravelTimeProvider>(
    network: &Network<P>,
    origin: usize,
    candidates: &[usize],
) -> RoutingResult<Option<(usize, f64)>> {
    let settlements = network.settlements();
    let mut best: Option<(usize, f64)> = None;

    for (slot, &c) in candidates.iter().enumerate() {
        if c == origin {
            continue;
        }
        let t = match network.travel_time_between(origin, c) {
            Ok(t) => t,
            Err(RoutingError::MissingTravelTime { .. }) => continue,
            Err(e) => return Err(e),
        };
        let better = match best {
            None => true,
            Some((b, bt)) => t < bt || (t == bt && settlements[c] < settlements[candidates[b]]),
        };
        if better {
            best = Some((slot, t));
        }
    }

    Ok(best)
}
