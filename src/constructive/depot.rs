//! Depot site selection.
//!
//! Each candidate site is scored by the round trip of its nearest-neighbour
//! tour: out through every member and back to the site.

use tracing::debug;

use crate::distance::TravelTimeProvider;
use crate::error::RoutingResult;
use crate::models::{Location, Network, Tour};

use super::build_tour;

/// The chosen depot site and the tour that justified it.
#[derive(Debug, Clone, PartialEq)]
pub struct DepotChoice {
    /// Winning site.
    pub depot: Location,
    /// Nearest-neighbour tour from `depot`.
    pub tour: Tour,
    /// Tour time plus the return leg to `depot`.
    pub round_trip_time: f64,
}

/// Finds the candidate site whose nearest-neighbour round trip is fastest.
///
/// Candidates are de-duplicated and tried in location order (name, then
/// region); a later candidate replaces the incumbent only if strictly
/// faster, so ties go to the smallest site. Returns `Ok(None)` for an
/// empty candidate set.
///
/// # Examples
///
/// ```
/// use u_depot::models::{Location, Network, Position};
/// use u_depot::constructive::best_depot_site;
///
/// let west = Location::new("West", "R", Position::new(0.0, 0.0));
/// let mid = Location::new("Mid", "R", Position::new(5.0, 0.0));
/// let east = Location::new("East", "R", Position::new(6.0, 0.0));
/// let network = Network::euclidean(vec![west.clone(), mid.clone(), east.clone()])?;
///
/// // Every round trip over collinear sites is 12; the tie goes to "Mid".
/// let choice = best_depot_site(&network, [&west, &mid])?.expect("two sites");
/// assert_eq!(choice.depot, mid);
/// assert_eq!(choice.round_trip_time, 12.0);
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub fn best_depot_site<'c, P, I>(
    network: &Network<P>,
    candidates: I,
) -> RoutingResult<Option<DepotChoice>>
where
    P: TravelTimeProvider,
    I: IntoIterator<Item = &'c Location>,
{
    let mut sites: Vec<&Location> = candidates.into_iter().collect();
    sites.sort();
    sites.dedup();

    let mut best: Option<DepotChoice> = None;
    for site in sites {
        let tour = build_tour(network, site)?;
        let round_trip_time = tour.round_trip_time(network)?;
        debug!(depot = site.name(), round_trip_time, "depot candidate evaluated");
        if best
            .as_ref()
            .map_or(true, |b| round_trip_time < b.round_trip_time)
        {
            best = Some(DepotChoice {
                depot: site.clone(),
                tour,
                round_trip_time,
            });
        }
    }

    Ok(best)
}
