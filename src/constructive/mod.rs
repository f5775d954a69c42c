//! Constructive routines built on fastest-trip selection.
//!
//! - [`select_fastest`] — Fastest destination among candidates, total tie-break, O(k)
//! - [`build_tour`] — Greedy nearest-neighbour tour over a whole network, O(n²)
//! - [`best_depot_site`] — Site whose nearest-neighbour round trip is fastest, O(m·n²)

mod depot;
mod fastest_trip;
mod nearest_neighbor;

pub use depot::{best_depot_site, DepotChoice};
pub use fastest_trip::{fastest_trip_from, select_fastest, FastestTrip};
pub use nearest_neighbor::build_tour;
