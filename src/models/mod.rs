//! Domain model types.
//!
//! Locations with an exact equality and a deterministic ordering, networks
//! pairing a closed set of locations with a travel-time provider, and the
//! tours built over them.

mod location;
mod network;
mod tour;

pub use location::{Location, Position};
pub use network::Network;
pub use tour::Tour;
