//! Seeded random scatter generator.
//!
//! Uniform points in a disc. Irregular and clustered by chance, which is
//! exactly the input the polygon generator avoids; useful as a contrast
//! when comparing timings.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::RoutingResult;
use crate::models::{Location, Network, Position};

use super::{check_radius, name_for_index};

/// Region shared by every scattered location.
pub const SCATTER_REGION: &str = "Scatter";

/// A Euclidean network of `n` points drawn uniformly from a disc of the
/// given radius.
///
/// The same `seed` always yields the same network.
///
/// # Examples
///
/// ```
/// use u_depot::generator::scattered_network;
///
/// let a = scattered_network(50, 100.0, 42)?;
/// let b = scattered_network(50, 100.0, 42)?;
/// assert_eq!(a.settlements(), b.settlements());
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub fn scattered_network(n: usize, radius: f64, seed: u64) -> RoutingResult<Network> {
    check_radius(radius)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let locations = (0..n)
        .map(|i| {
            // sqrt keeps the density uniform over the disc's area
            let r = radius * rng.random::<f64>().sqrt();
            let theta = TAU * rng.random::<f64>();
            Location::new(
                name_for_index(i),
                SCATTER_REGION,
                Position::new(r * theta.cos(), r * theta.sin()),
            )
        })
        .collect();
    debug!(n, radius, seed, "scattered network generated");
    Network::euclidean(locations)
}
