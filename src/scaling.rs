//! Running-time measurements of nearest-neighbour tour construction.
//!
//! Produces `(n, elapsed)` pairs over regular polygon networks of growing
//! size. Reporting, plotting and curve fitting are left to the caller.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constructive::build_tour;
use crate::distance::TravelTimeProvider;
use crate::error::{RoutingError, RoutingResult};
use crate::generator::regular_polygon_network;
use crate::models::{Location, Network, Tour};

/// One timed tour construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Number of locations in the network.
    pub n: usize,
    /// Wall-clock time spent building the tour.
    pub elapsed: Duration,
    /// Total travel time of the tour that was built.
    pub total_time: f64,
}

/// Builds a tour and reports how long it took.
pub fn timed_tour<P: TravelTimeProvider>(
    network: &Network<P>,
    origin: &Location,
) -> RoutingResult<(Tour, Duration)> {
    let start = Instant::now();
    let tour = build_tour(network, origin)?;
    Ok((tour, start.elapsed()))
}

/// Times one tour over a regular `n`-gon, starting from its first vertex.
pub fn measure_one(n: usize, radius: f64) -> RoutingResult<Measurement> {
    let network = regular_polygon_network(n, radius)?;
    let origin = network
        .settlements()
        .first()
        .ok_or(RoutingError::InvalidPolygon { n })?;
    let (tour, elapsed) = timed_tour(&network, origin)?;
    info!(
        n,
        elapsed_secs = elapsed.as_secs_f64(),
        "nearest-neighbour tour timed"
    );
    Ok(Measurement {
        n,
        elapsed,
        total_time: tour.total_time(),
    })
}

/// Times one tour per entry of `sizes`, sequentially.
///
/// # Examples
///
/// ```
/// use u_depot::scaling::measure;
///
/// let runs = measure(&[3, 8, 16], 1.0)?;
/// assert_eq!(runs.iter().map(|m| m.n).collect::<Vec<_>>(), vec![3, 8, 16]);
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub fn measure(sizes: &[usize], radius: f64) -> RoutingResult<Vec<Measurement>> {
    sizes.iter().map(|&n| measure_one(n, radius)).collect()
}

/// Like [`measure`], but runs trials concurrently on the rayon pool.
///
/// Trials share nothing, so results match [`measure`] apart from the
/// timings, which contend for cores and are noisier.
pub fn measure_parallel(sizes: &[usize], radius: f64) -> RoutingResult<Vec<Measurement>> {
    sizes.par_iter().map(|&n| measure_one(n, radius)).collect()
}

/// `count` sizes spaced evenly on a log2 scale between `min` and `max`,
/// truncated to integers, sorted and de-duplicated.
///
/// # Examples
///
/// ```
/// use u_depot::scaling::log_spaced_sizes;
///
/// assert_eq!(log_spaced_sizes(1, 16, 5), vec![1, 2, 4, 8, 16]);
/// ```
pub fn log_spaced_sizes(min: usize, max: usize, count: usize) -> Vec<usize> {
    let min = min.max(1);
    if count == 0 || min > max {
        return Vec::new();
    }
    let lo = (min as f64).log2();
    let hi = (max as f64).log2();
    let steps = (count - 1).max(1) as f64;

    let mut sizes: Vec<usize> = (0..count)
        .map(|k| {
            let exponent = lo + (hi - lo) * k as f64 / steps;
            // nudge exact powers past rounding error before truncating
            ((exponent.exp2() + 1e-9) as usize).clamp(min, max)
        })
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
