//! Travel-time providers.
//!
//! A provider turns an ordered pair of network members into a travel time.
//! Two kinds exist: derived costs computed from positions ([`Euclidean`],
//! [`RegionPenalty`]) and provided lookups ([`TravelTimeMatrix`]).
//!
//! [`TravelTimeMatrix`]: super::TravelTimeMatrix

use std::collections::HashMap;

use crate::config::TravelTimeConfig;
use crate::error::{RoutingError, RoutingResult};
use crate::models::Location;

/// Supplies the travel time between two members of a network.
///
/// Members are addressed by their index in the network's settlement list,
/// which is also the slice passed as `locations`. The network answers
/// same-location queries with zero itself, so implementations only see
/// `from != to`.
///
/// # Examples
///
/// ```
/// use u_depot::distance::TravelTimeProvider;
/// use u_depot::models::{Location, Network, Position};
///
/// /// Every trip takes one hour.
/// struct Flat;
///
/// impl TravelTimeProvider for Flat {
///     fn travel_time(&self, _: &[Location], _: usize, _: usize) -> Option<f64> {
///         Some(1.0)
///     }
/// }
///
/// let a = Location::new("A", "R", Position::new(0.0, 0.0));
/// let b = Location::new("B", "R", Position::new(9.0, 9.0));
/// let network = Network::new(vec![a.clone(), b.clone()], Flat)?;
/// assert_eq!(network.travel_time(&a, &b)?, 1.0);
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub trait TravelTimeProvider {
    /// Travel time from `locations[from]` to `locations[to]`.
    ///
    /// Returns `None` when the provider has no value for this pair.
    fn travel_time(&self, locations: &[Location], from: usize, to: usize) -> Option<f64>;

    /// Binds the provider to the network's locations.
    ///
    /// Called once while the network is built; lookups can validate their
    /// shape here and derived models can precompute per-location data.
    fn prepare(&mut self, _locations: &[Location]) -> RoutingResult<()> {
        Ok(())
    }

    /// Whether `+inf` from this provider marks a gap.
    ///
    /// Derived models are total, so an infinite result from them is an
    /// invalid travel time. Lookups override this to treat `+inf` like a
    /// missing entry.
    fn infinite_is_gap(&self) -> bool {
        false
    }
}

/// Straight-line distance divided by a constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Euclidean {
    speed: f64,
}

impl Euclidean {
    /// Travel time equals distance (speed = 1).
    pub fn new() -> Self {
        Self { speed: 1.0 }
    }

    /// Travel time equals distance divided by `speed`.
    ///
    /// Fails with [`RoutingError::InvalidConfig`] unless `speed` is finite
    /// and strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_depot::distance::Euclidean;
    ///
    /// assert_eq!(Euclidean::with_speed(2.0)?.speed(), 2.0);
    /// assert!(Euclidean::with_speed(0.0).is_err());
    /// # Ok::<(), u_depot::error::RoutingError>(())
    /// ```
    pub fn with_speed(speed: f64) -> RoutingResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(RoutingError::InvalidConfig {
                field: "speed",
                value: speed,
            });
        }
        Ok(Self { speed })
    }

    /// Configured speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Default for Euclidean {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelTimeProvider for Euclidean {
    fn travel_time(&self, locations: &[Location], from: usize, to: usize) -> Option<f64> {
        Some(locations[from].distance_to(&locations[to]) / self.speed)
    }
}

/// Distance-based travel time with a penalty for entering another region.
///
/// The time in hours is
/// `distance / speed / 3600 * (1 + crossing * size(dest_region) / divisor)`,
/// where `crossing` is 1 if the two regions differ and `size(dest_region)`
/// counts the network members sharing the destination's region, the
/// destination included. Region sizes are counted once in
/// [`prepare`](TravelTimeProvider::prepare).
#[derive(Debug, Clone)]
pub struct RegionPenalty {
    config: TravelTimeConfig,
    region_sizes: Vec<usize>,
}

impl RegionPenalty {
    /// Creates a region-penalty model after validating `config`.
    pub fn new(config: TravelTimeConfig) -> RoutingResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            region_sizes: Vec::new(),
        })
    }

    /// The model's configuration.
    pub fn config(&self) -> &TravelTimeConfig {
        &self.config
    }

    /// Number of network members in the same region as member `index`.
    pub fn region_size(&self, index: usize) -> usize {
        self.region_sizes.get(index).copied().unwrap_or(1).max(1)
    }
}

impl TravelTimeProvider for RegionPenalty {
    fn travel_time(&self, locations: &[Location], from: usize, to: usize) -> Option<f64> {
        let (a, b) = (&locations[from], &locations[to]);
        let base = self.config.hours_for(a.distance_to(b));
        if a.region() == b.region() {
            return Some(base);
        }
        let size = self.region_size(to) as f64;
        Some(base * (1.0 + size / self.config.region_penalty_divisor))
    }

    fn prepare(&mut self, locations: &[Location]) -> RoutingResult<()> {
        let mut counts = HashMap::<&str, usize>::new();
        for l in locations {
            *counts.entry(l.region()).or_default() += 1;
        }
        self.region_sizes = locations.iter().map(|l| counts[l.region()]).collect();
        Ok(())
    }
}
