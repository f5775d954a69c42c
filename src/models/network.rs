//! Network of locations with a travel-time provider.

use std::collections::HashMap;

use tracing::debug;

use crate::config::TravelTimeConfig;
use crate::distance::{Euclidean, RegionPenalty, TravelTimeMatrix, TravelTimeProvider};
use crate::error::{RoutingError, RoutingResult};

use super::Location;

/// A closed, read-only set of locations plus the travel time between any
/// ordered pair of them.
///
/// Members are stored in the order they were supplied. Travel time from a
/// member to itself is always zero; every other pair is answered by the
/// provider and may be asymmetric.
///
/// # Examples
///
/// ```
/// use u_depot::models::{Location, Network, Position};
///
/// let a = Location::new("A", "R", Position::new(0.0, 0.0));
/// let b = Location::new("B", "R", Position::new(3.0, 4.0));
/// let network = Network::euclidean(vec![a.clone(), b.clone()])?;
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.travel_time(&a, &b)?, 5.0);
/// assert_eq!(network.travel_time(&a, &a)?, 0.0);
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Network<P = Euclidean> {
    settlements: Vec<Location>,
    index: HashMap<Location, usize>,
    provider: P,
}

impl Network<Euclidean> {
    /// Builds a network whose travel time is the straight-line distance.
    pub fn euclidean(settlements: Vec<Location>) -> RoutingResult<Self> {
        Self::new(settlements, Euclidean::new())
    }
}

impl Network<RegionPenalty> {
    /// Builds a network using the region-penalty travel-time model.
    pub fn with_region_penalty(
        settlements: Vec<Location>,
        config: TravelTimeConfig,
    ) -> RoutingResult<Self> {
        Self::new(settlements, RegionPenalty::new(config)?)
    }
}

impl Network<TravelTimeMatrix> {
    /// Builds a network backed by an explicit travel-time matrix.
    ///
    /// Row and column `i` of the matrix belong to `settlements[i]`.
    pub fn with_matrix(
        settlements: Vec<Location>,
        matrix: TravelTimeMatrix,
    ) -> RoutingResult<Self> {
        Self::new(settlements, matrix)
    }
}

impl<P: TravelTimeProvider> Network<P> {
    /// Builds a network from its members and a travel-time provider.
    ///
    /// Fails with [`RoutingError::DuplicateLocation`] if two members are
    /// equal, or with whatever the provider reports while binding to the
    /// members.
    pub fn new(settlements: Vec<Location>, mut provider: P) -> RoutingResult<Self> {
        let mut index = HashMap::with_capacity(settlements.len());
        for (i, location) in settlements.iter().enumerate() {
            if index.insert(location.clone(), i).is_some() {
                return Err(RoutingError::DuplicateLocation {
                    name: location.name().to_string(),
                    region: location.region().to_string(),
                });
            }
        }
        provider.prepare(&settlements)?;
        debug!(settlements = settlements.len(), "network built");
        Ok(Self {
            settlements,
            index,
            provider,
        })
    }

    /// All members in construction order.
    pub fn settlements(&self) -> &[Location] {
        &self.settlements
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    /// Returns `true` if the network has no members.
    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }

    /// Returns `true` if `location` is a member.
    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(location)
    }

    /// Position of `location` in [`settlements`](Self::settlements).
    pub fn index_of(&self, location: &Location) -> RoutingResult<usize> {
        self.index
            .get(location)
            .copied()
            .ok_or_else(|| RoutingError::UnknownLocation {
                name: location.name().to_string(),
                region: location.region().to_string(),
            })
    }

    /// Member at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.settlements.get(index)
    }

    /// The travel-time provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Travel time from `from` to `to`.
    ///
    /// Fails with [`RoutingError::UnknownLocation`] if either is not a
    /// member, with [`RoutingError::MissingTravelTime`] if the provider has
    /// no value for the pair, and with [`RoutingError::InvalidTravelTime`]
    /// if the value is negative, NaN, or infinite from a derived model.
    pub fn travel_time(&self, from: &Location, to: &Location) -> RoutingResult<f64> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.travel_time_between(from, to)
    }

    /// Travel time between two members addressed by index.
    ///
    /// Only `None`, or `+inf` from a lookup, is a gap.
    pub(crate) fn travel_time_between(&self, from: usize, to: usize) -> RoutingResult<f64> {
        if from == to {
            return Ok(0.0);
        }
        let name = |i: usize| self.settlements[i].name().to_string();
        match self.provider.travel_time(&self.settlements, from, to) {
            Some(t) if t.is_finite() && t >= 0.0 => Ok(t),
            Some(t) if t != f64::INFINITY || !self.provider.infinite_is_gap() => {
                Err(RoutingError::InvalidTravelTime {
                    from: name(from),
                    to: name(to),
                    value: t,
                })
            }
            _ => Err(RoutingError::MissingTravelTime {
                from: name(from),
                to: name(to),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn abc() -> Vec<Location> {
        vec![
            Location::new("A", "R", Position::new(0.0, 0.0)),
            Location::new("B", "R", Position::new(3.0, 0.0)),
            Location::new("C", "R", Position::new(0.0, 4.0)),
        ]
    }

    #[test]
    fn test_euclidean_network() {
        let locs = abc();
        let n = Network::euclidean(locs.clone()).expect("valid");
        assert_eq!(n.len(), 3);
        assert!(!n.is_empty());
        assert_eq!(n.settlements(), locs.as_slice());
        assert!((n.travel_time(&locs[1], &locs[2]).expect("members") - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_self_travel_is_zero() {
        let locs = abc();
        let n = Network::euclidean(locs.clone()).expect("valid");
        for l in &locs {
            assert_eq!(n.travel_time(l, l), Ok(0.0));
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut locs = abc();
        locs.push(locs[0].clone());
        assert_eq!(
            Network::euclidean(locs).unwrap_err(),
            RoutingError::DuplicateLocation {
                name: "A".into(),
                region: "R".into()
            }
        );
    }

    #[test]
    fn test_same_name_different_region_allowed() {
        let locs = vec![
            Location::new("Anvard", "North", Position::new(0.0, 5.0)),
            Location::new("Anvard", "South", Position::new(0.0, 5.0)),
        ];
        assert!(Network::euclidean(locs).is_ok());
    }

    #[test]
    fn test_unknown_location() {
        let n = Network::euclidean(abc()).expect("valid");
        let stranger = Location::new("X", "R", Position::new(1.0, 1.0));
        assert_eq!(
            n.travel_time(&abc()[0], &stranger),
            Err(RoutingError::UnknownLocation {
                name: "X".into(),
                region: "R".into()
            })
        );
        assert!(!n.contains(&stranger));
        assert!(n.index_of(&stranger).is_err());
    }

    #[test]
    fn test_matrix_network_asymmetric() {
        let locs = abc();
        let mut tm = TravelTimeMatrix::new(3);
        tm.set(0, 1, 2.0);
        tm.set(1, 0, 7.0);
        let n = Network::with_matrix(locs.clone(), tm).expect("valid");
        assert_eq!(n.travel_time(&locs[0], &locs[1]), Ok(2.0));
        assert_eq!(n.travel_time(&locs[1], &locs[0]), Ok(7.0));
        assert_eq!(
            n.travel_time(&locs[0], &locs[2]),
            Err(RoutingError::MissingTravelTime {
                from: "A".into(),
                to: "C".into()
            })
        );
    }

    #[test]
    fn test_matrix_network_size_mismatch() {
        assert!(matches!(
            Network::with_matrix(abc(), TravelTimeMatrix::new(2)),
            Err(RoutingError::MatrixSize { .. })
        ));
    }

    #[test]
    fn test_negative_travel_time_rejected() {
        let locs = abc();
        let tm = TravelTimeMatrix::from_data(3, vec![0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0])
            .expect("valid shape");
        let n = Network::with_matrix(locs.clone(), tm).expect("valid");
        assert!(matches!(
            n.travel_time(&locs[0], &locs[1]),
            Err(RoutingError::InvalidTravelTime { value, .. }) if value == -1.0
        ));
    }

    #[test]
    fn test_infinite_matrix_entry_is_gap() {
        let locs = abc();
        let mut tm = TravelTimeMatrix::from_locations(&locs);
        tm.set(0, 1, f64::INFINITY);
        let n = Network::with_matrix(locs.clone(), tm).expect("valid");
        assert_eq!(
            n.travel_time(&locs[0], &locs[1]),
            Err(RoutingError::MissingTravelTime {
                from: "A".into(),
                to: "B".into()
            })
        );
    }

    #[test]
    fn test_overflowing_distance_is_invalid() {
        let locs = vec![
            Location::new("West", "R", Position::new(-f64::MAX, 0.0)),
            Location::new("East", "R", Position::new(f64::MAX, 0.0)),
        ];
        let n = Network::euclidean(locs.clone()).expect("valid");
        assert!(matches!(
            n.travel_time(&locs[0], &locs[1]),
            Err(RoutingError::InvalidTravelTime { value, .. }) if value == f64::INFINITY
        ));
    }

    #[test]
    fn test_region_penalty_network() {
        let locs = vec![
            Location::new("A", "North", Position::new(0.0, 0.0)),
            Location::new("B", "South", Position::new(3600.0 * 4.75, 0.0)),
        ];
        let n = Network::with_region_penalty(locs.clone(), TravelTimeConfig::default())
            .expect("valid");
        let t = n.travel_time(&locs[0], &locs[1]).expect("members");
        assert!((t - 1.1).abs() < 1e-10);
        assert_eq!(n.provider().region_size(1), 1);
    }

    #[test]
    fn test_get_and_index_of() {
        let locs = abc();
        let n = Network::euclidean(locs.clone()).expect("valid");
        assert_eq!(n.index_of(&locs[2]), Ok(2));
        assert_eq!(n.get(1), Some(&locs[1]));
        assert_eq!(n.get(3), None);
    }
}
