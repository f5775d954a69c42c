//! Regular polygon generator.
//!
//! Places n locations at the vertices of a regular n-gon inscribed in a
//! circle centred on the origin. Even angular spacing removes geometric
//! irregularity from the input, so timing differences across n reflect the
//! algorithm alone.

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{RoutingError, RoutingResult};
use crate::models::{Location, Network, Position};

use super::{check_radius, name_for_index};

/// Region shared by every generated vertex.
pub const POLYGON_REGION: &str = "Polygon";

/// Vertices of a regular n-gon with circumradius `radius`.
///
/// Vertex `i` sits at angle `2πi / n` and is named by [`name_for_index`].
///
/// # Errors
///
/// * [`RoutingError::InvalidPolygon`] if `n < 3`.
/// * [`RoutingError::InvalidRadius`] if `radius` is negative, NaN or above
///   [`MAX_RADIUS`](super::MAX_RADIUS).
pub fn regular_polygon_locations(n: usize, radius: f64) -> RoutingResult<Vec<Location>> {
    if n < 3 {
        return Err(RoutingError::InvalidPolygon { n });
    }
    check_radius(radius)?;

    let step = TAU / n as f64;
    Ok((0..n)
        .map(|i| {
            let theta = step * i as f64;
            Location::new(
                name_for_index(i),
                POLYGON_REGION,
                Position::new(radius * theta.cos(), radius * theta.sin()),
            )
        })
        .collect())
}

/// A Euclidean network over the vertices of a regular n-gon.
///
/// Repeated calls with the same arguments produce identical networks.
///
/// # Examples
///
/// ```
/// use u_depot::generator::regular_polygon_network;
///
/// let network = regular_polygon_network(6, 10.0)?;
/// assert_eq!(network.len(), 6);
/// assert_eq!(network.settlements(), regular_polygon_network(6, 10.0)?.settlements());
/// assert!(regular_polygon_network(2, 10.0).is_err());
/// # Ok::<(), u_depot::error::RoutingError>(())
/// ```
pub fn regular_polygon_network(n: usize, radius: f64) -> RoutingResult<Network> {
    let locations = regular_polygon_locations(n, radius)?;
    debug!(n, radius, "regular polygon generated");
    Network::euclidean(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::build_tour;
    use std::f64::consts::PI;

    #[test]
    fn test_too_few_vertices() {
        for n in 0..3 {
            assert_eq!(
                regular_polygon_network(n, 1.0).unwrap_err(),
                RoutingError::InvalidPolygon { n }
            );
        }
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            regular_polygon_network(5, -1.0),
            Err(RoutingError::InvalidRadius { .. })
        ));
        assert!(regular_polygon_network(5, f64::INFINITY).is_err());
        assert!(regular_polygon_network(5, f64::NAN).is_err());
    }

    #[test]
    fn test_triangle_positions() {
        let locs = regular_polygon_locations(3, 2.0).expect("valid");
        assert_eq!(locs[0].position(), Position::new(2.0, 0.0));
        let p = locs[1].position();
        assert!((p.x() + 1.0).abs() < 1e-10);
        assert!((p.y() - 3f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_vertices_on_circle() {
        let radius = 250.0;
        for l in regular_polygon_locations(17, radius).expect("valid") {
            assert!((l.position().norm() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_even_spacing() {
        let n = 12;
        let radius = 3.0;
        let locs = regular_polygon_locations(n, radius).expect("valid");
        let side = 2.0 * radius * (PI / n as f64).sin();
        for i in 0..n {
            let d = locs[i].distance_to(&locs[(i + 1) % n]);
            assert!((d - side).abs() < 1e-9);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = regular_polygon_network(40, 7.5).expect("valid");
        let b = regular_polygon_network(40, 7.5).expect("valid");
        assert_eq!(a.settlements(), b.settlements());
    }

    #[test]
    fn test_names_distinct_and_region_shared() {
        let locs = regular_polygon_locations(25, 1.0).expect("valid");
        let mut names: Vec<&str> = locs.iter().map(Location::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 25);
        assert!(locs.iter().all(|l| l.region() == POLYGON_REGION));
    }

    #[test]
    fn test_radius_bounded_so_tours_complete() {
        assert!(matches!(
            regular_polygon_network(4, 1e308),
            Err(RoutingError::InvalidRadius { .. })
        ));
        let network = regular_polygon_network(4, 1e307).expect("valid");
        let tour = build_tour(&network, &network.settlements()[0]).expect("complete network");
        assert_eq!(tour.len(), 4);
        assert!(tour.total_time().is_finite());
    }

    #[test]
    fn test_zero_radius_still_valid() {
        let network = regular_polygon_network(4, 0.0).expect("valid");
        assert_eq!(network.len(), 4);
    }

    #[test]
    fn test_nn_tour_walks_the_perimeter() {
        let n = 12;
        let radius = 5.0;
        let network = regular_polygon_network(n, radius).expect("valid");
        let tour = build_tour(&network, &network.settlements()[0]).expect("complete network");
        let side = 2.0 * radius * (PI / n as f64).sin();
        assert_eq!(tour.len(), n);
        assert!((tour.total_time() - (n - 1) as f64 * side).abs() < 1e-9);
    }
}
