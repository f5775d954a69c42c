//! Synthetic network generators.
//!
//! Deterministic, parametrised networks for controlled benchmarking. Vertex
//! naming is kept in [`name_for_index`] so the geometry code never builds
//! strings itself.

mod polygon;
mod scatter;

pub use polygon::{regular_polygon_locations, regular_polygon_network, POLYGON_REGION};
pub use scatter::{scattered_network, SCATTER_REGION};

use crate::error::{RoutingError, RoutingResult};

/// Deterministic, distinct name for the vertex with index `i`.
///
/// Zero-padded so that, below one million vertices, byte-wise name order
/// matches index order.
///
/// # Examples
///
/// ```
/// use u_depot::generator::name_for_index;
///
/// assert_eq!(name_for_index(7), "V000007");
/// assert!(name_for_index(9) < name_for_index(10));
/// ```
pub fn name_for_index(i: usize) -> String {
    format!("V{i:06}")
}

/// Largest accepted radius: any two points in the disc stay a finite
/// distance apart.
pub const MAX_RADIUS: f64 = f64::MAX / 2.0;

fn check_radius(radius: f64) -> RoutingResult<()> {
    if (0.0..=MAX_RADIUS).contains(&radius) {
        Ok(())
    } else {
        Err(RoutingError::InvalidRadius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_for_index_is_pure() {
        assert_eq!(name_for_index(0), "V000000");
        assert_eq!(name_for_index(123), name_for_index(123));
        assert_ne!(name_for_index(1), name_for_index(10));
    }

    #[test]
    fn test_name_for_index_beyond_padding() {
        assert_eq!(name_for_index(1_234_567), "V1234567");
    }

    #[test]
    fn test_check_radius() {
        assert!(check_radius(0.0).is_ok());
        assert!(check_radius(1.5).is_ok());
        assert!(check_radius(-0.1).is_err());
        assert!(check_radius(f64::NAN).is_err());
        assert!(check_radius(MAX_RADIUS).is_ok());
        assert!(check_radius(1e308).is_err());
        assert!(check_radius(f64::INFINITY).is_err());
    }
}
