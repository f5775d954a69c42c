//! Error types for network construction and tour queries.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Unified error type.
///
/// Every variant reflects a structural precondition violation: the core
/// works on in-memory data only, so nothing here is transient or worth
/// retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A location that is not a member of the network was used.
    #[error("location '{name}' in '{region}' is not in the network")]
    UnknownLocation {
        /// Name of the offending location.
        name: String,
        /// Region of the offending location.
        region: String,
    },

    /// The same location was supplied twice when building a network.
    #[error("duplicate location '{name}' in '{region}'")]
    DuplicateLocation {
        /// Name of the duplicated location.
        name: String,
        /// Region of the duplicated location.
        region: String,
    },

    /// A polygon needs at least three vertices.
    #[error("a regular polygon needs at least 3 vertices, got {n}")]
    InvalidPolygon {
        /// Requested vertex count.
        n: usize,
    },

    /// Generator radius is negative or not finite.
    #[error("radius must be finite and non-negative, got {radius}")]
    InvalidRadius {
        /// Requested radius.
        radius: f64,
    },

    /// Polar coordinates outside `r >= 0`, `-pi <= theta <= pi`.
    #[error("invalid polar coordinates (r = {r}, theta = {theta})")]
    InvalidPolar {
        /// Radial distance.
        r: f64,
        /// Polar angle in radians.
        theta: f64,
    },

    /// Tour construction found no reachable destination while locations
    /// were still unvisited.
    #[error("no reachable destination from '{current}' with {unvisited} locations unvisited")]
    IncompleteNetwork {
        /// Name of the location the tour got stuck at.
        current: String,
        /// Number of locations left unvisited.
        unvisited: usize,
    },

    /// The travel-time provider has no value for this pair.
    #[error("no travel time from '{from}' to '{to}'")]
    MissingTravelTime {
        /// Origin name.
        from: String,
        /// Destination name.
        to: String,
    },

    /// The travel-time provider returned a negative or NaN value.
    #[error("invalid travel time {value} from '{from}' to '{to}'")]
    InvalidTravelTime {
        /// Origin name.
        from: String,
        /// Destination name.
        to: String,
        /// The rejected value.
        value: f64,
    },

    /// A travel-time matrix does not match the network size.
    #[error("travel-time matrix has size {actual}, expected {expected}")]
    MatrixSize {
        /// Number of locations in the network.
        expected: usize,
        /// Size of the supplied matrix.
        actual: usize,
    },

    /// A configuration value is out of range.
    #[error("configuration field '{field}' has invalid value {value}")]
    InvalidConfig {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
