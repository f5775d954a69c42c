//! Location and position types.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// Maps both zeros onto `+0.0` so bitwise comparison matches numeric
/// comparison everywhere except NaN.
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// A point in the plane.
///
/// Equality is exact: two positions are equal when their coordinates have
/// identical bit patterns after mapping `-0.0` to `0.0`. This keeps `==`
/// reflexive even for NaN coordinates, so it is a true equivalence relation.
///
/// # Examples
///
/// ```
/// use u_depot::models::Position;
///
/// let a = Position::new(0.0, 0.0);
/// let b = Position::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(Position::new(-0.0, 0.0), a);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Creates a position from Cartesian coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: canonical(x),
            y: canonical(y),
        }
    }

    /// Creates a position from polar coordinates.
    ///
    /// Fails unless `r >= 0` and `-pi <= theta <= pi`.
    pub fn polar(r: f64, theta: f64) -> RoutingResult<Self> {
        if !(r >= 0.0 && r.is_finite() && (-PI..=PI).contains(&theta)) {
            return Err(RoutingError::InvalidPolar { r, theta });
        }
        Ok(Self::new(r * theta.cos(), r * theta.sin()))
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another position.
    ///
    /// Finite whenever both coordinate differences are finite.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    fn bits(&self) -> (u64, u64) {
        (canonical(self.x).to_bits(), canonical(self.y).to_bits())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.x)
            .total_cmp(&canonical(other.x))
            .then_with(|| canonical(self.y).total_cmp(&canonical(other.y)))
    }
}

/// A named place in a [`Network`](super::Network).
///
/// Locations are immutable once built. Two locations are equal only if
/// `name`, `region` and `position` are all identical; there is no
/// tolerance. A tolerance-based comparison would break transitivity
/// (`a ~ b` and `b ~ c` do not imply `a ~ c`), so if one is ever needed it
/// must live in a separately named comparator, never in `==`.
///
/// The ordering compares `name` byte-wise, then `region`, then position.
/// The first two keys are the tie-break law used when several destinations
/// are equally fast; the position key only keeps `Ord` consistent with `Eq`.
///
/// # Examples
///
/// ```
/// use u_depot::models::{Location, Position};
///
/// let z = Location::new("Anvard", "North", Position::new(0.0, 5.0));
/// let y = Location::new("Anvard", "South", Position::new(0.0, 5.0));
/// assert!(z < y);
/// assert_ne!(z, y);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    name: String,
    region: String,
    position: Position,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, region: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            position,
        }
    }

    /// Creates a location from polar coordinates.
    pub fn polar(
        name: impl Into<String>,
        region: impl Into<String>,
        r: f64,
        theta: f64,
    ) -> RoutingResult<Self> {
        Ok(Self::new(name, region, Position::polar(r, theta)?))
    }

    /// Location name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region the location belongs to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Planar position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// The `(name, region)` pair that decides ties between equally fast trips.
    pub fn tie_break_key(&self) -> (&str, &str) {
        (&self.name, &self.region)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.region == other.region && self.position == other.position
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.region.hash(state);
        self.position.hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tie_break_key()
            .cmp(&other.tie_break_key())
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} @ ({:.2}, {:.2})",
            self.name, self.region, self.position.x, self.position.y
        )
    }
}
