//! Dense travel-time matrix.

use crate::error::{RoutingError, RoutingResult};
use crate::models::Location;

use super::TravelTimeProvider;

/// A dense n×n travel-time lookup stored in row-major order.
///
/// Entries may be missing, and the matrix need not be symmetric. The
/// diagonal is always zero. Used for travel times supplied from outside
/// rather than derived from positions.
///
/// # Examples
///
/// ```
/// use u_depot::distance::TravelTimeMatrix;
///
/// let mut tm = TravelTimeMatrix::new(3);
/// tm.set(0, 1, 5.0);
/// assert_eq!(tm.get(0, 1), Some(5.0));
/// assert_eq!(tm.get(1, 0), None);
/// assert_eq!(tm.get(2, 2), Some(0.0));
/// assert_eq!(tm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimeMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl TravelTimeMatrix {
    /// Creates a matrix of the given size with only the diagonal filled.
    pub fn new(size: usize) -> Self {
        let mut data = vec![None; size * size];
        for i in 0..size {
            data[i * size + i] = Some(0.0);
        }
        Self { data, size }
    }

    /// Computes a complete Euclidean matrix from location positions.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut tm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                tm.set(i, j, d);
                tm.set(j, i, d);
            }
        }
        tm
    }

    /// Creates a complete matrix from an explicit n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size`. Diagonal
    /// entries are forced to zero.
    pub fn from_data(size: usize, data: Vec<f64>) -> RoutingResult<Self> {
        if data.len() != size * size {
            return Err(RoutingError::MatrixSize {
                expected: size * size,
                actual: data.len(),
            });
        }
        let mut data: Vec<Option<f64>> = data.into_iter().map(Some).collect();
        for i in 0..size {
            data[i * size + i] = Some(0.0);
        }
        Ok(Self { data, size })
    }

    /// Returns the travel time from `from` to `to`, if known.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from `from` to `to`.
    ///
    /// Writes to the diagonal are ignored. `+inf` is stored as given and
    /// read back by a network as a gap.
    pub fn set(&mut self, from: usize, to: usize, time: f64) {
        if from != to {
            self.data[from * self.size + to] = Some(time);
        }
    }

    /// Removes the entry from `from` to `to`, leaving a gap.
    pub fn clear(&mut self, from: usize, to: usize) {
        if from != to {
            self.data[from * self.size + to] = None;
        }
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if every off-diagonal entry is present.
    pub fn is_complete(&self) -> bool {
        self.data.iter().all(Option::is_some)
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// A gap only matches a gap.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                match (self.get(i, j), self.get(j, i)) {
                    (Some(a), Some(b)) if (a - b).abs() <= tol => {}
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl TravelTimeProvider for TravelTimeMatrix {
    fn travel_time(&self, _locations: &[Location], from: usize, to: usize) -> Option<f64> {
        self.get(from, to)
    }

    fn prepare(&mut self, locations: &[Location]) -> RoutingResult<()> {
        if self.size != locations.len() {
            return Err(RoutingError::MatrixSize {
                expected: locations.len(),
                actual: self.size,
            });
        }
        Ok(())
    }

    fn infinite_is_gap(&self) -> bool {
        true
    }
}
