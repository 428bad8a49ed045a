//! Dense pairwise distance matrix.

use crate::models::Location;

/// A dense n×n distance matrix in kilometers, stored in row-major order.
///
/// Built from location coordinates via great-circle distance, or from
/// explicit data for callers with their own metric. Entries are computed
/// once per run and the matrix is immutable afterward; the geodesic
/// constructor fills the upper triangle and mirrors it, so symmetry and a
/// zero diagonal hold by construction.
///
/// # Examples
///
/// ```
/// use geotour::models::Location;
/// use geotour::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new("0", "A", 0.0, 0.0).expect("valid"),
///     Location::new("1", "B", 0.0, 1.0).expect("valid"),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - dm.get(1, 0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the geodesic distance matrix for the given locations.
    ///
    /// Only the upper triangle is computed; the lower triangle is mirrored.
    /// Duplicate coordinates are legal and produce zero-distance entries.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_km(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
