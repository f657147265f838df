//! Dense distance matrix.

use crate::error::{AcoError, AcoResult};

/// A dense n×n matrix of non-negative edge weights stored in row-major order.
///
/// The matrix is treated as a complete directed graph over town indices
/// `0..n`; the diagonal is carried but never read by the solver.
///
/// # Examples
///
/// ```
/// use u_antcolony::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 5.0, 2.0],
///     vec![5.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).expect("valid matrix");
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
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

    /// Creates a distance matrix from explicit rows.
    ///
    /// Every row must have as many columns as there are rows, and every
    /// weight must be a non-negative number.
    pub fn from_rows(rows: &[Vec<f64>]) -> AcoResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(AcoError::EmptyGraph);
        }

        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(AcoError::RaggedRow {
                    row: i,
                    expected: size,
                    actual: row.len(),
                });
            }
            for (j, &weight) in row.iter().enumerate() {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(AcoError::InvalidWeight {
                        from: i,
                        to: j,
                        weight,
                    });
                }
                data.push(weight);
            }
        }

        Ok(Self { data, size })
    }

    /// Creates a distance matrix from a flat row-major grid.
    ///
    /// `data` must hold exactly `size * size` non-negative numbers.
    pub fn from_data(size: usize, data: Vec<f64>) -> AcoResult<Self> {
        if size == 0 {
            return Err(AcoError::EmptyGraph);
        }
        if data.len() != size * size {
            return Err(AcoError::DataLength {
                expected: size * size,
                actual: data.len(),
            });
        }
        for (idx, &weight) in data.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AcoError::InvalidWeight {
                    from: idx / size,
                    to: idx % size,
                    weight,
                });
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the weight of the edge from town `from` to town `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the weight of the edge from town `from` to town `to`.
    pub fn set(&mut self, from: usize, to: usize, weight: f64) {
        self.data[from * self.size + to] = weight;
    }

    /// Number of towns in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a copy with `delta` added to every cell.
    ///
    /// The solver uses `offset(1.0)` so that no edge has zero length and the
    /// inverse-distance desirability term is always finite.
    #[must_use]
    pub fn offset(&self, delta: f64) -> Self {
        Self {
            data: self.data.iter().map(|w| w + delta).collect(),
            size: self.size,
        }
    }
}
