//! Dense row-major arrays of noise samples.

use std::ops::Index;

/// A dense 1D, 2D, or 3D block of samples.
///
/// Values are stored with the first dimension outermost: the sample at
/// `(x, y, z)` lives at `(x * height + y) * depth + z`. Lower-dimensional grids
/// use `1` for their missing extents.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseGrid {
    dims: [usize; 3],
    values: Vec<f64>,
}

impl NoiseGrid {
    /// Evaluate `sample` once per position, first dimension outermost.
    pub(crate) fn generate(
        dims: [usize; 3],
        mut sample: impl FnMut(usize, usize, usize) -> f64,
    ) -> Self {
        let [width, height, depth] = dims;
        let mut values = Vec::with_capacity(width.saturating_mul(height).saturating_mul(depth));
        for x in 0..width {
            for y in 0..height {
                for z in 0..depth {
                    values.push(sample(x, y, z));
                }
            }
        }
        Self { dims, values }
    }

    /// Extents as `[width, height, depth]`.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims[0]
    }

    pub fn height(&self) -> usize {
        self.dims[1]
    }

    pub fn depth(&self) -> usize {
        self.dims[2]
    }

    /// Sample at `(x, y, z)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        let [width, height, depth] = self.dims;
        if x >= width || y >= height || z >= depth {
            return None;
        }
        self.values.get((x * height + y) * depth + z).copied()
    }

    /// Sample at `(x, y)` of a 2D grid.
    pub fn get_2d(&self, x: usize, y: usize) -> Option<f64> {
        self.get(x, y, 0)
    }

    /// All samples in storage order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<usize> for NoiseGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
