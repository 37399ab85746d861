//! The sampling contract shared by every noise source.

use std::sync::Arc;

use crate::grid::NoiseGrid;

/// A deterministic noise field returning values in `[0, 1]`.
///
/// Implementors supply continuous 1D/2D/3D sampling; lattice addressing and
/// array generation are derived from those. Implementations must be pure
/// functions of their coordinates, which is what makes sharing across threads
/// sound.
pub trait NoiseSampler: Send + Sync {
    /// Sample the field along one axis.
    fn sample_1d(&self, x: f64) -> f64;

    /// Sample the field in the plane.
    fn sample_2d(&self, x: f64, y: f64) -> f64;

    /// Sample the field in space.
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64;

    /// Sample at integer lattice position `ix`, pre-multiplied by `scale`.
    ///
    /// Identical to `sample_1d(ix as f64 * scale)`. Pass `1.0` for unscaled.
    fn sample_lattice_1d(&self, ix: i64, scale: f64) -> f64 {
        self.sample_1d(ix as f64 * scale)
    }

    /// 2D form of [`NoiseSampler::sample_lattice_1d`].
    fn sample_lattice_2d(&self, ix: i64, iy: i64, scale: f64) -> f64 {
        self.sample_2d(ix as f64 * scale, iy as f64 * scale)
    }

    /// 3D form of [`NoiseSampler::sample_lattice_1d`].
    fn sample_lattice_3d(&self, ix: i64, iy: i64, iz: i64, scale: f64) -> f64 {
        self.sample_3d(ix as f64 * scale, iy as f64 * scale, iz as f64 * scale)
    }

    /// `width` lattice samples starting at the origin.
    fn calculate_array_1d(&self, width: usize, scale: f64) -> NoiseGrid {
        NoiseGrid::generate([width, 1, 1], |x, _, _| self.sample_lattice_1d(x as i64, scale))
    }

    /// `width * height` lattice samples, `x` outermost.
    fn calculate_array_2d(&self, width: usize, height: usize, scale: f64) -> NoiseGrid {
        NoiseGrid::generate([width, height, 1], |x, y, _| {
            self.sample_lattice_2d(x as i64, y as i64, scale)
        })
    }

    /// `width * height * depth` lattice samples, `x` outermost.
    fn calculate_array_3d(
        &self,
        width: usize,
        height: usize,
        depth: usize,
        scale: f64,
    ) -> NoiseGrid {
        NoiseGrid::generate([width, height, depth], |x, y, z| {
            self.sample_lattice_3d(x as i64, y as i64, z as i64, scale)
        })
    }
}

impl<T: NoiseSampler + ?Sized> NoiseSampler for &T {
    fn sample_1d(&self, x: f64) -> f64 {
        (**self).sample_1d(x)
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        (**self).sample_2d(x, y)
    }

    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample_3d(x, y, z)
    }
}

impl<T: NoiseSampler + ?Sized> NoiseSampler for Box<T> {
    fn sample_1d(&self, x: f64) -> f64 {
        (**self).sample_1d(x)
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        (**self).sample_2d(x, y)
    }

    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample_3d(x, y, z)
    }
}

impl<T: NoiseSampler + ?Sized> NoiseSampler for Arc<T> {
    fn sample_1d(&self, x: f64) -> f64 {
        (**self).sample_1d(x)
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        (**self).sample_2d(x, y)
    }

    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Field that echoes its first coordinate, for checking delegation.
    struct Echo;

    impl NoiseSampler for Echo {
        fn sample_1d(&self, x: f64) -> f64 {
            x
        }

        fn sample_2d(&self, x: f64, y: f64) -> f64 {
            x + y * 1000.0
        }

        fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
            x + y * 1000.0 + z * 1_000_000.0
        }
    }

    #[test]
    fn test_lattice_premultiplies_scale() {
        assert_eq!(Echo.sample_lattice_1d(3, 0.5), 1.5);
        assert_eq!(Echo.sample_lattice_2d(2, 4, 0.25), 0.5 + 1000.0);
        assert_eq!(
            Echo.sample_lattice_3d(1, 1, 1, 2.0),
            2.0 + 2000.0 + 2_000_000.0
        );
    }

    #[test]
    fn test_array_2d_order() {
        let grid = Echo.calculate_array_2d(2, 3, 1.0);
        assert_eq!(grid.dims(), [2, 3, 1]);
        assert_eq!(grid.values(), &[0.0, 1000.0, 2000.0, 1.0, 1001.0, 2001.0]);
    }

    #[test]
    fn test_array_3d_matches_lattice() {
        let grid = Echo.calculate_array_3d(2, 2, 2, 0.5);
        for x in 0..2 {
            for y in 0..2 {
                for z in 0..2 {
                    assert_eq!(
                        grid.get(x, y, z),
                        Some(Echo.sample_lattice_3d(x as i64, y as i64, z as i64, 0.5))
                    );
                }
            }
        }
    }

    fn sample_all<S: NoiseSampler>(sampler: S) -> [f64; 3] {
        [
            sampler.sample_1d(7.0),
            sampler.sample_2d(1.0, 1.0),
            sampler.sample_3d(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_pointers_forward() {
        let expected = [7.0, 1001.0, 1_000_000.0];
        assert_eq!(sample_all(&Echo), expected);
        assert_eq!(sample_all(Box::new(Echo) as Box<dyn NoiseSampler>), expected);
        assert_eq!(sample_all(Arc::new(Echo) as Arc<dyn NoiseSampler>), expected);
    }
}
