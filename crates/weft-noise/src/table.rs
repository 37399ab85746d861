//! Fixed-size table of bounded random integers backing white noise.

use rand::Rng;

use crate::error::NoiseError;

/// Number of entries in every [`RandomTable`].
pub const TABLE_SIZE: usize = 1024;

/// Default lower bound for table entries.
pub const DEFAULT_MIN_VALUE: u32 = 0;

/// Default upper bound for table entries.
pub const DEFAULT_MAX_VALUE: u32 = u32::MAX - 1;

/// A fixed table of [`TABLE_SIZE`] integers in `[min_value, max_value]`.
///
/// Built once and never mutated. Lookups normalize an entry into `[0, 1]`
/// with `(entry - min_value) / (max_value - min_value)`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomTable {
    values: Box<[u32; TABLE_SIZE]>,
    min_value: u32,
    max_value: u32,
    scale_factor: f64,
}

impl RandomTable {
    /// Fill a table with [`TABLE_SIZE`] uniform draws in `[min_value, max_value]`.
    ///
    /// Consumes exactly [`TABLE_SIZE`] bounded draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`] if `max_value <= min_value`.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        min_value: u32,
        max_value: u32,
    ) -> Result<Self, NoiseError> {
        let scale_factor = scale_factor(min_value, max_value)?;
        Ok(Self::fill(rng, min_value, max_value, scale_factor))
    }

    /// Fill a table using [`DEFAULT_MIN_VALUE`] and [`DEFAULT_MAX_VALUE`].
    pub fn with_default_bounds<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::fill(rng, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, DEFAULT_SCALE_FACTOR)
    }

    /// Build a table from explicit entries, clamping each into `[min_value, max_value]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`] if `max_value <= min_value`.
    pub fn from_values(
        values: [u32; TABLE_SIZE],
        min_value: u32,
        max_value: u32,
    ) -> Result<Self, NoiseError> {
        let scale_factor = scale_factor(min_value, max_value)?;
        let mut values = Box::new(values);
        for value in values.iter_mut() {
            *value = (*value).clamp(min_value, max_value);
        }
        Ok(Self {
            values,
            min_value,
            max_value,
            scale_factor,
        })
    }

    fn fill<R: Rng + ?Sized>(
        rng: &mut R,
        min_value: u32,
        max_value: u32,
        scale_factor: f64,
    ) -> Self {
        let mut values = Box::new([0u32; TABLE_SIZE]);
        for value in values.iter_mut() {
            *value = rng.random_range(min_value..=max_value);
        }
        log::debug!("Filled random table: {TABLE_SIZE} entries in [{min_value}, {max_value}]");
        Self {
            values,
            min_value,
            max_value,
            scale_factor,
        }
    }

    /// Entry at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Entry at `index % TABLE_SIZE`, normalized into `[0, 1]`.
    #[inline]
    pub fn normalized(&self, index: usize) -> f64 {
        let entry = self.values[index % TABLE_SIZE];
        f64::from(entry - self.min_value) * self.scale_factor
    }

    /// Lower bound of the entries.
    pub fn min_value(&self) -> u32 {
        self.min_value
    }

    /// Upper bound of the entries.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// `1 / (max_value - min_value)`.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Always [`TABLE_SIZE`].
    pub fn len(&self) -> usize {
        TABLE_SIZE
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All entries in table order.
    pub fn values(&self) -> &[u32] {
        &self.values[..]
    }
}

const _: () = assert!(DEFAULT_MAX_VALUE > DEFAULT_MIN_VALUE);

const DEFAULT_SCALE_FACTOR: f64 = unit_scale(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE);

fn scale_factor(min_value: u32, max_value: u32) -> Result<f64, NoiseError> {
    if max_value <= min_value {
        return Err(NoiseError::InvalidConfiguration {
            min_value,
            max_value,
        });
    }
    Ok(unit_scale(min_value, max_value))
}

/// `1 / (max - min)`; callers guarantee `max > min`.
const fn unit_scale(min_value: u32, max_value: u32) -> f64 {
    1.0 / (max_value - min_value) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seeded_rng;

    #[test]
    fn test_entries_within_bounds() {
        let table = RandomTable::new(&mut seeded_rng(3), 100, 200).unwrap();
        assert_eq!(table.len(), TABLE_SIZE);
        for &value in table.values() {
            assert!((100..=200).contains(&value), "Entry {value} outside [100, 200]");
        }
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let equal = RandomTable::new(&mut seeded_rng(0), 5, 5);
        assert_eq!(
            equal,
            Err(NoiseError::InvalidConfiguration {
                min_value: 5,
                max_value: 5
            })
        );

        let inverted = RandomTable::from_values([0; TABLE_SIZE], 10, 1);
        assert!(matches!(
            inverted,
            Err(NoiseError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_from_values_clamps() {
        let mut values = [500; TABLE_SIZE];
        values[1] = 5;
        values[2] = 5000;
        let table = RandomTable::from_values(values, 10, 999).unwrap();
        assert_eq!(table.get(0), Some(500));
        assert_eq!(table.get(1), Some(10));
        assert_eq!(table.get(2), Some(999));
        assert_eq!(table.get(TABLE_SIZE), None);
    }

    #[test]
    fn test_normalized_range() {
        let mut values = [0; TABLE_SIZE];
        values[1] = 999;
        values[2] = 500;
        let table = RandomTable::from_values(values, 0, 999).unwrap();
        assert_eq!(table.normalized(0), 0.0);
        assert_eq!(table.normalized(1), 1.0);
        assert!((table.normalized(2) - 500.0 / 999.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = RandomTable::new(&mut seeded_rng(99), 0, 1000).unwrap();
        let b = RandomTable::new(&mut seeded_rng(99), 0, 1000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_bounds() {
        let table = RandomTable::with_default_bounds(&mut seeded_rng(1));
        assert_eq!(table.min_value(), DEFAULT_MIN_VALUE);
        assert_eq!(table.max_value(), DEFAULT_MAX_VALUE);
        assert_eq!(
            table.scale_factor(),
            1.0 / f64::from(DEFAULT_MAX_VALUE - DEFAULT_MIN_VALUE)
        );
    }

    #[test]
    fn test_default_bounds_match_checked_constructor() {
        let defaulted = RandomTable::with_default_bounds(&mut seeded_rng(12));
        let checked =
            RandomTable::new(&mut seeded_rng(12), DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE).unwrap();
        assert_eq!(defaulted, checked);
        assert_eq!(defaulted.scale_factor(), checked.scale_factor());
    }
}
