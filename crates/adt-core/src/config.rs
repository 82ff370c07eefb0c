//! Resize configuration for growable sequences.

use crate::error::{ArrayError, ConfigError};

/// Configuration for the capacity policy of a `DynamicVector`.
///
/// Controls the initial allocation, the growth step taken when a push or
/// insert finds the backing array full, and the shrink step taken when
/// occupancy falls below a threshold. Validated at construction; all
/// values are immutable after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorConfig {
    /// Capacity of the backing array at construction.
    ///
    /// Default: 2. Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplier applied to the current length when the array is full.
    ///
    /// Default: 2 (capacity doubling). Must be at least 2.
    pub growth_factor: usize,

    /// Occupancy ratio below which the backing array is shrunk.
    ///
    /// Default: 0.55. Must be finite and strictly between 0 and 1.
    pub shrink_threshold: f64,

    /// Divisor applied to the capacity when shrinking.
    ///
    /// Default: 2 (capacity halving). Must be at least 2.
    pub shrink_divisor: usize,

    /// Floor for any computed capacity.
    ///
    /// Default: 1. Must be at least 1, since a backing array cannot be empty,
    /// and no larger than `initial_capacity`.
    pub min_capacity: usize,
}

impl VectorConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default shrink occupancy threshold.
    pub const DEFAULT_SHRINK_THRESHOLD: f64 = 0.55;

    /// Default shrink divisor.
    pub const DEFAULT_SHRINK_DIVISOR: usize = 2;

    /// Default capacity floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Create a config with the given initial capacity and default policy.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            shrink_threshold: Self::DEFAULT_SHRINK_THRESHOLD,
            shrink_divisor: Self::DEFAULT_SHRINK_DIVISOR,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }

    /// Check structural invariants.
    ///
    /// Returns the first violated invariant, in field declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::InvalidArgument {
                size: self.initial_capacity,
            }
            .into());
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::InvalidGrowthFactor {
                value: self.growth_factor,
            });
        }
        if !self.shrink_threshold.is_finite()
            || self.shrink_threshold <= 0.0
            || self.shrink_threshold >= 1.0
        {
            return Err(ConfigError::InvalidShrinkThreshold {
                value: self.shrink_threshold,
            });
        }
        if self.shrink_divisor < 2 {
            return Err(ConfigError::InvalidShrinkDivisor {
                value: self.shrink_divisor,
            });
        }
        if self.min_capacity == 0 {
            return Err(ConfigError::InvalidMinCapacity);
        }
        if self.min_capacity > self.initial_capacity {
            return Err(ConfigError::MinCapacityExceedsInitial {
                min_capacity: self.min_capacity,
                initial_capacity: self.initial_capacity,
            });
        }
        Ok(())
    }

    /// Capacity to grow to when `len` elements fill the backing array.
    pub fn grown_capacity(&self, len: usize) -> usize {
        len.saturating_mul(self.growth_factor).max(self.min_capacity)
    }

    /// Whether `len` live elements under-occupy `capacity` slots.
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        (len as f64) < capacity as f64 * self.shrink_threshold
    }

    /// Capacity to shrink to from `capacity` while holding `len` elements.
    ///
    /// The result lies in `len..=capacity` for any `len <= capacity`: for
    /// large capacities the threshold admits lengths above
    /// `capacity / shrink_divisor`, and a shrink never raises capacity.
    pub fn shrunk_capacity(&self, capacity: usize, len: usize) -> usize {
        (capacity / self.shrink_divisor)
            .max(self.min_capacity)
            .max(len)
            .min(capacity)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
