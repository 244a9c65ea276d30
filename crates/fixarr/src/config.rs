//! Array configuration parameters.

use fixarr_core::ArrayError;

/// Configuration for a [`FixedArray`](crate::FixedArray).
///
/// Validated when handed to
/// [`FixedArray::from_config`](crate::FixedArray::from_config); the
/// resulting container never changes its capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of element slots to allocate.
    ///
    /// Must be at least [`ArrayConfig::MIN_CAPACITY`].
    pub capacity: usize,
}

impl ArrayConfig {
    /// Smallest capacity a container accepts.
    pub const MIN_CAPACITY: usize = 2;

    /// Create a config for the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the capacity against [`ArrayConfig::MIN_CAPACITY`].
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.capacity < Self::MIN_CAPACITY {
            return Err(ArrayError::InvalidCapacity {
                requested: self.capacity,
                minimum: Self::MIN_CAPACITY,
            });
        }
        Ok(())
    }

    /// Size in bytes of a backing buffer of `T`, or `None` on overflow.
    pub fn bytes_for<T>(&self) -> Option<usize> {
        self.capacity.checked_mul(std::mem::size_of::<T>())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::MIN_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_minimum_capacity() {
        let config = ArrayConfig::default();
        assert_eq!(config.capacity, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_and_one_are_rejected() {
        for capacity in [0, 1] {
            assert_eq!(
                ArrayConfig::new(capacity).validate(),
                Err(ArrayError::InvalidCapacity {
                    requested: capacity,
                    minimum: 2,
                })
            );
        }
    }

    #[test]
    fn bytes_for_scales_with_element_size() {
        let config = ArrayConfig::new(10);
        assert_eq!(config.bytes_for::<u8>(), Some(10));
        assert_eq!(config.bytes_for::<u64>(), Some(80));
        assert_eq!(config.bytes_for::<()>(), Some(0));
    }

    #[test]
    fn bytes_for_reports_overflow() {
        let config = ArrayConfig::new(usize::MAX);
        assert_eq!(config.bytes_for::<u32>(), None);
    }
}
