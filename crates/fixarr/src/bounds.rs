//! Index validation shared by every element access.
//!
//! The only valid indices are `0..capacity`. `count` plays no part: a
//! slot is addressable whether or not the caller has counted it as used.

use fixarr_core::ArrayError;

/// Reject any `index >= capacity`.
#[inline]
pub fn check_index(index: usize, capacity: usize) -> Result<(), ArrayError> {
    if index >= capacity {
        return Err(ArrayError::IndexOutOfRange { index, capacity });
    }
    Ok(())
}

/// Boolean form of [`check_index`].
#[inline]
pub fn in_bounds(index: usize, capacity: usize) -> bool {
    check_index(index, capacity).is_ok()
}

/// Reject a caller-maintained count larger than `capacity`.
#[inline]
pub fn check_count(count: usize, capacity: usize) -> Result<(), ArrayError> {
    if count > capacity {
        return Err(ArrayError::CountOutOfRange { count, capacity });
    }
    Ok(())
}
