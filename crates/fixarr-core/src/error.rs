//! Error types for fixed-capacity array operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur when initializing or accessing a `FixedArray`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested capacity is below the minimum a container accepts.
    InvalidCapacity {
        /// Capacity passed by the caller.
        requested: usize,
        /// Smallest accepted capacity.
        minimum: usize,
    },
    /// `init` was called on a container that already owns storage.
    AlreadyInitialized {
        /// Capacity of the existing allocation.
        capacity: usize,
    },
    /// An element operation was attempted before initialization.
    NotInitialized,
    /// The backing storage could not be obtained, either because the
    /// byte size overflows `usize` or the allocator refused the request.
    AllocationFailure {
        /// Number of elements requested.
        capacity: usize,
        /// Size of one element in bytes.
        type_size: usize,
    },
    /// An index at or beyond the container's capacity.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Capacity of the container.
        capacity: usize,
    },
    /// A caller-maintained count larger than the container's capacity.
    CountOutOfRange {
        /// The rejected count.
        count: usize,
        /// Capacity of the container.
        capacity: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested, minimum } => {
                write!(
                    f,
                    "invalid capacity {requested}: must be at least {minimum}"
                )
            }
            Self::AlreadyInitialized { capacity } => {
                write!(
                    f,
                    "array already initialized with capacity {capacity}"
                )
            }
            Self::NotInitialized => write!(f, "array is not initialized"),
            Self::AllocationFailure {
                capacity,
                type_size,
            } => {
                write!(
                    f,
                    "failed to allocate {capacity} elements of {type_size} bytes"
                )
            }
            Self::IndexOutOfRange { index, capacity } => {
                write!(
                    f,
                    "index {index} out of range for array of capacity {capacity}"
                )
            }
            Self::CountOutOfRange { count, capacity } => {
                write!(
                    f,
                    "count {count} exceeds array capacity {capacity}"
                )
            }
        }
    }
}

impl Error for ArrayError {}
