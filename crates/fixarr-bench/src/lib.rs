//! Shared setup for fixarr benchmarks and walkthroughs.

#![forbid(unsafe_code)]

use fixarr::FixedArray;
use fixarr_test_utils::{Blob, BlobHooks};

/// Capacity used by the reference benchmark profile.
pub const REFERENCE_CAPACITY: usize = 10_000;

/// A zero-filled `u64` array of [`REFERENCE_CAPACITY`] slots.
pub fn reference_array() -> FixedArray<u64> {
    FixedArray::with_capacity(REFERENCE_CAPACITY, Some(&0))
        .expect("reference capacity is valid")
}

/// A [`Blob`] array of `capacity` slots with deep-copy hooks, each slot
/// holding `payload_len` bytes.
pub fn blob_array(capacity: usize, payload_len: usize) -> FixedArray<Blob, BlobHooks> {
    let fill = Blob {
        tag: 0,
        bytes: vec![0; payload_len],
    };
    FixedArray::with_capacity_and_hooks(capacity, Some(&fill), BlobHooks)
        .expect("blob capacity is valid")
}
