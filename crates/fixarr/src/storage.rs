//! Owned contiguous backing storage.
//!
//! A [`Storage`] is a single heap allocation of exactly `capacity`
//! initialised elements. It is allocated once and released when dropped;
//! there is no growth path.

use fixarr_core::ArrayError;

use crate::bounds;

/// Fixed-length backing buffer for one container.
pub(crate) struct Storage<T> {
    slots: Box<[T]>,
}

impl<T> Storage<T> {
    /// Allocate `capacity` slots, initialising each with `fill()`.
    ///
    /// Returns `AllocationFailure` if the byte size overflows or the
    /// allocator refuses the reservation. The allocation is fallible so
    /// that an oversized request surfaces as an error, not an abort.
    pub(crate) fn allocate(
        capacity: usize,
        mut fill: impl FnMut() -> T,
    ) -> Result<Self, ArrayError> {
        let type_size = std::mem::size_of::<T>();
        let failure = ArrayError::AllocationFailure {
            capacity,
            type_size,
        };
        match capacity.checked_mul(type_size) {
            Some(bytes) if bytes <= isize::MAX as usize => {}
            _ => return Err(failure),
        }

        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            return Err(failure);
        }
        slots.extend((0..capacity).map(|_| fill()));
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Bounds-checked shared access.
    pub(crate) fn slot(&self, index: usize) -> Result<&T, ArrayError> {
        bounds::check_index(index, self.slots.len())?;
        Ok(&self.slots[index])
    }

    /// Bounds-checked mutable access.
    pub(crate) fn slot_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        bounds::check_index(index, self.slots.len())?;
        Ok(&mut self.slots[index])
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Memory usage of the backing buffer in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<T>()
    }
}
