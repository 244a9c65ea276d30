//! The [`FixedArray`] container.

use std::ops::{Index, IndexMut};

use fixarr_core::{ArrayError, ElementHooks, ValueHooks};

use crate::bounds;
use crate::config::ArrayConfig;
use crate::storage::Storage;

/// A capacity-bounded, index-addressable container over one allocation.
///
/// A `FixedArray` is either uninitialized (no storage, capacity 0) or
/// initialized (storage for `capacity >= 2` elements). Initialization
/// happens exactly once, through one of the `with_capacity*`
/// constructors or through [`FixedArray::init`] on a default-constructed
/// instance.
///
/// `count` is bookkeeping owned by the caller: `insert` and `get` never
/// change it. Use [`FixedArray::set_count`] to maintain it.
pub struct FixedArray<T, H: ElementHooks<T> = ValueHooks> {
    storage: Option<Storage<T>>,
    count: usize,
    hooks: H,
}

impl<T: Clone + PartialEq> FixedArray<T> {
    /// Create an uninitialized array with value-semantics hooks.
    pub fn new() -> Self {
        Self::with_hooks(ValueHooks)
    }

    /// Create and initialize an array of `capacity` slots.
    ///
    /// Every slot holds a clone of `initial`, or `T::default()` when no
    /// initial value is given.
    pub fn with_capacity(capacity: usize, initial: Option<&T>) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        Self::with_capacity_and_hooks(capacity, initial, ValueHooks)
    }
}

impl<T, H: ElementHooks<T>> FixedArray<T, H> {
    /// Create an uninitialized array that will use `hooks`.
    pub fn with_hooks(hooks: H) -> Self {
        Self {
            storage: None,
            count: 0,
            hooks,
        }
    }

    /// Create and initialize an array of `capacity` slots using `hooks`.
    pub fn with_capacity_and_hooks(
        capacity: usize,
        initial: Option<&T>,
        hooks: H,
    ) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        let mut array = Self::with_hooks(hooks);
        array.init(capacity, initial)?;
        Ok(array)
    }

    /// Create and initialize an array from a validated [`ArrayConfig`].
    pub fn from_config(
        config: &ArrayConfig,
        initial: Option<&T>,
        hooks: H,
    ) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        config.validate()?;
        Self::with_capacity_and_hooks(config.capacity, initial, hooks)
    }

    /// Allocate storage for `capacity` slots. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` if this array already owns storage; the
    ///   existing contents are left untouched.
    /// - `InvalidCapacity` if `capacity < 2`.
    /// - `AllocationFailure` if the buffer cannot be obtained.
    pub fn init(&mut self, capacity: usize, initial: Option<&T>) -> Result<(), ArrayError>
    where
        T: Clone + Default,
    {
        if let Some(storage) = &self.storage {
            tracing::debug!(
                capacity = storage.capacity(),
                requested = capacity,
                "rejected re-initialization of fixed array"
            );
            return Err(ArrayError::AlreadyInitialized {
                capacity: storage.capacity(),
            });
        }
        ArrayConfig::new(capacity).validate()?;

        let storage = match initial {
            Some(value) => Storage::allocate(capacity, || value.clone()),
            None => Storage::allocate(capacity, T::default),
        }
        .inspect_err(|err| tracing::debug!(%err, "fixed array allocation failed"))?;

        tracing::debug!(
            capacity,
            type_size = std::mem::size_of::<T>(),
            bytes = storage.memory_bytes(),
            "fixed array initialized"
        );
        self.storage = Some(storage);
        self.count = 0;
        Ok(())
    }

    /// Whether this array owns storage.
    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.storage()?.slot(index)
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.storage_mut()?.slot_mut(index)
    }

    /// Move `value` into the slot at `index`.
    ///
    /// The displaced element is passed to the release hook first. On
    /// error nothing is written and `value` is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let storage = self.storage.as_mut().ok_or(ArrayError::NotInitialized)?;
        let slot = storage.slot_mut(index)?;
        self.hooks.release(slot);
        *slot = value;
        Ok(())
    }

    /// [`insert`](Self::insert), panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the [`ArrayError`] message if the array is not
    /// initialized or `index` is out of range.
    #[track_caller]
    pub fn must_insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.insert(index, value) {
            panic!("{err}");
        }
    }

    /// Copy `*src` into the slot at `index` through the duplicate hook.
    ///
    /// The displaced element is passed to the release hook first.
    pub fn insert_from(&mut self, index: usize, src: &T) -> Result<(), ArrayError> {
        let storage = self.storage.as_mut().ok_or(ArrayError::NotInitialized)?;
        let slot = storage.slot_mut(index)?;
        self.hooks.release(slot);
        self.hooks.duplicate(slot, src);
        Ok(())
    }

    /// Index of the first slot whose element matches `key`, according to
    /// the match hook. Every slot up to `capacity` is searched.
    pub fn position(&self, key: &T) -> Result<Option<usize>, ArrayError> {
        let storage = self.storage()?;
        Ok(storage
            .as_slice()
            .iter()
            .position(|element| self.hooks.matches(element, key)))
    }

    /// Caller-maintained count of used slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the caller-maintained count.
    pub fn set_count(&mut self, count: usize) -> Result<(), ArrayError> {
        let capacity = self.storage()?.capacity();
        bounds::check_count(count, capacity)?;
        self.count = count;
        Ok(())
    }

    /// Number of slots; 0 while uninitialized.
    pub fn size(&self) -> usize {
        self.storage.as_ref().map_or(0, Storage::capacity)
    }

    /// Alias for [`size`](Self::size).
    pub fn capacity(&self) -> usize {
        self.size()
    }

    /// Size of one element in bytes; 0 while uninitialized.
    pub fn type_size(&self) -> usize {
        if self.is_initialized() {
            std::mem::size_of::<T>()
        } else {
            0
        }
    }

    /// Memory held by the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.as_ref().map_or(0, Storage::memory_bytes)
    }

    /// Every slot, in index order.
    pub fn as_slice(&self) -> Result<&[T], ArrayError> {
        Ok(self.storage()?.as_slice())
    }

    /// The installed hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the installed hooks.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    fn storage(&self) -> Result<&Storage<T>, ArrayError> {
        self.storage.as_ref().ok_or(ArrayError::NotInitialized)
    }

    fn storage_mut(&mut self) -> Result<&mut Storage<T>, ArrayError> {
        self.storage.as_mut().ok_or(ArrayError::NotInitialized)
    }
}

impl<T, H: ElementHooks<T> + Default> Default for FixedArray<T, H> {
    fn default() -> Self {
        Self::with_hooks(H::default())
    }
}

impl<T, H: ElementHooks<T>> Drop for FixedArray<T, H> {
    fn drop(&mut self) {
        if let Some(storage) = self.storage.as_mut() {
            for slot in storage.as_mut_slice() {
                self.hooks.release(slot);
            }
        }
    }
}

impl<T, H: ElementHooks<T>> Index<usize> for FixedArray<T, H> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, H: ElementHooks<T>> IndexMut<usize> for FixedArray<T, H> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
