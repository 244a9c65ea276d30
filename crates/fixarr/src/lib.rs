//! Fixed-capacity, bounds-checked typed arrays.
//!
//! A [`FixedArray`] owns a single contiguous allocation whose capacity is
//! chosen once, at construction or at a one-time [`FixedArray::init`].
//! Every index-based operation is checked against that capacity and
//! reports failure as an [`ArrayError`] rather than touching memory it
//! does not own.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --init / with_capacity--> Initialized --get/insert*--> Initialized --drop--> gone
//! ```
//!
//! There is no transition back to uninitialized, and capacity never
//! changes: no growth, no removal, no compaction.
//!
//! # Element hooks
//!
//! Copies made through [`FixedArray::insert_from`], element teardown, and
//! [`FixedArray::position`] go through the container's [`ElementHooks`].
//! The default [`ValueHooks`] uses `Clone`, a no-op release, and
//! `PartialEq`; [`HookSet`] installs closures for any subset of the three.
//!
//! # Example
//!
//! ```
//! use fixarr::{ArrayError, FixedArray};
//!
//! let mut array = FixedArray::with_capacity(4, Some(&0)).unwrap();
//! array.insert(0, 1).unwrap();
//! array[0] = 2;
//! assert_eq!(array.get(0), Ok(&2));
//! assert_eq!(array.get(1), Ok(&0));
//! assert_eq!(
//!     array.get(5),
//!     Err(ArrayError::IndexOutOfRange { index: 5, capacity: 4 })
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod bounds;
pub mod config;
mod display;
mod storage;

// Public re-exports for the primary API surface.
pub use array::FixedArray;
pub use config::ArrayConfig;
pub use fixarr_core::{ArrayError, ElementHooks, HookSet, ValueHooks};
