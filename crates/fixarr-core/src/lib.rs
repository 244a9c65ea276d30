//! Core types and traits for the fixarr container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error type shared by every container operation and the
//! [`ElementHooks`] capability used to customise how elements are
//! copied, released, and compared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hooks;

pub use error::ArrayError;
pub use hooks::{ElementHooks, HookSet, ValueHooks};
