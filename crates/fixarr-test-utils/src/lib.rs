//! Test fixtures and instrumented hooks for fixarr development.
//!
//! Provides [`Blob`], an element type that owns a nested heap
//! allocation, and [`CountingHooks`], an [`ElementHooks`] implementation
//! that records how often each hook runs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

use fixarr_core::ElementHooks;

/// Element type owning a nested allocation, for deep-copy scenarios.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blob {
    pub tag: u32,
    pub bytes: Vec<u8>,
}

impl Blob {
    pub fn new(tag: u32, bytes: &[u8]) -> Self {
        Self {
            tag,
            bytes: bytes.to_vec(),
        }
    }
}

/// Shared tallies of hook invocations.
///
/// Cloned into a [`CountingHooks`] before the hooks move into a
/// container, so tests can still read the counts after the container
/// is dropped.
#[derive(Debug, Default)]
pub struct HookCounters {
    duplicates: Cell<usize>,
    releases: Cell<usize>,
    matches: Cell<usize>,
}

impl HookCounters {
    pub fn duplicates(&self) -> usize {
        self.duplicates.get()
    }

    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    pub fn matches(&self) -> usize {
        self.matches.get()
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// Value-semantics hooks that count every call.
#[derive(Clone, Debug, Default)]
pub struct CountingHooks {
    counters: Rc<HookCounters>,
}

impl CountingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared counters.
    pub fn counters(&self) -> Rc<HookCounters> {
        Rc::clone(&self.counters)
    }
}

impl<T: Clone + PartialEq> ElementHooks<T> for CountingHooks {
    fn duplicate(&self, dst: &mut T, src: &T) {
        bump(&self.counters.duplicates);
        dst.clone_from(src);
    }

    fn release(&self, _value: &mut T) {
        bump(&self.counters.releases);
    }

    fn matches(&self, element: &T, key: &T) -> bool {
        bump(&self.counters.matches);
        element == key
    }
}

/// Hooks for [`Blob`] that deep-copy, clear the payload on release, and
/// match on tag alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlobHooks;

impl ElementHooks<Blob> for BlobHooks {
    fn duplicate(&self, dst: &mut Blob, src: &Blob) {
        dst.tag = src.tag;
        dst.bytes.clear();
        dst.bytes.extend_from_slice(&src.bytes);
    }

    fn release(&self, value: &mut Blob) {
        value.bytes = Vec::new();
    }

    fn matches(&self, element: &Blob, key: &Blob) -> bool {
        element.tag == key.tag
    }
}
