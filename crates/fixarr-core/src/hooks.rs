//! The [`ElementHooks`] capability and its two stock implementations.
//!
//! A container never copies, releases, or compares elements directly for
//! the hook-aware operations (`insert_from`, teardown, `position`). It
//! goes through an `ElementHooks` implementation instead, which lets
//! element types that own nested resources supply a deep copy, a
//! cleanup step, or a custom notion of equality.

use std::fmt;

/// Customises how a container duplicates, releases, and matches elements.
///
/// # Contract
///
/// - `duplicate` MUST leave `dst` equivalent to `src`; `src` is never
///   modified.
/// - `release` is called exactly once per element the container drops or
///   displaces. It runs before the element's own `Drop`.
/// - `matches` MUST be deterministic for a given pair of values.
///
/// # Examples
///
/// Matching only on a key field:
///
/// ```
/// use fixarr_core::ElementHooks;
///
/// #[derive(Clone, Default)]
/// struct Entry {
///     key: u32,
///     payload: Vec<u8>,
/// }
///
/// struct ByKey;
///
/// impl ElementHooks<Entry> for ByKey {
///     fn duplicate(&self, dst: &mut Entry, src: &Entry) {
///         dst.clone_from(src);
///     }
///
///     fn release(&self, value: &mut Entry) {
///         value.payload.clear();
///     }
///
///     fn matches(&self, element: &Entry, key: &Entry) -> bool {
///         element.key == key.key
///     }
/// }
/// ```
pub trait ElementHooks<T> {
    /// Copy `src` into the slot `dst`.
    fn duplicate(&self, dst: &mut T, src: &T);

    /// Release resources held by `value` before it is dropped or overwritten.
    fn release(&self, value: &mut T);

    /// Whether `element` matches the search `key`.
    fn matches(&self, element: &T, key: &T) -> bool;
}

/// Plain value semantics: `Clone` to duplicate, nothing to release,
/// `PartialEq` to match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueHooks;

impl<T: Clone + PartialEq> ElementHooks<T> for ValueHooks {
    fn duplicate(&self, dst: &mut T, src: &T) {
        dst.clone_from(src);
    }

    fn release(&self, _value: &mut T) {}

    fn matches(&self, element: &T, key: &T) -> bool {
        element == key
    }
}

/// Boxed duplicate hook: `(destination, source)`.
pub type DuplicateFn<T> = Box<dyn Fn(&mut T, &T)>;
/// Boxed release hook.
pub type ReleaseFn<T> = Box<dyn Fn(&mut T)>;
/// Boxed match hook: `(element, key) -> matched`.
pub type MatchFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// A set of independently optional hook closures.
///
/// Any hook left unset falls back to [`ValueHooks`] behaviour, so a
/// `HookSet` with nothing installed behaves exactly like `ValueHooks`.
pub struct HookSet<T> {
    duplicate: Option<DuplicateFn<T>>,
    release: Option<ReleaseFn<T>>,
    matcher: Option<MatchFn<T>>,
}

impl<T> HookSet<T> {
    /// A hook set with no hooks installed.
    pub fn new() -> Self {
        Self {
            duplicate: None,
            release: None,
            matcher: None,
        }
    }

    /// Install a custom duplicate hook.
    pub fn with_duplicate(mut self, f: impl Fn(&mut T, &T) + 'static) -> Self {
        self.duplicate = Some(Box::new(f));
        self
    }

    /// Install a custom release hook.
    pub fn with_release(mut self, f: impl Fn(&mut T) + 'static) -> Self {
        self.release = Some(Box::new(f));
        self
    }

    /// Install a custom match hook.
    pub fn with_match(mut self, f: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.matcher = Some(Box::new(f));
        self
    }

    /// Replace or clear the duplicate hook.
    pub fn set_duplicate(&mut self, f: Option<DuplicateFn<T>>) {
        self.duplicate = f;
    }

    /// Replace or clear the release hook.
    pub fn set_release(&mut self, f: Option<ReleaseFn<T>>) {
        self.release = f;
    }

    /// Replace or clear the match hook.
    pub fn set_match(&mut self, f: Option<MatchFn<T>>) {
        self.matcher = f;
    }

    /// Whether a custom duplicate hook is installed.
    pub fn has_duplicate(&self) -> bool {
        self.duplicate.is_some()
    }

    /// Whether a custom release hook is installed.
    pub fn has_release(&self) -> bool {
        self.release.is_some()
    }

    /// Whether a custom match hook is installed.
    pub fn has_match(&self) -> bool {
        self.matcher.is_some()
    }
}

impl<T> Default for HookSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HookSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookSet")
            .field("duplicate", &self.has_duplicate())
            .field("release", &self.has_release())
            .field("match", &self.has_match())
            .finish()
    }
}

impl<T: Clone + PartialEq> ElementHooks<T> for HookSet<T> {
    fn duplicate(&self, dst: &mut T, src: &T) {
        match &self.duplicate {
            Some(f) => f(dst, src),
            None => ValueHooks.duplicate(dst, src),
        }
    }

    fn release(&self, value: &mut T) {
        if let Some(f) = &self.release {
            f(value);
        }
    }

    fn matches(&self, element: &T, key: &T) -> bool {
        match &self.matcher {
            Some(f) => f(element, key),
            None => ValueHooks.matches(element, key),
        }
    }
}
