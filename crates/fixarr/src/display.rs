//! Human-readable rendering for diagnostics.
//!
//! The `Display` form lists capacity, count, and every slot in index
//! order. It is not a serialization format and is never parsed back.

use std::fmt;

use fixarr_core::ElementHooks;

use crate::array::FixedArray;

impl<T: fmt::Display, H: ElementHooks<T>> fmt::Display for FixedArray<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "array {{\n\tmax size: {}\n\tcount: {}\n\tdata: [",
            self.size(),
            self.count()
        )?;
        if let Ok(slots) = self.as_slice() {
            for (i, value) in slots.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
        }
        f.write_str("]\n}")
    }
}

impl<T: fmt::Debug, H: ElementHooks<T> + fmt::Debug> fmt::Debug for FixedArray<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("capacity", &self.size())
            .field("count", &self.count())
            .field("data", &self.as_slice().ok())
            .field("hooks", self.hooks())
            .finish()
    }
}
