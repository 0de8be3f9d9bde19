//! Stable handles into the store's traxel arena.

use std::fmt;

/// Position of a traxel in its store's arena.
///
/// The store is insert-only, so a handle stays valid until the store is
/// cleared. Handles are only meaningful for the store that issued them.
///
/// Handles are 32-bit, which caps a store at `u32::MAX + 1` traxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraxelHandle(u32);

impl TraxelHandle {
    /// `None` once `index` no longer fits a handle.
    pub(crate) fn new(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Arena slot index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TraxelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraxelHandle({})", self.0)
    }
}
