//! Slot handles.
//!
//! A [`SlotHandle`] encodes the physical location of one bound field
//! within a [`ParamArena`](crate::ParamArena): where it starts and how many
//! elements it spans. Resolving a handle is O(1).

use std::fmt;

/// Physical location of a bound field within the region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Element offset from the start of the region.
    pub(crate) offset: u32,
    /// Length of the slot in f64 elements.
    pub(crate) len: u32,
}

impl SlotHandle {
    pub(crate) fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Element offset from the start of the region.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the slot in f64 elements.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this slot spans no elements (an array field with fan-in 0).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last element of this slot.
    pub fn end(&self) -> u32 {
        self.offset + self.len
    }

    pub(crate) fn range(&self) -> std::ops::Range<usize> {
        self.offset as usize..self.end() as usize
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(off={}, len={})", self.offset, self.len)
    }
}
