//! Typed views onto bound slots.
//!
//! Views are plain handles: they carry no borrow of the region, so a unit
//! can hold many of them while the region is passed around mutably. Every
//! read or write goes through the [`ParamArena`] they were bound in.

use neurite_arena::{ParamArena, SlotHandle};

/// A single bound `f64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarSlot(SlotHandle);

impl ScalarSlot {
    pub(crate) fn new(handle: SlotHandle) -> Self {
        debug_assert_eq!(handle.len(), 1);
        Self(handle)
    }

    /// Current value.
    pub fn get(&self, arena: &ParamArena) -> f64 {
        arena.slice(self.0)[0]
    }

    /// Overwrite the value.
    pub fn set(&self, arena: &mut ParamArena, value: f64) {
        arena.slice_mut(self.0)[0] = value;
    }

    /// Underlying handle.
    pub fn handle(&self) -> SlotHandle {
        self.0
    }
}

/// A bound, fixed-length run of `f64`s.
///
/// The length is the unit's fan-in and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArraySlot(SlotHandle);

impl ArraySlot {
    pub(crate) fn new(handle: SlotHandle) -> Self {
        Self(handle)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len() as usize
    }

    /// Whether the array has no elements (fan-in 0).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All elements.
    pub fn read<'a>(&self, arena: &'a ParamArena) -> &'a [f64] {
        arena.slice(self.0)
    }

    /// All elements, mutably.
    pub fn write<'a>(&self, arena: &'a mut ParamArena) -> &'a mut [f64] {
        arena.slice_mut(self.0)
    }

    /// Element `i`, or `None` if out of range.
    pub fn get(&self, arena: &ParamArena, i: usize) -> Option<f64> {
        self.read(arena).get(i).copied()
    }

    /// Overwrite element `i`. Returns `false` if `i` is out of range.
    pub fn set(&self, arena: &mut ParamArena, i: usize, value: f64) -> bool {
        match self.write(arena).get_mut(i) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Set every element to `value`.
    pub fn fill(&self, arena: &mut ParamArena, value: f64) {
        self.write(arena).fill(value);
    }

    /// Underlying handle.
    pub fn handle(&self) -> SlotHandle {
        self.0
    }
}
