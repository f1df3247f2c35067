//! Binding table: `(UnitAddr, FieldRole)` → [`SlotHandle`].
//!
//! The table is the "phone book" of a region. It uses `IndexMap` (not
//! `HashMap`) so iteration follows bind order, which is also offset order.

use indexmap::map::Entry;
use indexmap::IndexMap;
use neurite_core::{FieldRole, UnitAddr};

use crate::error::ArenaError;
use crate::handle::SlotHandle;

/// Maps each bound `(addr, role)` pair to its slot.
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    entries: IndexMap<(UnitAddr, FieldRole), SlotHandle>,
}

impl BindingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new binding.
    ///
    /// Fails with [`ArenaError::AlreadyBound`] if the pair already has a
    /// slot; the existing binding is left untouched.
    pub fn insert(
        &mut self,
        addr: UnitAddr,
        role: FieldRole,
        handle: SlotHandle,
    ) -> Result<(), ArenaError> {
        match self.entries.entry((addr, role)) {
            Entry::Occupied(_) => Err(ArenaError::AlreadyBound { addr, role }),
            Entry::Vacant(slot) => {
                slot.insert(handle);
                Ok(())
            }
        }
    }

    /// Look up a binding.
    pub fn get(&self, addr: UnitAddr, role: FieldRole) -> Option<SlotHandle> {
        self.entries.get(&(addr, role)).copied()
    }

    /// Whether the pair is bound.
    pub fn contains(&self, addr: UnitAddr, role: FieldRole) -> bool {
        self.entries.contains_key(&(addr, role))
    }

    /// Roles bound for one unit, in bind order.
    ///
    /// Scans the whole table: O(total bindings). Where the unit's
    /// [`OptimizerKind`](neurite_core::OptimizerKind) is known, checking its
    /// `roles()` with [`contains`](Self::contains) is O(roles).
    pub fn roles_of(&self, addr: UnitAddr) -> impl Iterator<Item = FieldRole> + '_ {
        self.entries
            .keys()
            .filter(move |(a, _)| *a == addr)
            .map(|&(_, role)| role)
    }

    /// Iterate over all bindings in bind order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitAddr, FieldRole, SlotHandle)> + '_ {
        self.entries
            .iter()
            .map(|(&(addr, role), &handle)| (addr, role, handle))
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
