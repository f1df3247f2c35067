//! The per-network parameter region and its binding service.

use neurite_core::traits::{ParamReader, ParamWriter};
use neurite_core::{FieldRole, NetworkId, UnitAddr};

use crate::binding::BindingTable;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::SlotHandle;
use crate::segment::Segment;

/// One network's shared numeric region.
///
/// Owned by the network. Units hold [`SlotHandle`]s into it and resolve
/// them through [`slice`](Self::slice) / [`slice_mut`](Self::slice_mut);
/// an execution engine can use the address-path
/// [`ParamReader`]/[`ParamWriter`] impls or the whole-region view from
/// [`region`](Self::region) instead.
#[derive(Debug)]
pub struct ParamArena {
    network: NetworkId,
    segment: Segment,
    bindings: BindingTable,
}

impl ParamArena {
    /// Allocate a zero-filled region of `config.capacity` elements.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            network: config.network,
            segment: Segment::new(config.capacity),
            bindings: BindingTable::new(),
        })
    }

    /// Network this region belongs to.
    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// Reserve `len` zeroed elements for `role` on the unit at `addr`.
    ///
    /// The slot starts where the previous bind ended. On error nothing is
    /// reserved or recorded.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::ForeignAddress`] if `addr` names another network.
    /// - [`ArenaError::AlreadyBound`] if the pair already has a slot.
    /// - [`ArenaError::CapacityExceeded`] if fewer than `len` elements remain.
    pub fn bind(
        &mut self,
        addr: UnitAddr,
        role: FieldRole,
        len: u32,
    ) -> Result<SlotHandle, ArenaError> {
        if addr.network != self.network {
            return Err(ArenaError::ForeignAddress {
                expected: self.network,
                addr,
            });
        }
        if self.bindings.contains(addr, role) {
            return Err(ArenaError::AlreadyBound { addr, role });
        }
        let remaining = self.segment.remaining();
        let capacity = self.segment.capacity();
        let (offset, _slots) =
            self.segment
                .alloc(len)
                .ok_or(ArenaError::CapacityExceeded {
                    requested: len as usize,
                    remaining,
                    capacity,
                })?;
        let handle = SlotHandle::new(offset, len);
        self.bindings.insert(addr, role, handle)?;
        Ok(handle)
    }

    /// Resolve a handle to its elements.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this region.
    pub fn slice(&self, handle: SlotHandle) -> &[f64] {
        self.segment.slice(handle.range())
    }

    /// Resolve a handle to its elements, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this region.
    pub fn slice_mut(&mut self, handle: SlotHandle) -> &mut [f64] {
        self.segment.slice_mut(handle.range())
    }

    /// Handle bound to `role` on the unit at `addr`, if any.
    pub fn handle(&self, addr: UnitAddr, role: FieldRole) -> Option<SlotHandle> {
        self.bindings.get(addr, role)
    }

    /// Element offset of `role` on the unit at `addr`, if bound.
    pub fn offset_of(&self, addr: UnitAddr, role: FieldRole) -> Option<u32> {
        self.handle(addr, role).map(|h| h.offset())
    }

    /// Whether `role` is bound on the unit at `addr`.
    pub fn is_bound(&self, addr: UnitAddr, role: FieldRole) -> bool {
        self.bindings.contains(addr, role)
    }

    /// Roles bound for the unit at `addr`, in bind order.
    ///
    /// O(total bindings); see [`BindingTable::roles_of`].
    pub fn roles_of(&self, addr: UnitAddr) -> impl Iterator<Item = FieldRole> + '_ {
        self.bindings.roles_of(addr)
    }

    /// The binding table, in bind order.
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Zero every bound slot whose role satisfies `pred`.
    ///
    /// Returns the number of elements cleared.
    pub fn zero_roles<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(FieldRole) -> bool,
    {
        let mut cleared = 0;
        for (_, role, handle) in self.bindings.iter() {
            if pred(role) {
                self.segment.slice_mut(handle.range()).fill(0.0);
                cleared += handle.len() as usize;
            }
        }
        cleared
    }

    /// Every bound element in layout order.
    pub fn region(&self) -> &[f64] {
        self.segment.allocated()
    }

    /// Every bound element in layout order, mutably.
    pub fn region_mut(&mut self) -> &mut [f64] {
        self.segment.allocated_mut()
    }

    /// Elements bound so far.
    pub fn used(&self) -> usize {
        self.segment.used()
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.segment.capacity()
    }

    /// Elements still free.
    pub fn remaining(&self) -> usize {
        self.segment.remaining()
    }

    /// Number of bound fields.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Memory held by the region in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.segment.memory_bytes()
    }
}

impl ParamReader for ParamArena {
    fn read(&self, addr: UnitAddr, role: FieldRole) -> Option<&[f64]> {
        let handle = self.bindings.get(addr, role)?;
        Some(self.segment.slice(handle.range()))
    }
}

impl ParamWriter for ParamArena {
    fn write(&mut self, addr: UnitAddr, role: FieldRole) -> Option<&mut [f64]> {
        let handle = self.bindings.get(addr, role)?;
        Some(self.segment.slice_mut(handle.range()))
    }
}
