//! Address-path access to bound parameter slots.

use crate::id::UnitAddr;
use crate::role::FieldRole;

/// Read-only access to bound fields by address path.
///
/// This is how an execution engine reaches parameters without holding the
/// unit's typed bindings. Scalar roles resolve to slices of length one.
pub trait ParamReader {
    /// Read the slots bound to `role` on the unit at `addr`.
    ///
    /// Returns `None` if nothing is bound at that address.
    fn read(&self, addr: UnitAddr, role: FieldRole) -> Option<&[f64]>;
}

/// Mutable access to bound fields by address path.
pub trait ParamWriter {
    /// Get a mutable slice over the slots bound to `role` on the unit at
    /// `addr`.
    ///
    /// Returns `None` if nothing is bound at that address.
    fn write(&mut self, addr: UnitAddr, role: FieldRole) -> Option<&mut [f64]>;
}
