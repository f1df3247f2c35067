//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use neurite_core::{FieldRole, NetworkId, UnitAddr};

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The region does not have room for the requested slots.
    CapacityExceeded {
        /// Number of f64 elements requested.
        requested: usize,
        /// Elements still free when the request was made.
        remaining: usize,
        /// Total capacity of the region in elements.
        capacity: usize,
    },
    /// The `(addr, role)` pair already has a slot. Units are bound exactly
    /// once.
    AlreadyBound {
        /// Address of the unit.
        addr: UnitAddr,
        /// Role that was bound twice.
        role: FieldRole,
    },
    /// The address names a different network than the one owning this
    /// region.
    ForeignAddress {
        /// Network that owns the region.
        expected: NetworkId,
        /// Address that was rejected.
        addr: UnitAddr,
    },
    /// Configuration or capacity plan is invalid.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} elements, \
                     {remaining} of {capacity} remaining"
                )
            }
            Self::AlreadyBound { addr, role } => {
                write!(f, "field '{role}' of unit {addr} is already bound")
            }
            Self::ForeignAddress { expected, addr } => {
                write!(f, "unit {addr} does not belong to network {expected}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}
