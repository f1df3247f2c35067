//! Arena configuration parameters.

use neurite_core::{NetworkId, OptimizerKind};

use crate::error::ArenaError;
use crate::plan::plan_capacity;

/// Configuration for a network's parameter region.
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Network that owns the region. Binds for any other network are
    /// rejected.
    pub network: NetworkId,

    /// Size of the region in f64 elements.
    ///
    /// The region is allocated to this size up front and never grows.
    pub capacity: u32,
}

impl ArenaConfig {
    /// Create a config with an explicit capacity.
    pub fn new(network: NetworkId, capacity: u32) -> Self {
        Self { network, capacity }
    }

    /// Create a config sized exactly for the given units.
    ///
    /// `units` yields one `(fan_in, kind)` pair per unit that will be bound.
    pub fn planned<I>(network: NetworkId, units: I) -> Result<Self, ArenaError>
    where
        I: IntoIterator<Item = (u32, OptimizerKind)>,
    {
        Ok(Self::new(network, plan_capacity(units)?))
    }

    /// Check that the region can actually be allocated on this target.
    pub fn validate(&self) -> Result<(), ArenaError> {
        (self.capacity as usize)
            .checked_mul(std::mem::size_of::<f64>())
            .ok_or_else(|| ArenaError::InvalidConfig {
                reason: format!(
                    "capacity of {} elements overflows the address space",
                    self.capacity
                ),
            })?;
        Ok(())
    }

    /// Size of the region in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.capacity as usize * std::mem::size_of::<f64>()
    }
}
