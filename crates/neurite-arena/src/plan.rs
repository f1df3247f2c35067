//! Capacity planning for parameter regions.

use neurite_core::OptimizerKind;

use crate::error::ArenaError;

/// Total number of f64 slots needed to bind every unit in `units`.
///
/// Each item is the `(fan_in, kind)` of one unit. Fails with
/// [`ArenaError::InvalidConfig`] if the total does not fit in `u32`.
pub fn plan_capacity<I>(units: I) -> Result<u32, ArenaError>
where
    I: IntoIterator<Item = (u32, OptimizerKind)>,
{
    units.into_iter().try_fold(0u32, |total, (fan_in, kind)| {
        kind.slots_per_unit(fan_in)
            .and_then(|n| total.checked_add(n))
            .ok_or_else(|| ArenaError::InvalidConfig {
                reason: format!(
                    "capacity plan overflows u32 at a {kind} unit with fan-in {fan_in}"
                ),
            })
    })
}
