//! The common parameter set and the allocator that binds it.

use neurite_arena::{ArenaError, ParamArena};
use neurite_core::{FieldRole, OptimizerKind, UnitAddr};

use crate::slot::{ArraySlot, ScalarSlot};
use crate::state::OptimizerState;

/// Every field a unit owns: the common parameters and gradient
/// accumulators plus its optimizer state.
///
/// Invariant: `weights`, `delta_weights` and every array in `state` have
/// the same length, the unit's fan-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitParams {
    /// Bias.
    pub bias: ScalarSlot,
    /// Incoming weights.
    pub weights: ArraySlot,
    /// Accumulated bias gradient.
    pub delta_bias: ScalarSlot,
    /// Accumulated weight gradients.
    pub delta_weights: ArraySlot,
    /// Optimizer-specific state.
    pub state: OptimizerState,
}

impl UnitParams {
    /// Fan-in the unit was allocated with.
    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    /// Optimizer kind the unit was allocated for.
    pub fn kind(&self) -> OptimizerKind {
        self.state.kind()
    }

    /// Every scalar slot, in allocation order.
    pub fn scalars(&self) -> Vec<ScalarSlot> {
        let mut out = vec![self.bias, self.delta_bias];
        out.extend(self.state.scalars());
        out
    }

    /// Every array slot, in allocation order.
    pub fn arrays(&self) -> Vec<ArraySlot> {
        let mut out = vec![self.weights, self.delta_weights];
        out.extend(self.state.arrays());
        out
    }

    /// Whether every bound value of this unit is zero.
    pub fn is_zeroed(&self, arena: &ParamArena) -> bool {
        self.scalars().iter().all(|s| s.get(arena) == 0.0)
            && self
                .arrays()
                .iter()
                .all(|a| a.read(arena).iter().all(|&v| v == 0.0))
    }

    /// Zero the gradient accumulators.
    pub fn reset_deltas(&self, arena: &mut ParamArena) {
        self.delta_bias.set(arena, 0.0);
        self.delta_weights.fill(arena, 0.0);
    }
}

/// Bind every field of one unit.
///
/// Fields are bound in the fixed order `bias → weights → deltaBias →
/// deltaWeights → optimizer fields`, and each is zero-initialised by the
/// region. The unit's slots are therefore one contiguous run of
/// `kind.slots_per_unit(fan_in)` elements.
///
/// The whole unit is checked against the region before the first bind, so
/// on error nothing is reserved or recorded.
///
/// # Errors
///
/// - [`ArenaError::ForeignAddress`] if `addr` names another network.
/// - [`ArenaError::AlreadyBound`] if any of the unit's roles already has a
///   slot. A unit is bound exactly once.
/// - [`ArenaError::CapacityExceeded`] if the unit does not fit in what
///   remains.
/// - [`ArenaError::InvalidConfig`] if the unit's size overflows `u32`.
pub fn allocate_params(
    arena: &mut ParamArena,
    addr: UnitAddr,
    fan_in: u32,
    kind: OptimizerKind,
) -> Result<UnitParams, ArenaError> {
    check_unit_fits(arena, addr, fan_in, kind)?;
    let bias = bind_scalar(arena, addr, FieldRole::Bias)?;
    let weights = bind_array(arena, addr, FieldRole::Weights, fan_in)?;
    let delta_bias = bind_scalar(arena, addr, FieldRole::DeltaBias)?;
    let delta_weights = bind_array(arena, addr, FieldRole::DeltaWeights, fan_in)?;
    let state = OptimizerState::bind(arena, addr, fan_in, kind)?;
    tracing::trace!(%addr, fan_in, optimizer = %kind, "bound unit parameters");
    Ok(UnitParams {
        bias,
        weights,
        delta_bias,
        delta_weights,
        state,
    })
}

fn check_unit_fits(
    arena: &ParamArena,
    addr: UnitAddr,
    fan_in: u32,
    kind: OptimizerKind,
) -> Result<(), ArenaError> {
    if addr.network != arena.network() {
        return Err(ArenaError::ForeignAddress {
            expected: arena.network(),
            addr,
        });
    }
    if let Some(role) = kind.roles().into_iter().find(|&r| arena.is_bound(addr, r)) {
        return Err(ArenaError::AlreadyBound { addr, role });
    }
    let slots = kind
        .slots_per_unit(fan_in)
        .ok_or_else(|| ArenaError::InvalidConfig {
            reason: format!("{kind} unit with fan-in {fan_in} overflows u32"),
        })?;
    if slots as usize > arena.remaining() {
        return Err(ArenaError::CapacityExceeded {
            requested: slots as usize,
            remaining: arena.remaining(),
            capacity: arena.capacity(),
        });
    }
    Ok(())
}

pub(crate) fn bind_scalar(
    arena: &mut ParamArena,
    addr: UnitAddr,
    role: FieldRole,
) -> Result<ScalarSlot, ArenaError> {
    arena.bind(addr, role, 1).map(ScalarSlot::new)
}

pub(crate) fn bind_array(
    arena: &mut ParamArena,
    addr: UnitAddr,
    role: FieldRole,
    fan_in: u32,
) -> Result<ArraySlot, ArenaError> {
    arena.bind(addr, role, fan_in).map(ArraySlot::new)
}
