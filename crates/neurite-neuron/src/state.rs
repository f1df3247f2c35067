//! Optimizer-specific state bundles.
//!
//! [`OptimizerState`] has one variant per [`OptimizerKind`]; each variant
//! carries exactly the slots that kind needs, so which fields exist is a
//! matter of the type, not of runtime inspection.

use neurite_arena::{ArenaError, ParamArena};
use neurite_core::{FieldRole, OptimizerKind, RoleList, UnitAddr};

use crate::params::{bind_array, bind_scalar};
use crate::slot::{ArraySlot, ScalarSlot};

/// Per-parameter gains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GainState {
    /// Gain applied to the bias update.
    pub bias_gain: ScalarSlot,
    /// Gain applied to each weight update.
    pub weight_gain: ArraySlot,
}

/// Running gradient cache shared by AdaGrad, RMSProp and momentum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheState {
    /// Bias gradient cache.
    pub bias_cache: ScalarSlot,
    /// Per-weight gradient cache.
    pub weights_cache: ArraySlot,
}

/// AdaDelta's gradient cache plus its update cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdaDeltaState {
    /// Gradient cache, laid out first.
    pub cache: CacheState,
    /// Running bias update cache.
    pub adadelta_bias_cache: ScalarSlot,
    /// Running per-weight update cache.
    pub adadelta_cache: ArraySlot,
}

/// Adam moment estimates. Adam keeps one pair per unit, not per weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdamState {
    /// First-moment estimate.
    pub m: ScalarSlot,
    /// Second-moment estimate.
    pub v: ScalarSlot,
}

/// Optimizer state of one unit. Fixed at allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizerState {
    /// No auxiliary state.
    Plain,
    /// Gains.
    Gain(GainState),
    /// AdaGrad cache.
    AdaGrad(CacheState),
    /// RMSProp cache.
    RmsProp(CacheState),
    /// AdaDelta caches.
    AdaDelta(AdaDeltaState),
    /// Adam moments.
    Adam(AdamState),
    /// Momentum velocity, held in cache slots.
    Momentum(CacheState),
}

impl OptimizerState {
    /// Bind the state fields for `kind`, in allocation order.
    pub(crate) fn bind(
        arena: &mut ParamArena,
        addr: UnitAddr,
        fan_in: u32,
        kind: OptimizerKind,
    ) -> Result<Self, ArenaError> {
        Ok(match kind {
            OptimizerKind::Plain => Self::Plain,
            OptimizerKind::Gain => Self::Gain(GainState {
                bias_gain: bind_scalar(arena, addr, FieldRole::BiasGain)?,
                weight_gain: bind_array(arena, addr, FieldRole::WeightGain, fan_in)?,
            }),
            OptimizerKind::AdaGrad => Self::AdaGrad(CacheState::bind(arena, addr, fan_in)?),
            OptimizerKind::RmsProp => Self::RmsProp(CacheState::bind(arena, addr, fan_in)?),
            OptimizerKind::Momentum => Self::Momentum(CacheState::bind(arena, addr, fan_in)?),
            OptimizerKind::AdaDelta => {
                let cache = CacheState::bind(arena, addr, fan_in)?;
                Self::AdaDelta(AdaDeltaState {
                    cache,
                    adadelta_bias_cache: bind_scalar(arena, addr, FieldRole::AdadeltaBiasCache)?,
                    adadelta_cache: bind_array(arena, addr, FieldRole::AdadeltaCache, fan_in)?,
                })
            }
            OptimizerKind::Adam => Self::Adam(AdamState {
                m: bind_scalar(arena, addr, FieldRole::M)?,
                v: bind_scalar(arena, addr, FieldRole::V)?,
            }),
        })
    }

    /// The kind this state was built for.
    pub fn kind(&self) -> OptimizerKind {
        match self {
            Self::Plain => OptimizerKind::Plain,
            Self::Gain(_) => OptimizerKind::Gain,
            Self::AdaGrad(_) => OptimizerKind::AdaGrad,
            Self::RmsProp(_) => OptimizerKind::RmsProp,
            Self::AdaDelta(_) => OptimizerKind::AdaDelta,
            Self::Adam(_) => OptimizerKind::Adam,
            Self::Momentum(_) => OptimizerKind::Momentum,
        }
    }

    /// Roles of the state fields, in allocation order.
    pub fn roles(&self) -> &'static [FieldRole] {
        self.kind().state_roles()
    }

    /// Full role list of a unit carrying this state.
    pub fn unit_roles(&self) -> RoleList {
        self.kind().roles()
    }

    /// Gain state, if this is a gain unit.
    pub fn gain(&self) -> Option<&GainState> {
        match self {
            Self::Gain(g) => Some(g),
            _ => None,
        }
    }

    /// Gradient cache, for AdaGrad, RMSProp, momentum and AdaDelta units.
    pub fn cache(&self) -> Option<&CacheState> {
        match self {
            Self::AdaGrad(c) | Self::RmsProp(c) | Self::Momentum(c) => Some(c),
            Self::AdaDelta(d) => Some(&d.cache),
            _ => None,
        }
    }

    /// AdaDelta state, if this is an AdaDelta unit.
    pub fn adadelta(&self) -> Option<&AdaDeltaState> {
        match self {
            Self::AdaDelta(d) => Some(d),
            _ => None,
        }
    }

    /// Adam state, if this is an Adam unit.
    pub fn adam(&self) -> Option<&AdamState> {
        match self {
            Self::Adam(a) => Some(a),
            _ => None,
        }
    }

    /// `biasGain` slot, if present.
    pub fn bias_gain(&self) -> Option<ScalarSlot> {
        self.gain().map(|g| g.bias_gain)
    }

    /// `weightGain` slot, if present.
    pub fn weight_gain(&self) -> Option<ArraySlot> {
        self.gain().map(|g| g.weight_gain)
    }

    /// `biasCache` slot, if present.
    pub fn bias_cache(&self) -> Option<ScalarSlot> {
        self.cache().map(|c| c.bias_cache)
    }

    /// `weightsCache` slot, if present.
    pub fn weights_cache(&self) -> Option<ArraySlot> {
        self.cache().map(|c| c.weights_cache)
    }

    /// `adadeltaBiasCache` slot, if present.
    pub fn adadelta_bias_cache(&self) -> Option<ScalarSlot> {
        self.adadelta().map(|d| d.adadelta_bias_cache)
    }

    /// `adadeltaCache` slot, if present.
    pub fn adadelta_cache(&self) -> Option<ArraySlot> {
        self.adadelta().map(|d| d.adadelta_cache)
    }

    /// Adam `m` slot, if present.
    pub fn m(&self) -> Option<ScalarSlot> {
        self.adam().map(|a| a.m)
    }

    /// Adam `v` slot, if present.
    pub fn v(&self) -> Option<ScalarSlot> {
        self.adam().map(|a| a.v)
    }

    /// Scalar state slots in allocation order.
    pub fn scalars(&self) -> Vec<ScalarSlot> {
        match self {
            Self::Plain => Vec::new(),
            Self::Gain(g) => vec![g.bias_gain],
            Self::AdaGrad(c) | Self::RmsProp(c) | Self::Momentum(c) => vec![c.bias_cache],
            Self::AdaDelta(d) => vec![d.cache.bias_cache, d.adadelta_bias_cache],
            Self::Adam(a) => vec![a.m, a.v],
        }
    }

    /// Array state slots in allocation order.
    pub fn arrays(&self) -> Vec<ArraySlot> {
        match self {
            Self::Plain | Self::Adam(_) => Vec::new(),
            Self::Gain(g) => vec![g.weight_gain],
            Self::AdaGrad(c) | Self::RmsProp(c) | Self::Momentum(c) => vec![c.weights_cache],
            Self::AdaDelta(d) => vec![d.cache.weights_cache, d.adadelta_cache],
        }
    }
}

impl CacheState {
    fn bind(arena: &mut ParamArena, addr: UnitAddr, fan_in: u32) -> Result<Self, ArenaError> {
        Ok(Self {
            bias_cache: bind_scalar(arena, addr, FieldRole::BiasCache)?,
            weights_cache: bind_array(arena, addr, FieldRole::WeightsCache, fan_in)?,
        })
    }
}
