//! Optimizer kinds and the field roles each one requires.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::UnknownOptimizer;
use crate::role::FieldRole;

/// Ordered role list for one unit. Inline for every kind (max 8 roles).
pub type RoleList = SmallVec<[FieldRole; 8]>;

/// The gradient-descent update rule a unit is built for.
///
/// Chosen once when the unit is allocated and never changed. The kind
/// decides which auxiliary state slots the unit owns; the arithmetic of the
/// update itself lives with the execution engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OptimizerKind {
    /// Plain gradient descent. No auxiliary state.
    #[default]
    Plain,
    /// Per-parameter adaptive gains.
    Gain,
    /// AdaGrad: accumulated squared-gradient cache.
    AdaGrad,
    /// RMSProp: decaying squared-gradient cache.
    RmsProp,
    /// AdaDelta: gradient cache plus update cache.
    AdaDelta,
    /// Adam: first and second moment estimates.
    Adam,
    /// Classical momentum, keeping its velocity in the cache slots.
    Momentum,
}

impl OptimizerKind {
    /// Every kind, in declaration order.
    pub const ALL: [OptimizerKind; 7] = [
        Self::Plain,
        Self::Gain,
        Self::AdaGrad,
        Self::RmsProp,
        Self::AdaDelta,
        Self::Adam,
        Self::Momentum,
    ];

    /// Roles owned by every unit regardless of kind, in allocation order.
    pub const COMMON_ROLES: [FieldRole; 4] = [
        FieldRole::Bias,
        FieldRole::Weights,
        FieldRole::DeltaBias,
        FieldRole::DeltaWeights,
    ];

    /// Optimizer-specific roles, in allocation order.
    pub fn state_roles(self) -> &'static [FieldRole] {
        match self {
            Self::Plain => &[],
            Self::Gain => &[FieldRole::BiasGain, FieldRole::WeightGain],
            Self::AdaGrad | Self::RmsProp | Self::Momentum => {
                &[FieldRole::BiasCache, FieldRole::WeightsCache]
            }
            Self::AdaDelta => &[
                FieldRole::BiasCache,
                FieldRole::WeightsCache,
                FieldRole::AdadeltaBiasCache,
                FieldRole::AdadeltaCache,
            ],
            Self::Adam => &[FieldRole::M, FieldRole::V],
        }
    }

    /// Full role list of a unit of this kind, in allocation order.
    pub fn roles(self) -> RoleList {
        let mut roles = RoleList::new();
        roles.extend_from_slice(&Self::COMMON_ROLES);
        roles.extend_from_slice(self.state_roles());
        roles
    }

    /// Whether a unit of this kind owns a slot for `role`.
    pub fn has_role(self, role: FieldRole) -> bool {
        Self::COMMON_ROLES.contains(&role) || self.state_roles().contains(&role)
    }

    /// Number of f64 slots one unit of this kind occupies.
    ///
    /// Returns `None` if the count overflows `u32`.
    pub fn slots_per_unit(self, fan_in: u32) -> Option<u32> {
        self.roles()
            .iter()
            .try_fold(0u32, |acc, role| acc.checked_add(role.len_for(fan_in)))
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Gain => "gain",
            Self::AdaGrad => "adagrad",
            Self::RmsProp => "rmsprop",
            Self::AdaDelta => "adadelta",
            Self::Adam => "adam",
            Self::Momentum => "momentum",
        }
    }

    /// Parse a name, falling back to [`OptimizerKind::Plain`] for anything
    /// unrecognised.
    ///
    /// A unit built from an unknown name owns only the common fields. The
    /// fallback is logged at `warn` level so a misspelt configuration is
    /// visible.
    pub fn from_name_lenient(name: &str) -> Self {
        match name.parse() {
            Ok(kind) => kind,
            Err(UnknownOptimizer { name }) => {
                tracing::warn!(
                    optimizer = %name,
                    "unrecognised optimizer kind, allocating plain state"
                );
                Self::Plain
            }
        }
    }
}

impl FromStr for OptimizerKind {
    type Err = UnknownOptimizer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "vanilla" => Ok(Self::Plain),
            "gain" => Ok(Self::Gain),
            "adagrad" => Ok(Self::AdaGrad),
            "rmsprop" => Ok(Self::RmsProp),
            "adadelta" => Ok(Self::AdaDelta),
            "adam" => Ok(Self::Adam),
            "momentum" => Ok(Self::Momentum),
            _ => Err(UnknownOptimizer {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
