//! Named roles of the numeric fields a unit can own.

use std::fmt;

/// The role a bound field plays for its unit.
///
/// Common roles (`Bias`, `Weights`, `DeltaBias`, `DeltaWeights`) exist on
/// every unit; the rest depend on the unit's
/// [`OptimizerKind`](crate::OptimizerKind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldRole {
    /// Bias scalar.
    Bias,
    /// Incoming weights, one per fan-in connection.
    Weights,
    /// Accumulated bias gradient.
    DeltaBias,
    /// Accumulated weight gradients.
    DeltaWeights,
    /// Gain applied to bias updates.
    BiasGain,
    /// Per-weight gains.
    WeightGain,
    /// Running bias gradient cache (AdaGrad, RMSProp, AdaDelta, momentum).
    BiasCache,
    /// Running per-weight gradient cache.
    WeightsCache,
    /// AdaDelta's running bias update cache.
    AdadeltaBiasCache,
    /// AdaDelta's running per-weight update cache.
    AdadeltaCache,
    /// Adam first-moment estimate.
    M,
    /// Adam second-moment estimate.
    V,
}

impl FieldRole {
    /// Every role, in canonical allocation order.
    pub const ALL: [FieldRole; 12] = [
        Self::Bias,
        Self::Weights,
        Self::DeltaBias,
        Self::DeltaWeights,
        Self::BiasGain,
        Self::WeightGain,
        Self::BiasCache,
        Self::WeightsCache,
        Self::AdadeltaBiasCache,
        Self::AdadeltaCache,
        Self::M,
        Self::V,
    ];

    /// Whether this role binds one slot per fan-in connection rather than
    /// a single scalar.
    pub fn is_array(self) -> bool {
        matches!(
            self,
            Self::Weights
                | Self::DeltaWeights
                | Self::WeightGain
                | Self::WeightsCache
                | Self::AdadeltaCache
        )
    }

    /// Whether this role accumulates gradients between updates.
    pub fn is_delta(self) -> bool {
        matches!(self, Self::DeltaBias | Self::DeltaWeights)
    }

    /// Whether this role holds a trainable parameter (bias or weights).
    pub fn is_parameter(self) -> bool {
        matches!(self, Self::Bias | Self::Weights)
    }

    /// Number of slots this role occupies for a unit with `fan_in` inputs.
    pub fn len_for(self, fan_in: u32) -> u32 {
        if self.is_array() {
            fan_in
        } else {
            1
        }
    }

    /// Stable field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bias => "bias",
            Self::Weights => "weights",
            Self::DeltaBias => "deltaBias",
            Self::DeltaWeights => "deltaWeights",
            Self::BiasGain => "biasGain",
            Self::WeightGain => "weightGain",
            Self::BiasCache => "biasCache",
            Self::WeightsCache => "weightsCache",
            Self::AdadeltaBiasCache => "adadeltaBiasCache",
            Self::AdadeltaCache => "adadeltaCache",
            Self::M => "m",
            Self::V => "v",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
