//! Seeded weight initialisation.
//!
//! Binding always leaves weights at zero. Networks that train from random
//! weights call [`Network::initialize_weights`](crate::Network::initialize_weights)
//! afterwards; the draw is deterministic for a given seed.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;

/// How weights are filled after binding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WeightInit {
    /// Leave weights at zero.
    #[default]
    Zeros,
    /// Uniform in `[-limit, limit]`.
    Uniform {
        /// Half-width of the range. Must be finite and non-negative.
        limit: f64,
    },
    /// Glorot/Xavier uniform: `limit = sqrt(6 / (fan_in + fan_out))`.
    Xavier,
}

impl WeightInit {
    /// Check the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Uniform { limit } if !limit.is_finite() || limit < 0.0 => {
                Err(ConfigError::InvalidWeightInit {
                    reason: format!("uniform limit must be finite and >= 0, got {limit}"),
                })
            }
            _ => Ok(()),
        }
    }

    /// Half-width of the sampling range for a unit with the given
    /// connectivity. Zero means "leave at zero".
    pub fn limit(&self, fan_in: u32, fan_out: u32) -> f64 {
        match *self {
            Self::Zeros => 0.0,
            Self::Uniform { limit } => limit,
            Self::Xavier => {
                let n = fan_in as f64 + fan_out as f64;
                if n == 0.0 {
                    0.0
                } else {
                    (6.0 / n).sqrt()
                }
            }
        }
    }

    /// Fill `weights` with samples in `[-limit, limit]`.
    pub(crate) fn fill(&self, rng: &mut ChaCha8Rng, weights: &mut [f64], fan_in: u32, fan_out: u32) {
        let limit = self.limit(fan_in, fan_out);
        if limit == 0.0 {
            weights.fill(0.0);
            return;
        }
        for w in weights.iter_mut() {
            *w = (rng.random::<f64>() * 2.0 - 1.0) * limit;
        }
    }
}

/// Deterministic RNG for weight initialisation.
pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
